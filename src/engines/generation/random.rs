use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform and fitness-proportional draws for initialization, mating and mutation
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Seeded when `seed` is given, from entropy otherwise
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Uniform integer in `[0, bound)`; `bound` must be non-zero
    pub fn uniform_int(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }

    /// Uniform float in `[0, 1)`
    pub fn uniform_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Roulette wheel selection.
    ///
    /// Draws `r` in `[0, 1)` and walks `items` in order, subtracting each
    /// weight until `r` goes negative. Weights are expected to sum to 1.
    /// If rounding keeps `r` from crossing zero the last item is returned,
    /// so the pick is `None` only for an empty slice.
    pub fn weighted_pick<'a, T, F>(&mut self, items: &'a [T], weight: F) -> Option<&'a T>
    where
        F: Fn(&T) -> f64,
    {
        let mut spin = self.uniform_f64();

        for item in items {
            spin -= weight(item);
            if spin < 0.0 {
                return Some(item);
            }
        }

        // Fallback
        let last = items.last();
        if last.is_some() {
            log::warn!("Weighted pick fell through (remaining {:.3e}), using last item", spin);
        }
        last
    }
}
