use super::candidate::Candidate;
use super::random::RandomSource;
use crate::error::Result;
use crate::types::CandidateView;

/// Candidates of a single generation
#[derive(Debug, Clone, Default)]
pub struct Population {
    candidates: Vec<Candidate>,
}

impl Population {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// Scores every candidate against `target` and normalizes fitness.
    ///
    /// Fitness is `score / total` when any candidate scores, and
    /// `1 / len` for everyone otherwise. Returns this generation's accuracy,
    /// `max_score / target_len`.
    pub fn evaluate(&mut self, target: &str) -> Result<f64> {
        let mut total = 0usize;
        let mut max_score = 0usize;
        for candidate in &mut self.candidates {
            let score = candidate.score_against(target)?;
            total += score;
            max_score = max_score.max(score);
        }

        let uniform = 1.0 / self.candidates.len().max(1) as f64;
        for candidate in &mut self.candidates {
            let fitness = if total > 0 {
                candidate.score() as f64 / total as f64
            } else {
                uniform
            };
            candidate.set_fitness(fitness);
        }

        let target_len = target.chars().count();
        if target_len == 0 {
            return Ok(0.0);
        }
        Ok(max_score as f64 / target_len as f64)
    }

    /// Highest-scoring candidate; the earliest one wins ties
    pub fn best(&self) -> Option<&Candidate> {
        self.candidates.iter().fold(None, |best: Option<&Candidate>, candidate| match best {
            Some(b) if b.score() >= candidate.score() => Some(b),
            _ => Some(candidate),
        })
    }

    /// Fitness-proportional parent selection
    pub fn select_parent(&self, random: &mut RandomSource) -> Option<&Candidate> {
        random.weighted_pick(&self.candidates, Candidate::fitness)
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn views(&self) -> Vec<CandidateView> {
        self.candidates.iter().map(Candidate::view).collect()
    }
}
