use crate::config::{ConfigSection, SearchConfig};
use crate::engines::generation::{
    candidate::Candidate,
    operators::{mate, mutate, random_dna},
    population::Population,
    random::RandomSource,
};
use crate::engines::translation::CodonTable;
use crate::error::{CodonsearchError, Result};
use crate::types::{GenerationResult, SearchOutcome, SearchStatus};
use std::sync::{Arc, Mutex};

pub trait ProgressCallback: Send {
    fn on_generation_complete(&mut self, result: &GenerationResult);
    fn on_search_finished(&mut self, _status: SearchStatus, _generations: usize) {}
}

impl<C: ProgressCallback + ?Sized> ProgressCallback for &mut C {
    fn on_generation_complete(&mut self, result: &GenerationResult) {
        (**self).on_generation_complete(result);
    }

    fn on_search_finished(&mut self, status: SearchStatus, generations: usize) {
        (**self).on_search_finished(status, generations);
    }
}

/// Cooperative cancellation flag, checked once per generation boundary
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    flag: Arc<Mutex<bool>>,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        if let Ok(mut flag) = self.flag.lock() {
            *flag = true;
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.lock().map(|f| *f).unwrap_or(false)
    }

    fn reset(&self) {
        if let Ok(mut flag) = self.flag.lock() {
            *flag = false;
        }
    }
}

/// Per-run state, discarded when the next run starts
struct SearchState {
    target: String,
    generation: usize,
    population: Option<Population>,
    best: Option<Candidate>,
    accuracy: f64,
    last_result: Option<GenerationResult>,
}

pub struct EvolutionEngine {
    config: SearchConfig,
    table: Arc<CodonTable>,
    random: RandomSource,
    status: SearchStatus,
    state: Option<SearchState>,
    cancel: CancelHandle,
}

impl EvolutionEngine {
    pub fn new(config: SearchConfig, table: Arc<CodonTable>) -> Result<Self> {
        config.validate()?;
        let random = RandomSource::new(config.seed);

        Ok(Self {
            config,
            table,
            random,
            status: SearchStatus::Idle,
            state: None,
            cancel: CancelHandle::new(),
        })
    }

    /// Validates `target` and resets the engine for a new run.
    ///
    /// Clears any cancellation requested during a previous run.
    pub fn start(&mut self, target: &str) -> Result<()> {
        let target = normalize_target(target)?;

        log::info!(
            "Starting search: target length {}, population {}, mutation rate {}, max generations {}, epsilon {}",
            target.chars().count(),
            self.config.population_size,
            self.config.mutation_rate,
            self.config.max_generations,
            self.config.epsilon,
        );

        self.cancel.reset();
        self.state = Some(SearchState {
            target,
            generation: 1,
            population: None,
            best: None,
            accuracy: 0.0,
            last_result: None,
        });
        self.status = SearchStatus::Running;
        Ok(())
    }

    /// Runs one generation.
    ///
    /// Returns `Ok(None)` once the run is in a terminal state, including when
    /// a cancellation is observed at this boundary. An error discards the run
    /// and puts the engine back to `Idle`.
    pub fn step(&mut self) -> Result<Option<GenerationResult>> {
        if self.status != SearchStatus::Running {
            return Ok(None);
        }

        if self.cancel.is_cancelled() {
            self.finish(SearchStatus::Aborted);
            return Ok(None);
        }

        match self.advance() {
            Ok(result) => Ok(Some(result)),
            Err(e) => {
                log::error!("Search failed: {}", e);
                self.status = SearchStatus::Idle;
                self.state = None;
                Err(e)
            }
        }
    }

    /// Starts a run and drives it to a terminal state
    pub fn run<C: ProgressCallback>(&mut self, target: &str, callback: C) -> Result<SearchOutcome> {
        self.start(target)?;
        self.drive(callback)
    }

    /// Drives an already started run to a terminal state
    pub fn drive<C: ProgressCallback>(&mut self, mut callback: C) -> Result<SearchOutcome> {
        while let Some(result) = self.step()? {
            callback.on_generation_complete(&result);
        }

        let outcome = self.outcome();
        callback.on_search_finished(outcome.status, outcome.generations);
        Ok(outcome)
    }

    fn advance(&mut self) -> Result<GenerationResult> {
        let config = &self.config;
        let table = self.table.as_ref();
        let state = self
            .state
            .as_mut()
            .ok_or_else(|| CodonsearchError::InvariantViolation("no active search".to_string()))?;

        let codons = state.target.chars().count();
        let mut population = match &state.population {
            None => initial_population(codons, config.population_size, table, &mut self.random)?,
            Some(previous) => next_population(previous, config, table, &mut self.random)?,
        };

        let generation_accuracy = population.evaluate(&state.target)?;
        state.accuracy = state.accuracy.max(generation_accuracy);

        if let Some(best) = population.best() {
            let improved = state
                .best
                .as_ref()
                .map_or(true, |current| best.score() > current.score());
            if improved {
                state.best = Some(best.clone());
            }
        }
        let best = state
            .best
            .as_ref()
            .ok_or_else(|| CodonsearchError::InvariantViolation("empty population".to_string()))?;

        let result = GenerationResult {
            generation_number: state.generation,
            accuracy: state.accuracy,
            best_candidate: best.to_best(),
            population: population.views(),
        };
        log::debug!(
            "Generation {}: accuracy {:.4}, best score {}/{}",
            state.generation,
            state.accuracy,
            best.score(),
            codons
        );

        state.population = Some(population);
        state.last_result = Some(result.clone());

        let terminal = if self.cancel.is_cancelled() {
            Some(SearchStatus::Aborted)
        } else if state.accuracy >= 1.0 - config.epsilon {
            Some(SearchStatus::Converged)
        } else if state.generation >= config.max_generations {
            Some(SearchStatus::GenerationLimitReached)
        } else {
            state.generation += 1;
            None
        };

        if let Some(status) = terminal {
            self.finish(status);
        }
        Ok(result)
    }

    fn finish(&mut self, status: SearchStatus) {
        self.status = status;
        let outcome = self.outcome();
        log::info!(
            "Search finished: {:?} after {} generations (accuracy {:.4})",
            status,
            outcome.generations,
            outcome.final_result.as_ref().map(|r| r.accuracy).unwrap_or(0.0)
        );
    }

    /// Final state reflecting the last completed generation
    pub fn outcome(&self) -> SearchOutcome {
        let final_result = self.state.as_ref().and_then(|s| s.last_result.clone());
        SearchOutcome {
            status: self.status,
            generations: final_result.as_ref().map_or(0, |r| r.generation_number),
            final_result,
        }
    }

    /// Puts a finished engine back to `Idle`
    pub fn reset(&mut self) {
        self.status = SearchStatus::Idle;
        self.state = None;
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }
}

/// Trims and uppercases a target amino-acid sequence.
///
/// Rejects empty or whitespace-only input. Also rejects any symbol other
/// than an ASCII letter or `*`, including interior whitespace and digits,
/// which is stricter than the empty-target check alone.
pub fn normalize_target(target: &str) -> Result<String> {
    let target = target.trim();
    if target.is_empty() {
        return Err(CodonsearchError::Validation(
            "Target sequence must not be empty".to_string(),
        ));
    }
    if let Some(bad) = target.chars().find(|c| !(c.is_ascii_alphabetic() || *c == '*')) {
        return Err(CodonsearchError::Validation(format!(
            "Invalid amino acid symbol {:?}",
            bad
        )));
    }
    Ok(target.to_ascii_uppercase())
}

fn initial_population(
    codons: usize,
    size: usize,
    table: &CodonTable,
    random: &mut RandomSource,
) -> Result<Population> {
    let candidates = (0..size)
        .map(|_| Candidate::new(random_dna(codons, table, random), table))
        .collect::<Result<Vec<_>>>()?;
    Ok(Population::new(candidates))
}

fn next_population(
    previous: &Population,
    config: &SearchConfig,
    table: &CodonTable,
    random: &mut RandomSource,
) -> Result<Population> {
    let mut offspring = Vec::with_capacity(config.population_size);

    while offspring.len() < config.population_size {
        let parent_a = previous
            .select_parent(random)
            .ok_or_else(|| CodonsearchError::InvariantViolation("empty population".to_string()))?;
        let parent_b = previous
            .select_parent(random)
            .ok_or_else(|| CodonsearchError::InvariantViolation("empty population".to_string()))?;

        let child = mate(parent_a.dna(), parent_b.dna(), random)?;
        let child = mutate(&child, config.mutation_rate, table, random)?;
        offspring.push(Candidate::new(child, table)?);
    }

    Ok(Population::new(offspring))
}
