use super::evolution_engine::{CancelHandle, EvolutionEngine};
use crate::config::SearchConfig;
use crate::engines::translation::CodonTable;
use crate::error::Result;
use crate::types::{GenerationResult, SearchOutcome, SearchStatus};
use std::sync::Arc;

/// Pull-based view of a running search, one item per completed generation.
///
/// The caller regains control after every generation; a cancellation issued
/// in between is observed before the next population is built.
pub struct Generations<'a> {
    engine: &'a mut EvolutionEngine,
}

impl<'a> Iterator for Generations<'a> {
    type Item = Result<GenerationResult>;

    fn next(&mut self) -> Option<Self::Item> {
        self.engine.step().transpose()
    }
}

impl EvolutionEngine {
    /// Iterates the generations of the run started with `start`
    pub fn generations(&mut self) -> Generations<'_> {
        Generations { engine: self }
    }
}

/// A search that owns its engine
pub struct Search {
    engine: EvolutionEngine,
}

impl Search {
    pub fn cancel_handle(&self) -> CancelHandle {
        self.engine.cancel_handle()
    }

    pub fn cancel(&self) {
        self.engine.cancel_handle().cancel();
    }

    pub fn status(&self) -> SearchStatus {
        self.engine.status()
    }

    pub fn outcome(&self) -> SearchOutcome {
        self.engine.outcome()
    }
}

impl Iterator for Search {
    type Item = Result<GenerationResult>;

    fn next(&mut self) -> Option<Self::Item> {
        self.engine.step().transpose()
    }
}

/// Starts a search over the standard genetic code.
///
/// Fails before any generation runs if `target` or `config` is invalid.
pub fn start_search(target: &str, config: SearchConfig) -> Result<Search> {
    let mut engine = EvolutionEngine::new(config, Arc::new(CodonTable::standard()))?;
    engine.start(target)?;
    Ok(Search { engine })
}
