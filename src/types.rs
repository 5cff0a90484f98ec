use serde::{Deserialize, Serialize};

/// Lifecycle of a search run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStatus {
    Idle,
    Running,
    Converged,              // accuracy >= 1 - epsilon
    Aborted,                // cancelled at a generation boundary
    GenerationLimitReached, // max_generations completed
}

impl SearchStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SearchStatus::Converged | SearchStatus::Aborted | SearchStatus::GenerationLimitReached
        )
    }
}

/// Snapshot of one candidate as seen by observers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateView {
    pub dna: String,
    pub aa: String,
    pub score: usize,
}

/// Best candidate found so far
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestCandidate {
    pub dna: String,
    pub aa: String,
}

/// Value emitted once per completed generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub generation_number: usize,
    pub accuracy: f64,
    pub best_candidate: BestCandidate,
    pub population: Vec<CandidateView>,
}

/// Final state of a search run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub status: SearchStatus,
    pub generations: usize,
    pub final_result: Option<GenerationResult>,
}
