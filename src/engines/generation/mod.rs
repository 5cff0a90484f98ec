pub mod random;
pub mod candidate;
pub mod population;
pub mod operators;
pub mod evolution_engine;
pub mod search;
pub mod progress;

pub use candidate::Candidate;
pub use population::Population;
pub use random::RandomSource;
pub use evolution_engine::{normalize_target, CancelHandle, EvolutionEngine, ProgressCallback};
pub use search::{start_search, Generations, Search};
pub use progress::{ChannelProgressCallback, ConsoleProgressCallback, SearchEvent};
