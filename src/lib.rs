//! Reverse translation of amino-acid sequences by evolutionary search.
//!
//! The genetic code is many-to-one, so a DNA sequence for a given protein is
//! searched for rather than computed: a population of random DNA strings is
//! scored by how many amino acids its translation gets right, and bred
//! generation by generation until one matches.
//!
//! ```no_run
//! use codonsearch::{start_search, SearchConfig};
//!
//! let search = start_search("MKV", SearchConfig::default()).unwrap();
//! for result in search {
//!     let result = result.unwrap();
//!     println!("{} {:.2}", result.generation_number, result.accuracy);
//! }
//! ```

pub mod config;
pub mod engines;
pub mod error;
pub mod services;
pub mod types;

pub use config::SearchConfig;
pub use engines::generation::{start_search, CancelHandle, EvolutionEngine, Search};
pub use engines::translation::CodonTable;
pub use error::{CodonsearchError, Result};
pub use services::SearchRunner;
pub use types::{BestCandidate, CandidateView, GenerationResult, SearchOutcome, SearchStatus};

/// Translates `dna` with the standard genetic code
pub fn translate(dna: &str) -> Result<String> {
    engines::translation::translate(dna, &CodonTable::standard())
}
