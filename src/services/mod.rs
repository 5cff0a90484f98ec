pub mod search_runner;

pub use search_runner::{SearchRunResult, SearchRunner};
