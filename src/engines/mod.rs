pub mod translation;
pub mod generation;
