pub mod codon_table;
pub mod translator;

pub use codon_table::{CodonTable, DEFAULT_AA, DNA_ALPHABET, STOP_SYMBOL};
pub use translator::{translate, Translator};
