use super::codon_table::{CodonTable, DEFAULT_AA};
use crate::error::{CodonsearchError, Result};

/// Translates DNA into an amino-acid string.
///
/// Input is case-insensitive. Every triplet the table does not know
/// (including ones containing non-ACGT symbols) becomes `X`.
pub fn translate(dna: &str, table: &CodonTable) -> Result<String> {
    let symbols: Vec<char> = dna.chars().map(|c| c.to_ascii_uppercase()).collect();
    if symbols.len() % 3 != 0 {
        return Err(CodonsearchError::InvalidLength { length: symbols.len() });
    }

    Ok(symbols
        .chunks_exact(3)
        .map(|triplet| lookup(triplet, table))
        .collect())
}

fn lookup(triplet: &[char], table: &CodonTable) -> char {
    let mut key = [0u8; 3];
    for (slot, symbol) in key.iter_mut().zip(triplet) {
        if !symbol.is_ascii() {
            return DEFAULT_AA;
        }
        *slot = *symbol as u8;
    }
    table.get(key).unwrap_or(DEFAULT_AA)
}

/// Stateless translator bound to one codon table
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    table: &'a CodonTable,
}

impl<'a> Translator<'a> {
    pub fn new(table: &'a CodonTable) -> Self {
        Self { table }
    }

    pub fn translate(&self, dna: &str) -> Result<String> {
        translate(dna, self.table)
    }
}
