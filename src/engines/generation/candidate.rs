use crate::engines::translation::{translate, CodonTable};
use crate::error::{CodonsearchError, Result};
use crate::types::{BestCandidate, CandidateView};

/// One DNA hypothesis.
///
/// `aa` is derived from `dna` at construction and never set on its own.
/// `score` and `fitness` are only meaningful after the population holding
/// this candidate has been evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    dna: String,
    aa: String,
    score: usize,
    fitness: f64,
}

impl Candidate {
    pub fn new(dna: impl Into<String>, table: &CodonTable) -> Result<Self> {
        let dna = dna.into().to_ascii_uppercase();
        let aa = translate(&dna, table)?;
        Ok(Self {
            dna,
            aa,
            score: 0,
            fitness: 0.0,
        })
    }

    pub fn dna(&self) -> &str {
        &self.dna
    }

    pub fn aa(&self) -> &str {
        &self.aa
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Number of positions where the translation equals `target`
    pub fn score_against(&mut self, target: &str) -> Result<usize> {
        let expected = target.chars().count();
        let actual = self.aa.chars().count();
        if expected != actual {
            return Err(CodonsearchError::LengthMismatch { expected, actual });
        }

        self.score = self
            .aa
            .chars()
            .zip(target.chars())
            .filter(|(a, b)| a == b)
            .count();
        Ok(self.score)
    }

    pub(crate) fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    pub fn view(&self) -> CandidateView {
        CandidateView {
            dna: self.dna.clone(),
            aa: self.aa.clone(),
            score: self.score,
        }
    }

    pub fn to_best(&self) -> BestCandidate {
        BestCandidate {
            dna: self.dna.clone(),
            aa: self.aa.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derives_aa_from_dna() {
        let table = CodonTable::standard();
        let candidate = Candidate::new("atgtttTAA", &table).unwrap();
        assert_eq!(candidate.dna(), "ATGTTTTAA");
        assert_eq!(candidate.aa(), "MF*");
        assert_eq!(candidate.aa().len() * 3, candidate.dna().len());
    }

    #[test]
    fn test_rejects_partial_codon() {
        let table = CodonTable::standard();
        assert!(matches!(
            Candidate::new("ATGT", &table),
            Err(CodonsearchError::InvalidLength { length: 4 })
        ));
    }

    #[test]
    fn test_score_counts_matching_positions() {
        let table = CodonTable::standard();
        let mut candidate = Candidate::new("ATGTTTGGT", &table).unwrap();
        assert_eq!(candidate.score_against("MFG").unwrap(), 3);
        assert_eq!(candidate.score_against("MAG").unwrap(), 2);
        assert_eq!(candidate.score_against("WWW").unwrap(), 0);
        assert_eq!(candidate.score(), 0);
    }

    #[test]
    fn test_score_length_mismatch() {
        let table = CodonTable::standard();
        let mut candidate = Candidate::new("ATG", &table).unwrap();
        assert!(matches!(
            candidate.score_against("MM"),
            Err(CodonsearchError::LengthMismatch { expected: 2, actual: 1 })
        ));
    }
}
