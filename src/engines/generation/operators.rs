use super::random::RandomSource;
use crate::engines::translation::CodonTable;
use crate::error::{CodonsearchError, Result};

/// Random DNA of `codons` triplets, each drawn uniformly from the table
pub fn random_dna(codons: usize, table: &CodonTable, random: &mut RandomSource) -> String {
    let triplets = table.triplets();
    let mut dna = String::with_capacity(codons * 3);
    for _ in 0..codons {
        dna.push_str(triplets[random.uniform_int(triplets.len())]);
    }
    dna
}

/// Single-point crossover at codon granularity.
///
/// Picks `m` in `[0, codons)`; the child takes codons `..m` from `parent_a`
/// and `m..` from `parent_b`.
pub fn mate(parent_a: &str, parent_b: &str, random: &mut RandomSource) -> Result<String> {
    check_codon_string(parent_a)?;
    check_codon_string(parent_b)?;
    if parent_a.len() != parent_b.len() {
        return Err(CodonsearchError::LengthMismatch {
            expected: parent_a.len(),
            actual: parent_b.len(),
        });
    }

    let codons = parent_a.len() / 3;
    if codons == 0 {
        return Ok(String::new());
    }

    let split = random.uniform_int(codons) * 3;
    let mut child = String::with_capacity(parent_a.len());
    child.push_str(&parent_a[..split]);
    child.push_str(&parent_b[split..]);
    Ok(child)
}

/// Replaces each codon with a uniformly random triplet with probability `mutation_rate`
pub fn mutate(
    dna: &str,
    mutation_rate: f64,
    table: &CodonTable,
    random: &mut RandomSource,
) -> Result<String> {
    check_codon_string(dna)?;

    let triplets = table.triplets();
    let mut mutated = String::with_capacity(dna.len());
    let mut replaced = 0usize;

    for codon in dna.as_bytes().chunks_exact(3) {
        if random.uniform_f64() < mutation_rate {
            mutated.push_str(triplets[random.uniform_int(triplets.len())]);
            replaced += 1;
        } else {
            // ASCII checked above
            mutated.extend(codon.iter().map(|&b| b as char));
        }
    }
    log::trace!("Mutated {}/{} codons", replaced, dna.len() / 3);

    if mutated.len() != dna.len() {
        return Err(CodonsearchError::InvariantViolation(format!(
            "mutation changed DNA length from {} to {}",
            dna.len(),
            mutated.len()
        )));
    }
    Ok(mutated)
}

fn check_codon_string(dna: &str) -> Result<()> {
    if !dna.is_ascii() {
        return Err(CodonsearchError::InvariantViolation(
            "DNA contains non-ASCII symbols".to_string(),
        ));
    }
    if dna.len() % 3 != 0 {
        return Err(CodonsearchError::InvalidLength { length: dna.len() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::translation::translate;

    #[test]
    fn test_random_dna_is_valid() {
        let table = CodonTable::standard();
        let mut random = RandomSource::new(Some(17));
        let dna = random_dna(25, &table, &mut random);
        assert_eq!(dna.len(), 75);
        assert!(dna.chars().all(|c| "ATGC".contains(c)));
        assert!(!translate(&dna, &table).unwrap().contains('X'));
    }

    #[test]
    fn test_mate_preserves_length_and_alignment() {
        let mut random = RandomSource::new(Some(8));
        let a = "AAAAAAAAAAAA";
        let b = "CCCCCCCCCCCC";
        for _ in 0..100 {
            let child = mate(a, b, &mut random).unwrap();
            assert_eq!(child.len(), a.len());
            // Prefix from a, suffix from b, switching on a codon boundary
            let switch = child.find('C').unwrap_or(child.len());
            assert_eq!(switch % 3, 0);
            assert!(child[..switch].chars().all(|c| c == 'A'));
            assert!(child[switch..].chars().all(|c| c == 'C'));
        }
    }

    #[test]
    fn test_mate_split_zero_copies_parent_b() {
        let mut random = RandomSource::new(Some(1));
        // One codon: the only split point is 0
        assert_eq!(mate("ATG", "TTT", &mut random).unwrap(), "TTT");
    }

    #[test]
    fn test_mate_rejects_unequal_parents() {
        let mut random = RandomSource::new(Some(1));
        assert!(matches!(
            mate("ATG", "ATGATG", &mut random),
            Err(CodonsearchError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_mutate_preserves_length() {
        let table = CodonTable::standard();
        let mut random = RandomSource::new(Some(23));
        let dna = random_dna(40, &table, &mut random);
        for rate in [0.0, 0.01, 0.25, 0.5, 1.0] {
            let mutated = mutate(&dna, rate, &table, &mut random).unwrap();
            assert_eq!(mutated.len(), dna.len());
        }
    }

    #[test]
    fn test_zero_rate_is_identity() {
        let table = CodonTable::standard();
        let mut random = RandomSource::new(Some(23));
        let dna = random_dna(40, &table, &mut random);
        assert_eq!(mutate(&dna, 0.0, &table, &mut random).unwrap(), dna);
    }

    #[test]
    fn test_full_rate_yields_valid_codons() {
        let table = CodonTable::standard();
        let mut random = RandomSource::new(Some(4));
        let mutated = mutate("NNNNNNNNN", 1.0, &table, &mut random).unwrap();
        assert!(!translate(&mutated, &table).unwrap().contains('X'));
    }

    #[test]
    fn test_mutate_rejects_partial_codon() {
        let table = CodonTable::standard();
        let mut random = RandomSource::new(Some(4));
        assert!(matches!(
            mutate("ATGA", 0.5, &table, &mut random),
            Err(CodonsearchError::InvalidLength { length: 4 })
        ));
    }
}
