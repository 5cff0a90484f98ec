use std::collections::HashMap;

/// DNA alphabet
pub const DNA_ALPHABET: [char; 4] = ['A', 'T', 'G', 'C'];

/// Symbol for a stop codon
pub const STOP_SYMBOL: char = '*';

/// Symbol emitted for any triplet that is not a codon
pub const DEFAULT_AA: char = 'X';

/// Standard genetic code, one entry per triplet
const STANDARD_CODE: [(&str, char); 64] = [
    ("TTT", 'F'), ("TTC", 'F'), ("TTA", 'L'), ("TTG", 'L'),
    ("TCT", 'S'), ("TCC", 'S'), ("TCA", 'S'), ("TCG", 'S'),
    ("TAT", 'Y'), ("TAC", 'Y'), ("TAA", '*'), ("TAG", '*'),
    ("TGT", 'C'), ("TGC", 'C'), ("TGA", '*'), ("TGG", 'W'),
    ("CTT", 'L'), ("CTC", 'L'), ("CTA", 'L'), ("CTG", 'L'),
    ("CCT", 'P'), ("CCC", 'P'), ("CCA", 'P'), ("CCG", 'P'),
    ("CAT", 'H'), ("CAC", 'H'), ("CAA", 'Q'), ("CAG", 'Q'),
    ("CGT", 'R'), ("CGC", 'R'), ("CGA", 'R'), ("CGG", 'R'),
    ("ATT", 'I'), ("ATC", 'I'), ("ATA", 'I'), ("ATG", 'M'),
    ("ACT", 'T'), ("ACC", 'T'), ("ACA", 'T'), ("ACG", 'T'),
    ("AAT", 'N'), ("AAC", 'N'), ("AAA", 'K'), ("AAG", 'K'),
    ("AGT", 'S'), ("AGC", 'S'), ("AGA", 'R'), ("AGG", 'R'),
    ("GTT", 'V'), ("GTC", 'V'), ("GTA", 'V'), ("GTG", 'V'),
    ("GCT", 'A'), ("GCC", 'A'), ("GCA", 'A'), ("GCG", 'A'),
    ("GAT", 'D'), ("GAC", 'D'), ("GAA", 'E'), ("GAG", 'E'),
    ("GGT", 'G'), ("GGC", 'G'), ("GGA", 'G'), ("GGG", 'G'),
];

/// Immutable triplet -> amino acid mapping.
///
/// Built once and shared by reference (usually behind an `Arc`) between the
/// translator and the evolution engine.
#[derive(Debug, Clone)]
pub struct CodonTable {
    codons: HashMap<[u8; 3], char>,
    triplets: Vec<&'static str>,
}

impl Default for CodonTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl CodonTable {
    /// The standard genetic code
    pub fn standard() -> Self {
        let mut codons = HashMap::with_capacity(STANDARD_CODE.len());
        let mut triplets = Vec::with_capacity(STANDARD_CODE.len());

        for (triplet, aa) in STANDARD_CODE {
            let bytes = triplet.as_bytes();
            codons.insert([bytes[0], bytes[1], bytes[2]], aa);
            triplets.push(triplet);
        }

        Self { codons, triplets }
    }

    /// Looks up an uppercase triplet
    pub fn get(&self, triplet: [u8; 3]) -> Option<char> {
        self.codons.get(&triplet).copied()
    }

    /// All 64 triplets, in table order
    pub fn triplets(&self) -> &[&'static str] {
        &self.triplets
    }

    pub fn len(&self) -> usize {
        self.codons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codons.is_empty()
    }
}
