use crate::alphabet::COMPLEMENT;
use crate::error::{Result, SeqError};
use crate::sequence::Sequence;

/// Returns the reverse complement of `seq` as a new sequence.
///
/// The result keeps the source name and RNA flag. For RNA, `A` pairs with
/// `U` instead of `T`; the flag is not recomputed from the new residues.
///
/// ```
/// use nucleocomp::{Sequence, reverse_complement};
///
/// let seq = Sequence::new("x", "GCN-SAR", false).unwrap();
/// assert_eq!(reverse_complement(&seq).unwrap().residues(), "YTS-NGC");
/// ```
pub fn reverse_complement(seq: &Sequence) -> Result<Sequence> {
    let residues = complement_reversed(seq.name(), seq.residues().as_bytes(), seq.uracil_present())?;
    Ok(Sequence::from_normalized(
        seq.name().to_string(),
        residues,
        seq.is_amino_acid_source(),
        seq.uracil_present(),
    ))
}

/// Complements each residue in reverse order.
///
/// `uracil_present` selects `U` as the partner of `A`.
pub fn complement_reversed(name: &str, residues: &[u8], uracil_present: bool) -> Result<String> {
    residues
        .iter()
        .rev()
        .map(|&base| match base {
            b'A' if uracil_present => Ok('U'),
            _ => COMPLEMENT
                .get(&base)
                .map(|&c| c as char)
                .ok_or_else(|| SeqError::UnknownSymbol {
                    symbol: base as char,
                    context: format!("reverse complement of '{name}'"),
                }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_reverse_complement_with_ambiguity_and_gap() {
        let seq = Sequence::new("x", "GCN-SAR", false).unwrap();
        let rc = reverse_complement(&seq).unwrap();
        assert_eq!(rc.residues(), "YTS-NGC");
        assert_eq!(rc.name(), "x");
        assert!(!rc.uracil_present());
    }

    #[test]
    fn test_reverse_complement_of_expanded_amino_acids() {
        let seq = Sequence::new("x", "A-Z", true).unwrap();
        let rc = reverse_complement(&seq).unwrap();
        assert_eq!(rc.residues(), "YTS-NGC");
        assert!(rc.is_amino_acid_source());
    }

    #[test]
    fn test_amino_acid_record_is_dna_by_default() {
        let seq = Sequence::new("m", "M", true).unwrap();
        assert_eq!(seq.residues(), "AUG");
        let rc = reverse_complement(&seq).unwrap();
        assert_eq!(rc.residues(), "CAT");
        assert!(!rc.uracil_present());
    }

    #[test]
    fn test_rna_pairs_adenine_with_uracil() {
        let seq = Sequence::new("rna", "AACGU", false).unwrap();
        let rc = reverse_complement(&seq).unwrap();
        assert_eq!(rc.residues(), "ACGUU");
        assert!(rc.uracil_present());
    }

    #[test]
    fn test_rna_flag_is_carried_not_recomputed() {
        // no A, so the complement has no U, but it is still RNA
        let seq = Sequence::new("rna", "CGU", false).unwrap();
        let rc = reverse_complement(&seq).unwrap();
        assert_eq!(rc.residues(), "ACG");
        assert!(rc.uracil_present());
    }

    #[test]
    fn test_mixed_thymine_uracil_is_not_involutive() {
        let seq = Sequence::new("mixed", "TU", false).unwrap();
        let twice = reverse_complement(&reverse_complement(&seq).unwrap()).unwrap();
        assert_eq!(twice.residues(), "UU");
    }

    #[test]
    fn test_source_is_untouched() {
        let seq = Sequence::new("s", "ACGT", false).unwrap();
        let _ = reverse_complement(&seq).unwrap();
        assert_eq!(seq.residues(), "ACGT");
    }

    #[test]
    fn test_empty_sequence() {
        let seq = Sequence::new("empty", "", false).unwrap();
        assert!(reverse_complement(&seq).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_symbol() {
        let err = complement_reversed("bad", b"ACZ", false).unwrap_err();
        assert!(matches!(err, SeqError::UnknownSymbol { symbol: 'Z', .. }));
    }

    #[test]
    fn test_dna_involution() {
        let mut rng = StdRng::seed_from_u64(42);
        let bases = ['A', 'C', 'G', 'T'];

        for _ in 0..50 {
            let length = rng.random_range(0..200);
            let raw: String = (0..length)
                .map(|_| bases[rng.random_range(0..bases.len())])
                .collect();
            let seq = Sequence::new("random", &raw, false).unwrap();
            let twice = reverse_complement(&reverse_complement(&seq).unwrap()).unwrap();
            assert_eq!(twice.residues(), seq.residues());
        }
    }
}
