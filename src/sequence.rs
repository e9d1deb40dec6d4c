use crate::alphabet::{AMINO_TO_CODON_PATTERN, is_extended_symbol};
use crate::error::{Result, SeqError};
use log::trace;
use std::fmt;

/// A named nucleic-acid sequence over the extended IUPAC alphabet.
///
/// Residues are normalized once at construction (upper-cased, amino acids
/// back-translated, validated) and never change afterwards. Transforms
/// always return a new `Sequence`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    name: String,
    residues: String,
    is_amino_acid_source: bool,
    uracil_present: bool,
}

impl Sequence {
    /// Builds a sequence from a raw residue string.
    ///
    /// Amino-acid sources are back-translated symbol by symbol (`*` expands
    /// to nothing). RNA is detected by scanning the upper-cased input for `U`
    /// before any expansion.
    ///
    /// ```
    /// use nucleocomp::Sequence;
    ///
    /// let seq = Sequence::new("x", "A-Z", true).unwrap();
    /// assert_eq!(seq.residues(), "GCN-SAR");
    /// assert!(!seq.uracil_present());
    /// ```
    pub fn new(name: impl Into<String>, raw_residues: &str, is_amino_acid_source: bool) -> Result<Self> {
        Self::build(name.into(), raw_residues, is_amino_acid_source, None)
    }

    /// Builds a sequence with an explicit RNA flag instead of detecting it.
    pub fn with_uracil_flag(
        name: impl Into<String>,
        raw_residues: &str,
        is_amino_acid_source: bool,
        uracil_present: bool,
    ) -> Result<Self> {
        Self::build(name.into(), raw_residues, is_amino_acid_source, Some(uracil_present))
    }

    fn build(
        name: String,
        raw_residues: &str,
        is_amino_acid_source: bool,
        uracil_present: Option<bool>,
    ) -> Result<Self> {
        let upper: String = raw_residues
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        // Codon patterns are RNA, so the flag comes from the raw input
        let uracil_present = uracil_present.unwrap_or_else(|| upper.contains('U'));

        let residues = if is_amino_acid_source {
            expand_amino_acids(&name, &upper)?
        } else {
            upper
        };

        if let Some(bad) = residues.bytes().find(|&b| !is_extended_symbol(b)) {
            return Err(unknown_symbol(bad, &name));
        }

        trace!(
            "built sequence '{}' ({} residues, amino_acid_source={}, rna={})",
            name,
            residues.len(),
            is_amino_acid_source,
            uracil_present
        );

        Ok(Self {
            name,
            residues,
            is_amino_acid_source,
            uracil_present,
        })
    }

    /// Assembles a sequence from residues that are already normalized.
    ///
    /// Used by transforms; no expansion, validation or RNA detection happens.
    pub(crate) fn from_normalized(
        name: String,
        residues: String,
        is_amino_acid_source: bool,
        uracil_present: bool,
    ) -> Self {
        Self {
            name,
            residues,
            is_amino_acid_source,
            uracil_present,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn residues(&self) -> &str {
        &self.residues
    }

    pub fn is_amino_acid_source(&self) -> bool {
        self.is_amino_acid_source
    }

    /// True when the sequence is treated as RNA.
    pub fn uracil_present(&self) -> bool {
        self.uracil_present
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<name=\"{}\", residues={}>", self.name, self.residues)
    }
}

/// Back-translates an upper-cased amino-acid string into codon patterns.
fn expand_amino_acids(name: &str, amino_acids: &str) -> Result<String> {
    amino_acids
        .bytes()
        .map(|symbol| {
            AMINO_TO_CODON_PATTERN
                .get(&symbol)
                .copied()
                .ok_or_else(|| SeqError::UnknownSymbol {
                    symbol: symbol as char,
                    context: format!("amino-acid record '{name}'"),
                })
        })
        .collect()
}

fn unknown_symbol(symbol: u8, name: &str) -> SeqError {
    SeqError::UnknownSymbol {
        symbol: symbol as char,
        context: format!("sequence '{name}'"),
    }
}
