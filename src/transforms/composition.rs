use crate::alphabet::{AMBIGUITY_MEMBERS, CANONICAL_BASES, GAP, is_canonical};
use crate::error::{Result, SeqError};
use crate::sequence::Sequence;
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-symbol counts, possibly fractional once ambiguity codes are spread out.
type Counts = BTreeMap<u8, f64>;

/// Fractional abundance of each symbol in a sequence. Values sum to 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Composition {
    fractions: BTreeMap<char, f64>,
}

impl Composition {
    pub fn get(&self, symbol: char) -> Option<f64> {
        self.fractions.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.fractions.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.fractions.iter().map(|(&symbol, &fraction)| (symbol, fraction))
    }

    /// Values in a caller-chosen symbol order, `0.0` for absent symbols.
    pub fn to_vector(&self, order: &[char]) -> Vec<f64> {
        order
            .iter()
            .map(|symbol| self.get(*symbol).unwrap_or(0.0))
            .collect()
    }
}

/// Compositions of many sequences keyed by sequence name, in input order.
pub type CompositionReport = IndexMap<String, Composition>;

/// Estimates the base composition of `seq`.
///
/// Gaps are ignored. In estimate mode (`verbose == false`) every ambiguity
/// code is spread evenly across the canonical bases it stands for, so the
/// result always has exactly four entries. In verbose mode the raw symbol
/// counts are normalized as they are. `T` and `U` are the same base; the
/// result reports `T` for DNA and `U` for RNA. Fails with
/// [`SeqError::EmptySequence`] if there is nothing to count.
///
/// ```
/// use nucleocomp::{Sequence, composition};
///
/// let seq = Sequence::new("s", "ACSS", false).unwrap();
/// let comp = composition(&seq, false).unwrap();
/// assert_eq!(comp.get('C'), Some(0.5));
/// assert_eq!(comp.get('T'), Some(0.0));
/// ```
pub fn composition(seq: &Sequence, verbose: bool) -> Result<Composition> {
    let counts = fold_thymine(count_symbols(seq.residues().as_bytes()));
    let (canonical, ambiguous) = partition_counts(counts);

    let merged: Counts = if verbose {
        canonical.into_iter().chain(ambiguous).collect()
    } else {
        distribute_ambiguous(canonical, &ambiguous)?
    };

    let restored = restore_thymine(merged, seq.uracil_present());
    let composition = normalize(seq.name(), restored)?;
    debug!("composition of '{}': {:?}", seq.name(), composition.fractions);
    Ok(composition)
}

/// Computes the composition of every sequence, keyed by name.
pub fn composition_report(sequences: &[Sequence], verbose: bool) -> Result<CompositionReport> {
    sequences
        .iter()
        .map(|seq| Ok::<_, SeqError>((seq.name().to_string(), composition(seq, verbose)?)))
        .collect()
}

/// Counts every non-gap symbol.
fn count_symbols(residues: &[u8]) -> Counts {
    let mut counts = Counts::new();
    for &symbol in residues.iter().filter(|&&s| s != GAP) {
        *counts.entry(symbol).or_insert(0.0) += 1.0;
    }
    counts
}

/// Moves all `T` counts onto `U` so accumulation happens in RNA terms.
fn fold_thymine(mut counts: Counts) -> Counts {
    if let Some(thymine) = counts.remove(&b'T') {
        *counts.entry(b'U').or_insert(0.0) += thymine;
    }
    counts
}

/// Splits counts into (canonical bases, ambiguity codes).
fn partition_counts(counts: Counts) -> (Counts, Counts) {
    counts.into_iter().partition(|(symbol, _)| is_canonical(*symbol))
}

/// Spreads each ambiguity count evenly over its member bases.
fn distribute_ambiguous(canonical: Counts, ambiguous: &Counts) -> Result<Counts> {
    let mut accumulator: Counts = CANONICAL_BASES.iter().map(|&base| (base, 0.0)).collect();
    for (base, count) in canonical {
        *accumulator.entry(base).or_insert(0.0) += count;
    }

    for (&code, &count) in ambiguous {
        let members = AMBIGUITY_MEMBERS
            .get(&code)
            .ok_or_else(|| SeqError::UnknownSymbol {
                symbol: code as char,
                context: "composition estimate".to_string(),
            })?;
        let share = count / members.len() as f64;
        for member in members.iter() {
            *accumulator.entry(*member).or_insert(0.0) += share;
        }
    }

    Ok(accumulator)
}

/// Reports `U` as `T` again for DNA.
fn restore_thymine(mut counts: Counts, uracil_present: bool) -> Counts {
    if !uracil_present
        && let Some(uracil) = counts.remove(&b'U')
    {
        counts.insert(b'T', uracil);
    }
    counts
}

fn normalize(name: &str, counts: Counts) -> Result<Composition> {
    let total: f64 = counts.values().sum();
    if total <= 0.0 {
        return Err(SeqError::EmptySequence {
            name: name.to_string(),
        });
    }

    let fractions = counts
        .into_iter()
        .map(|(symbol, count)| (symbol as char, count / total))
        .collect();
    Ok(Composition { fractions })
}
