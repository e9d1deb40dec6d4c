//! Static symbol tables for the extended nucleic-acid alphabet.
//!
//! All tables are keyed by upper-case ASCII bytes and built once on first use.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Gap of indeterminate length. Never expanded, always its own complement.
pub const GAP: u8 = b'-';

/// The 17 symbols a stored residue string may contain.
pub const EXTENDED_ALPHABET: &[u8] = b"ACGTURYSWKMBDHVN-";

/// Canonical bases in RNA terms; `T` is resolved from `U` at output time.
pub const CANONICAL_BASES: [u8; 4] = [b'A', b'C', b'G', b'U'];

/// Complement of every symbol in the extended alphabet.
///
/// `A` maps to `T` here; the RNA override to `U` is applied by the
/// reverse-complement transform, which knows whether the sequence is RNA.
pub static COMPLEMENT: LazyLock<HashMap<u8, u8>> = LazyLock::new(|| {
    [
        (b'A', b'T'),
        (b'T', b'A'),
        (b'U', b'A'),
        (b'G', b'C'),
        (b'C', b'G'),
        (b'Y', b'R'),
        (b'R', b'Y'),
        (b'S', b'S'),
        (b'W', b'W'),
        (b'K', b'M'),
        (b'M', b'K'),
        (b'B', b'V'),
        (b'D', b'H'),
        (b'H', b'D'),
        (b'V', b'B'),
        (b'N', b'N'),
        (GAP, GAP),
    ]
    .into_iter()
    .collect()
});

/// Canonical bases each IUPAC ambiguity code stands for.
///
/// Only the 11 non-canonical codes have an entry.
pub static AMBIGUITY_MEMBERS: LazyLock<HashMap<u8, &'static [u8]>> = LazyLock::new(|| {
    let entries: [(u8, &'static [u8]); 11] = [
        (b'R', b"AG"),
        (b'Y', b"CU"),
        (b'S', b"CG"),
        (b'W', b"AU"),
        (b'K', b"GU"),
        (b'M', b"AC"),
        (b'B', b"CGU"),
        (b'D', b"AGU"),
        (b'H', b"ACU"),
        (b'V', b"ACG"),
        (b'N', b"ACGU"),
    ];
    entries.into_iter().collect()
});

/// Inverse RNA codon table, compressed to a single pattern per amino acid.
///
/// The stop symbol `*` expands to nothing.
pub static AMINO_TO_CODON_PATTERN: LazyLock<HashMap<u8, &'static str>> = LazyLock::new(|| {
    [
        (b'A', "GCN"),
        (b'B', "RAY"),
        (b'C', "UGY"),
        (b'D', "GAY"),
        (b'E', "GAR"),
        (b'F', "UUY"),
        (b'G', "GGN"),
        (b'H', "CAY"),
        (b'I', "AUH"),
        (b'J', "NUN"),
        (b'K', "AAR"),
        (b'L', "YUN"),
        (b'M', "AUG"),
        (b'N', "AAY"),
        (b'O', "UAG"),
        (b'P', "CCN"),
        (b'Q', "CAR"),
        (b'R', "MGN"),
        (b'S', "WSN"),
        (b'T', "ACN"),
        (b'U', "UGA"),
        (b'V', "GUN"),
        (b'W', "UGG"),
        (b'X', "NNN"),
        (b'Y', "UAY"),
        (b'Z', "SAR"),
        (b'*', ""),
        (GAP, "-"),
    ]
    .into_iter()
    .collect()
});

pub fn is_extended_symbol(symbol: u8) -> bool {
    EXTENDED_ALPHABET.contains(&symbol)
}

pub fn is_canonical(symbol: u8) -> bool {
    CANONICAL_BASES.contains(&symbol)
}
