//! Decode FASTA-style record sets, reverse-complement nucleic-acid
//! sequences and estimate their base composition.
//!
//! Amino-acid records are back-translated to nucleotide codon patterns when
//! a [`Sequence`] is built, so every transform works on the extended IUPAC
//! nucleic-acid alphabet.

pub mod alphabet;
pub mod cli;
pub mod error;
pub mod io;
pub mod sequence;
pub mod transforms;

pub use error::{Result, SeqError};
pub use sequence::Sequence;
pub use transforms::{Composition, CompositionReport, composition, composition_report, reverse_complement};
