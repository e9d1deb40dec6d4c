//! I/O module for reading and writing sequence files.
//!
//! Provides the record codec, FASTA readers and writers, and the JSON
//! composition report writer.

pub mod fasta;
pub mod records;
pub mod report;

// Re-export main types
pub use fasta::{FastaReader, FastaWriter, SequenceKind, write_sequences};
pub use records::{RecordSet, decode, encode};
pub use report::save_report;
