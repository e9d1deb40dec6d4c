// FASTA file reading and writing

use crate::error::{Result, SeqError};
use crate::io::records::{RecordSet, decode, encode};
use crate::sequence::Sequence;
use flate2::read::MultiGzDecoder;
use log::info;
use noodles::bgzf;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::num::NonZero;
use std::path::Path;

/// Extension that marks an amino-acid record set.
const AMINO_ACID_EXTENSION: &str = "faa";
const COMPRESSED_EXTENSIONS: [&str; 3] = ["gz", "bgz", "bgzf"];

/// What kind of residues a record set holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    Nucleotide,
    AminoAcid,
}

impl SequenceKind {
    /// Sniffs the kind from the file extension: `.faa` is amino acid,
    /// anything else nucleotide. A trailing compression suffix is skipped.
    pub fn from_path(path: &Path) -> Self {
        let inner = if should_compress(path) {
            path.file_stem().map(Path::new)
        } else {
            Some(path)
        };

        let is_amino = inner
            .and_then(|p| p.extension())
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == AMINO_ACID_EXTENSION);

        if is_amino {
            SequenceKind::AminoAcid
        } else {
            SequenceKind::Nucleotide
        }
    }

    pub fn is_amino_acid(self) -> bool {
        self == SequenceKind::AminoAcid
    }
}

/// Reader for FASTA files
pub struct FastaReader;

impl FastaReader {
    /// Reads the whole file into memory and decodes it.
    ///
    /// Gzip and BGZF input is decompressed transparently.
    pub fn read_records(path: &Path) -> Result<RecordSet> {
        let raw = read_to_string(path)?;
        let records = decode(&raw)?;
        info!("Decoded {} records from {}", records.len(), path.display());
        Ok(records)
    }

    /// Reads a FASTA file and builds one [`Sequence`] per record.
    ///
    /// # Example
    /// ```no_run
    /// use nucleocomp::io::fasta::{FastaReader, SequenceKind};
    /// use std::path::Path;
    ///
    /// let path = Path::new("proteins.faa");
    /// let sequences = FastaReader::read(path, SequenceKind::from_path(path))?;
    /// for seq in &sequences {
    ///     println!("{}: {} residues", seq.name(), seq.len());
    /// }
    /// # Ok::<(), nucleocomp::SeqError>(())
    /// ```
    pub fn read(path: &Path, kind: SequenceKind) -> Result<Vec<Sequence>> {
        Self::read_records(path)?.to_sequences(kind.is_amino_acid())
    }

    /// Calculate the total length of all sequences
    pub fn total_length(sequences: &[Sequence]) -> usize {
        sequences.iter().map(Sequence::len).sum()
    }
}

fn read_to_string(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(SeqError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut buffered = BufReader::new(File::open(path)?);
    let mut raw = String::new();
    if is_gzip_compressed(&mut buffered)? {
        // MultiGzDecoder handles both regular gzip and BGZF
        MultiGzDecoder::new(buffered).read_to_string(&mut raw)?;
    } else {
        buffered.read_to_string(&mut raw)?;
    }
    Ok(raw)
}

enum FastaWriterInner {
    Uncompressed(BufWriter<File>),
    Compressed(bgzf::io::MultithreadedWriter<File>),
}

/// Writer for FASTA files, BGZF-compressed when the path ends in
/// `.gz`, `.bgz` or `.bgzf`.
pub struct FastaWriter {
    writer: FastaWriterInner,
}

impl FastaWriter {
    pub fn new(path: &Path) -> Result<Self> {
        let file = File::create(path)?;

        let writer = if should_compress(path) {
            let worker_count = std::thread::available_parallelism().unwrap_or(NonZero::<usize>::MIN);
            FastaWriterInner::Compressed(bgzf::io::MultithreadedWriter::with_worker_count(
                worker_count,
                file,
            ))
        } else {
            FastaWriterInner::Uncompressed(BufWriter::new(file))
        };

        Ok(Self { writer })
    }

    pub fn write_records(&mut self, records: &RecordSet) -> Result<()> {
        let text = encode(records);
        match &mut self.writer {
            FastaWriterInner::Uncompressed(w) => w.write_all(text.as_bytes())?,
            FastaWriterInner::Compressed(w) => w.write_all(text.as_bytes())?,
        }
        Ok(())
    }

    pub fn write_sequences(&mut self, sequences: &[Sequence]) -> Result<()> {
        self.write_records(&RecordSet::from_sequences(sequences))
    }

    /// Flushes buffered output and, for compressed output, writes the BGZF
    /// EOF block. Call this before dropping the writer to see I/O errors.
    pub fn finish(self) -> Result<()> {
        match self.writer {
            FastaWriterInner::Uncompressed(mut w) => w.flush()?,
            FastaWriterInner::Compressed(mut w) => {
                w.finish()?;
            }
        }
        Ok(())
    }
}

/// Encodes `sequences` and writes them to `path`.
pub fn write_sequences(path: &Path, sequences: &[Sequence]) -> Result<()> {
    let mut writer = FastaWriter::new(path)?;
    writer.write_sequences(sequences)?;
    writer.finish()?;
    info!("Wrote {} records to {}", sequences.len(), path.display());
    Ok(())
}

/// Helper function to check if a file is gzip-compressed
fn is_gzip_compressed<R: Read>(reader: &mut BufReader<R>) -> Result<bool> {
    let buffer = reader.fill_buf()?;

    // Check for gzip magic bytes (0x1f 0x8b)
    Ok(buffer.len() >= 2 && buffer[0] == 0x1f && buffer[1] == 0x8b)
}

fn should_compress(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| COMPRESSED_EXTENSIONS.iter().any(|s| ext.eq_ignore_ascii_case(s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(file_name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("nucleocomp_{}_{file_name}", std::process::id()))
    }

    #[test]
    fn test_sequence_kind_from_extension() {
        assert_eq!(SequenceKind::from_path(Path::new("test_file.faa")), SequenceKind::AminoAcid);
        assert_eq!(SequenceKind::from_path(Path::new("test_file.faa.gz")), SequenceKind::AminoAcid);
        assert_eq!(SequenceKind::from_path(Path::new("reads.fasta")), SequenceKind::Nucleotide);
        assert_eq!(SequenceKind::from_path(Path::new("reads.fa.bgz")), SequenceKind::Nucleotide);
        assert_eq!(SequenceKind::from_path(Path::new("faa")), SequenceKind::Nucleotide);
        assert_eq!(SequenceKind::from_path(Path::new("")), SequenceKind::Nucleotide);
    }

    #[test]
    fn test_missing_file() {
        let err = FastaReader::read(Path::new(""), SequenceKind::Nucleotide).unwrap_err();
        assert!(matches!(err, SeqError::FileNotFound { .. }));

        let err = FastaReader::read_records(&temp_path("does_not_exist.fasta")).unwrap_err();
        assert!(matches!(err, SeqError::FileNotFound { .. }));
    }

    #[test]
    fn test_read_amino_acid_file() {
        let path = temp_path("test_file.faa");
        std::fs::write(&path, ";amino acid test\n>x\nA-Z\n").unwrap();

        let sequences = FastaReader::read(&path, SequenceKind::from_path(&path)).unwrap();
        assert_eq!(sequences.len(), 1);
        assert!(sequences[0].is_amino_acid_source());
        assert_eq!(sequences[0].residues(), "GCN-SAR");
        assert_eq!(FastaReader::total_length(&sequences), 7);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_write_and_read_back() {
        let path = temp_path("round_trip.fasta");
        let sequences = vec![
            Sequence::new("s1", "ACGT", false).unwrap(),
            Sequence::new("s2", "ACGU", false).unwrap(),
        ];
        write_sequences(&path, &sequences).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, ">s1\nACGT\n>s2\nACGU\n");

        let read_back = FastaReader::read(&path, SequenceKind::Nucleotide).unwrap();
        assert_eq!(read_back, sequences);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_write_compressed() {
        let path = temp_path("compressed.fasta.gz");
        let sequences = vec![Sequence::new("s1", "GATTACA", false).unwrap()];
        write_sequences(&path, &sequences).unwrap();

        let mut magic_bytes = [0u8; 2];
        File::open(&path).unwrap().read_exact(&mut magic_bytes).unwrap();
        assert_eq!(magic_bytes, [0x1f, 0x8b], "File should have gzip magic bytes");

        let records = FastaReader::read_records(&path).unwrap();
        assert_eq!(records.get("s1"), Some("GATTACA"));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_should_compress_suffixes() {
        assert!(should_compress(Path::new("out.fasta.gz")));
        assert!(should_compress(Path::new("out.fasta.bgz")));
        assert!(should_compress(Path::new("out.fasta.BGZF")));
        assert!(!should_compress(Path::new("out.fasta")));
    }
}
