// FASTA-style text codec: `;` lines are comments, `>` starts a record

use crate::error::{Result, SeqError};
use crate::sequence::Sequence;
use indexmap::IndexMap;
use log::{debug, warn};

const RECORD_DELIMITER: char = '>';
const COMMENT_PREFIX: char = ';';
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Ordered mapping of record name to raw residue string.
///
/// Inserting a name that is already present replaces its residues but
/// keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: IndexMap<String, String>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record, returning the residues it replaced if the name existed.
    pub fn insert(&mut self, name: impl Into<String>, residues: impl Into<String>) -> Option<String> {
        self.records.insert(name.into(), residues.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.records.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.records.iter().map(|(name, residues)| (name.as_str(), residues.as_str()))
    }

    /// Collects the names and residues of already-built sequences.
    pub fn from_sequences(sequences: &[Sequence]) -> Self {
        let mut set = Self::new();
        for seq in sequences {
            set.insert(seq.name(), seq.residues());
        }
        set
    }

    /// Builds one [`Sequence`] per record, in order.
    pub fn to_sequences(&self, is_amino_acid_source: bool) -> Result<Vec<Sequence>> {
        self.iter()
            .map(|(name, residues)| Sequence::new(name, residues, is_amino_acid_source))
            .collect()
    }
}

impl<N: Into<String>, R: Into<String>> FromIterator<(N, R)> for RecordSet {
    fn from_iter<I: IntoIterator<Item = (N, R)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, residues) in iter {
            set.insert(name, residues);
        }
        set
    }
}

/// Removes every line whose first character is `;`.
pub fn strip_comments(raw: &str) -> String {
    raw.split('\n')
        .filter(|line| !line.starts_with(COMMENT_PREFIX))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decodes raw text into an ordered record set.
///
/// Text before the first `>` is an ordinary fragment, so its first line is
/// taken as a name. A leading byte-order mark is ignored.
///
/// ```
/// use nucleocomp::io::records::decode;
///
/// let records = decode(">a\nAAAA>b\nCCCC").unwrap();
/// let pairs: Vec<_> = records.iter().collect();
/// assert_eq!(pairs, vec![("a", "AAAA"), ("b", "CCCC")]);
/// ```
pub fn decode(raw: &str) -> Result<RecordSet> {
    let stripped = strip_comments(raw.trim_start_matches(BYTE_ORDER_MARK));

    let mut records = RecordSet::new();
    for fragment in stripped.split(RECORD_DELIMITER).filter(|f| !f.trim().is_empty()) {
        let (name, residues) = split_fragment(fragment)?;
        debug!("decoded record '{}' ({} residues)", name, residues.len());
        if records.insert(name.clone(), residues).is_some() {
            warn!("duplicate record name '{name}', keeping the later residues");
        }
    }

    Ok(records)
}

/// First line is the name, the remaining lines are joined as residues.
fn split_fragment(fragment: &str) -> Result<(String, String)> {
    let mut lines = fragment.lines();
    let name = lines
        .next()
        .ok_or_else(|| SeqError::MalformedRecord(format!("no name line in {fragment:?}")))?
        .to_string();
    let residues = lines.collect::<String>();
    Ok((name, residues))
}

/// Encodes a record set as text, one residue line per record.
pub fn encode(records: &RecordSet) -> String {
    records
        .iter()
        .map(|(name, residues)| format!("{RECORD_DELIMITER}{name}\n{residues}\n"))
        .collect()
}
