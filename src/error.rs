use std::path::PathBuf;

/// Errors produced while decoding, building or transforming sequences.
#[derive(thiserror::Error, Debug)]
pub enum SeqError {
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("malformed record: {0}")]
    MalformedRecord(String),

    #[error("unknown symbol '{symbol}' in {context}")]
    UnknownSymbol { symbol: char, context: String },

    #[error("sequence '{name}' has no countable residues")]
    EmptySequence { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SeqError>;
