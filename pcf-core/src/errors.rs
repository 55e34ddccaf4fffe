use std::io;
use thiserror::Error;

/// Error type for pcf-core operations.
///
/// Everything here aborts the whole conversion. Diffs that fail to parse are not
/// errors; they are dropped while the haplotype is built.
#[derive(Error, Debug)]
pub enum PcfError {
    /// IO error while reading input or writing rows.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A JSON-lines record could not be decoded.
    #[error("Failed to decode record on line {line}: {source}")]
    RecordDecode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The single-document input could not be decoded.
    #[error("Failed to decode input document: {0}")]
    DocumentDecode(#[from] serde_json::Error),

    /// The gene lookup service failed.
    #[error("Gene lookup failed: {0}")]
    GeneLookup(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The gene lookup service returned no gene for a protein identifier.
    #[error("No gene found for protein identifier: {0}")]
    MissingGene(String),
}

/// Result type alias for pcf-core operations.
pub type Result<T> = std::result::Result<T, PcfError>;
