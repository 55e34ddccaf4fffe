use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("HTTP status {code} when fetching {url}")]
    Status { code: u16, url: String },

    #[error("Request error when fetching {url}: {message}")]
    Request { url: String, message: String },

    #[error("Failed reading response body: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to decode Ensembl response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Identifier not known to Ensembl: {0}")]
    NotFound(String),

    #[error("{0} is not a gene and has no parent")]
    MissingParent(String),

    #[error("Parent chain of {0} loops back on itself")]
    CyclicParent(String),

    #[error("Parent chain of {id} is longer than {depth} steps")]
    ChainTooDeep { id: String, depth: usize },
}

pub type Result<T> = std::result::Result<T, LookupError>;
