use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{role} node '{id}' not found in network")]
    NodeNotFound { role: &'static str, id: String },
    #[error("cannot compare an empty {0} batch")]
    EmptyBatch(&'static str),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}
