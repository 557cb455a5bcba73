use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("record source unavailable: {0}")]
    DataUnavailable(#[from] std::io::Error),

    #[error("malformed record on line {line}: {source}")]
    ParseFailure {
        line: usize,
        source: serde_json::Error,
    },
}
