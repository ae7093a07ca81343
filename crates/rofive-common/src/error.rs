use thiserror::Error;

#[derive(Debug, Error)]
pub enum RofiveError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("batch too large: {got} rows (limit {limit})")]
    BatchTooLarge { got: usize, limit: usize },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RofiveError>;
