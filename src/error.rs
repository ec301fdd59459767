use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Date parsing error: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("Configuration error: {0}")]
    ConfigSource(#[from] ::config::ConfigError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown source format '{0}'")]
    UnknownFormat(String),

    #[error("Unknown entity type '{0}'")]
    UnknownEntity(String),

    #[error("Async task error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
