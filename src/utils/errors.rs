use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsvListError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("\"{directive}\" directive may not both specify an external file and have content.")]
    ContentAndFile { directive: String },

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("Failed to decode {path} as {encoding}")]
    Decode { path: String, encoding: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CsvListError>;
