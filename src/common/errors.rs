use thiserror::Error;

/// Error type for loading the scanned text out of a sequence file.
#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("Can't read sequence file: {0}")]
    FileReadError(String),

    #[error("Sequence file is not valid UTF-8 text: {0}")]
    DecodeError(String),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
