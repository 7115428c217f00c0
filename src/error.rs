use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),

    #[error("Chunk too long: {len} samples, maximum is {max}")]
    ChunkTooLong { len: usize, max: usize },

    #[error("Buffer length mismatch: input has {input} samples, output has {output}")]
    LengthMismatch { input: usize, output: usize },

    #[error("Tap count mismatch: {taps} coefficients, history sized for {history}")]
    TapCountMismatch { taps: usize, history: usize },

    #[error("Invalid coefficients: {0}")]
    InvalidCoefficients(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
