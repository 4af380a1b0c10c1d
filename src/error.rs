use thiserror::Error;

/// Errors raised while configuring or running the pipeline.
#[derive(Debug, Error)]
pub enum LabError {
    #[error("configuration invalid: {0}")]
    Config(String),
    #[error("shape mismatch: matrix is {rows}x{cols} but vector has {vector_len} elements")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        vector_len: usize,
    },
    #[error("unable to load settings: {0}")]
    Settings(#[from] config::ConfigError),
    #[error("bad scenario pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("unable to read scenario path: {0}")]
    Glob(#[from] glob::GlobError),
}

pub type LabResult<T> = Result<T, LabError>;
