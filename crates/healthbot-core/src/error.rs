use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Empty knowledge table: {0}")]
    EmptyTable(&'static str),

    #[error("Model fit failed: {0}")]
    ModelFit(String),

    #[error("Vectorization failed: {0}")]
    Vectorization(String),
}

impl Error {
    /// Errors raised while building the engine. These are fatal; everything
    /// else is recovered per query.
    pub fn is_construction(&self) -> bool {
        matches!(self, Error::InvalidConfig(_) | Error::EmptyTable(_) | Error::ModelFit(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
