use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
    #[error("error while writing graph input")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl GeneratorError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        GeneratorError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, GeneratorError::InvalidArgument { .. })
    }
}
