use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    /// A value (or the result of moving a value) that falls outside the
    /// non-negative `u64` domain.
    pub fn domain(value: i128, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::Domain {
                value,
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn is_domain(&self) -> bool {
        matches!(self.kind(), ErrorKind::Domain { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("value {value} is outside the integer domain: {message}")]
    Domain { value: i128, message: String },
}
