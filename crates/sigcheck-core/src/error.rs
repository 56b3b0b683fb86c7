use thiserror::Error;

use crate::signature::ParseError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing required input: {0}")]
    MissingInput(String),

    #[error("Failed to parse signature: {0}")]
    Signature(#[from] ParseError),

    #[error("Malformed gamedata: {0}")]
    Gamedata(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// The raw signature text that failed to compile, if any
    pub fn offending_signature(&self) -> Option<&str> {
        match self {
            Error::Signature(e) => Some(e.signature()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        assert!(err.is_not_found());

        let other_io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err2 = Error::Io(other_io_err);
        assert!(!err2.is_not_found());
    }

    #[test]
    fn test_offending_signature_from_parse_error() {
        let err: Error = ParseError::InvalidHex {
            signature: r"\xZZ".to_string(),
            token: "ZZ".to_string(),
        }
        .into();
        assert_eq!(err.offending_signature(), Some(r"\xZZ"));
        assert!(err.to_string().contains("byte was not a number"));

        let err = Error::MissingInput("--dll".to_string());
        assert_eq!(err.offending_signature(), None);
    }
}
