use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for ghtoc operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for the input/output side of ToC generation
#[derive(Debug)]
pub enum TocError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Invalid or empty text selection
    Selection(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for TocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocError::Io(err) => write!(f, "IO error: {}", err),
            TocError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TocError::Selection(msg) => write!(f, "Selection error: {}", msg),
            TocError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for TocError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TocError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for TocError {
    fn from(err: io::Error) -> Self {
        TocError::Io(err)
    }
}

impl From<String> for TocError {
    fn from(msg: String) -> Self {
        TocError::Generic(msg)
    }
}

impl From<&str> for TocError {
    fn from(msg: &str) -> Self {
        TocError::Generic(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TocError::Config("bad".into()).to_string(), "Configuration error: bad");
        assert_eq!(TocError::Selection("Nothing is selected!".into()).to_string(), "Selection error: Nothing is selected!");
        assert_eq!(TocError::from("plain").to_string(), "plain");
    }

    #[test]
    fn test_io_source() {
        let err = TocError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("IO error:"));
    }
}
