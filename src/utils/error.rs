use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for Wikitoc operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for Wikitoc operations
#[derive(Debug)]
pub enum WikitocError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Missing or invalid caller input (empty query, empty language)
    Input(String),
    /// Transport-level HTTP failure
    Http(String),
    /// Error message returned by the upstream API in place of a TOC
    Api(String),
    /// Page construction error
    Page(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for WikitocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WikitocError::Io(err) => write!(f, "IO error: {}", err),
            WikitocError::Config(msg) => write!(f, "Configuration error: {}", msg),
            WikitocError::Input(msg) => write!(f, "Input error: {}", msg),
            WikitocError::Http(msg) => write!(f, "HTTP error: {}", msg),
            WikitocError::Api(msg) => write!(f, "API error: {}", msg),
            WikitocError::Page(msg) => write!(f, "Page error: {}", msg),
            WikitocError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for WikitocError {}

impl From<io::Error> for WikitocError {
    fn from(err: io::Error) -> Self {
        WikitocError::Io(err)
    }
}

impl From<String> for WikitocError {
    fn from(msg: String) -> Self {
        WikitocError::Generic(msg)
    }
}

impl From<&str> for WikitocError {
    fn from(msg: &str) -> Self {
        WikitocError::Generic(msg.to_string())
    }
}
