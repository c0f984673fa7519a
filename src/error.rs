use crate::{base58, hex};
use std::{error, fmt, io};

/// Error of the command line layer; the codec modules carry their own typed errors.
#[derive(Debug)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl error::Error for Error {}

impl From<base58::decode::Error> for Error {
    fn from(error: base58::decode::Error) -> Self {
        Self::new(error.to_string())
    }
}

impl From<hex::Error> for Error {
    fn from(error: hex::Error) -> Self {
        Self::new(error.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::new(format!("I/O error: {}", error))
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", error))
    }
}

impl From<regex::Error> for Error {
    fn from(error: regex::Error) -> Self {
        Self::new(format!("Regex error: {}", error))
    }
}
