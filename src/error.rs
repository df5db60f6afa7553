//! Custom errors and results.

use serde_json;
use std::error;
use std::fmt;
use std::io;

/// The kinds of errors that can happen when running `polymer`.
#[derive(Debug)]
pub enum Error {
    /// An IO error, including input that is not valid UTF-8.
    Io(io::Error),

    /// The report could not be serialized.
    Json(serde_json::Error),

    /// An unrecognized trim policy.
    Trim(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> ::std::result::Result<(), fmt::Error> {
        match *self {
            Error::Io(ref e) => fmt::Display::fmt(e, f),
            Error::Json(ref e) => fmt::Display::fmt(e, f),
            Error::Trim(ref policy) => write!(
                f,
                "unknown trim policy '{}' (expected none, whitespace, or letters)",
                policy
            ),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Io(ref e) => Some(e),
            Error::Json(ref e) => Some(e),
            Error::Trim(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

/// A `Result` whose `Err` variant is `polymer::error::Error`.
pub type Result<T> = ::std::result::Result<T, Error>;
