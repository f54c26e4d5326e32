use serde::{Deserialize, Serialize};
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// The fatal error taxonomy of the simulator. Every variant aborts the run;
/// there is no retry or recovery path anywhere in the pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Error {
    /// Bad command-line arguments, reported before any processing starts.
    Config(String),
    /// The backing store could not be loaded; no partial run is attempted.
    ResourceLoad(String),
    /// A trace line could not be parsed as a logical address.
    MalformedInput(String),
    /// A page number or backing-store block outside the addressable range.
    OutOfRange(String),
    /// An underlying I/O failure.
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "configuration error: {}", msg),
            Error::ResourceLoad(msg) => write!(f, "resource load error: {}", msg),
            Error::MalformedInput(msg) => write!(f, "malformed input: {}", msg),
            Error::OutOfRange(msg) => write!(f, "out of range: {}", msg),
            Error::Io(msg) => write!(f, "io error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Constructs an `Err(Error::Config)` from a format string.
#[macro_export]
macro_rules! errconfig {
    ($($args:tt)*) => { Err($crate::Error::Config(format!($($args)*)).into()) };
}

/// Constructs an `Err(Error::MalformedInput)` from a format string.
#[macro_export]
macro_rules! errinput {
    ($($args:tt)*) => { Err($crate::Error::MalformedInput(format!($($args)*)).into()) };
}

/// Constructs an `Err(Error::OutOfRange)` from a format string.
#[macro_export]
macro_rules! errrange {
    ($($args:tt)*) => { Err($crate::Error::OutOfRange(format!($($args)*)).into()) };
}
