use std::error::Error;
use std::fmt;
use std::io;

/// Error taxonomy for inventory report building.
///
/// `DataFormat` and `Io` only arise while loading a table; a failed load
/// produces no partial table. Filter and projection operations are total
/// over a valid table, so `InvalidArgument` is reserved for caller contract
/// violations such as an inverted expiry range.
#[derive(Debug)]
pub enum ReportError {
    /// Missing required column, unparseable date, or malformed numeric field.
    DataFormat(String),
    /// The source could not be read.
    Io(io::Error),
    /// Caller contract violation, e.g. an expiry range with min > max.
    InvalidArgument(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReportError::DataFormat(msg) => write!(f, "Data format error: {}", msg),
            ReportError::Io(err) => write!(f, "IO error: {}", err),
            ReportError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReportError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ReportError {
    fn from(err: io::Error) -> Self {
        ReportError::Io(err)
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        let msg = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => ReportError::Io(io_err),
            _ => ReportError::DataFormat(msg),
        }
    }
}
