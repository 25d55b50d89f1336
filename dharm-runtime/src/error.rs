use std::{error, fmt, io};

/// Result type with the runtime error.
pub type Result<T = ()> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Underlying I/O failure.
    Io(io::Error),
    /// Configuration file could not be parsed.
    Config(toml::de::Error),
    /// Joint table could not be read or written.
    Csv(csv::Error),
    /// Joint table header row does not match the column headers.
    Header { found: Vec<String> },
    /// Row index outside of the joint table.
    RowOutOfRange { row: usize, len: usize },
    /// The last remaining row cannot be removed.
    LastRow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Config(e) => write!(f, "configuration error: {}", e),
            Error::Csv(e) => write!(f, "joint table error: {}", e),
            Error::Header { found } => write!(
                f,
                "unexpected joint table header [{}], expected [{}]",
                found.join(", "),
                dharm_core::COLUMN_HEADERS.join(", ")
            ),
            Error::RowOutOfRange { row, len } => {
                write!(f, "row {} out of range for table of {} rows", row, len)
            }
            Error::LastRow => write!(f, "table must keep at least one row"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Config(e) => Some(e),
            Error::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::Io(value)
    }
}

impl From<toml::de::Error> for Error {
    fn from(value: toml::de::Error) -> Self {
        Error::Config(value)
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::Csv(value)
    }
}
