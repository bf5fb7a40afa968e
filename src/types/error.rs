use core::fmt;
use derive_more::From;

#[derive(Debug,From)]
pub enum Error {
    /// a column's alignment tag is not one of Left, Center or Right
    InvalidAlignment {
        column: usize,
        value: String,
    },
   #[from]
    Json(serde_json::Error),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(e) => Some(e),
            Error::InvalidAlignment { .. } => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidAlignment { column, value } => {
                write!(f, "invalid alignment for column index {column}: {value}")
            }
            Error::Json(e) => write!(f, "invalid table definition: {e}"),
        }
    }
}
