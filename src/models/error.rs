use crate::constants::{
    EXIT_CODE_INPUT_ERROR, EXIT_CODE_USAGE_ERROR, FILE_DECODE_ERROR_MESSAGE,
    FILE_OPEN_ERROR_MESSAGE,
};
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    FileOpenError { path: PathBuf, source: io::Error },
    FileDecodeError { path: PathBuf },
    IoError(io::Error),
    UsageError(String),
}

impl Error {
    /// The single diagnostic line shown to the user on stdout.
    pub fn user_message(&self) -> String {
        match self {
            Error::FileOpenError { .. } => FILE_OPEN_ERROR_MESSAGE.to_string(),
            Error::FileDecodeError { .. } => FILE_DECODE_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// Whether this error was caused by an unreadable input rather than by
    /// how the program was invoked.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::FileOpenError { .. } | Error::FileDecodeError { .. }
        )
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Error::UsageError(_) => EXIT_CODE_USAGE_ERROR,
            _ => EXIT_CODE_INPUT_ERROR,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOpenError { path, source } => {
                write!(f, "File Open Error: {}: {}", path.display(), source)
            }
            Error::FileDecodeError { path } => {
                write!(f, "File Decode Error: {} is not valid UTF-8", path.display())
            }
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::UsageError(msg) => write!(f, "Usage Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileOpenError { source, .. } => Some(source),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::IoError(err.into())
    }
}
