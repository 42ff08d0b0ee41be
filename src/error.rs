use crate::decode::DecodeError;

use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// An error that stopped a transcoding run.
#[derive(Debug)]
pub enum TranscodeError {
    /// The input was not valid under the source encoding.
    Decode(DecodeError),
    /// Reading from the source or writing to the sink failed.
    Io(io::Error),
}

impl Display for TranscodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscodeError::Decode(err) => write!(f, "{}", err),
            TranscodeError::Io(io_err) => write!(f, "{}", io_err),
        }
    }
}

impl Error for TranscodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TranscodeError::Decode(err) => Some(err),
            TranscodeError::Io(io_err) => Some(io_err),
        }
    }
}

impl From<DecodeError> for TranscodeError {
    fn from(src: DecodeError) -> TranscodeError {
        TranscodeError::Decode(src)
    }
}

impl From<io::Error> for TranscodeError {
    fn from(src: io::Error) -> TranscodeError {
        TranscodeError::Io(src)
    }
}
