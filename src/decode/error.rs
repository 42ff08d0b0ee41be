use std::{
    error::Error,
    fmt::{self, Display},
};

/// An error produced when input bytes do not form a valid encoded
/// character.
///
/// The error records the offset of the offending sequence from the first
/// byte the decoder has seen, and distinguishes a sequence that can never
/// become valid from an input that ends in the middle of a multi-byte
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    offset: usize,
    error_len: Option<usize>,
}

impl DecodeError {
    /// Creates an error for a sequence of `len` bytes at `offset` that can
    /// never form a valid character.
    pub fn invalid(offset: usize, len: usize) -> Self {
        DecodeError {
            offset,
            error_len: Some(len),
        }
    }

    /// Creates an error for an input that ends partway through a
    /// multi-byte sequence starting at `offset`.
    pub fn incomplete(offset: usize) -> Self {
        DecodeError {
            offset,
            error_len: None,
        }
    }

    /// The byte offset of the offending sequence.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The length in bytes of the invalid sequence, or `None` if the input
    /// ended before the sequence was complete.
    pub fn error_len(&self) -> Option<usize> {
        self.error_len
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error_len {
            Some(_) => write!(
                f,
                "invalid encoding sequence in input at byte {}",
                self.offset
            ),
            None => write!(
                f,
                "incomplete encoding sequence in input at byte {}",
                self.offset
            ),
        }
    }
}

impl Error for DecodeError {}
