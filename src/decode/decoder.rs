use super::DecodeError;

use bytes::Bytes;

/// A stateful decoder extracting Unicode scalar values from a byte buffer.
pub trait TextDecoder {
    /// Decodes the next character from the front of `src`, consuming the
    /// bytes of its encoded form. Returns `Ok(None)` once `src` is empty.
    ///
    /// A sequence that does not encode a Unicode scalar value fails with
    /// `DecodeError`. The offending bytes are left in `src`, and no
    /// substitution takes place.
    fn decode(&mut self, src: &mut Bytes) -> Result<Option<char>, DecodeError>;
}
