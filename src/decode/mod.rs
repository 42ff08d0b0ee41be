//! Decoding of input byte buffers into Unicode scalar values.

mod decoder;
mod error;

mod utf8dec;

// Interfaces
pub use self::{decoder::TextDecoder, error::DecodeError};

// Decoders
pub use self::utf8dec::Utf8Decoder;
