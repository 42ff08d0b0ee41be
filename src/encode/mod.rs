//! Encoding of Unicode scalar values into output byte buffers.

mod encoder;

mod utf16enc;

// Interfaces
pub use self::encoder::TextEncoder;

// Encoders
pub use self::utf16enc::Utf16Encoder;
