//! A strict transcoding pipeline from UTF-8 input to UTF-16 output.
//!
//! This crate converts text between Unicode encodings in a single batch
//! pass, built from three parts: a [`TextDecoder`] that pops Unicode scalar
//! values off the front of an input byte buffer, a [`TextEncoder`] that
//! serializes scalar values into an output byte buffer, and a [`Transcoder`]
//! that pumps characters from one to the other and writes the result to an
//! `io::Write` sink.
//!
//! The provided [`Utf8Decoder`] decodes strictly: any byte sequence that is
//! not well-formed UTF-8 stops the conversion with an error instead of
//! substituting a replacement character. A replacement character that is
//! genuinely present in the input is just another character and passes
//! through unchanged. The provided [`Utf16Encoder`] is generic over byte
//! order and writes a byte order mark ahead of the encoded code units.
//!
//! # Examples
//!
//! ```
//! use byteorder::BigEndian;
//! use bytes::Bytes;
//! use textcode::{Transcoder, Utf16Encoder, Utf8Decoder};
//!
//! # fn main() -> Result<(), textcode::TranscodeError> {
//! let mut out = Vec::new();
//! let transcoder =
//!     Transcoder::new(Utf8Decoder::new(), Utf16Encoder::<BigEndian>::new());
//! transcoder.transcode(Bytes::from_static(b"Hi"), &mut out)?;
//! assert_eq!(out, [0xFE, 0xFF, 0x00, 0x48, 0x00, 0x69]);
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]
#![warn(future_incompatible)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![doc(test(no_crate_inject, attr(deny(warnings, rust_2018_idioms))))]

pub mod decode;
pub mod encode;

mod error;
mod transcode;

pub use self::decode::{DecodeError, TextDecoder, Utf8Decoder};
pub use self::encode::{TextEncoder, Utf16Encoder};
pub use self::error::TranscodeError;
pub use self::transcode::Transcoder;
