use crate::decode::TextDecoder;
use crate::encode::TextEncoder;
use crate::error::TranscodeError;

use bytes::{Bytes, BytesMut};

use std::io::Write;

const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// A single-shot converter from one text encoding to another.
///
/// A `Transcoder` pairs a [`TextDecoder`] with a [`TextEncoder`] and pumps
/// characters from one to the other: each scalar value decoded from the
/// input buffer is re-encoded into a staging buffer, which is written to
/// the output sink whenever it fills up to the chunk size. The encoder's
/// byte order mark, if any, is written to the sink before the first
/// character is decoded, even when the input is empty.
///
/// The conversion is strict. Input that does not decode to a sequence of
/// Unicode scalar values stops the run with an error, as does a failing
/// sink; whatever has been written to the sink by that point stays
/// written. There is no retry or recovery.
pub struct Transcoder<D, E> {
    decoder: D,
    encoder: E,
    chunk_size: usize,
}

impl<D, E> Transcoder<D, E>
where
    D: TextDecoder,
    E: TextEncoder,
{
    /// Creates a `Transcoder` from a decoder and an encoder, with the
    /// chunk size set to a default value.
    pub fn new(decoder: D, encoder: E) -> Self {
        Transcoder::with_chunk_size(decoder, encoder, DEFAULT_CHUNK_SIZE)
    }

    /// Creates a `Transcoder` that writes staged output to the sink in
    /// chunks of the given size.
    pub fn with_chunk_size(decoder: D, encoder: E, chunk_size: usize) -> Self {
        Transcoder {
            decoder,
            encoder,
            chunk_size,
        }
    }

    /// Converts the whole of `src`, writing the re-encoded bytes to `out`.
    ///
    /// On success the entire input has been consumed and the sink has been
    /// flushed. Decoder errors and sink errors are surfaced as the
    /// corresponding [`TranscodeError`] variant.
    pub fn transcode<W: Write>(
        mut self,
        mut src: Bytes,
        out: &mut W,
    ) -> Result<(), TranscodeError> {
        let mut staged = BytesMut::with_capacity(self.chunk_size);
        // The byte order mark reaches the sink before decoding starts, so
        // it is present even when the input fails at the first sequence.
        self.encoder.encode_bom(&mut staged);
        out.write_all(&staged.split())?;
        while let Some(c) = self.decoder.decode(&mut src)? {
            self.encoder.encode(c, &mut staged);
            if staged.len() >= self.chunk_size {
                out.write_all(&staged.split())?;
            }
        }
        out.write_all(&staged)?;
        out.flush()?;
        Ok(())
    }
}
