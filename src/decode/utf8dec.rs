use super::{DecodeError, TextDecoder};

use bytes::{Buf, Bytes};

use std::char;

/// A strict UTF-8 decoder.
///
/// Overlong forms, encoded surrogate code points, values above U+10FFFF,
/// and bytes that cannot begin or continue a sequence are all rejected.
/// The decoder keeps count of the bytes it has consumed, so the offsets
/// reported in `DecodeError` are relative to the first byte it has seen.
pub struct Utf8Decoder {
    consumed: usize,
}

impl Utf8Decoder {
    /// Creates a new `Utf8Decoder`.
    pub fn new() -> Utf8Decoder {
        Utf8Decoder { consumed: 0 }
    }
}

impl Default for Utf8Decoder {
    fn default() -> Self {
        Utf8Decoder::new()
    }
}

impl TextDecoder for Utf8Decoder {
    fn decode(&mut self, src: &mut Bytes) -> Result<Option<char>, DecodeError> {
        let lead = match src.first() {
            None => return Ok(None),
            Some(&b) => b,
        };
        let (width, init) = match lead {
            0x00..=0x7F => {
                src.advance(1);
                self.consumed += 1;
                return Ok(Some(lead as char));
            }
            0xC2..=0xDF => (2, u32::from(lead & 0x1F)),
            0xE0..=0xEF => (3, u32::from(lead & 0x0F)),
            0xF0..=0xF4 => (4, u32::from(lead & 0x07)),
            // 0x80..=0xBF are stray continuation bytes; 0xC0, 0xC1 and
            // 0xF5..=0xFF can only start overlong or out-of-range forms.
            _ => return Err(DecodeError::invalid(self.consumed, 1)),
        };
        if src.len() < width {
            return Err(DecodeError::incomplete(self.consumed));
        }
        let mut code_point = init;
        for (i, &b) in src[1..width].iter().enumerate() {
            if b & 0xC0 != 0x80 {
                return Err(DecodeError::invalid(self.consumed, i + 1));
            }
            code_point = (code_point << 6) | u32::from(b & 0x3F);
        }
        let min = match width {
            2 => 0x80,
            3 => 0x800,
            _ => 0x1_0000,
        };
        if code_point < min {
            return Err(DecodeError::invalid(self.consumed, width));
        }
        // from_u32 rejects surrogate code points and values past U+10FFFF.
        let c = char::from_u32(code_point)
            .ok_or_else(|| DecodeError::invalid(self.consumed, width))?;
        src.advance(width);
        self.consumed += width;
        Ok(Some(c))
    }
}
