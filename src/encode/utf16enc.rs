use super::TextEncoder;

use byteorder::ByteOrder;
use bytes::BytesMut;

use std::marker::PhantomData;

const BOM: u16 = 0xFEFF;

/// A UTF-16 encoder writing code units in the byte order given by `Bo`.
///
/// Scalar values up to U+FFFF are written as a single code unit; values
/// beyond the Basic Multilingual Plane become a surrogate pair.
pub struct Utf16Encoder<Bo> {
    _byte_order: PhantomData<Bo>,
}

impl<Bo> Utf16Encoder<Bo> {
    /// Creates a new `Utf16Encoder`.
    pub fn new() -> Utf16Encoder<Bo> {
        Utf16Encoder {
            _byte_order: PhantomData,
        }
    }
}

impl<Bo> Default for Utf16Encoder<Bo> {
    fn default() -> Self {
        Utf16Encoder::new()
    }
}

impl<Bo> TextEncoder for Utf16Encoder<Bo>
where
    Bo: ByteOrder,
{
    fn encode_bom(&mut self, output: &mut BytesMut) {
        let mut bytes = [0u8; 2];
        Bo::write_u16(&mut bytes, BOM);
        output.extend_from_slice(&bytes);
    }

    fn encode(&mut self, c: char, output: &mut BytesMut) {
        let mut unit_buf = [0u16; 2];
        let units = c.encode_utf16(&mut unit_buf);
        let mut bytes = [0u8; 4];
        let len = units.len() * 2;
        Bo::write_u16_into(units, &mut bytes[..len]);
        output.extend_from_slice(&bytes[..len]);
    }
}
