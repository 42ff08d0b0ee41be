use bytes::BytesMut;

/// An encoder serializing Unicode scalar values into a byte buffer.
///
/// Every `char` is a Unicode scalar value, and the encodings implemented
/// in this crate can represent all of them, so encoding is infallible.
pub trait TextEncoder {
    /// Writes the encoding's byte order mark into `output`.
    ///
    /// The default implementation writes nothing, for encodings that have
    /// no byte order to mark.
    fn encode_bom(&mut self, _output: &mut BytesMut) {}

    /// Appends the encoded form of one character to `output`.
    fn encode(&mut self, c: char, output: &mut BytesMut);
}
