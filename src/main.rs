use std::fs;
use std::io;

use anyhow::{Context, Result};
use byteorder::BigEndian;
use bytes::Bytes;
use textcode::{Transcoder, Utf16Encoder, Utf8Decoder};

// Input comes from a fixed file name in the current directory; the
// converted text goes to standard output, diagnostics to standard error.
const INPUT_FILE: &str = "huts.utf8.txt";

fn main() -> Result<()> {
    let contents = fs::read(INPUT_FILE)
        .with_context(|| format!("failed to read {}", INPUT_FILE))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let transcoder =
        Transcoder::new(Utf8Decoder::new(), Utf16Encoder::<BigEndian>::new());
    transcoder
        .transcode(Bytes::from(contents), &mut out)
        .context("conversion to UTF-16 failed")?;
    Ok(())
}
