//! Decoding of child-process output lines.

/// Turn one raw line (as returned by `read_until(b'\n')`) into display text.
///
/// Strips one trailing `\n` and an optional `\r` before it. Invalid UTF-8 is
/// replaced rather than rejected so a stray byte never ends the stream.
#[must_use]
pub fn decode_line(raw: &[u8]) -> String {
    let trimmed = raw.strip_suffix(b"\n").unwrap_or(raw);
    let trimmed = trimmed.strip_suffix(b"\r").unwrap_or(trimmed);
    String::from_utf8_lossy(trimmed).into_owned()
}
