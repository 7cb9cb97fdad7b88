//! Output streaming - incremental delivery of child process output
//!
//! Provides:
//! - `OutputStream` tag for stdout / stderr chunks
//! - `OutputSink` observer trait
//! - `Utf8Decoder` that never splits a multi-byte sequence across chunks
//! - `OutputBuffer` sink that records every chunk

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Which pipe a chunk came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputStream {
    /// Standard output
    Stdout,
    /// Standard error
    Stderr,
}

impl OutputStream {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputStream::Stdout => "stdout",
            OutputStream::Stderr => "stderr",
        }
    }
}

/// Observer for process output
///
/// Chunks arrive in the order the OS delivered them on each stream. There is
/// no ordering guarantee between the two streams.
pub trait OutputSink: Send + Sync {
    fn on_output(&self, stream: OutputStream, chunk: &str);
}

// ============================================================================
// Utf8Decoder
// ============================================================================

/// Incremental UTF-8 decoder
///
/// Holds back an incomplete trailing sequence until the next read. Invalid
/// bytes become U+FFFD.
#[derive(Debug, Default)]
pub struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode as much of `bytes` (plus any held-back bytes) as possible
    pub fn decode(&mut self, bytes: &[u8]) -> String {
        self.pending.extend_from_slice(bytes);
        let mut out = String::with_capacity(self.pending.len());

        loop {
            match std::str::from_utf8(&self.pending) {
                Ok(text) => {
                    out.push_str(text);
                    self.pending.clear();
                    break;
                }
                Err(e) => {
                    let valid = e.valid_up_to();
                    if let Ok(text) = std::str::from_utf8(&self.pending[..valid]) {
                        out.push_str(text);
                    }
                    match e.error_len() {
                        Some(len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            self.pending.drain(..valid + len);
                        }
                        None => {
                            // incomplete sequence at the end, wait for more bytes
                            self.pending.drain(..valid);
                            break;
                        }
                    }
                }
            }
        }

        out
    }

    /// Flush whatever is left at end of stream
    pub fn finish(&mut self) -> String {
        let rest = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        rest
    }
}

// ============================================================================
// OutputBuffer
// ============================================================================

/// Sink that records every chunk it receives
#[derive(Debug, Default)]
pub struct OutputBuffer {
    chunks: Mutex<Vec<(OutputStream, String)>>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All chunks in arrival order
    pub fn chunks(&self) -> Vec<(OutputStream, String)> {
        self.chunks.lock().clone()
    }

    /// Concatenation of the chunks of one stream
    pub fn text(&self, stream: OutputStream) -> String {
        self.chunks
            .lock()
            .iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, chunk)| chunk.as_str())
            .collect()
    }

    /// Concatenation of all chunks, interleaved as received
    pub fn combined(&self) -> String {
        self.chunks
            .lock()
            .iter()
            .map(|(_, chunk)| chunk.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.lock().is_empty()
    }
}

impl OutputSink for OutputBuffer {
    fn on_output(&self, stream: OutputStream, chunk: &str) {
        self.chunks.lock().push((stream, chunk.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoder_holds_back_split_sequence() {
        let bytes = "팀 190".as_bytes();
        let mut decoder = Utf8Decoder::new();

        // '팀' is three bytes; split after the first one
        let first = decoder.decode(&bytes[..1]);
        assert_eq!(first, "");

        let rest = decoder.decode(&bytes[1..]);
        assert_eq!(rest, "팀 190");
        assert_eq!(decoder.finish(), "");
    }

    #[test]
    fn test_decoder_replaces_invalid_bytes() {
        let mut decoder = Utf8Decoder::new();
        let text = decoder.decode(&[b'a', 0xff, b'b']);
        assert_eq!(text, "a\u{FFFD}b");
    }

    #[test]
    fn test_decoder_flushes_truncated_tail() {
        let mut decoder = Utf8Decoder::new();
        assert_eq!(decoder.decode(&[b'x', 0xe2, 0x82]), "x");
        assert_eq!(decoder.finish(), "\u{FFFD}");
    }

    #[test]
    fn test_output_buffer_per_stream() {
        let buffer = OutputBuffer::new();
        buffer.on_output(OutputStream::Stdout, "a");
        buffer.on_output(OutputStream::Stderr, "x");
        buffer.on_output(OutputStream::Stdout, "b");

        assert_eq!(buffer.text(OutputStream::Stdout), "ab");
        assert_eq!(buffer.text(OutputStream::Stderr), "x");
        assert_eq!(buffer.combined(), "axb");
        assert_eq!(buffer.chunks().len(), 3);
    }
}
