//! I/O bridge between the engine and the outside world
//!
//! The engine never touches stdin or stdout directly; it talks to two small
//! collaborator traits so that tests (and embedders) can substitute
//! in-memory implementations:
//!
//! - [`ByteSource`]: yields one input byte at a time, `None` at
//!   end-of-stream. The `i` instruction blocks on this.
//! - [`TextSink`]: accepts output text and characters from `n` and `o`.
//!
//! Production input comes from [`RawTtySource`] when stdin is a terminal —
//! raw mode delivers a byte per keypress instead of per line — and from
//! [`StdinSource`] when input is piped. [`MemorySource`] and [`CaptureSink`]
//! back the test suite.

use std::collections::VecDeque;
use std::io::{self, Read, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Blocking, one-byte-at-a-time input collaborator
pub trait ByteSource {
    /// Read one byte; `None` signals end-of-stream
    fn read_byte(&mut self) -> Option<u8>;
}

impl ByteSource for Box<dyn ByteSource> {
    fn read_byte(&mut self) -> Option<u8> {
        (**self).read_byte()
    }
}

/// Output collaborator for numeric text and single characters
pub trait TextSink {
    fn write_text(&mut self, text: &str);

    fn write_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.write_text(ch.encode_utf8(&mut buf));
    }
}

/// Byte-at-a-time reader over piped or redirected stdin
pub struct StdinSource {
    stdin: io::Stdin,
}

impl StdinSource {
    pub fn new() -> Self {
        StdinSource { stdin: io::stdin() }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSource for StdinSource {
    fn read_byte(&mut self) -> Option<u8> {
        let mut buf = [0u8; 1];
        match self.stdin.read(&mut buf) {
            Ok(1) => Some(buf[0]),
            _ => None,
        }
    }
}

/// Unbuffered keypress reader for interactive terminals
///
/// Raw mode is held only for the duration of each read so that the
/// program's own output renders normally between keypresses. Ctrl-D signals
/// end-of-stream; Ctrl-C is reported the same way, since raw mode swallows
/// the usual interrupt.
pub struct RawTtySource;

impl RawTtySource {
    pub fn new() -> Self {
        RawTtySource
    }

    fn next_key() -> Option<u8> {
        loop {
            match event::read() {
                Ok(Event::Key(KeyEvent {
                    code,
                    modifiers,
                    kind: KeyEventKind::Press,
                    ..
                })) => match code {
                    KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return None;
                    }
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return None;
                    }
                    KeyCode::Char(ch) => {
                        let mut buf = [0u8; 4];
                        return Some(ch.encode_utf8(&mut buf).as_bytes()[0]);
                    }
                    KeyCode::Enter => return Some(b'\n'),
                    KeyCode::Tab => return Some(b'\t'),
                    KeyCode::Backspace => return Some(0x7f),
                    KeyCode::Esc => return Some(0x1b),
                    _ => continue,
                },
                Ok(_) => continue,
                Err(_) => return None,
            }
        }
    }
}

impl Default for RawTtySource {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSource for RawTtySource {
    fn read_byte(&mut self) -> Option<u8> {
        if enable_raw_mode().is_err() {
            return None;
        }
        let byte = Self::next_key();
        let _ = disable_raw_mode();
        byte
    }
}

/// Stdout sink, flushed per write so output is visible before blocking reads
pub struct StdoutSink {
    out: io::Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        StdoutSink { out: io::stdout() }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSink for StdoutSink {
    fn write_text(&mut self, text: &str) {
        let _ = self.out.write_all(text.as_bytes());
        let _ = self.out.flush();
    }
}

/// In-memory input queue for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    bytes: VecDeque<u8>,
}

impl MemorySource {
    pub fn new(bytes: &[u8]) -> Self {
        MemorySource {
            bytes: bytes.iter().copied().collect(),
        }
    }
}

impl ByteSource for MemorySource {
    fn read_byte(&mut self) -> Option<u8> {
        self.bytes.pop_front()
    }
}

/// Sink that accumulates everything written, for inspection after a run
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    text: String,
}

impl CaptureSink {
    pub fn new() -> Self {
        CaptureSink::default()
    }

    /// Everything written so far
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl TextSink for CaptureSink {
    fn write_text(&mut self, text: &str) {
        self.text.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_drains_then_ends() {
        let mut source = MemorySource::new(b"hi");
        assert_eq!(source.read_byte(), Some(b'h'));
        assert_eq!(source.read_byte(), Some(b'i'));
        assert_eq!(source.read_byte(), None);
        assert_eq!(source.read_byte(), None);
    }

    #[test]
    fn test_capture_sink_accumulates() {
        let mut sink = CaptureSink::new();
        sink.write_text("12");
        sink.write_char('!');
        assert_eq!(sink.text(), "12!");
    }
}
