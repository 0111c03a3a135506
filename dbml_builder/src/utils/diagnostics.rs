//! Sink for the code generator's incidental console output
//!
//! omymodels prints progress text no matter which quiet flags it is given.
//! Generation calls take an explicit `&mut dyn Write` for that text: either
//! `std::io::sink()` to drop it, or a [`DiagnosticLog`] to turn it into
//! `debug` events.

use std::io::{self, Write};

/// Line-buffered writer that re-emits each line as a `debug` event.
///
/// A trailing partial line is emitted on `flush` and on drop, so the sink
/// is fully released however the generation scope exits.
pub struct DiagnosticLog {
    source: &'static str,
    pending: Vec<u8>,
    emitted: usize,
}

impl DiagnosticLog {
    pub fn new(source: &'static str) -> Self {
        Self {
            source,
            pending: Vec::new(),
            emitted: 0,
        }
    }

    /// Number of lines forwarded so far
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    fn emit(&mut self, raw: &[u8]) {
        let text = String::from_utf8_lossy(raw);
        let text = text.trim_end_matches(['\r', '\n']);
        if text.trim().is_empty() {
            return;
        }
        tracing::debug!(source = self.source, "{}", text);
        self.emitted += 1;
    }

    fn emit_pending(&mut self) {
        if !self.pending.is_empty() {
            let rest = std::mem::take(&mut self.pending);
            self.emit(&rest);
        }
    }
}

impl Write for DiagnosticLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        while let Some(pos) = self.pending.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            self.emit(&line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit_pending();
        Ok(())
    }
}

impl Drop for DiagnosticLog {
    fn drop(&mut self) {
        self.emit_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_complete_lines_and_holds_partial_ones() {
        let mut log = DiagnosticLog::new("test");
        log.write_all(b"Generating models...\r\nstill ").unwrap();
        assert_eq!(log.emitted(), 1);

        log.write_all(b"going\n\n").unwrap();
        assert_eq!(log.emitted(), 2);

        log.write_all(b"done").unwrap();
        log.flush().unwrap();
        assert_eq!(log.emitted(), 3);
    }
}
