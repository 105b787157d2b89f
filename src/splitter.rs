//! Line splitter: turns an arbitrary chunk stream into discrete lines.
//!
//! Chunks arrive at whatever boundaries the reader produces, so a partial
//! line (including a multi-byte UTF-8 sequence cut mid-character) is buffered
//! until its terminating `\n` arrives. A final line with no trailing newline
//! is emitted by [`finish`](LineSplitter::finish) on stream end.

/// Incremental `\n`-delimited line splitter.
///
/// One splitter per stream lifetime; not restartable after
/// [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct LineSplitter {
    buf: Vec<u8>,
}

impl LineSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk and drain every line completed by it.
    ///
    /// Lines are returned with the `\n` delimiter stripped, in input order.
    /// Bytes after the last delimiter stay buffered for the next chunk.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buf.extend_from_slice(chunk);

        let mut lines = Vec::new();
        let mut start = 0;
        while let Some(pos) = self.buf[start..].iter().position(|&b| b == b'\n') {
            let end = start + pos;
            lines.push(String::from_utf8_lossy(&self.buf[start..end]).into_owned());
            start = end + 1;
        }
        self.buf.drain(..start);

        lines
    }

    /// Emit the trailing unterminated line, if any.
    pub fn finish(&mut self) -> Option<String> {
        if self.buf.is_empty() {
            return None;
        }
        let line = String::from_utf8_lossy(&self.buf).into_owned();
        self.buf.clear();
        Some(line)
    }
}
