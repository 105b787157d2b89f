//! Stream orchestrator: wires splitter → decoder → formatter into one
//! attachable transform stage.
//!
//! A [`PrettyStream`] moves through an explicit lifecycle:
//! `Created → Attached → Ended`. Color resolution happens exactly once, at
//! [`attach`](PrettyStream::attach), because TTY-ness is a property of the
//! destination. Writes before attachment are queued and drained when the
//! destination arrives; output preserves input line order exactly, one
//! output unit per input line.

use std::fs::File;
use std::io::{self, IsTerminal, Write};

use crate::color::{self, ColorContext};
use crate::config::FormatOptions;
use crate::error::PlumeError;
use crate::formatter;
use crate::splitter::LineSplitter;

/// An output destination that knows whether it is an interactive terminal.
pub trait Destination: Write {
    fn is_interactive(&self) -> bool;
}

impl Destination for io::Stdout {
    fn is_interactive(&self) -> bool {
        self.is_terminal()
    }
}

impl Destination for io::StdoutLock<'_> {
    fn is_interactive(&self) -> bool {
        self.is_terminal()
    }
}

impl Destination for File {
    fn is_interactive(&self) -> bool {
        self.is_terminal()
    }
}

impl Destination for Vec<u8> {
    fn is_interactive(&self) -> bool {
        false
    }
}

impl<W: Destination> Destination for io::BufWriter<W> {
    fn is_interactive(&self) -> bool {
        self.get_ref().is_interactive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreamState {
    Created,
    Attached,
    Ended,
}

/// The line-transform stage: `write` chunks in, formatted lines out.
pub struct PrettyStream<W: Destination> {
    options: FormatOptions,
    splitter: LineSplitter,
    state: StreamState,
    /// Input received before `attach`, replayed once a destination exists.
    queued: Vec<u8>,
    colors: Option<ColorContext>,
    dest: Option<W>,
    line_buf: String,
}

impl<W: Destination> PrettyStream<W> {
    /// Create a stream in the `Created` state. Options are immutable from
    /// here on.
    pub fn new(options: FormatOptions) -> Self {
        Self {
            options,
            splitter: LineSplitter::new(),
            state: StreamState::Created,
            queued: Vec::new(),
            colors: None,
            dest: None,
            line_buf: String::new(),
        }
    }

    /// Attach the output destination, resolving the color context against
    /// its TTY-ness, then drain any queued input.
    ///
    /// Valid exactly once, from the `Created` state.
    pub fn attach(&mut self, dest: W) -> Result<(), PlumeError> {
        if self.state != StreamState::Created {
            return Err(PlumeError::State("attach is only valid once, before output"));
        }

        let enabled =
            (color::supports_color() && dest.is_interactive()) || self.options.force_color;
        self.colors = Some(ColorContext::resolve(enabled));
        self.dest = Some(dest);
        self.state = StreamState::Attached;

        let queued = std::mem::take(&mut self.queued);
        if !queued.is_empty() {
            self.process(&queued)?;
        }
        Ok(())
    }

    /// Feed an input chunk.
    ///
    /// Before attachment the chunk is queued; afterwards every line it
    /// completes is formatted and forwarded immediately, in order.
    pub fn write(&mut self, chunk: &[u8]) -> Result<(), PlumeError> {
        match self.state {
            StreamState::Created => {
                self.queued.extend_from_slice(chunk);
                Ok(())
            }
            StreamState::Attached => self.process(chunk),
            StreamState::Ended => Err(PlumeError::State("write after end")),
        }
    }

    /// Close the input side: flush the trailing partial line and the
    /// destination. No further writes are accepted.
    pub fn end(&mut self) -> Result<(), PlumeError> {
        if self.state != StreamState::Attached {
            return Err(PlumeError::State("end requires an attached stream"));
        }
        if let Some(line) = self.splitter.finish() {
            self.emit(&line)?;
        }
        if let Some(dest) = self.dest.as_mut() {
            dest.flush()?;
        }
        self.state = StreamState::Ended;
        Ok(())
    }

    /// Give back the destination, consuming the stream. Used by tests to
    /// inspect captured output.
    pub fn into_destination(self) -> Option<W> {
        self.dest
    }

    fn process(&mut self, chunk: &[u8]) -> Result<(), PlumeError> {
        for line in self.splitter.push(chunk) {
            self.emit(&line)?;
        }
        Ok(())
    }

    fn emit(&mut self, line: &str) -> Result<(), PlumeError> {
        // Attached state guarantees a resolved context.
        let colors = self.colors.unwrap_or(ColorContext::resolve(false));

        self.line_buf.clear();
        formatter::format_line(line, &self.options, &colors, &mut self.line_buf);

        if let Some(dest) = self.dest.as_mut() {
            dest.write_all(self.line_buf.as_bytes())?;
        }
        Ok(())
    }
}
