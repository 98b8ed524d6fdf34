//! Where consumers print their lines.
//!
//! Consumers never call `println!` directly; they hand a [`Line`] to a
//! [`Sink`]. The binaries use [`StdoutSink`], tests use [`MemorySink`] to
//! count what was printed, and trial runs use [`NullSink`].

use std::fmt;
use std::sync::{Arc, Mutex};

/// One line of console output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
  /// A consumed data item.
  Item(String),
  /// The data channel was observed closed and drained.
  EndOfData,
  /// A value received on the signal channel. `None` is the success marker.
  Signal(Option<String>),
}

impl fmt::Display for Line {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Line::Item(item) => write!(f, "data: {}", item),
      Line::EndOfData => write!(f, "data: end of stream"),
      Line::Signal(None) => write!(f, "error: nil"),
      Line::Signal(Some(message)) => write!(f, "error: {}", message),
    }
  }
}

/// Destination for console lines.
pub trait Sink: Send {
  /// Emits one line.
  fn emit(&mut self, line: Line);
}

/// Writes every line to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
  fn emit(&mut self, line: Line) {
    println!("{}", line);
  }
}

/// Discards every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl Sink for NullSink {
  fn emit(&mut self, _line: Line) {}
}

/// Keeps every line in memory. Clones share the same buffer, so a test can
/// hand one clone to a consumer and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
  lines: Arc<Mutex<Vec<Line>>>,
}

impl MemorySink {
  /// Creates an empty sink.
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns a copy of every line emitted so far.
  pub fn lines(&self) -> Vec<Line> {
    self
      .lines
      .lock()
      .unwrap_or_else(|poisoned| poisoned.into_inner())
      .clone()
  }

  /// Returns the data items emitted so far, in order.
  pub fn items(&self) -> Vec<String> {
    self
      .lines()
      .into_iter()
      .filter_map(|line| match line {
        Line::Item(item) => Some(item),
        _ => None,
      })
      .collect()
  }
}

impl Sink for MemorySink {
  fn emit(&mut self, line: Line) {
    self
      .lines
      .lock()
      .unwrap_or_else(|poisoned| poisoned.into_inner())
      .push(line);
  }
}
