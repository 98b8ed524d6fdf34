//! # Data and Signal Channels
//!
//! Thin, named wrappers over bounded `tokio::sync::mpsc` channels.
//!
//! ## Overview
//!
//! The handshake uses two channels:
//!
//! - the **data channel** carries `String` items from producer to consumer;
//! - the **signal channel** carries one [`Completion`]: `Ok(())` for success
//!   or `Err(ReportedError)` for a reported error.
//!
//! Receiving never returns a bare value. It returns [`Received`], which keeps
//! "a value arrived" apart from "the channel is closed and drained". An empty
//! string item is therefore just an item, never an end-of-stream marker.
//!
//! ## Ownership
//!
//! Each channel has one writer and one reader. Closing is done by the writer
//! through [`ChannelSender::close`], which consumes the sender: a channel can
//! be closed once and only once, and sending after close does not compile.
//!
//! ## Example
//!
//! ```rust
//! use chanselect::channel::{self, Received};
//!
//! # async fn example() -> Result<(), chanselect::SelectError> {
//! let (tx, mut rx) = channel::data_channel(1);
//! tx.send(String::new()).await?;
//! tx.close();
//!
//! assert_eq!(rx.recv().await, Received::Item(String::new()));
//! assert_eq!(rx.recv().await, Received::EndOfStream);
//! # Ok(())
//! # }
//! ```

use crate::error::{ReportedError, SelectError};
use tokio::sync::mpsc;
use tracing::trace;

/// Name of the data channel in log lines and errors.
pub const DATA: &str = "data";
/// Name of the signal channel in log lines and errors.
pub const SIGNAL: &str = "signal";

/// The terminal value sent on the signal channel.
pub type Completion = Result<(), ReportedError>;

/// Sending half of the data channel.
pub type DataSender = ChannelSender<String>;
/// Receiving half of the data channel.
pub type DataReceiver = ChannelReceiver<String>;
/// Sending half of the signal channel.
pub type SignalSender = ChannelSender<Completion>;
/// Receiving half of the signal channel.
pub type SignalReceiver = ChannelReceiver<Completion>;

/// Outcome of a receive: a value, or the end of the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Received<T> {
  /// A value sent by the producer.
  Item(T),
  /// The channel is closed and every buffered value has been read.
  EndOfStream,
}

impl<T> From<Option<T>> for Received<T> {
  fn from(value: Option<T>) -> Self {
    match value {
      Some(item) => Received::Item(item),
      None => Received::EndOfStream,
    }
  }
}

impl<T> Received<T> {
  /// Returns `true` for [`Received::EndOfStream`].
  pub fn is_end_of_stream(&self) -> bool {
    matches!(self, Received::EndOfStream)
  }
}

/// Writing end of a named bounded channel.
#[derive(Debug)]
pub struct ChannelSender<T> {
  name: &'static str,
  inner: mpsc::Sender<T>,
}

/// Reading end of a named bounded channel.
#[derive(Debug)]
pub struct ChannelReceiver<T> {
  name: &'static str,
  inner: mpsc::Receiver<T>,
}

/// Creates a named bounded channel.
///
/// # Panics
///
/// Panics if `capacity` is zero, like `tokio::sync::mpsc::channel`.
/// [`SelectConfig::validate`](crate::SelectConfig::validate) rejects that
/// before a session gets here.
pub fn bounded<T>(
  name: &'static str,
  capacity: usize,
) -> (ChannelSender<T>, ChannelReceiver<T>) {
  trace!(channel = name, capacity, "channel::bounded()");
  let (tx, rx) = mpsc::channel(capacity);
  (
    ChannelSender { name, inner: tx },
    ChannelReceiver { name, inner: rx },
  )
}

/// Creates the data channel.
pub fn data_channel(capacity: usize) -> (DataSender, DataReceiver) {
  bounded(DATA, capacity)
}

/// Creates the signal channel.
pub fn signal_channel(capacity: usize) -> (SignalSender, SignalReceiver) {
  bounded(SIGNAL, capacity)
}

impl<T> ChannelSender<T> {
  /// Name of this channel.
  pub fn name(&self) -> &'static str {
    self.name
  }

  /// Sends a value, waiting while the buffer is full.
  ///
  /// # Errors
  ///
  /// [`SelectError::ReceiverGone`] if the receiver has been dropped.
  pub async fn send(&self, value: T) -> Result<(), SelectError> {
    self
      .inner
      .send(value)
      .await
      .map_err(|_| SelectError::ReceiverGone { channel: self.name })?;
    trace!(channel = self.name, "ChannelSender::send()");
    Ok(())
  }

  /// Closes the channel. Values already buffered stay readable; once they are
  /// drained the receiver sees [`Received::EndOfStream`].
  pub fn close(self) {
    trace!(channel = self.name, "ChannelSender::close()");
    drop(self.inner);
  }
}

impl<T> ChannelReceiver<T> {
  /// Name of this channel.
  pub fn name(&self) -> &'static str {
    self.name
  }

  /// Receives the next value, waiting while the channel is empty and open.
  ///
  /// Cancel safe, so it can sit in a `tokio::select!` branch.
  pub async fn recv(&mut self) -> Received<T> {
    self.inner.recv().await.into()
  }

  /// Takes every value currently buffered without waiting.
  pub fn take_buffered(&mut self) -> Vec<T> {
    let mut buffered = Vec::new();
    while let Ok(value) = self.inner.try_recv() {
      buffered.push(value);
    }
    buffered
  }
}
