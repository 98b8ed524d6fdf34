//! # Producer Trait
//!
//! A producer owns the sending halves of both channels for the length of one
//! run. It writes its data items, then exactly one terminal value on the
//! signal channel.
//!
//! ## Implementations
//!
//! - [`ClosingProducer`](crate::producers::ClosingProducer): releases both
//!   channels through a scope guard on every exit path.
//! - [`LeakyProducer`](crate::producers::LeakyProducer): takes no part in
//!   closing; the channels end only because its task ends.
//!
//! Producers run on their own task:
//!
//! ```rust
//! use chanselect::channel;
//! use chanselect::producer::Producer;
//! use chanselect::producers::ClosingProducer;
//!
//! # async fn example() -> Result<(), chanselect::SelectError> {
//! let (data_tx, _data_rx) = channel::data_channel(1);
//! let (signal_tx, _signal_rx) = channel::signal_channel(1);
//! let producer = ClosingProducer::new(3);
//! let handle = tokio::spawn(producer.produce(data_tx, signal_tx));
//! # drop(handle);
//! # Ok(())
//! # }
//! ```

use crate::channel::{Completion, DataSender, SignalSender};
use crate::error::{ReportedError, SelectError};
use async_trait::async_trait;

/// A component that writes data items and one terminal signal.
#[async_trait]
pub trait Producer: Send + 'static {
  /// Writes every item onto `data`, then the terminal value onto `signal`.
  ///
  /// Takes both senders by value: whatever the producer does with them on
  /// exit decides when the consumer sees each channel end.
  ///
  /// # Errors
  ///
  /// [`SelectError::ReceiverGone`] if a send finds the receiver dropped.
  async fn produce(self, data: DataSender, signal: SignalSender) -> Result<(), SelectError>;
}

/// The `n` items a producer writes: `"0"`, `"1"`, ... `"n-1"`.
pub fn items(n: usize) -> impl Iterator<Item = String> {
  (0..n).map(|i| i.to_string())
}

/// Builds the terminal signal: success, or the configured reported error.
pub fn completion(reported_error: Option<&str>) -> Completion {
  match reported_error {
    Some(message) => Err(ReportedError::new(message)),
    None => Ok(()),
  }
}
