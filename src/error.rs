//! # Error Handling
//!
//! Errors that can surface while running the two-channel handshake.
//!
//! ## Overview
//!
//! Two kinds of value live here, and they must not be confused:
//!
//! - **[`ReportedError`]**: a value the producer *sends* on the signal channel.
//!   It is data, surfaced to the console by the consumer. It never aborts
//!   anything by itself.
//! - **[`SelectError`]**: a failure of the machinery itself (a receiver that
//!   went away, an invalid configuration, a producer task that panicked).
//!
//! "No more data" is not an error at all: it is
//! [`Received::EndOfStream`](crate::channel::Received::EndOfStream).

use thiserror::Error;
use tokio::task::JoinError;

/// An error value carried on the signal channel.
///
/// The producer sends `Err(ReportedError)` instead of the success marker when
/// it has something to report. Consumers print it; the corrected consumer
/// keeps waiting for the channel to close afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ReportedError {
  message: String,
}

impl ReportedError {
  /// Creates a reported error with the given message.
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
    }
  }

  /// Returns the message carried by this error.
  pub fn message(&self) -> &str {
    &self.message
  }
}

/// Errors produced by the handshake machinery.
#[derive(Debug, Error)]
pub enum SelectError {
  /// A send failed because the reading side dropped its receiver.
  #[error("{channel} channel receiver is gone")]
  ReceiverGone {
    /// Name of the channel whose receiver disappeared.
    channel: &'static str,
  },
  /// The configuration cannot be run.
  #[error("invalid configuration: {0}")]
  InvalidConfig(String),
  /// The producer task panicked or was cancelled.
  #[error("producer task failed: {0}")]
  Producer(#[from] JoinError),
}

impl SelectError {
  /// Returns `true` if this error means a send found nobody listening.
  ///
  /// In the flawed design this is how a producer that would otherwise block
  /// forever gets released once the session drops the receivers.
  pub fn is_receiver_gone(&self) -> bool {
    matches!(self, SelectError::ReceiverGone { .. })
  }
}
