//! # Consumer Trait
//!
//! A consumer owns the reading halves of both channels for the length of one
//! run and multiplexes them with a single `tokio::select!` per iteration.
//!
//! ## Key Concepts
//!
//! - **ChannelState**: whether a channel may still deliver values (`Open`) or
//!   has been fully observed (`Exhausted`).
//! - **ConsumeReport**: what a run printed and how each channel ended up.
//!
//! ## Implementations
//!
//! - [`DrainingConsumer`](crate::consumers::DrainingConsumer): tracks each
//!   channel's state separately and stops only when both are exhausted.
//! - [`StopFlagConsumer`](crate::consumers::StopFlagConsumer): a single stop
//!   flag, set by anything arriving on the signal channel.
//!
//! Receivers are borrowed, not consumed. The caller keeps them after
//! `consume` returns, so it can look at what a consumer left behind.

use crate::channel::{DataReceiver, SignalReceiver};
use crate::error::ReportedError;
use async_trait::async_trait;

/// Per-channel completion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelState {
  /// The channel may still deliver values.
  #[default]
  Open,
  /// The channel has been observed as finished.
  Exhausted,
}

impl ChannelState {
  /// Returns `true` for [`ChannelState::Exhausted`].
  pub fn is_exhausted(self) -> bool {
    self == ChannelState::Exhausted
  }
}

/// Completion state of both channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
  /// State of the data channel.
  pub data: ChannelState,
  /// State of the signal channel.
  pub signal: ChannelState,
}

impl Progress {
  /// Returns `true` once both channels are exhausted.
  pub fn is_drained(&self) -> bool {
    self.data.is_exhausted() && self.signal.is_exhausted()
  }
}

/// Outcome of one `consume` call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConsumeReport {
  /// Data items printed, in the order they were received.
  pub items: Vec<String>,
  /// Reported errors received on the signal channel.
  pub reported: Vec<ReportedError>,
  /// Whether the success marker was received.
  pub succeeded: bool,
  /// Channel states when the loop ended.
  pub progress: Progress,
}

/// A component that consumes the data and signal channels.
#[async_trait]
pub trait Consumer: Send {
  /// Runs the receive loop until the consumer decides it is done.
  async fn consume(
    &mut self,
    data: &mut DataReceiver,
    signal: &mut SignalReceiver,
  ) -> ConsumeReport;
}
