//! The corrected consumer.
//!
//! [`DrainingConsumer`] keeps one [`ChannelState`] per channel and loops until
//! both are exhausted. A branch whose channel is exhausted is disabled by its
//! `select!` precondition, so a closed channel is never polled again and the
//! loop cannot spin on it.
//!
//! Transitions:
//!
//! | received on | value              | effect                          |
//! |-------------|--------------------|---------------------------------|
//! | data        | `Item(v)`          | delay, print `v`                |
//! | data        | `EndOfStream`      | data exhausted                  |
//! | signal      | `Item(Ok(()))`     | print `nil`, signal exhausted   |
//! | signal      | `Item(Err(e))`     | print `e`, signal stays open    |
//! | signal      | `EndOfStream`      | signal exhausted                |

use crate::channel::{DataReceiver, Received, SignalReceiver};
use crate::config::DelayPolicy;
use crate::consumer::{ChannelState, ConsumeReport, Consumer, Progress};
use crate::sink::{Line, Sink};
use async_trait::async_trait;
use tracing::{debug, trace};

/// Consumes until both the data and the signal channel are exhausted.
#[derive(Debug)]
pub struct DrainingConsumer<S: Sink> {
  delay: DelayPolicy,
  sink: S,
}

impl<S: Sink> DrainingConsumer<S> {
  /// Creates a consumer printing to `sink` after `delay` per item.
  pub fn new(delay: DelayPolicy, sink: S) -> Self {
    Self { delay, sink }
  }
}

#[async_trait]
impl<S: Sink> Consumer for DrainingConsumer<S> {
  async fn consume(
    &mut self,
    data: &mut DataReceiver,
    signal: &mut SignalReceiver,
  ) -> ConsumeReport {
    let mut report = ConsumeReport::default();
    let mut progress = Progress::default();

    while !progress.is_drained() {
      tokio::select! {
        received = data.recv(), if !progress.data.is_exhausted() => match received {
          Received::Item(item) => {
            self.delay.wait().await;
            self.sink.emit(Line::Item(item.clone()));
            report.items.push(item);
          }
          Received::EndOfStream => {
            trace!("data channel exhausted");
            self.sink.emit(Line::EndOfData);
            progress.data = ChannelState::Exhausted;
          }
        },
        received = signal.recv(), if !progress.signal.is_exhausted() => match received {
          Received::Item(Ok(())) => {
            self.sink.emit(Line::Signal(None));
            report.succeeded = true;
            progress.signal = ChannelState::Exhausted;
          }
          Received::Item(Err(error)) => {
            self.sink.emit(Line::Signal(Some(error.to_string())));
            report.reported.push(error);
          }
          Received::EndOfStream => {
            trace!("signal channel exhausted");
            progress.signal = ChannelState::Exhausted;
          }
        },
      }
    }

    debug!(
      items = report.items.len(),
      reported = report.reported.len(),
      "DrainingConsumer::consume() drained both channels"
    );
    report.progress = progress;
    report
  }
}
