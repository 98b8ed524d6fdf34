//! The flawed consumer.
//!
//! [`StopFlagConsumer`] keeps a single `stop` flag. Anything that arrives on
//! the signal channel sets it, the expected success marker included, and the
//! loop ends right there. Items still buffered in the data channel are never
//! read.
//!
//! `tokio::select!` picks uniformly among ready branches. With a capacity-1
//! data channel the producer writes its last item and its signal while the
//! consumer sleeps on the previous item, so on the next iteration both
//! branches are ready and about half the runs end one item short.

use crate::channel::{DataReceiver, Received, SignalReceiver};
use crate::config::DelayPolicy;
use crate::consumer::{ChannelState, ConsumeReport, Consumer};
use crate::sink::{Line, Sink};
use async_trait::async_trait;
use tracing::debug;

/// Consumes until the first value (or closure) on the signal channel.
#[derive(Debug)]
pub struct StopFlagConsumer<S: Sink> {
  delay: DelayPolicy,
  sink: S,
}

impl<S: Sink> StopFlagConsumer<S> {
  /// Creates a consumer printing to `sink` after `delay` per item.
  pub fn new(delay: DelayPolicy, sink: S) -> Self {
    Self { delay, sink }
  }
}

#[async_trait]
impl<S: Sink> Consumer for StopFlagConsumer<S> {
  async fn consume(
    &mut self,
    data: &mut DataReceiver,
    signal: &mut SignalReceiver,
  ) -> ConsumeReport {
    let mut report = ConsumeReport::default();
    let mut stop = false;

    while !stop {
      tokio::select! {
        Received::Item(item) = data.recv() => {
          self.delay.wait().await;
          self.sink.emit(Line::Item(item.clone()));
          report.items.push(item);
        }
        received = signal.recv() => {
          stop = true;
          match received {
            Received::Item(Ok(())) => {
              self.sink.emit(Line::Signal(None));
              report.succeeded = true;
            }
            Received::Item(Err(error)) => {
              self.sink.emit(Line::Signal(Some(error.to_string())));
              report.reported.push(error);
            }
            Received::EndOfStream => self.sink.emit(Line::Signal(None)),
          }
        }
      }
    }

    // Only the signal is known to be finished; data may still be buffered.
    report.progress.signal = ChannelState::Exhausted;
    debug!(items = report.items.len(), "StopFlagConsumer::consume() stopped");
    report
  }
}
