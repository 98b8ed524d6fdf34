//! The flawed producer.
//!
//! [`LeakyProducer`] writes its items and one terminal value and simply
//! returns. It never closes anything itself: the channels end only because
//! its task ends and the senders go with it. Paired with the stop-flag
//! consumer this loses data whenever the signal wins the select while an item
//! is still buffered.

use crate::channel::{Completion, DataSender, SignalSender};
use crate::error::SelectError;
use crate::producer::{Producer, items};
use async_trait::async_trait;
use tracing::debug;

/// Writes `items` values and the terminal signal, with no release step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeakyProducer {
  items: usize,
  completion: Completion,
}

impl LeakyProducer {
  /// Creates a producer that writes `items` values and signals success.
  pub fn new(items: usize) -> Self {
    Self {
      items,
      completion: Ok(()),
    }
  }

  /// Sets the terminal value sent on the signal channel.
  pub fn with_completion(mut self, completion: Completion) -> Self {
    self.completion = completion;
    self
  }
}

#[async_trait]
impl Producer for LeakyProducer {
  async fn produce(self, data: DataSender, signal: SignalSender) -> Result<(), SelectError> {
    for item in items(self.items) {
      data.send(item).await?;
    }
    signal.send(self.completion).await?;
    debug!(items = self.items, "LeakyProducer::produce() finished");
    Ok(())
  }
}
