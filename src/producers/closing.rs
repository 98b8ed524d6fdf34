//! The corrected producer.
//!
//! [`ClosingProducer`] parks both senders inside a [`scopeguard`] before it
//! writes anything. Whichever way `produce` exits (all items written, a send
//! failing with `?`, or a panic unwinding the task) the guard's drop closes
//! the data channel and then the signal channel, exactly once each.

use crate::channel::{Completion, DataSender, SignalSender};
use crate::error::SelectError;
use crate::producer::{Producer, items};
use async_trait::async_trait;
use tracing::debug;

/// Writes `items` values, the terminal signal, then closes both channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosingProducer {
  items: usize,
  completion: Completion,
  name: String,
}

impl ClosingProducer {
  /// Creates a producer that writes `items` values and signals success.
  pub fn new(items: usize) -> Self {
    Self {
      items,
      completion: Ok(()),
      name: "closing_producer".to_string(),
    }
  }

  /// Sets the terminal value sent on the signal channel.
  pub fn with_completion(mut self, completion: Completion) -> Self {
    self.completion = completion;
    self
  }

  /// Sets the name used in log lines.
  pub fn with_name(mut self, name: String) -> Self {
    self.name = name;
    self
  }
}

#[async_trait]
impl Producer for ClosingProducer {
  async fn produce(self, data: DataSender, signal: SignalSender) -> Result<(), SelectError> {
    let ClosingProducer {
      items: count,
      completion,
      name,
    } = self;

    let release_name = name.clone();
    let channels = scopeguard::guard((data, signal), move |(data, signal)| {
      data.close();
      signal.close();
      debug!(producer = %release_name, "released data and signal channels");
    });
    let (data, signal) = &*channels;

    for item in items(count) {
      data.send(item).await?;
    }
    signal.send(completion).await?;

    debug!(producer = %name, items = count, "ClosingProducer::produce() finished");
    Ok(())
  }
}
