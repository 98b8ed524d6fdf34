//! # Session
//!
//! One run of the handshake: create both channels, spawn the producer, run
//! the consumer on the calling task, then account for anything left behind.
//!
//! ## Lifecycle
//!
//! 1. Validate the [`SelectConfig`] and create the data and signal channels.
//! 2. Spawn the producer of the configured [`Design`] with both senders.
//! 3. Run the matching consumer with both receivers until it returns.
//! 4. Take whatever is still buffered in the data channel without waiting.
//!    For the corrected design this is always empty.
//! 5. Drop both receivers. A producer still blocked on a send now fails with
//!    [`SelectError::ReceiverGone`] instead of staying blocked forever.
//! 6. Join the producer task and report its result.

use crate::channel;
use crate::config::{Design, SelectConfig};
use crate::consumer::{ConsumeReport, Consumer};
use crate::consumers::{DrainingConsumer, StopFlagConsumer};
use crate::error::SelectError;
use crate::producer::{self, Producer};
use crate::producers::{ClosingProducer, LeakyProducer};
use crate::sink::Sink;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Outcome of one session.
#[derive(Debug)]
pub struct RunReport {
  /// Number of items the producer was configured to write.
  pub expected: usize,
  /// What the consumer printed and observed.
  pub consumed: ConsumeReport,
  /// Items found still buffered in the data channel after the consumer returned.
  pub abandoned: Vec<String>,
  /// The producer task's own result.
  pub producer: Result<(), SelectError>,
}

impl RunReport {
  /// Returns `true` if every produced item was printed.
  pub fn is_complete(&self) -> bool {
    self.consumed.items.len() == self.expected
  }

  /// Number of produced items that were never printed.
  pub fn missing(&self) -> usize {
    self.expected.saturating_sub(self.consumed.items.len())
  }
}

fn spawn_producer<P: Producer>(
  producer: P,
  data: channel::DataSender,
  signal: channel::SignalSender,
) -> JoinHandle<Result<(), SelectError>> {
  tokio::spawn(async move { producer.produce(data, signal).await })
}

/// Runs one session, printing through `sink`.
///
/// # Errors
///
/// - [`SelectError::InvalidConfig`] if the configuration is rejected.
/// - [`SelectError::Producer`] if the producer task panicked.
///
/// A producer that merely failed to send is not an error of the session; it
/// is reported in [`RunReport::producer`].
pub async fn run<S: Sink>(config: &SelectConfig, sink: S) -> Result<RunReport, SelectError> {
  config.validate()?;
  let name = config.name();
  debug!(
    session = %name,
    design = ?config.design,
    items = config.items,
    capacity = config.capacity,
    "session::run()"
  );

  let (data_tx, mut data_rx) = channel::data_channel(config.capacity);
  let (signal_tx, mut signal_rx) = channel::signal_channel(config.capacity);
  let completion = producer::completion(config.reported_error.as_deref());

  let (handle, consumed) = match config.design {
    Design::Corrected => {
      let producer = ClosingProducer::new(config.items)
        .with_completion(completion)
        .with_name(name.clone());
      let handle = spawn_producer(producer, data_tx, signal_tx);
      let mut consumer = DrainingConsumer::new(config.delay, sink);
      let consumed = consumer.consume(&mut data_rx, &mut signal_rx).await;
      (handle, consumed)
    }
    Design::Flawed => {
      let producer = LeakyProducer::new(config.items).with_completion(completion);
      let handle = spawn_producer(producer, data_tx, signal_tx);
      let mut consumer = StopFlagConsumer::new(config.delay, sink);
      let consumed = consumer.consume(&mut data_rx, &mut signal_rx).await;
      (handle, consumed)
    }
  };

  let abandoned = data_rx.take_buffered();
  if !abandoned.is_empty() {
    warn!(session = %name, abandoned = ?abandoned, "consumer left items in the data channel");
  }
  drop(data_rx);
  drop(signal_rx);

  let producer = handle.await?;
  if let Err(error) = &producer {
    warn!(session = %name, %error, "producer ended with an error");
  }

  debug!(
    session = %name,
    printed = consumed.items.len(),
    abandoned = abandoned.len(),
    "session::run() finished"
  );
  Ok(RunReport {
    expected: config.items,
    consumed,
    abandoned,
    producer,
  })
}
