//! Run configuration.
//!
//! [`SelectConfig`] is a builder-style value: start from `default()` (the
//! classic demo: ten items, capacity one, a 100ms per-item delay) and override
//! what you need with the `with_*` setters.

use crate::error::SelectError;
use rand::Rng;
use std::time::Duration;
use tracing::trace;

/// Number of items the producer emits by default.
pub const DEFAULT_ITEMS: usize = 10;
/// Buffer size of both channels by default.
pub const DEFAULT_CAPACITY: usize = 1;
/// Per-item delay applied by the consumer by default.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// Which producer/consumer pair a session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Design {
  /// Closing producer plus draining consumer: every item is delivered.
  #[default]
  Corrected,
  /// Leaky producer plus stop-flag consumer: items may be lost.
  Flawed,
}

/// Artificial delay the consumer applies before printing each data item.
///
/// The delay exists only to widen the window in which the producer can finish
/// and enqueue its signal while data is still buffered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayPolicy {
  /// Print immediately.
  None,
  /// Sleep a fixed duration.
  Fixed(Duration),
  /// Sleep a uniformly random duration in `[0, max]`.
  Jitter(Duration),
}

impl Default for DelayPolicy {
  fn default() -> Self {
    DelayPolicy::Fixed(DEFAULT_DELAY)
  }
}

impl DelayPolicy {
  /// Picks the duration for the next wait.
  pub fn next_delay(&self) -> Duration {
    match *self {
      DelayPolicy::None => Duration::ZERO,
      DelayPolicy::Fixed(delay) => delay,
      DelayPolicy::Jitter(max) => {
        let max_micros = u64::try_from(max.as_micros()).unwrap_or(u64::MAX);
        Duration::from_micros(rand::thread_rng().gen_range(0..=max_micros))
      }
    }
  }

  /// Sleeps for the next delay. Returns immediately for a zero delay.
  pub async fn wait(&self) {
    let delay = self.next_delay();
    if delay.is_zero() {
      return;
    }
    trace!(?delay, "DelayPolicy::wait()");
    tokio::time::sleep(delay).await;
  }
}

/// Configuration for one producer/consumer session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectConfig {
  /// Number of data items the producer writes.
  pub items: usize,
  /// Buffer size of the data and signal channels.
  pub capacity: usize,
  /// Delay the consumer applies before printing each item.
  pub delay: DelayPolicy,
  /// Producer/consumer pair to run.
  pub design: Design,
  /// When set, the producer's terminal signal is this error instead of success.
  pub reported_error: Option<String>,
  /// Optional name used in log lines.
  pub name: Option<String>,
}

impl Default for SelectConfig {
  fn default() -> Self {
    Self {
      items: DEFAULT_ITEMS,
      capacity: DEFAULT_CAPACITY,
      delay: DelayPolicy::default(),
      design: Design::default(),
      reported_error: None,
      name: None,
    }
  }
}

impl SelectConfig {
  /// Sets the number of items to produce.
  pub fn with_items(mut self, items: usize) -> Self {
    self.items = items;
    self
  }

  /// Sets the buffer size of both channels.
  pub fn with_capacity(mut self, capacity: usize) -> Self {
    self.capacity = capacity;
    self
  }

  /// Sets the per-item consumer delay.
  pub fn with_delay(mut self, delay: DelayPolicy) -> Self {
    self.delay = delay;
    self
  }

  /// Selects the design to run.
  pub fn with_design(mut self, design: Design) -> Self {
    self.design = design;
    self
  }

  /// Makes the producer report `message` as its terminal signal.
  pub fn with_reported_error(mut self, message: impl Into<String>) -> Self {
    self.reported_error = Some(message.into());
    self
  }

  /// Sets the name used in log lines.
  pub fn with_name(mut self, name: String) -> Self {
    self.name = Some(name);
    self
  }

  /// Returns the configured name, or one derived from the design.
  pub fn name(&self) -> String {
    self.name.clone().unwrap_or_else(|| match self.design {
      Design::Corrected => "corrected".to_string(),
      Design::Flawed => "flawed".to_string(),
    })
  }

  /// Checks that the configuration can be run.
  ///
  /// # Errors
  ///
  /// [`SelectError::InvalidConfig`] if `capacity` is zero; tokio's bounded
  /// channels need room for at least one value.
  pub fn validate(&self) -> Result<(), SelectError> {
    if self.capacity == 0 {
      return Err(SelectError::InvalidConfig(
        "channel capacity must be at least 1".to_string(),
      ));
    }
    Ok(())
  }
}
