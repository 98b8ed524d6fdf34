//! # chanselect
//!
//! A producer and a consumer talking over two bounded channels, one for data
//! items and one for a completion signal, with the consumer multiplexing both
//! through `tokio::select!`.
//!
//! The crate ships two designs of the same handshake:
//!
//! - **Corrected**: the producer closes both channels through a scope guard on
//!   every exit path; the consumer tracks each channel's exhaustion separately
//!   and stops only when both are done. Every item is printed, in order.
//! - **Flawed**: the producer takes no part in closing; the consumer stops on
//!   the first thing it sees on the signal channel. Because `select!` picks
//!   randomly among ready branches, some runs drop buffered items.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chanselect::{Design, SelectConfig, StdoutSink, session};
//!
//! # async fn example() -> Result<(), chanselect::SelectError> {
//! let config = SelectConfig::default().with_design(Design::Corrected);
//! let report = session::run(&config, StdoutSink).await?;
//! assert!(report.is_complete());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

/// Named bounded channels and the end-of-stream variant.
pub mod channel;
/// Run configuration and delay policies.
pub mod config;
/// Consumer trait and per-channel completion state.
pub mod consumer;
/// Draining and stop-flag consumers.
pub mod consumers;
/// Reported errors and crate errors.
pub mod error;
/// Producer trait and item generation.
pub mod producer;
/// Closing and leaky producers.
pub mod producers;
/// One producer/consumer run.
pub mod session;
/// Console line sinks.
pub mod sink;
/// Repeated runs and loss statistics.
pub mod trials;

pub use channel::{Completion, Received};
pub use config::{DelayPolicy, Design, SelectConfig};
pub use consumer::{ChannelState, ConsumeReport, Consumer, Progress};
pub use error::{ReportedError, SelectError};
pub use producer::Producer;
pub use session::RunReport;
pub use sink::{Line, MemorySink, NullSink, Sink, StdoutSink};
pub use trials::TrialSummary;

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod session_test;
