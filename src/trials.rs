//! Repeated sessions.
//!
//! A single run of the flawed design may well print every item. Whether data
//! loss is real only shows over many runs, so [`run_trials`] repeats a session
//! and counts the short ones.

use crate::config::SelectConfig;
use crate::error::SelectError;
use crate::session;
use crate::sink::NullSink;
use tracing::debug;

/// Summary of repeated sessions of one configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrialSummary {
  /// Sessions run.
  pub runs: usize,
  /// Items each session was expected to print.
  pub expected: usize,
  /// Sessions that printed fewer items than expected.
  pub short_runs: usize,
  /// Fewest items printed by any session.
  pub fewest_printed: Option<usize>,
  /// Sessions whose producer ended with an error.
  pub producer_errors: usize,
}

impl TrialSummary {
  /// Returns `true` if at least one session lost data.
  pub fn loss_observed(&self) -> bool {
    self.short_runs > 0
  }
}

/// Runs `runs` sessions of `config`, discarding their console output.
///
/// # Errors
///
/// Stops at the first session that fails, see [`session::run`].
pub async fn run_trials(config: &SelectConfig, runs: usize) -> Result<TrialSummary, SelectError> {
  let mut summary = TrialSummary {
    expected: config.items,
    ..TrialSummary::default()
  };

  for _ in 0..runs {
    let report = session::run(config, NullSink).await?;
    let printed = report.consumed.items.len();

    summary.runs += 1;
    if !report.is_complete() {
      summary.short_runs += 1;
    }
    if report.producer.is_err() {
      summary.producer_errors += 1;
    }
    summary.fewest_printed = Some(
      summary
        .fewest_printed
        .map_or(printed, |fewest| fewest.min(printed)),
    );
  }

  debug!(
    runs = summary.runs,
    short_runs = summary.short_runs,
    "trials::run_trials() finished"
  );
  Ok(summary)
}
