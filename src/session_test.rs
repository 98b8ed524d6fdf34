use crate::config::{DelayPolicy, Design, SelectConfig};
use crate::error::SelectError;
use crate::producer;
use crate::session;
use crate::sink::{Line, MemorySink};
use crate::trials;
use std::time::Duration;

fn expected(n: usize) -> Vec<String> {
  producer::items(n).collect()
}

#[tokio::test]
async fn test_corrected_run_without_delay() {
  let config = SelectConfig::default().with_delay(DelayPolicy::None);
  let sink = MemorySink::new();

  let report = session::run(&config, sink.clone()).await.unwrap();

  assert_eq!(report.consumed.items, expected(10));
  assert_eq!(sink.items(), expected(10));
  assert!(report.is_complete());
  assert_eq!(report.missing(), 0);
  assert!(report.abandoned.is_empty());
  assert!(report.producer.is_ok());

  // The success signal may land anywhere, but the end-of-data line comes
  // after the last item.
  let lines = sink.lines();
  let end = lines.iter().position(|line| *line == Line::EndOfData).unwrap();
  let last_item = lines
    .iter()
    .rposition(|line| matches!(line, Line::Item(_)))
    .unwrap();
  assert!(last_item < end);
  assert_eq!(
    lines.iter().filter(|line| **line == Line::Signal(None)).count(),
    1
  );
}

#[tokio::test(start_paused = true)]
async fn test_corrected_run_with_default_delay() {
  let config = SelectConfig::default();

  let report = session::run(&config, MemorySink::new()).await.unwrap();

  assert_eq!(report.consumed.items, expected(10));
  assert!(report.consumed.succeeded);
  assert!(report.consumed.progress.is_drained());
  assert!(report.abandoned.is_empty());
  assert!(report.producer.is_ok());
}

#[tokio::test(start_paused = true)]
async fn test_corrected_run_with_reported_error() {
  let config = SelectConfig::default().with_reported_error("disk full");

  let report = session::run(&config, MemorySink::new()).await.unwrap();

  assert_eq!(report.consumed.items, expected(10));
  assert_eq!(report.consumed.reported.len(), 1);
  assert_eq!(report.consumed.reported[0].message(), "disk full");
  assert!(!report.consumed.succeeded);
  assert!(report.producer.is_ok());
}

#[tokio::test]
async fn test_corrected_run_with_no_items() {
  let config = SelectConfig::default().with_items(0);
  let sink = MemorySink::new();

  let report = session::run(&config, sink.clone()).await.unwrap();

  assert!(report.consumed.items.is_empty());
  assert!(report.is_complete());
  assert!(sink.lines().contains(&Line::EndOfData));
}

#[tokio::test]
async fn test_invalid_config_is_rejected() {
  let config = SelectConfig::default().with_capacity(0);

  match session::run(&config, MemorySink::new()).await {
    Err(SelectError::InvalidConfig(_)) => {}
    other => panic!("Expected InvalidConfig, got {:?}", other.map(|report| report.expected)),
  }
}

#[tokio::test(start_paused = true)]
async fn test_flawed_run_accounts_for_every_item() {
  let config = SelectConfig::default().with_design(Design::Flawed);

  for _ in 0..50 {
    let report = session::run(&config, MemorySink::new()).await.unwrap();

    // Whatever was not printed is still sitting in the data channel.
    let mut seen = report.consumed.items.clone();
    seen.extend(report.abandoned.iter().cloned());
    assert_eq!(seen, expected(10));
    assert_eq!(report.missing(), report.abandoned.len());
    assert!(report.consumed.succeeded);
    assert!(report.producer.is_ok());
  }
}

#[tokio::test(start_paused = true)]
async fn test_flawed_design_loses_items_over_many_runs() {
  let config = SelectConfig::default().with_design(Design::Flawed);

  let summary = trials::run_trials(&config, 1000).await.unwrap();

  assert_eq!(summary.runs, 1000);
  assert!(summary.loss_observed());
  assert!(summary.fewest_printed.unwrap() < 10);
}

#[tokio::test(start_paused = true)]
async fn test_corrected_design_never_loses_items() {
  let config = SelectConfig::default().with_delay(DelayPolicy::Jitter(Duration::from_millis(100)));

  let summary = trials::run_trials(&config, 200).await.unwrap();

  assert_eq!(summary.runs, 200);
  assert!(!summary.loss_observed());
  assert_eq!(summary.fewest_printed, Some(10));
  assert_eq!(summary.producer_errors, 0);
}
