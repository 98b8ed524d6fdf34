use chanselect::{DelayPolicy, Design, MemorySink, SelectConfig, session};
use proptest::prelude::*;
use std::time::Duration;

fn paused_runtime() -> tokio::runtime::Runtime {
  tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .start_paused(true)
    .build()
    .unwrap()
}

async fn corrected_run_prints_everything_async(items: usize, capacity: usize, max_delay_ms: u64) {
  let config = SelectConfig::default()
    .with_items(items)
    .with_capacity(capacity)
    .with_delay(DelayPolicy::Jitter(Duration::from_millis(max_delay_ms)));
  let sink = MemorySink::new();

  let report = session::run(&config, sink.clone()).await.unwrap();

  let expected: Vec<String> = (0..items).map(|i| i.to_string()).collect();
  assert_eq!(report.consumed.items, expected);
  assert_eq!(sink.items(), expected);
  assert!(report.consumed.progress.is_drained());
  assert!(report.abandoned.is_empty());
  assert!(report.producer.is_ok());
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(64))]

  #[test]
  fn test_corrected_run_prints_everything(
    items in 0..25usize,
    capacity in 1..4usize,
    max_delay_ms in 0..50u64
  ) {
    paused_runtime().block_on(corrected_run_prints_everything_async(items, capacity, max_delay_ms));
  }
}

async fn flawed_run_prints_a_prefix_async(items: usize, capacity: usize) {
  let config = SelectConfig::default()
    .with_design(Design::Flawed)
    .with_items(items)
    .with_capacity(capacity);

  let report = session::run(&config, MemorySink::new()).await.unwrap();

  let expected: Vec<String> = (0..items).map(|i| i.to_string()).collect();
  assert!(expected.starts_with(&report.consumed.items));
  assert!(report.consumed.items.len() <= items);
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(64))]

  #[test]
  fn test_flawed_run_prints_a_prefix(items in 0..25usize, capacity in 1..4usize) {
    paused_runtime().block_on(flawed_run_prints_a_prefix_async(items, capacity));
  }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_corrected_run_on_multi_thread_runtime() {
  let config = SelectConfig::default()
    .with_items(50)
    .with_delay(DelayPolicy::Jitter(Duration::from_millis(2)));

  let report = session::run(&config, MemorySink::new()).await.unwrap();

  assert!(report.is_complete());
  assert!(report.abandoned.is_empty());
  assert!(report.producer.is_ok());
}
