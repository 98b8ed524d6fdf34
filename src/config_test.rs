use crate::config::{
  DEFAULT_CAPACITY, DEFAULT_DELAY, DEFAULT_ITEMS, DelayPolicy, Design, SelectConfig,
};
use crate::error::SelectError;
use proptest::prelude::*;
use std::time::Duration;

#[test]
fn test_select_config_default() {
  let config = SelectConfig::default();

  assert_eq!(config.items, DEFAULT_ITEMS);
  assert_eq!(config.capacity, DEFAULT_CAPACITY);
  assert_eq!(config.delay, DelayPolicy::Fixed(DEFAULT_DELAY));
  assert_eq!(config.design, Design::Corrected);
  assert_eq!(config.reported_error, None);
  assert_eq!(config.name(), "corrected");
}

#[test]
fn test_select_config_builder_chain() {
  let config = SelectConfig::default()
    .with_items(3)
    .with_capacity(4)
    .with_delay(DelayPolicy::None)
    .with_design(Design::Flawed)
    .with_reported_error("boom")
    .with_name("chained".to_string());

  assert_eq!(config.items, 3);
  assert_eq!(config.capacity, 4);
  assert_eq!(config.delay, DelayPolicy::None);
  assert_eq!(config.design, Design::Flawed);
  assert_eq!(config.reported_error.as_deref(), Some("boom"));
  assert_eq!(config.name(), "chained");
}

#[test]
fn test_flawed_config_default_name() {
  let config = SelectConfig::default().with_design(Design::Flawed);
  assert_eq!(config.name(), "flawed");
}

#[test]
fn test_zero_capacity_is_rejected() {
  let config = SelectConfig::default().with_capacity(0);

  match config.validate() {
    Err(SelectError::InvalidConfig(message)) => assert!(message.contains("capacity")),
    other => panic!("Expected InvalidConfig, got {:?}", other),
  }
  assert!(SelectConfig::default().validate().is_ok());
}

#[test]
fn test_fixed_and_no_delay() {
  assert_eq!(DelayPolicy::None.next_delay(), Duration::ZERO);
  assert_eq!(
    DelayPolicy::Fixed(Duration::from_millis(5)).next_delay(),
    Duration::from_millis(5)
  );
}

proptest! {
  #[test]
  fn test_jitter_stays_within_bound(max_ms in 0..500u64) {
    let max = Duration::from_millis(max_ms);
    let delay = DelayPolicy::Jitter(max).next_delay();
    prop_assert!(delay <= max);
  }
}

#[tokio::test(start_paused = true)]
async fn test_wait_sleeps_for_fixed_delay() {
  let start = tokio::time::Instant::now();
  DelayPolicy::Fixed(Duration::from_millis(100)).wait().await;
  assert!(start.elapsed() >= Duration::from_millis(100));
}
