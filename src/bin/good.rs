//! Runs the corrected handshake once: every item is printed, then the
//! end-of-data line, with the success signal somewhere in between.

use chanselect::{Design, SelectConfig, StdoutSink, session};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .init();

  let config = SelectConfig::default().with_design(Design::Corrected);
  let report = session::run(&config, StdoutSink).await?;
  report.producer?;

  info!(
    printed = report.consumed.items.len(),
    expected = report.expected,
    "corrected run finished"
  );
  Ok(())
}
