//! Runs the flawed handshake once. Run it a few times: on many runs the last
//! item never shows up before the `error:` line.

use chanselect::{Design, SelectConfig, StdoutSink, session};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .init();

  let config = SelectConfig::default().with_design(Design::Flawed);
  let report = session::run(&config, StdoutSink).await?;

  if report.is_complete() {
    info!(printed = report.consumed.items.len(), "flawed run happened to print every item");
  } else {
    warn!(
      printed = report.consumed.items.len(),
      expected = report.expected,
      abandoned = ?report.abandoned,
      "flawed run lost items"
    );
  }
  Ok(())
}
