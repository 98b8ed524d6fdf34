//! Producer implementations, one per design.

pub mod closing;
pub mod leaky;

pub use closing::ClosingProducer;
pub use leaky::LeakyProducer;
