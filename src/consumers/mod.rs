//! Consumer implementations, one per design.

pub mod draining;
pub mod stop_flag;

pub use draining::DrainingConsumer;
pub use stop_flag::StopFlagConsumer;
