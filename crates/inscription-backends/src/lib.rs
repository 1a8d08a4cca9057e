//! Submission gateways for the Inscription registration wizard
//!
//! - [`MemoryGateway`]: keeps submitted records in memory, with scripted failures
//! - [`SimulatedGateway`]: waits for a delay and succeeds with a given probability

pub mod memory;
pub mod simulated;

pub use memory::MemoryGateway;
pub use simulated::{DEFAULT_DELAY, DEFAULT_SUCCESS_RATE, SimulatedGateway};
