//! Harness-facing helpers for declaring testbench ports.

pub mod ports;

pub use ports::{PortFlags, PortSet, FORCE_CLOCK, FORCE_INPUTS, FORCE_OUTPUTS};
