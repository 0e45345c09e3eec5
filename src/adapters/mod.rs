//! Adapters - implementations of the ports against real infrastructure.

pub mod ai;
pub mod geocode;
pub mod http;
pub mod memory;
