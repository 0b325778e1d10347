//! Service layer for GPU snapshots
//!
//! Services encapsulate running a query source and turning its output into
//! domain records.

pub mod collector;

pub use collector::Collector;
