//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement
//! the calculator's use cases.

mod calculator;

pub use calculator::{Assessment, CalculatorService};
