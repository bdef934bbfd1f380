//! Adapters layer: Concrete implementations of ports.
//!
//! - `published`: the published likelihood-ratio model and its thresholds

pub mod published;

pub use published::PublishedModel;
