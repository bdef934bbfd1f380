//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides a single calculator screen:
//! - Risk factor selection with the IAP field gated on GBS status
//! - Live risk estimate and recommendation
//! - Persistent clinical disclaimer

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::MedicalTheme;
