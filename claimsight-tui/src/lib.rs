//! Terminal user interface for Claimsight.
//!
//! - `form`: typed form state for the seven input controls
//! - `ui`: ratatui rendering
//! - `app`: event loop and the predict → format → narrate flow

pub mod app;
pub mod form;
pub mod ui;

pub use app::App;
