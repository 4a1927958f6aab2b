//! Terminal User Interface for the adtop dashboard.
//!
//! This module provides an interactive TUI with tabbed views over one
//! dashboard snapshot: KPI overview, the campaign table, and breakdowns.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use state::{AppState, Tab};
