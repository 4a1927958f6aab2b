//! UI-agnostic view models.
//!
//! Each builder turns snapshot data plus table state into a
//! [`common::TableViewModel`]: filtered, sorted, paged and formatted, but
//! with no dependency on a rendering framework. The TUI maps style classes
//! to terminal styles; the exporters map the same rows to CSV text.

pub mod campaigns;
pub mod common;

pub use campaigns::{CampaignsView, build_campaigns_view};
pub use common::{RowStyleClass, TableViewModel, ViewCell, ViewRow};
