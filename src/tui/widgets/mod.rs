//! TUI widgets for adtop.

mod breakdowns;
mod campaigns;
mod header;
mod help;
mod metrics;
mod quit_confirm;
mod trend;

pub use breakdowns::render_breakdowns;
pub use campaigns::render_campaigns;
pub use header::render_header;
pub use help::render_help;
pub use metrics::render_metric_cards;
pub use quit_confirm::render_quit_confirm;
pub use trend::{render_hourly_sparkline, render_trend_chart};
