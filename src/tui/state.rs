//! Application state management.

use std::path::PathBuf;

use chrono::{Days, Local, NaiveDate};
use ratatui::layout::Rect;
use ratatui::widgets::TableState;

use crate::engine::{DateRange, TableQuery};

/// Available tabs in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Campaigns,
    Breakdowns,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Overview, Tab::Campaigns, Tab::Breakdowns]
    }

    /// Returns the display name of the tab.
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Overview => "OVR",
            Tab::Campaigns => "CMP",
            Tab::Breakdowns => "BRK",
        }
    }

    /// Returns the next tab.
    pub fn next(&self) -> Tab {
        match self {
            Tab::Overview => Tab::Campaigns,
            Tab::Campaigns => Tab::Breakdowns,
            Tab::Breakdowns => Tab::Overview,
        }
    }

    /// Returns the previous tab.
    pub fn prev(&self) -> Tab {
        match self {
            Tab::Overview => Tab::Breakdowns,
            Tab::Campaigns => Tab::Overview,
            Tab::Breakdowns => Tab::Campaigns,
        }
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Filter,
}

/// Date interval presets cycled with `d` on the campaigns tab.
///
/// A preset of N days covers today plus the preceding N-1 days, both
/// bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatePreset {
    #[default]
    AllTime,
    Last7Days,
    Last30Days,
    Last90Days,
}

impl DatePreset {
    pub fn next(self) -> DatePreset {
        match self {
            DatePreset::AllTime => DatePreset::Last7Days,
            DatePreset::Last7Days => DatePreset::Last30Days,
            DatePreset::Last30Days => DatePreset::Last90Days,
            DatePreset::Last90Days => DatePreset::AllTime,
        }
    }

    /// Footer label.
    pub fn label(self) -> &'static str {
        match self {
            DatePreset::AllTime => "All dates",
            DatePreset::Last7Days => "Last 7 days",
            DatePreset::Last30Days => "Last 30 days",
            DatePreset::Last90Days => "Last 90 days",
        }
    }

    pub fn range(self, today: NaiveDate) -> DateRange {
        let back = |days: u64| DateRange {
            from: today.checked_sub_days(Days::new(days - 1)),
            to: Some(today),
        };
        match self {
            DatePreset::AllTime => DateRange::default(),
            DatePreset::Last7Days => back(7),
            DatePreset::Last30Days => back(30),
            DatePreset::Last90Days => back(90),
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct AppState {
    /// Current active tab.
    pub current_tab: Tab,
    /// Input mode.
    pub input_mode: InputMode,
    /// Filter input buffer.
    pub filter_input: String,
    /// Campaign table query: text/date filter, sort, page.
    pub query: TableQuery,
    /// Active date preset; source of `query.filter.dates`.
    pub date_preset: DatePreset,
    /// Selected row index within the visible page. Clamped during render.
    pub selected: usize,
    /// Filtered row count from the last build, for page-key clamping.
    pub last_total: usize,
    /// Help popup visibility and scroll.
    pub show_help: bool,
    pub help_scroll: usize,
    /// Quit confirmation dialog visibility.
    pub show_quit_confirm: bool,
    /// Temporary status message shown in the header.
    pub status_message: Option<String>,
    /// Campaign table region of the last draw; the PDF export captures it.
    pub table_area: Option<Rect>,
    /// Directory export artifacts are written to.
    pub export_dir: PathBuf,
    /// Ratatui table state for the campaigns tab (enables auto-scrolling).
    pub campaigns_table_state: TableState,
}

impl AppState {
    pub fn new(page_size: usize, export_dir: PathBuf) -> Self {
        Self {
            current_tab: Tab::Overview,
            input_mode: InputMode::Normal,
            filter_input: String::new(),
            query: TableQuery::new(page_size),
            date_preset: DatePreset::AllTime,
            selected: 0,
            last_total: 0,
            show_help: false,
            help_scroll: 0,
            show_quit_confirm: false,
            status_message: None,
            table_area: None,
            export_dir,
            campaigns_table_state: TableState::default(),
        }
    }

    /// Switches to a new tab. The campaign query survives tab switches.
    pub fn switch_tab(&mut self, new_tab: Tab) {
        if self.current_tab != new_tab {
            self.current_tab = new_tab;
            self.selected = 0;
        }
    }

    /// `d`: advance to the next date preset and apply its range.
    pub fn cycle_date_preset(&mut self) {
        self.date_preset = self.date_preset.next();
        self.apply_date_preset();
    }

    /// `x`: drop any active date interval.
    pub fn clear_dates(&mut self) {
        self.date_preset = DatePreset::AllTime;
        self.apply_date_preset();
    }

    fn apply_date_preset(&mut self) {
        let today = Local::now().date_naive();
        self.query.set_dates(self.date_preset.range(today));
        self.selected = 0;
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Moves the selection down; clamped to the page during render.
    pub fn select_down(&mut self) {
        self.selected = self.selected.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(Tab::Overview.next(), Tab::Campaigns);
        assert_eq!(Tab::Breakdowns.next(), Tab::Overview);
        assert_eq!(Tab::Overview.prev(), Tab::Breakdowns);
        for tab in Tab::all() {
            assert_eq!(tab.next().prev(), *tab);
        }
    }

    #[test]
    fn test_date_preset_cycle_order() {
        let mut preset = DatePreset::AllTime;
        let expected = [
            DatePreset::Last7Days,
            DatePreset::Last30Days,
            DatePreset::Last90Days,
            DatePreset::AllTime,
        ];
        for want in expected {
            preset = preset.next();
            assert_eq!(preset, want);
        }
    }

    #[test]
    fn test_date_preset_ranges_are_inclusive_of_today() {
        let today = date("2024-06-15");
        let range = DatePreset::Last7Days.range(today);
        assert_eq!(range.from, Some(date("2024-06-09")));
        assert_eq!(range.to, Some(today));
        assert!(DatePreset::AllTime.range(today).is_unbounded());
    }

    #[test]
    fn test_preset_changes_reset_page() {
        let mut state = AppState::new(8, PathBuf::from("."));
        state.query.page.page = 3;
        state.cycle_date_preset();
        assert_eq!(state.date_preset, DatePreset::Last7Days);
        assert_eq!(state.query.page.page, 1);

        state.query.page.page = 2;
        state.clear_dates();
        assert_eq!(state.date_preset, DatePreset::AllTime);
        assert!(state.query.filter.dates.is_unbounded());
        assert_eq!(state.query.page.page, 1);
    }

    #[test]
    fn test_switch_tab_keeps_query() {
        let mut state = AppState::new(8, PathBuf::from("."));
        state.query.set_query("sale");
        state.selected = 3;
        state.switch_tab(Tab::Breakdowns);
        assert_eq!(state.query.filter.query, "sale");
        assert_eq!(state.selected, 0);
    }
}
