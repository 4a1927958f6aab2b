//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::view::RowStyleClass;

/// Dashboard color palette.
pub struct Theme;

impl Theme {
    // Background colors
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;
    pub const SELECTED_BG: Color = Color::DarkGray;

    // Foreground colors
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    // Semantic colors
    pub const POSITIVE: Color = Color::Green;
    pub const NEGATIVE: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;

    // Tab colors
    pub const TAB_ACTIVE: Color = Color::Cyan;
    pub const TAB_INACTIVE: Color = Color::DarkGray;

    // Chart series colors
    pub const REVENUE_COLOR: Color = Color::Cyan;
    pub const USERS_COLOR: Color = Color::Magenta;
    pub const SESSIONS_COLOR: Color = Color::Yellow;
    pub const BAR_COLOR: Color = Color::Cyan;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Live-mode indicator in the header bar.
    pub fn header_live() -> Style {
        Style::default()
            .fg(Theme::POSITIVE)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row style.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Positive change style (green).
    pub fn positive() -> Style {
        Style::default().fg(Theme::POSITIVE)
    }

    /// Negative change style (red).
    pub fn negative() -> Style {
        Style::default().fg(Theme::NEGATIVE)
    }

    /// Warning style (yellow).
    pub fn warning() -> Style {
        Style::default().fg(Theme::WARNING)
    }

    /// Active tab style.
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::TAB_ACTIVE)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive tab style.
    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::TAB_INACTIVE)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Metric card value style.
    pub fn metric_value() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    /// Filter input style.
    pub fn filter_input() -> Style {
        Style::default()
            .fg(Theme::FG)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Help key style (highlighted keys in the key bar and help popup).
    pub fn help_key() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    /// Maps a UI-agnostic [`RowStyleClass`] to a ratatui [`Style`].
    pub fn from_class(class: RowStyleClass) -> Style {
        match class {
            RowStyleClass::Normal => Self::default(),
            RowStyleClass::Active => Self::positive(),
            RowStyleClass::Warning => Self::warning(),
            RowStyleClass::Dimmed => Self::dim(),
        }
    }
}
