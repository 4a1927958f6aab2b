//! Shared building blocks for table view models.

/// Semantic style class for a row or cell.
///
/// View builders assign classes; the renderer decides what a class looks
/// like. Keeping colors out of this layer lets the exporters reuse the
/// same models as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowStyleClass {
    /// Default text.
    #[default]
    Normal,
    /// Actively running (green in the TUI).
    Active,
    /// Paused or otherwise needing attention (yellow).
    Warning,
    /// Finished, kept for reference (dimmed).
    Dimmed,
}

/// One rendered table cell: display text plus an optional style override.
///
/// A cell without an override inherits the row's class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewCell {
    pub text: String,
    pub style: Option<RowStyleClass>,
}

impl ViewCell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    pub fn styled(text: impl Into<String>, style: RowStyleClass) -> Self {
        Self {
            text: text.into(),
            style: Some(style),
        }
    }
}

/// One table row with a stable identifier.
///
/// `id` survives re-filtering and re-sorting, so selection can follow the
/// same record across refreshes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow<Id> {
    pub id: Id,
    pub style: RowStyleClass,
    pub cells: Vec<ViewCell>,
}

/// A complete table ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewModel<Id> {
    /// Block title, including any filter readout.
    pub title: String,
    pub headers: Vec<String>,
    /// Preferred column widths in cells.
    pub widths: Vec<u16>,
    pub rows: Vec<ViewRow<Id>>,
    /// Index into `headers` of the active sort column, if any.
    pub sort_column: Option<usize>,
    pub sort_ascending: bool,
}

impl<Id> TableViewModel<Id> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
