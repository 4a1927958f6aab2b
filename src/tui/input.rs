//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, InputMode, Tab};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Toggle Live/Static refresh.
    ToggleLive,
    /// Export the filtered table as CSV.
    ExportCsv,
    /// Export the rendered table as PDF.
    ExportPdf,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if state.show_quit_confirm {
        return handle_quit_confirm(state, key);
    }
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Filter => handle_filter_mode(state, key),
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.show_quit_confirm = false;
            KeyAction::Quit
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.show_quit_confirm = false;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.show_quit_confirm = false;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.show_quit_confirm = true;
            KeyAction::None
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        // Tab navigation
        KeyCode::Tab => {
            state.switch_tab(state.current_tab.next());
            KeyAction::None
        }
        KeyCode::BackTab => {
            state.switch_tab(state.current_tab.prev());
            KeyAction::None
        }
        KeyCode::Char('1') => {
            state.switch_tab(Tab::Overview);
            KeyAction::None
        }
        KeyCode::Char('2') => {
            state.switch_tab(Tab::Campaigns);
            KeyAction::None
        }
        KeyCode::Char('3') => {
            state.switch_tab(Tab::Breakdowns);
            KeyAction::None
        }

        // Row navigation (or help scroll if the popup is open)
        KeyCode::Up | KeyCode::Char('k') => {
            if state.show_help {
                state.help_scroll = state.help_scroll.saturating_sub(1);
            } else if state.current_tab == Tab::Campaigns {
                state.select_up();
            }
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.show_help {
                state.help_scroll = state.help_scroll.saturating_add(1);
            } else if state.current_tab == Tab::Campaigns {
                state.select_down();
            }
            KeyAction::None
        }
        KeyCode::PageUp => {
            if state.show_help {
                state.help_scroll = state.help_scroll.saturating_sub(10);
            } else if state.current_tab == Tab::Campaigns {
                state.query.page.prev();
                state.selected = 0;
            }
            KeyAction::None
        }
        KeyCode::PageDown => {
            if state.show_help {
                state.help_scroll = state.help_scroll.saturating_add(10);
            } else if state.current_tab == Tab::Campaigns {
                state.query.page.next(state.last_total);
                state.selected = 0;
            }
            KeyAction::None
        }

        // Paging
        KeyCode::Char('[') => {
            if state.current_tab == Tab::Campaigns {
                state.query.page.prev();
                state.selected = 0;
            }
            KeyAction::None
        }
        KeyCode::Char(']') => {
            if state.current_tab == Tab::Campaigns {
                state.query.page.next(state.last_total);
                state.selected = 0;
            }
            KeyAction::None
        }

        // Sorting
        KeyCode::Char('s') | KeyCode::Char('S') => {
            if state.current_tab == Tab::Campaigns {
                state.query.cycle_sort_field();
                state.selected = 0;
            }
            KeyAction::None
        }
        KeyCode::Char('o') | KeyCode::Char('O') => {
            if state.current_tab == Tab::Campaigns {
                state.query.toggle_direction();
                state.selected = 0;
            }
            KeyAction::None
        }
        KeyCode::Char('u') | KeyCode::Char('U') => {
            if state.current_tab == Tab::Campaigns {
                state.query.clear_sort();
                state.selected = 0;
            }
            KeyAction::None
        }

        // Date presets
        KeyCode::Char('d') | KeyCode::Char('D') => {
            if state.current_tab == Tab::Campaigns {
                state.cycle_date_preset();
            }
            KeyAction::None
        }
        KeyCode::Char('x') | KeyCode::Char('X') => {
            if state.current_tab == Tab::Campaigns {
                state.clear_dates();
            }
            KeyAction::None
        }

        // Filter mode; jumps to the campaigns tab since that is what it filters
        KeyCode::Char('/') => {
            state.switch_tab(Tab::Campaigns);
            state.input_mode = InputMode::Filter;
            state.filter_input.clear();
            KeyAction::None
        }

        // Live/Static refresh toggle
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::ToggleLive,

        // Exports operate on the campaign table
        KeyCode::Char('e') => {
            if state.current_tab == Tab::Campaigns {
                KeyAction::ExportCsv
            } else {
                state.status_message = Some("Exports run from the campaigns tab (2)".to_string());
                KeyAction::None
            }
        }
        KeyCode::Char('E') => {
            if state.current_tab == Tab::Campaigns {
                KeyAction::ExportPdf
            } else {
                state.status_message = Some("Exports run from the campaigns tab (2)".to_string());
                KeyAction::None
            }
        }

        // Help popup
        KeyCode::Char('?') | KeyCode::Char('H') => {
            state.show_help = !state.show_help;
            if state.show_help {
                state.help_scroll = 0;
            }
            KeyAction::None
        }

        // Close popups / clear status with Escape
        KeyCode::Esc => {
            state.status_message = None;
            state.show_help = false;
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}

/// Handles keys in filter mode. Edits apply to the table in real time.
fn handle_filter_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            // Cancel filter
            state.input_mode = InputMode::Normal;
            state.filter_input.clear();
            state.query.set_query("");
            state.selected = 0;
            KeyAction::None
        }
        KeyCode::Enter => {
            // Confirm filter and return to normal mode
            state.input_mode = InputMode::Normal;
            KeyAction::None
        }
        KeyCode::Backspace => {
            state.filter_input.pop();
            apply_current_filter(state);
            KeyAction::None
        }
        KeyCode::Char(c) => {
            state.filter_input.push(c);
            apply_current_filter(state);
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn apply_current_filter(state: &mut AppState) {
    state.query.set_query(&state.filter_input);
    state.selected = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{SortDirection, SortField};
    use crate::tui::state::DatePreset;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};
    use std::path::PathBuf;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn state() -> AppState {
        AppState::new(8, PathBuf::from("."))
    }

    #[test]
    fn tabs_switch_with_number_keys() {
        let mut state = state();
        assert_eq!(state.current_tab, Tab::Overview);

        let action = handle_key(&mut state, key(KeyCode::Char('2')));
        assert_eq!(action, KeyAction::None);
        assert_eq!(state.current_tab, Tab::Campaigns);

        let _ = handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.current_tab, Tab::Breakdowns);
        let _ = handle_key(&mut state, key(KeyCode::BackTab));
        assert_eq!(state.current_tab, Tab::Campaigns);
    }

    #[test]
    fn filter_mode_applies_to_query_in_real_time() {
        let mut state = state();

        // `/` jumps to the campaigns tab and starts editing
        let _ = handle_key(&mut state, key(KeyCode::Char('/')));
        assert_eq!(state.current_tab, Tab::Campaigns);
        assert_eq!(state.input_mode, InputMode::Filter);

        let _ = handle_key(&mut state, key(KeyCode::Char('s')));
        let _ = handle_key(&mut state, key(KeyCode::Char('a')));
        assert_eq!(state.query.filter.query, "sa");

        let _ = handle_key(&mut state, key(KeyCode::Backspace));
        assert_eq!(state.query.filter.query, "s");

        // Enter confirms and keeps the filter
        let _ = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.query.filter.query, "s");
    }

    #[test]
    fn filter_cancel_clears_query() {
        let mut state = state();
        let _ = handle_key(&mut state, key(KeyCode::Char('/')));
        let _ = handle_key(&mut state, key(KeyCode::Char('s')));
        assert_eq!(state.query.filter.query, "s");

        let _ = handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.query.filter.query, "");
    }

    #[test]
    fn sort_keys_cycle_field_and_direction() {
        let mut state = state();
        state.switch_tab(Tab::Campaigns);

        let _ = handle_key(&mut state, key(KeyCode::Char('s')));
        assert_eq!(state.query.sort.field, Some(SortField::Campaign));
        assert_eq!(state.query.sort.direction, SortDirection::Ascending);

        let _ = handle_key(&mut state, key(KeyCode::Char('o')));
        assert_eq!(state.query.sort.direction, SortDirection::Descending);

        let _ = handle_key(&mut state, key(KeyCode::Char('u')));
        assert_eq!(state.query.sort.field, None);
    }

    #[test]
    fn sort_keys_ignored_outside_campaigns_tab() {
        let mut state = state();
        let _ = handle_key(&mut state, key(KeyCode::Char('s')));
        assert_eq!(state.query.sort.field, None);
    }

    #[test]
    fn bracket_keys_change_pages_within_bounds() {
        let mut state = state();
        state.switch_tab(Tab::Campaigns);
        state.last_total = 20; // 3 pages of 8

        let _ = handle_key(&mut state, key(KeyCode::Char(']')));
        assert_eq!(state.query.page.page, 2);
        let _ = handle_key(&mut state, key(KeyCode::Char(']')));
        let _ = handle_key(&mut state, key(KeyCode::Char(']')));
        assert_eq!(state.query.page.page, 3);

        let _ = handle_key(&mut state, key(KeyCode::Char('[')));
        assert_eq!(state.query.page.page, 2);
    }

    #[test]
    fn date_preset_keys_cycle_and_clear() {
        let mut state = state();
        state.switch_tab(Tab::Campaigns);

        let _ = handle_key(&mut state, key(KeyCode::Char('d')));
        assert_eq!(state.date_preset, DatePreset::Last7Days);
        assert!(!state.query.filter.dates.is_unbounded());

        let _ = handle_key(&mut state, key(KeyCode::Char('x')));
        assert_eq!(state.date_preset, DatePreset::AllTime);
        assert!(state.query.filter.dates.is_unbounded());
    }

    #[test]
    fn refresh_toggle_returns_action() {
        let mut state = state();
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('r'))), KeyAction::ToggleLive);
    }

    #[test]
    fn exports_blocked_outside_campaigns_tab() {
        let mut state = state();
        let action = handle_key(&mut state, key(KeyCode::Char('e')));
        assert_eq!(action, KeyAction::None);
        assert!(state.status_message.is_some());

        state.switch_tab(Tab::Campaigns);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('e'))), KeyAction::ExportCsv);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('E'))), KeyAction::ExportPdf);
    }

    #[test]
    fn quit_requires_confirmation_and_quits_on_qq() {
        let mut state = state();

        let action = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::None);
        assert!(state.show_quit_confirm);

        let action = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::Quit);
        assert!(!state.show_quit_confirm);
    }

    #[test]
    fn quit_confirmation_cancels_on_esc() {
        let mut state = state();

        let _ = handle_key(&mut state, key(KeyCode::Char('q')));
        assert!(state.show_quit_confirm);

        let action = handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(action, KeyAction::None);
        assert!(!state.show_quit_confirm);
    }

    #[test]
    fn ctrl_c_quits_immediately() {
        let mut state = state();
        let event = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key(&mut state, event), KeyAction::Quit);
    }
}
