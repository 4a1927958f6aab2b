//! Main TUI application.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::engine;
use crate::export::{self, TableImage, export_filename};
use crate::refresh::RefreshDriver;
use crate::view;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    driver: RefreshDriver,
    state: AppState,
    should_quit: bool,
    /// Set when a PDF export was requested; the capture happens right after
    /// the next draw so the artifact matches the screen exactly.
    pending_pdf: bool,
}

impl App {
    /// Creates a new App around a refresh driver.
    pub fn new(driver: RefreshDriver, page_size: usize, export_dir: PathBuf) -> Self {
        Self {
            driver,
            state: AppState::new(page_size, export_dir),
            should_quit: false,
            pending_pdf: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Create event handler
        let events = EventHandler::new(tick_rate);

        // Main loop
        loop {
            // Draw UI
            let completed = terminal.draw(|frame| {
                render(frame, &mut self.state, self.driver.current(), self.driver.mode())
            })?;

            if self.pending_pdf {
                self.pending_pdf = false;
                match self.state.table_area {
                    Some(area) => {
                        let image = TableImage::from_buffer(completed.buffer, area);
                        self.finish_pdf_export(&image);
                    }
                    None => {
                        self.state.status_message =
                            Some("Export failed: no table on screen".to_string());
                    }
                }
            }

            // Handle events
            match events.next() {
                Ok(Event::Tick) => {
                    self.driver.tick();
                }
                Ok(Event::Key(key)) => match handle_key(&mut self.state, key) {
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::ToggleLive => {
                        let mode = self.driver.toggle();
                        self.state.status_message = Some(format!("Refresh: {}", mode.label()));
                    }
                    KeyAction::ExportCsv => self.export_csv(),
                    KeyAction::ExportPdf => {
                        // The capture reads the next frame, so nothing may
                        // cover the table in it.
                        self.state.show_help = false;
                        self.pending_pdf = true;
                    }
                    KeyAction::None => {}
                },
                Ok(Event::Resize) => {
                    // Next draw picks up the new size.
                }
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Writes the current filtered, sorted campaign rows (all pages) as CSV.
    fn export_csv(&mut self) {
        let snapshot = self.driver.current();
        let rows = engine::filtered_sorted(&snapshot.campaigns, &self.state.query);
        let path = self
            .state
            .export_dir
            .join(export_filename(view::campaigns::TITLE, "csv"));
        match export::write_csv(&path, &rows) {
            Ok(()) => {
                self.state.status_message = Some(format!("Exported {}", path.display()));
            }
            Err(e) => {
                tracing::error!(error = %e, "csv export failed");
                self.state.status_message = Some(format!("Export failed: {}", e));
            }
        }
    }

    /// Writes the captured table cells as a PDF artifact.
    fn finish_pdf_export(&mut self, image: &TableImage) {
        let path = self
            .state
            .export_dir
            .join(export_filename(view::campaigns::TITLE, "pdf"));
        match export::write_pdf(&path, image) {
            Ok(()) => {
                self.state.status_message = Some(format!("Exported {}", path.display()));
            }
            Err(e) => {
                tracing::error!(error = %e, "pdf export failed");
                self.state.status_message = Some(format!("Export failed: {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::CSV_HEADER;
    use crate::generator::Generator;

    #[test]
    fn test_export_csv_writes_artifact_and_sets_status() {
        let dir = tempfile::tempdir().unwrap();
        let driver = RefreshDriver::new(Generator::new(Some(7), 6));
        let mut app = App::new(driver, 8, dir.path().to_path_buf());

        app.export_csv();

        let path = dir.path().join("campaign_performance_data.csv");
        let body = std::fs::read_to_string(&path).unwrap();
        assert!(body.starts_with(CSV_HEADER));
        let status = app.state.status_message.unwrap();
        assert!(status.contains("campaign_performance_data.csv"));
    }

    #[test]
    fn test_pdf_export_failure_reports_status() {
        let dir = tempfile::tempdir().unwrap();
        let driver = RefreshDriver::new(Generator::new(Some(7), 6));
        let mut app = App::new(driver, 8, dir.path().to_path_buf());

        // Empty capture cannot be rendered into a document.
        let image = TableImage { width: 0, lines: Vec::new() };
        app.finish_pdf_export(&image);

        let status = app.state.status_message.unwrap();
        assert!(status.starts_with("Export failed"));
    }
}
