//! Event handling for the TUI.
//!
//! A dedicated thread polls the terminal with the tick interval as the
//! timeout; a poll timeout becomes [`Event::Tick`]. Dropping the handler
//! drops the receiver, and the thread exits on its next failed send.

use std::sync::mpsc::{self, Receiver, RecvError, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// Timer tick; drives the live refresh.
    Tick,
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resized; the next draw picks up the new size.
    Resize,
}

/// Event handler that polls for terminal events in a separate thread.
pub struct EventHandler {
    rx: Receiver<Event>,
    /// Kept alive to prevent channel closure.
    _tx: Sender<Event>,
}

impl EventHandler {
    /// Creates a new event handler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        thread::spawn(move || poll_loop(event_tx, tick_rate));
        Self { rx, _tx: tx }
    }

    /// Receives the next event, blocking until one is available.
    pub fn next(&self) -> Result<Event, RecvError> {
        self.rx.recv()
    }
}

fn poll_loop(tx: Sender<Event>, tick_rate: Duration) {
    loop {
        let event = if event::poll(tick_rate).unwrap_or(false) {
            match event::read() {
                Ok(CrosstermEvent::Key(key)) => Event::Key(key),
                Ok(CrosstermEvent::Resize(_, _)) => Event::Resize,
                Ok(_) | Err(_) => continue,
            }
        } else {
            Event::Tick
        };
        if tx.send(event).is_err() {
            break;
        }
    }
}
