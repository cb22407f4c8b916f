// inputs/handler.rs

//! Event handler that wraps crossterm input and tick event.

use crossterm::event::{KeyEvent, KeyEventKind};
use log::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Input(KeyEvent),
    /// No input during the tick interval.
    Tick,
}

/// Event handler that wraps crossterm input and tick event.
/// Terminal reads happen on a blocking task; events are handed to the main
/// loop one at a time through a channel.
pub struct EventHandler {
    rx: tokio::sync::mpsc::Receiver<Event>,
    // To stop the loop
    stop_capture: Arc<AtomicBool>,
}

impl EventHandler {
    /// Constructs a new instance of `EventHandler` with the given `tick_rate`.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = tokio::sync::mpsc::channel(100);
        let stop_capture = Arc::new(AtomicBool::new(false));

        let event_stop_capture = stop_capture.clone();
        tokio::task::spawn_blocking(move || {
            while !event_stop_capture.load(Ordering::Relaxed) {
                let event = match read_event(tick_rate) {
                    Ok(Some(event)) => event,
                    Ok(None) => continue,
                    Err(err) => {
                        error!("Could not read terminal event: {}", err);
                        break;
                    }
                };
                if tx.blocking_send(event).is_err() {
                    // receiver dropped, the app is shutting down
                    break;
                }
            }
        });

        EventHandler { rx, stop_capture }
    }

    /// Waits for the next event.
    /// Returns `None` once the reader has stopped and no event is left.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    /// Stops reading terminal events.
    pub fn close(&mut self) {
        self.stop_capture.store(true, Ordering::Relaxed)
    }
}

/// Polls for the tick duration and returns the event to forward, if any.
fn read_event(tick_rate: Duration) -> std::io::Result<Option<Event>> {
    if !crossterm::event::poll(tick_rate)? {
        return Ok(Some(Event::Tick));
    }
    match crossterm::event::read()? {
        // Only key presses, not releases
        crossterm::event::Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            Ok(Some(Event::Input(key_event)))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_next_ends_when_reader_stops() {
        let (tx, rx) = tokio::sync::mpsc::channel(4);
        let mut handler = EventHandler {
            rx,
            stop_capture: Arc::new(AtomicBool::new(false)),
        };
        tx.send(Event::Tick).await.unwrap();
        drop(tx);
        assert!(matches!(handler.next().await, Some(Event::Tick)));
        assert!(handler.next().await.is_none());
        assert!(handler.next().await.is_none());
    }
}
