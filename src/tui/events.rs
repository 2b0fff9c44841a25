use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, MouseEvent};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::warn;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),

    /// Mouse input event
    Mouse(MouseEvent),

    /// Bracketed paste
    Paste(String),

    /// Terminal resize event
    Resize(u16, u16),

    /// Periodic tick event
    Tick,
}

impl Event {
    /// The raw terminal event, for consumers that take crossterm events
    pub fn as_terminal_event(&self) -> Option<CrosstermEvent> {
        match self {
            Event::Key(key) => Some(CrosstermEvent::Key(*key)),
            Event::Mouse(mouse) => Some(CrosstermEvent::Mouse(*mouse)),
            Event::Paste(text) => Some(CrosstermEvent::Paste(text.clone())),
            Event::Resize(..) | Event::Tick => None,
        }
    }
}

/// Event handler for managing input events
pub struct EventHandler {
    /// Terminal input stream
    stream: EventStream,

    /// Tick timer for periodic events
    ticker: Interval,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new(tick_rate: Duration) -> Self {
        let mut ticker = interval(tick_rate);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Self {
            stream: EventStream::new(),
            ticker,
        }
    }

    /// Get the next event. Returns `None` once the terminal input stream
    /// has ended.
    pub async fn next(&mut self) -> Option<Event> {
        loop {
            tokio::select! {
                _ = self.ticker.tick() => return Some(Event::Tick),
                maybe = self.stream.next() => match maybe {
                    Some(Ok(event)) => {
                        if let Some(event) = Self::convert_crossterm_event(event) {
                            return Some(event);
                        }
                    }
                    Some(Err(e)) => {
                        warn!("Failed to read terminal event: {}", e);
                    }
                    None => return None,
                },
            }
        }
    }

    /// Convert crossterm events to application events
    fn convert_crossterm_event(event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Key(key_event) => Some(Event::Key(key_event)),
            CrosstermEvent::Mouse(mouse_event) => Some(Event::Mouse(mouse_event)),
            CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
            CrosstermEvent::Paste(text) => Some(Event::Paste(text)),
            CrosstermEvent::FocusGained | CrosstermEvent::FocusLost => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_focus_events_are_dropped() {
        assert!(EventHandler::convert_crossterm_event(CrosstermEvent::FocusGained).is_none());
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(
            EventHandler::convert_crossterm_event(CrosstermEvent::Key(key)),
            Some(Event::Key(_))
        ));
    }

    #[test]
    fn test_resize_has_no_terminal_event() {
        assert!(Event::Resize(80, 24).as_terminal_event().is_none());
        assert!(Event::Paste("x".into()).as_terminal_event().is_some());
    }
}
