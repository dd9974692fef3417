use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyEventKind;
use futures::StreamExt;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Event;

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

/// Merges terminal input with completions sent back by background tasks.
pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
}

pub fn translate_crossterm(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Resize(width, height) => {
            return Some(Event::WindowResize { width, height });
        }
        CrosstermEvent::Paste(text) => {
            return Some(Event::KeyboardPaste(text));
        }
        CrosstermEvent::Key(keyevent) => {
            if keyevent.kind == KeyEventKind::Release {
                return None;
            }

            let key = match keyevent.code {
                crossterm::event::KeyCode::Char(c) => Key::Char(c),
                crossterm::event::KeyCode::Enter => Key::Enter,
                crossterm::event::KeyCode::Left => Key::Left,
                crossterm::event::KeyCode::Right => Key::Right,
                crossterm::event::KeyCode::Up => Key::Up,
                crossterm::event::KeyCode::Down => Key::Down,
                crossterm::event::KeyCode::Home => Key::Home,
                crossterm::event::KeyCode::End => Key::End,
                crossterm::event::KeyCode::PageUp => Key::PageUp,
                crossterm::event::KeyCode::PageDown => Key::PageDown,
                crossterm::event::KeyCode::Tab => Key::Tab,
                crossterm::event::KeyCode::Delete => Key::Delete,
                crossterm::event::KeyCode::F(n) => Key::F(n),
                crossterm::event::KeyCode::Backspace => Key::Backspace,
                crossterm::event::KeyCode::Esc => Key::Esc,
                _ => return None,
            };

            let input = Input {
                key,
                ctrl: keyevent
                    .modifiers
                    .contains(crossterm::event::KeyModifiers::CONTROL),
                alt: keyevent
                    .modifiers
                    .contains(crossterm::event::KeyModifiers::ALT),
                shift: keyevent
                    .modifiers
                    .contains(crossterm::event::KeyModifiers::SHIFT),
            };
            match input {
                Input {
                    key: Key::Char('c'),
                    ctrl: true,
                    ..
                } => {
                    return Some(Event::KeyboardQuit);
                }
                Input {
                    key: Key::Enter, ..
                } => {
                    return Some(Event::KeyboardConfirm);
                }
                input => {
                    return Some(Event::KeyboardCharInput(input));
                }
            }
        }
        _ => return None,
    }
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
            events,
        };
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => event,
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => translate_crossterm(input),
                    Some(Err(err)) => {
                        tracing::error!(error = ?err, "failed reading terminal event");
                        None
                    }
                    None => None
                },
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
