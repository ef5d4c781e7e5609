use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

/// Demo-specific input intents, translated into `NavEvent`s (or handled
/// locally) by the run loop.
pub enum DemoEvent {
    Quit,
    /// Back gesture: Esc or Backspace. Resolved via `resolve_back`.
    Back,
    SelectTab(usize),
    Push,
    Pop,
    ReplaceTop,
    Unwind,
    PresentModal,
    DismissModal,
    /// Shows an overlay if none is up, dismisses it otherwise.
    ToggleOverlay,
    ReplaceStack,
    ReplaceRoot,
    ToggleForeground,
    Alert,
}

/// Poll for an event with timeout (blocks up to `timeout`).
pub fn poll_event(timeout: Duration) -> Option<DemoEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                log::debug!("Key event: {:?}", key_event.code);
                match key_event.code {
                    KeyCode::Char('q') => Some(DemoEvent::Quit),
                    KeyCode::Esc | KeyCode::Backspace => Some(DemoEvent::Back),
                    KeyCode::Char(c @ '1'..='9') => {
                        Some(DemoEvent::SelectTab(c as usize - '1' as usize))
                    }
                    KeyCode::Char('p') => Some(DemoEvent::Push),
                    KeyCode::Char('o') => Some(DemoEvent::Pop),
                    KeyCode::Char('r') => Some(DemoEvent::ReplaceTop),
                    KeyCode::Char('u') => Some(DemoEvent::Unwind),
                    KeyCode::Char('m') => Some(DemoEvent::PresentModal),
                    KeyCode::Char('d') => Some(DemoEvent::DismissModal),
                    KeyCode::Char('v') => Some(DemoEvent::ToggleOverlay),
                    KeyCode::Char('s') => Some(DemoEvent::ReplaceStack),
                    KeyCode::Char('n') => Some(DemoEvent::ReplaceRoot),
                    KeyCode::Char('f') => Some(DemoEvent::ToggleForeground),
                    KeyCode::Char('a') => Some(DemoEvent::Alert),
                    _ => None,
                }
            }
            _ => None,
        }
    } else {
        None
    }
}
