//! Event handling for the feed TUI.
//!
//! Polls crossterm for key and mouse input and turns it into feed and
//! controller operations.

pub mod mouse;

use super::app::FeedApp;
use crate::model::ShareAction;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
};
use std::time::Duration;

pub use mouse::handle_mouse_event;

/// Application event
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Nothing happened within the tick rate
    Tick,
    /// Resize event
    Resize(u16, u16),
}

/// Event handler
pub struct EventHandler {
    /// Tick rate in milliseconds
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub const fn new(tick_rate: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Event, std::io::Error> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Mouse(mouse) => Ok(Event::Mouse(mouse)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(250)
    }
}

/// Handle key events and update app state
pub fn handle_key_event(app: &mut FeedApp, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') => app.quit(),
        KeyCode::Esc => app.escape(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char('s') | KeyCode::Enter => app.toggle_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if let Some(action) = ShareAction::ALL.get(index) {
                app.choose(*action);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::{
        HandlerDeps, MemoryClipboard, MemoryOpener, MemoryRepostClient,
    };
    use crate::model::MenuId;
    use crate::notify::{StatusMessage, StatusNotifier};
    use crate::tui::app::demo_posts;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn app() -> (FeedApp, MemoryRepostClient) {
        let status = Rc::new(RefCell::new(StatusMessage::new()));
        let reposts = MemoryRepostClient::default();
        let deps = HandlerDeps {
            notifier: Rc::new(StatusNotifier::new(Rc::clone(&status))),
            clipboard: Box::new(MemoryClipboard::default()),
            opener: Rc::new(MemoryOpener::default()),
            repost: Box::new(reposts.clone()),
            whatsapp_text: String::new(),
        };
        (
            FeedApp::new(demo_posts(3), "http://localhost:8000", status, deps),
            reposts,
        )
    }

    fn press(app: &mut FeedApp, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_keys_open_and_repost() {
        let (mut app, reposts) = app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.controller.open_menu(), Some(&MenuId::for_item("3")));

        press(&mut app, KeyCode::Char('2'));

        assert_eq!(reposts.reposted(), vec!["3".to_string()]);
        assert!(app.controller.open_menu().is_none());
    }

    #[test]
    fn test_escape_closes_menu() {
        let (mut app, _) = app();
        press(&mut app, KeyCode::Enter);
        assert!(app.controller.open_menu().is_some());

        press(&mut app, KeyCode::Esc);
        assert!(app.controller.open_menu().is_none());
    }

    #[test]
    fn test_unmapped_digit_is_ignored() {
        let (mut app, reposts) = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('9'));
        assert!(app.controller.open_menu().is_some());
        assert!(reposts.reposted().is_empty());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let (mut app, _) = app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
