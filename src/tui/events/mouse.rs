//! Mouse event handlers.

use crate::tui::app::FeedApp;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

pub fn handle_mouse_event(app: &mut FeedApp, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.select_prev(),
        MouseEventKind::ScrollDown => app.select_next(),
        MouseEventKind::Down(MouseButton::Left) => app.click(mouse.column, mouse.row),
        // Right-click dismisses whatever is open
        MouseEventKind::Down(MouseButton::Right) => app.escape(),
        _ => {}
    }
}
