//! Terminal front end using ratatui.
//!
//! A feed of posts, each with a share trigger. The [`FeedApp`] owns a
//! [`PopupMenuController`](crate::controller::PopupMenuController); the
//! render step reads its state every frame, draws the open popup, and
//! reports where each popup owner ended up so outside clicks can be told
//! apart from clicks inside a menu.

mod app;
mod events;
mod ui;

pub use app::{demo_posts, FeedApp, HitTargets, Post};
pub use events::{handle_key_event, handle_mouse_event, Event, EventHandler};
pub use ui::{render, run_tui};
