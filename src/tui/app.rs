//! Feed application state.

use crate::config::AppConfig;
use crate::controller::{ControllerEvent, PopupMenuController};
use crate::error::ControllerMiss;
use crate::handlers::{
    default_handlers, HandlerDeps, MemoryRepostClient, SystemClipboard, SystemOpener,
};
use crate::model::{MenuId, MenuPayload, ShareAction};
use crate::notify::{NotifyLevel, StatusMessage, StatusNotifier};
use crate::region::ClickOrigin;
use ratatui::layout::Rect;
use std::cell::RefCell;
use std::rc::Rc;

/// A post shown in the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub author: String,
    pub body: String,
}

const AUTHORS: &[&str] = &["ada", "grace", "linus", "margaret", "ken", "barbara"];

const BODIES: &[&str] = &[
    "Shipping the new timeline today, feedback welcome.",
    "Anyone else think popups should close when you click away?",
    "Reposting is the sincerest form of flattery.",
    "Coffee first, then code review.",
    "Hot take: keyboard shortcuts beat mouse menus.",
    "Our hashtag extractor finally handles emoji.",
    "Spent the morning chasing a flaky test. It was the clock.",
];

/// Deterministic sample posts with ids `1..=count`.
#[must_use]
pub fn demo_posts(count: usize) -> Vec<Post> {
    (1..=count)
        .map(|n| Post {
            id: n.to_string(),
            author: AUTHORS[(n - 1) % AUTHORS.len()].to_string(),
            body: BODIES[(n - 1) % BODIES.len()].to_string(),
        })
        .collect()
}

/// Clickable areas recorded by the last render.
#[derive(Debug, Clone, Default)]
pub struct HitTargets {
    /// Share trigger of each visible post
    pub triggers: Vec<(MenuId, Rect)>,
    /// Options of the open popup
    pub options: Vec<(MenuId, ShareAction, Rect)>,
    /// Body area of each visible post, by feed index
    pub posts: Vec<(usize, Rect)>,
}

impl HitTargets {
    pub fn clear(&mut self) {
        self.triggers.clear();
        self.options.clear();
        self.posts.clear();
    }

    fn option_at(&self, column: u16, row: u16) -> Option<(MenuId, ShareAction)> {
        self.options
            .iter()
            .find(|(_, _, rect)| contains(*rect, column, row))
            .map(|(id, action, _)| (id.clone(), *action))
    }

    fn trigger_at(&self, column: u16, row: u16) -> Option<MenuId> {
        self.triggers
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|(id, _)| id.clone())
    }

    fn post_at(&self, column: u16, row: u16) -> Option<usize> {
        self.posts
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|(index, _)| *index)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    crate::region::OwnerRegion::from(rect).contains(column, row)
}

/// State of the feed front end.
pub struct FeedApp {
    pub posts: Vec<Post>,
    pub controller: PopupMenuController,
    /// Index of the highlighted post
    pub selected: usize,
    /// First post drawn
    pub scroll: usize,
    pub status: Rc<RefCell<StatusMessage>>,
    pub targets: HitTargets,
    pub should_quit: bool,
    pub base_url: String,
}

impl FeedApp {
    /// Build a feed wired to the system clipboard and browser.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let status = Rc::new(RefCell::new(StatusMessage::with_auto_clear(
            config.ui.status_clear_after(),
        )));
        let clipboard = config
            .clipboard
            .command
            .clone()
            .map_or_else(SystemClipboard::new, SystemClipboard::with_command);
        let deps = HandlerDeps {
            notifier: Rc::new(StatusNotifier::new(Rc::clone(&status))),
            clipboard: Box::new(clipboard),
            opener: Rc::new(SystemOpener),
            repost: Box::new(MemoryRepostClient::default()),
            whatsapp_text: config.share.whatsapp_text.clone(),
        };
        Self::new(
            demo_posts(config.ui.feed_items),
            &config.share.base_url,
            status,
            deps,
        )
    }

    /// Build a feed with explicit collaborators.
    pub fn new(
        posts: Vec<Post>,
        base_url: &str,
        status: Rc<RefCell<StatusMessage>>,
        deps: HandlerDeps,
    ) -> Self {
        let mut controller = PopupMenuController::new();
        for (action, handler) in default_handlers(deps) {
            controller.register_boxed_handler(action, handler);
        }
        for post in &posts {
            controller.register_item(&post.id, MenuPayload::for_item(base_url, &post.id));
        }

        Self {
            posts,
            controller,
            selected: 0,
            scroll: 0,
            status,
            targets: HitTargets::default(),
            should_quit: false,
            base_url: base_url.to_string(),
        }
    }

    /// Menu id of the highlighted post.
    #[must_use]
    pub fn selected_menu(&self) -> Option<MenuId> {
        self.posts
            .get(self.selected)
            .map(|post| MenuId::for_item(&post.id))
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.posts.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Toggle the share menu of the highlighted post.
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_menu() {
            self.apply(ControllerEvent::Trigger(id));
        }
    }

    /// Pick `action` in whichever menu is open.
    pub fn choose(&mut self, action: ShareAction) {
        if let Some(menu) = self.controller.open_menu().cloned() {
            self.apply(ControllerEvent::Select { menu, action });
        }
    }

    pub fn escape(&mut self) {
        self.apply(ControllerEvent::Escape);
    }

    /// Route a left click at (`column`, `row`).
    ///
    /// Menu options and triggers consume the click; anything else counts as
    /// a document click and may dismiss the open menu.
    pub fn click(&mut self, column: u16, row: u16) {
        if let Some((menu, action)) = self.targets.option_at(column, row) {
            self.apply(ControllerEvent::Select { menu, action });
            return;
        }
        // The popup covers triggers drawn under it.
        if self.inside_open_owner(column, row) {
            tracing::debug!(column, row, "click inside open popup ignored");
            return;
        }
        if let Some(id) = self.targets.trigger_at(column, row) {
            if let Some(index) = self.index_of(&id) {
                self.selected = index;
            }
            self.apply(ControllerEvent::Trigger(id));
            return;
        }
        if let Some(index) = self.targets.post_at(column, row) {
            self.selected = index;
        }
        self.apply(ControllerEvent::DocumentClick(ClickOrigin::point(column, row)));
    }

    /// Remove the highlighted post and its menu from the feed.
    pub fn remove_selected(&mut self) {
        if self.selected >= self.posts.len() {
            return;
        }
        let post = self.posts.remove(self.selected);
        self.controller.remove_menu(&MenuId::for_item(&post.id));
        if self.selected >= self.posts.len() {
            self.selected = self.posts.len().saturating_sub(1);
        }
        self.status
            .borrow_mut()
            .set(format!("Removed post by @{}", post.author), NotifyLevel::Info);
    }

    pub fn quit(&mut self) {
        self.controller.dispose();
        self.should_quit = true;
    }

    pub fn clear_status_message(&mut self) {
        self.status.borrow_mut().clear();
    }

    fn inside_open_owner(&self, column: u16, row: u16) -> bool {
        self.controller
            .open_menu()
            .and_then(|id| self.controller.menu(id))
            .and_then(|menu| menu.owner)
            .is_some_and(|owner| owner.contains(column, row))
    }

    fn index_of(&self, id: &MenuId) -> Option<usize> {
        let item = id.item_id()?;
        self.posts.iter().position(|post| post.id == item)
    }

    fn apply(&mut self, event: ControllerEvent) {
        match self.controller.handle_event(event) {
            Ok(()) => {}
            Err(miss @ ControllerMiss::UnregisteredAction(_)) => {
                tracing::warn!("share menu misconfigured: {miss}");
            }
            Err(miss) => tracing::debug!("{miss}"),
        }
    }
}
