//! Terminal setup, main loop and rendering for the feed.

use super::app::{FeedApp, HitTargets};
use super::events::{handle_key_event, handle_mouse_event, Event, EventHandler};
use crate::error::{Result, ShareMenuError};
use crate::model::{MenuId, ShareAction};
use crate::notify::NotifyLevel;
use crate::region::OwnerRegion;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::io::{self, stdout};
use unicode_width::UnicodeWidthStr;

/// Rows taken by one post (author line, body line, spacer).
const POST_HEIGHT: u16 = 3;
const TRIGGER_LABEL: &str = "[share ▾]";
const POPUP_WIDTH: u16 = 24;
const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 12;

/// Run the feed until the user quits.
pub fn run_tui(app: &mut FeedApp) -> Result<()> {
    run_terminal(app).map_err(ShareMenuError::Terminal)
}

fn run_terminal(app: &mut FeedApp) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::default();
    let result = (|| -> io::Result<()> {
        loop {
            terminal.draw(|frame| render(frame, app))?;

            match events.next()? {
                Event::Key(key) => handle_key_event(app, key),
                Event::Mouse(mouse) => handle_mouse_event(app, mouse),
                Event::Resize(_, _) | Event::Tick => {}
            }

            if app.should_quit {
                return Ok(());
            }
        }
    })();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Draw the feed and record hit targets and popup-owner regions.
pub fn render(frame: &mut Frame, app: &mut FeedApp) {
    let area = frame.area();
    app.targets.clear();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new(format!(
            "Terminal too small: need {MIN_WIDTH}x{MIN_HEIGHT}, have {}x{}",
            area.width, area.height
        ))
        .alignment(Alignment::Center);
        frame.render_widget(warning, area);
        clear_owner_regions(app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(POST_HEIGHT),
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_feed(frame, chunks[1], app);
    render_footer(frame, chunks[2], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &FeedApp) {
    let header = Line::from(vec![
        Span::styled("Squeaker", Style::default().fg(Color::Cyan).bold()),
        Span::raw("  "),
        Span::styled(app.base_url.as_str(), Style::default().fg(Color::DarkGray)),
        Span::raw(format!("  {} posts", app.posts.len())),
    ]);
    frame.render_widget(
        Paragraph::new(header).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

fn render_feed(frame: &mut Frame, area: Rect, app: &mut FeedApp) {
    let visible = usize::from((area.height / POST_HEIGHT).max(1));
    if app.selected < app.scroll {
        app.scroll = app.selected;
    } else if app.selected >= app.scroll + visible {
        app.scroll = app.selected + 1 - visible;
    }

    clear_owner_regions(app);

    let trigger_width = TRIGGER_LABEL.width() as u16;
    let end = (app.scroll + visible).min(app.posts.len());
    for index in app.scroll..end {
        let post = &app.posts[index];
        let y = area.y + (index - app.scroll) as u16 * POST_HEIGHT;
        let selected = index == app.selected;
        let menu_id = MenuId::for_item(&post.id);
        let open = app.controller.is_visible(&menu_id);

        let marker = if selected { "▌ " } else { "  " };
        let author_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let author = Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(format!("@{}", post.author), author_style),
        ]);
        let body = Line::from(vec![Span::raw("  "), Span::raw(post.body.as_str())]);
        let post_area = Rect::new(area.x, y, area.width, 2);
        frame.render_widget(Paragraph::new(vec![author, body]), post_area);
        app.targets.posts.push((index, post_area));

        let trigger = Rect::new(
            area.right().saturating_sub(trigger_width + 1),
            y,
            trigger_width,
            1,
        );
        let trigger_style = if open {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Cyan)
        };
        frame.render_widget(Paragraph::new(Span::styled(TRIGGER_LABEL, trigger_style)), trigger);
        app.targets.triggers.push((menu_id.clone(), trigger));

        if let Err(miss) = app
            .controller
            .set_owner_region(&menu_id, Some(OwnerRegion::from(trigger)))
        {
            tracing::debug!("owner region not recorded: {miss}");
        }
    }

    if let Some(open) = app.controller.open_menu().cloned() {
        let trigger = app
            .targets
            .triggers
            .iter()
            .find(|(id, _)| *id == open)
            .map(|(_, rect)| *rect);
        if let Some(trigger) = trigger {
            render_popup(frame, area, &open, trigger, &mut app.targets);
            let popup = popup_area(area, trigger);
            let owner = OwnerRegion::from(trigger).union(&OwnerRegion::from(popup));
            if let Err(miss) = app.controller.set_owner_region(&open, Some(owner)) {
                tracing::debug!("owner region not recorded: {miss}");
            }
        }
    }
}

/// Where the popup for `trigger` goes: below it, or above when there is no
/// room, right-aligned with the trigger.
fn popup_area(area: Rect, trigger: Rect) -> Rect {
    let height = ShareAction::ALL.len() as u16 + 2;
    let width = POPUP_WIDTH.min(area.width);
    let x = trigger.right().saturating_sub(width).max(area.x);
    let below = trigger.bottom();
    let y = if below + height <= area.bottom() {
        below
    } else {
        trigger.y.saturating_sub(height).max(area.y)
    };
    Rect::new(x, y, width, height.min(area.height))
}

fn render_popup(frame: &mut Frame, area: Rect, menu: &MenuId, trigger: Rect, targets: &mut HitTargets) {
    let popup = popup_area(area, trigger);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title(" Share ")
            .border_style(Style::default().fg(Color::Cyan)),
        popup,
    );

    let inner_width = popup.width.saturating_sub(2);
    for (n, action) in ShareAction::ALL.into_iter().enumerate() {
        let row = popup.y + 1 + n as u16;
        if row >= popup.bottom().saturating_sub(1) {
            break;
        }
        let option = Rect::new(popup.x + 1, row, inner_width, 1);
        let line = Line::from(vec![
            Span::styled(format!("{} ", n + 1), Style::default().fg(Color::DarkGray)),
            Span::raw(action.label()),
        ]);
        frame.render_widget(Paragraph::new(line), option);
        targets.options.push((menu.clone(), action, option));
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &FeedApp) {
    let mut status = app.status.borrow_mut();
    if let Some((message, level)) = status.current() {
        let color = match level {
            NotifyLevel::Info => Color::Cyan,
            NotifyLevel::Success => Color::Green,
            NotifyLevel::Error => Color::Red,
        };
        let line = Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(color).bold(),
        ));
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        return;
    }

    let hints = if app.controller.open_menu().is_some() {
        "1-4 pick action  Esc close  click outside to dismiss"
    } else {
        "j/k move  s share  d remove  q quit"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center),
        area,
    );
}

fn clear_owner_regions(app: &mut FeedApp) {
    let ids: Vec<MenuId> = app.controller.menus().map(|menu| menu.id.clone()).collect();
    for id in ids {
        if let Err(miss) = app.controller.set_owner_region(&id, None) {
            tracing::debug!("owner region not cleared: {miss}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_below_trigger_when_room() {
        let area = Rect::new(0, 2, 80, 20);
        let trigger = Rect::new(70, 2, 9, 1);
        let popup = popup_area(area, trigger);
        assert_eq!(popup.y, 3);
        assert_eq!(popup.right(), trigger.right());
        assert_eq!(popup.height, 6);
    }

    #[test]
    fn test_popup_flips_above_near_bottom() {
        let area = Rect::new(0, 2, 80, 20);
        let trigger = Rect::new(70, 20, 9, 1);
        let popup = popup_area(area, trigger);
        assert_eq!(popup.bottom(), trigger.y);
    }
}
