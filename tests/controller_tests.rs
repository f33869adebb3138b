//! Integration tests for the popup menu controller.
//!
//! Covers mutual exclusion, outside-click dismissal, action dispatch and
//! teardown through the public API only.

use share_menu::handlers::HandlerOutcome;
use share_menu::{
    ActionRequest, ClickOrigin, ControllerEvent, ControllerMiss, HandlerError, MenuId,
    MenuPayload, MenuState, OwnerRegion, PopupMenuController, SharedController, ShareAction,
};
use std::cell::RefCell;
use std::rc::Rc;

const BASE: &str = "https://squeaker.example";

// ============================================================================
// Helpers
// ============================================================================

fn controller_with(items: &[&str]) -> (PopupMenuController, Vec<MenuId>) {
    let mut controller = PopupMenuController::new();
    let ids = items
        .iter()
        .map(|item| controller.register_item(item, MenuPayload::for_item(BASE, item)))
        .collect();
    (controller, ids)
}

fn states(controller: &PopupMenuController) -> Vec<MenuState> {
    controller.snapshot().into_iter().map(|(_, state)| state).collect()
}

fn open_count(controller: &PopupMenuController) -> usize {
    states(controller).iter().filter(|state| state.is_open()).count()
}

/// Handler that records every request it sees.
fn recording_handler(
    log: &Rc<RefCell<Vec<ActionRequest>>>,
) -> impl FnMut(&ActionRequest) -> HandlerOutcome {
    let log = Rc::clone(log);
    move |request: &ActionRequest| -> HandlerOutcome {
        log.borrow_mut().push(request.clone());
        Ok(())
    }
}

// ============================================================================
// Mutual exclusion
// ============================================================================

#[test]
fn test_every_toggle_leaves_at_most_one_open() {
    let (mut controller, ids) = controller_with(&["p1", "p2", "p3"]);
    let sequence = [0, 1, 1, 2, 0, 2, 2, 1, 0, 0];

    for index in sequence {
        controller.toggle(&ids[index]).expect("registered menu");
        assert!(open_count(&controller) <= 1);
    }
}

#[test]
fn test_opening_b_closes_a() {
    let (mut controller, ids) = controller_with(&["a", "b"]);
    controller.toggle(&ids[0]).expect("toggle a");

    assert_eq!(controller.toggle(&ids[1]), Ok(MenuState::Open));

    assert_eq!(controller.state_of(&ids[0]), Some(MenuState::Closed));
    assert_eq!(controller.state_of(&ids[1]), Some(MenuState::Open));
}

#[test]
fn test_toggle_twice_restores_closed_and_leaves_others() {
    let (mut controller, ids) = controller_with(&["p1", "p2"]);
    let before = controller.snapshot();

    controller.toggle(&ids[1]).expect("open");
    controller.toggle(&ids[1]).expect("close");

    assert_eq!(controller.snapshot(), before);
}

// ============================================================================
// Outside-click dismissal
// ============================================================================

#[test]
fn test_outside_dismissal_is_idempotent() {
    let (mut controller, ids) = controller_with(&["p1", "p2"]);
    controller.toggle(&ids[0]).expect("open");

    assert!(controller.dismiss_all(&ClickOrigin::Outside));
    let after_first = controller.snapshot();
    assert_eq!(open_count(&controller), 0);

    assert!(controller.dismiss_all(&ClickOrigin::Outside));
    assert_eq!(controller.snapshot(), after_first);
}

#[test]
fn test_click_inside_owner_keeps_menu_open() {
    let (mut controller, ids) = controller_with(&["p1"]);
    controller
        .set_owner_region(&ids[0], Some(OwnerRegion::new(10, 5, 20, 6)))
        .expect("registered");
    controller.toggle(&ids[0]).expect("open");

    assert!(!controller.dismiss_all(&ClickOrigin::point(12, 7)));
    assert_eq!(states(&controller), vec![MenuState::Open]);

    assert!(!controller.dismiss_all(&ClickOrigin::InsideOwner(ids[0].clone())));
    assert_eq!(states(&controller), vec![MenuState::Open]);

    assert!(controller.dismiss_all(&ClickOrigin::point(40, 7)));
    assert_eq!(states(&controller), vec![MenuState::Closed]);
}

#[test]
fn test_click_inside_closed_menus_owner_is_not_outside() {
    let (mut controller, ids) = controller_with(&["p1", "p2"]);
    controller
        .set_owner_region(&ids[1], Some(OwnerRegion::new(0, 0, 9, 1)))
        .expect("registered");
    controller.toggle(&ids[0]).expect("open");

    // A click on another menu's trigger is handled by its toggle instead.
    assert!(!controller.dismiss_all(&ClickOrigin::point(3, 0)));
    assert!(controller.is_visible(&ids[0]));
}

// ============================================================================
// Action dispatch
// ============================================================================

#[test]
fn test_select_dispatches_payload_and_closes() {
    let (mut controller, ids) = controller_with(&["42"]);
    let log = Rc::new(RefCell::new(Vec::new()));
    controller.register_handler(ShareAction::Repost, recording_handler(&log));

    controller.toggle(&ids[0]).expect("open");
    let request = controller
        .select_action(&ids[0], ShareAction::Repost)
        .expect("dispatched");

    assert_eq!(request.payload.item_id, "42");
    assert_eq!(request.payload.url, format!("{BASE}/meep/42/"));
    assert_eq!(log.borrow().len(), 1);
    assert_eq!(controller.state_of(&ids[0]), Some(MenuState::Closed));
}

#[test]
fn test_failing_handler_still_closes() {
    let (mut controller, ids) = controller_with(&["p1"]);
    controller.register_handler(
        ShareAction::Repost,
        |_: &ActionRequest| -> HandlerOutcome { Err(HandlerError::Backend("down".to_string())) },
    );

    controller.toggle(&ids[0]).expect("open");
    assert!(controller.select_action(&ids[0], ShareAction::Repost).is_ok());
    assert!(!controller.is_visible(&ids[0]));
}

#[test]
fn test_panicking_handler_still_closes() {
    let (mut controller, ids) = controller_with(&["p1"]);
    controller.register_handler(ShareAction::Copy, |_: &ActionRequest| -> HandlerOutcome {
        panic!("clipboard exploded")
    });

    controller.toggle(&ids[0]).expect("open");
    assert!(controller.select_action(&ids[0], ShareAction::Copy).is_ok());
    assert!(!controller.is_visible(&ids[0]));

    // The controller keeps working afterwards.
    assert_eq!(controller.toggle(&ids[0]), Ok(MenuState::Open));
}

#[test]
fn test_select_on_closed_menu_does_not_dispatch() {
    let (mut controller, ids) = controller_with(&["p1"]);
    let log = Rc::new(RefCell::new(Vec::new()));
    controller.register_handler(ShareAction::Copy, recording_handler(&log));

    assert_eq!(
        controller.select_action(&ids[0], ShareAction::Copy),
        Err(ControllerMiss::MenuClosed(ids[0].clone()))
    );
    assert!(log.borrow().is_empty());
}

#[test]
fn test_unregistered_action_leaves_menu_open() {
    let (mut controller, ids) = controller_with(&["p1"]);
    controller.toggle(&ids[0]).expect("open");

    let miss = controller
        .select_action(&ids[0], ShareAction::Facebook)
        .expect_err("no handler");
    assert_eq!(miss, ControllerMiss::UnregisteredAction(ShareAction::Facebook));
    assert!(miss.is_configuration_defect());
    assert!(controller.is_visible(&ids[0]));
}

// ============================================================================
// Unknown targets
// ============================================================================

#[test]
fn test_toggle_unregistered_leaves_state_unchanged() {
    let (mut controller, ids) = controller_with(&["p1", "p2"]);
    controller.toggle(&ids[1]).expect("open p2");
    let before = controller.snapshot();

    let missing = MenuId::for_item("p3");
    assert_eq!(
        controller.toggle(&missing),
        Err(ControllerMiss::UnresolvedTarget(missing.clone()))
    );
    assert_eq!(controller.snapshot(), before);
    assert_eq!(states(&controller), vec![MenuState::Closed, MenuState::Open]);
}

#[test]
fn test_select_on_unregistered_leaves_state_unchanged() {
    let (mut controller, ids) = controller_with(&["p1"]);
    controller.register_handler(ShareAction::Copy, |_: &ActionRequest| -> HandlerOutcome {
        Ok(())
    });
    controller.toggle(&ids[0]).expect("open");

    let result = controller.select_action(&MenuId::from("nonexistent-id"), ShareAction::Copy);
    assert!(matches!(result, Err(ControllerMiss::UnresolvedTarget(_))));
    assert!(controller.is_visible(&ids[0]));
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_removing_open_menu_leaves_none_open() {
    let (mut controller, ids) = controller_with(&["p1", "p2"]);
    controller.toggle(&ids[0]).expect("open");

    assert!(controller.remove_menu(&ids[0]).is_some());
    assert!(controller.open_menu().is_none());
    assert_eq!(controller.len(), 1);
}

#[test]
fn test_events_route_to_operations() {
    let (mut controller, ids) = controller_with(&["p1"]);

    controller
        .handle_event(ControllerEvent::Trigger(ids[0].clone()))
        .expect("toggle");
    assert!(controller.is_visible(&ids[0]));

    controller.handle_event(ControllerEvent::Escape).expect("escape");
    assert!(!controller.is_visible(&ids[0]));
}

#[test]
fn test_dispose_makes_everything_a_noop() {
    let (mut controller, ids) = controller_with(&["p1"]);
    controller.toggle(&ids[0]).expect("open");

    controller.dispose();

    assert!(controller.is_empty());
    assert_eq!(controller.toggle(&ids[0]), Err(ControllerMiss::Disposed));
    assert!(!controller.dismiss_all(&ClickOrigin::Outside));
    assert!(controller.open_menu().is_none());
}

#[test]
fn test_shared_controller_keeps_exclusion_under_reentrancy() {
    let shared = SharedController::default();
    let ids: Vec<MenuId> = shared
        .with(|c| {
            ["a", "b", "c"]
                .iter()
                .map(|item| c.register_item(item, MenuPayload::for_item(BASE, item)))
                .collect()
        })
        .expect("idle");

    let handle = shared.clone();
    let (b, c) = (ids[1].clone(), ids[2].clone());
    shared.with(|controller| {
        controller.register_handler(ShareAction::Copy, move |_: &ActionRequest| -> HandlerOutcome {
            assert!(handle.toggle(&b).is_none());
            assert!(handle.toggle(&c).is_none());
            Ok(())
        })
    });

    shared.toggle(&ids[0]);
    assert_eq!(shared.select_action(&ids[0], ShareAction::Copy), Some(Ok(())));

    let snapshot = shared.with(|controller| controller.snapshot()).expect("idle");
    let open: Vec<&MenuId> = snapshot
        .iter()
        .filter(|(_, state)| state.is_open())
        .map(|(id, _)| id)
        .collect();
    assert_eq!(open, vec![&ids[2]]);

    shared.dispose();
    assert_eq!(shared.with(|c| c.is_empty()), Some(true));
}
