//! Property-based tests for the popup menu controller.
//!
//! Drives the controller with random stimulus sequences and checks that
//! mutual exclusion and the toggle/dismiss contracts hold after every step.

use proptest::prelude::*;
use share_menu::handlers::HandlerOutcome;
use share_menu::{
    ActionRequest, ClickOrigin, HandlerError, MenuId, MenuPayload, MenuState,
    PopupMenuController, ShareAction,
};

const MENUS: usize = 5;

#[derive(Debug, Clone)]
enum Step {
    Toggle(usize),
    ToggleUnknown,
    DismissOutside,
    Select(usize, usize),
    Remove(usize),
    Escape,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => (0..MENUS).prop_map(Step::Toggle),
        1 => Just(Step::ToggleUnknown),
        2 => Just(Step::DismissOutside),
        2 => (0..MENUS, 0..ShareAction::ALL.len()).prop_map(|(m, a)| Step::Select(m, a)),
        1 => (0..MENUS).prop_map(Step::Remove),
        1 => Just(Step::Escape),
    ]
}

fn controller() -> (PopupMenuController, Vec<MenuId>) {
    let mut controller = PopupMenuController::new();
    let ids = (0..MENUS)
        .map(|n| {
            let item = n.to_string();
            controller.register_item(&item, MenuPayload::for_item("https://x.test", &item))
        })
        .collect();
    // Copy succeeds, repost fails, the share actions stay unregistered.
    controller.register_handler(ShareAction::Copy, |_: &ActionRequest| -> HandlerOutcome {
        Ok(())
    });
    controller.register_handler(ShareAction::Repost, |_: &ActionRequest| -> HandlerOutcome {
        Err(HandlerError::Backend("rejected".to_string()))
    });
    (controller, ids)
}

fn open_count(controller: &PopupMenuController) -> usize {
    controller
        .snapshot()
        .iter()
        .filter(|(_, state)| state.is_open())
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn at_most_one_menu_open(steps in prop::collection::vec(step(), 0..60)) {
        let (mut controller, ids) = controller();
        for step in steps {
            match step {
                Step::Toggle(m) => { let _ = controller.toggle(&ids[m]); }
                Step::ToggleUnknown => { let _ = controller.toggle(&MenuId::from("nope")); }
                Step::DismissOutside => { controller.dismiss_all(&ClickOrigin::Outside); }
                Step::Select(m, a) => {
                    let action = ShareAction::ALL[a];
                    let was_open = controller.is_visible(&ids[m]);
                    let result = controller.select_action(&ids[m], action);
                    if result.is_ok() {
                        prop_assert!(was_open);
                        prop_assert!(!controller.is_visible(&ids[m]));
                    }
                }
                Step::Remove(m) => { controller.remove_menu(&ids[m]); }
                Step::Escape => { controller.close_all(); }
            }
            prop_assert!(open_count(&controller) <= 1);
            if let Some(open) = controller.open_menu() {
                prop_assert!(controller.menu(open).is_some(), "open menu must be registered");
            }
        }
    }

    #[test]
    fn toggle_twice_is_identity(
        prefix in prop::collection::vec(0..MENUS, 0..10),
        target in 0..MENUS,
    ) {
        let (mut controller, ids) = controller();
        for m in prefix {
            controller.toggle(&ids[m]).expect("registered");
        }
        // Start from M closed, as the property requires.
        if controller.is_visible(&ids[target]) {
            controller.close_all();
        }
        let before = controller.snapshot();
        let was_open = controller.open_menu().cloned();

        prop_assert_eq!(controller.toggle(&ids[target]), Ok(MenuState::Open));
        prop_assert_eq!(controller.toggle(&ids[target]), Ok(MenuState::Closed));

        let after = controller.snapshot();
        for ((id, state_before), (_, state_after)) in before.iter().zip(after.iter()) {
            // Opening M closed whatever else was open; everything else is untouched.
            if Some(id) == was_open.as_ref() {
                prop_assert_eq!(*state_after, MenuState::Closed);
            } else {
                prop_assert_eq!(state_before, state_after);
            }
        }
    }

    #[test]
    fn unknown_targets_change_nothing(
        prefix in prop::collection::vec(0..MENUS, 0..10),
        name in "[a-z]{1,12}",
    ) {
        let (mut controller, ids) = controller();
        for m in prefix {
            controller.toggle(&ids[m]).expect("registered");
        }
        let before = controller.snapshot();
        let unknown = MenuId::new(format!("unregistered-{name}"));

        prop_assert!(controller.toggle(&unknown).is_err());
        prop_assert!(controller.select_action(&unknown, ShareAction::Copy).is_err());
        prop_assert_eq!(controller.snapshot(), before);
    }

    #[test]
    fn outside_dismissal_is_idempotent(prefix in prop::collection::vec(0..MENUS, 0..10)) {
        let (mut controller, ids) = controller();
        for m in prefix {
            controller.toggle(&ids[m]).expect("registered");
        }
        controller.dismiss_all(&ClickOrigin::Outside);
        let once = controller.snapshot();
        controller.dismiss_all(&ClickOrigin::Outside);

        prop_assert_eq!(open_count(&controller), 0);
        prop_assert_eq!(controller.snapshot(), once);
    }
}
