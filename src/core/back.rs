//! # Back-Navigation Resolution
//!
//! One pure question: "the user pressed back, now what?" The answer is
//! ranked, and the ranking is load-bearing:
//!
//! 1. The visible stack has views to pop → pop.
//! 2. The visible stack sits under a cancellable modal → dismiss it.
//! 3. Nothing left to unwind → terminate the session.
//!
//! Checking the stack before the modal keeps a multi-view modal stack
//! popping internally before it can be dismissed; checking the modal
//! before terminating keeps a single-view modal from stranding the user.

use crate::core::container::{Container, ContainerTag, NavigationState};
use crate::core::event::NavEvent;

/// What the host should do about a back gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackAction {
    /// Pop the top view of the tagged stack.
    PopTopView { tag: ContainerTag },
    /// Dismiss the modal attached to the tagged host container.
    DismissModal { host: ContainerTag },
    /// Nothing to unwind; the navigation session is over.
    Terminate,
}

impl BackAction {
    /// The event that carries this action out, or `None` for
    /// `Terminate` (exiting is the host's job, not the reducer's).
    pub fn to_event<V>(&self) -> Option<NavEvent<V>> {
        match self {
            BackAction::PopTopView { tag } => Some(NavEvent::PopView {
                tag: Some(tag.clone()),
            }),
            BackAction::DismissModal { host } => Some(NavEvent::DismissModal {
                tag: Some(host.clone()),
            }),
            BackAction::Terminate => None,
        }
    }
}

/// Resolves a back gesture against the current visible chain.
pub fn resolve_back<V>(state: &NavigationState<V>) -> BackAction {
    // Walk the visibility chain, remembering the innermost modal
    // boundary crossed on the way down.
    let mut boundary: Option<(&ContainerTag, bool)> = None;
    let mut current = &state.root;
    let visible = loop {
        if let Some(modal) = current.modal() {
            let cancellable = match modal {
                Container::Stack(s) => s.cancellable,
                // Tab groups carry no cancellable flag; back cannot
                // dismiss them.
                Container::Tabs(_) => false,
            };
            boundary = Some((current.tag(), cancellable));
            current = modal;
            continue;
        }
        match current {
            Container::Tabs(tabs) => current = tabs.selected(),
            Container::Stack(stack) => break stack,
        }
    };

    if visible.views().len() > 1 {
        BackAction::PopTopView {
            tag: visible.tag.clone(),
        }
    } else if let Some((host, true)) = boundary {
        BackAction::DismissModal { host: host.clone() }
    } else {
        BackAction::Terminate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reducer::reduce;
    use crate::test_support::{nav, stack, tabs_root};

    #[test]
    fn test_back_pops_multi_view_stack() {
        let state = nav(Container::Stack(stack("main", &["A", "B"])));
        assert_eq!(
            resolve_back(&state),
            BackAction::PopTopView { tag: "main".into() }
        );
    }

    // A cancellable single-view modal dismisses, then the bare root
    // terminates.
    #[test]
    fn test_back_dismisses_cancellable_modal_then_terminates() {
        let mut root = Container::Stack(stack("main", &["X"]));
        root.attach_modal(Container::Stack(stack("s", &["A"]).cancellable(true)));
        let state = nav(root);

        let action = resolve_back(&state);
        assert_eq!(action, BackAction::DismissModal { host: "main".into() });

        let (state, _) = reduce(&state, action.to_event().unwrap());
        assert_eq!(state.visible_view(), &"X");

        assert_eq!(resolve_back(&state), BackAction::Terminate);
    }

    #[test]
    fn test_back_pops_inside_modal_before_dismissing() {
        let mut root = Container::Stack(stack("main", &["X"]));
        root.attach_modal(Container::Stack(stack("m", &["A", "B"]).cancellable(true)));
        let state = nav(root);
        assert_eq!(
            resolve_back(&state),
            BackAction::PopTopView { tag: "m".into() }
        );
    }

    #[test]
    fn test_back_terminates_on_non_cancellable_modal() {
        let mut root = Container::Stack(stack("main", &["X"]));
        root.attach_modal(Container::Stack(stack("m", &["A"])));
        let state = nav(root);
        assert_eq!(resolve_back(&state), BackAction::Terminate);
    }

    #[test]
    fn test_back_sees_through_tab_selection() {
        let state = nav(tabs_root());
        // Both tab children hold a single view and there is no modal.
        assert_eq!(resolve_back(&state), BackAction::Terminate);

        let (state, _) = reduce(
            &state,
            NavEvent::PushView {
                tag: Some("t0".into()),
                view: "A2",
            },
        );
        assert_eq!(
            resolve_back(&state),
            BackAction::PopTopView { tag: "t0".into() }
        );
    }

    #[test]
    fn test_back_uses_innermost_modal_boundary() {
        let mut root = Container::Stack(stack("main", &["X"]));
        let mut outer = Container::Stack(stack("outer", &["O"]).cancellable(true));
        outer.attach_modal(Container::Stack(stack("inner", &["I"]).cancellable(true)));
        root.attach_modal(outer);
        let state = nav(root);
        assert_eq!(
            resolve_back(&state),
            BackAction::DismissModal {
                host: "outer".into()
            }
        );
    }

    // Repeatedly resolving and applying back must bottom out at
    // Terminate for any finite tree.
    #[test]
    fn test_back_resolution_terminates() {
        let mut t0 = stack("t0", &["A", "B", "C"]);
        t0.push("D");
        let mut root = Container::Tabs(
            crate::core::container::TabsState::new(
                "tabs",
                vec![
                    Container::Stack(t0),
                    Container::Stack(stack("t1", &["E", "F"])),
                ],
            )
            .unwrap(),
        );
        let mut modal = Container::Stack(stack("m", &["M1", "M2"]).cancellable(true));
        modal.attach_modal(Container::Stack(stack("m2", &["N"]).cancellable(true)));
        root.attach_modal(modal);

        let mut state = nav(root);
        let mut steps = 0;
        loop {
            match resolve_back(&state) {
                BackAction::Terminate => break,
                action => {
                    let (next, _) = reduce(&state, action.to_event().unwrap());
                    assert_ne!(next, state, "back action must make progress");
                    state = next;
                }
            }
            steps += 1;
            assert!(steps < 64, "back resolution failed to terminate");
        }
        // Everything dismissable is gone; the selected tab is down to
        // one view.
        assert_eq!(state.visible_view(), &"A");
    }
}
