//! # The Reducer
//!
//! ```text
//! NavigationState + NavEvent  →  reduce()  →  (NavigationState, NavCommand)
//! ```
//!
//! Pure and total: no I/O, and every event produces a command. When an
//! event cannot be honored (unknown tag, wrong container kind, or a
//! request the invariants forbid) it is silently absorbed: the state
//! comes back unchanged by value and the command is `HiddenUpdate`.
//! Navigation requests never crash the session.
//!
//! Command discipline: a structural command is only emitted when the
//! change could matter on screen. Pushes, pops, and replaces report
//! themselves only when they hit the container that was visible *before*
//! the event; tab switches and modal changes report themselves only when
//! the visible leaf actually changed; overlay changes report themselves
//! only when the overlay actually on screen changed (and never set
//! `visible_changed`, since the leaf is untouched). Everything else,
//! including real mutations happening under a modal, is a `HiddenUpdate`
//! and the presenter must not animate for it.

use crate::core::command::NavCommand;
use crate::core::container::{Container, NavigationState};
use crate::core::event::NavEvent;
use crate::core::policy::{ReducerPolicy, UnwindMissPolicy};

/// Applies one event with the default policy.
pub fn reduce<V>(
    state: &NavigationState<V>,
    event: NavEvent<V>,
) -> (NavigationState<V>, NavCommand)
where
    V: Clone + PartialEq,
{
    reduce_with(ReducerPolicy::default(), state, event)
}

/// Applies one event. The returned state is a fresh value; the input is
/// never mutated.
pub fn reduce_with<V>(
    policy: ReducerPolicy,
    state: &NavigationState<V>,
    event: NavEvent<V>,
) -> (NavigationState<V>, NavCommand)
where
    V: Clone + PartialEq,
{
    // Everything below compares against the pre-event visible leaf.
    let pre_visible_tag = state.visible_container().tag.clone();
    let pre_visible_view = state.visible_view().clone();
    let mut next = state.clone();

    let command = match event {
        NavEvent::ChangeTabIndex { tag, index } => {
            let target = tag.unwrap_or_else(|| pre_visible_tag.clone());
            let applied = match next.root.find_by_tag_mut(&target) {
                Some(Container::Tabs(tabs)) => tabs.select(index),
                _ => false,
            };
            if applied && next.visible_view() != &pre_visible_view {
                NavCommand::TabChanged {
                    tag: target,
                    index,
                    visible_changed: true,
                }
            } else {
                NavCommand::HiddenUpdate
            }
        }

        NavEvent::PresentModal { over, modal } => {
            let target = over.unwrap_or_else(|| pre_visible_tag.clone());
            let applied = match next.root.find_by_tag_mut(&target) {
                Some(host) => {
                    host.attach_modal(modal);
                    true
                }
                None => false,
            };
            if applied && next.visible_view() != &pre_visible_view {
                NavCommand::ModalPresented {
                    over: target,
                    previous_visible: pre_visible_tag.clone(),
                    visible_changed: true,
                }
            } else {
                NavCommand::HiddenUpdate
            }
        }

        NavEvent::DismissModal { tag } => {
            // The visible container never carries a modal (the modal
            // would be visible instead), so the tagless default is the
            // host of the visible modal chain.
            let target = tag.or_else(|| state.root.visible_modal_host().cloned());
            match target {
                Some(target) => {
                    let applied = match next.root.find_by_tag_mut(&target) {
                        Some(host) => host.detach_modal(),
                        None => false,
                    };
                    if applied && next.visible_view() != &pre_visible_view {
                        NavCommand::ModalDismissed {
                            host: target,
                            previous_visible: pre_visible_tag.clone(),
                            visible_changed: true,
                        }
                    } else {
                        NavCommand::HiddenUpdate
                    }
                }
                None => NavCommand::HiddenUpdate,
            }
        }

        NavEvent::ShowOverlay { tag, overlay } => {
            let pre_overlay = state.root.visible_overlay().cloned();
            let target = tag.unwrap_or_else(|| pre_visible_tag.clone());
            let applied = match next.root.find_by_tag_mut(&target) {
                Some(host) => host.show_overlay(overlay),
                None => false,
            };
            if applied && next.root.visible_overlay() != pre_overlay.as_ref() {
                NavCommand::OverlayShown { tag: target }
            } else {
                NavCommand::HiddenUpdate
            }
        }

        NavEvent::DismissOverlay { tag } => {
            let pre_overlay = state.root.visible_overlay().cloned();
            let target = tag.or_else(|| state.root.visible_overlay_host().cloned());
            match target {
                Some(target) => {
                    let applied = match next.root.find_by_tag_mut(&target) {
                        Some(host) => host.dismiss_overlay(),
                        None => false,
                    };
                    if applied && next.root.visible_overlay() != pre_overlay.as_ref() {
                        NavCommand::OverlayDismissed { tag: target }
                    } else {
                        NavCommand::HiddenUpdate
                    }
                }
                None => NavCommand::HiddenUpdate,
            }
        }

        NavEvent::PushView { tag, view } => {
            let target = tag.unwrap_or_else(|| pre_visible_tag.clone());
            let applied = match next.root.find_by_tag_mut(&target) {
                Some(Container::Stack(stack)) => {
                    stack.push(view);
                    true
                }
                _ => false,
            };
            if applied && target == pre_visible_tag {
                let visible_changed = next.visible_view() != &pre_visible_view;
                NavCommand::ViewPushed {
                    tag: target,
                    visible_changed,
                }
            } else {
                NavCommand::HiddenUpdate
            }
        }

        NavEvent::PopView { tag } => {
            let target = tag.unwrap_or_else(|| pre_visible_tag.clone());
            let applied = match next.root.find_by_tag_mut(&target) {
                Some(Container::Stack(stack)) => stack.pop(),
                _ => false,
            };
            if applied && target == pre_visible_tag {
                let visible_changed = next.visible_view() != &pre_visible_view;
                NavCommand::ViewPopped {
                    tag: target,
                    visible_changed,
                }
            } else {
                NavCommand::HiddenUpdate
            }
        }

        NavEvent::ReplaceTopView { tag, view } => {
            let target = tag.unwrap_or_else(|| pre_visible_tag.clone());
            let applied = match next.root.find_by_tag_mut(&target) {
                Some(Container::Stack(stack)) => {
                    stack.replace_top(view);
                    true
                }
                _ => false,
            };
            if applied && target == pre_visible_tag {
                let visible_changed = next.visible_view() != &pre_visible_view;
                NavCommand::ViewReplaced {
                    tag: target,
                    visible_changed,
                }
            } else {
                NavCommand::HiddenUpdate
            }
        }

        NavEvent::ReplaceStack { tag, views } => {
            let applied = match next.root.find_by_tag_mut(&tag) {
                Some(Container::Stack(stack)) => stack.replace_views(views),
                _ => false,
            };
            if applied && tag == pre_visible_tag {
                let visible_changed = next.visible_view() != &pre_visible_view;
                NavCommand::ViewPopped {
                    tag,
                    visible_changed,
                }
            } else {
                NavCommand::HiddenUpdate
            }
        }

        NavEvent::UnwindToView { tag, view } => {
            let dropped = match next.root.find_by_tag_mut(&tag) {
                Some(Container::Stack(stack)) => match view {
                    Some(view) => match stack.unwind_to(&view) {
                        Some(dropped) => dropped,
                        None => match policy.unwind_miss {
                            UnwindMissPolicy::TruncateToFirst => stack.unwind_to_first(),
                            UnwindMissPolicy::Ignore => 0,
                        },
                    },
                    None => stack.unwind_to_first(),
                },
                _ => 0,
            };
            if dropped > 0 && tag == pre_visible_tag {
                let visible_changed = next.visible_view() != &pre_visible_view;
                NavCommand::ViewPopped {
                    tag,
                    visible_changed,
                }
            } else {
                NavCommand::HiddenUpdate
            }
        }

        NavEvent::ReplaceRoot { root } => {
            next.root = root;
            NavCommand::RootChanged {
                previous_visible: pre_visible_tag.clone(),
                visible_changed: true,
            }
        }

        NavEvent::AppForegroundChanged { foreground } => {
            next.app_in_foreground = foreground;
            NavCommand::ForegroundChanged { foreground }
        }

        NavEvent::ShowAlert { alert } => NavCommand::AlertRequested { alert },
    };

    (next, command)
}
