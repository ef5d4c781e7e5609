//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::container::{Container, NavigationState, StackState, TabsState};

/// Builds a stack of `&'static str` views. Panics on an empty slice,
/// which is fine in tests.
pub fn stack(tag: &str, views: &[&'static str]) -> StackState<&'static str> {
    StackState::with_views(tag, views.to_vec()).unwrap()
}

/// The two-tab tree used throughout the unit tests:
/// `Tabs "tabs" [Stack "t0" [A], Stack "t1" [B]]`, tab 0 selected.
pub fn tabs_root() -> Container<&'static str> {
    Container::Tabs(
        TabsState::new(
            "tabs",
            vec![
                Container::Stack(stack("t0", &["A"])),
                Container::Stack(stack("t1", &["B"])),
            ],
        )
        .unwrap(),
    )
}

/// Wraps a root container into a fresh foregrounded state.
pub fn nav(root: Container<&'static str>) -> NavigationState<&'static str> {
    NavigationState::new(root)
}
