//! # Switchback
//!
//! A unidirectional-data-flow navigation engine. Feed it a tree of view
//! containers (stacks, tab groups, modals) and a stream of navigation
//! events; it deterministically computes the next tree and emits one
//! command per event describing what visibly changed, so a presentation
//! layer knows exactly when (and when not) to animate.
//!
//! The [`core`] module is pure: no I/O, no threads, no rendering. The
//! [`store`] module is the single-threaded harness that owns the state
//! and fans commands out to subscribers. The [`tui`] module is a demo
//! presentation layer for the bundled binary.

pub mod core;
pub mod store;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::back::{BackAction, resolve_back};
pub use crate::core::command::NavCommand;
pub use crate::core::container::{
    Container, ContainerTag, NavigationState, StackState, TabsState,
};
pub use crate::core::event::{AlertSpec, NavEvent};
pub use crate::core::policy::{ReducerPolicy, UnwindMissPolicy};
pub use crate::core::reducer::{reduce, reduce_with};
pub use crate::store::{EventSink, Store, SubscriptionId};
