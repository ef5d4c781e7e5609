//! # Navigation Events
//!
//! Everything that can happen to the navigation tree becomes a
//! [`NavEvent`]. User taps a row? That's `PushView`. Back gesture on a
//! modal? That's `DismissModal`. The reducer is the only consumer.
//!
//! Most events carry an optional target tag. `None` means "the current
//! screen": the reducer substitutes the tag of the container that was
//! visible before the event. Events with no notion of a current screen
//! (`AppForegroundChanged`, `ShowAlert`) carry no tag at all.

use crate::core::container::{Container, ContainerTag};

/// A navigation intent. Feed these to [`crate::store::Store::fire`].
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent<V> {
    /// Select a different child of a tab group.
    ChangeTabIndex {
        tag: Option<ContainerTag>,
        index: usize,
    },
    /// Attach `modal` on top of the targeted container, replacing any
    /// modal already presented there.
    PresentModal {
        over: Option<ContainerTag>,
        modal: Container<V>,
    },
    /// Clear the targeted container's modal. With no tag, targets the
    /// host of the currently visible modal chain.
    DismissModal { tag: Option<ContainerTag> },
    /// Lay a single view over the targeted container without replacing
    /// its content. Refused when an overlay is already up there.
    ShowOverlay {
        tag: Option<ContainerTag>,
        overlay: V,
    },
    /// Clear the targeted container's overlay. With no tag, targets the
    /// container whose overlay is currently on screen.
    DismissOverlay { tag: Option<ContainerTag> },
    /// Append a view to the targeted stack.
    PushView { tag: Option<ContainerTag>, view: V },
    /// Drop the targeted stack's top view. A no-op on a single-view
    /// stack.
    PopView { tag: Option<ContainerTag> },
    /// Swap the targeted stack's top view.
    ReplaceTopView { tag: Option<ContainerTag>, view: V },
    /// Replace the targeted stack's whole view list. The replacement
    /// must be non-empty or the event is absorbed.
    ReplaceStack { tag: ContainerTag, views: Vec<V> },
    /// Truncate the targeted stack so `view` is on top. `None` (or a
    /// view not present, under the default policy) truncates to the
    /// first view.
    UnwindToView { tag: ContainerTag, view: Option<V> },
    /// Swap out the entire tree.
    ReplaceRoot { root: Container<V> },
    /// The host app moved between foreground and background.
    AppForegroundChanged { foreground: bool },
    /// Ask the presentation layer to show an alert dialog. Pure
    /// pass-through; the tree is untouched.
    ShowAlert { alert: AlertSpec },
}

/// What an alert dialog should say. Rendering is the presentation
/// layer's problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertSpec {
    pub title: String,
    pub message: String,
    pub buttons: Vec<String>,
}

impl<V> NavEvent<V> {
    /// Short name for diagnostics, so the store can log events without
    /// requiring `V: Debug`.
    pub fn kind(&self) -> &'static str {
        match self {
            NavEvent::ChangeTabIndex { .. } => "change-tab-index",
            NavEvent::PresentModal { .. } => "present-modal",
            NavEvent::DismissModal { .. } => "dismiss-modal",
            NavEvent::ShowOverlay { .. } => "show-overlay",
            NavEvent::DismissOverlay { .. } => "dismiss-overlay",
            NavEvent::PushView { .. } => "push-view",
            NavEvent::PopView { .. } => "pop-view",
            NavEvent::ReplaceTopView { .. } => "replace-top-view",
            NavEvent::ReplaceStack { .. } => "replace-stack",
            NavEvent::UnwindToView { .. } => "unwind-to-view",
            NavEvent::ReplaceRoot { .. } => "replace-root",
            NavEvent::AppForegroundChanged { .. } => "app-foreground-changed",
            NavEvent::ShowAlert { .. } => "show-alert",
        }
    }
}
