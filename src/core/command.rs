//! # Navigation Commands
//!
//! One command comes out of the reducer for every event that goes in.
//! A command tells the presentation layer *what visibly happened* so it
//! can pick a transition: a push animates forward, a pop animates back,
//! a `HiddenUpdate` needs no re-render of the visible screen at all.
//!
//! Commands carry container tags, never view payloads. Anything a
//! presenter needs beyond "what changed where" it reads back out of the
//! tree. That keeps [`NavCommand`] non-generic and cheap to fan out.

use crate::core::container::ContainerTag;
use crate::core::event::AlertSpec;

/// A navigation outcome. `visible_changed()` reports whether the visible
/// leaf is different from before the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    /// A tab group switched children and the screen changed with it.
    TabChanged {
        tag: ContainerTag,
        index: usize,
        visible_changed: bool,
    },
    /// A modal went up over `over`.
    ModalPresented {
        over: ContainerTag,
        /// Stack that was visible before, for transition choice.
        previous_visible: ContainerTag,
        visible_changed: bool,
    },
    /// `host` lost its modal.
    ModalDismissed {
        host: ContainerTag,
        previous_visible: ContainerTag,
        visible_changed: bool,
    },
    /// `tag` gained an overlay that is now on screen. Overlays never
    /// change the visible leaf.
    OverlayShown { tag: ContainerTag },
    /// `tag` lost its on-screen overlay.
    OverlayDismissed { tag: ContainerTag },
    /// The whole tree was swapped out.
    RootChanged {
        previous_visible: ContainerTag,
        visible_changed: bool,
    },
    ViewPushed {
        tag: ContainerTag,
        visible_changed: bool,
    },
    /// Covers pop, unwind, and whole-stack replacement: all "the stack
    /// got shorter or rewritten" from a presenter's point of view.
    ViewPopped {
        tag: ContainerTag,
        visible_changed: bool,
    },
    ViewReplaced {
        tag: ContainerTag,
        visible_changed: bool,
    },
    /// State may have changed, but not the visible leaf. Also the
    /// outcome of every absorbed (unresolvable or invariant-violating)
    /// event.
    HiddenUpdate,
    /// The host app moved between foreground and background.
    ForegroundChanged { foreground: bool },
    /// The presentation layer should show an alert dialog.
    AlertRequested { alert: AlertSpec },
}

impl NavCommand {
    /// Whether the visible leaf changed as a result of the event.
    pub fn visible_changed(&self) -> bool {
        match self {
            NavCommand::TabChanged {
                visible_changed, ..
            }
            | NavCommand::ModalPresented {
                visible_changed, ..
            }
            | NavCommand::ModalDismissed {
                visible_changed, ..
            }
            | NavCommand::RootChanged {
                visible_changed, ..
            }
            | NavCommand::ViewPushed {
                visible_changed, ..
            }
            | NavCommand::ViewPopped {
                visible_changed, ..
            }
            | NavCommand::ViewReplaced {
                visible_changed, ..
            } => *visible_changed,
            NavCommand::OverlayShown { .. }
            | NavCommand::OverlayDismissed { .. }
            | NavCommand::HiddenUpdate
            | NavCommand::ForegroundChanged { .. }
            | NavCommand::AlertRequested { .. } => false,
        }
    }

    /// Short name for diagnostics and the demo's command log.
    pub fn kind(&self) -> &'static str {
        match self {
            NavCommand::TabChanged { .. } => "tab-changed",
            NavCommand::ModalPresented { .. } => "modal-presented",
            NavCommand::ModalDismissed { .. } => "modal-dismissed",
            NavCommand::OverlayShown { .. } => "overlay-shown",
            NavCommand::OverlayDismissed { .. } => "overlay-dismissed",
            NavCommand::RootChanged { .. } => "root-changed",
            NavCommand::ViewPushed { .. } => "view-pushed",
            NavCommand::ViewPopped { .. } => "view-popped",
            NavCommand::ViewReplaced { .. } => "view-replaced",
            NavCommand::HiddenUpdate => "hidden-update",
            NavCommand::ForegroundChanged { .. } => "foreground-changed",
            NavCommand::AlertRequested { .. } => "alert-requested",
        }
    }
}
