//! # Container Tree
//!
//! The recursive data model behind all navigation state. A container is
//! either a linear stack of views or a tab group of sibling containers,
//! and any container may carry one modal child presented on top of it:
//!
//! ```text
//! Tabs "root" (selected: 0)
//! ├── Stack "home"     [Landing > Detail]      ← visible leaf (top view)
//! ├── Stack "library"  [Shelf]
//! └── modal: Stack "compose" [Editor]          ← wins if attached
//! ```
//!
//! Invariants enforced here rather than in the reducer:
//!
//! - A stack's view list never becomes empty. `pop` on a single view
//!   refuses; constructors reject empty view lists.
//! - A tab group's `selected_index` always addresses a live child.
//! - At most one modal per container; attaching again replaces the old
//!   one. The modal's `parent_tag` is stamped on attach and cleared on
//!   detach; it is weak bookkeeping for lookups, never ownership.
//! - At most one overlay per container; showing over an existing one
//!   refuses, so the first overlay stays up until dismissed.
//!
//! The view payload `V` is opaque to the engine. Value equality is all
//! the engine ever asks of it (to decide whether the visible leaf
//! actually changed).

use std::fmt;

/// Process-unique identifier for a container. Uniqueness across the tree
/// is a caller contract; lookups assume at most one match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerTag(String);

impl ContainerTag {
    pub fn new(tag: impl Into<String>) -> Self {
        ContainerTag(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContainerTag {
    fn from(s: &str) -> Self {
        ContainerTag(s.to_string())
    }
}

impl From<String> for ContainerTag {
    fn from(s: String) -> Self {
        ContainerTag(s)
    }
}

/// A node in the navigation tree: a stack of views or a group of tabs.
#[derive(Debug, Clone, PartialEq)]
pub enum Container<V> {
    Stack(StackState<V>),
    Tabs(TabsState<V>),
}

/// A linear navigation stack. The last view is the one on screen when
/// this stack is the visible container.
#[derive(Debug, Clone, PartialEq)]
pub struct StackState<V> {
    pub tag: ContainerTag,
    views: Vec<V>,
    pub modal: Option<Box<Container<V>>>,
    /// A single view laid over this stack without hiding its content.
    pub overlay: Option<V>,
    /// Whether a back gesture may dismiss this stack when it is presented
    /// as a modal.
    pub cancellable: bool,
    pub parent_tag: Option<ContainerTag>,
}

impl<V> StackState<V> {
    pub fn new(tag: impl Into<ContainerTag>, first_view: V) -> Self {
        StackState {
            tag: tag.into(),
            views: vec![first_view],
            modal: None,
            overlay: None,
            cancellable: false,
            parent_tag: None,
        }
    }

    /// Builds a stack from an existing view list. Returns `None` for an
    /// empty list; a stack without views is not representable.
    pub fn with_views(tag: impl Into<ContainerTag>, views: Vec<V>) -> Option<Self> {
        if views.is_empty() {
            return None;
        }
        Some(StackState {
            tag: tag.into(),
            views,
            modal: None,
            overlay: None,
            cancellable: false,
            parent_tag: None,
        })
    }

    pub fn cancellable(mut self, flag: bool) -> Self {
        self.cancellable = flag;
        self
    }

    pub fn views(&self) -> &[V] {
        &self.views
    }

    /// The view on screen when this stack is the visible container.
    pub fn top_view(&self) -> &V {
        // views is never empty
        self.views.last().unwrap()
    }

    pub fn push(&mut self, view: V) {
        self.views.push(view);
    }

    /// Drops the top view. Refuses (returns false) on a single-view
    /// stack; the non-emptiness invariant outranks the request.
    pub fn pop(&mut self) -> bool {
        if self.views.len() > 1 {
            self.views.pop();
            true
        } else {
            false
        }
    }

    /// Swaps the top view for another. Always succeeds: the view count
    /// is unchanged, so the invariant holds even at length one.
    pub fn replace_top(&mut self, view: V) {
        *self.views.last_mut().unwrap() = view;
    }

    /// Replaces the whole view list. Refuses an empty replacement.
    pub fn replace_views(&mut self, views: Vec<V>) -> bool {
        if views.is_empty() {
            return false;
        }
        self.views = views;
        true
    }

    /// Truncates the stack so the first view is on top. Returns how many
    /// views were dropped.
    pub fn unwind_to_first(&mut self) -> usize {
        let dropped = self.views.len() - 1;
        self.views.truncate(1);
        dropped
    }
}

impl<V: PartialEq> StackState<V> {
    /// Truncates the stack so `view` is on top, if present. Returns
    /// `None` when the view is not in the stack, otherwise how many
    /// views were dropped.
    pub fn unwind_to(&mut self, view: &V) -> Option<usize> {
        let index = self.views.iter().position(|v| v == view)?;
        let dropped = self.views.len() - (index + 1);
        self.views.truncate(index + 1);
        Some(dropped)
    }
}

/// A group of sibling containers with one selected at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct TabsState<V> {
    pub tag: ContainerTag,
    children: Vec<Container<V>>,
    selected_index: usize,
    pub modal: Option<Box<Container<V>>>,
    /// A single view laid over the whole group without hiding it.
    pub overlay: Option<V>,
    pub parent_tag: Option<ContainerTag>,
}

impl<V> TabsState<V> {
    /// Builds a tab group. Returns `None` for an empty child list.
    pub fn new(tag: impl Into<ContainerTag>, children: Vec<Container<V>>) -> Option<Self> {
        if children.is_empty() {
            return None;
        }
        Some(TabsState {
            tag: tag.into(),
            children,
            selected_index: 0,
            modal: None,
            overlay: None,
            parent_tag: None,
        })
    }

    pub fn children(&self) -> &[Container<V>] {
        &self.children
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected(&self) -> &Container<V> {
        &self.children[self.selected_index]
    }

    /// Changes the selection. Refuses an out-of-range index and a
    /// selection that would not change anything.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.children.len() || index == self.selected_index {
            return false;
        }
        self.selected_index = index;
        true
    }
}

impl<V> Container<V> {
    pub fn tag(&self) -> &ContainerTag {
        match self {
            Container::Stack(s) => &s.tag,
            Container::Tabs(t) => &t.tag,
        }
    }

    pub fn parent_tag(&self) -> Option<&ContainerTag> {
        match self {
            Container::Stack(s) => s.parent_tag.as_ref(),
            Container::Tabs(t) => t.parent_tag.as_ref(),
        }
    }

    pub fn modal(&self) -> Option<&Container<V>> {
        match self {
            Container::Stack(s) => s.modal.as_deref(),
            Container::Tabs(t) => t.modal.as_deref(),
        }
    }

    /// The non-modal overlay laid over this container, if any.
    pub fn overlay(&self) -> Option<&V> {
        match self {
            Container::Stack(s) => s.overlay.as_ref(),
            Container::Tabs(t) => t.overlay.as_ref(),
        }
    }

    /// Lays `overlay` over this container. Refuses (returns false) when
    /// one is already up; the existing overlay stays.
    pub fn show_overlay(&mut self, overlay: V) -> bool {
        let slot = match self {
            Container::Stack(s) => &mut s.overlay,
            Container::Tabs(t) => &mut t.overlay,
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(overlay);
        true
    }

    /// Clears this container's overlay. Returns false if there was none.
    pub(crate) fn dismiss_overlay(&mut self) -> bool {
        let slot = match self {
            Container::Stack(s) => &mut s.overlay,
            Container::Tabs(t) => &mut t.overlay,
        };
        slot.take().is_some()
    }

    fn set_parent_tag(&mut self, tag: Option<ContainerTag>) {
        match self {
            Container::Stack(s) => s.parent_tag = tag,
            Container::Tabs(t) => t.parent_tag = tag,
        }
    }

    /// Attaches `modal` on top of this container, replacing any modal
    /// already attached, and stamps its `parent_tag`.
    pub fn attach_modal(&mut self, mut modal: Container<V>) {
        let host_tag = self.tag().clone();
        modal.set_parent_tag(Some(host_tag));
        let slot = match self {
            Container::Stack(s) => &mut s.modal,
            Container::Tabs(t) => &mut t.modal,
        };
        *slot = Some(Box::new(modal));
    }

    /// Detaches this container's modal, clearing the weak back-reference
    /// on the way out. Returns false if there was nothing to detach.
    pub(crate) fn detach_modal(&mut self) -> bool {
        let slot = match self {
            Container::Stack(s) => &mut s.modal,
            Container::Tabs(t) => &mut t.modal,
        };
        match slot.take() {
            Some(mut modal) => {
                modal.set_parent_tag(None);
                true
            }
            None => false,
        }
    }

    /// Resolves the single stack actually on screen: a modal always wins
    /// over its host's own content, a tab group defers to its selected
    /// child, and a stack is the end of the walk. Total: every finite
    /// tree bottoms out at a stack.
    pub fn visible_stack(&self) -> &StackState<V> {
        if let Some(modal) = self.modal() {
            return modal.visible_stack();
        }
        match self {
            Container::Stack(s) => s,
            Container::Tabs(t) => t.selected().visible_stack(),
        }
    }

    /// The view on screen right now.
    pub fn visible_view(&self) -> &V {
        self.visible_stack().top_view()
    }

    /// Tag of the container whose modal the visible stack lives under,
    /// if the visibility walk crosses a modal boundary at all. Nested
    /// modals resolve to the innermost host.
    pub fn visible_modal_host(&self) -> Option<&ContainerTag> {
        let mut host = None;
        let mut current = self;
        loop {
            if let Some(modal) = current.modal() {
                host = Some(current.tag());
                current = modal;
            } else if let Container::Tabs(t) = current {
                current = t.selected();
            } else {
                return host;
            }
        }
    }

    /// The overlay on screen right now, if any. A container hidden
    /// behind a modal never shows its overlay; along the visible chain
    /// the innermost overlay wins.
    pub fn visible_overlay(&self) -> Option<&V> {
        let mut found = None;
        let mut current = self;
        loop {
            if let Some(modal) = current.modal() {
                current = modal;
                continue;
            }
            if let Some(overlay) = current.overlay() {
                found = Some(overlay);
            }
            match current {
                Container::Tabs(t) => current = t.selected(),
                Container::Stack(_) => return found,
            }
        }
    }

    /// Tag of the container whose overlay is on screen, if any.
    pub fn visible_overlay_host(&self) -> Option<&ContainerTag> {
        let mut host = None;
        let mut current = self;
        loop {
            if let Some(modal) = current.modal() {
                current = modal;
                continue;
            }
            if current.overlay().is_some() {
                host = Some(current.tag());
            }
            match current {
                Container::Tabs(t) => current = t.selected(),
                Container::Stack(_) => return host,
            }
        }
    }

    /// Depth-first lookup by tag, searching each container's modal
    /// before its children. First match wins.
    pub fn find_by_tag(&self, tag: &ContainerTag) -> Option<&Container<V>> {
        if self.tag() == tag {
            return Some(self);
        }
        if let Some(found) = self.modal().and_then(|m| m.find_by_tag(tag)) {
            return Some(found);
        }
        if let Container::Tabs(t) = self {
            for child in &t.children {
                if let Some(found) = child.find_by_tag(tag) {
                    return Some(found);
                }
            }
        }
        None
    }

    pub(crate) fn find_by_tag_mut(&mut self, tag: &ContainerTag) -> Option<&mut Container<V>> {
        if self.tag() == tag {
            return Some(self);
        }
        // Resolve the branch immutably first: conditionally returning a
        // mutable borrow while keeping `self` usable trips the borrow
        // checker.
        if self.modal().is_some_and(|m| m.find_by_tag(tag).is_some()) {
            let modal = match self {
                Container::Stack(s) => s.modal.as_deref_mut(),
                Container::Tabs(t) => t.modal.as_deref_mut(),
            };
            return modal.and_then(|m| m.find_by_tag_mut(tag));
        }
        if let Container::Tabs(t) = self {
            let index = t
                .children
                .iter()
                .position(|child| child.find_by_tag(tag).is_some())?;
            return t.children[index].find_by_tag_mut(tag);
        }
        None
    }
}

/// The whole navigation state for an app session: one exclusively owned
/// container tree plus the foreground flag. Created once at startup and
/// only ever rewritten by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState<V> {
    pub root: Container<V>,
    pub app_in_foreground: bool,
}

impl<V> NavigationState<V> {
    pub fn new(root: Container<V>) -> Self {
        NavigationState {
            root,
            app_in_foreground: true,
        }
    }

    pub fn visible_container(&self) -> &StackState<V> {
        self.root.visible_stack()
    }

    pub fn visible_view(&self) -> &V {
        self.root.visible_view()
    }

    pub fn visible_overlay(&self) -> Option<&V> {
        self.root.visible_overlay()
    }

    pub fn find_by_tag(&self, tag: &ContainerTag) -> Option<&Container<V>> {
        self.root.find_by_tag(tag)
    }
}
