//! # Store Harness
//!
//! Owns the [`NavigationState`], runs the reducer, and fans results out:
//!
//! ```text
//! fire(event) ─► reduce ─► state' ─► command listeners ─► subscribers
//!                                        │
//!                                        └─ sink.fire(..) queued, runs
//!                                           after this notification
//! ```
//!
//! Single-threaded by construction: `fire` takes `&mut self`, so the
//! borrow checker already rules out re-entrant mutation. Listeners that
//! want to navigate in response to a command get an [`EventSink`]:
//! events pushed there are processed, in order, after the current
//! notification round completes. Nothing is dropped, nothing is
//! reordered.
//!
//! Subscription is explicit and scoped to this store instance. There is
//! no process-global router: whoever constructs the store decides who
//! listens, and unsubscribes them when their scope ends.
//!
//! The store is also where no-op diagnostics live (the core stays
//! silent): absorbed events are logged at debug level so a developer can
//! see navigation requests that went nowhere.

use std::collections::VecDeque;

use log::debug;

use crate::core::back::{BackAction, resolve_back};
use crate::core::command::NavCommand;
use crate::core::container::{Container, ContainerTag, NavigationState, StackState};
use crate::core::event::NavEvent;
use crate::core::policy::ReducerPolicy;
use crate::core::reducer::reduce_with;

/// Handle returned by `subscribe`/`on_command`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Queue handed to command listeners for follow-up navigation.
pub struct EventSink<V> {
    queued: Vec<NavEvent<V>>,
}

impl<V> EventSink<V> {
    fn new() -> Self {
        EventSink { queued: Vec::new() }
    }

    /// Queues an event to be fired after the current notification round.
    pub fn fire(&mut self, event: NavEvent<V>) {
        self.queued.push(event);
    }
}

type CommandListener<V> = Box<dyn FnMut(&NavCommand, &mut EventSink<V>)>;
type StateSubscriber<V> = Box<dyn FnMut(&NavigationState<V>)>;

/// Single-threaded reducer harness for one navigation session.
pub struct Store<V> {
    state: NavigationState<V>,
    policy: ReducerPolicy,
    command_listeners: Vec<(SubscriptionId, CommandListener<V>)>,
    subscribers: Vec<(SubscriptionId, StateSubscriber<V>)>,
    next_id: u64,
}

impl<V: Clone + PartialEq> Store<V> {
    pub fn new(initial: NavigationState<V>) -> Self {
        Store::with_policy(initial, ReducerPolicy::default())
    }

    pub fn with_policy(initial: NavigationState<V>, policy: ReducerPolicy) -> Self {
        Store {
            state: initial,
            policy,
            command_listeners: Vec::new(),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> &NavigationState<V> {
        &self.state
    }

    pub fn visible_container(&self) -> &StackState<V> {
        self.state.visible_container()
    }

    pub fn visible_view(&self) -> &V {
        self.state.visible_view()
    }

    pub fn find_by_tag(&self, tag: &ContainerTag) -> Option<&Container<V>> {
        self.state.find_by_tag(tag)
    }

    /// What a back gesture should do right now.
    pub fn resolve_back(&self) -> BackAction {
        resolve_back(&self.state)
    }

    fn fresh_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Registers a command listener, notified before state subscribers.
    pub fn on_command(
        &mut self,
        listener: impl FnMut(&NavCommand, &mut EventSink<V>) + 'static,
    ) -> SubscriptionId {
        let id = self.fresh_id();
        self.command_listeners.push((id, Box::new(listener)));
        id
    }

    /// Registers a state subscriber, notified after every event.
    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&NavigationState<V>) + 'static,
    ) -> SubscriptionId {
        let id = self.fresh_id();
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Drops the listener or subscriber behind `id`. Returns whether
    /// anything was removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.command_listeners.len() + self.subscribers.len();
        self.command_listeners.retain(|(lid, _)| *lid != id);
        self.subscribers.retain(|(sid, _)| *sid != id);
        before != self.command_listeners.len() + self.subscribers.len()
    }

    /// Applies `event` synchronously, notifies command listeners then
    /// state subscribers, then drains any events listeners queued,
    /// each one getting the same full treatment, in order. Returns the
    /// command produced by `event` itself.
    pub fn fire(&mut self, event: NavEvent<V>) -> NavCommand {
        let mut queue = VecDeque::new();
        queue.push_back(event);
        let mut first_command = None;

        while let Some(event) = queue.pop_front() {
            let kind = event.kind();
            let (next, command) = reduce_with(self.policy, &self.state, event);

            if command == NavCommand::HiddenUpdate && next == self.state {
                debug!("event '{kind}' absorbed: no targetable container or invariant no-op");
            } else {
                debug!("event '{kind}' -> command '{}'", command.kind());
            }
            self.state = next;

            let mut sink = EventSink::new();
            for (_, listener) in &mut self.command_listeners {
                listener(&command, &mut sink);
            }
            for (_, subscriber) in &mut self.subscribers {
                subscriber(&self.state);
            }
            queue.extend(sink.queued);

            if first_command.is_none() {
                first_command = Some(command);
            }
        }

        first_command.unwrap_or(NavCommand::HiddenUpdate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::container::Container;
    use crate::test_support::{nav, stack, tabs_root};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_fire_returns_command_and_updates_state() {
        let mut store = Store::new(nav(Container::Stack(stack("main", &["A"]))));
        let cmd = store.fire(NavEvent::PushView {
            tag: None,
            view: "B",
        });
        assert_eq!(
            cmd,
            NavCommand::ViewPushed {
                tag: "main".into(),
                visible_changed: true
            }
        );
        assert_eq!(store.visible_view(), &"B");
    }

    #[test]
    fn test_listeners_observe_commands_in_fire_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::new(nav(Container::Stack(stack("main", &["A"]))));
        let sink_log = seen.clone();
        store.on_command(move |cmd, _| sink_log.borrow_mut().push(cmd.kind()));

        store.fire(NavEvent::PushView {
            tag: None,
            view: "B",
        });
        store.fire(NavEvent::PopView { tag: None });
        store.fire(NavEvent::PopView { tag: None });

        assert_eq!(
            *seen.borrow(),
            vec!["view-pushed", "view-popped", "hidden-update"]
        );
    }

    #[test]
    fn test_state_subscribers_run_after_command_listeners() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::new(nav(Container::Stack(stack("main", &["A"]))));

        let subscriber_order = order.clone();
        store.subscribe(move |_| subscriber_order.borrow_mut().push("state"));
        let listener_order = order.clone();
        store.on_command(move |_, _| listener_order.borrow_mut().push("command"));

        store.fire(NavEvent::PushView {
            tag: None,
            view: "B",
        });
        assert_eq!(*order.borrow(), vec!["command", "state"]);
    }

    #[test]
    fn test_listener_queued_events_run_after_notification() {
        // A listener that reacts to the first push by navigating again.
        // Its event must be processed after the full notification round
        // for the original event, and the outer fire() must still
        // return the original command.
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::new(nav(Container::Stack(stack("main", &["A"]))));

        let log = seen.clone();
        store.on_command(move |cmd, sink| {
            log.borrow_mut().push(cmd.kind());
            if let NavCommand::ViewPushed { .. } = cmd
                && log.borrow().iter().filter(|k| **k == "view-pushed").count() == 1
            {
                sink.fire(NavEvent::PushView {
                    tag: None,
                    view: "C",
                });
            }
        });

        let cmd = store.fire(NavEvent::PushView {
            tag: None,
            view: "B",
        });
        assert_eq!(
            cmd,
            NavCommand::ViewPushed {
                tag: "main".into(),
                visible_changed: true
            }
        );
        assert_eq!(*seen.borrow(), vec!["view-pushed", "view-pushed"]);
        assert_eq!(store.visible_container().views(), &["A", "B", "C"]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0));
        let mut store = Store::new(nav(Container::Stack(stack("main", &["A"]))));

        let counter = count.clone();
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.fire(NavEvent::PushView {
            tag: None,
            view: "B",
        });
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.fire(NavEvent::PopView { tag: None });

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_store_back_resolution_round_trip() {
        let mut root = Container::Stack(stack("main", &["X"]));
        root.attach_modal(Container::Stack(stack("m", &["A"]).cancellable(true)));
        let mut store = Store::new(nav(root));

        let action = store.resolve_back();
        assert_eq!(action, BackAction::DismissModal { host: "main".into() });
        let event = action.to_event().unwrap();
        store.fire(event);
        assert_eq!(store.visible_view(), &"X");
        assert_eq!(store.resolve_back(), BackAction::Terminate);
    }

    #[test]
    fn test_queries_reach_nested_containers() {
        let mut store = Store::new(nav(tabs_root()));
        store.fire(NavEvent::PresentModal {
            over: Some("tabs".into()),
            modal: Container::Stack(stack("m", &["M"])),
        });
        assert!(store.find_by_tag(&"t1".into()).is_some());
        assert_eq!(store.visible_container().tag.as_str(), "m");
    }

    fn fresh_noop_store() -> Store<&'static str> {
        Store::new(nav(Container::Stack(stack("main", &["A"]))))
    }

    #[test]
    fn test_absorbed_event_still_notifies() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = fresh_noop_store();
        let log = seen.clone();
        store.on_command(move |cmd, _| log.borrow_mut().push(cmd.kind()));

        store.fire(NavEvent::PopView {
            tag: Some("ghost".into()),
        });
        assert_eq!(*seen.borrow(), vec!["hidden-update"]);
    }
}
