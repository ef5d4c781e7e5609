//! # TUI Demo Adapter
//!
//! A small ratatui presentation layer over the navigation engine. It
//! exists to show the full loop in motion:
//!
//! ```text
//! key press ─► NavEvent ─► Store::fire ─► NavCommand ─► TransitionQueue
//!                                                            │
//!                     draw(tree, screen, command log)  ◄─────┘
//! ```
//!
//! This is the only module that knows about ratatui and crossterm. It
//! renders the container tree as text, the visible leaf as a "screen",
//! and a rolling log of presented commands. Commands that arrive while
//! a transition is animating are queued by [`transition::TransitionQueue`],
//! never dropped.

mod event;
pub mod transition;
mod ui;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use log::info;
use ratatui::DefaultTerminal;

use crate::core::command::NavCommand;
use crate::core::config::ResolvedConfig;
use crate::core::container::{Container, NavigationState, StackState, TabsState};
use crate::core::event::{AlertSpec, NavEvent};
use crate::core::policy::ReducerPolicy;
use crate::store::Store;
use crate::tui::event::{DemoEvent, poll_event};
use crate::tui::transition::TransitionQueue;

const ROOT_TAG: &str = "root";
const MODAL_TAG: &str = "compose";

/// The three-tab starting tree the demo boots into.
fn demo_tree() -> Container<String> {
    let tab = |tag: &str, view: &str| {
        Container::Stack(StackState::new(tag, view.to_string()))
    };
    Container::Tabs(
        TabsState::new(
            ROOT_TAG,
            vec![
                tab("home", "Home"),
                tab("library", "Library"),
                tab("settings", "Settings"),
            ],
        )
        .expect("demo tree has children"),
    )
}

/// Presentation-side state for the demo session.
pub struct DemoApp {
    pub store: Store<String>,
    /// Commands captured by the store listener, pending hand-off to the
    /// transition queue.
    inbox: Rc<RefCell<Vec<NavCommand>>>,
    pub transitions: TransitionQueue,
    /// Rolling log of presented commands, newest last.
    pub presented: VecDeque<String>,
    /// Alert currently on screen, if any. Any key dismisses it.
    pub alert: Option<AlertSpec>,
    detail_seq: usize,
    pub should_quit: bool,
}

const PRESENTED_LOG_CAP: usize = 50;

impl DemoApp {
    pub fn new(config: &ResolvedConfig) -> Self {
        let policy = ReducerPolicy {
            unwind_miss: config.unwind_policy,
        };
        let mut store = Store::with_policy(NavigationState::new(demo_tree()), policy);

        let inbox = Rc::new(RefCell::new(Vec::new()));
        let listener_inbox = inbox.clone();
        store.on_command(move |command, _sink| {
            listener_inbox.borrow_mut().push(command.clone());
        });

        DemoApp {
            store,
            inbox,
            transitions: TransitionQueue::new(Duration::from_millis(config.transition_ms)),
            presented: VecDeque::new(),
            alert: None,
            detail_seq: 0,
            should_quit: false,
        }
    }

    /// Translates a demo intent into a navigation event and fires it.
    pub fn handle(&mut self, event: DemoEvent) {
        let nav_event = match event {
            DemoEvent::Quit => {
                self.should_quit = true;
                return;
            }
            // An on-screen alert swallows the next key, quit excepted.
            _ if self.alert.is_some() => {
                self.alert = None;
                return;
            }
            DemoEvent::Back => match self.store.resolve_back().to_event() {
                Some(event) => event,
                None => {
                    info!("Back resolved to Terminate, ending session");
                    self.should_quit = true;
                    return;
                }
            },
            DemoEvent::SelectTab(index) => NavEvent::ChangeTabIndex {
                tag: Some(ROOT_TAG.into()),
                index,
            },
            DemoEvent::Push => {
                self.detail_seq += 1;
                NavEvent::PushView {
                    tag: None,
                    view: format!("Detail {}", self.detail_seq),
                }
            }
            DemoEvent::Pop => NavEvent::PopView { tag: None },
            DemoEvent::ReplaceTop => {
                self.detail_seq += 1;
                NavEvent::ReplaceTopView {
                    tag: None,
                    view: format!("Swapped {}", self.detail_seq),
                }
            }
            DemoEvent::Unwind => NavEvent::UnwindToView {
                tag: self.store.visible_container().tag.clone(),
                view: None,
            },
            DemoEvent::PresentModal => NavEvent::PresentModal {
                over: Some(ROOT_TAG.into()),
                modal: Container::Stack(
                    StackState::new(MODAL_TAG, "Compose".to_string()).cancellable(true),
                ),
            },
            DemoEvent::DismissModal => NavEvent::DismissModal { tag: None },
            DemoEvent::ToggleOverlay => {
                if self.store.state().visible_overlay().is_some() {
                    NavEvent::DismissOverlay { tag: None }
                } else {
                    NavEvent::ShowOverlay {
                        tag: None,
                        overlay: "Draft saved".to_string(),
                    }
                }
            }
            DemoEvent::ReplaceStack => NavEvent::ReplaceStack {
                tag: self.store.visible_container().tag.clone(),
                views: vec!["Fresh start".to_string()],
            },
            DemoEvent::ReplaceRoot => NavEvent::ReplaceRoot { root: demo_tree() },
            DemoEvent::ToggleForeground => NavEvent::AppForegroundChanged {
                foreground: !self.store.state().app_in_foreground,
            },
            DemoEvent::Alert => NavEvent::ShowAlert {
                alert: AlertSpec {
                    title: "Leave draft?".to_string(),
                    message: "The compose modal still has unsent text.".to_string(),
                    buttons: vec!["Leave".to_string(), "Stay".to_string()],
                },
            },
        };
        self.store.fire(nav_event);
    }

    /// Moves captured commands through the transition queue and records
    /// whatever became presentable.
    pub fn pump(&mut self, now: Instant) {
        let fresh: Vec<NavCommand> = self.inbox.borrow_mut().drain(..).collect();
        let mut presentable = Vec::new();
        for command in fresh {
            presentable.extend(self.transitions.offer(command, now));
        }
        presentable.extend(self.transitions.tick(now));

        for command in presentable {
            if let NavCommand::AlertRequested { alert } = &command {
                self.alert = Some(alert.clone());
            }
            let marker = if command.visible_changed() { "●" } else { "○" };
            self.presented
                .push_back(format!("{marker} {}", command.kind()));
            if self.presented.len() > PRESENTED_LOG_CAP {
                self.presented.pop_front();
            }
        }
    }
}

/// Runs the demo until the user quits or back-navigation terminates.
pub fn run(config: ResolvedConfig) -> io::Result<()> {
    info!("Starting demo session: {:?}", config);
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &config);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, config: &ResolvedConfig) -> io::Result<()> {
    let mut app = DemoApp::new(config);
    let tick = Duration::from_millis(config.tick_ms);
    while !app.should_quit {
        if let Some(event) = poll_event(tick) {
            app.handle(event);
        }
        app.pump(Instant::now());
        terminal.draw(|frame| ui::draw(frame, &app))?;
    }
    info!("Demo session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::resolve;
    use crate::core::config::SwitchbackConfig;

    fn demo_app() -> DemoApp {
        DemoApp::new(&resolve(&SwitchbackConfig::default(), None))
    }

    #[test]
    fn test_demo_boots_on_home_tab() {
        let app = demo_app();
        assert_eq!(app.store.visible_view(), "Home");
        assert_eq!(app.store.visible_container().tag.as_str(), "home");
    }

    #[test]
    fn test_push_then_back_round_trip() {
        let mut app = demo_app();
        app.handle(DemoEvent::Push);
        assert_eq!(app.store.visible_view(), "Detail 1");
        app.handle(DemoEvent::Back);
        assert_eq!(app.store.visible_view(), "Home");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_back_on_bare_root_terminates_session() {
        let mut app = demo_app();
        app.handle(DemoEvent::Back);
        assert!(app.should_quit);
    }

    #[test]
    fn test_modal_back_dismisses_before_terminating() {
        let mut app = demo_app();
        app.handle(DemoEvent::PresentModal);
        assert_eq!(app.store.visible_view(), "Compose");
        app.handle(DemoEvent::Back);
        assert_eq!(app.store.visible_view(), "Home");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_overlay_toggle_round_trip() {
        let mut app = demo_app();
        app.handle(DemoEvent::ToggleOverlay);
        assert_eq!(
            app.store.state().visible_overlay(),
            Some(&"Draft saved".to_string())
        );
        // The screen underneath is untouched.
        assert_eq!(app.store.visible_view(), "Home");
        app.handle(DemoEvent::ToggleOverlay);
        assert!(app.store.state().visible_overlay().is_none());
    }

    #[test]
    fn test_quit_wins_over_alert_swallow() {
        let mut app = demo_app();
        app.handle(DemoEvent::Alert);
        app.pump(Instant::now());
        assert!(app.alert.is_some());
        app.handle(DemoEvent::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_alert_swallows_next_key() {
        let mut app = demo_app();
        app.handle(DemoEvent::Alert);
        app.pump(Instant::now());
        assert!(app.alert.is_some());
        app.handle(DemoEvent::Push);
        assert!(app.alert.is_none());
        // The push went to dismissing the alert, not the stack.
        assert_eq!(app.store.visible_view(), "Home");
    }

    #[test]
    fn test_pump_records_presented_commands() {
        let mut app = demo_app();
        app.handle(DemoEvent::Push);
        app.pump(Instant::now());
        assert_eq!(app.presented.back().unwrap(), "● view-pushed");
    }
}
