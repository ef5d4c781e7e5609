//! # Transition Machine
//!
//! The presenter may only run one visual transition at a time, but
//! commands keep coming. A bare busy flag would have to drop commands
//! that race an in-flight transition, losing navigation. This machine
//! queues them instead:
//!
//! ```text
//!            offer(cmd)                    deadline reached
//!   Idle ───────────────► Animating ──────────────────────► Idle
//!    ▲   (visible change)     │                               │
//!    │                        │ offer(cmd): push to pending   │
//!    └────────────────────────┴── drain pending, in order ◄───┘
//! ```
//!
//! Commands without a visible change present immediately (they need no
//! animation); commands with one start an animation window and anything
//! arriving inside it waits its turn. Nothing is ever dropped.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::core::command::NavCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransitionState {
    Idle,
    Animating { until: Instant },
}

/// Serializes visible transitions; queues commands arriving mid-flight.
pub struct TransitionQueue {
    state: TransitionState,
    pending: VecDeque<NavCommand>,
    duration: Duration,
}

impl TransitionQueue {
    pub fn new(duration: Duration) -> Self {
        TransitionQueue {
            state: TransitionState::Idle,
            pending: VecDeque::new(),
            duration,
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, TransitionState::Animating { .. })
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Hands a fresh command to the machine. Returns every command that
    /// becomes presentable right now (possibly older queued ones first).
    pub fn offer(&mut self, command: NavCommand, now: Instant) -> Vec<NavCommand> {
        self.pending.push_back(command);
        self.drain(now)
    }

    /// Advances time. Returns commands whose turn has come.
    pub fn tick(&mut self, now: Instant) -> Vec<NavCommand> {
        self.drain(now)
    }

    fn drain(&mut self, now: Instant) -> Vec<NavCommand> {
        if let TransitionState::Animating { until } = self.state {
            if now < until {
                return Vec::new();
            }
            self.state = TransitionState::Idle;
        }

        let mut presented = Vec::new();
        while let Some(command) = self.pending.pop_front() {
            let animates = command.visible_changed();
            presented.push(command);
            if animates {
                self.state = TransitionState::Animating {
                    until: now + self.duration,
                };
                break;
            }
        }
        presented
    }
}
