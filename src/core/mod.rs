//! # Navigation Core
//!
//! The pure heart of the engine. It knows nothing about terminals,
//! threads, or rendering.
//!
//! ```text
//!                 ┌──────────────────────────────┐
//!                 │            CORE              │
//!                 │        (this module)         │
//!                 │                              │
//!                 │  • Container tree (state)    │
//!                 │  • NavEvent (intents)        │
//!                 │  • reduce() (the algebra)    │
//!                 │  • NavCommand (outcomes)     │
//!                 │  • resolve_back()            │
//!                 │                              │
//!                 │     No I/O. No UI. Pure.     │
//!                 └──────────────┬───────────────┘
//!                                │
//!               ┌────────────────┼────────────────┐
//!               ▼                ▼                ▼
//!        ┌────────────┐   ┌────────────┐   ┌────────────┐
//!        │   Store    │   │  TUI demo  │   │  your app  │
//!        │ (harness)  │   │ (ratatui)  │   │            │
//!        └────────────┘   └────────────┘   └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`container`]: the recursive tree of stacks, tab groups, and modals
//! - [`event`]: every navigation intent
//! - [`command`]: every navigation outcome, tagged with visible-change
//! - [`reducer`]: `(state, event) -> (state, command)`
//! - [`back`]: back-gesture resolution (pop / dismiss / terminate)
//! - [`policy`]: explicit knobs for historically-implicit edge cases
//! - [`config`]: demo binary configuration

pub mod back;
pub mod command;
pub mod config;
pub mod container;
pub mod event;
pub mod policy;
pub mod reducer;
