//! # Reducer Policies
//!
//! Edge cases with more than one defensible answer are explicit knobs
//! here rather than hard-wired choices buried in the reducer.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What `UnwindToView` does when the requested view is not in the stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum UnwindMissPolicy {
    /// Truncate to the first view, same as unwinding with no target.
    #[default]
    TruncateToFirst,
    /// Absorb the event: state unchanged, `HiddenUpdate`.
    Ignore,
}

/// All reducer policy knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReducerPolicy {
    pub unwind_miss: UnwindMissPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_unwind_policy_truncates() {
        assert_eq!(
            ReducerPolicy::default().unwind_miss,
            UnwindMissPolicy::TruncateToFirst
        );
    }

    #[test]
    fn test_policy_names_parse_from_config() {
        #[derive(Deserialize)]
        struct Probe {
            unwind: UnwindMissPolicy,
        }
        let probe: Probe = toml::from_str("unwind = \"ignore\"").unwrap();
        assert_eq!(probe.unwind, UnwindMissPolicy::Ignore);
        let probe: Probe = toml::from_str("unwind = \"truncate-to-first\"").unwrap();
        assert_eq!(probe.unwind, UnwindMissPolicy::TruncateToFirst);
    }
}
