use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Garbage count at which compaction kicks in when no threshold is given.
pub const DEFAULT_GARBAGE_THRESHOLD: usize = 64;

/// Central compaction configuration for an [`InjectiveMap`](crate::InjectiveMap).
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactionConfig {
    /// Compaction only runs once at least this many slots are garbage.
    pub garbage_threshold: usize,

    /// Release spare backing-store capacity after compacting.
    #[serde(default)]
    pub shrink_storage: bool,

    #[serde(default)]
    pub policy: CompactionPolicy,
}

/// When compaction runs.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CompactionPolicy {
    /// Only through an explicit call to `compact`.
    #[default]
    Manual,
    /// After every removal that leaves the garbage count at or above the threshold.
    OnThreshold,
}

impl FromStr for CompactionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manual" => Ok(CompactionPolicy::Manual),
            "on_threshold" | "auto" => Ok(CompactionPolicy::OnThreshold),
            _ => Err(format!(
                "Unknown compaction policy: {}. Expected `manual` or `on_threshold`",
                s
            )),
        }
    }
}

impl CompactionConfig {
    pub fn new(garbage_threshold: usize, shrink_storage: bool, policy: CompactionPolicy) -> Self {
        Self {
            garbage_threshold,
            shrink_storage,
            policy,
        }
    }

    /// Automatic compaction once `garbage_threshold` slots are garbage.
    pub fn automatic(garbage_threshold: usize) -> Self {
        Self {
            garbage_threshold,
            shrink_storage: false,
            policy: CompactionPolicy::OnThreshold,
        }
    }

    pub fn is_automatic(&self) -> bool {
        self.policy == CompactionPolicy::OnThreshold
    }
}

impl Default for CompactionConfig {
    fn default() -> Self {
        Self {
            garbage_threshold: DEFAULT_GARBAGE_THRESHOLD,
            shrink_storage: false,
            policy: CompactionPolicy::Manual,
        }
    }
}
