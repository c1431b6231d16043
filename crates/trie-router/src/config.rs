//! Router configuration.

use serde::{Deserialize, Serialize};

/// What to do when a pattern names an already-named parameter slot
/// differently, e.g. `/user/:id` followed by `/user/:uid/posts`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamConflict {
    /// The later name replaces the earlier one for every route through
    /// that slot.
    #[default]
    Overwrite,
    /// The later registration is refused and reported by
    /// [`RouterBuilder::build`](crate::RouterBuilder::build).
    Reject,
}

/// Settings applied while routes are registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Parameter name conflict policy.
    pub param_conflict: ParamConflict,
}

impl RouterConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the parameter name conflict policy.
    #[must_use]
    pub const fn param_conflict(mut self, policy: ParamConflict) -> Self {
        self.param_conflict = policy;
        self
    }
}
