//! Search policy: budgets and tracing.

use crate::error::SearchError;

/// Per-call limits and diagnostics.
///
/// The engine has no cancellation primitive. Searches that might not
/// terminate on their own (depth-first search over an infinite state graph,
/// say) should be bounded here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    /// Successors deeper than this are never pushed. `Some(0)` allows only
    /// the goal test on the initial state.
    pub max_depth: Option<u32>,
    /// Hard cap on node expansions. Seeding the frontier from the initial
    /// state counts as the first expansion; goal tests on popped entries do
    /// not count.
    pub max_expansions: Option<u64>,
    /// Record a [`SearchTrace`](crate::trace::SearchTrace) of every expansion.
    pub record_trace: bool,
}

impl SearchPolicy {
    /// No limits, no trace.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    #[must_use]
    pub fn with_trace(mut self) -> Self {
        self.record_trace = true;
        self
    }

    /// Pre-flight validation.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for `max_expansions == Some(0)`:
    /// a search that may not even seed its frontier cannot say anything
    /// about any state except the initial one, and `max_depth: Some(0)`
    /// already expresses that.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1; use max_depth = 0 to test only the initial state".into(),
            });
        }
        Ok(())
    }
}
