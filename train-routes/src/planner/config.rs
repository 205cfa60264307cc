//! Search configuration for the route planner.

use std::time::Duration;

/// Configuration parameters for route search.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Wall-clock limit for a single query (milliseconds).
    /// `None` lets the search run to completion.
    pub deadline_ms: Option<u64>,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(deadline_ms: Option<u64>) -> Self {
        Self { deadline_ms }
    }

    /// Returns the per-query deadline as a Duration, if any.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms.map(Duration::from_millis)
    }
}
