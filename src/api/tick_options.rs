use serde::{Deserialize, Serialize};

/// Caller configuration for tick auto-skipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TickOptions {
    /// Upper bound on displayed ticks. `None` and `Some(0)` both mean the
    /// axis geometry alone decides.
    pub max_ticks_limit: Option<usize>,
    /// Treat ticks flagged as major as anchors that survive decimation.
    pub major_enabled: bool,
    /// When disabled every tick is displayed, overlapping or not.
    pub auto_skip: bool,
}

impl Default for TickOptions {
    fn default() -> Self {
        Self {
            max_ticks_limit: None,
            major_enabled: false,
            auto_skip: true,
        }
    }
}

impl TickOptions {
    #[must_use]
    pub fn with_max_ticks_limit(mut self, limit: usize) -> Self {
        self.max_ticks_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_major_enabled(mut self, enabled: bool) -> Self {
        self.major_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_auto_skip(mut self, enabled: bool) -> Self {
        self.auto_skip = enabled;
        self
    }

    /// Effective tick limit for an axis that fits `capacity` ticks.
    #[must_use]
    pub fn resolve_limit(self, capacity: usize) -> usize {
        self.max_ticks_limit
            .filter(|limit| *limit > 0)
            .map_or(capacity, |limit| limit.min(capacity))
    }
}
