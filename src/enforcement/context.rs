//! Context provided to budget checks.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Progress of a driving loop, as seen by budget checks.
#[derive(Clone, Debug)]
pub struct DriveContext {
    pub generator: String,
    /// Name of the tag the next step would run from.
    pub position: &'static str,
    pub steps: u64,
    pub emitted: u64,
    pub started_at: DateTime<Utc>,
}

impl DriveContext {
    /// Calculate elapsed time since driving started
    pub fn elapsed(&self) -> Duration {
        let now = Utc::now();
        now.signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}
