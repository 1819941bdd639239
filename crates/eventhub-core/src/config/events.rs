//! Event listing behavior configuration.

use serde::{Deserialize, Serialize};

/// Configurable event listing behavior.
///
/// The API historically served two variants for an empty event store:
/// an empty `200` list, or a `404` with a message. Both are documented
/// configurations; this flag selects between them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Respond 404 instead of an empty list when no events exist.
    #[serde(default)]
    pub not_found_when_empty: bool,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            not_found_when_empty: false,
        }
    }
}
