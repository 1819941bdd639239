//! Actions a verified identity may request on a resource.

use serde::{Deserialize, Serialize};

/// An action requested on a resource.
///
/// Own-scoped actions carry an ownership requirement that the evaluator
/// checks against the target resource's owner reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceAction {
    /// Read a resource the identity owns.
    ReadOwn,
    /// Read any resource.
    ReadAny,
    /// Modify a resource the identity owns.
    WriteOwn,
    /// Modify any resource.
    WriteAny,
    /// Delete a resource.
    Delete,
}

impl ResourceAction {
    /// Whether this action is satisfied by owning the target resource.
    pub fn is_own_scoped(&self) -> bool {
        matches!(self, Self::ReadOwn | Self::WriteOwn)
    }
}
