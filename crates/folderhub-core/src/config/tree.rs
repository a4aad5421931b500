//! Folder forest construction settings.

use serde::{Deserialize, Serialize};

/// Controls how a flat folder list is turned into a forest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Reject an organization that contains two folders with the same name.
    ///
    /// When unset, duplicates are accepted and every name lookup resolves to
    /// the first folder in input order.
    #[serde(default)]
    pub reject_duplicate_names: bool,
}
