//! Folder entity model.

use serde::{Deserialize, Serialize};

use folderhub_core::types::OrgId;

/// Separator between the segments of a materialized folder path.
pub const PATH_SEPARATOR: char = '.';

/// A folder in an organization's hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Folder {
    /// Folder name. Expected to be unique within its organization.
    pub name: String,
    /// The organization that owns this folder.
    pub org_id: OrgId,
    /// Full materialized path from a root down to this folder
    /// (e.g., `alpha.beta.gamma`). The last segment equals `name`.
    #[serde(alias = "paths")]
    pub path: String,
}

impl Folder {
    /// Create a folder record.
    pub fn new(name: impl Into<String>, org_id: OrgId, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            org_id,
            path: path.into(),
        }
    }

    /// Iterate the path segments from the root down to this folder.
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.path.split(PATH_SEPARATOR)
    }

    /// Name of the parent folder as recorded in the path, if any.
    pub fn parent_name(&self) -> Option<&str> {
        let mut segments = self.path.rsplit(PATH_SEPARATOR);
        segments.next();
        segments.next()
    }

    /// Check if this is a root folder (single-segment path).
    pub fn is_root(&self) -> bool {
        !self.path.contains(PATH_SEPARATOR)
    }

    /// Depth in the folder tree (0 for root).
    pub fn depth(&self) -> usize {
        self.path.matches(PATH_SEPARATOR).count()
    }
}
