//! The folder driver interface.

use folderhub_core::error::MoveError;
use folderhub_core::types::OrgId;
use folderhub_entity::folder::Folder;

/// Queries and relocations over an organization-partitioned folder
/// hierarchy.
///
/// Lookups never fail: an unknown organization or folder name yields an
/// empty result.
pub trait FolderDriver {
    /// All folders of an organization, in stored order.
    fn folders_by_org_id(&self, org_id: OrgId) -> Vec<Folder>;

    /// Every descendant of the named folder, depth-first and pre-order,
    /// excluding the folder itself.
    fn all_child_folders(&self, org_id: OrgId, name: &str) -> Vec<Folder>;

    /// Moves `name` and its subtree beneath `destination`, returning every
    /// folder of every organization after the move.
    fn move_folder(&mut self, name: &str, destination: &str) -> Result<Vec<Folder>, MoveError>;
}
