//! Folder queries and moves over the in-memory forest.

use tracing::{debug, info};

use folderhub_core::config::tree::TreeConfig;
use folderhub_core::error::{BuildError, MoveError};
use folderhub_core::types::OrgId;
use folderhub_entity::folder::Folder;

use super::driver::FolderDriver;
use super::forest::{Forest, NodeId};

/// Owns the folder forest and serves queries and moves against it.
///
/// Moves take `&mut self`; callers sharing a service across threads must
/// wrap it in a lock.
#[derive(Debug, Clone, Default)]
pub struct FolderService {
    /// Folder forests keyed by organization.
    forest: Forest,
}

impl FolderService {
    /// Creates a service from a flat folder list. Duplicate names within an
    /// organization are accepted and resolve to the first occurrence.
    pub fn new(folders: Vec<Folder>) -> Self {
        Self {
            forest: Forest::build(folders),
        }
    }

    /// Creates a service honoring the forest construction settings.
    pub fn from_config(folders: Vec<Folder>, config: &TreeConfig) -> Result<Self, BuildError> {
        let forest = if config.reject_duplicate_names {
            Forest::build_strict(folders)?
        } else {
            Forest::build(folders)
        };

        Ok(Self { forest })
    }

    /// Read access to the underlying forest.
    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    /// Known organizations in first-seen order.
    pub fn org_ids(&self) -> Vec<OrgId> {
        self.forest.org_ids().collect()
    }

    /// Finds a folder by name in any organization (first match wins).
    pub fn find_folder(&self, name: &str) -> Option<Folder> {
        let (org_id, id) = self.forest.locate(name)?;
        self.forest.org(org_id).map(|org| org.folder(id).clone())
    }

    /// Every folder of every organization in its current state.
    pub fn all_folders(&self) -> Vec<Folder> {
        self.forest.flatten()
    }

    /// Checks a move request without touching the forest.
    fn validate_move(&self, name: &str, destination: &str) -> Result<MoveTarget, MoveError> {
        if name == destination {
            return Err(MoveError::SelfMove {
                name: name.to_string(),
            });
        }

        let (source_org, source) =
            self.forest
                .locate(name)
                .ok_or_else(|| MoveError::SourceNotFound {
                    name: name.to_string(),
                })?;

        let (destination_org, target) =
            self.forest
                .locate(destination)
                .ok_or_else(|| MoveError::DestinationNotFound {
                    name: destination.to_string(),
                })?;

        if source_org != destination_org {
            return Err(MoveError::CrossTenant {
                source_org,
                destination_org,
            });
        }

        let org = self
            .forest
            .org(source_org)
            .ok_or_else(|| MoveError::SourceNotFound {
                name: name.to_string(),
            })?;

        if org.is_within_subtree(source, target) {
            return Err(MoveError::Cyclic {
                name: name.to_string(),
                destination: destination.to_string(),
            });
        }

        Ok(MoveTarget {
            org_id: source_org,
            source,
            target,
        })
    }

    /// Relinks a validated move inside its organization.
    fn apply_move(
        &mut self,
        plan: MoveTarget,
        name: &str,
        destination: &str,
    ) -> Result<(), MoveError> {
        let Some(org) = self.forest.org_mut(plan.org_id) else {
            return Err(MoveError::SourceNotFound {
                name: name.to_string(),
            });
        };

        org.reparent(plan.source, plan.target);

        info!(
            org_id = %plan.org_id,
            folder = %name,
            destination = %destination,
            new_path = %org.folder(plan.source).path,
            moved = org.descendants(plan.source).len() + 1,
            "Folder moved"
        );

        Ok(())
    }
}

/// A validated move: both ends resolved inside one organization.
#[derive(Debug, Clone, Copy)]
struct MoveTarget {
    org_id: OrgId,
    source: NodeId,
    target: NodeId,
}

impl FolderDriver for FolderService {
    fn folders_by_org_id(&self, org_id: OrgId) -> Vec<Folder> {
        self.forest
            .org(org_id)
            .map(|org| org.folders())
            .unwrap_or_default()
    }

    fn all_child_folders(&self, org_id: OrgId, name: &str) -> Vec<Folder> {
        let Some(org) = self.forest.org(org_id) else {
            return Vec::new();
        };
        let Some(id) = org.find(name) else {
            return Vec::new();
        };

        org.descendants(id)
            .into_iter()
            .map(|child| org.folder(child).clone())
            .collect()
    }

    fn move_folder(&mut self, name: &str, destination: &str) -> Result<Vec<Folder>, MoveError> {
        let plan = self.validate_move(name, destination).inspect_err(|e| {
            debug!(
                folder = %name,
                destination = %destination,
                error = %e,
                "Folder move rejected"
            );
        })?;

        self.apply_move(plan, name, destination)?;

        Ok(self.forest.flatten())
    }
}
