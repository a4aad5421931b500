//! FolderHub: a multi-tenant folder hierarchy held in memory.
//!
//! Folders are named, owned by an organization, and positioned by a dotted
//! path (`alpha.beta.gamma`). [`FolderService`] builds one forest per
//! organization from a flat folder list, lists folders and descendants, and
//! moves subtrees while keeping every path consistent.
//!
//! ```
//! use folderhub::{Folder, FolderDriver, FolderService, OrgId};
//!
//! let org = OrgId::new();
//! let mut service = FolderService::new(vec![
//!     Folder::new("alpha", org, "alpha"),
//!     Folder::new("beta", org, "beta"),
//! ]);
//!
//! let folders = service.move_folder("alpha", "beta").unwrap();
//! assert_eq!(folders[0].path, "beta.alpha");
//! ```

pub use folderhub_core::config::AppConfig;
pub use folderhub_core::error::{AppError, BuildError, ErrorKind, MoveError};
pub use folderhub_core::logging::init_logging;
pub use folderhub_core::result::AppResult;
pub use folderhub_core::types::OrgId;
pub use folderhub_entity::folder::{Folder, FolderNode, FolderTree};
pub use folderhub_service::folder::{Forest, NodeId, OrgForest};
pub use folderhub_service::{FolderDriver, FolderService};

/// Builds a [`FolderService`] from a flat folder list using the tree
/// settings of an application configuration.
pub fn service_from_config(folders: Vec<Folder>, config: &AppConfig) -> AppResult<FolderService> {
    Ok(FolderService::from_config(folders, &config.tree)?)
}
