//! # folderhub-service
//!
//! Folder hierarchy services for FolderHub. A [`FolderService`] owns the
//! organization-partitioned folder forest built from a flat folder list and
//! answers queries and moves against it.

pub mod folder;

pub use folder::{FolderDriver, FolderService};
