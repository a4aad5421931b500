//! # folderhub-entity
//!
//! Domain entity models for FolderHub. Every struct in this crate is a plain
//! value object deriving `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod folder;
