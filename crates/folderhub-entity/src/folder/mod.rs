//! Folder domain entities.

pub mod model;
pub mod tree;

pub use model::{Folder, PATH_SEPARATOR};
pub use tree::{FolderNode, FolderTree};
