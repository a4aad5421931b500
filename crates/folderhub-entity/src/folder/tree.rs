//! Folder tree structures for hierarchical display.

use serde::{Deserialize, Serialize};

/// A node in a folder tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder name.
    pub name: String,
    /// Full path.
    pub path: String,
    /// Depth level (0 for root).
    pub depth: usize,
    /// Number of direct child folders.
    pub child_count: usize,
    /// Child folder nodes.
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Number of folders in this subtree, including this one.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(FolderNode::subtree_size).sum::<usize>()
    }
}

/// The folder hierarchy of one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderTree {
    /// The root node(s) of the tree.
    pub roots: Vec<FolderNode>,
    /// Total number of folders in the tree.
    pub total_folders: usize,
}

impl FolderTree {
    /// Create an empty folder tree.
    pub fn empty() -> Self {
        Self {
            roots: Vec::new(),
            total_folders: 0,
        }
    }

    /// Build a tree from its roots, counting every folder beneath them.
    pub fn from_roots(roots: Vec<FolderNode>) -> Self {
        let total_folders = roots.iter().map(FolderNode::subtree_size).sum();
        Self {
            roots,
            total_folders,
        }
    }
}
