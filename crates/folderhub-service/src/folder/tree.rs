//! Nested tree views and breadcrumb trails.

use folderhub_core::types::OrgId;
use folderhub_entity::folder::{Folder, FolderNode, FolderTree};

use super::forest::{NodeId, OrgForest};
use super::service::FolderService;

impl FolderService {
    /// Builds the nested folder tree of an organization, one entry per
    /// parent-less folder.
    pub fn folder_tree(&self, org_id: OrgId) -> FolderTree {
        let Some(org) = self.forest().org(org_id) else {
            return FolderTree::empty();
        };

        let roots = org
            .roots()
            .filter_map(|root| build_node(org, root))
            .collect();
        FolderTree::from_roots(roots)
    }

    /// Gets the breadcrumb trail from the topmost ancestor down to the named
    /// folder.
    pub fn breadcrumbs(&self, org_id: OrgId, name: &str) -> Vec<Folder> {
        let Some(org) = self.forest().org(org_id) else {
            return Vec::new();
        };
        let Some(id) = org.find(name) else {
            return Vec::new();
        };

        org.ancestry(id)
            .into_iter()
            .map(|ancestor| org.folder(ancestor).clone())
            .collect()
    }
}

/// A node whose children are still being assembled.
struct Pending {
    id: NodeId,
    depth: usize,
    next_child: usize,
    children: Vec<FolderNode>,
}

impl Pending {
    fn new(id: NodeId, depth: usize) -> Self {
        Self {
            id,
            depth,
            next_child: 0,
            children: Vec::new(),
        }
    }

    fn finish(self, org: &OrgForest) -> FolderNode {
        let folder = org.folder(self.id);
        FolderNode {
            name: folder.name.clone(),
            path: folder.path.clone(),
            depth: self.depth,
            child_count: self.children.len(),
            children: self.children,
        }
    }
}

/// Builds the nested node for `root` with an explicit stack.
///
/// Depth counts links from the tree root, which differs from the path depth
/// when an unresolved parent reference left the folder unattached.
fn build_node(org: &OrgForest, root: NodeId) -> Option<FolderNode> {
    let mut stack = vec![Pending::new(root, 0)];

    while let Some(top) = stack.last_mut() {
        if let Some(&child) = org.children(top.id).get(top.next_child) {
            top.next_child += 1;
            let depth = top.depth + 1;
            stack.push(Pending::new(child, depth));
            continue;
        }

        let node = stack.pop()?.finish(org);
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => return Some(node),
        }
    }

    None
}
