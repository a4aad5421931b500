//! Arena-backed folder forest.
//!
//! Each organization owns one [`OrgForest`]: a `Vec` of nodes in input order.
//! Parent and child links are [`NodeId`] indices into that vector, so the
//! tree shape never holds owning pointers and a node is never copied out of
//! its arena when it is relinked.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use tracing::debug;

use folderhub_core::error::BuildError;
use folderhub_core::types::OrgId;
use folderhub_entity::folder::{Folder, PATH_SEPARATOR};

/// Stable handle of a node inside its organization's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    folder: Folder,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// All folders of one organization plus the links between them.
#[derive(Debug, Clone, Default)]
pub struct OrgForest {
    nodes: Vec<Node>,
}

impl OrgForest {
    /// Creates the arena and infers parent links from the path strings.
    fn from_folders(folders: Vec<Folder>) -> Self {
        let nodes = folders
            .into_iter()
            .map(|folder| Node {
                folder,
                parent: None,
                children: Vec::new(),
            })
            .collect();

        let mut forest = Self { nodes };
        forest.link();
        forest
    }

    /// Attaches every node to the first node named by its second-to-last path
    /// segment. Unresolvable references leave the node parent-less.
    fn link(&mut self) {
        let mut first_by_name: HashMap<&str, NodeId> = HashMap::with_capacity(self.nodes.len());
        for (idx, node) in self.nodes.iter().enumerate() {
            first_by_name
                .entry(node.folder.name.as_str())
                .or_insert(NodeId(idx));
        }

        let mut parents: Vec<Option<NodeId>> = self
            .nodes
            .iter()
            .map(|node| {
                let parent_name = node.folder.parent_name()?;
                let parent = first_by_name.get(parent_name).copied();
                if parent.is_none() {
                    debug!(
                        path = %node.folder.path,
                        "Parent folder not found, leaving folder unattached"
                    );
                }
                parent
            })
            .collect();

        self.break_cycles(&mut parents);

        for (idx, parent) in parents.into_iter().enumerate() {
            if let Some(parent) = parent {
                self.nodes[idx].parent = Some(parent);
                self.nodes[parent.0].children.push(NodeId(idx));
            }
        }
    }

    /// Drops one link from every cycle among the proposed parent links: the
    /// link of the cycle member that comes last in input order.
    ///
    /// Every node has at most one proposed parent, so each walk stops at a
    /// root, at a node settled by an earlier walk, or on a cycle it entered
    /// during this walk. Each node is visited once.
    fn break_cycles(&self, parents: &mut [Option<NodeId>]) {
        // 0 = unvisited, otherwise 1 + index of the walk's starting node
        let mut walk = vec![0usize; parents.len()];

        for start in 0..parents.len() {
            if walk[start] != 0 {
                continue;
            }
            let stamp = start + 1;
            let mut cursor = Some(NodeId(start));
            while let Some(id) = cursor {
                if walk[id.0] != 0 {
                    break;
                }
                walk[id.0] = stamp;
                cursor = parents[id.0];
            }

            let Some(entry) = cursor else {
                continue;
            };
            if walk[entry.0] != stamp {
                continue;
            }

            let mut last = entry;
            let mut member = parents[entry.0];
            while let Some(id) = member {
                if id == entry {
                    break;
                }
                last = last.max(id);
                member = parents[id.0];
            }

            debug!(
                path = %self.nodes[last.0].folder.path,
                "Parent reference would form a cycle, leaving folder unattached"
            );
            parents[last.0] = None;
        }
    }

    /// Number of folders in this organization.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the organization has no folders.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Finds the first node (input order) with the given name.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.folder.name == name)
            .map(NodeId)
    }

    /// The folder stored at `id`.
    pub fn folder(&self, id: NodeId) -> &Folder {
        &self.nodes[id.0].folder
    }

    /// The parent of `id`, if it is attached.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Direct children of `id` in attachment order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Handles of every node in arena order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Nodes without a parent, in arena order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.node_ids().filter(|id| self.nodes[id.0].parent.is_none())
    }

    /// Every descendant of `id` in pre-order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut pending: Vec<NodeId> = self.nodes[id.0].children.iter().rev().copied().collect();
        while let Some(next) = pending.pop() {
            out.push(next);
            pending.extend(self.nodes[next.0].children.iter().rev().copied());
        }
        out
    }

    /// The chain from the topmost ancestor down to and including `id`.
    pub fn ancestry(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = vec![id];
        let mut cursor = self.nodes[id.0].parent;
        while let Some(parent) = cursor {
            chain.push(parent);
            cursor = self.nodes[parent.0].parent;
        }
        chain.reverse();
        chain
    }

    /// Whether `target` is `root` itself or one of its descendants.
    pub fn is_within_subtree(&self, root: NodeId, target: NodeId) -> bool {
        let mut cursor = Some(target);
        while let Some(id) = cursor {
            if id == root {
                return true;
            }
            cursor = self.nodes[id.0].parent;
        }
        false
    }

    /// Detaches `id` from its parent, appends it to `new_parent`, and
    /// rewrites the paths of the whole moved subtree.
    ///
    /// The caller must ensure `new_parent` is outside the subtree of `id`.
    pub(crate) fn reparent(&mut self, id: NodeId, new_parent: NodeId) {
        debug_assert!(!self.is_within_subtree(id, new_parent));

        if let Some(old_parent) = self.nodes[id.0].parent.take() {
            self.nodes[old_parent.0].children.retain(|&child| child != id);
        }

        self.nodes[id.0].parent = Some(new_parent);
        self.nodes[new_parent.0].children.push(id);

        let path = self.child_path(new_parent, id);
        self.nodes[id.0].folder.path = path;
        self.rewrite_subtree_paths(id);
    }

    /// Recomputes descendant paths top-down from the already updated `id`.
    fn rewrite_subtree_paths(&mut self, id: NodeId) {
        let mut pending = vec![id];
        while let Some(parent) = pending.pop() {
            let children = self.nodes[parent.0].children.clone();
            for child in children {
                let path = self.child_path(parent, child);
                self.nodes[child.0].folder.path = path;
                pending.push(child);
            }
        }
    }

    fn child_path(&self, parent: NodeId, child: NodeId) -> String {
        format!(
            "{}{}{}",
            self.nodes[parent.0].folder.path, PATH_SEPARATOR, self.nodes[child.0].folder.name
        )
    }

    /// Folder values in arena order.
    pub fn folders(&self) -> Vec<Folder> {
        self.nodes.iter().map(|node| node.folder.clone()).collect()
    }

    /// The first name that appears more than once, if any.
    fn duplicate_name(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.nodes
            .iter()
            .map(|node| node.folder.name.as_str())
            .find(|name| !seen.insert(*name))
    }
}

/// Folder forests of every organization, in the order organizations first
/// appear in the input.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    orgs: IndexMap<OrgId, OrgForest>,
}

impl Forest {
    /// Groups folders by organization and links each group into a forest.
    ///
    /// Duplicate names are accepted; lookups resolve to the first one.
    pub fn build(folders: impl IntoIterator<Item = Folder>) -> Self {
        let mut grouped: IndexMap<OrgId, Vec<Folder>> = IndexMap::new();
        for folder in folders {
            grouped.entry(folder.org_id).or_default().push(folder);
        }

        let orgs: IndexMap<OrgId, OrgForest> = grouped
            .into_iter()
            .map(|(org_id, folders)| (org_id, OrgForest::from_folders(folders)))
            .collect();

        debug!(
            organizations = orgs.len(),
            folders = orgs.values().map(OrgForest::len).sum::<usize>(),
            "Folder forest built"
        );

        Self { orgs }
    }

    /// Like [`Forest::build`], but rejects an organization holding two
    /// folders with the same name.
    pub fn build_strict(folders: impl IntoIterator<Item = Folder>) -> Result<Self, BuildError> {
        let forest = Self::build(folders);

        for (org_id, org) in &forest.orgs {
            if let Some(name) = org.duplicate_name() {
                return Err(BuildError::DuplicateName {
                    org_id: *org_id,
                    name: name.to_string(),
                });
            }
        }

        Ok(forest)
    }

    /// The forest of one organization.
    pub fn org(&self, org_id: OrgId) -> Option<&OrgForest> {
        self.orgs.get(&org_id)
    }

    pub(crate) fn org_mut(&mut self, org_id: OrgId) -> Option<&mut OrgForest> {
        self.orgs.get_mut(&org_id)
    }

    /// Known organizations in first-seen order.
    pub fn org_ids(&self) -> impl Iterator<Item = OrgId> + '_ {
        self.orgs.keys().copied()
    }

    /// Finds a folder by name across all organizations. Organizations are
    /// searched in order and the first match wins.
    pub fn locate(&self, name: &str) -> Option<(OrgId, NodeId)> {
        self.orgs
            .iter()
            .find_map(|(org_id, org)| org.find(name).map(|id| (*org_id, id)))
    }

    /// Every folder of every organization: organizations in first-seen
    /// order, folders in arena order.
    pub fn flatten(&self) -> Vec<Folder> {
        self.orgs.values().flat_map(OrgForest::folders).collect()
    }
}
