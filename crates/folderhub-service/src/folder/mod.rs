//! Folder hierarchy: forest construction, queries, moves, and tree views.

pub mod driver;
pub mod forest;
pub mod service;
pub mod tree;

pub use driver::FolderDriver;
pub use forest::{Forest, NodeId, OrgForest};
pub use service::FolderService;
