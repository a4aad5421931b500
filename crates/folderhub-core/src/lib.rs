//! # folderhub-core
//!
//! Core crate for FolderHub. Contains configuration schemas, typed
//! identifiers, logging setup, and the unified error system shared by the
//! entity and service crates.
//!
//! This crate has **no** internal dependencies on other FolderHub crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod types;

pub use error::{AppError, BuildError, MoveError};
pub use result::AppResult;
