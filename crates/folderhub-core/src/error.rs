//! Error types for FolderHub.
//!
//! Domain operations return closed enums ([`MoveError`], [`BuildError`]) so
//! callers can branch on the failure kind. Both map into [`AppError`] for
//! callers that want a single error type at their application boundary.

use std::fmt;
use thiserror::Error;

use crate::types::OrgId;

/// Top-level error kind categorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found.
    NotFound,
    /// Input validation failed.
    Validation,
    /// A conflict occurred (duplicate entry, ambiguous name, etc.).
    Conflict,
    /// A configuration error occurred.
    Configuration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Configuration => write!(f, "CONFIGURATION"),
        }
    }
}

/// The unified application error used at FolderHub's outer boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

/// Reasons a folder move is rejected.
///
/// Every variant is detected before the forest is touched, so a returned
/// error always means the hierarchy is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Source and destination name the same folder.
    #[error("cannot move a folder to itself: '{name}'")]
    SelfMove {
        /// The folder name given as both source and destination.
        name: String,
    },
    /// No organization holds a folder with the source name.
    #[error("source folder does not exist: '{name}'")]
    SourceNotFound {
        /// The missing source name.
        name: String,
    },
    /// No organization holds a folder with the destination name.
    #[error("destination folder does not exist: '{name}'")]
    DestinationNotFound {
        /// The missing destination name.
        name: String,
    },
    /// Source and destination belong to different organizations.
    #[error("cannot move a folder to a different organization: '{source_org}' -> '{destination_org}'")]
    CrossTenant {
        /// Organization of the source folder.
        source_org: OrgId,
        /// Organization of the destination folder.
        destination_org: OrgId,
    },
    /// Destination lies inside the subtree being moved.
    #[error("cannot move a folder to a child of itself: '{name}' -> '{destination}'")]
    Cyclic {
        /// The folder being moved.
        name: String,
        /// The destination found within its subtree.
        destination: String,
    },
}

impl MoveError {
    /// The [`ErrorKind`] this failure maps to at the application boundary.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SourceNotFound { .. } | Self::DestinationNotFound { .. } => ErrorKind::NotFound,
            Self::SelfMove { .. } | Self::CrossTenant { .. } | Self::Cyclic { .. } => {
                ErrorKind::Validation
            }
        }
    }
}

impl From<MoveError> for AppError {
    fn from(err: MoveError) -> Self {
        Self::with_source(err.kind(), err.to_string(), err)
    }
}

/// Reasons strict forest construction is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Two folders in one organization share a name, which would make
    /// name-based parent and move resolution ambiguous.
    #[error("duplicate folder name '{name}' in organization '{org_id}'")]
    DuplicateName {
        /// The organization holding the duplicates.
        org_id: OrgId,
        /// The repeated folder name.
        name: String,
    },
}

impl From<BuildError> for AppError {
    fn from(err: BuildError) -> Self {
        Self::with_source(ErrorKind::Conflict, err.to_string(), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
