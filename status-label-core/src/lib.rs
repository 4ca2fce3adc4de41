//! Status label core
//!
//! Platform-agnostic logic behind the status label badge list.
//! This crate turns a status description into badges without any UI dependencies;
//! rendering lives in `status-label-web`.

pub mod badge;
pub mod classifier;
pub mod status;

// Re-export commonly used types
pub use badge::{Badge, LABEL_CONTEXT, badges, badges_for, title_prefix};
pub use classifier::{
    ClassifierConfigError, StatusClassTable, StatusClassifier, status_key, status_slug,
};
pub use status::{StatusEntry, StatusLabelInput, StatusValue};
