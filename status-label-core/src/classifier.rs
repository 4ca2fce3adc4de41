//! Status to CSS class lookup.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

const DEFAULT_STATUS_CLASSES: &str = include_str!("../data/status_classes.json");

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

static SHARED_TABLE: Lazy<StatusClassTable> = Lazy::new(|| {
    StatusClassTable::from_json(DEFAULT_STATUS_CLASSES).unwrap_or_else(|err| {
        log::warn!("bundled status class table rejected, using built-in rule: {err}");
        StatusClassTable::default()
    })
});

/// Maps a status name and a usage context (e.g. `"label"`) to a CSS class.
///
/// The returned class is treated opaquely by callers.
pub trait StatusClassifier {
    fn status_class(&self, status: &str, context: &str) -> String;
}

impl<F> StatusClassifier for F
where
    F: Fn(&str, &str) -> String,
{
    fn status_class(&self, status: &str, context: &str) -> String {
        self(status, context)
    }
}

/// Errors raised when a status class table cannot be used.
#[derive(Debug, Error)]
pub enum ClassifierConfigError {
    #[error("invalid status class table: {0}")]
    Json(#[from] serde_json::Error),
    #[error("status class separator must not be empty")]
    EmptySeparator,
    #[error("override for {status:?} has an empty class")]
    EmptyOverride { status: String },
}

/// Table-driven classifier producing `{context}{separator}{slug}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusClassTable {
    #[serde(default = "StatusClassTable::default_separator")]
    pub separator: String,
    #[serde(default = "StatusClassTable::default_unknown")]
    pub unknown: String,
    /// Keyed by [`status_key`].
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

impl StatusClassTable {
    fn default_separator() -> String {
        "-status-".to_string()
    }

    fn default_unknown() -> String {
        "unknown".to_string()
    }

    /// Parse and validate a table from JSON.
    ///
    /// Override keys are normalised with [`status_key`].
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, the separator is empty, or an
    /// override maps to an empty class.
    pub fn from_json(json: &str) -> Result<Self, ClassifierConfigError> {
        let mut table: Self = serde_json::from_str(json)?;
        if table.separator.is_empty() {
            return Err(ClassifierConfigError::EmptySeparator);
        }
        if let Some((status, _)) = table.overrides.iter().find(|(_, class)| class.is_empty()) {
            return Err(ClassifierConfigError::EmptyOverride {
                status: status.clone(),
            });
        }
        table.overrides = table
            .overrides
            .into_iter()
            .map(|(status, class)| (status_key(&status), class))
            .collect();
        Ok(table)
    }

    /// The table bundled with this crate.
    #[must_use]
    pub fn default_config() -> Self {
        Self::shared().clone()
    }

    /// Process-wide instance of the bundled table.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED_TABLE
    }

    #[must_use]
    pub fn slug_for(&self, status: &str) -> String {
        let key = status_key(status);
        if key.is_empty() {
            return self.unknown.clone();
        }
        self.overrides
            .get(&key)
            .cloned()
            .unwrap_or_else(|| status_slug(&key))
    }
}

impl Default for StatusClassTable {
    fn default() -> Self {
        Self {
            separator: Self::default_separator(),
            unknown: Self::default_unknown(),
            overrides: BTreeMap::new(),
        }
    }
}

impl StatusClassifier for StatusClassTable {
    fn status_class(&self, status: &str, context: &str) -> String {
        format!("{context}{}{}", self.separator, self.slug_for(status))
    }
}

/// Lookup form of a status: trimmed, lowercase, whitespace runs collapsed to one space.
#[must_use]
pub fn status_key(status: &str) -> String {
    WHITESPACE.replace_all(status.trim(), " ").to_lowercase()
}

/// Lowercase a status and collapse whitespace runs into `-`.
#[must_use]
pub fn status_slug(status: &str) -> String {
    WHITESPACE
        .replace_all(status.trim(), "-")
        .to_lowercase()
}
