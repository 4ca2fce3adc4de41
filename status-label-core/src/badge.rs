//! Badge derivation
use crate::classifier::StatusClassifier;
use crate::status::{StatusLabelInput, StatusValue};
use serde::{Deserialize, Serialize};

/// Context tag passed to the classifier for status label badges.
pub const LABEL_CONTEXT: &str = "label";

/// A single rendered badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub text: String,
}

impl Badge {
    #[must_use]
    pub fn title_prefix(&self) -> Option<String> {
        self.title.as_deref().map(title_prefix)
    }
}

/// Text shown before a badge's status, e.g. `"Lab: "`.
#[must_use]
pub fn title_prefix(title: &str) -> String {
    format!("{title}: ")
}

/// Derive the badges for a status label.
///
/// Returns `None` when the status shape is unsupported (nothing is rendered) and
/// `Some` with one badge per status otherwise, which may be empty.
#[must_use]
pub fn badges<C>(input: &StatusLabelInput, classifier: &C) -> Option<Vec<Badge>>
where
    C: StatusClassifier + ?Sized,
{
    badges_for(
        &input.status,
        input.title.as_deref(),
        input.button_label.as_deref(),
        classifier,
    )
}

/// [`badges`] over borrowed parts.
///
/// `title` and `button_label` only apply to a single status; composite entries carry
/// their own titles and always display their status.
#[must_use]
pub fn badges_for<C>(
    status: &StatusValue,
    title: Option<&str>,
    button_label: Option<&str>,
    classifier: &C,
) -> Option<Vec<Badge>>
where
    C: StatusClassifier + ?Sized,
{
    match status {
        StatusValue::Single(status) => {
            let text = button_label.filter(|label| !label.is_empty()).unwrap_or(status);
            Some(vec![Badge {
                class: classifier.status_class(status, LABEL_CONTEXT),
                title: title.filter(|t| !t.is_empty()).map(str::to_string),
                text: text.to_string(),
            }])
        }
        StatusValue::Entries(entries) => Some(
            entries
                .iter()
                .map(|entry| Badge {
                    class: classifier.status_class(&entry.status, LABEL_CONTEXT),
                    title: entry.display_title().map(str::to_string),
                    text: entry.status.clone(),
                })
                .collect(),
        ),
        StatusValue::Unsupported => {
            log::debug!("status label has no renderable status");
            None
        }
    }
}
