//! Status descriptions accepted by the status label.
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One entry of a composite status.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StatusEntry {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl StatusEntry {
    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            title: None,
        }
    }

    #[must_use]
    pub fn titled(status: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            title: Some(title.into()),
        }
    }

    /// Decode an entry from arbitrary JSON, keeping whatever status is present.
    ///
    /// Statuses display as text: strings and numbers keep their text, anything else
    /// (missing, `null`, booleans, nested values) becomes an empty string. Titles
    /// follow truthiness: non-empty strings, non-zero numbers and `true` are kept as
    /// text, everything else means no title.
    #[must_use]
    pub fn from_json_value(value: &Value) -> Self {
        let Value::Object(fields) = value else {
            log::debug!("status entry is not an object: {value}");
            return Self::default();
        };
        let status = match fields.get("status") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            None | Some(Value::Null) => String::new(),
            Some(other) => {
                log::debug!("status entry has a non-text status: {other}");
                String::new()
            }
        };
        Self {
            status,
            title: fields.get("title").and_then(title_text),
        }
    }

    /// Title used for display, treating an empty title as absent.
    #[must_use]
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}

impl<'de> Deserialize<'de> for StatusEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json_value(&value))
    }
}

/// The `status` property: a single status or an ordered list of entries.
///
/// `Unsupported` stands for any other shape that reached us through
/// deserialization; it renders nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(untagged)]
pub enum StatusValue {
    Single(String),
    Entries(Vec<StatusEntry>),
    #[default]
    Unsupported,
}

impl StatusValue {
    #[must_use]
    pub fn from_json_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::Single(s.clone()),
            Value::Array(items) => {
                Self::Entries(items.iter().map(StatusEntry::from_json_value).collect())
            }
            // Plain objects are not treated as entry lists.
            other => {
                log::debug!("unsupported status value: {other}");
                Self::Unsupported
            }
        }
    }

    #[must_use]
    pub const fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

impl<'de> Deserialize<'de> for StatusValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json_value(&value))
    }
}

impl From<&str> for StatusValue {
    fn from(status: &str) -> Self {
        Self::Single(status.to_string())
    }
}

impl From<String> for StatusValue {
    fn from(status: String) -> Self {
        Self::Single(status)
    }
}

impl From<Vec<StatusEntry>> for StatusValue {
    fn from(entries: Vec<StatusEntry>) -> Self {
        Self::Entries(entries)
    }
}

/// Properties of a status label as supplied by the host page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusLabelInput {
    #[serde(default)]
    pub status: StatusValue,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub button_label: Option<String>,
}

impl StatusLabelInput {
    #[must_use]
    pub fn new(status: impl Into<StatusValue>) -> Self {
        Self {
            status: status.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_button_label(mut self, label: impl Into<String>) -> Self {
        self.button_label = Some(label.into());
        self
    }

    /// Parse host props from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or is not an object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn non_empty_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

fn title_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        other => non_empty_string(other),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(non_empty_string(&value))
}
