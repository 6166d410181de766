//! Data carried from the remote sources into the page.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Label used for a project link when the feed does not name one.
pub const DEFAULT_LINK_LABEL: &str = "Link";

/// An HTML fragment that is rendered without escaping.
///
/// Only the owner's own project feed may produce one of these. Templates
/// emit it with the `safe` filter; every other string goes through the
/// regular escaper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedMarkup(String);

impl TrustedMarkup {
    /// Wraps markup that came from the trusted project feed.
    pub fn from_feed(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// Returns the raw markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if there is no markup at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TrustedMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the remote project feed.
///
/// Parsing is best-effort: missing or `null` fields fall back to empty
/// values, and the field names used by the published `projects.json`
/// (`picture`, `URL`, `url_name`) are accepted along with their camelCase
/// and snake_case forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Heading of the project block
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,

    /// Body of the project block, rendered verbatim
    #[serde(deserialize_with = "null_as_default")]
    pub description: TrustedMarkup,

    /// Image shown next to the description
    #[serde(
        rename = "picture",
        alias = "pictureUrl",
        alias = "picture_url",
        deserialize_with = "null_as_default"
    )]
    pub picture_url: String,

    /// Link target
    #[serde(rename = "URL", alias = "url", deserialize_with = "null_as_default")]
    pub url: String,

    /// Link text; see [`Project::link_label`]
    #[serde(
        rename = "url_name",
        alias = "urlLabel",
        alias = "url_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub url_label: Option<String>,
}

impl Project {
    /// Text for the project link, `"Link"` when the label is absent or blank.
    pub fn link_label(&self) -> &str {
        match self.url_label.as_deref() {
            Some(label) if !label.trim().is_empty() => label,
            _ => DEFAULT_LINK_LABEL,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Activity count for one calendar day, as reported by the activity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDay {
    /// Calendar date
    pub date: NaiveDate,

    /// Number of activities on that date
    pub count: u32,

    /// Intensity bucket chosen by the provider (0 = none, 4 = most)
    #[serde(default)]
    pub level: u8,
}
