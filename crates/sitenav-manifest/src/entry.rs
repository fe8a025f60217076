//! Navigation entry types.
//!
//! A manifest entry is either a [`LinkEntry`] pointing directly at a page or
//! a [`GroupEntry`] that expands into a drop-down of links. On the wire the
//! two shapes are untagged: the presence of `link` or `items` selects the
//! variant, and no entry may carry both.

use serde::{Deserialize, Serialize};

use crate::error::ManifestError;

/// A navigation entry that points directly at a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    /// Display label.
    pub text: String,
    /// Target path (site-relative path or absolute URL).
    pub link: String,
}

/// A navigation entry that expands into a drop-down list of links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GroupEntry {
    /// Display label.
    pub text: String,
    /// Drop-down entries, in render order. Never empty in a valid manifest.
    pub items: Vec<LinkEntry>,
}

/// Top-level navigation entry.
///
/// Serializes untagged, so the consumer sees exactly
/// `{ "text": ..., "link": ... }` or `{ "text": ..., "items": [...] }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// Direct link to a page.
    Link(LinkEntry),
    /// Drop-down group of links.
    Group(GroupEntry),
}

impl NavEntry {
    /// Create a link entry.
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self::Link(LinkEntry {
            text: text.into(),
            link: link.into(),
        })
    }

    /// Create a drop-down group entry.
    pub fn group(text: impl Into<String>, items: Vec<LinkEntry>) -> Self {
        Self::Group(GroupEntry {
            text: text.into(),
            items,
        })
    }

    /// Display label of the entry.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Link(entry) => &entry.text,
            Self::Group(entry) => &entry.text,
        }
    }

    /// True if the entry is a drop-down group.
    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    /// Validate the entry against the manifest invariants.
    ///
    /// `field` is the entry's position in the manifest (e.g. `nav[2]`),
    /// used to name the offending value in error messages.
    pub(crate) fn validate(&self, field: &str) -> Result<(), ManifestError> {
        match self {
            Self::Link(entry) => entry.validate(field),
            Self::Group(entry) => {
                if entry.text.is_empty() {
                    return Err(ManifestError::empty_field(&format!("{field}.text")));
                }
                if entry.items.is_empty() {
                    return Err(ManifestError::empty_field(&format!("{field}.items")));
                }
                for (i, item) in entry.items.iter().enumerate() {
                    item.validate(&format!("{field}.items[{i}]"))?;
                }
                Ok(())
            }
        }
    }
}

impl LinkEntry {
    pub(crate) fn validate(&self, field: &str) -> Result<(), ManifestError> {
        if self.text.is_empty() {
            return Err(ManifestError::empty_field(&format!("{field}.text")));
        }
        if self.link.is_empty() {
            return Err(ManifestError::empty_field(&format!("{field}.link")));
        }
        Ok(())
    }
}

/// Entry as parsed from TOML/JSON, before variant resolution.
///
/// All fields are optional so that shape violations surface as
/// [`ManifestError::Malformed`] with the entry position, rather than as
/// opaque deserializer errors.
#[derive(Debug, Deserialize)]
pub(crate) struct RawEntry {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    items: Option<Vec<RawItem>>,
}

/// Group item as parsed from TOML/JSON.
#[derive(Debug, Deserialize)]
pub(crate) struct RawItem {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    link: Option<String>,
}

impl RawEntry {
    /// Resolve into a validated [`NavEntry`].
    ///
    /// `index` is the entry's position in the manifest sequence.
    pub(crate) fn resolve(self, index: usize) -> Result<NavEntry, ManifestError> {
        let field = format!("nav[{index}]");

        let text = self
            .text
            .ok_or_else(|| ManifestError::Malformed(format!("{field} is missing `text`")))?;

        let entry = match (self.link, self.items) {
            (Some(_), Some(_)) => {
                return Err(ManifestError::Malformed(format!(
                    "{field} (\"{text}\") cannot set both `link` and `items`"
                )));
            }
            (Some(link), None) => NavEntry::Link(LinkEntry { text, link }),
            (None, Some(items)) => {
                let items = items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| item.resolve(&format!("{field}.items[{i}]")))
                    .collect::<Result<Vec<_>, _>>()?;
                NavEntry::Group(GroupEntry { text, items })
            }
            (None, None) => {
                return Err(ManifestError::Malformed(format!(
                    "{field} (\"{text}\") must set either `link` or `items`"
                )));
            }
        };

        entry.validate(&field)?;
        Ok(entry)
    }
}

impl RawItem {
    fn resolve(self, field: &str) -> Result<LinkEntry, ManifestError> {
        let text = self
            .text
            .ok_or_else(|| ManifestError::Malformed(format!("{field} is missing `text`")))?;
        let link = self
            .link
            .ok_or_else(|| ManifestError::Malformed(format!("{field} is missing `link`")))?;
        Ok(LinkEntry { text, link })
    }
}
