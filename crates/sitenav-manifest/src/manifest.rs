//! The navigation manifest value.
//!
//! A [`NavigationManifest`] is an ordered, immutable sequence of
//! [`NavEntry`] values. Sequence order is the left-to-right render order of
//! the header navigation bar. The manifest is built once at load time and
//! never mutated; every construction path validates the invariants from
//! the entry types before a value is returned.

use serde::{Deserialize, Serialize};

use crate::entry::{LinkEntry, NavEntry, RawEntry};
use crate::error::ManifestError;

/// TOML manifest document: a `[[nav]]` array of tables.
#[derive(Debug, Deserialize)]
struct ManifestDoc {
    #[serde(default)]
    nav: Vec<RawEntry>,
}

/// Ordered sequence of top-level navigation entries.
///
/// Serializes transparently as a JSON array in the exact shape the site
/// generator consumes: `{ "text", "link" }` for links and
/// `{ "text", "items": [...] }` for drop-down groups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavigationManifest {
    entries: Vec<NavEntry>,
}

impl NavigationManifest {
    /// Create a manifest from entries, validating every invariant.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Malformed`] if any entry has an empty label,
    /// an empty link target, or a group without items.
    pub fn from_entries(entries: Vec<NavEntry>) -> Result<Self, ManifestError> {
        let manifest = Self { entries };
        manifest.validate()?;
        Ok(manifest)
    }

    /// The built-in navigation manifest.
    ///
    /// This is the literal menu the site ships with: a home link, two
    /// drop-down groups for frontend and backend notes, and three direct
    /// section links.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                NavEntry::link("Home", "/"),
                NavEntry::group(
                    "前端笔记",
                    vec![
                        link_item("JS学习笔记", "/fe-note/js-note/"),
                        link_item("node.js学习笔记", "/fe-note/node-note/"),
                        link_item("Vue学习笔记", "/fe-note/vue-note/"),
                        link_item("前端工具集", "/fe-note/tools-note/"),
                    ],
                ),
                NavEntry::group(
                    "后端笔记",
                    vec![
                        link_item("Go学习笔记", "/be-note/go-note/"),
                        link_item("Python学习笔记", "/be-note/python-note/"),
                        link_item("Shell学习笔记", "/be-note/shell-note/"),
                    ],
                ),
                NavEntry::link("工具使用", "/tool/"),
                NavEntry::link("技术方案", "/tech/"),
                NavEntry::link("文档编写", "/doc/"),
            ],
        }
    }

    /// Parse a manifest from a TOML document with `[[nav]]` entries.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Parse`] for invalid TOML and
    /// [`ManifestError::Malformed`] for shape violations.
    pub fn from_toml_str(content: &str) -> Result<Self, ManifestError> {
        let doc: ManifestDoc = toml::from_str(content)?;
        Self::resolve(doc.nav)
    }

    /// Parse a manifest from a JSON array of entries.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Json`] for invalid JSON and
    /// [`ManifestError::Malformed`] for shape violations.
    pub fn from_json_str(content: &str) -> Result<Self, ManifestError> {
        let raw: Vec<RawEntry> = serde_json::from_str(content)?;
        Self::resolve(raw)
    }

    /// Resolve raw entries into a validated manifest, preserving order.
    fn resolve(raw: Vec<RawEntry>) -> Result<Self, ManifestError> {
        let entries = raw
            .into_iter()
            .enumerate()
            .map(|(i, entry)| entry.resolve(i))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    /// Validate every entry against the manifest invariants.
    ///
    /// Construction through [`from_entries`](Self::from_entries) or the
    /// parsers already validates; this re-checks a manifest whose entries
    /// were assembled directly.
    pub fn validate(&self) -> Result<(), ManifestError> {
        for (i, entry) in self.entries.iter().enumerate() {
            entry.validate(&format!("nav[{i}]"))?;
        }
        Ok(())
    }

    /// Entries in render order.
    #[must_use]
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Iterate entries in render order.
    pub fn iter(&self) -> std::slice::Iter<'_, NavEntry> {
        self.entries.iter()
    }

    /// Number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the manifest has no entries (renders no navigation bar).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to the JSON shape consumed by the site generator.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a> IntoIterator for &'a NavigationManifest {
    type Item = &'a NavEntry;
    type IntoIter = std::slice::Iter<'a, NavEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn link_item(text: &str, link: &str) -> LinkEntry {
    LinkEntry {
        text: text.to_owned(),
        link: link.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let manifest = NavigationManifest::builtin();
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn test_builtin_entry_order() {
        let manifest = NavigationManifest::builtin();

        let texts: Vec<_> = manifest.iter().map(NavEntry::text).collect();

        assert_eq!(
            texts,
            vec!["Home", "前端笔记", "后端笔记", "工具使用", "技术方案", "文档编写"]
        );
    }

    #[test]
    fn test_builtin_group_contents() {
        let manifest = NavigationManifest::builtin();

        let NavEntry::Group(group) = &manifest.entries()[2] else {
            panic!("expected group entry");
        };

        assert_eq!(group.text, "后端笔记");
        assert_eq!(group.items.len(), 3);
        assert_eq!(group.items[0].text, "Go学习笔记");
        assert_eq!(group.items[0].link, "/be-note/go-note/");
    }

    #[test]
    fn test_builtin_is_deterministic() {
        // Pure value: loading twice yields deep-equal results.
        assert_eq!(NavigationManifest::builtin(), NavigationManifest::builtin());
    }

    #[test]
    fn test_from_entries_valid() {
        let manifest =
            NavigationManifest::from_entries(vec![NavEntry::link("Home", "/")]).unwrap();

        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.entries()[0], NavEntry::link("Home", "/"));
    }

    #[test]
    fn test_from_entries_rejects_empty_group() {
        let err =
            NavigationManifest::from_entries(vec![NavEntry::group("Guides", Vec::new())])
                .unwrap_err();

        assert!(matches!(err, ManifestError::Malformed(_)));
        assert!(err.to_string().contains("nav[0].items"));
    }

    #[test]
    fn test_from_entries_names_offending_index() {
        let err = NavigationManifest::from_entries(vec![
            NavEntry::link("Home", "/"),
            NavEntry::link("Broken", ""),
        ])
        .unwrap_err();

        assert!(err.to_string().contains("nav[1].link"));
    }

    #[test]
    fn test_from_json_single_link() {
        let json = r#"[{"text": "Home", "link": "/"}]"#;

        let manifest = NavigationManifest::from_json_str(json).unwrap();

        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.entries()[0], NavEntry::link("Home", "/"));
    }

    #[test]
    fn test_from_json_single_group() {
        let json = r#"[
            {"text": "前端笔记", "items": [
                {"text": "JS学习笔记", "link": "/fe-note/js-note/"}
            ]}
        ]"#;

        let manifest = NavigationManifest::from_json_str(json).unwrap();

        assert_eq!(manifest.len(), 1);
        let NavEntry::Group(group) = &manifest.entries()[0] else {
            panic!("expected group entry");
        };
        assert_eq!(group.text, "前端笔记");
        assert_eq!(group.items.len(), 1);
        assert_eq!(group.items[0].text, "JS学习笔记");
        assert_eq!(group.items[0].link, "/fe-note/js-note/");
    }

    #[test]
    fn test_from_json_empty_group_fails() {
        let json = r#"[{"text": "Guides", "items": []}]"#;

        let err = NavigationManifest::from_json_str(json).unwrap_err();

        assert!(matches!(err, ManifestError::Malformed(_)));
        assert!(err.to_string().contains("nav[0].items"));
    }

    #[test]
    fn test_from_json_neither_link_nor_items_fails() {
        let json = r#"[{"text": "Dangling"}]"#;

        let err = NavigationManifest::from_json_str(json).unwrap_err();

        assert!(matches!(err, ManifestError::Malformed(_)));
        assert!(err.to_string().contains("nav[0]"));
        assert!(err.to_string().contains("either `link` or `items`"));
    }

    #[test]
    fn test_from_json_both_link_and_items_fails() {
        let json = r#"[{"text": "Both", "link": "/x/", "items": [
            {"text": "A", "link": "/a/"}
        ]}]"#;

        let err = NavigationManifest::from_json_str(json).unwrap_err();

        assert!(matches!(err, ManifestError::Malformed(_)));
        assert!(err.to_string().contains("both `link` and `items`"));
    }

    #[test]
    fn test_from_json_missing_item_link_fails() {
        let json = r#"[{"text": "Guides", "items": [{"text": "Setup"}]}]"#;

        let err = NavigationManifest::from_json_str(json).unwrap_err();

        assert!(err.to_string().contains("nav[0].items[0]"));
    }

    #[test]
    fn test_from_json_invalid_syntax_is_json_error() {
        let err = NavigationManifest::from_json_str("not json").unwrap_err();

        assert!(matches!(err, ManifestError::Json(_)));
    }

    #[test]
    fn test_from_json_preserves_order() {
        let json = r#"[
            {"text": "C", "link": "/c/"},
            {"text": "A", "link": "/a/"},
            {"text": "B", "link": "/b/"}
        ]"#;

        let manifest = NavigationManifest::from_json_str(json).unwrap();

        let texts: Vec<_> = manifest.iter().map(NavEntry::text).collect();
        assert_eq!(texts, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_from_toml_link_and_group() {
        let toml = r#"
[[nav]]
text = "Home"
link = "/"

[[nav]]
text = "前端笔记"
items = [
    { text = "JS学习笔记", link = "/fe-note/js-note/" },
    { text = "Vue学习笔记", link = "/fe-note/vue-note/" },
]
"#;

        let manifest = NavigationManifest::from_toml_str(toml).unwrap();

        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.entries()[0], NavEntry::link("Home", "/"));
        let NavEntry::Group(group) = &manifest.entries()[1] else {
            panic!("expected group entry");
        };
        assert_eq!(group.items.len(), 2);
        assert_eq!(group.items[1].link, "/fe-note/vue-note/");
    }

    #[test]
    fn test_from_toml_empty_document_is_empty_manifest() {
        let manifest = NavigationManifest::from_toml_str("").unwrap();

        assert!(manifest.is_empty());
    }

    #[test]
    fn test_from_toml_empty_text_fails() {
        let toml = r#"
[[nav]]
text = ""
link = "/"
"#;

        let err = NavigationManifest::from_toml_str(toml).unwrap_err();

        assert!(matches!(err, ManifestError::Malformed(_)));
        assert!(err.to_string().contains("nav[0].text"));
    }

    #[test]
    fn test_from_toml_invalid_syntax_is_parse_error() {
        let err = NavigationManifest::from_toml_str("nav = {{").unwrap_err();

        assert!(matches!(err, ManifestError::Parse(_)));
    }

    #[test]
    fn test_serialization_consumer_shape() {
        let manifest = NavigationManifest::from_entries(vec![
            NavEntry::link("Home", "/"),
            NavEntry::group(
                "前端笔记",
                vec![link_item("JS学习笔记", "/fe-note/js-note/")],
            ),
        ])
        .unwrap();

        let json = serde_json::to_value(&manifest).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["text"], "Home");
        assert_eq!(json[0]["link"], "/");
        assert!(json[0].get("items").is_none());
        assert_eq!(json[1]["text"], "前端笔记");
        assert!(json[1].get("link").is_none());
        assert_eq!(json[1]["items"][0]["link"], "/fe-note/js-note/");
    }

    #[test]
    fn test_json_round_trip_is_deep_equal() {
        let manifest = NavigationManifest::builtin();

        let json = manifest.to_json().unwrap();
        let reloaded = NavigationManifest::from_json_str(&json).unwrap();

        assert_eq!(manifest, reloaded);
    }

    #[test]
    fn test_empty_manifest_is_valid() {
        let manifest = NavigationManifest::from_entries(Vec::new()).unwrap();

        assert!(manifest.is_empty());
        assert_eq!(manifest.len(), 0);
    }
}
