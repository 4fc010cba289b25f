//! Key-to-display-string resolution for log messages.
//!
//! # Design
//! The resolver is a pre-warmed in-memory dictionary: the whole translation
//! table is parsed when the resolver is constructed, so `resolve` is a plain
//! synchronous lookup by the time any service method runs. There is no
//! "dictionary still loading" state to race against.
//!
//! Dictionaries use the nested-object layout common to i18n JSON files;
//! nesting is flattened into dot-joined keys (`{"a":{"b":"x"}}` resolves
//! under `"a.b"`). A missing key resolves to the key itself rather than
//! failing, so a hole in a translation file degrades a log line instead of
//! an operation.

use std::collections::HashMap;

use serde_json::Value;

/// Well-known message keys used by `DataService`.
pub mod keys {
    pub const FETCHED_HEROES: &str = "hero_service.fetched_heroes";
    pub const FETCHED: &str = "hero_service.fetched";
    pub const DID_NOT_FIND: &str = "hero_service.did_not_find";
    pub const HERO: &str = "hero_service.hero";
    pub const FETCHED_HERO: &str = "hero_service.fetched_hero";
    pub const FOUND_HEROES_MATCHING: &str = "hero_service.found_heroes_matching";
    pub const ADDED_HERO: &str = "hero_service.added_hero";
    pub const DELETED_HERO: &str = "hero_service.deleted_hero";
    pub const UPDATED_HERO: &str = "hero_service.updated_hero";
    pub const FAILED: &str = "hero_service.failed";
}

const EN: &str = include_str!("../i18n/en.json");

/// Maps a message key to a localized display string.
///
/// Construction is eager; `resolve` never blocks and never fails.
#[derive(Debug, Clone)]
pub struct TextResolver {
    entries: HashMap<String, String>,
}

impl TextResolver {
    /// Build a resolver from an i18n-style JSON object. Nested objects are
    /// flattened into dot-joined keys; non-string leaves are ignored.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let root: Value = serde_json::from_str(raw)?;
        let mut entries = HashMap::new();
        flatten(&root, String::new(), &mut entries);
        Ok(Self { entries })
    }

    /// Resolve a key to its display string, or echo the key back when the
    /// dictionary has no entry for it.
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map(String::as_str).unwrap_or(key)
    }
}

impl Default for TextResolver {
    /// The embedded English dictionary. Parsing a vetted compile-time asset
    /// cannot fail at runtime.
    fn default() -> Self {
        Self::from_json(EN).unwrap_or(Self {
            entries: HashMap::new(),
        })
    }
}

fn flatten(value: &Value, prefix: String, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(child, path, out);
            }
        }
        Value::String(text) => {
            out.insert(prefix, text.clone());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dictionary_covers_all_service_keys() {
        let texts = TextResolver::default();
        for key in [
            keys::FETCHED_HEROES,
            keys::FETCHED,
            keys::DID_NOT_FIND,
            keys::HERO,
            keys::FETCHED_HERO,
            keys::FOUND_HEROES_MATCHING,
            keys::ADDED_HERO,
            keys::DELETED_HERO,
            keys::UPDATED_HERO,
            keys::FAILED,
        ] {
            assert_ne!(texts.resolve(key), key, "missing dictionary entry for {key}");
        }
    }

    #[test]
    fn nested_objects_flatten_to_dotted_keys() {
        let texts = TextResolver::from_json(r#"{"a":{"b":{"c":"deep"}},"top":"flat"}"#).unwrap();
        assert_eq!(texts.resolve("a.b.c"), "deep");
        assert_eq!(texts.resolve("top"), "flat");
    }

    #[test]
    fn missing_key_resolves_to_itself() {
        let texts = TextResolver::default();
        assert_eq!(texts.resolve("no.such.key"), "no.such.key");
    }

    #[test]
    fn non_string_leaves_are_ignored() {
        let texts = TextResolver::from_json(r#"{"n":3,"ok":"yes"}"#).unwrap();
        assert_eq!(texts.resolve("n"), "n");
        assert_eq!(texts.resolve("ok"), "yes");
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(TextResolver::from_json("not json").is_err());
    }
}
