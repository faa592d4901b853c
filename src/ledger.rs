//! Local record of created remote entities.
//!
//! The ledger is rewritten after each phase so later phases (and later runs)
//! can reference earlier-created identifiers. Uniqueness is not enforced here:
//! the remote CMS is the only source of truth for what exists.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

fn default_locale() -> String {
    "en".to_string()
}

/// Summary of one created remote entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl LedgerEntry {
    /// Build an entry from a create response.
    ///
    /// Handles both the enveloped shape (`{"data": {"id", "attributes": {..}}}`)
    /// and the flat shape localization endpoints return. Returns `None` when no
    /// numeric id is present.
    pub fn from_response(body: &Value, fallback_locale: &str) -> Option<Self> {
        let node = body.get("data").unwrap_or(body);
        let id = node.get("id").and_then(Value::as_i64)?;
        let attributes = node.get("attributes").unwrap_or(node);
        let slug = attributes
            .get("slug")
            .and_then(Value::as_str)
            .map(str::to_string);
        let title = ["title", "name"]
            .iter()
            .find_map(|key| attributes.get(*key).and_then(Value::as_str))
            .map(str::to_string);
        let locale = attributes
            .get("locale")
            .and_then(Value::as_str)
            .unwrap_or(fallback_locale)
            .to_string();
        Some(Self {
            id,
            slug,
            title,
            locale,
        })
    }
}

/// Created entities keyed by content-type name, in creation order.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub created: BTreeMap<String, Vec<LedgerEntry>>,
}

impl Ledger {
    /// Load the ledger from disk, or start empty when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let bytes = fs::read(path).with_context(|| format!("read ledger {}", path.display()))?;
        let ledger =
            serde_json::from_slice(&bytes).with_context(|| format!("parse ledger {}", path.display()))?;
        Ok(ledger)
    }

    /// Persist the ledger in a stable JSON format.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
        }
        let text = serde_json::to_string_pretty(self).context("serialize ledger")?;
        fs::write(path, text.as_bytes()).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    pub fn record(&mut self, content_type: &str, entry: LedgerEntry) {
        self.created.entry(content_type.to_string()).or_default().push(entry);
    }

    pub fn entries(&self, content_type: &str) -> &[LedgerEntry] {
        self.created.get(content_type).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Find an entry by slug, preferring the English source entry over its
    /// translations when both were recorded.
    pub fn find_by_slug(&self, content_type: &str, slug: &str) -> Option<&LedgerEntry> {
        let entries = self.entries(content_type);
        entries
            .iter()
            .find(|entry| entry.slug.as_deref() == Some(slug) && entry.locale == "en")
            .or_else(|| entries.iter().find(|entry| entry.slug.as_deref() == Some(slug)))
    }

    pub fn count(&self, content_type: &str) -> usize {
        self.entries(content_type).len()
    }

    pub fn total(&self) -> usize {
        self.created.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(id: i64, slug: &str, locale: &str) -> LedgerEntry {
        LedgerEntry {
            id,
            slug: Some(slug.to_string()),
            title: None,
            locale: locale.to_string(),
        }
    }

    #[test]
    fn from_response_reads_enveloped_create_shape() {
        let body = json!({
            "data": {
                "id": 7,
                "attributes": {"slug": "robusta-g1", "name": "Robusta Grade 1", "locale": "en"}
            }
        });
        let entry = LedgerEntry::from_response(&body, "en").unwrap();
        assert_eq!(entry.id, 7);
        assert_eq!(entry.slug.as_deref(), Some("robusta-g1"));
        assert_eq!(entry.title.as_deref(), Some("Robusta Grade 1"));
        assert_eq!(entry.locale, "en");
    }

    #[test]
    fn from_response_reads_flat_localization_shape() {
        let body = json!({"id": 8, "slug": "robusta-g1", "title": "Robusta loại 1", "locale": "vi"});
        let entry = LedgerEntry::from_response(&body, "en").unwrap();
        assert_eq!(entry.id, 8);
        assert_eq!(entry.locale, "vi");
    }

    #[test]
    fn from_response_without_id_is_none() {
        assert!(LedgerEntry::from_response(&json!({"data": null}), "en").is_none());
        assert!(LedgerEntry::from_response(&json!({"ok": true}), "en").is_none());
    }

    #[test]
    fn find_by_slug_prefers_english_entry() {
        let mut ledger = Ledger::default();
        ledger.record("products", entry(2, "robusta-g1", "vi"));
        ledger.record("products", entry(1, "robusta-g1", "en"));
        assert_eq!(ledger.find_by_slug("products", "robusta-g1").unwrap().id, 1);
    }

    #[test]
    fn find_by_slug_falls_back_to_any_locale() {
        let mut ledger = Ledger::default();
        ledger.record("products", entry(2, "robusta-g1", "vi"));
        assert_eq!(ledger.find_by_slug("products", "robusta-g1").unwrap().id, 2);
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");

        let mut ledger = Ledger::default();
        ledger.record("authors", entry(1, "nguyen-van-an", "en"));
        ledger.record("categories", entry(2, "green-coffee", "en"));
        ledger.save(&path).unwrap();

        let reloaded = Ledger::load_or_default(&path).unwrap();
        assert_eq!(reloaded.count("authors"), 1);
        assert_eq!(reloaded.count("categories"), 1);
        assert_eq!(reloaded.total(), 2);
        assert_eq!(reloaded.entries("authors"), ledger.entries("authors"));
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = Ledger::load_or_default(&dir.path().join("absent.json")).unwrap();
        assert_eq!(ledger.total(), 0);
        assert!(ledger.entries("authors").is_empty());
    }
}
