//! The fixed, ordered content-creation phases.
//!
//! Each phase is a hard-coded batch of create operations per content type and
//! locale; the batches live in one file per phase so the catalog stays easy to
//! audit against the remote schemas.
use anyhow::{anyhow, Result};
use serde_json::Value;

pub mod core_content;
pub mod foundation;
pub mod pages;
pub mod relations;

/// Seeding phases in their strict execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Foundation,
    CoreContent,
    Pages,
    Relations,
}

impl Phase {
    pub const ALL: [Phase; 4] = [
        Phase::Foundation,
        Phase::CoreContent,
        Phase::Pages,
        Phase::Relations,
    ];

    pub fn number(self) -> usize {
        match self {
            Phase::Foundation => 1,
            Phase::CoreContent => 2,
            Phase::Pages => 3,
            Phase::Relations => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::Foundation => "foundation",
            Phase::CoreContent => "core-content",
            Phase::Pages => "pages",
            Phase::Relations => "link-relations",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Phase::Foundation => "Foundation",
            Phase::CoreContent => "Core Content",
            Phase::Pages => "Pages",
            Phase::Relations => "Link Relations",
        }
    }

    /// Parse a phase from its number or name.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "foundation" => Ok(Phase::Foundation),
            "2" | "core-content" | "content" => Ok(Phase::CoreContent),
            "3" | "pages" => Ok(Phase::Pages),
            "4" | "link-relations" | "relations" => Ok(Phase::Relations),
            other => Err(anyhow!(
                "unknown phase {other:?} (expected 1-4, foundation, core-content, pages, or link-relations)"
            )),
        }
    }
}

/// One create operation: an English payload plus an optional Vietnamese
/// localization. Payloads are opaque to the runner and passed through as-is.
pub struct SeedItem {
    pub content_type: &'static str,
    pub label: String,
    pub payload: Value,
    pub translation: Option<Value>,
}

impl SeedItem {
    pub fn new(content_type: &'static str, label: &str, payload: Value) -> Self {
        Self {
            content_type,
            label: label.to_string(),
            payload,
            translation: None,
        }
    }

    pub fn with_translation(mut self, translation: Value) -> Self {
        self.translation = Some(translation);
        self
    }
}

/// One relation update: connect a ledger-recorded entry to earlier-created
/// targets by slug.
pub struct RelationLink {
    pub content_type: &'static str,
    pub slug: &'static str,
    pub field: &'static str,
    pub target_type: &'static str,
    pub target_slugs: &'static [&'static str],
}

/// The create batch for a phase; Link Relations issues updates instead and
/// has no create items.
pub fn items_for(phase: Phase) -> Vec<SeedItem> {
    match phase {
        Phase::Foundation => foundation::items(),
        Phase::CoreContent => core_content::items(),
        Phase::Pages => pages::items(),
        Phase::Relations => Vec::new(),
    }
}

pub fn relation_links() -> Vec<RelationLink> {
    relations::links()
}
