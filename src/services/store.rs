//! Presentation record storage.
//!
//! The assembler works against the [`PresentationStore`] trait rather than
//! a module-level map, so the in-memory store can be swapped for a locked
//! structure or an external one without touching assembly logic. Records
//! live for the process lifetime only.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::structure::StructuredContent;
use crate::template::{Template, TemplateCustomizations};
use crate::types::PresentationId;

/// Everything stored for one presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationRecord {
    /// Unique id, allocated at creation.
    pub id: PresentationId,
    /// Deck title, fixed at creation.
    pub title: String,
    /// Resolved template name the deck was structured against.
    pub template: String,
    /// Customizations the effective template was built with.
    #[serde(default, skip_serializing_if = "TemplateCustomizations::is_empty")]
    pub customizations: TemplateCustomizations,
    /// The structured deck.
    pub content: StructuredContent,
    /// Base template with customizations applied.
    pub effective_template: Template,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When derived state was last replaced, if ever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PresentationRecord {
    /// Number of slides in the stored deck.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.content.slides.len()
    }

    /// Listing-friendly view of this record.
    #[must_use]
    pub fn summary(&self) -> PresentationSummary {
        PresentationSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            template: self.template.clone(),
            slide_count: self.slide_count(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Compact listing row for a stored presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationSummary {
    /// Presentation id.
    pub id: PresentationId,
    /// Deck title.
    pub title: String,
    /// Resolved template name.
    pub template: String,
    /// Number of slides.
    pub slide_count: usize,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Trait for presentation record storage.
///
/// Methods take `&self`; implementations supply their own interior
/// mutability. Writes are last-write-wins with no version check.
pub trait PresentationStore {
    /// Insert or replace the record under its id.
    fn put(&self, record: PresentationRecord);

    /// Fetch a copy of the record, if present.
    fn get(&self, id: &PresentationId) -> Option<PresentationRecord>;

    /// Remove the record. Returns whether one existed.
    fn remove(&self, id: &PresentationId) -> bool;

    /// Copies of all records, in no particular order.
    fn records(&self) -> Vec<PresentationRecord>;

    /// Number of stored records.
    fn len(&self) -> usize;

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-lifetime in-memory store.
///
/// Cloning shares the underlying map, so one store can serve concurrent
/// callers. A poisoned lock is recovered rather than propagated; records
/// are plain data and stay coherent even if a holder panicked.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<HashMap<PresentationId, PresentationRecord>>>,
}

impl MemoryStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl PresentationStore for MemoryStore {
    fn put(&self, record: PresentationRecord) {
        let mut map = self.records.lock().unwrap_or_else(|e| e.into_inner());
        map.insert(record.id.clone(), record);
    }

    fn get(&self, id: &PresentationId) -> Option<PresentationRecord> {
        let map = self.records.lock().unwrap_or_else(|e| e.into_inner());
        map.get(id).cloned()
    }

    fn remove(&self, id: &PresentationId) -> bool {
        let mut map = self.records.lock().unwrap_or_else(|e| e.into_inner());
        map.remove(id).is_some()
    }

    fn records(&self) -> Vec<PresentationRecord> {
        let map = self.records.lock().unwrap_or_else(|e| e.into_inner());
        map.values().cloned().collect()
    }

    fn len(&self) -> usize {
        let map = self.records.lock().unwrap_or_else(|e| e.into_inner());
        map.len()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::outline::{RawOutline, RawSlide};
    use crate::structure::structure_content;
    use crate::template::TemplateRegistry;

    fn sample_record(title: &str) -> PresentationRecord {
        let outline = RawOutline::new(title, vec![RawSlide::new("Only")]);
        let content = structure_content(&outline, "professional").unwrap();
        let registry = TemplateRegistry::with_builtins();
        PresentationRecord {
            id: PresentationId::fresh(),
            title: title.to_string(),
            template: "professional".to_string(),
            customizations: TemplateCustomizations::default(),
            effective_template: registry.resolve("professional").template.clone(),
            created_at: content.metadata.created_at,
            updated_at: None,
            content,
        }
    }

    #[test]
    fn test_put_get_remove_round_trip() {
        let store = MemoryStore::new();
        let record = sample_record("Deck");
        let id = record.id.clone();

        store.put(record.clone());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id), Some(record));

        assert!(store.remove(&id));
        assert!(!store.remove(&id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_put_replaces_under_same_id() {
        let store = MemoryStore::new();
        let mut record = sample_record("First");
        let id = record.id.clone();
        store.put(record.clone());

        record.title = "Second".to_string();
        store.put(record);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().title, "Second");
    }

    #[test]
    fn test_clones_share_the_map() {
        let store = MemoryStore::new();
        let twin = store.clone();
        store.put(sample_record("Shared"));
        assert_eq!(twin.len(), 1);
    }

    #[test]
    fn test_summary_reflects_record() {
        let record = sample_record("Deck");
        let summary = record.summary();
        assert_eq!(summary.id, record.id);
        assert_eq!(summary.slide_count, 1);
        assert!(summary.updated_at.is_none());
    }
}
