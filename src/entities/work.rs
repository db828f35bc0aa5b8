// 📚 Work Entity - The other side of the relation
//
// Mirror of Creator: stable UUID identity, mutable title, views over the
// relation registry instead of stored back-pointers.

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use super::{read, write, Creator, Relation};
use crate::error::{non_empty, ValidationResult};
use crate::ledger::Ledger;

// ============================================================================
// WORK ENTITY
// ============================================================================

struct WorkInner {
    id: Uuid,
    created_at: DateTime<Utc>,
    title: RwLock<String>,
}

/// Work Entity (a book). Clones share state; equality is identity.
#[derive(Clone)]
pub struct Work {
    inner: Arc<WorkInner>,
}

impl Work {
    /// Validating constructor. Does not register; see [`Ledger::add_work`].
    pub fn new(title: impl Into<String>) -> ValidationResult<Self> {
        let title = title.into();
        non_empty("Work", "title", &title)?;

        Ok(Work {
            inner: Arc::new(WorkInner {
                id: Uuid::new_v4(),
                created_at: Utc::now(),
                title: RwLock::new(title),
            }),
        })
    }

    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    pub fn title(&self) -> String {
        read(&self.inner.title).clone()
    }

    pub fn set_title(&self, value: impl Into<String>) -> ValidationResult<()> {
        let value = value.into();
        non_empty("Work", "title", &value)?;
        *write(&self.inner.title) = value;
        Ok(())
    }

    /// All relations on this work, in registration order
    pub fn relations(&self, ledger: &Ledger) -> Vec<Relation> {
        ledger.relation_registry().by_work(self)
    }

    /// Creators of this work, one entry per relation (duplicates possible)
    pub fn creators(&self, ledger: &Ledger) -> Vec<Creator> {
        self.relations(ledger).iter().map(Relation::creator).collect()
    }
}

impl PartialEq for Work {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Work {}

impl std::hash::Hash for Work {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Debug for Work {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Work")
            .field("id", &self.inner.id)
            .field("title", &*read(&self.inner.title))
            .finish()
    }
}

impl fmt::Display for Work {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Work(title='{}')", read(&self.inner.title))
    }
}

impl Serialize for Work {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Work", 3)?;
        state.serialize_field("id", &self.inner.id)?;
        state.serialize_field("title", &*read(&self.inner.title))?;
        state.serialize_field("created_at", &self.inner.created_at)?;
        state.end()
    }
}

// ============================================================================
// WORK REGISTRY
// ============================================================================

#[derive(Default)]
pub struct WorkRegistry {
    works: Arc<RwLock<Vec<Work>>>,
}

impl WorkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, work: Work) {
        tracing::debug!(id = %work.id(), "registered work");
        write(&self.works).push(work);
    }

    pub fn all(&self) -> Vec<Work> {
        read(&self.works).clone()
    }

    pub fn count(&self) -> usize {
        read(&self.works).len()
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<Work> {
        read(&self.works).iter().find(|w| w.id() == id).cloned()
    }

    pub fn find_by_title(&self, title: &str) -> Option<Work> {
        read(&self.works)
            .iter()
            .find(|w| *read(&w.inner.title) == title)
            .cloned()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_creation() {
        let work = Work::new("Book1").unwrap();
        assert_eq!(work.title(), "Book1");
        assert_eq!(work.to_string(), "Work(title='Book1')");
    }

    #[test]
    fn test_set_title_validation() {
        let work = Work::new("Book1").unwrap();

        let err = work.set_title("").unwrap_err();
        assert_eq!(err.entity, "Work");
        assert_eq!(err.field, "title");
        assert_eq!(work.title(), "Book1");

        work.set_title("Book2").unwrap();
        assert_eq!(work.title(), "Book2");
    }

    #[test]
    fn test_empty_title_rejected() {
        assert!(Work::new("").is_err());
    }

    #[test]
    fn test_registry() {
        let registry = WorkRegistry::new();
        let book1 = Work::new("Book1").unwrap();
        let book2 = Work::new("Book2").unwrap();

        registry.register(book1.clone());
        registry.register(book2.clone());

        assert_eq!(registry.count(), 2);
        assert_eq!(registry.all(), vec![book1.clone(), book2.clone()]);
        assert_eq!(registry.find_by_title("Book2"), Some(book2));
        assert_eq!(registry.find_by_id(book1.id()), Some(book1));
        assert!(registry.find_by_title("Book3").is_none());
    }
}
