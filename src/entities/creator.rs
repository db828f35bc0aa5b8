// ✍️ Creator Entity - Stable identity + derived views over relations
//
// "Creator name is a VALUE (can change), Creator UUID is IDENTITY (never changes)"
//
// A Creator never stores its relations. Works, totals and contracts are
// computed by scanning the ledger's relation registry on every call.

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use super::{read, write, Relation, Work};
use crate::error::{non_empty, ValidationResult};
use crate::ledger::Ledger;

// ============================================================================
// CREATOR ENTITY
// ============================================================================

struct CreatorInner {
    /// Stable identity (UUID) - NEVER changes
    id: Uuid,

    /// When this creator was registered
    created_at: DateTime<Utc>,

    /// Current name, always non-empty
    name: RwLock<String>,
}

/// Creator Entity (an author)
///
/// Cloning yields another handle to the same creator. Equality and hashing
/// go by identity, so a renamed creator is still equal to its old handles.
#[derive(Clone)]
pub struct Creator {
    inner: Arc<CreatorInner>,
}

impl Creator {
    /// Validating constructor. Does not register; see [`Ledger::add_creator`].
    pub fn new(name: impl Into<String>) -> ValidationResult<Self> {
        let name = name.into();
        non_empty("Creator", "name", &name)?;

        Ok(Creator {
            inner: Arc::new(CreatorInner {
                id: Uuid::new_v4(),
                created_at: Utc::now(),
                name: RwLock::new(name),
            }),
        })
    }

    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    pub fn name(&self) -> String {
        read(&self.inner.name).clone()
    }

    /// Rename. An empty value is rejected and the old name kept.
    pub fn set_name(&self, value: impl Into<String>) -> ValidationResult<()> {
        let value = value.into();
        non_empty("Creator", "name", &value)?;
        *write(&self.inner.name) = value;
        Ok(())
    }

    // ========================================================================
    // RELATION VIEWS (computed, never cached)
    // ========================================================================

    /// All relations signed by this creator, in registration order
    pub fn relations(&self, ledger: &Ledger) -> Vec<Relation> {
        ledger.relation_registry().by_creator(self)
    }

    /// Works of this creator, one entry per relation (duplicates possible)
    pub fn works(&self, ledger: &Ledger) -> Vec<Work> {
        self.relations(ledger).iter().map(Relation::work).collect()
    }

    /// Create and register a new relation between this creator and `work`.
    ///
    /// No uniqueness check: identical calls produce distinct relations.
    pub fn establish_relation(
        &self,
        ledger: &Ledger,
        work: &Work,
        date: impl Into<String>,
        amount: i64,
    ) -> ValidationResult<Relation> {
        let relation = Relation::new(self, work, date, amount)?;
        ledger.relation_registry().register(relation.clone());
        Ok(relation)
    }

    /// Sum of amounts over this creator's relations (0 when there are none)
    ///
    /// Widened to i128: no in-memory number of i64 amounts can overflow it.
    pub fn total_amount(&self, ledger: &Ledger) -> i128 {
        self.relations(ledger)
            .iter()
            .map(|relation| i128::from(relation.amount()))
            .sum()
    }
}

impl PartialEq for Creator {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Creator {}

impl std::hash::Hash for Creator {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Debug for Creator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Creator")
            .field("id", &self.inner.id)
            .field("name", &*read(&self.inner.name))
            .finish()
    }
}

impl fmt::Display for Creator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Creator(name='{}')", read(&self.inner.name))
    }
}

impl Serialize for Creator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Creator", 3)?;
        state.serialize_field("id", &self.inner.id)?;
        state.serialize_field("name", &*read(&self.inner.name))?;
        state.serialize_field("created_at", &self.inner.created_at)?;
        state.end()
    }
}

// ============================================================================
// CREATOR REGISTRY
// ============================================================================

/// Registry of all creators of one ledger
///
/// Append-only: creators are registered in construction order and never
/// removed.
#[derive(Default)]
pub struct CreatorRegistry {
    creators: Arc<RwLock<Vec<Creator>>>,
}

impl CreatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a creator (append-only)
    pub fn register(&self, creator: Creator) {
        tracing::debug!(id = %creator.id(), "registered creator");
        write(&self.creators).push(creator);
    }

    /// All creators in registration order
    pub fn all(&self) -> Vec<Creator> {
        read(&self.creators).clone()
    }

    pub fn count(&self) -> usize {
        read(&self.creators).len()
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<Creator> {
        read(&self.creators).iter().find(|c| c.id() == id).cloned()
    }

    /// First creator (in registration order) whose current name matches exactly
    pub fn find_by_name(&self, name: &str) -> Option<Creator> {
        read(&self.creators)
            .iter()
            .find(|c| *read(&c.inner.name) == name)
            .cloned()
    }
}

// ============================================================================
// TESTS
// ============================================================================
