// 📝 Relation Entity - The join between a Creator and a Work (a contract)
//
// Problem solved:
// - Many-to-many between creators and works without back-pointers
// - The link itself carries data: a freeform date and a royalty amount
// - The relation registry is the ONLY record that a link exists
//
// Creator and Work are referenced (shared handles), never owned.

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use super::{read, write, Creator, Work};
use crate::error::{non_negative, ValidationResult};
use crate::ledger::Ledger;

// ============================================================================
// RELATION ENTITY
// ============================================================================

#[derive(Clone)]
struct Terms {
    creator: Creator,
    work: Work,
    /// Freeform, no calendar validation
    date: String,
    /// Never negative
    amount: i64,
}

struct RelationInner {
    id: Uuid,
    created_at: DateTime<Utc>,
    terms: RwLock<Terms>,
}

/// Relation Entity
///
/// Normally created through [`Creator::establish_relation`]. Calling
/// [`Relation::new`] directly yields a valid but unregistered relation.
#[derive(Clone)]
pub struct Relation {
    inner: Arc<RelationInner>,
}

impl Relation {
    /// Validate every field, then build. Nothing is registered here.
    pub fn new(
        creator: &Creator,
        work: &Work,
        date: impl Into<String>,
        amount: i64,
    ) -> ValidationResult<Self> {
        let amount = non_negative("Relation", "amount", amount)?;

        Ok(Relation {
            inner: Arc::new(RelationInner {
                id: Uuid::new_v4(),
                created_at: Utc::now(),
                terms: RwLock::new(Terms {
                    creator: creator.clone(),
                    work: work.clone(),
                    date: date.into(),
                    amount,
                }),
            }),
        })
    }

    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    pub fn creator(&self) -> Creator {
        read(&self.inner.terms).creator.clone()
    }

    pub fn work(&self) -> Work {
        read(&self.inner.terms).work.clone()
    }

    pub fn date(&self) -> String {
        read(&self.inner.terms).date.clone()
    }

    pub fn amount(&self) -> i64 {
        read(&self.inner.terms).amount
    }

    // ========================================================================
    // SETTERS (not part of normal use, but kept valid)
    // ========================================================================

    pub fn set_creator(&self, creator: &Creator) {
        write(&self.inner.terms).creator = creator.clone();
    }

    pub fn set_work(&self, work: &Work) {
        write(&self.inner.terms).work = work.clone();
    }

    pub fn set_date(&self, date: impl Into<String>) {
        write(&self.inner.terms).date = date.into();
    }

    pub fn set_amount(&self, amount: i64) -> ValidationResult<()> {
        let amount = non_negative("Relation", "amount", amount)?;
        write(&self.inner.terms).amount = amount;
        Ok(())
    }

    // ========================================================================
    // REGISTRY-WIDE QUERIES
    // ========================================================================

    /// All registered relations on `date`, ascending by amount.
    ///
    /// Equal amounts keep registration order.
    pub fn relations_on_date(ledger: &Ledger, date: &str) -> Vec<Relation> {
        let mut relations = ledger.relation_registry().on_date(date);
        relations.sort_by_key(Relation::amount);
        relations
    }
}

impl PartialEq for Relation {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Relation {}

impl std::hash::Hash for Relation {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Debug for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms = read(&self.inner.terms);
        f.debug_struct("Relation")
            .field("id", &self.inner.id)
            .field("creator", &terms.creator)
            .field("work", &terms.work)
            .field("date", &terms.date)
            .field("amount", &terms.amount)
            .finish()
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Snapshot first: formatting the handles takes their own locks
        let terms = read(&self.inner.terms).clone();
        write!(
            f,
            "Relation(creator={}, work={}, date='{}', amount={})",
            terms.creator, terms.work, terms.date, terms.amount
        )
    }
}

impl Serialize for Relation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let terms = read(&self.inner.terms).clone();
        let mut state = serializer.serialize_struct("Relation", 6)?;
        state.serialize_field("id", &self.inner.id)?;
        state.serialize_field("creator_id", &terms.creator.id())?;
        state.serialize_field("work_id", &terms.work.id())?;
        state.serialize_field("date", &terms.date)?;
        state.serialize_field("amount", &terms.amount)?;
        state.serialize_field("created_at", &self.inner.created_at)?;
        state.end()
    }
}

// ============================================================================
// RELATION REGISTRY
// ============================================================================

/// Ordered, append-only record of every relation in a ledger
#[derive(Default)]
pub struct RelationRegistry {
    relations: Arc<RwLock<Vec<Relation>>>,
}

impl RelationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, relation: Relation) {
        tracing::debug!(
            id = %relation.id(),
            creator = %relation.creator().id(),
            work = %relation.work().id(),
            "registered relation"
        );
        write(&self.relations).push(relation);
    }

    pub fn all(&self) -> Vec<Relation> {
        read(&self.relations).clone()
    }

    pub fn count(&self) -> usize {
        read(&self.relations).len()
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<Relation> {
        read(&self.relations).iter().find(|r| r.id() == id).cloned()
    }

    pub fn by_creator(&self, creator: &Creator) -> Vec<Relation> {
        self.filtered(|terms| terms.creator == *creator)
    }

    pub fn by_work(&self, work: &Work) -> Vec<Relation> {
        self.filtered(|terms| terms.work == *work)
    }

    /// Relations on `date` in registration order (unsorted)
    pub fn on_date(&self, date: &str) -> Vec<Relation> {
        self.filtered(|terms| terms.date == date)
    }

    fn filtered<F>(&self, predicate: F) -> Vec<Relation>
    where
        F: Fn(&Terms) -> bool,
    {
        read(&self.relations)
            .iter()
            .filter(|r| predicate(&*read(&r.inner.terms)))
            .cloned()
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
