// 📒 Ledger - Caller-owned home of the three registries
//
// Replaces process-wide class registries: every ledger is its own universe
// of creators, works and relations, so tests and callers never share state.

use uuid::Uuid;

use crate::entities::{
    Creator, CreatorRegistry, Relation, RelationRegistry, Work, WorkRegistry,
};
use crate::error::{ValidationError, ValidationResult};

/// Creators, works and the relations between them
#[derive(Default)]
pub struct Ledger {
    creators: CreatorRegistry,
    works: WorkRegistry,
    relations: RelationRegistry,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Validate, register and return a new creator
    pub fn add_creator(&self, name: impl Into<String>) -> ValidationResult<Creator> {
        let creator = Creator::new(name)?;
        self.creators.register(creator.clone());
        Ok(creator)
    }

    /// Validate, register and return a new work
    pub fn add_work(&self, title: impl Into<String>) -> ValidationResult<Work> {
        let work = Work::new(title)?;
        self.works.register(work.clone());
        Ok(work)
    }

    /// Establish a relation from foreign keys (UUID strings).
    ///
    /// Ids must parse and resolve to entities of this ledger; otherwise
    /// nothing is registered.
    pub fn establish_relation_by_ids(
        &self,
        creator_id: &str,
        work_id: &str,
        date: impl Into<String>,
        amount: i64,
    ) -> ValidationResult<Relation> {
        let creator = parse_id(creator_id)
            .and_then(|id| self.creators.find_by_id(id))
            .ok_or_else(|| {
                ValidationError::new(
                    "Relation",
                    "creator",
                    format!("must be a registered Creator, got '{}'", creator_id),
                )
            })?;

        let work = parse_id(work_id)
            .and_then(|id| self.works.find_by_id(id))
            .ok_or_else(|| {
                ValidationError::new(
                    "Relation",
                    "work",
                    format!("must be a registered Work, got '{}'", work_id),
                )
            })?;

        creator.establish_relation(self, &work, date, amount)
    }

    // ========================================================================
    // REGISTRY ACCESS
    // ========================================================================

    pub fn creator_registry(&self) -> &CreatorRegistry {
        &self.creators
    }

    pub fn work_registry(&self) -> &WorkRegistry {
        &self.works
    }

    pub fn relation_registry(&self) -> &RelationRegistry {
        &self.relations
    }

    pub fn creators(&self) -> Vec<Creator> {
        self.creators.all()
    }

    pub fn works(&self) -> Vec<Work> {
        self.works.all()
    }

    pub fn relations(&self) -> Vec<Relation> {
        self.relations.all()
    }

    pub fn creator_count(&self) -> usize {
        self.creators.count()
    }

    pub fn work_count(&self) -> usize {
        self.works.count()
    }

    pub fn relation_count(&self) -> usize {
        self.relations.count()
    }

    pub fn find_creator(&self, id: Uuid) -> Option<Creator> {
        self.creators.find_by_id(id)
    }

    pub fn find_work(&self, id: Uuid) -> Option<Work> {
        self.works.find_by_id(id)
    }

    pub fn find_creator_by_name(&self, name: &str) -> Option<Creator> {
        self.creators.find_by_name(name)
    }

    pub fn find_work_by_title(&self, title: &str) -> Option<Work> {
        self.works.find_by_title(title)
    }
}

fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}

// ============================================================================
// TESTS
// ============================================================================
