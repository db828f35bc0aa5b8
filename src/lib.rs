// Royalty Ledger - Core Library
// Creators, works and the dated, valued relations between them.
// Exposes all modules for use in the CLI and tests

pub mod error;
pub mod entities;
pub mod ledger;
pub mod seed;
pub mod report;

// Re-export commonly used types
pub use error::{LedgerError, Result, ValidationError, ValidationResult};
pub use entities::{
    Creator, CreatorRegistry,
    Work, WorkRegistry,
    Relation, RelationRegistry,
};
pub use ledger::Ledger;
pub use seed::{Seed, SeedRelation, SeedSummary};
