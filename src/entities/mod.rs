// Entity Models
// "Identity persists, values change"
//
// Each entity has:
// - Stable identity (UUID) that NEVER changes
// - A shared handle: every clone sees the same current values
// - An append-only registry, owned by a Ledger

pub mod creator;
pub mod work;
pub mod relation;

pub use creator::{Creator, CreatorRegistry};
pub use work::{Work, WorkRegistry};
pub use relation::{Relation, RelationRegistry};

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// Registries only ever append and fields are swapped whole, so a poisoned
// lock still guards consistent data.
pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
