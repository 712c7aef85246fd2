//! Process-wide metadata registry keyed by type identity.
//!
//! # Role
//!
//! Backs the default [`Enumeration::metadata`] for implementations that do not carry their own
//! `OnceLock` static. The shared table maps each `TypeId` to a leaked per-type
//! `OnceLock<Metadata<E>>` slot. The table lock only guards slot creation; the metadata itself is
//! built by the slot's `get_or_init` after the guard is released.
//!
//! Each thread memoizes the slots it has already seen, so repeat reads go through a thread-local
//! map and the slot's own atomic state without touching the shared lock.
//!
//! # Invariants
//!
//! - At most one slot is ever created per `TypeId`: the write path re-checks the table after
//!   acquiring the lock.
//! - At most one [`Metadata`] is ever built per slot, and a published value is never replaced.
//! - No table guard is held while `discover` runs, so discovery may read other enumerations.
//!   Discovery must not read its own type, directly or through a cycle.

use core::any::{Any, TypeId};
use std::cell::RefCell;
use std::sync::{LazyLock, OnceLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::enumeration::Enumeration;
use crate::metadata::Metadata;

type Slot = &'static (dyn Any + Send + Sync);

static REGISTRY: LazyLock<RwLock<FxHashMap<TypeId, Slot>>> = LazyLock::new(|| RwLock::new(FxHashMap::default()));

thread_local! {
	static SEEN: RefCell<FxHashMap<TypeId, Slot>> = RefCell::new(FxHashMap::default());
}

/// Returns the cached metadata for `E`, building it on first access.
pub fn resolve<E: Enumeration>() -> &'static Metadata<E> {
	slot::<E>().get_or_init(Metadata::build)
}

/// Returns the number of types that own a registry slot.
pub fn len() -> usize {
	REGISTRY.read().len()
}

fn slot<E: Enumeration>() -> &'static OnceLock<Metadata<E>> {
	let key = TypeId::of::<E>();

	if let Some(slot) = SEEN.try_with(|seen| seen.borrow().get(&key).copied()).ok().flatten() {
		return downcast(slot);
	}

	let slot = shared_slot::<E>(key);
	// Fails only during thread teardown; the next call falls back to the shared table.
	let _ = SEEN.try_with(|seen| seen.borrow_mut().insert(key, slot));
	downcast(slot)
}

fn shared_slot<E: Enumeration>(key: TypeId) -> Slot {
	if let Some(&slot) = REGISTRY.read().get(&key) {
		return slot;
	}

	let mut table = REGISTRY.write();
	if let Some(&slot) = table.get(&key) {
		return slot;
	}

	let slot: &'static OnceLock<Metadata<E>> = Box::leak(Box::new(OnceLock::new()));
	table.insert(key, slot);
	tracing::debug!(enum_name = core::any::type_name::<E>(), slots = table.len(), "registered enum metadata slot");
	slot
}

fn downcast<E: Enumeration>(slot: Slot) -> &'static OnceLock<Metadata<E>> {
	match slot.downcast_ref::<OnceLock<Metadata<E>>>() {
		Some(slot) => slot,
		None => unreachable!(
			"registry slot for {} holds a different metadata type",
			core::any::type_name::<E>()
		),
	}
}
