//! Per-type metadata cache.
//!
//! # Role
//!
//! [`Metadata`] is the immutable product of one discovery pass over an enumeration. It owns the
//! ordered value, name and member tables, the value and name indices, and the
//! [`UnderlyingOperation`] selected by the storage representation. Every facade query is a read
//! against one of these.
//!
//! # Build Pipeline
//!
//! 1. Copy values, names and members from the discovery list, preserving declaration order.
//! 2. Find the first-declared minimum and maximum members.
//! 3. Record emptiness and the flags marker.
//! 4. Deduplicate members by value, first declaration wins.
//! 5. Index distinct values and every declared name.
//! 6. Build the operation set from the bounds and distinct values.
//! 7. Take continuity from the operation set.
//!
//! # Invariants
//!
//! - `values`, `names` and `members` have equal length and are positionally consistent.
//! - `by_value` holds exactly one entry per distinct value, pointing at its first declaration.
//! - `by_name` holds exactly one entry per declared name.
//! - Continuity is a lookup shortcut only: [`Metadata::contains_repr`] and
//!   [`Metadata::member_by_repr`] agree for every value of the representation.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::enumeration::{Discovery, Enumeration};
use crate::member::Member;
use crate::underlying::{Repr, UnderlyingOperation};

/// Immutable lookup tables for one enumeration.
pub struct Metadata<E: Enumeration> {
	type_name: &'static str,
	values: Box<[E]>,
	names: Box<[&'static str]>,
	members: Box<[Member<E>]>,
	distinct: Box<[Member<E>]>,
	min: Option<E>,
	max: Option<E>,
	is_flags: bool,
	by_value: FxHashMap<E::Repr, usize>,
	by_name: FxHashMap<&'static str, usize>,
	operation: UnderlyingOperation<E::Repr>,
}

impl<E: Enumeration> Metadata<E> {
	/// Builds the cache from the type's own discovery list.
	pub fn build() -> Self {
		Self::from_discovery(core::any::type_name::<E>(), E::discover())
	}

	/// Builds the cache from an explicit discovery result.
	pub fn from_discovery(type_name: &'static str, discovery: Discovery<E>) -> Self {
		let is_flags = discovery.is_flags();
		let members: Box<[Member<E>]> = discovery.into_members().into();

		let values: Box<[E]> = members.iter().map(Member::value).collect();
		let names: Box<[&'static str]> = members.iter().map(Member::name).collect();

		let mut min: Option<&Member<E>> = None;
		let mut max: Option<&Member<E>> = None;
		for member in members.iter() {
			if min.is_none_or(|m| member.repr() < m.repr()) {
				min = Some(member);
			}
			if max.is_none_or(|m| member.repr() > m.repr()) {
				max = Some(member);
			}
		}
		let bounds = min.zip(max).map(|(lo, hi)| (lo.repr(), hi.repr()));
		let (min, max) = (min.map(Member::value), max.map(Member::value));

		let mut by_value = FxHashMap::with_capacity_and_hasher(members.len(), Default::default());
		let mut distinct = Vec::with_capacity(members.len());
		for (idx, member) in members.iter().enumerate() {
			if let Entry::Vacant(slot) = by_value.entry(member.repr()) {
				slot.insert(idx);
				distinct.push(*member);
			}
		}

		let mut by_name = FxHashMap::with_capacity_and_hasher(members.len(), Default::default());
		for (idx, member) in members.iter().enumerate() {
			if let Some(&first) = by_name.get(member.name()) {
				tracing::warn!(
					enum_name = type_name,
					name = member.name(),
					first,
					duplicate = idx,
					"duplicate member name ignored"
				);
				continue;
			}
			by_name.insert(member.name(), idx);
		}

		let distinct_values: Vec<E::Repr> = distinct.iter().map(Member::repr).collect();
		let operation = UnderlyingOperation::new(bounds, &distinct_values);

		tracing::debug!(
			enum_name = type_name,
			repr = %operation.repr(),
			members = members.len(),
			distinct = distinct.len(),
			continuous = operation.is_continuous(),
			flags = is_flags,
			"built enum metadata"
		);

		Self {
			type_name,
			values,
			names,
			members,
			distinct: distinct.into(),
			min,
			max,
			is_flags,
			by_value,
			by_name,
			operation,
		}
	}

	/// Returns the type name used in diagnostics.
	#[inline]
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// Returns the declared values in declaration order.
	#[inline]
	pub fn values(&self) -> &[E] {
		&self.values
	}

	/// Returns the declared names in declaration order.
	#[inline]
	pub fn names(&self) -> &[&'static str] {
		&self.names
	}

	/// Returns all declared members in declaration order, aliases included.
	#[inline]
	pub fn members(&self) -> &[Member<E>] {
		&self.members
	}

	/// Returns one member per distinct value, first declaration first.
	#[inline]
	pub fn distinct_members(&self) -> &[Member<E>] {
		&self.distinct
	}

	/// Returns the number of declared members.
	#[inline]
	pub fn len(&self) -> usize {
		self.members.len()
	}

	/// Returns true if no constants are declared.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	/// Returns the smallest declared value.
	#[inline]
	pub fn min_value(&self) -> Option<E> {
		self.min
	}

	/// Returns the largest declared value.
	#[inline]
	pub fn max_value(&self) -> Option<E> {
		self.max
	}

	/// Returns true when the type carries the flags marker.
	#[inline]
	pub fn is_flags(&self) -> bool {
		self.is_flags
	}

	/// Returns true when the distinct values form a gap-free run.
	#[inline]
	pub fn is_continuous(&self) -> bool {
		self.operation.is_continuous()
	}

	/// Returns the storage representation.
	#[inline]
	pub fn repr(&self) -> Repr {
		self.operation.repr()
	}

	/// Returns the representation-specific operation set.
	#[inline]
	pub fn operation(&self) -> &UnderlyingOperation<E::Repr> {
		&self.operation
	}

	/// Looks up the first-declared member carrying `value`.
	#[inline]
	pub fn member(&self, value: E) -> Option<&Member<E>> {
		self.member_by_repr(value.to_repr())
	}

	/// Looks up the first-declared member carrying the underlying value `repr`.
	#[inline]
	pub fn member_by_repr(&self, repr: E::Repr) -> Option<&Member<E>> {
		let idx = *self.by_value.get(&repr)?;
		Some(&self.members[idx])
	}

	/// Returns true when `value` is declared.
	#[inline]
	pub fn contains(&self, value: E) -> bool {
		self.contains_repr(value.to_repr())
	}

	/// Returns true when the underlying value `repr` is declared.
	///
	/// Continuous types answer with a range check instead of hashing.
	#[inline]
	pub fn contains_repr(&self, repr: E::Repr) -> bool {
		if self.operation.is_continuous() {
			self.operation.in_between(repr)
		} else {
			self.by_value.contains_key(&repr)
		}
	}

	/// Looks up a member by exact name.
	#[inline]
	pub fn find_name(&self, name: &str) -> Option<&Member<E>> {
		let idx = *self.by_name.get(name)?;
		Some(&self.members[idx])
	}

	/// Looks up the first member, in declaration order, whose name matches ignoring case.
	///
	/// Non-ASCII names compare by full Unicode lowercase mapping, so the Kelvin sign matches `k`.
	pub fn find_name_ignore_case(&self, name: &str) -> Option<&Member<E>> {
		self.members.iter().find(|member| eq_ignore_case(member.name(), name))
	}
}

impl<E: Enumeration> core::fmt::Debug for Metadata<E> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Metadata")
			.field("type_name", &self.type_name)
			.field("repr", &self.repr())
			.field("members", &self.members)
			.field("is_flags", &self.is_flags)
			.field("is_continuous", &self.is_continuous())
			.finish_non_exhaustive()
	}
}

/// Compares two names ignoring case, without allocating.
///
/// ASCII names compare with [`str::eq_ignore_ascii_case`]. Anything else compares the full
/// [`char::to_lowercase`] mappings of both sides, which is broader than simple case folding:
/// multi-character lowercase expansions apply, and compatibility characters such as the Kelvin
/// sign (`U+212A`) match their ASCII counterparts (`k`). Uppercase-only expansions such as
/// `ß` → `SS` are not applied.
fn eq_ignore_case(a: &str, b: &str) -> bool {
	if a.is_ascii() && b.is_ascii() {
		return a.eq_ignore_ascii_case(b);
	}
	a.chars()
		.flat_map(char::to_lowercase)
		.eq(b.chars().flat_map(char::to_lowercase))
}
