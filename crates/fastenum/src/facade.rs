//! Query and parse operations over an enumeration's cached metadata.
//!
//! Every function here resolves `E::metadata()` (building it on first use) and answers from the
//! prebuilt tables. None of them allocate on success.

use core::any::Any;

use crate::enumeration::Enumeration;
use crate::error::EnumError;
use crate::member::Member;
use crate::metadata::Metadata;
use crate::underlying::{Repr, Underlying};

/// Returns the metadata cache for `E`.
#[inline]
pub fn metadata<E: Enumeration>() -> &'static Metadata<E> {
	E::metadata()
}

/// Returns the declared values of `E` in declaration order.
#[inline]
pub fn values<E: Enumeration>() -> &'static [E] {
	E::metadata().values()
}

/// Returns the declared names of `E` in declaration order.
#[inline]
pub fn names<E: Enumeration>() -> &'static [&'static str] {
	E::metadata().names()
}

/// Returns the declared members of `E` in declaration order, aliases included.
#[inline]
pub fn members<E: Enumeration>() -> &'static [Member<E>] {
	E::metadata().members()
}

/// Returns one member per distinct value of `E`.
#[inline]
pub fn distinct_members<E: Enumeration>() -> &'static [Member<E>] {
	E::metadata().distinct_members()
}

/// Returns the number of declared members of `E`.
#[inline]
pub fn len<E: Enumeration>() -> usize {
	E::metadata().len()
}

/// Returns true if `E` declares no constants.
#[inline]
pub fn is_empty<E: Enumeration>() -> bool {
	E::metadata().is_empty()
}

/// Returns true if `E` carries the flags marker.
#[inline]
pub fn is_flags<E: Enumeration>() -> bool {
	E::metadata().is_flags()
}

/// Returns true if the distinct values of `E` form a gap-free run.
#[inline]
pub fn is_continuous<E: Enumeration>() -> bool {
	E::metadata().is_continuous()
}

/// Returns the storage representation of `E`.
#[inline]
pub fn repr<E: Enumeration>() -> Repr {
	<E::Repr as Underlying>::REPR
}

/// Returns the smallest declared value of `E`, or `None` when `E` is empty.
#[inline]
pub fn min_value<E: Enumeration>() -> Option<E> {
	E::metadata().min_value()
}

/// Returns the largest declared value of `E`, or `None` when `E` is empty.
#[inline]
pub fn max_value<E: Enumeration>() -> Option<E> {
	E::metadata().max_value()
}

/// Returns the first-declared member carrying `value`.
pub fn get_member<E: Enumeration>(value: E) -> Result<&'static Member<E>, EnumError> {
	let meta = E::metadata();
	meta.member(value).ok_or_else(|| EnumError::NotAMember {
		enum_name: meta.type_name(),
		value: value.to_repr().to_string(),
	})
}

/// Returns the name of the first-declared member carrying `value`.
#[inline]
pub fn get_name<E: Enumeration>(value: E) -> Result<&'static str, EnumError> {
	get_member(value).map(Member::name)
}

/// Returns true if `value` is declared.
#[inline]
pub fn is_defined<E: Enumeration>(value: E) -> bool {
	E::metadata().contains(value)
}

/// Returns true if the raw number `value` is declared.
///
/// `N` must be exactly the storage type of `E`. Any other integer type is rejected with
/// [`EnumError::ReprMismatch`] rather than widened or narrowed.
pub fn is_defined_repr<E: Enumeration, N: Underlying>(value: N) -> Result<bool, EnumError> {
	let meta = E::metadata();
	match (&value as &dyn Any).downcast_ref::<E::Repr>() {
		Some(&repr) => Ok(meta.operation().is_defined(repr)),
		None => Err(EnumError::ReprMismatch {
			enum_name: meta.type_name(),
			expected: <E::Repr as Underlying>::REPR,
			found: N::REPR,
		}),
	}
}

/// Returns true if `name` is a declared member name (case-sensitive).
#[inline]
pub fn is_defined_name<E: Enumeration>(name: &str) -> bool {
	E::metadata().find_name(name).is_some()
}

/// Parses a member name or a numeric literal into a declared value.
pub fn parse<E: Enumeration>(text: &str) -> Result<E, EnumError> {
	parse_with(E::metadata(), text, false)
}

/// Parses like [`parse`], matching names without regard to case.
pub fn parse_ignore_case<E: Enumeration>(text: &str) -> Result<E, EnumError> {
	parse_with(E::metadata(), text, true)
}

/// Parses a member name or a numeric literal, returning `None` on failure.
#[inline]
pub fn try_parse<E: Enumeration>(text: &str) -> Option<E> {
	try_parse_with(E::metadata(), text, false)
}

/// Parses like [`try_parse`], matching names without regard to case.
#[inline]
pub fn try_parse_ignore_case<E: Enumeration>(text: &str) -> Option<E> {
	try_parse_with(E::metadata(), text, true)
}

/// Returns true when `text` is routed to numeric parsing.
///
/// Only the first character is inspected.
#[inline]
fn is_numeric_start(text: &str) -> bool {
	matches!(text.as_bytes().first(), Some(b'0'..=b'9' | b'+' | b'-'))
}

fn try_parse_with<E: Enumeration>(meta: &Metadata<E>, text: &str, ignore_case: bool) -> Option<E> {
	if is_numeric_start(text) {
		let repr = meta.operation().try_parse(text)?;
		return meta.member_by_repr(repr).map(Member::value);
	}
	find_name(meta, text, ignore_case).map(Member::value)
}

fn parse_with<E: Enumeration>(meta: &Metadata<E>, text: &str, ignore_case: bool) -> Result<E, EnumError> {
	if text.is_empty() {
		return Err(EnumError::EmptyInput {
			enum_name: meta.type_name(),
		});
	}

	let not_a_member = || EnumError::NotAMember {
		enum_name: meta.type_name(),
		value: text.to_string(),
	};

	if is_numeric_start(text) {
		let repr = meta
			.operation()
			.try_parse(text)
			.ok_or_else(|| EnumError::MalformedLiteral {
				enum_name: meta.type_name(),
				repr: meta.repr(),
				text: text.to_string(),
			})?;
		return meta.member_by_repr(repr).map(Member::value).ok_or_else(not_a_member);
	}

	find_name(meta, text, ignore_case).map(Member::value).ok_or_else(not_a_member)
}

#[inline]
fn find_name<'a, E: Enumeration>(meta: &'a Metadata<E>, name: &str, ignore_case: bool) -> Option<&'a Member<E>> {
	if ignore_case {
		meta.find_name_ignore_case(name)
	} else {
		meta.find_name(name)
	}
}

/// Instance-style access to the facade operations.
///
/// Blanket-implemented for every [`Enumeration`].
pub trait EnumExt: Enumeration {
	/// Returns the first-declared member carrying this value.
	fn member(self) -> Option<&'static Member<Self>> {
		Self::metadata().member(self)
	}

	/// Returns the name of the first-declared member carrying this value.
	fn name(self) -> Option<&'static str> {
		self.member().map(Member::name)
	}

	/// Returns the display label of the first-declared member carrying this value.
	fn label(self) -> Option<&'static str> {
		self.member().and_then(Member::label)
	}

	/// Returns true if this value is declared.
	fn is_defined(self) -> bool {
		Self::metadata().contains(self)
	}
}

impl<E: Enumeration> EnumExt for E {}

#[cfg(test)]
mod tests;
