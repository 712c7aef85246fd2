use core::cmp::Ordering;
use core::fmt;

use crate::enumeration::Enumeration;
use crate::error::EnumError;

/// One declared constant of an enumeration.
///
/// Equality (`==`) is identity: both name and value must match. Use [`Member::same_value`] to
/// compare by value only, which treats aliases as equal. The label is descriptive and takes no
/// part in either comparison.
#[derive(Clone, Copy)]
pub struct Member<E: Enumeration> {
	name: &'static str,
	value: E,
	label: Option<&'static str>,
}

impl<E: Enumeration> Member<E> {
	/// Creates a member from a name and an already known value.
	pub const fn new(name: &'static str, value: E) -> Self {
		Self { name, value, label: None }
	}

	/// Attaches a display label.
	pub const fn with_label(mut self, label: &'static str) -> Self {
		self.label = Some(label);
		self
	}

	/// Creates a member by resolving `name` against the declared constants of `E`.
	///
	/// This consults the discovery list directly and does not touch the metadata cache.
	pub fn resolve(name: &str) -> Result<Self, EnumError> {
		E::discover()
			.into_members()
			.into_iter()
			.find(|member| member.name == name)
			.ok_or_else(|| EnumError::NotAMember {
				enum_name: core::any::type_name::<E>(),
				value: name.to_string(),
			})
	}

	/// Returns the declared name.
	#[inline]
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Returns the declared value.
	#[inline]
	pub fn value(&self) -> E {
		self.value
	}

	/// Returns the display label, if one was declared.
	#[inline]
	pub fn label(&self) -> Option<&'static str> {
		self.label
	}

	/// Returns the underlying integer value.
	#[inline]
	pub fn repr(&self) -> E::Repr {
		self.value.to_repr()
	}

	/// Returns true when both members carry the same underlying value.
	#[inline]
	pub fn same_value(&self, other: &Self) -> bool {
		self.repr() == other.repr()
	}
}

impl<E: Enumeration> PartialEq for Member<E> {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name && self.same_value(other)
	}
}

impl<E: Enumeration> Eq for Member<E> {}

impl<E: Enumeration> PartialOrd for Member<E> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<E: Enumeration> Ord for Member<E> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.repr().cmp(&other.repr()).then_with(|| self.name.cmp(other.name))
	}
}

impl<E: Enumeration> fmt::Debug for Member<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut s = f.debug_struct("Member");
		s.field("name", &self.name).field("value", &self.repr());
		if let Some(label) = self.label {
			s.field("label", &label);
		}
		s.finish()
	}
}

impl<E: Enumeration> fmt::Display for Member<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}
