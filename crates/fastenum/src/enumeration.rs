use core::fmt;

use crate::member::Member;
use crate::metadata::Metadata;
use crate::underlying::Underlying;

/// A closed set of named integral constants.
///
/// Usually implemented through `#[derive(Enumeration)]` or [`constants!`](crate::constants),
/// both of which also override [`Enumeration::metadata`] with a per-type static.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, fastenum::Enumeration)]
/// #[repr(u8)]
/// enum Fruit {
///     Apple,
///     Lemon,
///     Melon,
/// }
///
/// assert_eq!(fastenum::parse::<Fruit>("Lemon")?, Fruit::Lemon);
/// assert!(fastenum::is_continuous::<Fruit>());
/// ```
pub trait Enumeration: Copy + Eq + fmt::Debug + Send + Sync + 'static {
	/// Storage representation of the constants.
	type Repr: Underlying;

	/// Returns the declared constants in declaration order, plus the flags marker.
	///
	/// Called once, when the metadata cache for the type is built. It may read the metadata of
	/// other enumerations but never its own.
	fn discover() -> Discovery<Self>;

	/// Returns the underlying integer value.
	fn to_repr(self) -> Self::Repr;

	/// Returns the metadata cache for this type, building it on first use.
	///
	/// The default resolves through the process-wide registry, which takes its shared lock once per
	/// thread per type. Implementations may override it with a `OnceLock` static to skip the
	/// registry entirely.
	fn metadata() -> &'static Metadata<Self> {
		crate::registry::resolve::<Self>()
	}
}

/// Declared constants of an enumeration, as reported by [`Enumeration::discover`].
#[derive(Debug, Clone)]
pub struct Discovery<E: Enumeration> {
	members: Vec<Member<E>>,
	is_flags: bool,
}

impl<E: Enumeration> Discovery<E> {
	/// Creates a discovery result from members in declaration order.
	pub fn new(members: Vec<Member<E>>) -> Self {
		Self {
			members,
			is_flags: false,
		}
	}

	/// Sets the flags marker.
	pub fn flags(mut self, is_flags: bool) -> Self {
		self.is_flags = is_flags;
		self
	}

	/// Returns the declared members.
	pub fn members(&self) -> &[Member<E>] {
		&self.members
	}

	/// Returns true when the type is marked as a bit-flag set.
	pub fn is_flags(&self) -> bool {
		self.is_flags
	}

	/// Consumes the discovery result, returning its members.
	pub fn into_members(self) -> Vec<Member<E>> {
		self.members
	}
}
