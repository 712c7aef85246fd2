//! Integer representation operations.
//!
//! # Role
//!
//! Everything that depends on the storage width or signedness of an enumeration lives here: range
//! checks, literal parsing, and continuity detection. [`UnderlyingOperation`] is written once and
//! instantiated for each of the eight supported representations through the sealed
//! [`Underlying`] trait.
//!
//! # Invariants
//!
//! - Span arithmetic never overflows. Values are widened to `i128`, which holds both `i64::MIN`
//!   and `u64::MAX`.
//! - An empty value set is never continuous.
//! - Literal parsing is bounds-checked and does not consult membership.

use core::fmt;
use core::hash::Hash;
use core::str::FromStr;

use crate::error::EnumError;

/// Storage representation tag for an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Repr {
	I8,
	U8,
	I16,
	U16,
	I32,
	U32,
	I64,
	U64,
}

impl Repr {
	/// All supported representations, narrowest first.
	pub const ALL: [Repr; 8] = [Repr::I8, Repr::U8, Repr::I16, Repr::U16, Repr::I32, Repr::U32, Repr::I64, Repr::U64];

	/// Returns the Rust primitive name (`"u8"`, `"i64"`, ...).
	pub const fn as_str(self) -> &'static str {
		match self {
			Repr::I8 => "i8",
			Repr::U8 => "u8",
			Repr::I16 => "i16",
			Repr::U16 => "u16",
			Repr::I32 => "i32",
			Repr::U32 => "u32",
			Repr::I64 => "i64",
			Repr::U64 => "u64",
		}
	}

	/// Returns the storage width in bits.
	pub const fn bits(self) -> u32 {
		match self {
			Repr::I8 | Repr::U8 => 8,
			Repr::I16 | Repr::U16 => 16,
			Repr::I32 | Repr::U32 => 32,
			Repr::I64 | Repr::U64 => 64,
		}
	}

	/// Returns true for the signed representations.
	pub const fn is_signed(self) -> bool {
		matches!(self, Repr::I8 | Repr::I16 | Repr::I32 | Repr::I64)
	}
}

impl fmt::Display for Repr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Repr {
	type Err = EnumError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Repr::ALL
			.into_iter()
			.find(|repr| repr.as_str() == s)
			.ok_or_else(|| EnumError::UnsupportedRepr { name: s.to_string() })
	}
}

// Only the eight integer types below may back an enumeration.
mod sealed {
	pub trait Sealed {}
}

/// Integer type usable as the storage representation of an enumeration.
///
/// Sealed: implemented for `i8`, `u8`, `i16`, `u16`, `i32`, `u32`, `i64` and `u64` only.
pub trait Underlying: sealed::Sealed + Copy + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
	/// Representation tag for this type.
	const REPR: Repr;

	/// Widens the value losslessly into `i128`.
	fn widen(self) -> i128;

	/// Parses a decimal literal with an optional leading sign.
	///
	/// Out-of-range magnitudes fail rather than wrap.
	fn parse_literal(text: &str) -> Option<Self>;
}

macro_rules! impl_underlying {
	($($ty:ty => $repr:ident),* $(,)?) => {
		$(
			impl sealed::Sealed for $ty {}

			impl Underlying for $ty {
				const REPR: Repr = Repr::$repr;

				#[inline]
				fn widen(self) -> i128 {
					i128::from(self)
				}

				#[inline]
				fn parse_literal(text: &str) -> Option<Self> {
					<$ty as FromStr>::from_str(text).ok()
				}
			}
		)*
	};
}

impl_underlying! {
	i8 => I8,
	u8 => U8,
	i16 => I16,
	u16 => U16,
	i32 => I32,
	u32 => U32,
	i64 => I64,
	u64 => U64,
}

/// Range, membership and parsing operations for one representation.
///
/// Built once per enumeration from its extreme values and distinct declared values.
#[derive(Debug, Clone)]
pub struct UnderlyingOperation<U: Underlying> {
	bounds: Option<(U, U)>,
	sorted: Box<[U]>,
	continuous: bool,
}

impl<U: Underlying> UnderlyingOperation<U> {
	/// Creates the operation set for the given bounds and distinct values.
	///
	/// `bounds` must be `None` exactly when `distinct` is empty, and `distinct` must not contain
	/// duplicates.
	pub fn new(bounds: Option<(U, U)>, distinct: &[U]) -> Self {
		let mut sorted: Box<[U]> = distinct.into();
		sorted.sort_unstable();

		let continuous = match bounds {
			None => false,
			Some((min, max)) => {
				let span = max.widen() - min.widen();
				span + 1 == sorted.len() as i128
			}
		};

		Self { bounds, sorted, continuous }
	}

	/// Returns the representation this operation set works on.
	#[inline]
	pub fn repr(&self) -> Repr {
		U::REPR
	}

	/// Returns the smallest declared value.
	#[inline]
	pub fn min(&self) -> Option<U> {
		self.bounds.map(|(min, _)| min)
	}

	/// Returns the largest declared value.
	#[inline]
	pub fn max(&self) -> Option<U> {
		self.bounds.map(|(_, max)| max)
	}

	/// Returns true when the distinct values form a gap-free run.
	#[inline]
	pub fn is_continuous(&self) -> bool {
		self.continuous
	}

	/// Returns true when `value` lies within `[min, max]`.
	///
	/// Only equivalent to membership when [`Self::is_continuous`] holds.
	#[inline]
	pub fn in_between(&self, value: U) -> bool {
		match self.bounds {
			Some((min, max)) => min <= value && value <= max,
			None => false,
		}
	}

	/// Returns true when `value` is one of the declared values.
	pub fn is_defined(&self, value: U) -> bool {
		if self.continuous {
			self.in_between(value)
		} else {
			self.sorted.binary_search(&value).is_ok()
		}
	}

	/// Parses a numeric literal in this representation.
	#[inline]
	pub fn try_parse(&self, text: &str) -> Option<U> {
		U::parse_literal(text)
	}
}
