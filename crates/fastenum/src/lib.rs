//! Build-once metadata and fast lookups for integral enumerations.
//!
//! An enumeration is a closed set of named integer constants. For each such type this crate
//! builds, exactly once, an immutable [`Metadata`] cache holding the ordered values, names and
//! members, value and name indices, bounds, and the continuity and flags properties. All queries
//! afterwards are lock-free reads of that cache.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`Enumeration`] | Trait implemented by enumerations; supplies the declared constants. |
//! | [`Member`] | One declared (name, value) constant. |
//! | [`Metadata`] | Per-type immutable cache with value and name indices. |
//! | [`UnderlyingOperation`] | Range, parsing and continuity logic for one integer type. |
//! | [`EnumError`] | Lookup and parse failures. |
//!
//! # Defining Enumerations
//!
//! * `#[derive(Enumeration)]` on a fieldless `#[repr(u8)]`-style enum (feature `derive`)
//! * [`constants!`] for newtypes whose constants may alias each other
//! * A hand-written [`Enumeration`] impl, cached through the process-wide registry
//!
//! # Concurrency
//!
//! - **Build:** Exactly once per type, by whichever thread gets there first. Other threads block
//!   until the cache is published.
//! - **Reads:** No locking once published.

mod enumeration;
mod error;
mod facade;
mod macros;
mod member;
mod metadata;
pub mod registry;
mod underlying;

pub use enumeration::{Discovery, Enumeration};
pub use error::EnumError;
pub use facade::{
	EnumExt, distinct_members, get_member, get_name, is_continuous, is_defined, is_defined_name,
	is_defined_repr, is_empty, is_flags, len, max_value, members, metadata, min_value, names,
	parse, parse_ignore_case, repr, try_parse, try_parse_ignore_case, values,
};
#[cfg(feature = "derive")]
pub use fastenum_macros::Enumeration;
pub use member::Member;
pub use metadata::Metadata;
pub use underlying::{Repr, Underlying, UnderlyingOperation};
