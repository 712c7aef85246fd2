//! Procedural macros for fastenum.
//!
//! Provides derive macros:
//! * `#[derive(Enumeration)]` - implements `fastenum::Enumeration` for a fieldless enum

use proc_macro::TokenStream;

/// Enumeration derive macro implementation.
mod enumeration;

/// Implements `fastenum::Enumeration` for a fieldless enum.
///
/// The enum must carry `#[repr(..)]` naming one of `i8`, `u8`, `i16`, `u16`, `i32`, `u32`, `i64`
/// or `u64`; any other storage type is rejected at compile time.
///
/// ```ignore
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Enumeration)]
/// #[repr(u8)]
/// #[fastenum(flags)]
/// pub enum Access {
///     Read = 1,
///     #[fastenum(label = "write access")]
///     Write = 2,
///     Exec = 4,
/// }
/// ```
///
/// Attributes:
/// * `#[fastenum(flags)]` - Marks the enum as a bit-flag set
/// * `#[fastenum(label = "...")]` - Attaches a display label to a variant
///
/// Generates:
/// * `Enumeration::discover` listing every variant in declaration order
/// * `Enumeration::to_repr` as a primitive cast
/// * `Enumeration::metadata` backed by a per-type `OnceLock`
#[proc_macro_derive(Enumeration, attributes(fastenum))]
pub fn derive_enumeration(input: TokenStream) -> TokenStream {
	enumeration::derive_enumeration(input)
}
