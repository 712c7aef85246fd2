use crate::underlying::Repr;

/// Errors raised by enumeration lookups and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnumError {
	/// A value or name does not correspond to any declared constant.
	#[error("`{value}` is not a declared member of {enum_name}")]
	NotAMember { enum_name: &'static str, value: String },

	/// A representation-specific query used a numeric type other than the storage type.
	#[error("representation mismatch for {enum_name}: expected {expected}, found {found}")]
	ReprMismatch {
		enum_name: &'static str,
		expected: Repr,
		found: Repr,
	},

	/// Text selected for numeric parsing is not a valid literal of the storage type.
	#[error("`{text}` is not a valid {repr} literal for {enum_name}")]
	MalformedLiteral {
		enum_name: &'static str,
		repr: Repr,
		text: String,
	},

	/// Parsing was asked to resolve an empty string.
	#[error("cannot parse an empty string as {enum_name}")]
	EmptyInput { enum_name: &'static str },

	/// A storage representation outside the eight supported integer types.
	#[error("unsupported storage representation `{name}`")]
	UnsupportedRepr { name: String },
}
