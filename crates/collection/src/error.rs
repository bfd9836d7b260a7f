//! Error types for checked collection operations.

use std::fmt;

use thiserror::Error;

/// Which half of an entry a type check applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRole {
	/// The entry key.
	Key,
	/// The entry value.
	Value,
}

impl fmt::Display for ValueRole {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Key => "key",
			Self::Value => "value",
		})
	}
}

/// Errors raised by collection operations that cannot resolve to "absent".
///
/// Lookups and removals of rejected keys never produce these; they report
/// "not found" instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
	/// A key failed the map's validity predicate on a path that must store it.
	#[error("key of type {key_type} rejected by validity predicate")]
	InvalidKey {
		/// Declared key type of the map.
		key_type: &'static str,
	},

	/// A loosely-typed argument did not downcast to the declared type.
	#[error("type mismatch for {role}: expected {expected}")]
	TypeMismatch {
		/// Whether the key or the value failed the check.
		role: ValueRole,
		/// Declared type the argument was tested against.
		expected: &'static str,
	},
}
