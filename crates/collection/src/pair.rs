use std::fmt;

/// An immutable `(first, second)` tuple.
///
/// Maps that store entries under a derived key keep the caller's original key
/// in `first` so it can be recovered during enumeration. A pair is replaced as a
/// whole, never mutated in place, so fields are only exposed through accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair<K, V> {
	first: K,
	second: V,
}

impl<K, V> Pair<K, V> {
	/// Creates a new pair.
	pub const fn new(first: K, second: V) -> Self {
		Self { first, second }
	}

	/// Returns the first component.
	#[inline]
	pub fn first(&self) -> &K {
		&self.first
	}

	/// Returns the second component.
	#[inline]
	pub fn second(&self) -> &V {
		&self.second
	}

	/// Borrows both components at once.
	#[inline]
	pub fn as_refs(&self) -> (&K, &V) {
		(&self.first, &self.second)
	}

	/// Consumes the pair, returning both components.
	pub fn into_parts(self) -> (K, V) {
		(self.first, self.second)
	}

	/// Consumes the pair, returning only the second component.
	pub fn into_second(self) -> V {
		self.second
	}
}

impl<K, V> From<(K, V)> for Pair<K, V> {
	fn from((first, second): (K, V)) -> Self {
		Self::new(first, second)
	}
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Pair<K, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.first, self.second)
	}
}
