use std::fmt::{self, Display, Write as _};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use indexmap::IndexMap;

use crate::error::CollectionError;

/// Keyed-collection capability.
///
/// Generic code written against this trait accepts any keyed store
/// interchangeably. Enumeration order is whatever the implementor's backing
/// storage defines; for the provided implementations it is insertion order.
///
/// `is_not_empty` and `add_all` are provided in terms of the required methods,
/// so implementors only supply the primitive operations.
pub trait KeyedCollection<K, V> {
	/// Returns the value stored for `key`, if any.
	fn get(&self, key: &K) -> Option<&V>;

	/// Stores `value` under `key`, replacing any previous entry.
	fn set(&mut self, key: K, value: V);

	/// Removes and returns the value stored for `key`.
	fn remove(&mut self, key: &K) -> Option<V>;

	/// Returns true if an entry exists for `key`.
	fn contains_key(&self, key: &K) -> bool;

	/// Returns true if any stored value equals `value`.
	fn contains_value(&self, value: &V) -> bool
	where
		V: PartialEq;

	/// Calls `f` with every stored key and value, in enumeration order.
	fn for_each(&self, f: impl FnMut(&K, &V));

	/// Iterates over the stored keys.
	///
	/// Keys and [`values`](Self::values) enumerate in the same order.
	fn keys<'a>(&'a self) -> impl Iterator<Item = &'a K>
	where
		K: 'a;

	/// Iterates over the stored values.
	fn values<'a>(&'a self) -> impl Iterator<Item = &'a V>
	where
		V: 'a;

	/// Returns the number of entries.
	fn len(&self) -> usize;

	/// Returns the value for `key`, inserting `produce()` first if absent.
	///
	/// `produce` runs at most once, and only when no entry existed.
	fn put_if_absent(&mut self, key: K, produce: impl FnOnce() -> V) -> Result<&V, CollectionError>;

	/// Removes every entry.
	fn clear(&mut self);

	/// Returns true if there are no entries.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns true if there is at least one entry.
	fn is_not_empty(&self) -> bool {
		!self.is_empty()
	}

	/// Applies [`set`](Self::set) to every entry in order; later entries win.
	fn add_all(&mut self, entries: impl IntoIterator<Item = (K, V)>) {
		for (key, value) in entries {
			self.set(key, value);
		}
	}
}

impl<K, V, S> KeyedCollection<K, V> for IndexMap<K, V, S>
where
	K: Hash + Eq,
	S: BuildHasher,
{
	fn get(&self, key: &K) -> Option<&V> {
		IndexMap::get(self, key)
	}

	fn set(&mut self, key: K, value: V) {
		self.insert(key, value);
	}

	fn remove(&mut self, key: &K) -> Option<V> {
		self.shift_remove(key)
	}

	fn contains_key(&self, key: &K) -> bool {
		IndexMap::contains_key(self, key)
	}

	fn contains_value(&self, value: &V) -> bool
	where
		V: PartialEq,
	{
		IndexMap::values(self).any(|v| v == value)
	}

	fn for_each(&self, mut f: impl FnMut(&K, &V)) {
		for (key, value) in self {
			f(key, value);
		}
	}

	fn keys<'a>(&'a self) -> impl Iterator<Item = &'a K>
	where
		K: 'a,
	{
		IndexMap::keys(self)
	}

	fn values<'a>(&'a self) -> impl Iterator<Item = &'a V>
	where
		V: 'a,
	{
		IndexMap::values(self)
	}

	fn len(&self) -> usize {
		IndexMap::len(self)
	}

	fn put_if_absent(&mut self, key: K, produce: impl FnOnce() -> V) -> Result<&V, CollectionError> {
		Ok(&*self.entry(key).or_insert_with(produce))
	}

	fn clear(&mut self) {
		IndexMap::clear(self);
	}
}

/// Writes `entries` in the map-like form `{k1: v1, k2: v2}`.
pub(crate) fn fmt_map<'a, K, V>(f: &mut fmt::Formatter<'_>, entries: impl IntoIterator<Item = (&'a K, &'a V)>) -> fmt::Result
where
	K: Display + 'a,
	V: Display + 'a,
{
	f.write_char('{')?;
	for (i, (key, value)) in entries.into_iter().enumerate() {
		if i > 0 {
			f.write_str(", ")?;
		}
		write!(f, "{key}: {value}")?;
	}
	f.write_char('}')
}

/// Renders any keyed collection in the map-like form `{k1: v1, k2: v2}`.
pub fn map_to_string<K, V>(map: &impl KeyedCollection<K, V>) -> String
where
	K: Display,
	V: Display,
{
	MapDisplay(map, PhantomData).to_string()
}

struct MapDisplay<'m, M, K, V>(&'m M, PhantomData<fn() -> (K, V)>);

impl<K, V, M> Display for MapDisplay<'_, M, K, V>
where
	K: Display,
	V: Display,
	M: KeyedCollection<K, V>,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt_map(f, self.0.keys().zip(self.0.values()))
	}
}
