use std::any::{Any, type_name};
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use indexmap::IndexMap;

use crate::error::{CollectionError, ValueRole};
use crate::keyed::{KeyedCollection, fmt_map};
use crate::pair::Pair;
use crate::type_desc::TypeDescriptor;

mod options;


pub use options::{CanonicalMapOptions, KeyValidator};

type Canonicalize<K, C> = Box<dyn Fn(&K) -> C>;

/// A map that stores entries under a canonical form of their key.
///
/// Keys that canonicalize to the same `C` share one slot. The last write to a
/// slot determines both its value and the original key reported by
/// enumeration:
///
/// ```
/// use xeno_collection::prelude::*;
///
/// let mut map = CanonicalKeyMap::new(|key: &String| key.to_lowercase());
/// map.set("Foo".to_string(), 1);
/// map.set("foo".to_string(), 2);
/// assert_eq!(map.len(), 1);
/// assert_eq!(map.get(&"FOO".to_string()), Some(&2));
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["foo"]);
/// ```
///
/// Every stored `(c, Pair(k, v))` satisfies `canonicalize(&k) == c`. Slots
/// enumerate in first-insertion order; overwriting a slot keeps its position.
///
/// Keys failing the configured validator behave as absent for lookups and
/// removals, and [`set`](KeyedCollection::set) silently ignores them.
pub struct CanonicalKeyMap<C, K, V> {
	base: IndexMap<C, Pair<K, V>>,
	canonicalize: Canonicalize<K, C>,
	options: CanonicalMapOptions<K>,
}

impl<C, K, V> CanonicalKeyMap<C, K, V>
where
	C: Hash + Eq,
{
	/// Creates an empty map with the default configuration.
	pub fn new(canonicalize: impl Fn(&K) -> C + 'static) -> Self {
		Self::with_options(canonicalize, CanonicalMapOptions::default())
	}

	/// Creates an empty map with explicit configuration.
	pub fn with_options(canonicalize: impl Fn(&K) -> C + 'static, options: CanonicalMapOptions<K>) -> Self {
		Self {
			base: IndexMap::new(),
			canonicalize: Box::new(canonicalize),
			options,
		}
	}

	/// Creates a map holding the entries of `other`, applied in order.
	///
	/// Later entries win when several keys share a canonical form.
	pub fn from_map(
		other: impl IntoIterator<Item = (K, V)>,
		canonicalize: impl Fn(&K) -> C + 'static,
		options: CanonicalMapOptions<K>,
	) -> Self {
		let mut map = Self::with_options(canonicalize, options);
		map.add_all(other);
		map
	}

	/// Returns the canonical form of `key`.
	pub fn canonical_key(&self, key: &K) -> C {
		(self.canonicalize)(key)
	}

	#[inline]
	fn accepts(&self, key: &K) -> bool {
		self.options.accepts(key)
	}
}

impl<C, K, V> CanonicalKeyMap<C, K, V> {
	/// Returns the construction-time configuration.
	pub fn options(&self) -> &CanonicalMapOptions<K> {
		&self.options
	}

	/// Iterates over `(original key, value)` in slot order.
	pub fn iter(&self) -> Iter<'_, C, K, V> {
		Iter {
			inner: self.base.values(),
		}
	}
}

/// Loosely-typed access for callers holding keys as `&dyn Any`.
impl<C, K, V> CanonicalKeyMap<C, K, V>
where
	C: Hash + Eq,
	K: 'static,
	V: 'static,
{
	/// Returns the descriptor of the declared key type.
	pub fn key_type(&self) -> TypeDescriptor {
		TypeDescriptor::of::<K>()
	}

	/// Returns the descriptor of the declared value type.
	pub fn value_type(&self) -> TypeDescriptor {
		TypeDescriptor::of::<V>()
	}

	/// Returns true if `key` is a `K` accepted by the configured validator.
	pub fn is_valid_key(&self, key: &dyn Any) -> bool {
		self.downcast_key(key).is_some()
	}

	fn downcast_key<'k>(&self, key: &'k dyn Any) -> Option<&'k K> {
		key.downcast_ref::<K>().filter(|key| self.accepts(key))
	}

	/// Like [`get`](KeyedCollection::get), treating non-`K` keys as absent.
	pub fn get_any(&self, key: &dyn Any) -> Option<&V> {
		let key = self.downcast_key(key)?;
		self.base.get(&self.canonical_key(key)).map(Pair::second)
	}

	/// Like [`contains_key`](KeyedCollection::contains_key), treating non-`K` keys as absent.
	pub fn contains_key_any(&self, key: &dyn Any) -> bool {
		self.downcast_key(key).is_some_and(|key| self.base.contains_key(&self.canonical_key(key)))
	}

	/// Like [`remove`](KeyedCollection::remove), treating non-`K` keys as absent.
	pub fn remove_any(&mut self, key: &dyn Any) -> Option<V> {
		let canonical = self.downcast_key(key).map(|key| self.canonical_key(key))?;
		self.base.shift_remove(&canonical).map(Pair::into_second)
	}

	/// Checked-cast entry point for loosely-typed writes.
	///
	/// Both arguments are type-checked before anything is stored. Once they
	/// pass, this behaves exactly like [`set`](KeyedCollection::set), including
	/// silently ignoring keys the validator rejects.
	///
	/// # Errors
	///
	/// Returns [`CollectionError::TypeMismatch`] if `key` is not a `K` or
	/// `value` is not a `V`. The map is left unchanged.
	pub fn try_set(&mut self, key: Box<dyn Any>, value: Box<dyn Any>) -> Result<(), CollectionError> {
		let key = key.downcast::<K>().map_err(|_| CollectionError::TypeMismatch {
			role: ValueRole::Key,
			expected: self.key_type().name(),
		})?;
		let value = value.downcast::<V>().map_err(|_| CollectionError::TypeMismatch {
			role: ValueRole::Value,
			expected: self.value_type().name(),
		})?;
		self.set(*key, *value);
		Ok(())
	}
}

impl<C, K, V> KeyedCollection<K, V> for CanonicalKeyMap<C, K, V>
where
	C: Hash + Eq,
{
	fn get(&self, key: &K) -> Option<&V> {
		if !self.accepts(key) {
			return None;
		}
		self.base.get(&self.canonical_key(key)).map(Pair::second)
	}

	fn set(&mut self, key: K, value: V) {
		if !self.accepts(&key) {
			tracing::trace!(key_type = type_name::<K>(), "collection.set.rejected");
			return;
		}
		let canonical = self.canonical_key(&key);
		self.base.insert(canonical, Pair::new(key, value));
	}

	fn remove(&mut self, key: &K) -> Option<V> {
		if !self.accepts(key) {
			return None;
		}
		let canonical = self.canonical_key(key);
		self.base.shift_remove(&canonical).map(Pair::into_second)
	}

	fn contains_key(&self, key: &K) -> bool {
		self.accepts(key) && self.base.contains_key(&self.canonical_key(key))
	}

	fn contains_value(&self, value: &V) -> bool
	where
		V: PartialEq,
	{
		self.base.values().any(|pair| pair.second() == value)
	}

	fn for_each(&self, mut f: impl FnMut(&K, &V)) {
		for pair in self.base.values() {
			f(pair.first(), pair.second());
		}
	}

	fn keys<'a>(&'a self) -> impl Iterator<Item = &'a K>
	where
		K: 'a,
	{
		self.base.values().map(Pair::first)
	}

	fn values<'a>(&'a self) -> impl Iterator<Item = &'a V>
	where
		V: 'a,
	{
		self.base.values().map(Pair::second)
	}

	fn len(&self) -> usize {
		self.base.len()
	}

	fn put_if_absent(&mut self, key: K, produce: impl FnOnce() -> V) -> Result<&V, CollectionError> {
		if !self.accepts(&key) {
			tracing::trace!(key_type = type_name::<K>(), "collection.put_if_absent.rejected");
			return Err(CollectionError::InvalidKey {
				key_type: type_name::<K>(),
			});
		}
		let canonical = self.canonical_key(&key);
		let pair = self.base.entry(canonical).or_insert_with(|| Pair::new(key, produce()));
		Ok(pair.second())
	}

	fn clear(&mut self) {
		self.base.clear();
	}
}

impl<C, K, V> Extend<(K, V)> for CanonicalKeyMap<C, K, V>
where
	C: Hash + Eq,
{
	fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
		self.add_all(iter);
	}
}

impl<C, K: fmt::Display, V: fmt::Display> fmt::Display for CanonicalKeyMap<C, K, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt_map(f, self.iter())
	}
}

impl<C, K: fmt::Debug, V: fmt::Debug> fmt::Debug for CanonicalKeyMap<C, K, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

impl<'a, C, K, V> IntoIterator for &'a CanonicalKeyMap<C, K, V> {
	type Item = (&'a K, &'a V);
	type IntoIter = Iter<'a, C, K, V>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Iterator over `(original key, value)` of a [`CanonicalKeyMap`].
pub struct Iter<'a, C, K, V> {
	inner: indexmap::map::Values<'a, C, Pair<K, V>>,
}

impl<'a, C, K, V> Iterator for Iter<'a, C, K, V> {
	type Item = (&'a K, &'a V);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(Pair::as_refs)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<C, K, V> DoubleEndedIterator for Iter<'_, C, K, V> {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.next_back().map(Pair::as_refs)
	}
}

impl<C, K, V> ExactSizeIterator for Iter<'_, C, K, V> {}

impl<C, K, V> FusedIterator for Iter<'_, C, K, V> {}
