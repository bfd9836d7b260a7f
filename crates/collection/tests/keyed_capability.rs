//! Code written against [`KeyedCollection`] works the same over any implementor.

use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use xeno_collection::prelude::*;
use xeno_collection::{TypeDescriptor, map_to_string};

fn tally<M: KeyedCollection<String, u32>>(map: &mut M, words: &[&str]) {
	for word in words {
		let count = map.get(&word.to_string()).copied().unwrap_or(0);
		map.set(word.to_string(), count + 1);
	}
}

fn snapshot<M: KeyedCollection<String, u32>>(map: &M) -> Vec<(String, u32)> {
	let mut out = Vec::with_capacity(map.len());
	map.for_each(|key, value| out.push((key.clone(), *value)));
	out
}

#[test]
fn exact_map_counts_each_spelling() {
	let mut map: IndexMap<String, u32> = IndexMap::new();
	tally(&mut map, &["Rust", "rust", "RUST", "go"]);

	assert_eq!(map_to_string(&map), "{Rust: 1, rust: 1, RUST: 1, go: 1}");
}

#[test]
fn canonical_map_folds_spellings() {
	let mut map = CanonicalKeyMap::new(|key: &String| key.to_ascii_lowercase());
	tally(&mut map, &["Rust", "rust", "RUST", "go"]);

	assert_eq!(snapshot(&map), vec![("RUST".to_string(), 3), ("go".to_string(), 1)]);
	assert_eq!(map_to_string(&map), map.to_string());
}

#[test]
fn add_all_and_put_if_absent_agree_across_impls() {
	fn exercise<M: KeyedCollection<String, u32>>(mut map: M) -> Vec<(String, u32)> {
		map.add_all([("a".to_string(), 1), ("b".to_string(), 2)]);
		let _ = map.put_if_absent("c".to_string(), || 3);
		let _ = map.put_if_absent("a".to_string(), || 99);
		assert!(map.is_not_empty());
		assert!(map.contains_value(&3));
		snapshot(&map)
	}

	let canonical = exercise(CanonicalKeyMap::new(|key: &String| key.clone()));
	let plain = exercise(IndexMap::new());
	assert_eq!(canonical, plain);
}

#[test]
fn typed_descriptors_describe_declared_types() {
	let map: CanonicalKeyMap<String, String, u32> = CanonicalKeyMap::new(|key: &String| key.to_lowercase());
	assert_eq!(map.key_type(), TypeDescriptor::of::<String>());
	assert_eq!(map.value_type(), TypeDescriptor::of::<u32>());
	assert!(map.get_any(&0_u32).is_none());
}
