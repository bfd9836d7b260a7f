use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use super::*;

#[derive(Debug, Clone, PartialEq)]
enum Cell {
	Int(i32),
	Str(&'static str),
	Bool(bool),
}

#[test]
fn heterogeneous_rows_truncate_to_shortest() {
	let zip = ZipSequence::new([
		vec![Cell::Int(1), Cell::Int(2), Cell::Int(3)],
		vec![Cell::Str("a"), Cell::Str("b")],
		vec![Cell::Bool(true), Cell::Bool(false)],
	]);
	let mut cursor = zip.cursor();

	assert!(cursor.advance());
	assert_eq!(cursor.current(), Some(&[&Cell::Int(1), &Cell::Str("a"), &Cell::Bool(true)][..]));
	assert!(cursor.advance());
	assert_eq!(cursor.current(), Some(&[&Cell::Int(2), &Cell::Str("b"), &Cell::Bool(false)][..]));

	assert!(!cursor.advance());
	assert_eq!(cursor.current(), None);
	assert!(cursor.is_exhausted());
	assert!(!cursor.advance());
	assert!(!cursor.advance());
}

#[rstest]
#[case::ragged(vec![3, 5, 2], 2)]
#[case::equal(vec![4, 4, 4], 4)]
#[case::single_source(vec![3], 3)]
#[case::one_empty(vec![3, 0, 3], 0)]
#[case::no_sources(vec![], 0)]
fn row_count_is_shortest_source(#[case] lengths: Vec<usize>, #[case] rows: usize) {
	let zip: ZipSequence<Vec<usize>> = lengths.iter().map(|&len| (0..len).collect()).collect();
	assert_eq!(zip.cursor().count(), rows);
}

#[test]
fn empty_zip_never_advances() {
	let zip: ZipSequence<Vec<u8>> = ZipSequence::empty();
	let mut cursor = zip.cursor();

	assert_eq!(cursor.width(), 0);
	assert!(cursor.is_exhausted());
	assert!(!cursor.advance());
	assert_eq!(cursor.current(), None);
	assert_eq!(cursor.size_hint(), (0, Some(0)));
}

#[test]
fn single_source_wraps_each_element() {
	let zip = ZipSequence::new([vec!['x', 'y']]);
	let rows: Vec<Vec<&char>> = zip.cursor().collect();
	assert_eq!(rows, vec![vec![&'x'], vec![&'y']]);
}

#[test]
fn cursors_are_independent() {
	let zip = ZipSequence::new([vec![1, 2, 3], vec![4, 5, 6]]);
	let mut first = zip.cursor();
	let mut second = zip.cursor();

	assert!(first.advance());
	assert!(first.advance());
	assert!(second.advance());

	assert_eq!(first.current(), Some(&[&2, &5][..]));
	assert_eq!(second.current(), Some(&[&1, &4][..]));
}

#[test]
fn sequence_is_restartable() {
	let zip = ZipSequence::new([vec![0, 1, 2], vec![10, 11]]);
	let pass = |zip: &ZipSequence<Vec<i32>>| -> Vec<Vec<i32>> {
		zip.cursor()
			.map(|row| row.into_iter().copied().collect())
			.collect()
	};

	assert_eq!(pass(&zip), vec![vec![0, 10], vec![1, 11]]);
	assert_eq!(pass(&zip), pass(&zip));
}

#[test]
fn exhaustion_stops_polling_sources() {
	use std::cell::Cell as Counter;

	let polls = Counter::new(0);
	let counting = std::iter::from_fn(|| {
		polls.set(polls.get() + 1);
		Some(())
	});
	let mut cursor = ZipCursor::new(vec![
		Box::new(counting) as Box<dyn Iterator<Item = ()> + '_>,
		Box::new(std::iter::once(())),
	]);

	assert!(cursor.advance());
	assert!(!cursor.advance());
	assert_eq!(polls.get(), 2);

	assert!(!cursor.advance());
	assert_eq!(polls.get(), 2);
}

#[test]
fn next_does_not_retain_current() {
	let zip = ZipSequence::new([vec![1], vec![2]]);
	let mut cursor = zip.cursor();

	assert_eq!(cursor.next(), Some(vec![&1, &2]));
	assert_eq!(cursor.current(), None);
	assert_eq!(cursor.next(), None);
}

#[test]
fn size_hint_uses_shortest_source() {
	let zip = ZipSequence::new([vec![1, 2, 3], vec![1]]);
	let cursor = zip.cursor();
	assert_eq!(cursor.size_hint(), (1, Some(1)));
}

#[test]
fn forward_sequence_capability() {
	fn first_row<S: ForwardSequence>(seq: &S) -> bool {
		let mut cursor = seq.cursor();
		cursor.advance() && cursor.current().is_some()
	}

	assert!(first_row(&ZipSequence::new([vec![1], vec![2]])));
	assert!(!first_row(&ZipSequence::<Vec<i32>>::empty()));
}

#[test]
fn borrowed_sequence_iterates_rows() {
	let zip = ZipSequence::new([vec!["a", "b"], vec!["c", "d"]]);
	let mut joined = Vec::new();
	for row in &zip {
		joined.push(row.into_iter().copied().collect::<String>());
	}
	assert_eq!(joined, vec!["ac", "bd"]);
}

proptest! {
	/// Row `i` holds element `i` of every source, and there are exactly `min(len)` rows.
	#[test]
	fn prop_rows_match_indexing(sources in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..8), 1..5)) {
		let shortest = sources.iter().map(Vec::len).min().unwrap_or(0);
		let zip = ZipSequence::new(sources.clone());
		let mut cursor = zip.cursor();

		for i in 0..shortest {
			prop_assert!(cursor.advance());
			let expected: Vec<&u8> = sources.iter().map(|source| &source[i]).collect();
			prop_assert_eq!(cursor.current(), Some(expected.as_slice()));
		}
		prop_assert!(!cursor.advance());
		prop_assert!(!cursor.advance());
	}
}
