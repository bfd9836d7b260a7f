use std::fmt;
use std::iter::FusedIterator;

use crate::cursor::{Cursor, ForwardSequence};

#[cfg(test)]
mod tests;

/// Lockstep traversal over an ordered list of sources.
///
/// Each row holds one element from every source, in source order. Traversal
/// stops as soon as any source runs dry, so the number of rows is the length
/// of the shortest source. A sequence with no sources yields no rows.
///
/// Sources are borrowed for every traversal, so the sequence itself is never
/// consumed and can be walked again with a fresh [`cursor`](Self::cursor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipSequence<S> {
	sources: Vec<S>,
}

impl<S> ZipSequence<S> {
	/// Creates a zip over `sources`. No elements are read until traversal.
	pub fn new(sources: impl IntoIterator<Item = S>) -> Self {
		Self {
			sources: sources.into_iter().collect(),
		}
	}

	/// Creates a zip with no sources.
	pub fn empty() -> Self {
		Self { sources: Vec::new() }
	}

	/// Returns the number of sources (the width of every row).
	pub fn source_count(&self) -> usize {
		self.sources.len()
	}

	/// Returns true if there are no sources.
	pub fn is_empty(&self) -> bool {
		self.sources.is_empty()
	}

	/// Returns the sources in order.
	pub fn sources(&self) -> &[S] {
		&self.sources
	}

	/// Starts an independent traversal, creating one iterator per source.
	pub fn cursor<'a>(&'a self) -> ZipCursor<<&'a S as IntoIterator>::IntoIter>
	where
		&'a S: IntoIterator,
	{
		ZipCursor::new(self.sources.iter().map(IntoIterator::into_iter).collect())
	}
}

impl<S> Default for ZipSequence<S> {
	fn default() -> Self {
		Self::empty()
	}
}

impl<S> FromIterator<S> for ZipSequence<S> {
	fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
		Self::new(iter)
	}
}

impl<'a, S> IntoIterator for &'a ZipSequence<S>
where
	&'a S: IntoIterator,
{
	type Item = Vec<<&'a S as IntoIterator>::Item>;
	type IntoIter = ZipCursor<<&'a S as IntoIterator>::IntoIter>;

	fn into_iter(self) -> Self::IntoIter {
		self.cursor()
	}
}

impl<S> ForwardSequence for ZipSequence<S>
where
	for<'a> &'a S: IntoIterator,
{
	type Cursor<'a>
		= ZipCursor<<&'a S as IntoIterator>::IntoIter>
	where
		Self: 'a;

	fn cursor(&self) -> Self::Cursor<'_> {
		ZipSequence::<S>::cursor(self)
	}
}

/// One traversal of a [`ZipSequence`].
///
/// Exhaustion is terminal: once any source reports its end, no source is
/// polled again and every later [`advance`](Self::advance) returns false.
/// Elements already pulled from earlier sources in the failing round are
/// dropped.
pub struct ZipCursor<I: Iterator> {
	iters: Vec<I>,
	current: Option<Vec<I::Item>>,
	exhausted: bool,
}

impl<I: Iterator> ZipCursor<I> {
	/// Creates a cursor over already-started iterators, in order.
	pub fn new(iters: Vec<I>) -> Self {
		let exhausted = iters.is_empty();
		Self {
			iters,
			current: None,
			exhausted,
		}
	}

	/// Returns the number of underlying iterators.
	pub fn width(&self) -> usize {
		self.iters.len()
	}

	/// Returns true once no further rows can be produced.
	pub fn is_exhausted(&self) -> bool {
		self.exhausted
	}

	/// Moves to the next row, returning false when any source is exhausted.
	pub fn advance(&mut self) -> bool {
		self.current = self.step();
		self.current.is_some()
	}

	/// Returns the row captured by the last successful [`advance`](Self::advance).
	pub fn current(&self) -> Option<&[I::Item]> {
		self.current.as_deref()
	}

	fn step(&mut self) -> Option<Vec<I::Item>> {
		if self.exhausted {
			return None;
		}

		let width = self.iters.len();
		let mut row = Vec::with_capacity(width);
		for (index, iter) in self.iters.iter_mut().enumerate() {
			let Some(item) = iter.next() else {
				tracing::trace!(source = index, width, "collection.zip.exhausted");
				self.exhausted = true;
				return None;
			};
			row.push(item);
		}
		Some(row)
	}
}

impl<I: Iterator> Cursor for ZipCursor<I> {
	type Item = [I::Item];

	fn advance(&mut self) -> bool {
		ZipCursor::advance(self)
	}

	fn current(&self) -> Option<&[I::Item]> {
		ZipCursor::current(self)
	}
}

/// Rows yielded through [`Iterator::next`] are moved out, so they are not
/// retained as the cursor's current row.
impl<I: Iterator> Iterator for ZipCursor<I> {
	type Item = Vec<I::Item>;

	fn next(&mut self) -> Option<Self::Item> {
		self.current = None;
		self.step()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		if self.exhausted {
			return (0, Some(0));
		}
		self.iters.iter().map(Iterator::size_hint).fold((usize::MAX, None), |(lo, hi), (l, h)| {
			let hi = match (hi, h) {
				(Some(a), Some(b)) => Some(a.min(b)),
				(a, b) => a.or(b),
			};
			(lo.min(l), hi)
		})
	}
}

impl<I: Iterator> FusedIterator for ZipCursor<I> {}

impl<I> fmt::Debug for ZipCursor<I>
where
	I: Iterator + fmt::Debug,
	I::Item: fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ZipCursor")
			.field("iters", &self.iters)
			.field("current", &self.current)
			.field("exhausted", &self.exhausted)
			.finish()
	}
}
