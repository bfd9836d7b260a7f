//! Forward-sequence capability.
//!
//! A [`Cursor`] separates "move to the next element" from "read the element
//! under the cursor", so the current element can be inspected any number of
//! times between moves. A [`ForwardSequence`] hands out independent cursors,
//! which makes traversal restartable without the sequence holding any
//! per-traversal state.

/// Per-traversal forward-only state.
pub trait Cursor {
	/// Element type exposed by [`current`](Self::current).
	type Item: ?Sized;

	/// Moves to the next element, returning false once the sequence is exhausted.
	fn advance(&mut self) -> bool;

	/// Returns the element captured by the last successful [`advance`](Self::advance).
	///
	/// `None` before the first advance and after exhaustion.
	fn current(&self) -> Option<&Self::Item>;
}

/// A sequence that can be traversed any number of times.
pub trait ForwardSequence {
	/// Cursor type produced for each traversal.
	type Cursor<'a>: Cursor
	where
		Self: 'a;

	/// Starts a fresh traversal.
	fn cursor(&self) -> Self::Cursor<'_>;
}

/// Adapts any [`Iterator`] to the [`Cursor`] contract.
#[derive(Debug, Clone)]
pub struct IterCursor<I: Iterator> {
	iter: I,
	current: Option<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
	/// Wraps `iter`; no element is pulled until the first advance.
	pub fn new(iter: I) -> Self {
		Self { iter, current: None }
	}

	/// Consumes the cursor, returning the element under it.
	pub fn into_current(self) -> Option<I::Item> {
		self.current
	}
}

impl<I: Iterator> Cursor for IterCursor<I> {
	type Item = I::Item;

	fn advance(&mut self) -> bool {
		self.current = self.iter.next();
		self.current.is_some()
	}

	fn current(&self) -> Option<&I::Item> {
		self.current.as_ref()
	}
}

/// Extension giving every iterator a cursor view.
pub trait CursorExt: Iterator + Sized {
	/// Converts this iterator into an [`IterCursor`].
	fn into_cursor(self) -> IterCursor<Self> {
		IterCursor::new(self)
	}
}

impl<I: Iterator> CursorExt for I {}
