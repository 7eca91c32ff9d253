//! the accumulator merges an arbitrary number of `(column, value)` contributions into a single
//! sparse row in O(1) amortized time per contribution.
//!
//! it is backed by two `dim`-sized buffers that persist across rows: a marker buffer, doubling
//! as the `next` pointers of a singly linked list of the columns visited in the current row, and
//! a dense scratch buffer holding the partial sums. draining the row walks the linked list once
//! and restores both buffers to their neutral state, so that the cost of a row is proportional
//! to the number of its contributions rather than to `dim`.
//!
//! # example
//! ```
//! use sparsekit::dyn_stack::{MemBuffer, MemStack};
//! use sparsekit::sparse::accumulator::{Accumulator, accumulator_scratch};
//!
//! let mut buf = MemBuffer::new(accumulator_scratch::<usize, f64>(4));
//! let stack = MemStack::new(&mut buf);
//! let (mut next, stack) = stack.make_with(4, |_| 0usize);
//! let (mut sums, _) = stack.make_with(4, |_| 0.0f64);
//! let mut acc = Accumulator::new(&mut *next, &mut *sums);
//!
//! acc.visit(2, 1.0);
//! acc.visit(0, 2.0);
//! acc.visit(2, 3.0);
//! assert_eq!(acc.len(), 2);
//!
//! let row: Vec<_> = acc.drain().collect();
//! assert_eq!(row, [(0, 2.0), (2, 4.0)]);
//! assert_eq!(acc.drain().count(), 0);
//! ```

use crate::internal_prelude::*;
use crate::{assert, debug_assert};

/// marker of a column that has not been visited in the current row.
#[inline(always)]
fn unvisited<I: Index>() -> I {
	I::truncate(usize::MAX)
}

/// terminator of the linked list of visited columns.
#[inline(always)]
fn end_of_list<I: Index>() -> I {
	I::truncate(usize::MAX - 1)
}

/// computes the workspace layout required by a [`SymbolicAccumulator`] of dimension `dim`.
pub fn symbolic_accumulator_scratch<I: Index>(dim: usize) -> StackReq {
	StackReq::new::<I>(dim)
}

/// computes the workspace layout required by an [`Accumulator`] of dimension `dim`.
pub fn accumulator_scratch<I: Index, T>(dim: usize) -> StackReq {
	StackReq::all_of(&[StackReq::new::<I>(dim), StackReq::new::<T>(dim)])
}

/// set of visited columns, without values.
///
/// used on its own by the symbolic phase of the sparse matrix product, and as the shared
/// linked list of the [`Accumulator`] and of the elementwise combiner.
#[derive(Debug)]
pub struct SymbolicAccumulator<'a, I> {
	next: &'a mut [I],
	head: I,
	len: usize,
}

/// set of visited columns along with the sum of the contributions made to each of them.
#[derive(Debug)]
pub struct Accumulator<'a, I, T> {
	symbolic: SymbolicAccumulator<'a, I>,
	sums: &'a mut [T],
}

impl<'a, I: Index> SymbolicAccumulator<'a, I> {
	/// creates an empty accumulator of dimension `next.len()`, overwriting the contents of
	/// `next`.
	///
	/// # panics
	/// panics if `next.len()` exceeds `I::Signed::MAX`.
	#[track_caller]
	pub fn new(next: &'a mut [I]) -> Self {
		assert!(next.len() <= I::Signed::MAX.zx());
		next.fill(unvisited());
		Self {
			next,
			head: end_of_list(),
			len: 0,
		}
	}

	/// returns the dimension of the accumulator.
	#[inline]
	pub fn dim(&self) -> usize {
		self.next.len()
	}

	/// returns the number of distinct columns visited since the last drain.
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	/// returns `true` if no column was visited since the last drain.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// returns `true` if column `col` was visited since the last drain.
	#[inline]
	#[track_caller]
	pub fn contains(&self, col: usize) -> bool {
		self.next[col] != unvisited()
	}

	/// marks `col` as visited, and returns `true` if it was not already.
	///
	/// # panics
	/// panics if `col >= self.dim()`.
	#[inline]
	#[track_caller]
	pub fn insert(&mut self, col: usize) -> bool {
		let next = &mut self.next[col];
		if *next == unvisited() {
			*next = self.head;
			self.head = I::truncate(col);
			self.len += 1;
			true
		} else {
			false
		}
	}

	/// returns an iterator over the visited columns in reverse order of first visit, resetting
	/// each of them as it is yielded.
	///
	/// dropping the iterator before it is exhausted resets the remaining columns.
	#[inline]
	pub fn drain(&mut self) -> SymbolicDrain<'_, 'a, I> {
		SymbolicDrain { acc: self }
	}

	#[inline]
	fn pop(&mut self) -> Option<usize> {
		if self.head == end_of_list() {
			debug_assert!(self.len == 0);
			return None;
		}
		let col = self.head.zx();
		self.head = core::mem::replace(&mut self.next[col], unvisited());
		self.len -= 1;
		Some(col)
	}
}

impl<'a, I: Index, T: Scalar> Accumulator<'a, I, T> {
	/// creates an empty accumulator of dimension `next.len()`, overwriting the contents of both
	/// buffers.
	///
	/// # panics
	/// panics if `next` and `sums` don't have the same length, or if that length exceeds
	/// `I::Signed::MAX`.
	#[track_caller]
	pub fn new(next: &'a mut [I], sums: &'a mut [T]) -> Self {
		assert!(next.len() == sums.len());
		sums.fill(T::zero());
		Self {
			symbolic: SymbolicAccumulator::new(next),
			sums,
		}
	}

	/// returns the dimension of the accumulator.
	#[inline]
	pub fn dim(&self) -> usize {
		self.symbolic.dim()
	}

	/// returns the number of distinct columns visited since the last drain.
	#[inline]
	pub fn len(&self) -> usize {
		self.symbolic.len()
	}

	/// returns `true` if no column was visited since the last drain.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.symbolic.is_empty()
	}

	/// returns the partial sum of column `col`, or zero if it was not visited.
	#[inline]
	#[track_caller]
	pub fn get(&self, col: usize) -> T {
		self.sums[col]
	}

	/// adds `value` to the partial sum of column `col`, linking it into the current row if it
	/// was not visited yet.
	///
	/// # panics
	/// panics if `col >= self.dim()`.
	#[inline]
	#[track_caller]
	pub fn visit(&mut self, col: usize, value: T) {
		self.sums[col] += value;
		self.symbolic.insert(col);
	}

	/// returns an iterator over the visited columns and their sums, in reverse order of first
	/// visit, resetting each of them as it is yielded.
	///
	/// sums that cancelled out to zero are yielded as well, it is up to the caller to drop them.
	/// dropping the iterator before it is exhausted resets the remaining columns.
	#[inline]
	pub fn drain(&mut self) -> Drain<'_, 'a, I, T> {
		Drain { acc: self }
	}
}

/// draining iterator over a [`SymbolicAccumulator`].
pub struct SymbolicDrain<'short, 'a, I: Index> {
	acc: &'short mut SymbolicAccumulator<'a, I>,
}

/// draining iterator over an [`Accumulator`].
pub struct Drain<'short, 'a, I: Index, T: Scalar> {
	acc: &'short mut Accumulator<'a, I, T>,
}

impl<I: Index> Iterator for SymbolicDrain<'_, '_, I> {
	type Item = usize;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		self.acc.pop()
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.acc.len, Some(self.acc.len))
	}
}

impl<I: Index, T: Scalar> Iterator for Drain<'_, '_, I, T> {
	type Item = (usize, T);

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		let col = self.acc.symbolic.pop()?;
		Some((col, core::mem::replace(&mut self.acc.sums[col], T::zero())))
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.acc.len(), Some(self.acc.len()))
	}
}

impl<I: Index> ExactSizeIterator for SymbolicDrain<'_, '_, I> {}
impl<I: Index, T: Scalar> ExactSizeIterator for Drain<'_, '_, I, T> {}

impl<I: Index> Drop for SymbolicDrain<'_, '_, I> {
	fn drop(&mut self) {
		while self.acc.pop().is_some() {}
	}
}

impl<I: Index, T: Scalar> Drop for Drain<'_, '_, I, T> {
	fn drop(&mut self) {
		for _ in self.by_ref() {}
	}
}
