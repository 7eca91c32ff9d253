//! sparse matrix data structures and kernels
//!
//! a compressed sparse row (csr) matrix represents each row by storing the column indices of
//! its non-zero elements, as well as their values. the indices and the values are each stored
//! in a contiguous slice. in order to specify where each row starts and ends, a slice of size
//! `nrows + 1` stores the start of each row, with the last element being equal to the total
//! number of non-zeros.
//!
//! a compressed sparse column (csc) matrix is laid out the same way with the roles of rows and
//! columns swapped, so that the csc representation of a matrix is the csr representation of its
//! transpose. every column-major kernel is implemented by reinterpreting its arguments as
//! row-major and calling the row-major kernel.
//!
//! a coordinate (coo) matrix stores three parallel slices of row indices, column indices and
//! values, in any order and possibly with duplicates.
//!
//! # example
//!
//! consider the 4-by-5 matrix:
//! ```notcode
//! [[10.0, 0.0, 12.0, -1.0, 13.0]
//!  [ 0.0, 0.0, 25.0, -2.0,  0.0]
//!  [ 1.0, 0.0,  0.0,  0.0,  0.0]
//!  [ 4.0, 0.0,  0.0,  0.0,  5.0]]
//! ```
//!
//! the matrix is stored in csr format as follows:
//! ```notcode
//! row pointers   : | 0                                | 4                  | 6     | 7           | 9
//!
//! column indices : |    0 |    2 |    3 |    4 |    2 |    3 |    0 |    0 |    4 |
//! values         : | 10.0 | 12.0 | -1.0 | 13.0 | 25.0 | -2.0 |  1.0 |  4.0 |  5.0 |
//! ```

mod coo;
mod csc;
mod csr;

/// sparse accumulator shared by the kernels that merge several sparse rows into one.
pub mod accumulator;
/// sparse linear algebra kernels: sparse-sparse products and sparse-dense products.
pub mod linalg;
/// elementwise binary operations between sparse matrices.
pub mod ops;
/// algorithmic primitives for sparse matrices.
pub mod utils;

pub use coo::SparseCooMat;
pub use csc::{SparseColMat, SparseColMatMut, SparseColMatRef, SymbolicSparseColMat, SymbolicSparseColMatRef};
pub use csr::{SparseRowMat, SparseRowMatMut, SparseRowMatRef, SymbolicSparseRowMat, SymbolicSparseRowMatRef};

use crate::{Index, SignedIndex};

/// pair of indices with `C`-compatible layout
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct Pair<Row, Col> {
	/// row index
	pub row: Row,
	/// column index
	pub col: Col,
}

/// triplet of indices and value with `C`-compatible layout
#[derive(Copy, Clone, Debug)]
#[repr(C)]
pub struct Triplet<Row, Col, T> {
	/// row index
	pub row: Row,
	/// column index
	pub col: Col,
	/// value
	pub val: T,
}

impl<Row, Col> Pair<Row, Col> {
	/// creates a new pair of indices
	#[inline]
	pub const fn new(row: Row, col: Col) -> Self {
		Pair { row, col }
	}
}

impl<Row, Col, T> Triplet<Row, Col, T> {
	/// creates a new pair of indices and value
	#[inline]
	pub const fn new(row: Row, col: Col, val: T) -> Self {
		Triplet { row, col, val }
	}
}

/// errors that can occur in sparse algorithms
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[non_exhaustive]
pub enum SparseError {
	/// an index exceeding the maximum value (`I::Signed::MAX` for a given index type `I`)
	IndexOverflow,
	/// memory allocation failed
	OutOfMemory,
	/// an elementwise division had no representable result, e.g. an integer division by zero
	UndefinedQuotient {
		/// row of the offending entry
		row: usize,
		/// column of the offending entry
		col: usize,
	},
}

impl From<dyn_stack::mem::AllocError> for SparseError {
	#[inline]
	fn from(value: dyn_stack::mem::AllocError) -> Self {
		_ = value;
		SparseError::OutOfMemory
	}
}

impl From<alloc::collections::TryReserveError> for SparseError {
	#[inline]
	fn from(value: alloc::collections::TryReserveError) -> Self {
		_ = value;
		SparseError::OutOfMemory
	}
}

impl core::fmt::Display for SparseError {
	#[inline]
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		core::fmt::Debug::fmt(self, f)
	}
}

impl core::error::Error for SparseError {}

/// errors that can occur during the creation of sparse matrices from user input
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum CreationError {
	/// generic error (allocation or index overflow)
	Generic(SparseError),
	/// matrix index out-of-bounds error
	OutOfBounds {
		/// row of the out-of-bounds index
		row: usize,
		/// column of the out-of-bounds index
		col: usize,
	},
}

impl From<SparseError> for CreationError {
	#[inline]
	fn from(value: SparseError) -> Self {
		Self::Generic(value)
	}
}

impl core::fmt::Display for CreationError {
	#[inline]
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		core::fmt::Debug::fmt(self, f)
	}
}

impl core::error::Error for CreationError {}

#[inline(always)]
pub(crate) fn windows2<I>(slice: &[I]) -> impl DoubleEndedIterator<Item = &[I; 2]> {
	slice.windows(2).map(
		#[inline(always)]
		// SAFETY: `windows(2)` yields slices of length 2
		|window| unsafe { &*(window.as_ptr() as *const [I; 2]) },
	)
}

#[inline]
#[track_caller]
pub(crate) fn try_zeroed<I: bytemuck::Pod>(n: usize) -> Result<alloc::vec::Vec<I>, SparseError> {
	let mut v = alloc::vec::Vec::new();
	v.try_reserve_exact(n).map_err(|_| SparseError::OutOfMemory)?;
	v.resize(n, I::zeroed());
	Ok(v)
}

#[inline]
#[track_caller]
pub(crate) fn try_collect<I: IntoIterator>(iter: I) -> Result<alloc::vec::Vec<I::Item>, SparseError> {
	let iter = iter.into_iter();
	let mut v = alloc::vec::Vec::new();
	v.try_reserve_exact(iter.size_hint().0).map_err(|_| SparseError::OutOfMemory)?;
	v.extend(iter);
	Ok(v)
}

/// returns an error if `nnz` cannot be stored in the index type `I`.
#[inline]
pub(crate) fn check_nnz<I: Index>(nnz: usize) -> Result<(), SparseError> {
	if nnz > I::Signed::MAX.zx() { Err(SparseError::IndexOverflow) } else { Ok(()) }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::assert;

	#[test]
	fn test_from_triplets() {
		let nrows = 5;
		let ncols = 4;

		let triplets = &[
			Triplet::new(0, 0, 1.0),
			Triplet::new(1, 2, 2.0),
			Triplet::new(0, 0, 3.0),
			Triplet::new(1, 1, 4.0),
			Triplet::new(0, 1, 5.0),
			Triplet::new(3, 3, 6.0),
			Triplet::new(3, 3usize, 7.0_f64),
		];

		{
			let mat = SparseColMat::try_new_from_triplets(nrows, ncols, triplets);
			assert!(mat.is_ok());
			let mat = mat.unwrap();

			assert!(mat.nrows() == nrows);
			assert!(mat.ncols() == ncols);
			assert!(mat.col_ptr() == &[0, 1, 3, 4, 5]);
			assert!(mat.row_idx() == &[0, 0, 1, 1, 3]);
			assert!(mat.val() == &[1.0 + 3.0, 5.0, 4.0, 2.0, 6.0 + 7.0]);
		}
		{
			let mat = SparseRowMat::try_new_from_triplets(nrows, ncols, triplets);
			assert!(mat.is_ok());

			let mat = mat.unwrap();
			assert!(mat.nrows() == nrows);
			assert!(mat.ncols() == ncols);
			assert!(mat.row_ptr() == &[0, 2, 4, 4, 5, 5]);
			assert!(mat.col_idx() == &[0, 1, 1, 2, 3]);
			assert!(mat.val() == &[1.0 + 3.0, 5.0, 4.0, 2.0, 6.0 + 7.0]);
		}
	}

	#[test]
	fn test_from_triplets_drops_cancelled_entries() {
		let triplets = &[Triplet::new(0, 0, 1.0), Triplet::new(1, 1, 2.0), Triplet::new(0, 0, -1.0), Triplet::new(1, 0, 0.0f64)];

		let mat = SparseRowMat::<usize, f64>::try_new_from_triplets(2, 2, triplets).unwrap();
		assert!(mat.row_ptr() == &[0, 0, 1]);
		assert!(mat.col_idx() == &[1]);
		assert!(mat.val() == &[2.0]);
	}

	#[test]
	fn test_from_triplets_oob_row() {
		let triplets = &[Triplet::new(0, 0, 1.0), Triplet::new(1, 2, 2.0), Triplet::new(5, 3usize, 3.0)];
		let err = SparseColMat::<usize, f64>::try_new_from_triplets(5, 4, triplets);
		assert!(err.is_err());
		let err = err.unwrap_err();
		assert!(err == CreationError::OutOfBounds { row: 5, col: 3 });
	}

	#[test]
	fn test_from_triplets_oob_col() {
		let triplets = &[Triplet::new(0, 0, 1.0), Triplet::new(1, 2, 2.0), Triplet::new(2, 4usize, 3.0)];
		let err = SparseRowMat::<usize, f64>::try_new_from_triplets(5, 4, triplets);
		assert!(err.is_err());
		let err = err.unwrap_err();
		assert!(err == CreationError::OutOfBounds { row: 2, col: 4 });
	}

	#[test]
	fn test_check_nnz() {
		assert!(check_nnz::<u32>(0).is_ok());
		assert!(check_nnz::<u32>(i32::MAX as usize).is_ok());
		assert!(matches!(check_nnz::<u32>(i32::MAX as usize + 1), Err(SparseError::IndexOverflow)));
		assert!(check_nnz::<usize>(isize::MAX as usize).is_ok());
		assert!(matches!(check_nnz::<usize>(usize::MAX), Err(SparseError::IndexOverflow)));
	}

	#[test]
	fn test_error_display() {
		use alloc::string::ToString;

		assert!(SparseError::OutOfMemory.to_string() == "OutOfMemory");
		assert!(CreationError::OutOfBounds { row: 1, col: 2 }.to_string() == "OutOfBounds { row: 1, col: 2 }");
	}
}
