use crate::internal_prelude::*;
use crate::sparse::{Triplet, check_nnz, utils};
use crate::assert;

/// owning sparse matrix in coordinate format
///
/// stores three parallel buffers of row indices, column indices and values. the entries are in
/// no particular order, and duplicate entries are allowed, in which case they represent the sum
/// of their values.
#[derive(Clone, Debug)]
pub struct SparseCooMat<I, T> {
	nrows: usize,
	ncols: usize,
	row_idx: Vec<I>,
	col_idx: Vec<I>,
	val: Vec<T>,
}

impl<I: Index, T> SparseCooMat<I, T> {
	#[inline]
	#[track_caller]
	pub(crate) fn new_unchecked(nrows: usize, ncols: usize, row_idx: Vec<I>, col_idx: Vec<I>, val: Vec<T>) -> Self {
		assert!(all(row_idx.len() == val.len(), col_idx.len() == val.len()));
		Self {
			nrows,
			ncols,
			row_idx,
			col_idx,
			val,
		}
	}

	/// creates a new coordinate matrix from its buffers
	///
	/// returns [`CreationError::OutOfBounds`] for the first entry whose row is not less than
	/// `nrows` or whose column is not less than `ncols`.
	///
	/// # panics
	/// panics if the three buffers don't have the same length, or if either dimension exceeds
	/// `I::Signed::MAX`
	#[track_caller]
	pub fn try_new(nrows: usize, ncols: usize, row_idx: Vec<I>, col_idx: Vec<I>, val: Vec<T>) -> Result<Self, CreationError> {
		assert!(all(nrows <= I::Signed::MAX.zx(), ncols <= I::Signed::MAX.zx()));
		check_nnz::<I>(val.len())?;

		let this = Self::new_unchecked(nrows, ncols, row_idx, col_idx, val);
		for (&i, &j) in iter::zip(&this.row_idx, &this.col_idx) {
			let (i, j) = (i.zx(), j.zx());
			if i >= nrows || j >= ncols {
				return Err(CreationError::OutOfBounds { row: i, col: j });
			}
		}
		Ok(this)
	}

	/// creates a new coordinate matrix from a list of triplets
	///
	/// see [`SparseCooMat::try_new`]
	#[track_caller]
	pub fn try_new_from_triplets(nrows: usize, ncols: usize, entries: &[Triplet<I, I, T>]) -> Result<Self, CreationError>
	where
		T: Copy,
	{
		let row_idx = try_collect(entries.iter().map(|e| e.row))?;
		let col_idx = try_collect(entries.iter().map(|e| e.col))?;
		let val = try_collect(entries.iter().map(|e| e.val))?;
		Self::try_new(nrows, ncols, row_idx, col_idx, val)
	}

	#[inline]
	pub fn nrows(&self) -> usize {
		self.nrows
	}

	#[inline]
	pub fn ncols(&self) -> usize {
		self.ncols
	}

	#[inline]
	pub fn shape(&self) -> (usize, usize) {
		(self.nrows, self.ncols)
	}

	/// returns the number of stored entries, counting duplicates
	#[inline]
	pub fn compute_nnz(&self) -> usize {
		self.val.len()
	}

	#[inline]
	pub fn row_idx(&self) -> &'_ [I] {
		&self.row_idx
	}

	#[inline]
	pub fn col_idx(&self) -> &'_ [I] {
		&self.col_idx
	}

	#[inline]
	pub fn val(&self) -> &'_ [T] {
		&self.val
	}

	#[inline]
	pub fn val_mut(&mut self) -> &'_ mut [T] {
		&mut self.val
	}

	#[inline]
	pub fn into_parts(self) -> (usize, usize, Vec<I>, Vec<I>, Vec<T>) {
		(self.nrows, self.ncols, self.row_idx, self.col_idx, self.val)
	}

	/// returns the transpose of `self`, by swapping the row and column buffers
	#[inline]
	pub fn into_transpose(self) -> Self {
		Self {
			nrows: self.ncols,
			ncols: self.nrows,
			row_idx: self.col_idx,
			col_idx: self.row_idx,
			val: self.val,
		}
	}

	/// converts `self` to row-major format, with sorted and deduplicated rows. entries that sum
	/// to zero are dropped
	#[inline]
	pub fn to_row_major(&self) -> Result<SparseRowMat<I, T>, SparseError>
	where
		T: Scalar,
	{
		utils::coo_to_csr(self.nrows, self.ncols, &self.row_idx, &self.col_idx, &self.val)
	}

	/// converts `self` to column-major format, with sorted and deduplicated columns. entries
	/// that sum to zero are dropped
	#[inline]
	pub fn to_col_major(&self) -> Result<SparseColMat<I, T>, SparseError>
	where
		T: Scalar,
	{
		Ok(utils::coo_to_csr(self.ncols, self.nrows, &self.col_idx, &self.row_idx, &self.val)?.into_transpose())
	}

	/// returns the dense row-major representation of `self`, with duplicate entries summed
	#[track_caller]
	pub fn to_dense(&self) -> Vec<T>
	where
		T: Scalar,
	{
		let (m, n) = self.shape();
		assert!(m.checked_mul(n).is_some());
		let mut out = alloc::vec![T::zero(); m * n];
		for ((&i, &j), &x) in iter::zip(iter::zip(&self.row_idx, &self.col_idx), &self.val) {
			out[i.zx() * n + j.zx()] += x;
		}
		out
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::assert;

	#[test]
	fn test_try_new_out_of_bounds() {
		let err = SparseCooMat::try_new(2, 3, vec![0usize, 1, 2], vec![0, 2, 1], vec![1.0, 2.0, 3.0]).unwrap_err();
		assert!(err == CreationError::OutOfBounds { row: 2, col: 1 });

		let err = SparseCooMat::try_new(2, 3, vec![0usize, 1], vec![3, 2], vec![1.0, 2.0]).unwrap_err();
		assert!(err == CreationError::OutOfBounds { row: 0, col: 3 });
	}

	#[test]
	fn test_conversions() {
		// duplicates at (1, 0), cancellation at (0, 2)
		let coo = SparseCooMat::try_new(
			2,
			3,
			vec![1u32, 0, 1, 0, 0],
			vec![0u32, 2, 0, 1, 2],
			vec![1.0, 5.0, 2.0, 7.0, -5.0],
		)
		.unwrap();

		assert!(coo.to_dense() == [0.0, 7.0, 0.0, 3.0, 0.0, 0.0]);

		let csr = coo.to_row_major().unwrap();
		assert!(all(csr.row_ptr() == &[0, 1, 2], csr.col_idx() == &[1, 0], csr.val() == &[7.0, 3.0]));

		let csc = coo.to_col_major().unwrap();
		assert!(all(csc.col_ptr() == &[0, 1, 2, 2], csc.row_idx() == &[1, 0], csc.val() == &[3.0, 7.0]));

		let t = coo.clone().into_transpose();
		assert!(all(t.shape() == (3, 2), t.to_dense() == [0.0, 3.0, 7.0, 0.0, 0.0, 0.0]));
	}
}
