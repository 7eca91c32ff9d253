use crate::internal_prelude::*;
use crate::assert;

/// computes `A * x` and stores the result in `y`.
///
/// each output entry is the sum of the products along one row, duplicate entries included.
///
/// # panics
/// panics if `x.len() != A.ncols()` or `y.len() != A.nrows()`.
#[track_caller]
pub fn csr_matvec<I: Index, T: Scalar>(y: &mut [T], A: SparseRowMatRef<'_, I, T>, x: &[T]) {
	assert!(all(x.len() == A.ncols(), y.len() == A.nrows()));

	for (i, y) in y.iter_mut().enumerate() {
		let mut acc = T::zero();
		for (j, &a) in iter::zip(A.col_idx_of_row(i), A.val_of_row(i)) {
			acc += a * x[j];
		}
		*y = acc;
	}
}

/// computes `A * x` and stores the result in `y`.
///
/// `y` is cleared first, then each column of `A` is scattered into it.
///
/// # panics
/// panics if `x.len() != A.ncols()` or `y.len() != A.nrows()`.
#[track_caller]
pub fn csc_matvec<I: Index, T: Scalar>(y: &mut [T], A: SparseColMatRef<'_, I, T>, x: &[T]) {
	assert!(all(x.len() == A.ncols(), y.len() == A.nrows()));

	y.fill(T::zero());
	for (j, &x) in x.iter().enumerate() {
		for (i, &a) in iter::zip(A.row_idx_of_col(j), A.val_of_col(j)) {
			y[i] += a * x;
		}
	}
}
