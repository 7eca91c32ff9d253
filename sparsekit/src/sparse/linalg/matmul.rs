use crate::internal_prelude::*;
use crate::sparse::accumulator::{Accumulator, SymbolicAccumulator, accumulator_scratch, symbolic_accumulator_scratch};
use crate::sparse::check_nnz;
use crate::{assert, debug_assert};

/// computes the row pointers of the product of a sparse matrix `lhs` by a sparse matrix `rhs`.
///
/// the number of stored entries of each row is the number of distinct columns reached from it,
/// before any cancellation takes place. the result is the exact layout expected by
/// [`sparse_sparse_matmul_numeric`].
///
/// returns [`SparseError::IndexOverflow`] if the number of entries doesn't fit in `I`.
///
/// # note
/// allows unsorted matrices.
#[track_caller]
pub fn sparse_sparse_matmul_symbolic<I: Index>(lhs: SymbolicSparseRowMatRef<'_, I>, rhs: SymbolicSparseRowMatRef<'_, I>) -> Result<Vec<I>, SparseError> {
	assert!(lhs.ncols() == rhs.nrows());

	let m = lhs.nrows();
	let n = rhs.ncols();

	let mut row_ptr = try_zeroed::<I>(m + 1)?;

	let mut mem = MemBuffer::try_new(symbolic_accumulator_scratch::<I>(n))?;
	let (mut next, _) = MemStack::new(&mut mem).make_with(n, |_| I::truncate(0));
	let mut cols = SymbolicAccumulator::new(&mut next);

	let mut nnz = 0usize;
	for i in 0..m {
		for k in lhs.col_idx_of_row(i) {
			for j in rhs.col_idx_of_row(k) {
				cols.insert(j);
			}
		}
		nnz += cols.drain().count();
		check_nnz::<I>(nnz)?;
		row_ptr[i + 1] = I::truncate(nnz);
	}

	Ok(row_ptr)
}

/// computes the layout of the workspace required to compute the numeric product into a matrix
/// with `nrows` rows and `ncols` columns.
pub fn sparse_sparse_matmul_numeric_scratch<I: Index, T>(nrows: usize, ncols: usize) -> StackReq {
	_ = nrows;
	accumulator_scratch::<I, T>(ncols)
}

/// computes the product of a sparse matrix `lhs` by a sparse matrix `rhs` into the buffers
/// sized by [`sparse_sparse_matmul_symbolic`], and returns the number of stored entries.
///
/// `row_ptr` must hold the row pointers computed by the symbolic pass. each row is written to
/// the front of the unused part of `col_idx` and `val`, entries that cancel out to zero are
/// dropped, and `row_ptr` is rewritten to describe the compacted result. the column indices of
/// each row are unsorted, and the contents of `col_idx` and `val` past the returned length are
/// unspecified.
///
/// # panics
/// panics if the dimensions don't match, if `col_idx` or `val` are shorter than the symbolic
/// entry count, or if a row of the product doesn't fit in the range reserved for it.
#[track_caller]
pub fn sparse_sparse_matmul_numeric<I: Index, T: Scalar>(
	row_ptr: &mut [I],
	col_idx: &mut [I],
	val: &mut [T],
	lhs: SparseRowMatRef<'_, I, T>,
	rhs: SparseRowMatRef<'_, I, T>,
	stack: &mut MemStack,
) -> usize {
	assert!(lhs.ncols() == rhs.nrows());
	let m = lhs.nrows();
	let n = rhs.ncols();

	assert!(row_ptr.len() == m + 1);
	assert!(row_ptr[0].zx() == 0);
	let capacity = row_ptr[m].zx();
	assert!(all(capacity <= col_idx.len(), capacity <= val.len()));

	let (mut next, stack) = stack.make_with(n, |_| I::truncate(0));
	let (mut sums, _) = stack.make_with(n, |_| T::zero());
	let mut acc = Accumulator::new(&mut *next, &mut *sums);

	let mut nnz = 0usize;
	let mut row_end = 0usize;
	for i in 0..m {
		let row_start = row_end;
		row_end = row_ptr[i + 1].zx();

		for (k, &a) in iter::zip(lhs.col_idx_of_row(i), lhs.val_of_row(i)) {
			for (j, &b) in iter::zip(rhs.col_idx_of_row(k), rhs.val_of_row(k)) {
				acc.visit(j, a * b);
			}
		}
		assert!(acc.len() <= row_end - row_start);

		for (j, x) in acc.drain() {
			if !x.is_zero() {
				col_idx[nnz] = I::truncate(j);
				val[nnz] = x;
				nnz += 1;
			}
		}
		row_ptr[i + 1] = I::truncate(nnz);
	}

	debug_assert!(nnz <= capacity);
	nnz
}

/// computes the product of a sparse matrix `lhs` by a sparse matrix `rhs` in two passes, and
/// returns the result.
///
/// entries that cancel out to zero are not stored.
///
/// # note
/// allows unsorted matrices, and produces an unsorted output.
#[track_caller]
pub fn sparse_sparse_matmul<I: Index, T: Scalar>(lhs: SparseRowMatRef<'_, I, T>, rhs: SparseRowMatRef<'_, I, T>) -> Result<SparseRowMat<I, T>, SparseError> {
	assert!(lhs.ncols() == rhs.nrows());
	let m = lhs.nrows();
	let n = rhs.ncols();

	let mut row_ptr = sparse_sparse_matmul_symbolic(lhs.symbolic(), rhs.symbolic())?;
	let capacity = row_ptr[m].zx();
	let mut col_idx = try_zeroed::<I>(capacity)?;
	let mut val = try_collect(iter::repeat_n(T::zero(), capacity))?;

	let nnz = sparse_sparse_matmul_numeric(
		&mut row_ptr,
		&mut col_idx,
		&mut val,
		lhs,
		rhs,
		MemStack::new(&mut MemBuffer::try_new(sparse_sparse_matmul_numeric_scratch::<I, T>(m, n))?),
	);
	col_idx.truncate(nnz);
	val.truncate(nnz);

	// SAFETY: row_ptr was rewritten to describe the compacted entries, with columns less than n
	Ok(SparseRowMat::new(
		unsafe { SymbolicSparseRowMat::new_unchecked(m, n, row_ptr, col_idx) },
		val,
	))
}

/// computes the product of a sparse matrix `lhs` by a sparse matrix `rhs` in a single pass, and
/// returns the result.
///
/// the output buffers are grown as the rows are produced. entries that cancel out to zero are
/// not stored.
///
/// # note
/// allows unsorted matrices, and produces an unsorted output.
#[track_caller]
pub fn sparse_sparse_matmul_fused<I: Index, T: Scalar>(
	lhs: SparseRowMatRef<'_, I, T>,
	rhs: SparseRowMatRef<'_, I, T>,
) -> Result<SparseRowMat<I, T>, SparseError> {
	assert!(lhs.ncols() == rhs.nrows());
	let m = lhs.nrows();
	let n = rhs.ncols();

	let mut row_ptr = try_zeroed::<I>(m + 1)?;
	let mut col_idx = Vec::new();
	let mut val = Vec::new();

	let mut mem = MemBuffer::try_new(accumulator_scratch::<I, T>(n))?;
	let stack = MemStack::new(&mut mem);
	let (mut next, stack) = stack.make_with(n, |_| I::truncate(0));
	let (mut sums, _) = stack.make_with(n, |_| T::zero());
	let mut acc = Accumulator::new(&mut *next, &mut *sums);

	for i in 0..m {
		for (k, &a) in iter::zip(lhs.col_idx_of_row(i), lhs.val_of_row(i)) {
			for (j, &b) in iter::zip(rhs.col_idx_of_row(k), rhs.val_of_row(k)) {
				acc.visit(j, a * b);
			}
		}

		col_idx.try_reserve(acc.len())?;
		val.try_reserve(acc.len())?;
		for (j, x) in acc.drain() {
			if !x.is_zero() {
				col_idx.push(I::truncate(j));
				val.push(x);
			}
		}

		check_nnz::<I>(col_idx.len())?;
		row_ptr[i + 1] = I::truncate(col_idx.len());
	}

	// SAFETY: row_ptr is non-decreasing and every column index is less than n
	Ok(SparseRowMat::new(
		unsafe { SymbolicSparseRowMat::new_unchecked(m, n, row_ptr, col_idx) },
		val,
	))
}

/// products of column-major matrices, computed as $C^\top = B^\top A^\top$ with the row-major
/// kernels.
pub mod col_major {
	use crate::assert;
	use crate::internal_prelude::*;

	/// computes the product of a sparse matrix `lhs` by a sparse matrix `rhs` in two passes.
	///
	/// see [`super::sparse_sparse_matmul`]
	#[track_caller]
	pub fn sparse_sparse_matmul<I: Index, T: Scalar>(
		lhs: SparseColMatRef<'_, I, T>,
		rhs: SparseColMatRef<'_, I, T>,
	) -> Result<SparseColMat<I, T>, SparseError> {
		assert!(lhs.ncols() == rhs.nrows());
		Ok(super::sparse_sparse_matmul(rhs.transpose(), lhs.transpose())?.into_transpose())
	}

	/// computes the product of a sparse matrix `lhs` by a sparse matrix `rhs` in a single pass.
	///
	/// see [`super::sparse_sparse_matmul_fused`]
	#[track_caller]
	pub fn sparse_sparse_matmul_fused<I: Index, T: Scalar>(
		lhs: SparseColMatRef<'_, I, T>,
		rhs: SparseColMatRef<'_, I, T>,
	) -> Result<SparseColMat<I, T>, SparseError> {
		assert!(lhs.ncols() == rhs.nrows());
		Ok(super::sparse_sparse_matmul_fused(rhs.transpose(), lhs.transpose())?.into_transpose())
	}
}
