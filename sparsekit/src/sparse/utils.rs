use crate::internal_prelude::*;
use crate::sparse::accumulator::{Accumulator, accumulator_scratch};
use crate::sparse::check_nnz;
use crate::{assert, debug_assert};
use core::ops::Range;

#[inline]
fn try_push<T>(v: &mut Vec<T>, value: T) -> Result<(), SparseError> {
	v.try_reserve(1)?;
	v.push(value);
	Ok(())
}

/// writes, for every stored entry, the index of the line that owns it.
///
/// this is the inverse of the prefix sum that produced `ptr`: given the row pointers of a
/// row-major matrix, it produces the row index of each entry.
///
/// # panics
/// panics if `ptr` is empty or not non-decreasing, or if `idx.len()` differs from the last
/// element of `ptr`.
#[track_caller]
pub fn expand_ptr<I: Index>(ptr: &[I], idx: &mut [I]) {
	assert!(ptr.len() > 0);
	assert!(ptr[ptr.len() - 1].zx() == idx.len());

	for (i, &[start, end]) in windows2(ptr).enumerate() {
		idx[start.zx()..end.zx()].fill(I::truncate(i));
	}
}

/// returns `true` if the indices of each line are in non-decreasing order.
#[track_caller]
pub fn has_sorted_indices<I: Index>(ptr: &[I], idx: &[I]) -> bool {
	windows2(ptr).all(|&[start, end]| windows2(&idx[start.zx()..end.zx()]).all(|&[j0, j1]| j0 <= j1))
}

/// returns `true` if the pointers are non-decreasing and the indices of each line are strictly
/// increasing, i.e. sorted and free of duplicates.
#[track_caller]
pub fn has_canonical_format<I: Index>(ptr: &[I], idx: &[I]) -> bool {
	windows2(ptr).all(|&[start, end]| start <= end && windows2(&idx[start.zx()..end.zx()]).all(|&[j0, j1]| j0 < j1))
}

/// sorts the indices of each line of a compressed matrix in ascending order, applying the same
/// permutation to the values.
///
/// the relative order of duplicate indices within a line is unspecified.
///
/// # panics
/// panics if `ptr` is empty, or if `idx` and `val` don't have the same length.
#[track_caller]
pub fn sort_indices<I: Index, T>(ptr: &[I], idx: &mut [I], val: &mut [T]) {
	assert!(ptr.len() > 0);
	assert!(idx.len() == val.len());

	#[cfg(feature = "perf-warn")]
	if has_sorted_indices(ptr, idx) && crate::__perf_warn!(SORT_WARN) {
		log::warn!(target: "sparsekit_perf", "sorting the indices of a matrix whose indices are already sorted.");
	}

	for &[start, end] in windows2(ptr) {
		let (start, end) = (start.zx(), end.zx());
		crate::sort::sort_indices(&mut idx[start..end], &mut val[start..end]);
	}
}

/// computes the workspace layout required to sum the duplicate entries of a matrix with
/// `ncols` columns.
pub fn sum_duplicates_scratch<I: Index, T>(nrows: usize, ncols: usize) -> StackReq {
	_ = nrows;
	accumulator_scratch::<I, T>(ncols)
}

/// sums the entries of each row that share a column index, in place, and returns the new
/// number of stored entries.
///
/// entries whose sum is zero are dropped, and the columns of each row are sorted. the surviving
/// entries are compacted to the front of `col_idx` and `val`, and `row_ptr` is rewritten to
/// describe them. the contents of `col_idx` and `val` past the returned length are
/// unspecified.
///
/// # panics
/// panics if `row_ptr` is not a valid pointer array of length `nrows + 1` starting at zero, if
/// `col_idx` or `val` are shorter than `row_ptr[nrows]`, or if a column index is out of bounds.
#[track_caller]
pub fn sum_duplicates<I: Index, T: Scalar>(nrows: usize, ncols: usize, row_ptr: &mut [I], col_idx: &mut [I], val: &mut [T], stack: &mut MemStack) -> usize {
	assert!(row_ptr.len() == nrows + 1);
	assert!(row_ptr[0] == I::truncate(0));
	let nnz_in = row_ptr[nrows].zx();
	assert!(all(nnz_in <= col_idx.len(), nnz_in <= val.len()));

	let (mut next, stack) = stack.make_with(ncols, |_| I::truncate(0));
	let (mut sums, _) = stack.make_with(ncols, |_| T::zero());
	let mut acc = Accumulator::new(&mut *next, &mut *sums);

	let mut nnz = 0usize;
	let mut row_end = 0usize;
	for i in 0..nrows {
		// `row_ptr[i]` was already overwritten, the old boundary is carried over in `row_end`
		let row_start = row_end;
		row_end = row_ptr[i + 1].zx();
		assert!(row_start <= row_end);

		for (&j, &x) in iter::zip(&col_idx[row_start..row_end], &val[row_start..row_end]) {
			let j = j.zx();
			assert!(j < ncols);
			acc.visit(j, x);
		}

		let start = nnz;
		for (j, x) in acc.drain() {
			if !x.is_zero() {
				col_idx[nnz] = I::truncate(j);
				val[nnz] = x;
				nnz += 1;
			}
		}
		crate::sort::sort_indices(&mut col_idx[start..nnz], &mut val[start..nnz]);

		row_ptr[i + 1] = I::truncate(nnz);
	}

	debug_assert!(nnz <= nnz_in);
	nnz
}

/// computes the workspace layout required to transpose a matrix with `nrows` rows and `ncols`
/// columns.
pub fn transpose_scratch<I: Index>(nrows: usize, ncols: usize) -> StackReq {
	_ = nrows;
	StackReq::new::<I>(ncols)
}

/// computes the transpose of the row-major matrix `A` with a counting sort, and returns a view
/// over it.
///
/// the result is stored in `new_row_ptr`, `new_col_idx` and `new_val`. since the compressed
/// row layout of $A^\top$ is the compressed column layout of $A$, this also converts `A` from
/// row-major to column-major.
///
/// # note
/// allows unsorted matrices, and produces a sorted output. duplicate entries are kept.
#[track_caller]
pub fn transpose<'out, I: Index, T: Copy>(
	new_val: &'out mut [T],
	new_row_ptr: &'out mut [I],
	new_col_idx: &'out mut [I],
	A: SparseRowMatRef<'_, I, T>,
	stack: &mut MemStack,
) -> SparseRowMatMut<'out, I, T> {
	let (m, n) = A.shape();
	let nnz = A.compute_nnz();
	assert!(all(new_row_ptr.len() == n + 1, new_col_idx.len() == nnz, new_val.len() == nnz));

	let (mut cursor, _) = stack.make_with(n, |_| I::truncate(0));

	// can't overflow because the total count is A.compute_nnz() <= I::Signed::MAX
	for &j in A.col_idx() {
		cursor[j.zx()] += I::truncate(1);
	}

	new_row_ptr[0] = I::truncate(0);
	for j in 0..n {
		let start = new_row_ptr[j];
		new_row_ptr[j + 1] = start + cursor[j];
		cursor[j] = start;
	}

	for i in 0..m {
		for (&j, &x) in iter::zip(A.col_idx_of_row_raw(i), A.val_of_row(i)) {
			let pos = &mut cursor[j.zx()];
			new_col_idx[pos.zx()] = I::truncate(i);
			new_val[pos.zx()] = x;
			*pos += I::truncate(1);
		}
	}
	debug_assert!(&*cursor == &new_row_ptr[1..]);

	let new_row_ptr: &'out [I] = new_row_ptr;
	let new_col_idx: &'out [I] = new_col_idx;
	// SAFETY: new_row_ptr is non-decreasing and every written column index is less than m
	unsafe { SparseRowMatMut::new(SymbolicSparseRowMatRef::new_unchecked(n, m, new_row_ptr, new_col_idx), new_val) }
}

/// computes the workspace layout required to convert a coordinate matrix with `nrows` rows and
/// `ncols` columns to row-major format.
pub fn coo_to_csr_scratch<I: Index, T>(nrows: usize, ncols: usize) -> StackReq {
	StackReq::any_of(&[StackReq::new::<I>(nrows), sum_duplicates_scratch::<I, T>(nrows, ncols)])
}

/// converts a matrix in coordinate format to row-major format.
///
/// the entries are bucketed by row with a counting sort, then duplicate entries are summed.
/// the output rows are sorted and free of duplicates, and entries that sum to zero are dropped.
///
/// # panics
/// panics if `row_idx`, `col_idx` and `val` don't have the same length, or if an index is out of
/// bounds.
#[track_caller]
pub fn coo_to_csr<I: Index, T: Scalar>(nrows: usize, ncols: usize, row_idx: &[I], col_idx: &[I], val: &[T]) -> Result<SparseRowMat<I, T>, SparseError> {
	let nnz = row_idx.len();
	assert!(all(col_idx.len() == nnz, val.len() == nnz));
	assert!(all(nrows <= I::Signed::MAX.zx(), ncols <= I::Signed::MAX.zx()));
	check_nnz::<I>(nnz)?;

	let mut mem = MemBuffer::try_new(coo_to_csr_scratch::<I, T>(nrows, ncols))?;
	let stack = MemStack::new(&mut mem);

	let mut new_row_ptr = try_zeroed::<I>(nrows + 1)?;
	let mut new_col_idx = try_zeroed::<I>(nnz)?;
	let mut new_val = try_collect(iter::repeat_n(T::zero(), nnz))?;

	{
		let (mut cursor, _) = stack.make_with(nrows, |_| I::truncate(0));
		for &i in row_idx {
			let i = i.zx();
			assert!(i < nrows);
			cursor[i] += I::truncate(1);
		}

		for i in 0..nrows {
			let start = new_row_ptr[i];
			new_row_ptr[i + 1] = start + cursor[i];
			cursor[i] = start;
		}

		for ((&i, &j), &x) in iter::zip(iter::zip(row_idx, col_idx), val) {
			assert!(j.zx() < ncols);
			let pos = &mut cursor[i.zx()];
			new_col_idx[pos.zx()] = j;
			new_val[pos.zx()] = x;
			*pos += I::truncate(1);
		}
	}

	let nnz = sum_duplicates(nrows, ncols, &mut new_row_ptr, &mut new_col_idx, &mut new_val, stack);
	new_col_idx.truncate(nnz);
	new_val.truncate(nnz);

	// SAFETY: the rows were sorted and deduplicated, and every column index was checked
	Ok(SparseRowMat::new(
		unsafe { SymbolicSparseRowMat::new_unchecked(nrows, ncols, new_row_ptr, new_col_idx) },
		new_val,
	))
}

/// writes the coordinate representation of `A` into `row_idx`, `col_idx` and `val`, in storage
/// order.
///
/// # panics
/// panics if the output slices don't have length `A.compute_nnz()`.
#[track_caller]
pub fn csr_to_coo<I: Index, T: Copy>(row_idx: &mut [I], col_idx: &mut [I], val: &mut [T], A: SparseRowMatRef<'_, I, T>) {
	let nnz = A.compute_nnz();
	assert!(all(row_idx.len() == nnz, col_idx.len() == nnz, val.len() == nnz));

	expand_ptr(A.row_ptr(), row_idx);
	col_idx.copy_from_slice(A.col_idx());
	val.copy_from_slice(A.val());
}

/// extracts the rectangle `rows` x `cols` of `A`, with the column indices rebased to start at
/// zero.
///
/// the relative order of the entries is preserved, so extracting the full extent reproduces `A`.
///
/// # panics
/// panics if either range is decreasing or out of bounds.
#[track_caller]
pub fn submatrix<I: Index, T: Copy>(A: SparseRowMatRef<'_, I, T>, rows: Range<usize>, cols: Range<usize>) -> Result<SparseRowMat<I, T>, SparseError> {
	assert!(all(rows.start <= rows.end, rows.end <= A.nrows(), cols.start <= cols.end, cols.end <= A.ncols(),));

	let in_range = |j: &I| cols.contains(&j.zx());

	let mut nnz = 0usize;
	for i in rows.clone() {
		nnz += A.col_idx_of_row_raw(i).iter().filter(|j| in_range(j)).count();
	}

	let mut new_row_ptr = try_zeroed::<I>(rows.len() + 1)?;
	let mut new_col_idx = Vec::new();
	let mut new_val = Vec::new();
	new_col_idx.try_reserve_exact(nnz)?;
	new_val.try_reserve_exact(nnz)?;

	for (new_i, i) in rows.enumerate() {
		for (j, &x) in iter::zip(A.col_idx_of_row_raw(i), A.val_of_row(i)) {
			if in_range(j) {
				new_col_idx.push(I::truncate(j.zx() - cols.start));
				new_val.push(x);
			}
		}
		new_row_ptr[new_i + 1] = I::truncate(new_col_idx.len());
	}
	debug_assert!(new_col_idx.len() == nnz);

	// SAFETY: new_row_ptr is non-decreasing and the column indices were rebased into 0..cols.len()
	Ok(SparseRowMat::new(
		unsafe { SymbolicSparseRowMat::new_unchecked(new_row_ptr.len() - 1, cols.len(), new_row_ptr, new_col_idx) },
		new_val,
	))
}

/// writes `A` into the dense row-major buffer `out`, of size `A.nrows() * A.ncols()`.
///
/// `out` is zeroed first, and duplicate entries are summed.
#[track_caller]
pub fn to_dense<I: Index, T: Scalar>(out: &mut [T], A: SparseRowMatRef<'_, I, T>) {
	to_dense_imp(out, A, A.ncols(), 1)
}

#[track_caller]
pub(crate) fn to_dense_imp<I: Index, T: Scalar>(out: &mut [T], A: SparseRowMatRef<'_, I, T>, row_stride: usize, col_stride: usize) {
	let (m, n) = A.shape();
	assert!(Some(out.len()) == m.checked_mul(n));

	#[cfg(feature = "perf-warn")]
	if out.len() >= (1 << 20) && A.compute_nnz().saturating_mul(64) < out.len() && crate::__perf_warn!(DENSE_WARN) {
		log::warn!(
			target: "sparsekit_perf",
			"converting a sparse matrix with {} stored entries to a dense {}x{} buffer.",
			A.compute_nnz(),
			m,
			n
		);
	}

	out.fill(T::zero());
	for i in 0..m {
		for (j, &x) in iter::zip(A.col_idx_of_row(i), A.val_of_row(i)) {
			out[i * row_stride + j * col_stride] += x;
		}
	}
}

/// converts the dense row-major `nrows` x `ncols` buffer `dense` to a row-major sparse matrix,
/// storing every entry that is not equal to zero.
#[track_caller]
pub fn from_dense<I: Index, T: Scalar>(nrows: usize, ncols: usize, dense: &[T]) -> Result<SparseRowMat<I, T>, SparseError> {
	from_dense_imp(nrows, ncols, dense, ncols, 1)
}

#[track_caller]
pub(crate) fn from_dense_imp<I: Index, T: Scalar>(
	nrows: usize,
	ncols: usize,
	dense: &[T],
	row_stride: usize,
	col_stride: usize,
) -> Result<SparseRowMat<I, T>, SparseError> {
	assert!(Some(dense.len()) == nrows.checked_mul(ncols));
	assert!(all(nrows <= I::Signed::MAX.zx(), ncols <= I::Signed::MAX.zx()));

	let nnz = dense.iter().filter(|x| !x.is_zero()).count();
	check_nnz::<I>(nnz)?;

	let mut row_ptr = try_zeroed::<I>(nrows + 1)?;
	let mut col_idx = Vec::new();
	let mut val = Vec::new();
	col_idx.try_reserve_exact(nnz)?;
	val.try_reserve_exact(nnz)?;

	for i in 0..nrows {
		for j in 0..ncols {
			let x = dense[i * row_stride + j * col_stride];
			if !x.is_zero() {
				col_idx.push(I::truncate(j));
				val.push(x);
			}
		}
		row_ptr[i + 1] = I::truncate(col_idx.len());
	}

	// SAFETY: columns are visited in increasing order
	Ok(SparseRowMat::new(
		unsafe { SymbolicSparseRowMat::new_unchecked(nrows, ncols, row_ptr, col_idx) },
		val,
	))
}

/// writes the main diagonal of `A` into `out`, of length `min(A.nrows(), A.ncols())`.
///
/// duplicate diagonal entries are summed.
#[track_caller]
pub fn diagonal<I: Index, T: Scalar>(out: &mut [T], A: SparseRowMatRef<'_, I, T>) {
	let n = Ord::min(A.nrows(), A.ncols());
	assert!(out.len() == n);

	for (i, out) in out.iter_mut().enumerate() {
		let mut diag = T::zero();
		for (j, &x) in iter::zip(A.col_idx_of_row(i), A.val_of_row(i)) {
			if j == i {
				diag += x;
			}
		}
		*out = diag;
	}
}

/// builds a column-major `nrows` x `ncols` matrix from a set of diagonals.
///
/// `diags` is a row-major `offsets.len()` x `min(nrows, ncols)` buffer, whose `k`-th row holds
/// the diagonal at offset `offsets[k]`, where a positive offset denotes a superdiagonal and a
/// negative one a subdiagonal. element `i` of a subdiagonal (or of the main diagonal) lands in
/// column `i`, while element `i` of a superdiagonal lands in row `i`. entries that fall outside
/// the matrix are skipped.
///
/// # note
/// the row indices of each column follow the order of `offsets`, and are unsorted in general.
/// stored zeros are kept.
#[track_caller]
pub fn spdiags<I: Index, T: Scalar>(nrows: usize, ncols: usize, offsets: &[isize], diags: &[T]) -> Result<SparseColMat<I, T>, SparseError> {
	let len = Ord::min(nrows, ncols);
	assert!(Some(diags.len()) == offsets.len().checked_mul(len));
	assert!(all(nrows <= I::Signed::MAX.zx(), ncols <= I::Signed::MAX.zx()));

	let mut col_ptr = try_zeroed::<I>(ncols + 1)?;
	let mut row_idx = Vec::new();
	let mut val = Vec::new();

	for j in 0..ncols {
		for (k, &offset) in offsets.iter().enumerate() {
			let Some(i) = (j as isize).checked_sub(offset) else {
				continue;
			};
			if i < 0 || i as usize >= nrows {
				continue;
			}
			let i = i as usize;

			let x = if offset <= 0 { diags[k * len + j] } else { diags[k * len + i] };
			try_push(&mut row_idx, I::truncate(i))?;
			try_push(&mut val, x)?;
		}
		check_nnz::<I>(row_idx.len())?;
		col_ptr[j + 1] = I::truncate(row_idx.len());
	}

	// SAFETY: col_ptr is non-decreasing and every row index is less than nrows
	Ok(SparseColMat::new(
		unsafe { SymbolicSparseColMat::new_unchecked(nrows, ncols, col_ptr, row_idx) },
		val,
	))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::assert;

	#[test]
	fn test_expand_ptr() {
		let ptr = &[0usize, 2, 2, 5, 6];
		let idx = &mut [0usize; 6];
		expand_ptr(ptr, idx);
		assert!(idx == &[0, 0, 2, 2, 2, 3]);
	}

	#[test]
	fn test_transpose() {
		let nrows = 3;
		let ncols = 5;
		let A = SparseRowMatRef::new(
			SymbolicSparseRowMatRef::new_unsorted_checked(
				nrows,
				ncols,
				&[0usize, 4, 8, 11],
				&[
					0, 0, 2, 4, //
					2, 1, 1, 0, //
					0, 1, 3,
				],
			),
			&[
				1.0, 2.0, 3.0, 4.0, //
				11.0, 12.0, 13.0, 14.0, //
				21.0, 22.0, 23.0,
			],
		);
		let nnz = A.compute_nnz();

		let new_row_ptr = &mut *vec![0usize; ncols + 1];
		let new_col_idx = &mut *vec![0usize; nnz];
		let new_val = &mut *vec![0.0; nnz];

		let out = transpose(
			new_val,
			new_row_ptr,
			new_col_idx,
			A,
			MemStack::new(&mut MemBuffer::new(transpose_scratch::<usize>(nrows, ncols))),
		)
		.into_const();

		assert!(all(
			out.nrows() == ncols,
			out.ncols() == nrows,
			out.row_ptr() == &[0, 4, 7, 9, 10, 11],
			out.col_idx() == &[0, 0, 1, 2, 1, 1, 2, 0, 1, 2, 0],
			out.val() == &[1.0, 2.0, 14.0, 21.0, 12.0, 13.0, 22.0, 3.0, 11.0, 23.0, 4.0],
		));
	}

	#[test]
	fn test_sort_indices() {
		let ptr = &[0usize, 3, 3, 5];
		let idx = &mut [4usize, 0, 2, 1, 0];
		let val = &mut [1.0, 2.0, 3.0, 4.0, 5.0];
		assert!(!has_sorted_indices(ptr, idx));

		sort_indices(ptr, idx, val);
		assert!(all(idx == &[0, 2, 4, 0, 1], val == &[2.0, 3.0, 1.0, 5.0, 4.0]));
		assert!(all(has_sorted_indices(ptr, idx), has_canonical_format(ptr, idx)));
	}

	#[test]
	fn test_canonical_format() {
		assert!(has_sorted_indices(&[0u32, 3], &[0, 1, 1]));
		assert!(!has_canonical_format(&[0u32, 3], &[0, 1, 1]));
		assert!(!has_canonical_format(&[0u32, 2, 1], &[0, 1]));
	}

	#[test]
	fn test_sum_duplicates() {
		let nrows = 3;
		let ncols = 4;
		let row_ptr = &mut [0u32, 4, 5, 9];
		let col_idx = &mut [3u32, 1, 3, 0, 2, 1, 1, 0, 2];
		let val = &mut [1.0, 2.0, 3.0, 4.0, 5.0, 1.0, -1.0, 7.0, 8.0];

		let mut mem = MemBuffer::new(sum_duplicates_scratch::<u32, f64>(nrows, ncols));
		let stack = MemStack::new(&mut mem);
		let nnz = sum_duplicates(nrows, ncols, row_ptr, col_idx, val, stack);

		assert!(nnz == 6);
		assert!(row_ptr == &[0, 3, 4, 6]);
		assert!(&col_idx[..nnz] == &[0, 1, 3, 2, 0, 2]);
		assert!(&val[..nnz] == &[4.0, 2.0, 4.0, 5.0, 7.0, 8.0]);

		let once = (row_ptr.to_vec(), col_idx[..nnz].to_vec(), val[..nnz].to_vec());
		let again = sum_duplicates(nrows, ncols, row_ptr, &mut col_idx[..nnz], &mut val[..nnz], stack);
		assert!(again == nnz);
		assert!(all(row_ptr == &*once.0, &col_idx[..nnz] == &*once.1, &val[..nnz] == &*once.2));
	}

	#[test]
	fn test_sum_duplicates_shrinking_rows() {
		// every row shrinks, so each new boundary is written over a position that still holds
		// the old boundary of the next row
		let row_ptr = &mut [0usize, 3, 6];
		let col_idx = &mut [1usize, 1, 1, 0, 0, 1];
		let val = &mut [1i32, 1, 1, 2, 2, 0];

		let mut mem = MemBuffer::new(sum_duplicates_scratch::<usize, i32>(2, 2));
		let stack = MemStack::new(&mut mem);
		let nnz = sum_duplicates(2, 2, row_ptr, col_idx, val, stack);

		assert!(nnz == 2);
		assert!(row_ptr == &[0, 1, 2]);
		assert!(&col_idx[..nnz] == &[1, 0]);
		assert!(&val[..nnz] == &[3, 4]);
	}

	#[test]
	fn test_coo_to_csr() {
		let row_idx = &[2usize, 0, 2, 1, 0, 2];
		let col_idx = &[1usize, 3, 1, 0, 0, 0];
		let val = &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

		let A = coo_to_csr(3, 4, row_idx, col_idx, val).unwrap();
		assert!(all(
			A.row_ptr() == &[0, 2, 3, 5],
			A.col_idx() == &[0, 3, 0, 0, 1],
			A.val() == &[5.0, 2.0, 4.0, 6.0, 4.0],
		));
	}

	#[test]
	fn test_coo_to_csr_empty() {
		let A = coo_to_csr::<u32, f64>(3, 2, &[], &[], &[]).unwrap();
		assert!(all(A.row_ptr() == &[0, 0, 0, 0], A.compute_nnz() == 0));
	}

	#[test]
	fn test_csr_to_coo() {
		let A = SparseRowMatRef::new(SymbolicSparseRowMatRef::new_unsorted_checked(3, 3, &[0usize, 2, 2, 3], &[2, 0, 1]), &[1.0, 0.0, 3.0]);
		let row_idx = &mut [0usize; 3];
		let col_idx = &mut [0usize; 3];
		let val = &mut [0.0; 3];

		csr_to_coo(row_idx, col_idx, val, A);
		assert!(all(row_idx == &[0, 0, 2], col_idx == &[2, 0, 1], val == &[1.0, 0.0, 3.0]));
	}

	#[test]
	fn test_submatrix() {
		let A = SparseRowMatRef::new(
			SymbolicSparseRowMatRef::new_unsorted_checked(3, 4, &[0usize, 3, 4, 7], &[3, 0, 1, 2, 1, 3, 0]),
			&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
		);

		let full = submatrix(A, 0..3, 0..4).unwrap();
		assert!(all(full.row_ptr() == A.row_ptr(), full.col_idx() == A.col_idx(), full.val() == A.val()));

		let sub = submatrix(A, 1..3, 1..4).unwrap();
		assert!(all(
			sub.nrows() == 2,
			sub.ncols() == 3,
			sub.row_ptr() == &[0, 1, 3],
			sub.col_idx() == &[1, 0, 2],
			sub.val() == &[4.0, 5.0, 6.0],
		));

		let empty = submatrix(A, 2..2, 0..4).unwrap();
		assert!(all(empty.nrows() == 0, empty.row_ptr() == &[0]));
	}

	#[test]
	fn test_dense() {
		let A = SparseRowMatRef::new(
			SymbolicSparseRowMatRef::new_unsorted_checked(2, 3, &[0usize, 3, 4], &[2, 0, 2, 1]),
			&[1.0, 2.0, 3.0, 0.0],
		);
		let dense = &mut [f64::NAN; 6];
		to_dense(dense, A);
		assert!(dense == &[2.0, 0.0, 4.0, 0.0, 0.0, 0.0]);

		let B = from_dense::<u32, f64>(2, 3, dense).unwrap();
		assert!(all(B.row_ptr() == &[0, 2, 2], B.col_idx() == &[0, 2], B.val() == &[2.0, 4.0]));
	}

	#[test]
	fn test_diagonal_sums_duplicates() {
		let A = SparseRowMatRef::new(
			SymbolicSparseRowMatRef::new_unsorted_checked(3, 2, &[0usize, 3, 4, 5], &[0, 1, 0, 0, 1]),
			&[1.0, 2.0, 3.0, 4.0, 5.0],
		);
		let diag = &mut [0.0; 2];
		diagonal(diag, A);
		assert!(diag == &[4.0, 0.0]);
	}

	#[test]
	fn test_spdiags() {
		// offsets -1, 0, 1 on a 3 x 4 matrix, diagonals of length 3
		let diags = &[
			1.0, 2.0, 3.0, //
			4.0, 5.0, 6.0, //
			7.0, 8.0, 9.0,
		];
		let A = spdiags::<usize, f64>(3, 4, &[-1, 0, 1], diags).unwrap();

		assert!(all(
			A.col_ptr() == &[0, 2, 5, 7, 8],
			A.row_idx() == &[1, 0, 2, 1, 0, 2, 1, 2],
			A.val() == &[1.0, 4.0, 2.0, 5.0, 7.0, 6.0, 8.0, 9.0],
		));
		assert!(A.to_dense() == [4.0, 7.0, 0.0, 0.0, 1.0, 5.0, 8.0, 0.0, 0.0, 2.0, 6.0, 9.0]);
	}

	fn unsorted_with_duplicates() -> SparseRowMat<u32, f64> {
		// duplicates at (0, 3) and (2, 0), a pair cancelling out at (2, 1), an explicit zero at (1, 2)
		SparseRowMat::new(
			SymbolicSparseRowMat::new_unsorted_checked(3, 4, vec![0u32, 4, 6, 11], vec![3, 1, 3, 0, 2, 0, 1, 0, 3, 1, 0]),
			vec![1.0, 2.0, 3.0, 4.0, 0.0, 5.0, 6.0, 7.0, 8.0, -6.0, 9.0],
		)
	}

	#[test]
	fn test_row_major_col_major_round_trip() {
		let A = unsorted_with_duplicates();

		let At = A.to_col_major().unwrap();
		assert!(At.has_sorted_indices());
		let B = At.to_row_major().unwrap();

		// both transposes are stable, so duplicates keep their relative order
		let mut expected = A.clone();
		expected.sort_indices();
		assert!(all(
			B.nrows() == 3,
			B.ncols() == 4,
			B.row_ptr() == expected.row_ptr(),
			B.col_idx() == expected.col_idx(),
			B.val() == expected.val(),
		));
		assert!(B.col_idx() == &[0, 1, 3, 3, 0, 2, 0, 0, 1, 1, 3]);
		assert!(B.val() == &[4.0, 2.0, 1.0, 3.0, 5.0, 0.0, 7.0, 9.0, 6.0, -6.0, 8.0]);
	}

	#[test]
	fn test_coo_round_trip_sums_duplicates() {
		let A = unsorted_with_duplicates();

		let coo = A.to_coo().unwrap();
		let B = coo_to_csr(coo.nrows(), coo.ncols(), coo.row_idx(), coo.col_idx(), coo.val()).unwrap();

		let mut expected = A.clone();
		expected.sum_duplicates().unwrap();
		assert!(all(
			B.row_ptr() == expected.row_ptr(),
			B.col_idx() == expected.col_idx(),
			B.val() == expected.val(),
		));
		assert!(all(B.row_ptr() == &[0, 3, 4, 6], B.col_idx() == &[0, 1, 3, 0, 0, 3], B.val() == &[4.0, 2.0, 4.0, 5.0, 16.0, 8.0]));
		assert!(has_canonical_format(B.row_ptr(), B.col_idx()));
	}

	#[test]
	fn test_sort_indices_long_row() {
		// longer than the insertion sort cutoff
		let n = 100usize;
		let ptr = &[0usize, n];
		let idx = &mut *(0..n).rev().collect::<Vec<_>>();
		let val = &mut *(0..n).rev().map(|j| j as f64).collect::<Vec<_>>();

		sort_indices(ptr, idx, val);
		assert!(has_sorted_indices(ptr, idx));
		for j in 0..n {
			assert!(all(idx[j] == j, val[j] == j as f64));
		}
	}
}
