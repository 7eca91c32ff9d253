use crate::internal_prelude::*;
use crate::sparse::accumulator::{SymbolicAccumulator, symbolic_accumulator_scratch};
use crate::sparse::check_nnz;
use crate::assert;

/// computes the workspace layout required by [`try_binary_op`] for matrices with `nrows` rows
/// and `ncols` columns.
pub fn binary_op_scratch<I: Index, T>(nrows: usize, ncols: usize) -> StackReq {
	_ = nrows;
	StackReq::all_of(&[symbolic_accumulator_scratch::<I>(ncols), StackReq::new::<T>(ncols), StackReq::new::<T>(ncols)])
}

/// returns the matrix obtained by applying `f` to the elements of `lhs` and `rhs` at every
/// position stored in at least one of them, where `f` is called with the row, the column and
/// both values.
///
/// duplicate entries within an operand are summed before `f` sees them, and a value missing
/// from one operand is read as zero. results equal to zero are not stored. the column indices of
/// each output row are unsorted.
///
/// the first error returned by `f` is forwarded.
///
/// # panics
/// panics if `lhs` and `rhs` don't have matching dimensions.
#[track_caller]
pub fn try_binary_op<I: Index, T: Scalar>(
	lhs: SparseRowMatRef<'_, I, T>,
	rhs: SparseRowMatRef<'_, I, T>,
	f: impl FnMut(usize, usize, T, T) -> Result<T, SparseError>,
) -> Result<SparseRowMat<I, T>, SparseError> {
	assert!(all(lhs.nrows() == rhs.nrows(), lhs.ncols() == rhs.ncols()));
	let mut f = f;
	let (m, n) = lhs.shape();

	let capacity = lhs.compute_nnz().checked_add(rhs.compute_nnz()).ok_or(SparseError::IndexOverflow)?;
	let mut row_ptr = try_zeroed::<I>(m + 1)?;
	let mut col_idx = Vec::new();
	let mut val = Vec::new();
	col_idx.try_reserve_exact(capacity)?;
	val.try_reserve_exact(capacity)?;

	let mut mem = MemBuffer::try_new(binary_op_scratch::<I, T>(m, n))?;
	let stack = MemStack::new(&mut mem);
	let (mut next, stack) = stack.make_with(n, |_| I::truncate(0));
	let (mut lhs_row, stack) = stack.make_with(n, |_| T::zero());
	let (mut rhs_row, _) = stack.make_with(n, |_| T::zero());
	let lhs_row = &mut *lhs_row;
	let rhs_row = &mut *rhs_row;
	let mut cols = SymbolicAccumulator::new(&mut next);

	for i in 0..m {
		for (j, &x) in iter::zip(lhs.col_idx_of_row(i), lhs.val_of_row(i)) {
			lhs_row[j] += x;
			cols.insert(j);
		}
		for (j, &x) in iter::zip(rhs.col_idx_of_row(i), rhs.val_of_row(i)) {
			rhs_row[j] += x;
			cols.insert(j);
		}

		for j in cols.drain() {
			let a = core::mem::replace(&mut lhs_row[j], T::zero());
			let b = core::mem::replace(&mut rhs_row[j], T::zero());
			let x = f(i, j, a, b)?;
			if !x.is_zero() {
				col_idx.push(I::truncate(j));
				val.push(x);
			}
		}

		check_nnz::<I>(col_idx.len())?;
		row_ptr[i + 1] = I::truncate(col_idx.len());
	}

	// SAFETY: row_ptr is non-decreasing and every column index comes from an operand
	Ok(SparseRowMat::new(
		unsafe { SymbolicSparseRowMat::new_unchecked(m, n, row_ptr, col_idx) },
		val,
	))
}

/// returns the matrix obtained by applying `f` to the elements of `lhs` and `rhs` at every
/// position stored in at least one of them.
///
/// see [`try_binary_op`].
#[track_caller]
pub fn binary_op<I: Index, T: Scalar>(
	lhs: SparseRowMatRef<'_, I, T>,
	rhs: SparseRowMatRef<'_, I, T>,
	f: impl FnMut(T, T) -> T,
) -> Result<SparseRowMat<I, T>, SparseError> {
	let mut f = f;
	try_binary_op(lhs, rhs, |_, _, a, b| Ok(f(a, b)))
}

/// returns `lhs + rhs`
#[track_caller]
pub fn add<I: Index, T: Scalar>(lhs: SparseRowMatRef<'_, I, T>, rhs: SparseRowMatRef<'_, I, T>) -> Result<SparseRowMat<I, T>, SparseError> {
	binary_op(lhs, rhs, |a, b| a + b)
}

/// returns `lhs - rhs`
#[track_caller]
pub fn sub<I: Index, T: Scalar>(lhs: SparseRowMatRef<'_, I, T>, rhs: SparseRowMatRef<'_, I, T>) -> Result<SparseRowMat<I, T>, SparseError> {
	binary_op(lhs, rhs, |a, b| a - b)
}

/// returns the elementwise product of `lhs` and `rhs`
#[track_caller]
pub fn mul<I: Index, T: Scalar>(lhs: SparseRowMatRef<'_, I, T>, rhs: SparseRowMatRef<'_, I, T>) -> Result<SparseRowMat<I, T>, SparseError> {
	binary_op(lhs, rhs, |a, b| a * b)
}

/// returns the elementwise quotient of `lhs` and `rhs`
///
/// every position stored in either operand is divided, with missing values read as zero. for
/// floating point types this follows IEEE semantics, and the resulting infinities and NaNs are
/// stored. for integer types, [`SparseError::UndefinedQuotient`] is returned for the first
/// position where the quotient is not representable.
#[track_caller]
pub fn div<I: Index, T: Scalar>(lhs: SparseRowMatRef<'_, I, T>, rhs: SparseRowMatRef<'_, I, T>) -> Result<SparseRowMat<I, T>, SparseError> {
	try_binary_op(lhs, rhs, |row, col, a, b| a.checked_quotient(b).ok_or(SparseError::UndefinedQuotient { row, col }))
}

/// elementwise operations between column-major matrices, evaluated on their transposes.
pub mod col_major {
	use crate::internal_prelude::*;

	/// see [`super::try_binary_op`]. the row indices of each output column are unsorted.
	#[track_caller]
	pub fn try_binary_op<I: Index, T: Scalar>(
		lhs: SparseColMatRef<'_, I, T>,
		rhs: SparseColMatRef<'_, I, T>,
		f: impl FnMut(usize, usize, T, T) -> Result<T, SparseError>,
	) -> Result<SparseColMat<I, T>, SparseError> {
		let mut f = f;
		Ok(super::try_binary_op(lhs.transpose(), rhs.transpose(), |col, row, a, b| f(row, col, a, b))?.into_transpose())
	}

	/// see [`super::binary_op`]
	#[track_caller]
	pub fn binary_op<I: Index, T: Scalar>(
		lhs: SparseColMatRef<'_, I, T>,
		rhs: SparseColMatRef<'_, I, T>,
		f: impl FnMut(T, T) -> T,
	) -> Result<SparseColMat<I, T>, SparseError> {
		Ok(super::binary_op(lhs.transpose(), rhs.transpose(), f)?.into_transpose())
	}

	/// returns `lhs + rhs`
	#[track_caller]
	pub fn add<I: Index, T: Scalar>(lhs: SparseColMatRef<'_, I, T>, rhs: SparseColMatRef<'_, I, T>) -> Result<SparseColMat<I, T>, SparseError> {
		Ok(super::add(lhs.transpose(), rhs.transpose())?.into_transpose())
	}

	/// returns `lhs - rhs`
	#[track_caller]
	pub fn sub<I: Index, T: Scalar>(lhs: SparseColMatRef<'_, I, T>, rhs: SparseColMatRef<'_, I, T>) -> Result<SparseColMat<I, T>, SparseError> {
		Ok(super::sub(lhs.transpose(), rhs.transpose())?.into_transpose())
	}

	/// returns the elementwise product of `lhs` and `rhs`
	#[track_caller]
	pub fn mul<I: Index, T: Scalar>(lhs: SparseColMatRef<'_, I, T>, rhs: SparseColMatRef<'_, I, T>) -> Result<SparseColMat<I, T>, SparseError> {
		Ok(super::mul(lhs.transpose(), rhs.transpose())?.into_transpose())
	}

	/// returns the elementwise quotient of `lhs` and `rhs`, see [`super::div`]
	#[track_caller]
	pub fn div<I: Index, T: Scalar>(lhs: SparseColMatRef<'_, I, T>, rhs: SparseColMatRef<'_, I, T>) -> Result<SparseColMat<I, T>, SparseError> {
		try_binary_op(lhs, rhs, |row, col, a, b| a.checked_quotient(b).ok_or(SparseError::UndefinedQuotient { row, col }))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::assert;
	use crate::sparse::Triplet;
	use rand::rngs::StdRng;
	use rand::{Rng, SeedableRng};

	fn csr(nrows: usize, ncols: usize, entries: &[(usize, usize, f64)]) -> SparseRowMat<usize, f64> {
		// built by hand so that duplicates and unsorted columns survive
		let mut row_ptr = vec![0usize; nrows + 1];
		let mut sorted = entries.to_vec();
		sorted.sort_by_key(|&(i, _, _)| i);
		for &(i, _, _) in &sorted {
			row_ptr[i + 1] += 1;
		}
		for i in 0..nrows {
			row_ptr[i + 1] += row_ptr[i];
		}
		SparseRowMat::new(
			SymbolicSparseRowMat::new_unsorted_checked(nrows, ncols, row_ptr, sorted.iter().map(|e| e.1).collect()),
			sorted.iter().map(|e| e.2).collect(),
		)
	}

	fn sorted_entries<I: Index, T: Scalar>(A: &SparseRowMat<I, T>) -> Vec<(usize, usize, T)> {
		let mut out = Vec::new();
		for i in 0..A.nrows() {
			for (j, &x) in iter::zip(A.col_idx_of_row(i), A.val_of_row(i)) {
				out.push((i, j, x));
			}
		}
		out.sort_by_key(|&(i, j, _)| (i, j));
		out
	}

	#[test]
	fn test_add_sub() {
		let A = csr(2, 3, &[(0, 0, 1.0), (0, 2, 2.0), (1, 1, 3.0)]);
		let B = csr(2, 3, &[(0, 2, -2.0), (1, 0, 4.0), (1, 1, 1.0)]);

		let C = add(A.as_ref(), B.as_ref()).unwrap();
		assert!(sorted_entries(&C) == [(0, 0, 1.0), (1, 0, 4.0), (1, 1, 4.0)]);
		assert!(C.to_dense() == [1.0, 0.0, 0.0, 4.0, 4.0, 0.0]);

		let D = sub(A.as_ref(), B.as_ref()).unwrap();
		assert!(sorted_entries(&D) == [(0, 0, 1.0), (0, 2, 4.0), (1, 0, -4.0), (1, 1, 2.0)]);
	}

	#[test]
	fn test_duplicates_are_summed_first() {
		let A = csr(1, 2, &[(0, 1, 1.0), (0, 1, 2.0)]);
		let B = csr(1, 2, &[(0, 1, 2.0), (0, 0, 5.0)]);

		let C = mul(A.as_ref(), B.as_ref()).unwrap();
		assert!(sorted_entries(&C) == [(0, 1, 6.0)]);
	}

	#[test]
	fn test_add_empty() {
		let A = csr(2, 2, &[]);
		let B = csr(2, 2, &[(1, 0, 1.0)]);
		let C = add(A.as_ref(), B.as_ref()).unwrap();
		assert!(all(C.row_ptr() == &[0, 0, 1], C.col_idx() == &[0], C.val() == &[1.0]));
	}

	#[test]
	fn test_add_disjoint_patterns() {
		let A = csr(2, 2, &[(0, 0, 1.0), (1, 1, 2.0)]);
		let B = csr(2, 2, &[(0, 1, 3.0), (1, 0, 4.0)]);

		let C = add(A.as_ref(), B.as_ref()).unwrap();
		assert!(C.compute_nnz() == 4);
		assert!(C.to_dense() == [1.0, 3.0, 4.0, 2.0]);
	}

	#[test]
	fn test_sub_self_is_empty() {
		// unsorted, with a duplicate at (0, 2) and an explicit zero at (1, 0)
		let A = csr(3, 3, &[(0, 2, 1.0), (0, 0, 5.0), (0, 2, 2.0), (1, 0, 0.0), (2, 1, -3.0)]);

		let C = sub(A.as_ref(), A.as_ref()).unwrap();
		assert!(all(C.compute_nnz() == 0, C.row_ptr() == &[0, 0, 0, 0]));
		assert!(C.to_dense() == [0.0; 9]);
	}

	#[test]
	fn test_div_float() {
		let A = csr(1, 3, &[(0, 0, 1.0), (0, 1, 0.0), (0, 2, 6.0)]);
		let B = csr(1, 3, &[(0, 2, 3.0)]);

		let C = div(A.as_ref(), B.as_ref()).unwrap();
		let entries = sorted_entries(&C);
		assert!(entries.len() == 3);
		assert!(all(entries[0].2 == f64::INFINITY, entries[1].2.is_nan(), entries[2].2 == 2.0));
	}

	#[test]
	fn test_div_integer() {
		let A = SparseRowMat::<u32, i32>::try_new_from_triplets(2, 2, &[Triplet::new(0, 0, 6), Triplet::new(1, 1, 7)]).unwrap();
		let B = SparseRowMat::<u32, i32>::try_new_from_triplets(2, 2, &[Triplet::new(0, 0, 3), Triplet::new(1, 1, 2)]).unwrap();
		let C = div(A.as_ref(), B.as_ref()).unwrap();
		assert!(all(C.row_ptr() == &[0, 1, 2], C.val() == &[2, 3]));

		let B = SparseRowMat::<u32, i32>::try_new_from_triplets(2, 2, &[Triplet::new(0, 0, 3)]).unwrap();
		let err = div(A.as_ref(), B.as_ref()).unwrap_err();
		assert!(err == SparseError::UndefinedQuotient { row: 1, col: 1 });
	}

	#[test]
	fn test_col_major() {
		let A = SparseColMat::<usize, f64>::try_new_from_triplets(3, 2, &[Triplet::new(2, 0, 1.0), Triplet::new(0, 1, 2.0)]).unwrap();
		let B = SparseColMat::<usize, f64>::try_new_from_triplets(3, 2, &[Triplet::new(2, 0, 1.0), Triplet::new(1, 1, 5.0)]).unwrap();

		let C = col_major::add(A.as_ref(), B.as_ref()).unwrap();
		assert!(C.to_dense() == [0.0, 2.0, 0.0, 5.0, 2.0, 0.0]);

		let D = col_major::sub(A.as_ref(), B.as_ref()).unwrap();
		assert!(D.to_dense() == [0.0, 2.0, 0.0, -5.0, 0.0, 0.0]);

		let err = col_major::try_binary_op(A.as_ref(), B.as_ref(), |row, col, a, b| {
			if row == 1 { Err(SparseError::UndefinedQuotient { row, col }) } else { Ok(a + b) }
		})
		.unwrap_err();
		assert!(err == SparseError::UndefinedQuotient { row: 1, col: 1 });
	}

	#[test]
	fn test_random_against_dense() {
		let rng = &mut StdRng::seed_from_u64(0);
		let (m, n) = (13, 17);

		let mut random = |density: f64| {
			let mut entries = Vec::new();
			for i in 0..m {
				for j in 0..n {
					if rng.gen_bool(density) {
						entries.push((i, j, rng.gen_range(-4i64..=4)));
					}
				}
			}
			entries
		};
		let a = random(0.3);
		let b = random(0.2);

		let A = SparseRowMat::<u32, i64>::try_new_from_triplets(m, n, &a.iter().map(|&(i, j, x)| Triplet::new(i as u32, j as u32, x)).collect::<Vec<_>>()).unwrap();
		let B = SparseRowMat::<u32, i64>::try_new_from_triplets(m, n, &b.iter().map(|&(i, j, x)| Triplet::new(i as u32, j as u32, x)).collect::<Vec<_>>()).unwrap();

		let (A_dense, B_dense) = (A.to_dense(), B.to_dense());
		let sum = add(A.as_ref(), B.as_ref()).unwrap();
		let prod = mul(A.as_ref(), B.as_ref()).unwrap();

		assert!(sum.to_dense() == iter::zip(&A_dense, &B_dense).map(|(a, b)| a + b).collect::<Vec<_>>());
		assert!(prod.to_dense() == iter::zip(&A_dense, &B_dense).map(|(a, b)| a * b).collect::<Vec<_>>());
		assert!(sum.val().iter().all(|&x| x != 0));
		assert!(prod.val().iter().all(|&x| x != 0));
	}
}
