use crate::internal_prelude::*;
use crate::sparse::{Pair, SparseCooMat, Triplet, utils};
use crate::{assert, debug_assert};
use core::fmt;
use core::ops::Range;

/// symbolic structure of a sparse matrix in row-major format
///
/// # invariants
/// - `nrows <= I::Signed::MAX` and `ncols <= I::Signed::MAX`
/// - `row_ptr` has length `nrows + 1`, starts at zero and is non-decreasing
/// - `row_ptr[nrows] == col_idx.len()`
/// - the column indices of each row are less than `ncols`
/// - checked constructors additionally require the column indices of each row to be strictly
///   increasing, unless the `unsorted` variant is used
pub struct SymbolicSparseRowMatRef<'a, I> {
	pub(super) nrows: usize,
	pub(super) ncols: usize,
	pub(super) row_ptr: &'a [I],
	pub(super) col_idx: &'a [I],
}

/// view over a sparse matrix in row-major format
pub struct SparseRowMatRef<'a, I, T> {
	pub(super) symbolic: SymbolicSparseRowMatRef<'a, I>,
	pub(super) val: &'a [T],
}

/// mutable view over a sparse matrix in row-major format
///
/// the values can be modified, but not the structure.
pub struct SparseRowMatMut<'a, I, T> {
	pub(super) symbolic: SymbolicSparseRowMatRef<'a, I>,
	pub(super) val: &'a mut [T],
}

/// owning symbolic structure of a sparse matrix in row-major format
#[derive(Clone)]
pub struct SymbolicSparseRowMat<I> {
	pub(super) nrows: usize,
	pub(super) ncols: usize,
	pub(super) row_ptr: Vec<I>,
	pub(super) col_idx: Vec<I>,
}

/// owning sparse matrix in row-major format
#[derive(Clone)]
pub struct SparseRowMat<I, T> {
	pub(super) symbolic: SymbolicSparseRowMat<I>,
	pub(super) val: Vec<T>,
}

impl<I> Copy for SymbolicSparseRowMatRef<'_, I> {}
impl<I, T> Copy for SparseRowMatRef<'_, I, T> {}

impl<I> Clone for SymbolicSparseRowMatRef<'_, I> {
	#[inline]
	fn clone(&self) -> Self {
		*self
	}
}
impl<I, T> Clone for SparseRowMatRef<'_, I, T> {
	#[inline]
	fn clone(&self) -> Self {
		*self
	}
}

impl<'a, I> IntoConst for SymbolicSparseRowMatRef<'a, I> {
	type Target = SymbolicSparseRowMatRef<'a, I>;

	#[inline]
	fn into_const(self) -> Self::Target {
		self
	}
}

impl<'short, I> Reborrow<'short> for SymbolicSparseRowMatRef<'_, I> {
	type Target = SymbolicSparseRowMatRef<'short, I>;

	#[inline]
	fn rb(&'short self) -> Self::Target {
		*self
	}
}

impl<'short, I> ReborrowMut<'short> for SymbolicSparseRowMatRef<'_, I> {
	type Target = SymbolicSparseRowMatRef<'short, I>;

	#[inline]
	fn rb_mut(&'short mut self) -> Self::Target {
		*self
	}
}

impl<'a, I, T> IntoConst for SparseRowMatRef<'a, I, T> {
	type Target = SparseRowMatRef<'a, I, T>;

	#[inline]
	fn into_const(self) -> Self::Target {
		self
	}
}

impl<'short, I, T> Reborrow<'short> for SparseRowMatRef<'_, I, T> {
	type Target = SparseRowMatRef<'short, I, T>;

	#[inline]
	fn rb(&'short self) -> Self::Target {
		*self
	}
}

impl<'short, I, T> ReborrowMut<'short> for SparseRowMatRef<'_, I, T> {
	type Target = SparseRowMatRef<'short, I, T>;

	#[inline]
	fn rb_mut(&'short mut self) -> Self::Target {
		*self
	}
}

impl<'a, I, T> IntoConst for SparseRowMatMut<'a, I, T> {
	type Target = SparseRowMatRef<'a, I, T>;

	#[inline]
	fn into_const(self) -> Self::Target {
		SparseRowMatRef {
			symbolic: self.symbolic,
			val: self.val,
		}
	}
}

impl<'short, I, T> Reborrow<'short> for SparseRowMatMut<'_, I, T> {
	type Target = SparseRowMatRef<'short, I, T>;

	#[inline]
	fn rb(&'short self) -> Self::Target {
		SparseRowMatRef {
			symbolic: self.symbolic,
			val: self.val,
		}
	}
}

impl<'short, I, T> ReborrowMut<'short> for SparseRowMatMut<'_, I, T> {
	type Target = SparseRowMatMut<'short, I, T>;

	#[inline]
	fn rb_mut(&'short mut self) -> Self::Target {
		SparseRowMatMut {
			symbolic: self.symbolic,
			val: self.val,
		}
	}
}

impl<'short, I> Reborrow<'short> for SymbolicSparseRowMat<I> {
	type Target = SymbolicSparseRowMatRef<'short, I>;

	#[inline]
	fn rb(&'short self) -> Self::Target {
		SymbolicSparseRowMatRef {
			nrows: self.nrows,
			ncols: self.ncols,
			row_ptr: &self.row_ptr,
			col_idx: &self.col_idx,
		}
	}
}

impl<'short, I, T> Reborrow<'short> for SparseRowMat<I, T> {
	type Target = SparseRowMatRef<'short, I, T>;

	#[inline]
	fn rb(&'short self) -> Self::Target {
		SparseRowMatRef {
			symbolic: self.symbolic.rb(),
			val: &self.val,
		}
	}
}

impl<'short, I, T> ReborrowMut<'short> for SparseRowMat<I, T> {
	type Target = SparseRowMatMut<'short, I, T>;

	#[inline]
	fn rb_mut(&'short mut self) -> Self::Target {
		SparseRowMatMut {
			symbolic: self.symbolic.rb(),
			val: &mut self.val,
		}
	}
}

#[inline(always)]
#[track_caller]
fn assume_row_ptr<I: Index>(nrows: usize, ncols: usize, row_ptr: &[I], col_idx: &[I]) {
	assert!(all(nrows <= I::Signed::MAX.zx(), ncols <= I::Signed::MAX.zx()));
	assert!(row_ptr.len() == nrows + 1);
	assert!(all(row_ptr[0].zx() == 0, row_ptr[nrows].zx() == col_idx.len()));
}

#[track_caller]
fn check_row_ptr<I: Index>(nrows: usize, ncols: usize, row_ptr: &[I], col_idx: &[I]) {
	assume_row_ptr(nrows, ncols, row_ptr, col_idx);
	for &[row, row_next] in windows2(row_ptr) {
		assert!(row <= row_next);
	}
}

#[track_caller]
fn check_col_idx<I: Index>(ncols: usize, row_ptr: &[I], col_idx: &[I]) {
	for &[r, r_next] in windows2(row_ptr) {
		let col_idx = &col_idx[r.zx()..r_next.zx()];
		if let Some((&last, _)) = col_idx.split_last() {
			for &[j, j_next] in windows2(col_idx) {
				assert!(j < j_next);
			}
			assert!(last.zx() < ncols);
		}
	}
}

#[track_caller]
fn check_col_idx_unsorted<I: Index>(ncols: usize, row_ptr: &[I], col_idx: &[I]) {
	for &[r, r_next] in windows2(row_ptr) {
		for &j in &col_idx[r.zx()..r_next.zx()] {
			assert!(j.zx() < ncols);
		}
	}
}

impl<'a, I: Index> SymbolicSparseRowMatRef<'a, I> {
	/// creates a new symbolic matrix view without checking its invariants
	///
	/// # safety
	/// see type level documentation. only the O(1) shape facts are asserted.
	#[inline]
	#[track_caller]
	pub unsafe fn new_unchecked(nrows: usize, ncols: usize, row_ptr: &'a [I], col_idx: &'a [I]) -> Self {
		assume_row_ptr(nrows, ncols, row_ptr, col_idx);
		Self {
			nrows,
			ncols,
			row_ptr,
			col_idx,
		}
	}

	/// creates a new symbolic matrix view after checking its invariants
	///
	/// # panics
	/// see type level documentation
	#[inline]
	#[track_caller]
	pub fn new_checked(nrows: usize, ncols: usize, row_ptr: &'a [I], col_idx: &'a [I]) -> Self {
		check_row_ptr(nrows, ncols, row_ptr, col_idx);
		check_col_idx(ncols, row_ptr, col_idx);
		Self {
			nrows,
			ncols,
			row_ptr,
			col_idx,
		}
	}

	/// creates a new symbolic matrix view after checking its invariants, allowing unsorted and
	/// duplicate column indices
	///
	/// # panics
	/// see type level documentation
	#[inline]
	#[track_caller]
	pub fn new_unsorted_checked(nrows: usize, ncols: usize, row_ptr: &'a [I], col_idx: &'a [I]) -> Self {
		check_row_ptr(nrows, ncols, row_ptr, col_idx);
		check_col_idx_unsorted(ncols, row_ptr, col_idx);
		Self {
			nrows,
			ncols,
			row_ptr,
			col_idx,
		}
	}

	#[inline]
	pub fn parts(self) -> (usize, usize, &'a [I], &'a [I]) {
		(self.nrows, self.ncols, self.row_ptr, self.col_idx)
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

	/// returns a view over the transpose of `self` in column-major format
	#[inline]
	pub fn transpose(self) -> SymbolicSparseColMatRef<'a, I> {
		SymbolicSparseColMatRef {
			nrows: self.ncols,
			ncols: self.nrows,
			col_ptr: self.row_ptr,
			row_idx: self.col_idx,
		}
	}

	#[inline]
	pub fn to_owned(&self) -> Result<SymbolicSparseRowMat<I>, SparseError> {
		Ok(SymbolicSparseRowMat {
			nrows: self.nrows,
			ncols: self.ncols,
			row_ptr: try_collect(self.row_ptr.iter().copied())?,
			col_idx: try_collect(self.col_idx.iter().copied())?,
		})
	}

	/// returns the number of stored entries
	#[inline]
	pub fn compute_nnz(&self) -> usize {
		self.col_idx.len()
	}

	#[inline]
	pub fn row_ptr(&self) -> &'a [I] {
		self.row_ptr
	}

	#[inline]
	pub fn col_idx(&self) -> &'a [I] {
		self.col_idx
	}

	/// returns the range that the row `i` occupies in `self.col_idx()`
	///
	/// # panics
	/// panics if `i >= self.nrows()`
	#[inline]
	#[track_caller]
	pub fn row_range(&self, i: usize) -> Range<usize> {
		assert!(i < self.nrows());
		self.row_ptr[i].zx()..self.row_ptr[i + 1].zx()
	}

	/// returns the column indices of the row `i`
	#[inline]
	#[track_caller]
	pub fn col_idx_of_row_raw(&self, i: usize) -> &'a [I] {
		&self.col_idx[self.row_range(i)]
	}

	/// returns an iterator over the column indices of the row `i`
	#[inline]
	#[track_caller]
	pub fn col_idx_of_row(&self, i: usize) -> impl 'a + Clone + ExactSizeIterator + DoubleEndedIterator<Item = usize> {
		self.col_idx_of_row_raw(i).iter().map(|&j| j.zx())
	}

	/// returns `true` if the column indices of each row are non-decreasing
	#[inline]
	pub fn has_sorted_indices(&self) -> bool {
		utils::has_sorted_indices(self.row_ptr, self.col_idx)
	}

	/// returns `true` if the column indices of each row are strictly increasing
	#[inline]
	pub fn has_canonical_format(&self) -> bool {
		utils::has_canonical_format(self.row_ptr, self.col_idx)
	}
}

impl<I: Index> SymbolicSparseRowMat<I> {
	/// creates a new symbolic matrix without checking its invariants
	///
	/// # safety
	/// see [`SymbolicSparseRowMatRef`]. only the O(1) shape facts are asserted.
	#[inline]
	#[track_caller]
	pub unsafe fn new_unchecked(nrows: usize, ncols: usize, row_ptr: Vec<I>, col_idx: Vec<I>) -> Self {
		assume_row_ptr(nrows, ncols, &row_ptr, &col_idx);
		Self {
			nrows,
			ncols,
			row_ptr,
			col_idx,
		}
	}

	/// creates a new symbolic matrix after checking its invariants
	#[inline]
	#[track_caller]
	pub fn new_checked(nrows: usize, ncols: usize, row_ptr: Vec<I>, col_idx: Vec<I>) -> Self {
		check_row_ptr(nrows, ncols, &row_ptr, &col_idx);
		check_col_idx(ncols, &row_ptr, &col_idx);
		Self {
			nrows,
			ncols,
			row_ptr,
			col_idx,
		}
	}

	/// creates a new symbolic matrix after checking its invariants, allowing unsorted and
	/// duplicate column indices
	#[inline]
	#[track_caller]
	pub fn new_unsorted_checked(nrows: usize, ncols: usize, row_ptr: Vec<I>, col_idx: Vec<I>) -> Self {
		check_row_ptr(nrows, ncols, &row_ptr, &col_idx);
		check_col_idx_unsorted(ncols, &row_ptr, &col_idx);
		Self {
			nrows,
			ncols,
			row_ptr,
			col_idx,
		}
	}

	#[inline]
	pub fn parts(&self) -> (usize, usize, &'_ [I], &'_ [I]) {
		(self.nrows, self.ncols, &self.row_ptr, &self.col_idx)
	}

	#[inline]
	pub fn into_parts(self) -> (usize, usize, Vec<I>, Vec<I>) {
		(self.nrows, self.ncols, self.row_ptr, self.col_idx)
	}

	#[inline]
	pub fn as_ref(&self) -> SymbolicSparseRowMatRef<'_, I> {
		self.rb()
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

	#[inline]
	pub fn transpose(&self) -> SymbolicSparseColMatRef<'_, I> {
		self.rb().transpose()
	}

	#[inline]
	pub fn into_transpose(self) -> SymbolicSparseColMat<I> {
		SymbolicSparseColMat {
			nrows: self.ncols,
			ncols: self.nrows,
			col_ptr: self.row_ptr,
			row_idx: self.col_idx,
		}
	}

	#[inline]
	pub fn compute_nnz(&self) -> usize {
		self.col_idx.len()
	}

	#[inline]
	pub fn row_ptr(&self) -> &'_ [I] {
		&self.row_ptr
	}

	#[inline]
	pub fn col_idx(&self) -> &'_ [I] {
		&self.col_idx
	}

	#[inline]
	#[track_caller]
	pub fn row_range(&self, i: usize) -> Range<usize> {
		self.rb().row_range(i)
	}

	#[inline]
	#[track_caller]
	pub fn col_idx_of_row_raw(&self, i: usize) -> &'_ [I] {
		self.rb().col_idx_of_row_raw(i)
	}

	#[inline]
	#[track_caller]
	pub fn col_idx_of_row(&self, i: usize) -> impl '_ + Clone + ExactSizeIterator + DoubleEndedIterator<Item = usize> {
		self.rb().col_idx_of_row(i)
	}

	#[inline]
	pub fn has_sorted_indices(&self) -> bool {
		self.rb().has_sorted_indices()
	}

	#[inline]
	pub fn has_canonical_format(&self) -> bool {
		self.rb().has_canonical_format()
	}
}

impl<'a, I: Index, T> SparseRowMatRef<'a, I, T> {
	/// creates a new sparse matrix view
	///
	/// # panics
	/// panics if the length of `val` is not equal to the length of `symbolic.col_idx()`
	#[inline]
	#[track_caller]
	pub fn new(symbolic: SymbolicSparseRowMatRef<'a, I>, val: &'a [T]) -> Self {
		assert!(symbolic.col_idx().len() == val.len());
		Self { symbolic, val }
	}

	#[inline]
	pub fn parts(self) -> (SymbolicSparseRowMatRef<'a, I>, &'a [T]) {
		(self.symbolic, self.val)
	}

	#[inline]
	pub fn symbolic(&self) -> SymbolicSparseRowMatRef<'a, I> {
		self.symbolic
	}

	#[inline]
	pub fn val(self) -> &'a [T] {
		self.val
	}

	/// returns the values of the row `i`
	#[inline]
	#[track_caller]
	pub fn val_of_row(self, i: usize) -> &'a [T] {
		&self.val[self.symbolic.row_range(i)]
	}

	/// returns a reference to the value at the given index, or `None` if the symbolic structure
	/// doesn't contain it, or contains it more than once
	///
	/// the column indices of the row must be sorted.
	///
	/// # panics
	/// panics if `row >= self.nrows()` or `col >= self.ncols()`
	#[track_caller]
	pub fn get(self, row: usize, col: usize) -> Option<&'a T> {
		assert!(all(row < self.nrows(), col < self.ncols()));
		let col = I::truncate(col);
		let col_idx = self.symbolic.col_idx_of_row_raw(row);

		let start = col_idx.partition_point(|&j| j < col);
		let end = start + col_idx[start..].partition_point(|&j| j <= col);

		if end == start + 1 { Some(&self.val_of_row(row)[start]) } else { None }
	}

	/// returns a view over the transpose of `self` in column-major format
	#[inline]
	pub fn transpose(self) -> SparseColMatRef<'a, I, T> {
		SparseColMatRef {
			symbolic: self.symbolic.transpose(),
			val: self.val,
		}
	}

	#[inline]
	pub fn to_owned(&self) -> Result<SparseRowMat<I, T>, SparseError>
	where
		T: Copy,
	{
		Ok(SparseRowMat {
			symbolic: self.symbolic.to_owned()?,
			val: try_collect(self.val.iter().copied())?,
		})
	}

	/// returns the same matrix in column-major format, with sorted row indices
	#[inline]
	pub fn to_col_major(&self) -> Result<SparseColMat<I, T>, SparseError>
	where
		T: Copy,
	{
		let (m, n) = self.shape();
		let mut row_ptr = try_zeroed::<I>(n + 1)?;
		let mut col_idx = try_zeroed::<I>(self.compute_nnz())?;
		let mut val = try_collect(self.val.iter().copied())?;

		let mut mem = MemBuffer::try_new(utils::transpose_scratch::<I>(m, n))?;
		utils::transpose(&mut val, &mut row_ptr, &mut col_idx, *self, MemStack::new(&mut mem));

		Ok(SparseColMat {
			// SAFETY: the transpose produces a valid pointer array with indices less than m
			symbolic: unsafe { SymbolicSparseColMat::new_unchecked(m, n, row_ptr, col_idx) },
			val,
		})
	}

	/// returns the coordinate representation of `self`, in storage order
	#[inline]
	pub fn to_coo(&self) -> Result<SparseCooMat<I, T>, SparseError>
	where
		T: Copy,
	{
		let nnz = self.compute_nnz();
		let mut row_idx = try_zeroed::<I>(nnz)?;
		let mut col_idx = try_zeroed::<I>(nnz)?;
		let mut val = try_collect(self.val.iter().copied())?;
		utils::csr_to_coo(&mut row_idx, &mut col_idx, &mut val, *self);

		Ok(SparseCooMat::new_unchecked(self.nrows(), self.ncols(), row_idx, col_idx, val))
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
		utils::to_dense(&mut out, *self);
		out
	}

	/// returns the main diagonal of `self`, with duplicate entries summed
	pub fn diagonal(&self) -> Vec<T>
	where
		T: Scalar,
	{
		let mut out = alloc::vec![T::zero(); Ord::min(self.nrows(), self.ncols())];
		utils::diagonal(&mut out, *self);
		out
	}

	/// returns the submatrix spanning `rows` x `cols`
	#[inline]
	#[track_caller]
	pub fn submatrix(&self, rows: Range<usize>, cols: Range<usize>) -> Result<SparseRowMat<I, T>, SparseError>
	where
		T: Copy,
	{
		utils::submatrix(*self, rows, cols)
	}
}

impl<'a, I: Index, T> SparseRowMatMut<'a, I, T> {
	/// creates a new mutable sparse matrix view
	///
	/// # panics
	/// panics if the length of `val` is not equal to the length of `symbolic.col_idx()`
	#[inline]
	#[track_caller]
	pub fn new(symbolic: SymbolicSparseRowMatRef<'a, I>, val: &'a mut [T]) -> Self {
		assert!(symbolic.col_idx().len() == val.len());
		Self { symbolic, val }
	}

	#[inline]
	pub fn parts_mut(self) -> (SymbolicSparseRowMatRef<'a, I>, &'a mut [T]) {
		(self.symbolic, self.val)
	}

	#[inline]
	pub fn symbolic(&self) -> SymbolicSparseRowMatRef<'a, I> {
		self.symbolic
	}

	#[inline]
	pub fn val_mut(self) -> &'a mut [T] {
		self.val
	}

	#[inline]
	#[track_caller]
	pub fn val_of_row_mut(self, i: usize) -> &'a mut [T] {
		let Self { symbolic, val } = self;
		&mut val[symbolic.row_range(i)]
	}

	#[inline]
	pub fn transpose_mut(self) -> SparseColMatMut<'a, I, T> {
		SparseColMatMut {
			symbolic: self.symbolic.transpose(),
			val: self.val,
		}
	}

	#[inline]
	pub fn as_ref(&self) -> SparseRowMatRef<'_, I, T> {
		self.rb()
	}
}

impl<I: Index, T> SparseRowMat<I, T> {
	/// creates a new sparse matrix
	///
	/// # panics
	/// panics if the length of `val` is not equal to the length of `symbolic.col_idx()`
	#[inline]
	#[track_caller]
	pub fn new(symbolic: SymbolicSparseRowMat<I>, val: Vec<T>) -> Self {
		assert!(symbolic.col_idx().len() == val.len());
		Self { symbolic, val }
	}

	#[inline]
	pub fn into_parts(self) -> (SymbolicSparseRowMat<I>, Vec<T>) {
		(self.symbolic, self.val)
	}

	#[inline]
	pub fn symbolic(&self) -> SymbolicSparseRowMatRef<'_, I> {
		self.symbolic.rb()
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
	#[track_caller]
	pub fn val_of_row(&self, i: usize) -> &'_ [T] {
		self.as_ref().val_of_row(i)
	}

	#[inline]
	pub fn as_ref(&self) -> SparseRowMatRef<'_, I, T> {
		self.rb()
	}

	#[inline]
	pub fn as_mut(&mut self) -> SparseRowMatMut<'_, I, T> {
		self.rb_mut()
	}

	#[inline]
	#[track_caller]
	pub fn get(&self, row: usize, col: usize) -> Option<&'_ T> {
		self.as_ref().get(row, col)
	}

	#[inline]
	pub fn transpose(&self) -> SparseColMatRef<'_, I, T> {
		self.as_ref().transpose()
	}

	#[inline]
	pub fn into_transpose(self) -> SparseColMat<I, T> {
		SparseColMat {
			symbolic: self.symbolic.into_transpose(),
			val: self.val,
		}
	}

	#[inline]
	pub fn to_col_major(&self) -> Result<SparseColMat<I, T>, SparseError>
	where
		T: Copy,
	{
		self.as_ref().to_col_major()
	}

	#[inline]
	pub fn to_coo(&self) -> Result<SparseCooMat<I, T>, SparseError>
	where
		T: Copy,
	{
		self.as_ref().to_coo()
	}

	#[inline]
	#[track_caller]
	pub fn to_dense(&self) -> Vec<T>
	where
		T: Scalar,
	{
		self.as_ref().to_dense()
	}

	#[inline]
	pub fn diagonal(&self) -> Vec<T>
	where
		T: Scalar,
	{
		self.as_ref().diagonal()
	}

	#[inline]
	#[track_caller]
	pub fn submatrix(&self, rows: Range<usize>, cols: Range<usize>) -> Result<SparseRowMat<I, T>, SparseError>
	where
		T: Copy,
	{
		self.as_ref().submatrix(rows, cols)
	}

	/// sorts the column indices of each row, along with their values
	#[inline]
	pub fn sort_indices(&mut self) {
		utils::sort_indices(&self.symbolic.row_ptr, &mut self.symbolic.col_idx, &mut self.val);
	}

	/// sums duplicate entries and drops the entries that sum to zero, leaving the matrix sorted
	/// and free of duplicates
	pub fn sum_duplicates(&mut self) -> Result<(), SparseError>
	where
		T: Scalar,
	{
		let (m, n) = self.shape();
		let mut mem = MemBuffer::try_new(utils::sum_duplicates_scratch::<I, T>(m, n))?;
		let nnz = utils::sum_duplicates(m, n, &mut self.symbolic.row_ptr, &mut self.symbolic.col_idx, &mut self.val, MemStack::new(&mut mem));

		self.symbolic.col_idx.truncate(nnz);
		self.val.truncate(nnz);
		debug_assert!(self.symbolic.row_ptr[m].zx() == nnz);
		Ok(())
	}

	/// creates a new sparse matrix from a list of triplets, summing duplicate entries and
	/// dropping the ones that sum to zero
	///
	/// returns an error if an index is out of bounds, or if the allocation fails
	#[track_caller]
	pub fn try_new_from_triplets(nrows: usize, ncols: usize, entries: &[Triplet<I, I, T>]) -> Result<Self, CreationError>
	where
		T: Scalar,
	{
		Ok(SparseCooMat::try_new_from_triplets(nrows, ncols, entries)?.to_row_major()?)
	}

	/// creates a new sparse matrix from a dense row-major buffer, storing the entries that are
	/// not equal to zero
	///
	/// # panics
	/// panics if `dense.len() != nrows * ncols`
	#[track_caller]
	pub fn try_from_dense(nrows: usize, ncols: usize, dense: &[T]) -> Result<Self, SparseError>
	where
		T: Scalar,
	{
		utils::from_dense(nrows, ncols, dense)
	}
}

impl<'a, I: Index, T> core::ops::Deref for SparseRowMatRef<'a, I, T> {
	type Target = SymbolicSparseRowMatRef<'a, I>;

	#[inline]
	fn deref(&self) -> &Self::Target {
		&self.symbolic
	}
}

impl<'a, I: Index, T> core::ops::Deref for SparseRowMatMut<'a, I, T> {
	type Target = SymbolicSparseRowMatRef<'a, I>;

	#[inline]
	fn deref(&self) -> &Self::Target {
		&self.symbolic
	}
}

impl<I: Index, T> core::ops::Deref for SparseRowMat<I, T> {
	type Target = SymbolicSparseRowMat<I>;

	#[inline]
	fn deref(&self) -> &Self::Target {
		&self.symbolic
	}
}

impl<I: Index> fmt::Debug for SymbolicSparseRowMatRef<'_, I> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		struct Entries<'a, I>(SymbolicSparseRowMatRef<'a, I>);

		impl<I: Index> fmt::Debug for Entries<'_, I> {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				let mat = self.0;
				f.debug_list()
					.entries((0..mat.nrows()).flat_map(|row| mat.col_idx_of_row(row).map(move |col| Pair { row, col })))
					.finish()
			}
		}

		f.debug_struct("SymbolicSparseRowMat")
			.field("nrows", &self.nrows)
			.field("ncols", &self.ncols)
			.field("entries", &Entries(*self))
			.finish()
	}
}

impl<I: Index> fmt::Debug for SymbolicSparseRowMat<I> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.rb().fmt(f)
	}
}

impl<I: Index, T: fmt::Debug> fmt::Debug for SparseRowMatRef<'_, I, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		struct Entries<'a, I, T>(SparseRowMatRef<'a, I, T>);

		impl<I: Index, T: fmt::Debug> fmt::Debug for Entries<'_, I, T> {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				let mat = self.0;
				f.debug_list()
					.entries((0..mat.nrows()).flat_map(|row| {
						iter::zip(mat.col_idx_of_row(row), mat.val_of_row(row)).map(move |(col, val)| Triplet { row, col, val })
					}))
					.finish()
			}
		}

		f.debug_struct("SparseRowMat")
			.field("nrows", &self.nrows())
			.field("ncols", &self.ncols())
			.field("entries", &Entries(*self))
			.finish()
	}
}

impl<I: Index, T: fmt::Debug> fmt::Debug for SparseRowMatMut<'_, I, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.rb().fmt(f)
	}
}

impl<I: Index, T: fmt::Debug> fmt::Debug for SparseRowMat<I, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.rb().fmt(f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::assert;

	fn sample() -> SparseRowMat<u32, f64> {
		// [[1, 0, 2]
		//  [0, 0, 0]
		//  [3, 4, 0]]
		SparseRowMat::new(SymbolicSparseRowMat::new_checked(3, 3, vec![0, 2, 2, 4], vec![0, 2, 0, 1]), vec![1.0, 2.0, 3.0, 4.0])
	}

	#[test]
	fn test_accessors() {
		let A = sample();
		assert!(all(
			A.shape() == (3, 3),
			A.compute_nnz() == 4,
			A.row_range(2) == (2..4),
			A.val_of_row(2) == &[3.0, 4.0],
			A.col_idx_of_row(0).collect::<Vec<_>>() == [0, 2],
			A.has_canonical_format(),
		));

		assert!(A.get(0, 2) == Some(&2.0));
		assert!(A.get(1, 1) == None);
		assert!(A.get(2, 1) == Some(&4.0));
	}

	#[test]
	fn test_get_rejects_duplicates() {
		let A = SparseRowMatRef::new(SymbolicSparseRowMatRef::new_unsorted_checked(1, 3, &[0usize, 3], &[0, 1, 1]), &[1.0, 2.0, 3.0]);
		assert!(A.get(0, 0) == Some(&1.0));
		assert!(A.get(0, 1) == None);
		assert!(!A.has_canonical_format());
		assert!(A.has_sorted_indices());
	}

	#[test]
	#[should_panic]
	fn test_checked_rejects_unsorted() {
		SymbolicSparseRowMatRef::new_checked(1, 3, &[0u32, 2], &[2, 0]);
	}

	#[test]
	#[should_panic]
	fn test_checked_rejects_out_of_bounds() {
		SymbolicSparseRowMatRef::new_unsorted_checked(1, 3, &[0u32, 2], &[2, 3]);
	}

	#[test]
	fn test_to_col_major() {
		let A = sample();
		let B = A.to_col_major().unwrap();
		assert!(all(B.col_ptr() == &[0, 2, 3, 4], B.row_idx() == &[0, 2, 2, 0], B.val() == &[1.0, 3.0, 4.0, 2.0]));
		assert!(B.to_dense() == A.to_dense());

		let At = A.transpose();
		assert!(all(At.nrows() == 3, At.col_ptr() == A.row_ptr(), At.row_idx() == A.col_idx()));
	}

	#[test]
	fn test_to_coo_keeps_storage_order() {
		let A = SparseRowMat::new(SymbolicSparseRowMat::new_unsorted_checked(2, 2, vec![0usize, 2, 3], vec![1, 0, 1]), vec![1.0, 0.0, 3.0]);
		let coo = A.to_coo().unwrap();
		assert!(all(coo.row_idx() == &[0, 0, 1], coo.col_idx() == &[1, 0, 1], coo.val() == &[1.0, 0.0, 3.0]));
	}

	#[test]
	fn test_sort_and_sum_duplicates() {
		let mut A = SparseRowMat::new(
			SymbolicSparseRowMat::new_unsorted_checked(2, 3, vec![0usize, 3, 5], vec![2, 0, 2, 1, 1]),
			vec![1.0, 2.0, 3.0, 4.0, -4.0],
		);

		A.sort_indices();
		assert!(all(A.col_idx() == &[0, 2, 2, 1, 1], A.val() == &[2.0, 1.0, 3.0, 4.0, -4.0]));
		assert!(all(A.has_sorted_indices(), !A.has_canonical_format()));

		A.sum_duplicates().unwrap();
		assert!(all(A.row_ptr() == &[0, 2, 2], A.col_idx() == &[0, 2], A.val() == &[2.0, 4.0]));
		assert!(A.has_canonical_format());
	}

	#[test]
	fn test_from_dense() {
		let dense = [0.0, 1.0, 0.0, 2.0, 0.0, 3.0];
		let A = SparseRowMat::<usize, f64>::try_from_dense(2, 3, &dense).unwrap();
		assert!(all(A.row_ptr() == &[0, 1, 3], A.col_idx() == &[1, 0, 2]));
		assert!(A.to_dense() == dense);
		assert!(A.diagonal() == [0.0, 0.0]);
	}

	#[test]
	fn test_debug() {
		let A = SparseRowMatRef::new(SymbolicSparseRowMatRef::new_checked(2, 2, &[0usize, 1, 2], &[1, 0]), &[5, 6]);
		let s = alloc::format!("{:?}", A);
		assert!(
			s == "SparseRowMat { nrows: 2, ncols: 2, entries: [Triplet { row: 0, col: 1, val: 5 }, Triplet { row: 1, col: 0, val: 6 }] }"
		);
	}
}
