use crate::internal_prelude::*;
use crate::sparse::{Pair, SparseCooMat, Triplet, utils};
use crate::{assert, debug_assert};
use core::fmt;
use core::ops::Range;

/// symbolic structure of a sparse matrix in column-major format
///
/// this is the row-major structure of the transposed matrix, and shares its invariants with the
/// roles of rows and columns swapped. see [`SymbolicSparseRowMatRef`].
pub struct SymbolicSparseColMatRef<'a, I> {
	pub(super) nrows: usize,
	pub(super) ncols: usize,
	pub(super) col_ptr: &'a [I],
	pub(super) row_idx: &'a [I],
}

/// view over a sparse matrix in column-major format
pub struct SparseColMatRef<'a, I, T> {
	pub(super) symbolic: SymbolicSparseColMatRef<'a, I>,
	pub(super) val: &'a [T],
}

/// mutable view over a sparse matrix in column-major format
pub struct SparseColMatMut<'a, I, T> {
	pub(super) symbolic: SymbolicSparseColMatRef<'a, I>,
	pub(super) val: &'a mut [T],
}

/// owning symbolic structure of a sparse matrix in column-major format
#[derive(Clone)]
pub struct SymbolicSparseColMat<I> {
	pub(super) nrows: usize,
	pub(super) ncols: usize,
	pub(super) col_ptr: Vec<I>,
	pub(super) row_idx: Vec<I>,
}

/// owning sparse matrix in column-major format
#[derive(Clone)]
pub struct SparseColMat<I, T> {
	pub(super) symbolic: SymbolicSparseColMat<I>,
	pub(super) val: Vec<T>,
}

impl<I> Copy for SymbolicSparseColMatRef<'_, I> {}
impl<I, T> Copy for SparseColMatRef<'_, I, T> {}

impl<I> Clone for SymbolicSparseColMatRef<'_, I> {
	#[inline]
	fn clone(&self) -> Self {
		*self
	}
}
impl<I, T> Clone for SparseColMatRef<'_, I, T> {
	#[inline]
	fn clone(&self) -> Self {
		*self
	}
}

impl<'a, I> IntoConst for SymbolicSparseColMatRef<'a, I> {
	type Target = SymbolicSparseColMatRef<'a, I>;

	#[inline]
	fn into_const(self) -> Self::Target {
		self
	}
}

impl<'short, I> Reborrow<'short> for SymbolicSparseColMatRef<'_, I> {
	type Target = SymbolicSparseColMatRef<'short, I>;

	#[inline]
	fn rb(&'short self) -> Self::Target {
		*self
	}
}

impl<'short, I> ReborrowMut<'short> for SymbolicSparseColMatRef<'_, I> {
	type Target = SymbolicSparseColMatRef<'short, I>;

	#[inline]
	fn rb_mut(&'short mut self) -> Self::Target {
		*self
	}
}

impl<'a, I, T> IntoConst for SparseColMatRef<'a, I, T> {
	type Target = SparseColMatRef<'a, I, T>;

	#[inline]
	fn into_const(self) -> Self::Target {
		self
	}
}

impl<'short, I, T> Reborrow<'short> for SparseColMatRef<'_, I, T> {
	type Target = SparseColMatRef<'short, I, T>;

	#[inline]
	fn rb(&'short self) -> Self::Target {
		*self
	}
}

impl<'short, I, T> ReborrowMut<'short> for SparseColMatRef<'_, I, T> {
	type Target = SparseColMatRef<'short, I, T>;

	#[inline]
	fn rb_mut(&'short mut self) -> Self::Target {
		*self
	}
}

impl<'a, I, T> IntoConst for SparseColMatMut<'a, I, T> {
	type Target = SparseColMatRef<'a, I, T>;

	#[inline]
	fn into_const(self) -> Self::Target {
		SparseColMatRef {
			symbolic: self.symbolic,
			val: self.val,
		}
	}
}

impl<'short, I, T> Reborrow<'short> for SparseColMatMut<'_, I, T> {
	type Target = SparseColMatRef<'short, I, T>;

	#[inline]
	fn rb(&'short self) -> Self::Target {
		SparseColMatRef {
			symbolic: self.symbolic,
			val: self.val,
		}
	}
}

impl<'short, I, T> ReborrowMut<'short> for SparseColMatMut<'_, I, T> {
	type Target = SparseColMatMut<'short, I, T>;

	#[inline]
	fn rb_mut(&'short mut self) -> Self::Target {
		SparseColMatMut {
			symbolic: self.symbolic,
			val: self.val,
		}
	}
}

impl<'short, I> Reborrow<'short> for SymbolicSparseColMat<I> {
	type Target = SymbolicSparseColMatRef<'short, I>;

	#[inline]
	fn rb(&'short self) -> Self::Target {
		SymbolicSparseColMatRef {
			nrows: self.nrows,
			ncols: self.ncols,
			col_ptr: &self.col_ptr,
			row_idx: &self.row_idx,
		}
	}
}

impl<'short, I, T> Reborrow<'short> for SparseColMat<I, T> {
	type Target = SparseColMatRef<'short, I, T>;

	#[inline]
	fn rb(&'short self) -> Self::Target {
		SparseColMatRef {
			symbolic: self.symbolic.rb(),
			val: &self.val,
		}
	}
}

impl<'short, I, T> ReborrowMut<'short> for SparseColMat<I, T> {
	type Target = SparseColMatMut<'short, I, T>;

	#[inline]
	fn rb_mut(&'short mut self) -> Self::Target {
		SparseColMatMut {
			symbolic: self.symbolic.rb(),
			val: &mut self.val,
		}
	}
}

impl<'a, I: Index> SymbolicSparseColMatRef<'a, I> {
	/// creates a new symbolic matrix view without checking its invariants
	///
	/// # safety
	/// see type level documentation. only the O(1) shape facts are asserted.
	#[inline]
	#[track_caller]
	pub unsafe fn new_unchecked(nrows: usize, ncols: usize, col_ptr: &'a [I], row_idx: &'a [I]) -> Self {
		unsafe { SymbolicSparseRowMatRef::new_unchecked(ncols, nrows, col_ptr, row_idx) }.transpose()
	}

	/// creates a new symbolic matrix view after checking its invariants
	#[inline]
	#[track_caller]
	pub fn new_checked(nrows: usize, ncols: usize, col_ptr: &'a [I], row_idx: &'a [I]) -> Self {
		SymbolicSparseRowMatRef::new_checked(ncols, nrows, col_ptr, row_idx).transpose()
	}

	/// creates a new symbolic matrix view after checking its invariants, allowing unsorted and
	/// duplicate row indices
	#[inline]
	#[track_caller]
	pub fn new_unsorted_checked(nrows: usize, ncols: usize, col_ptr: &'a [I], row_idx: &'a [I]) -> Self {
		SymbolicSparseRowMatRef::new_unsorted_checked(ncols, nrows, col_ptr, row_idx).transpose()
	}

	#[inline]
	pub fn parts(self) -> (usize, usize, &'a [I], &'a [I]) {
		(self.nrows, self.ncols, self.col_ptr, self.row_idx)
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

	/// returns a view over the transpose of `self` in row-major format
	#[inline]
	pub fn transpose(self) -> SymbolicSparseRowMatRef<'a, I> {
		SymbolicSparseRowMatRef {
			nrows: self.ncols,
			ncols: self.nrows,
			row_ptr: self.col_ptr,
			col_idx: self.row_idx,
		}
	}

	#[inline]
	pub fn to_owned(&self) -> Result<SymbolicSparseColMat<I>, SparseError> {
		Ok(self.transpose().to_owned()?.into_transpose())
	}

	#[inline]
	pub fn compute_nnz(&self) -> usize {
		self.row_idx.len()
	}

	#[inline]
	pub fn col_ptr(&self) -> &'a [I] {
		self.col_ptr
	}

	#[inline]
	pub fn row_idx(&self) -> &'a [I] {
		self.row_idx
	}

	/// returns the range that the column `j` occupies in `self.row_idx()`
	#[inline]
	#[track_caller]
	pub fn col_range(&self, j: usize) -> Range<usize> {
		self.transpose().row_range(j)
	}

	#[inline]
	#[track_caller]
	pub fn row_idx_of_col_raw(&self, j: usize) -> &'a [I] {
		self.transpose().col_idx_of_row_raw(j)
	}

	#[inline]
	#[track_caller]
	pub fn row_idx_of_col(&self, j: usize) -> impl 'a + Clone + ExactSizeIterator + DoubleEndedIterator<Item = usize> {
		self.transpose().col_idx_of_row(j)
	}

	#[inline]
	pub fn has_sorted_indices(&self) -> bool {
		self.transpose().has_sorted_indices()
	}

	#[inline]
	pub fn has_canonical_format(&self) -> bool {
		self.transpose().has_canonical_format()
	}
}

impl<I: Index> SymbolicSparseColMat<I> {
	/// creates a new symbolic matrix without checking its invariants
	///
	/// # safety
	/// see [`SymbolicSparseColMatRef`]. only the O(1) shape facts are asserted.
	#[inline]
	#[track_caller]
	pub unsafe fn new_unchecked(nrows: usize, ncols: usize, col_ptr: Vec<I>, row_idx: Vec<I>) -> Self {
		unsafe { SymbolicSparseRowMat::new_unchecked(ncols, nrows, col_ptr, row_idx) }.into_transpose()
	}

	#[inline]
	#[track_caller]
	pub fn new_checked(nrows: usize, ncols: usize, col_ptr: Vec<I>, row_idx: Vec<I>) -> Self {
		SymbolicSparseRowMat::new_checked(ncols, nrows, col_ptr, row_idx).into_transpose()
	}

	#[inline]
	#[track_caller]
	pub fn new_unsorted_checked(nrows: usize, ncols: usize, col_ptr: Vec<I>, row_idx: Vec<I>) -> Self {
		SymbolicSparseRowMat::new_unsorted_checked(ncols, nrows, col_ptr, row_idx).into_transpose()
	}

	#[inline]
	pub fn parts(&self) -> (usize, usize, &'_ [I], &'_ [I]) {
		(self.nrows, self.ncols, &self.col_ptr, &self.row_idx)
	}

	#[inline]
	pub fn into_parts(self) -> (usize, usize, Vec<I>, Vec<I>) {
		(self.nrows, self.ncols, self.col_ptr, self.row_idx)
	}

	#[inline]
	pub fn as_ref(&self) -> SymbolicSparseColMatRef<'_, I> {
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
	pub fn transpose(&self) -> SymbolicSparseRowMatRef<'_, I> {
		self.rb().transpose()
	}

	#[inline]
	pub fn into_transpose(self) -> SymbolicSparseRowMat<I> {
		SymbolicSparseRowMat {
			nrows: self.ncols,
			ncols: self.nrows,
			row_ptr: self.col_ptr,
			col_idx: self.row_idx,
		}
	}

	#[inline]
	pub fn compute_nnz(&self) -> usize {
		self.row_idx.len()
	}

	#[inline]
	pub fn col_ptr(&self) -> &'_ [I] {
		&self.col_ptr
	}

	#[inline]
	pub fn row_idx(&self) -> &'_ [I] {
		&self.row_idx
	}

	#[inline]
	#[track_caller]
	pub fn col_range(&self, j: usize) -> Range<usize> {
		self.rb().col_range(j)
	}

	#[inline]
	#[track_caller]
	pub fn row_idx_of_col_raw(&self, j: usize) -> &'_ [I] {
		self.rb().row_idx_of_col_raw(j)
	}

	#[inline]
	#[track_caller]
	pub fn row_idx_of_col(&self, j: usize) -> impl '_ + Clone + ExactSizeIterator + DoubleEndedIterator<Item = usize> {
		self.rb().row_idx_of_col(j)
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

impl<'a, I: Index, T> SparseColMatRef<'a, I, T> {
	/// creates a new sparse matrix view
	///
	/// # panics
	/// panics if the length of `val` is not equal to the length of `symbolic.row_idx()`
	#[inline]
	#[track_caller]
	pub fn new(symbolic: SymbolicSparseColMatRef<'a, I>, val: &'a [T]) -> Self {
		assert!(symbolic.row_idx().len() == val.len());
		Self { symbolic, val }
	}

	#[inline]
	pub fn parts(self) -> (SymbolicSparseColMatRef<'a, I>, &'a [T]) {
		(self.symbolic, self.val)
	}

	#[inline]
	pub fn symbolic(&self) -> SymbolicSparseColMatRef<'a, I> {
		self.symbolic
	}

	#[inline]
	pub fn val(self) -> &'a [T] {
		self.val
	}

	#[inline]
	#[track_caller]
	pub fn val_of_col(self, j: usize) -> &'a [T] {
		self.transpose().val_of_row(j)
	}

	/// returns a reference to the value at the given index, or `None` if the symbolic structure
	/// doesn't contain it, or contains it more than once
	///
	/// the row indices of the column must be sorted.
	#[inline]
	#[track_caller]
	pub fn get(self, row: usize, col: usize) -> Option<&'a T> {
		self.transpose().get(col, row)
	}

	/// returns a view over the transpose of `self` in row-major format
	#[inline]
	pub fn transpose(self) -> SparseRowMatRef<'a, I, T> {
		SparseRowMatRef {
			symbolic: self.symbolic.transpose(),
			val: self.val,
		}
	}

	#[inline]
	pub fn to_owned(&self) -> Result<SparseColMat<I, T>, SparseError>
	where
		T: Copy,
	{
		Ok(self.transpose().to_owned()?.into_transpose())
	}

	/// returns the same matrix in row-major format, with sorted column indices
	#[inline]
	pub fn to_row_major(&self) -> Result<SparseRowMat<I, T>, SparseError>
	where
		T: Copy,
	{
		Ok(self.transpose().to_col_major()?.into_transpose())
	}

	/// returns the coordinate representation of `self`, in storage order
	#[inline]
	pub fn to_coo(&self) -> Result<SparseCooMat<I, T>, SparseError>
	where
		T: Copy,
	{
		Ok(self.transpose().to_coo()?.into_transpose())
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
		utils::to_dense_imp(&mut out, self.transpose(), 1, n);
		out
	}

	/// returns the main diagonal of `self`, with duplicate entries summed
	#[inline]
	pub fn diagonal(&self) -> Vec<T>
	where
		T: Scalar,
	{
		self.transpose().diagonal()
	}

	/// returns the submatrix spanning `rows` x `cols`
	#[inline]
	#[track_caller]
	pub fn submatrix(&self, rows: Range<usize>, cols: Range<usize>) -> Result<SparseColMat<I, T>, SparseError>
	where
		T: Copy,
	{
		Ok(self.transpose().submatrix(cols, rows)?.into_transpose())
	}
}

impl<'a, I: Index, T> SparseColMatMut<'a, I, T> {
	/// creates a new mutable sparse matrix view
	///
	/// # panics
	/// panics if the length of `val` is not equal to the length of `symbolic.row_idx()`
	#[inline]
	#[track_caller]
	pub fn new(symbolic: SymbolicSparseColMatRef<'a, I>, val: &'a mut [T]) -> Self {
		assert!(symbolic.row_idx().len() == val.len());
		Self { symbolic, val }
	}

	#[inline]
	pub fn parts_mut(self) -> (SymbolicSparseColMatRef<'a, I>, &'a mut [T]) {
		(self.symbolic, self.val)
	}

	#[inline]
	pub fn symbolic(&self) -> SymbolicSparseColMatRef<'a, I> {
		self.symbolic
	}

	#[inline]
	pub fn val_mut(self) -> &'a mut [T] {
		self.val
	}

	#[inline]
	#[track_caller]
	pub fn val_of_col_mut(self, j: usize) -> &'a mut [T] {
		self.transpose_mut().val_of_row_mut(j)
	}

	#[inline]
	pub fn transpose_mut(self) -> SparseRowMatMut<'a, I, T> {
		SparseRowMatMut {
			symbolic: self.symbolic.transpose(),
			val: self.val,
		}
	}

	#[inline]
	pub fn as_ref(&self) -> SparseColMatRef<'_, I, T> {
		self.rb()
	}
}

impl<I: Index, T> SparseColMat<I, T> {
	/// creates a new sparse matrix
	///
	/// # panics
	/// panics if the length of `val` is not equal to the length of `symbolic.row_idx()`
	#[inline]
	#[track_caller]
	pub fn new(symbolic: SymbolicSparseColMat<I>, val: Vec<T>) -> Self {
		assert!(symbolic.row_idx().len() == val.len());
		Self { symbolic, val }
	}

	#[inline]
	pub fn into_parts(self) -> (SymbolicSparseColMat<I>, Vec<T>) {
		(self.symbolic, self.val)
	}

	#[inline]
	pub fn symbolic(&self) -> SymbolicSparseColMatRef<'_, I> {
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
	pub fn val_of_col(&self, j: usize) -> &'_ [T] {
		self.as_ref().val_of_col(j)
	}

	#[inline]
	pub fn as_ref(&self) -> SparseColMatRef<'_, I, T> {
		self.rb()
	}

	#[inline]
	pub fn as_mut(&mut self) -> SparseColMatMut<'_, I, T> {
		self.rb_mut()
	}

	#[inline]
	#[track_caller]
	pub fn get(&self, row: usize, col: usize) -> Option<&'_ T> {
		self.as_ref().get(row, col)
	}

	#[inline]
	pub fn transpose(&self) -> SparseRowMatRef<'_, I, T> {
		self.as_ref().transpose()
	}

	#[inline]
	pub fn into_transpose(self) -> SparseRowMat<I, T> {
		SparseRowMat {
			symbolic: self.symbolic.into_transpose(),
			val: self.val,
		}
	}

	#[inline]
	pub fn to_row_major(&self) -> Result<SparseRowMat<I, T>, SparseError>
	where
		T: Copy,
	{
		self.as_ref().to_row_major()
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
	pub fn submatrix(&self, rows: Range<usize>, cols: Range<usize>) -> Result<SparseColMat<I, T>, SparseError>
	where
		T: Copy,
	{
		self.as_ref().submatrix(rows, cols)
	}

	/// sorts the row indices of each column, along with their values
	#[inline]
	pub fn sort_indices(&mut self) {
		utils::sort_indices(&self.symbolic.col_ptr, &mut self.symbolic.row_idx, &mut self.val);
	}

	/// sums duplicate entries and drops the entries that sum to zero, leaving the matrix sorted
	/// and free of duplicates
	pub fn sum_duplicates(&mut self) -> Result<(), SparseError>
	where
		T: Scalar,
	{
		let (m, n) = self.shape();
		let mut mem = MemBuffer::try_new(utils::sum_duplicates_scratch::<I, T>(n, m))?;
		let nnz = utils::sum_duplicates(n, m, &mut self.symbolic.col_ptr, &mut self.symbolic.row_idx, &mut self.val, MemStack::new(&mut mem));

		self.symbolic.row_idx.truncate(nnz);
		self.val.truncate(nnz);
		debug_assert!(self.symbolic.col_ptr[n].zx() == nnz);
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
		Ok(SparseCooMat::try_new_from_triplets(nrows, ncols, entries)?.to_col_major()?)
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
		Ok(utils::from_dense_imp(ncols, nrows, dense, 1, ncols)?.into_transpose())
	}
}

impl<'a, I: Index, T> core::ops::Deref for SparseColMatRef<'a, I, T> {
	type Target = SymbolicSparseColMatRef<'a, I>;

	#[inline]
	fn deref(&self) -> &Self::Target {
		&self.symbolic
	}
}

impl<'a, I: Index, T> core::ops::Deref for SparseColMatMut<'a, I, T> {
	type Target = SymbolicSparseColMatRef<'a, I>;

	#[inline]
	fn deref(&self) -> &Self::Target {
		&self.symbolic
	}
}

impl<I: Index, T> core::ops::Deref for SparseColMat<I, T> {
	type Target = SymbolicSparseColMat<I>;

	#[inline]
	fn deref(&self) -> &Self::Target {
		&self.symbolic
	}
}

impl<I: Index> fmt::Debug for SymbolicSparseColMatRef<'_, I> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		struct Entries<'a, I>(SymbolicSparseColMatRef<'a, I>);

		impl<I: Index> fmt::Debug for Entries<'_, I> {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				let mat = self.0;
				f.debug_list()
					.entries((0..mat.ncols()).flat_map(|col| mat.row_idx_of_col(col).map(move |row| Pair { row, col })))
					.finish()
			}
		}

		f.debug_struct("SymbolicSparseColMat")
			.field("nrows", &self.nrows)
			.field("ncols", &self.ncols)
			.field("entries", &Entries(*self))
			.finish()
	}
}

impl<I: Index> fmt::Debug for SymbolicSparseColMat<I> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.rb().fmt(f)
	}
}

impl<I: Index, T: fmt::Debug> fmt::Debug for SparseColMatRef<'_, I, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		struct Entries<'a, I, T>(SparseColMatRef<'a, I, T>);

		impl<I: Index, T: fmt::Debug> fmt::Debug for Entries<'_, I, T> {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				let mat = self.0;
				f.debug_list()
					.entries((0..mat.ncols()).flat_map(|col| {
						iter::zip(mat.row_idx_of_col(col), mat.val_of_col(col)).map(move |(row, val)| Triplet { row, col, val })
					}))
					.finish()
			}
		}

		f.debug_struct("SparseColMat")
			.field("nrows", &self.nrows())
			.field("ncols", &self.ncols())
			.field("entries", &Entries(*self))
			.finish()
	}
}

impl<I: Index, T: fmt::Debug> fmt::Debug for SparseColMatMut<'_, I, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.rb().fmt(f)
	}
}

impl<I: Index, T: fmt::Debug> fmt::Debug for SparseColMat<I, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.rb().fmt(f)
	}
}
