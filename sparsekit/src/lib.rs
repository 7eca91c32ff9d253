//! `sparsekit` is a collection of linear-time kernels operating directly on compressed sparse
//! matrices.
//!
//! the kernels cover conversions between the compressed row (csr), compressed column (csc),
//! coordinate (coo) and dense layouts, duplicate summation, the two-pass symbolic/numeric sparse
//! matrix product, elementwise combination of two sparse matrices, sparse matrix-vector products
//! and diagonal extraction.
//!
//! column-major kernels are obtained from the row-major ones by swapping the roles of rows and
//! columns, so that every algorithm is implemented once.
//!
//! # example
//! ```
//! use sparsekit::sparse::{SparseRowMat, Triplet};
//!
//! let a = SparseRowMat::<usize, f64>::try_new_from_triplets(
//! 	2,
//! 	2,
//! 	&[Triplet::new(0, 0, 1.0), Triplet::new(0, 1, 2.0), Triplet::new(1, 1, 3.0)],
//! )
//! .unwrap();
//! let b = SparseRowMat::<usize, f64>::try_new_from_triplets(2, 2, &[Triplet::new(0, 1, 1.0), Triplet::new(1, 0, 4.0)]).unwrap();
//!
//! let c = sparsekit::sparse::linalg::matmul::sparse_sparse_matmul(a.as_ref(), b.as_ref()).unwrap();
//! assert_eq!(c.to_dense(), vec![8.0, 1.0, 12.0, 0.0]);
//! ```

#![allow(non_snake_case)]
#![allow(clippy::type_complexity)]
#![allow(clippy::too_many_arguments)]
#![cfg_attr(not(feature = "std"), no_std)]

use equator::{assert, debug_assert};

extern crate alloc;

pub use dyn_stack;
pub use reborrow;
pub use sparsekit_traits::{Index, Scalar, SignedIndex};

pub mod sparse;

mod sort;

#[cfg(feature = "perf-warn")]
#[macro_export]
#[doc(hidden)]
macro_rules! __perf_warn {
	($name: ident) => {{
		#[inline(always)]
		#[allow(non_snake_case)]
		fn $name() -> &'static ::core::sync::atomic::AtomicBool {
			static $name: ::core::sync::atomic::AtomicBool = ::core::sync::atomic::AtomicBool::new(false);
			&$name
		}
		::core::matches!(
			$name().compare_exchange(false, true, ::core::sync::atomic::Ordering::Relaxed, ::core::sync::atomic::Ordering::Relaxed,),
			Ok(_)
		)
	}};
}

pub(crate) mod internal_prelude {
	pub use crate::sparse::{
		CreationError, SparseColMat, SparseColMatMut, SparseColMatRef, SparseError, SparseRowMat, SparseRowMatMut, SparseRowMatRef, SymbolicSparseColMat,
		SymbolicSparseColMatRef, SymbolicSparseRowMat, SymbolicSparseRowMatRef,
	};
	pub(crate) use crate::sparse::{try_collect, try_zeroed, windows2};
	pub use crate::{Index, Scalar, SignedIndex};
	pub use alloc::vec::Vec;
	pub use core::iter;
	pub use dyn_stack::{MemBuffer, MemStack, StackReq};
	pub use reborrow::*;
}
