//! index and value traits shared by the sparse kernels
//!
//! [`Index`] describes the integer type used for the pointer and index arrays of a compressed
//! matrix, [`Scalar`] describes the type of the stored values.

#![cfg_attr(not(feature = "std"), no_std)]

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, Mul, Sub};
use num_complex::Complex;
use num_traits::Zero;

mod seal {
	pub trait Seal {}
	impl Seal for u32 {}
	impl Seal for u64 {}
	impl Seal for usize {}
	impl Seal for i32 {}
	impl Seal for i64 {}
	impl Seal for isize {}
}

pub trait Seal: seal::Seal {}
impl<T: seal::Seal> Seal for T {}

/// trait for signed integers corresponding to the ones satisfying [`Index`].
///
/// always smaller than or equal to `isize`.
pub trait SignedIndex:
	Seal
	+ Debug
	+ core::ops::Neg<Output = Self>
	+ core::ops::Add<Output = Self>
	+ core::ops::Sub<Output = Self>
	+ core::ops::AddAssign
	+ core::ops::SubAssign
	+ bytemuck::Pod
	+ Eq
	+ Ord
	+ Send
	+ Sync
{
	/// maximum representable value.
	const MAX: Self;

	/// truncate `value` to type [`Self`].
	#[must_use]
	fn truncate(value: usize) -> Self;

	/// zero extend `self`.
	#[must_use]
	fn zx(self) -> usize;
}

impl SignedIndex for i32 {
	const MAX: Self = Self::MAX;

	#[inline(always)]
	fn truncate(value: usize) -> Self {
		#[allow(clippy::assertions_on_constants)]
		const _: () = {
			core::assert!(i32::BITS <= usize::BITS);
		};
		value as isize as Self
	}

	#[inline(always)]
	fn zx(self) -> usize {
		self as u32 as usize
	}
}

#[cfg(target_pointer_width = "64")]
impl SignedIndex for i64 {
	const MAX: Self = Self::MAX;

	#[inline(always)]
	fn truncate(value: usize) -> Self {
		#[allow(clippy::assertions_on_constants)]
		const _: () = {
			core::assert!(i64::BITS <= usize::BITS);
		};
		value as isize as Self
	}

	#[inline(always)]
	fn zx(self) -> usize {
		self as u64 as usize
	}
}

impl SignedIndex for isize {
	const MAX: Self = Self::MAX;

	#[inline(always)]
	fn truncate(value: usize) -> Self {
		value as isize
	}

	#[inline(always)]
	fn zx(self) -> usize {
		self as usize
	}
}

/// unsigned integer type used for the pointer and index arrays of a sparse matrix.
///
/// every valid index is bounded by `Self::Signed::MAX`, which leaves the two largest bit
/// patterns free to be used as sentinels.
pub trait Index:
	Seal
	+ Debug
	+ core::ops::Not<Output = Self>
	+ core::ops::Add<Output = Self>
	+ core::ops::Sub<Output = Self>
	+ core::ops::AddAssign
	+ core::ops::SubAssign
	+ bytemuck::Pod
	+ Eq
	+ Ord
	+ core::hash::Hash
	+ Send
	+ Sync
{
	/// equally-sized signed index type.
	type Signed: SignedIndex;

	/// truncate `value` to type [`Self`].
	#[must_use]
	#[inline(always)]
	fn truncate(value: usize) -> Self {
		Self::from_signed(<Self::Signed as SignedIndex>::truncate(value))
	}

	/// zero extend `self`.
	#[must_use]
	#[inline(always)]
	fn zx(self) -> usize {
		self.to_signed().zx()
	}

	/// convert a signed value to an unsigned one.
	#[inline(always)]
	fn from_signed(value: Self::Signed) -> Self {
		bytemuck::cast(value)
	}

	/// convert an unsigned value to a signed one.
	#[inline(always)]
	fn to_signed(self) -> Self::Signed {
		bytemuck::cast(self)
	}
}

impl Index for u32 {
	type Signed = i32;
}
#[cfg(target_pointer_width = "64")]
impl Index for u64 {
	type Signed = i64;
}
impl Index for usize {
	type Signed = isize;
}

/// value type stored in a sparse matrix.
///
/// the kernels only need the ring operations, division and a test against zero, which is
/// used to drop entries that cancel out.
pub trait Scalar:
	Copy + PartialEq + Debug + Send + Sync + Zero + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self> + AddAssign + 'static
{
	/// returns `self / rhs`, or `None` when the quotient is not representable.
	///
	/// floating point and complex types always return a value, following IEEE semantics for
	/// division by zero. integer types return `None` on division by zero and on overflow.
	fn checked_quotient(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_scalar_float {
	($($ty: ty),*) => {$(
		impl Scalar for $ty {
			#[inline(always)]
			fn checked_quotient(self, rhs: Self) -> Option<Self> {
				Some(self / rhs)
			}
		}

		impl Scalar for Complex<$ty> {
			#[inline(always)]
			fn checked_quotient(self, rhs: Self) -> Option<Self> {
				Some(self / rhs)
			}
		}
	)*};
}

macro_rules! impl_scalar_int {
	($($ty: ty),*) => {$(
		impl Scalar for $ty {
			#[inline(always)]
			fn checked_quotient(self, rhs: Self) -> Option<Self> {
				self.checked_div(rhs)
			}
		}
	)*};
}

impl_scalar_float!(f32, f64);
impl_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_index_sentinels() {
		assert_eq!(<u32 as Index>::truncate(usize::MAX), u32::MAX);
		assert_eq!(<u32 as Index>::truncate(usize::MAX - 1), u32::MAX - 1);
		assert_eq!(<usize as Index>::truncate(usize::MAX), usize::MAX);
		assert_eq!(<u32 as Index>::truncate(7).zx(), 7);
		assert!(<u32 as Index>::truncate(usize::MAX).zx() > <i32 as SignedIndex>::MAX.zx());
	}

	#[test]
	fn test_checked_quotient() {
		assert_eq!(6i32.checked_quotient(3), Some(2));
		assert_eq!(6i32.checked_quotient(0), None);
		assert_eq!(i32::MIN.checked_quotient(-1), None);
		assert_eq!(1.0f64.checked_quotient(0.0), Some(f64::INFINITY));
		assert!(0.0f64.checked_quotient(0.0).unwrap().is_nan());
		assert_eq!(Complex::new(2.0f32, 0.0).checked_quotient(Complex::new(2.0, 0.0)), Some(Complex::new(1.0, 0.0)));
	}
}
