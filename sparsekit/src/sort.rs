use crate::Index;
use crate::assert;

const INSERTION_SORT_THRESHOLD: usize = 20;

#[inline(always)]
fn swap_pair<I, T>(indices: &mut [I], values: &mut [T], i: usize, j: usize) {
	indices.swap(i, j);
	values.swap(i, j);
}

fn insertion_sort<I: Index, T>(indices: &mut [I], values: &mut [T]) {
	for i in 1..indices.len() {
		let mut j = i;
		while j > 0 && indices[j] < indices[j - 1] {
			swap_pair(indices, values, j - 1, j);
			j -= 1;
		}
	}
}

#[cold]
fn heapsort<I: Index, T>(indices: &mut [I], values: &mut [T]) {
	let sift_down = |indices: &mut [I], values: &mut [T], len: usize, mut node: usize| {
		loop {
			let mut child = 2 * node + 1;
			if child >= len {
				break;
			}
			if child + 1 < len {
				child += (indices[child] < indices[child + 1]) as usize;
			}
			if indices[node] >= indices[child] {
				break;
			}
			swap_pair(indices, values, node, child);
			node = child;
		}
	};

	let len = indices.len();
	for i in (0..len / 2).rev() {
		sift_down(indices, values, len, i);
	}
	for i in (1..len).rev() {
		swap_pair(indices, values, 0, i);
		sift_down(indices, values, i, 0);
	}
}

/// sorts `indices` in ascending order, applying the same permutation to `values`.
///
/// slices of at most 20 entries use an insertion sort, longer ones an in-place heapsort. the
/// relative order of equal indices is unspecified.
#[track_caller]
pub(crate) fn sort_indices<I: Index, T>(indices: &mut [I], values: &mut [T]) {
	assert!(indices.len() == values.len());
	if indices.len() <= INSERTION_SORT_THRESHOLD {
		insertion_sort(indices, values);
	} else {
		heapsort(indices, values);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::assert;
	use alloc::vec::Vec;
	use rand::rngs::StdRng;
	use rand::{Rng, SeedableRng};

	#[test]
	fn test_insertion_sort_is_stable() {
		let mut a = [3usize, 2, 2, 4, 1];
		let mut b = [1.0, 2.0, 3.0, 4.0, 5.0];

		sort_indices(&mut a, &mut b);

		assert!(a == [1, 2, 2, 3, 4]);
		assert!(b == [5.0, 2.0, 3.0, 1.0, 4.0]);
	}

	#[test]
	fn test_heapsort_big() {
		let rng = &mut StdRng::seed_from_u64(0);

		let a = &mut *(0..1000).map(|_| rng.gen::<u32>() >> 1).collect::<Vec<_>>();
		let b = &mut *(0..1000u32).collect::<Vec<_>>();
		let a_orig = &*a.to_vec();

		sort_indices(a, b);

		for i in 1..1000 {
			assert!(a[i - 1] <= a[i]);
		}
		for i in 0..1000 {
			assert!(a_orig[b[i] as usize] == a[i]);
		}
	}
}
