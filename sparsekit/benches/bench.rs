#![allow(non_snake_case)]

use diol::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sparsekit::sparse::linalg::{matmul, matvec};
use sparsekit::sparse::{SparseRowMat, Triplet, ops};

// about 8 entries per row
fn random_csr(rng: &mut StdRng, n: usize) -> SparseRowMat<u32, f64> {
	let mut entries = Vec::with_capacity(8 * n);
	for i in 0..n {
		for _ in 0..8 {
			entries.push(Triplet::new(i as u32, rng.gen_range(0..n as u32), rng.gen::<f64>()));
		}
	}
	SparseRowMat::try_new_from_triplets(n, n, &entries).unwrap()
}

fn bench_matmul(bencher: Bencher, n: usize) {
	let rng = &mut StdRng::seed_from_u64(0);
	let A = random_csr(rng, n);
	let B = random_csr(rng, n);

	bencher.bench(|| {
		_ = matmul::sparse_sparse_matmul(A.as_ref(), B.as_ref()).unwrap();
	});
}

fn bench_matmul_fused(bencher: Bencher, n: usize) {
	let rng = &mut StdRng::seed_from_u64(0);
	let A = random_csr(rng, n);
	let B = random_csr(rng, n);

	bencher.bench(|| {
		_ = matmul::sparse_sparse_matmul_fused(A.as_ref(), B.as_ref()).unwrap();
	});
}

fn bench_add(bencher: Bencher, n: usize) {
	let rng = &mut StdRng::seed_from_u64(0);
	let A = random_csr(rng, n);
	let B = random_csr(rng, n);

	bencher.bench(|| {
		_ = ops::add(A.as_ref(), B.as_ref()).unwrap();
	});
}

fn bench_matvec(bencher: Bencher, n: usize) {
	let rng = &mut StdRng::seed_from_u64(0);
	let A = random_csr(rng, n);
	let x: Vec<f64> = (0..n).map(|_| rng.gen()).collect();
	let mut y = vec![0.0; n];

	bencher.bench(|| {
		matvec::csr_matvec(&mut y, A.as_ref(), &x);
	});
}

fn bench_to_col_major(bencher: Bencher, n: usize) {
	let rng = &mut StdRng::seed_from_u64(0);
	let A = random_csr(rng, n);

	bencher.bench(|| {
		_ = A.to_col_major().unwrap();
	});
}

fn main() -> std::io::Result<()> {
	let mut bench = Bench::new(BenchConfig::from_args()?);

	bench.register_many(
		list![bench_matmul, bench_matmul_fused, bench_add, bench_matvec, bench_to_col_major],
		[64, 256, 1024, 4096, 16384],
	);
	bench.run()?;

	Ok(())
}
