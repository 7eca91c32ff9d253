/// sparse-sparse matrix products.
pub mod matmul;
/// sparse matrix-vector products.
pub mod matvec;
