//! Dense linear-algebra kernel variants, and a harness that times them
//! against `ndarray`.
//!
//! Each kernel family ships several hand-written versions of the same
//! operation: a naive loop, a cache-aware one that keeps the running sum in
//! a local, a sequential walk over row slices, and 2×/4× row unrolling.
//! They all take caller-owned outputs so the timed region never allocates.
//!
//! ## Usage
//!
//! ```
//! use linalg_bench::{Matrix, matvec};
//!
//! let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
//! let mut y = vec![0.0; 3];
//!
//! matvec::mat_vec_unrolled2(&a, &[1.0, 1.0], &mut y);
//! assert_eq!(y, [3.0, 7.0, 11.0]);
//! ```
//!
//! Kernels that only need row slices are generic over [`Rows`], so the same
//! code runs on a dense [`Matrix`] and on a [`Jagged`] array of rows:
//!
//! ```
//! use linalg_bench::{Matrix, gemm};
//!
//! let a = vec![vec![1.0, 0.0], vec![0.0, 2.0]];
//! let b = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
//! let mut c = Matrix::zeros(2, 2);
//!
//! gemm::dot(&a, &b, &mut c);
//! assert_eq!(c.as_slice(), &[1.0, 2.0, 6.0, 8.0]);
//! ```
//!
//! ## What's inside
//!
//! - `matvec` / `vecmat`: `A·x` and `xᵗ·A`
//! - `products`: outer, Kronecker and fused `a·(M·b)`
//! - `gemm`: `A·B`, `A·Bᵗ` and the cached `Aᵗ·B`
//! - `baseline`: the same operations through `ndarray`
//! - `harness`: size schedule, warm-up, correctness gate, timing and the
//!   `Benchmarking.txt` report

pub mod baseline;
pub mod error;
pub mod gemm;
pub mod harness;
pub mod matrix;
pub mod matvec;
pub mod products;
pub mod unroll;
pub mod vecmat;

pub use error::KernelError;
pub use matrix::{Jagged, Matrix, Rows};
pub use unroll::UnrollPlan;
