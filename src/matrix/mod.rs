//! Matrix storage: the dense row-major [`Matrix`], the [`Jagged`] array of
//! rows, and the [`Rows`] trait kernels use to stay agnostic of the two.
//!
//! Also holds the helpers every kernel family leans on: transposition,
//! seeded random fill, and tolerance comparison.

pub mod compare;
pub mod dense;
pub mod random;
pub mod rows;
pub mod transpose;

pub use dense::Matrix;
pub use random::random_vector;
pub use rows::{Jagged, Rows};
