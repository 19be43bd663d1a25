//! # matexpr
//!
//! `matexpr` is a small in-memory linear-algebra core: dense matrices and
//! vectors whose shape is fixed at compile time, plus a lazy
//! expression algebra that composes elementwise arithmetic without
//! materializing intermediate results.
//!
//! Shapes are const generic parameters, so combining two entities of
//! different shape is rejected by the compiler rather than at run time.
//!
//! ## Modules
//!
//! - [`mod@matrix`]: Dense column-major storage, eager arithmetic, and
//!   shape queries.
//! - [`expr`]: The [`Eval`] capability and the lazy operation nodes built
//!   on top of it.
//!
//! ## Example
//!
//! ```rust
//! use matexpr::{matrix, Eval};
//!
//! let a = matrix!([[1.0, 2.0], [3.0, 4.0]]);
//! let b = matrix!([[5.0, 6.0], [7.0, 8.0]]);
//!
//! // Eager: allocates the result immediately.
//! let sum = &a + &b;
//! assert_eq!(*sum.at(0, 0), 6.0);
//!
//! // Lazy: `&a - &b` is a pending operation, not a matrix. Each cell is
//! // computed on demand; `materialize` evaluates every cell exactly once.
//! let diff = (&a - &b).materialize();
//! assert_eq!(*diff.at(0, 1), -4.0);
//! ```

/// Creates a [`Matrix`] from a nested array literal.
///
/// The row and column counts are part of the literal's type, so a ragged
/// or wrongly-sized literal fails to compile.
///
/// # Examples
///
/// ```rust
/// use matexpr::matrix;
///
/// let m = matrix!([[1, 2, 3], [4, 5, 6]]);
/// assert_eq!(*m.at(1, 2), 6);
///
/// // Fails to compile:
/// // let m = matrix!([[1, 2, 3], [4, 5]]);
/// ```
#[macro_export]
macro_rules! matrix {
    ([$([$($value:expr),* $(,)?]),* $(,)?]) => {
        $crate::matrix::Matrix::from_array([$([$($value),*]),*])
    };
}

pub mod expr;
pub mod matrix;

pub use expr::{Add, Eval, Hadamard, Scale, Sub};
pub use matrix::{Axis, ColVector, Elem, Matrix, MatrixError, Result, RowVector};
