//! Lazy expression algebra.
//!
//! An expression is anything implementing [`Eval`]: a stored [`Matrix`]
//! (the leaf case) or a lightweight node wrapping its operand expressions
//! ([`Sub`], [`Add`], [`Hadamard`], [`Scale`]). Building an expression
//! allocates nothing and computes
//! nothing; reading a cell recurses through the tree down to the leaves,
//! and [`Eval::materialize`] turns the whole tree into a stored matrix by
//! evaluating every cell exactly once.
//!
//! There is no caching layer: evaluating the same cell twice repeats the
//! full sub-computation twice. Callers with reuse-heavy access patterns
//! materialize first.
//!
//! Operand shapes are part of the trait's const parameters, so a node over
//! two differently-shaped operands has no valid instantiation and is
//! rejected by the compiler before the node exists.
//!
//! # Example
//!
//! ```rust
//! use matexpr::{matrix, Eval};
//!
//! let a = matrix!([[1.0, 2.0], [3.0, 4.0]]);
//! let b = matrix!([[5.0, 6.0], [7.0, 8.0]]);
//!
//! // A pending subtraction, borrowing both operands.
//! let diff = &a - &b;
//! assert_eq!(diff.eval(0, 1), -4.0);
//!
//! // Compose further, then terminate the laziness in one pass.
//! let m = (diff + &a).scale(2.0).materialize();
//! assert_eq!(*m.at(0, 0), -6.0);
//! ```

use crate::matrix::{Elem, Matrix};

mod node;

pub use node::{Add, Hadamard, Scale, Sub};

/// The shaped cell-evaluator capability shared by stored matrices and
/// pending operation nodes.
///
/// The shape is carried by the `R` and `C` const parameters; the only
/// required method is the per-cell evaluator. Everything else is provided:
/// combinators that wrap `self` in a further node, and the materializer
/// that ends the laziness.
pub trait Eval<T, const R: usize, const C: usize>: Sized
where
    T: Elem,
{
    /// Computes the value of cell `(row, col)`.
    ///
    /// Recomputes on every call; nothing is cached. The index contract is
    /// the storage engine's: out of range is undefined behavior when the
    /// evaluation bottoms out in an unchecked matrix access.
    fn eval(&self, row: usize, col: usize) -> T;

    /// Number of rows of the expression's shape.
    fn rows() -> usize {
        R
    }

    /// Number of columns of the expression's shape.
    fn cols() -> usize {
        C
    }

    /// Wraps `self` in a lazy scalar-scale node.
    fn scale(self, factor: T) -> Scale<T, R, C, Self> {
        Scale::new(self, factor)
    }

    /// Wraps `self` and `rhs` in a lazy elementwise-multiply node.
    fn hadamard<Rhs>(self, rhs: Rhs) -> Hadamard<T, R, C, Self, Rhs>
    where
        Rhs: Eval<T, R, C>,
    {
        Hadamard::new(self, rhs)
    }

    /// Evaluates every cell exactly once into a fresh stored matrix.
    ///
    /// This is the single point where a lazy tree becomes a value; after
    /// it, repeated access costs nothing beyond a load.
    fn materialize(&self) -> Matrix<T, R, C> {
        let mut out = Matrix::zeros();
        for col in 0..C {
            for row in 0..R {
                *out.at_mut(row, col) = self.eval(row, col);
            }
        }
        out
    }
}

/// A stored matrix is the leaf case: evaluation reads the cell.
impl<T, const R: usize, const C: usize> Eval<T, R, C> for Matrix<T, R, C>
where
    T: Elem,
{
    fn eval(&self, row: usize, col: usize) -> T {
        *self.at(row, col)
    }
}

/// References evaluate through to the referent, so a tree can borrow its
/// leaf matrices instead of copying them. The borrow checker then bounds
/// the tree's lifetime by the borrowed matrices' lifetimes.
impl<'a, T, const R: usize, const C: usize, E> Eval<T, R, C> for &'a E
where
    T: Elem,
    E: Eval<T, R, C>,
{
    fn eval(&self, row: usize, col: usize) -> T {
        (**self).eval(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape_of<E: Eval<i32, 2, 3>>(_: &E) -> (usize, usize) {
        (E::rows(), E::cols())
    }

    #[test]
    fn test_matrix_is_a_leaf() {
        let m = Matrix::<i32, 2, 3>::from_array([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.eval(1, 2), 6);
        assert_eq!(shape_of(&m), (2, 3));
    }

    #[test]
    fn test_references_evaluate_through() {
        let m = Matrix::<i32, 2, 3>::from_array([[1, 2, 3], [4, 5, 6]]);
        let r = &m;
        assert_eq!(r.eval(0, 0), 1);
        assert_eq!(shape_of(&r), (2, 3));
    }

    #[test]
    fn test_materialize_of_a_leaf_copies() {
        let m = Matrix::<i32, 2, 2>::from_array([[1, 2], [3, 4]]);
        let copy = (&m).materialize();
        assert_eq!(copy, m);
    }
}
