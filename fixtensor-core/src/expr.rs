//! The expression protocol.
//!
//! Everything that can be indexed `Rank::RANK` times to produce an element is
//! a [`TensorExpr`]: materialized tensors, references to them, and the lazy
//! nodes built by operators. Evaluation is pull-based: a node receives the
//! full index stream of one component and forwards it to its operands.

use std::{iter, marker::PhantomData};

use crate::{
    ops::{Binary, BinaryOp, IsEqual},
    rank::{Next, Rank, R1},
    tensor::LazyTensor,
    type_checks::IndexCount,
    DType,
};

/// A stream of indices, outermost first. Nodes that feed the same component
/// to several operands clone it.
pub trait IndexIter: Iterator<Item = usize> + Clone {}

impl<I: Iterator<Item = usize> + Clone> IndexIter for I {}

/// Pull the next index off `idx`.
///
/// The typed API always supplies exactly as many indices as the rank, so an
/// exhausted stream is a bug in an expression node.
pub(crate) fn next_index<I: Iterator<Item = usize>>(idx: &mut I) -> usize {
    match idx.next() {
        Some(i) => i,
        None => unreachable!("index stream ended before the expression rank was reached"),
    }
}

/// Rank and element type of a tensor expression.
///
/// Neither depends on the size, so both are known as soon as the expression
/// type is, before the size has been inferred.
#[diagnostic::on_unimplemented(message = "`{Self}` is not a tensor expression")]
pub trait Expr {
    type Rank: Rank;
    type Elem: DType;
}

/// A rank-`Rank`, size-`N` tensor expression.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a tensor expression of the required size",
    note = "operands of a tensor operation must share the same size"
)]
pub trait TensorExpr<const N: usize>: Expr {
    /// Evaluate one component. Consumes exactly `Self::Rank::RANK` indices.
    fn eval<I: IndexIter>(&self, idx: I) -> Self::Elem;

    fn rank(&self) -> usize {
        <Self::Rank as Rank>::RANK
    }

    fn size(&self) -> usize {
        N
    }

    /// Apply one index.
    ///
    /// On a rank-1 expression this evaluates and returns the element; on
    /// higher ranks it returns a lazy view one rank lower.
    fn at<'a>(&'a self, index: usize) -> <Self::Rank as Peel<&'a Self, N>>::Output
    where
        Self::Rank: Peel<&'a Self, N>,
    {
        <Self::Rank as Peel<&'a Self, N>>::peel(self, index)
    }

    /// Evaluate the component at a full multi-index.
    ///
    /// ```
    /// use fixtensor_core::{Tensor, TensorExpr, R2};
    ///
    /// let m = Tensor::<R2, i32, 2>::new([[1, 2], [3, 4]]);
    /// assert_eq!(m.get([1, 0]), 3);
    /// ```
    ///
    /// The number of indices must equal the rank:
    ///
    /// ```compile_fail
    /// use fixtensor_core::{Tensor, TensorExpr, R2};
    ///
    /// let m = Tensor::<R2, i32, 2>::new([[1, 2], [3, 4]]);
    /// let _ = m.get([1, 0, 1]);
    /// ```
    fn get<const K: usize>(&self, index: [usize; K]) -> Self::Elem {
        let () = IndexCount::<Self::Rank, K>::OK;
        self.eval(index.into_iter())
    }
}

impl<E: Expr + ?Sized> Expr for &E {
    type Rank = E::Rank;
    type Elem = E::Elem;
}

impl<E: TensorExpr<N> + ?Sized, const N: usize> TensorExpr<N> for &E {
    fn eval<I: IndexIter>(&self, idx: I) -> Self::Elem {
        (**self).eval(idx)
    }
}

/// One index applied to a rank-`R + 1` expression.
#[derive(Clone, Copy, Debug)]
pub struct Bracket<E> {
    expr: E,
    index: usize,
}

impl<E> Bracket<E> {
    pub fn new(expr: E, index: usize) -> Self {
        Self { expr, index }
    }
}

impl<E, R> Expr for Bracket<E>
where
    E: Expr<Rank = Next<R>>,
    R: Rank,
{
    type Rank = R;
    type Elem = E::Elem;
}

impl<E, R, const N: usize> TensorExpr<N> for Bracket<E>
where
    E: TensorExpr<N, Rank = Next<R>>,
    R: Rank,
{
    fn eval<I: IndexIter>(&self, idx: I) -> Self::Elem {
        self.expr.eval(iter::once(self.index).chain(idx))
    }
}

/// What applying one index to an expression of rank `Self` produces.
pub trait Peel<X, const N: usize>: Rank {
    type Output;

    fn peel(expr: X, index: usize) -> Self::Output;
}

impl<X: TensorExpr<N, Rank = R1>, const N: usize> Peel<X, N> for R1 {
    type Output = X::Elem;

    fn peel(expr: X, index: usize) -> Self::Output {
        expr.eval(iter::once(index))
    }
}

impl<X, R, const N: usize> Peel<X, N> for Next<R>
where
    X: TensorExpr<N, Rank = Next<R>>,
    R: Rank,
{
    type Output = LazyTensor<Bracket<X>, N>;

    fn peel(expr: X, index: usize) -> Self::Output {
        LazyTensor::new(Bracket::new(expr, index))
    }
}

/// Fold every component of `expr` in row-major order.
pub fn fold<E, B, F, const N: usize>(expr: &E, init: B, mut f: F) -> B
where
    E: TensorExpr<N>,
    F: FnMut(B, E::Elem) -> B,
{
    <E::Rank as Rank>::fold(expr, init, &mut f)
}

/// Componentwise equality of two expressions.
///
/// Both sides are evaluated at every coordinate; there is no short-circuit.
pub fn equal<A, B, const N: usize>(lhs: &A, rhs: &B) -> bool
where
    A: TensorExpr<N>,
    B: TensorExpr<N, Rank = A::Rank>,
    IsEqual: BinaryOp<A::Elem, B::Elem, Output = bool>,
{
    let eq = Binary::<IsEqual, &A, &B>::new(lhs, rhs);
    fold(&eq, true, |acc, same| acc & same)
}

/// `true` if every component of a boolean expression is `true`.
pub fn all<E: TensorExpr<N, Elem = bool>, const N: usize>(expr: &E) -> bool {
    fold(expr, true, |acc, b| acc & b)
}

/// `true` if any component of a boolean expression is `true`.
pub fn any<E: TensorExpr<N, Elem = bool>, const N: usize>(expr: &E) -> bool {
    fold(expr, false, |acc, b| acc | b)
}

/// Row-major view of a flat slice as a rank-`R` expression.
#[derive(Debug)]
pub struct Flat<'a, R, T> {
    data: &'a [T],
    _rank: PhantomData<R>,
}

impl<'a, R, T> Clone for Flat<'a, R, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, R, T> Copy for Flat<'a, R, T> {}

impl<'a, R: Rank, T> Flat<'a, R, T> {
    /// The caller guarantees `data.len() == N.pow(R::RANK)`.
    pub(crate) fn new(data: &'a [T]) -> Self {
        Self {
            data,
            _rank: PhantomData,
        }
    }
}

impl<'a, R: Rank, T: DType> Expr for Flat<'a, R, T> {
    type Rank = R;
    type Elem = T;
}

impl<'a, R: Rank, T: DType, const N: usize> TensorExpr<N> for Flat<'a, R, T> {
    fn eval<I: IndexIter>(&self, idx: I) -> T {
        let offset = idx.take(R::RANK).fold(0, |acc, i| acc * N + i);
        self.data[offset].clone()
    }
}
