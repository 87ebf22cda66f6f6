//! Index stream utilities.
//!
//! Outer products and contractions never build index buffers. They splice
//! extra indices into the stream an expression is evaluated with.

use std::marker::PhantomData;

use crate::{
    expr::{next_index, IndexIter},
    type_checks::{Ordered, Within},
    DType, Rank, Tensor, TensorExpr,
};

/// An index stream with one extra index spliced in at a 1-based depth.
///
/// The first `depth - 1` indices of `inner` pass through unchanged, then
/// `value` is yielded, then the rest of `inner`.
#[derive(Clone, Debug)]
pub struct Inserted<I> {
    inner: I,
    remaining: usize,
    value: Option<usize>,
}

impl<I> Inserted<I> {
    pub fn new(inner: I, depth: usize, value: usize) -> Self {
        Self {
            inner,
            remaining: depth.saturating_sub(1),
            value: Some(value),
        }
    }
}

impl<I: Iterator<Item = usize>> Iterator for Inserted<I> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            if let Some(v) = self.value.take() {
                return Some(v);
            }
        } else {
            self.remaining -= 1;
        }
        self.inner.next()
    }
}

/// Evaluate an expression with an index inserted at depth `P`.
pub struct IndexInserter<P>(PhantomData<P>);

impl<P: Rank> IndexInserter<P> {
    pub fn eval<E, I, const N: usize>(expr: &E, index: usize, idx: I) -> E::Elem
    where
        E: TensorExpr<N>,
        I: IndexIter,
    {
        let () = Within::<P, E::Rank>::OK;
        expr.eval(Inserted::new(idx, P::RANK, index))
    }
}

/// Evaluate an expression with the same index inserted at depths `P1` and
/// `P2`, where `P2` counts positions after the first insertion.
///
/// ```
/// use fixtensor_core::{IndexContracter, Tensor, R1, R2};
///
/// let m = Tensor::<R2, i32, 2>::new([[1, 2], [3, 4]]);
/// assert_eq!(IndexContracter::<R1, R2>::eval(&m, 1, std::iter::empty::<usize>()), 4);
/// ```
///
/// `P1` must lie strictly above `P2`:
///
/// ```compile_fail
/// use fixtensor_core::{IndexContracter, Tensor, R1, R2};
///
/// let m = Tensor::<R2, i32, 2>::new([[1, 2], [3, 4]]);
/// let _ = IndexContracter::<R2, R1>::eval(&m, 1, std::iter::empty::<usize>());
/// ```
pub struct IndexContracter<P1, P2>(PhantomData<(P1, P2)>);

impl<P1: Rank, P2: Rank> IndexContracter<P1, P2> {
    pub fn eval<E, I, const N: usize>(expr: &E, index: usize, idx: I) -> E::Elem
    where
        E: TensorExpr<N>,
        I: IndexIter,
    {
        let () = Ordered::<P1, P2>::OK;
        IndexInserter::<P2>::eval(expr, index, Inserted::new(idx, P1::RANK, index))
    }
}

/// Resolve a component of `tensor` by applying the indices of `idx` one slot
/// at a time, outermost first.
pub fn apply_indices<R, T, I, const N: usize>(tensor: &Tensor<R, T, N>, idx: I) -> T
where
    R: Rank,
    T: DType,
    I: IndexIter,
{
    let mut idx = idx;
    let i = next_index(&mut idx);
    R::eval_slot(&tensor[i], idx)
}
