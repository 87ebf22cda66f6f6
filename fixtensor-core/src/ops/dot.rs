//! Contraction of the last index of one expression with the first index of
//! another.

use std::{iter, ops::Add};

use crate::{
    expr::{Expr, IndexIter, TensorExpr},
    index::IndexContracter,
    ops::{BinaryOp, Outer, Product},
    rank::{Contract, Next, R1, R2},
    tensor::LazyTensor,
    type_checks::NonEmpty,
};

/// `lhs · rhs`: the outer product with the adjacent indices contracted.
#[derive(Clone, Copy, Debug)]
pub struct Dot<A, B> {
    outer: Outer<A, B>,
}

impl<A, B> Dot<A, B> {
    pub fn new(lhs: A, rhs: B) -> Self {
        Self {
            outer: Outer::new(lhs, rhs),
        }
    }
}

impl<A, B> Expr for Dot<A, B>
where
    A: Expr,
    B: Expr,
    A::Rank: Contract<B::Rank>,
    Outer<A, B>: Expr,
    <Outer<A, B> as Expr>::Elem: Add<Output = <Outer<A, B> as Expr>::Elem>,
{
    type Rank = <A::Rank as Contract<B::Rank>>::Output;
    type Elem = <Outer<A, B> as Expr>::Elem;
}

impl<A, B, const N: usize> TensorExpr<N> for Dot<A, B>
where
    A: TensorExpr<N>,
    B: TensorExpr<N>,
    A::Rank: Contract<B::Rank>,
    Outer<A, B>: TensorExpr<N>,
    <Outer<A, B> as Expr>::Elem: Add<Output = <Outer<A, B> as Expr>::Elem>,
{
    fn eval<I: IndexIter>(&self, idx: I) -> Self::Elem {
        let () = NonEmpty::<N>::OK;
        let term = |i| {
            IndexContracter::<A::Rank, Next<A::Rank>>::eval::<Outer<A, B>, I, N>(
                &self.outer,
                i,
                idx.clone(),
            )
        };
        (1..N).fold(term(0), |acc, i| acc + term(i))
    }
}

/// Lazy contraction of `lhs` and `rhs`, of rank `rank(lhs) + rank(rhs) - 2`.
///
/// ```
/// use fixtensor_core::{dot, Tensor, R1, R2};
///
/// let m = Tensor::<R2, f64, 2>::new([[1.0, 2.0], [3.0, 4.0]]);
/// let v = Tensor::<R1, f64, 2>::new([1.0, 1.0]);
/// let mv: Tensor<R1, f64, 2> = dot(&m, &v).into();
/// assert_eq!(mv, Tensor::<R1, f64, 2>::new([3.0, 7.0]));
/// ```
///
/// Two vectors contract to a scalar, which is not a tensor; use [`inner`]:
///
/// ```compile_fail
/// use fixtensor_core::{dot, Tensor, R1};
///
/// let v = Tensor::<R1, f64, 2>::new([1.0, 1.0]);
/// let _ = dot(&v, &v);
/// ```
pub fn dot<A, B, const N: usize>(lhs: A, rhs: B) -> LazyTensor<Dot<A, B>, N>
where
    A: TensorExpr<N>,
    B: TensorExpr<N>,
    A::Rank: Contract<B::Rank>,
    Dot<A, B>: TensorExpr<N>,
{
    LazyTensor::new(Dot::new(lhs, rhs))
}

/// Eager dot product of two vectors, `Σ lhs[i] * rhs[i]`.
///
/// The sum is seeded with its first term, so the size must be at least one:
///
/// ```compile_fail
/// use fixtensor_core::{inner, Tensor, R1};
///
/// let v = Tensor::<R1, f64, 0>::new([]);
/// let _: f64 = inner(&v, &v);
/// ```
pub fn inner<A, B, T, const N: usize>(lhs: A, rhs: B) -> T
where
    A: TensorExpr<N, Rank = R1>,
    B: TensorExpr<N, Rank = R1>,
    Product: BinaryOp<A::Elem, B::Elem, Output = T>,
    T: Add<Output = T>,
{
    let () = NonEmpty::<N>::OK;
    let term = |i| Product::apply(lhs.eval(iter::once(i)), rhs.eval(iter::once(i)));
    (1..N).fold(term(0), |acc, i| acc + term(i))
}

/// `lhs · metric · rhs` for two vectors.
pub fn dot_metric<A, B, G, T, const N: usize>(lhs: A, rhs: B, metric: G) -> T
where
    A: TensorExpr<N, Rank = R1>,
    B: TensorExpr<N, Rank = R1>,
    G: TensorExpr<N, Rank = R2>,
    Dot<G, B>: TensorExpr<N, Rank = R1>,
    Product: BinaryOp<A::Elem, <Dot<G, B> as Expr>::Elem, Output = T>,
    T: Add<Output = T>,
{
    inner(lhs, dot(metric, rhs))
}
