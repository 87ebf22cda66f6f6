//! Index gymnastics with a metric.
//!
//! Tensors carry no variance information: which indices are "upper" or
//! "lower" is up to the caller, who supplies the metric or its inverse.

use std::ops::{Add, Mul, Sub};

use crate::{
    ops::{functions::mul_scalar, functions::sub, Binary, Difference, Dot, Product, ScalarRight},
    rank::{R1, R2},
    tensor::LazyTensor,
    type_checks::NonEmpty,
    Expr, Real, TensorExpr,
};

/// `Σ m[i][i]`, evaluated eagerly.
pub fn trace<M, const N: usize>(matrix: M) -> M::Elem
where
    M: TensorExpr<N, Rank = R2>,
    M::Elem: Add<Output = M::Elem>,
{
    let () = NonEmpty::<N>::OK;
    (1..N).fold(matrix.get([0, 0]), |acc, i| acc + matrix.get([i, i]))
}

/// Trace of a tensor with two lower indices, `g^ij t_ji`.
pub fn trace_lower<A, G, const N: usize>(
    tensor: A,
    inverse_metric: G,
) -> <Dot<G, A> as Expr>::Elem
where
    A: TensorExpr<N, Rank = R2>,
    G: TensorExpr<N, Rank = R2>,
    Dot<G, A>: TensorExpr<N, Rank = R2>,
    <Dot<G, A> as Expr>::Elem: Add<Output = <Dot<G, A> as Expr>::Elem>,
{
    trace(crate::dot(inverse_metric, tensor))
}

/// Contract every index of a rank-`Self` tensor with a metric.
#[diagnostic::on_unimplemented(
    message = "raising or lowering all indices is not available for rank `{Self}`",
    note = "only vectors and rank-2 tensors are supported"
)]
pub trait MetricRank<A, G, const N: usize> {
    type Output;

    fn apply(tensor: A, metric: G) -> Self::Output;
}

impl<A, G, const N: usize> MetricRank<A, G, N> for R1
where
    A: TensorExpr<N, Rank = R1>,
    G: TensorExpr<N, Rank = R2>,
    Dot<G, A>: TensorExpr<N>,
{
    type Output = LazyTensor<Dot<G, A>, N>;

    fn apply(tensor: A, metric: G) -> Self::Output {
        crate::dot(metric, tensor)
    }
}

impl<A, G, const N: usize> MetricRank<A, G, N> for R2
where
    A: TensorExpr<N, Rank = R2>,
    G: TensorExpr<N, Rank = R2> + Clone,
    Dot<A, G>: TensorExpr<N, Rank = R2>,
    Dot<G, LazyTensor<Dot<A, G>, N>>: TensorExpr<N>,
{
    type Output = LazyTensor<Dot<G, LazyTensor<Dot<A, G>, N>>, N>;

    fn apply(tensor: A, metric: G) -> Self::Output {
        crate::dot(metric.clone(), crate::dot(tensor, metric))
    }
}

/// Raise every index of `tensor` with the inverse metric.
pub fn raise_all<A, G, const N: usize>(
    tensor: A,
    inverse_metric: G,
) -> <A::Rank as MetricRank<A, G, N>>::Output
where
    A: TensorExpr<N>,
    A::Rank: MetricRank<A, G, N>,
{
    <A::Rank as MetricRank<A, G, N>>::apply(tensor, inverse_metric)
}

/// Lower every index of `tensor` with the metric.
pub fn lower_all<A, G, const N: usize>(
    tensor: A,
    metric: G,
) -> <A::Rank as MetricRank<A, G, N>>::Output
where
    A: TensorExpr<N>,
    A::Rank: MetricRank<A, G, N>,
{
    <A::Rank as MetricRank<A, G, N>>::apply(tensor, metric)
}

/// The trace-free part of a rank-2 tensor with lower indices,
/// `t_ij - g_ij (g^kl t_lk) / N`.
#[allow(clippy::type_complexity)]
pub fn make_trace_free<A, G, H, T, const N: usize>(
    tensor: A,
    metric: G,
    inverse_metric: H,
) -> LazyTensor<Binary<Difference, A, LazyTensor<ScalarRight<Product, G, T>, N>>, N>
where
    A: TensorExpr<N, Rank = R2, Elem = T> + Clone,
    G: TensorExpr<N, Rank = R2, Elem = T>,
    H: TensorExpr<N, Rank = R2, Elem = T>,
    Dot<H, A>: TensorExpr<N, Rank = R2, Elem = T>,
    T: Real + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    let scale = trace_lower(tensor.clone(), inverse_metric) * T::from_f64(1.0 / N as f64);
    sub(tensor, mul_scalar(metric, scale))
}
