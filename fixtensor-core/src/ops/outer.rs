use crate::{
    expr::{Expr, IndexIter, TensorExpr},
    ops::{BinaryOp, Product},
    rank::{Plus, Rank},
    tensor::LazyTensor,
};

/// Outer product. The first `rank(lhs)` indices address `lhs`, the rest
/// address `rhs`.
#[derive(Clone, Copy, Debug)]
pub struct Outer<A, B> {
    lhs: A,
    rhs: B,
}

impl<A, B> Outer<A, B> {
    pub fn new(lhs: A, rhs: B) -> Self {
        Self { lhs, rhs }
    }
}

impl<A, B> Expr for Outer<A, B>
where
    A: Expr,
    B: Expr,
    A::Rank: Plus<B::Rank>,
    Product: BinaryOp<A::Elem, B::Elem>,
{
    type Rank = <A::Rank as Plus<B::Rank>>::Output;
    type Elem = <Product as BinaryOp<A::Elem, B::Elem>>::Output;
}

impl<A, B, const N: usize> TensorExpr<N> for Outer<A, B>
where
    A: TensorExpr<N>,
    B: TensorExpr<N>,
    A::Rank: Plus<B::Rank>,
    Product: BinaryOp<A::Elem, B::Elem>,
{
    fn eval<I: IndexIter>(&self, idx: I) -> Self::Elem {
        let split = <A::Rank as Rank>::RANK;
        let lhs = self.lhs.eval(idx.clone().take(split));
        let rhs = self.rhs.eval(idx.skip(split));
        Product::apply(lhs, rhs)
    }
}

/// `lhs ⊗ rhs`, of rank `rank(lhs) + rank(rhs)`.
pub fn outer<A, B, const N: usize>(lhs: A, rhs: B) -> LazyTensor<Outer<A, B>, N>
where
    A: TensorExpr<N>,
    B: TensorExpr<N>,
    Outer<A, B>: TensorExpr<N>,
{
    LazyTensor::new(Outer::new(lhs, rhs))
}
