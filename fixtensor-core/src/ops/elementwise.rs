use std::marker::PhantomData;

use crate::{
    expr::{Expr, IndexIter, TensorExpr},
    ops::{BinaryOp, UnaryOp},
};

/// `op(lhs, rhs)` componentwise over two expressions of the same rank.
#[derive(Clone, Copy, Debug)]
pub struct Binary<Op, A, B> {
    lhs: A,
    rhs: B,
    _op: PhantomData<Op>,
}

impl<Op, A, B> Binary<Op, A, B> {
    pub fn new(lhs: A, rhs: B) -> Self {
        Self {
            lhs,
            rhs,
            _op: PhantomData,
        }
    }
}

impl<Op, A, B> Expr for Binary<Op, A, B>
where
    A: Expr,
    B: Expr<Rank = A::Rank>,
    Op: BinaryOp<A::Elem, B::Elem>,
{
    type Rank = A::Rank;
    type Elem = Op::Output;
}

impl<Op, A, B, const N: usize> TensorExpr<N> for Binary<Op, A, B>
where
    A: TensorExpr<N>,
    B: TensorExpr<N, Rank = A::Rank>,
    Op: BinaryOp<A::Elem, B::Elem>,
{
    fn eval<I: IndexIter>(&self, idx: I) -> Self::Elem {
        let lhs = self.lhs.eval(idx.clone());
        let rhs = self.rhs.eval(idx);
        Op::apply(lhs, rhs)
    }
}

/// `op(lhs, scalar)` for every component of `lhs`.
#[derive(Clone, Copy, Debug)]
pub struct ScalarRight<Op, A, S> {
    lhs: A,
    scalar: S,
    _op: PhantomData<Op>,
}

impl<Op, A, S> ScalarRight<Op, A, S> {
    pub fn new(lhs: A, scalar: S) -> Self {
        Self {
            lhs,
            scalar,
            _op: PhantomData,
        }
    }
}

impl<Op, A, S> Expr for ScalarRight<Op, A, S>
where
    A: Expr,
    Op: BinaryOp<A::Elem, S>,
{
    type Rank = A::Rank;
    type Elem = Op::Output;
}

impl<Op, A, S, const N: usize> TensorExpr<N> for ScalarRight<Op, A, S>
where
    A: TensorExpr<N>,
    S: Clone,
    Op: BinaryOp<A::Elem, S>,
{
    fn eval<I: IndexIter>(&self, idx: I) -> Self::Elem {
        Op::apply(self.lhs.eval(idx), self.scalar.clone())
    }
}

/// `op(scalar, rhs)` for every component of `rhs`.
#[derive(Clone, Copy, Debug)]
pub struct ScalarLeft<Op, S, B> {
    scalar: S,
    rhs: B,
    _op: PhantomData<Op>,
}

impl<Op, S, B> ScalarLeft<Op, S, B> {
    pub fn new(scalar: S, rhs: B) -> Self {
        Self {
            scalar,
            rhs,
            _op: PhantomData,
        }
    }
}

impl<Op, S, B> Expr for ScalarLeft<Op, S, B>
where
    B: Expr,
    Op: BinaryOp<S, B::Elem>,
{
    type Rank = B::Rank;
    type Elem = Op::Output;
}

impl<Op, S, B, const N: usize> TensorExpr<N> for ScalarLeft<Op, S, B>
where
    B: TensorExpr<N>,
    S: Clone,
    Op: BinaryOp<S, B::Elem>,
{
    fn eval<I: IndexIter>(&self, idx: I) -> Self::Elem {
        Op::apply(self.scalar.clone(), self.rhs.eval(idx))
    }
}

/// `f(arg)` componentwise.
#[derive(Clone, Copy, Debug)]
pub struct Unary<F, A> {
    arg: A,
    _f: PhantomData<F>,
}

impl<F, A> Unary<F, A> {
    pub fn new(arg: A) -> Self {
        Self {
            arg,
            _f: PhantomData,
        }
    }
}

impl<F, A> Expr for Unary<F, A>
where
    A: Expr,
    F: UnaryOp<A::Elem>,
{
    type Rank = A::Rank;
    type Elem = F::Output;
}

impl<F, A, const N: usize> TensorExpr<N> for Unary<F, A>
where
    A: TensorExpr<N>,
    F: UnaryOp<A::Elem>,
{
    fn eval<I: IndexIter>(&self, idx: I) -> Self::Elem {
        F::apply(self.arg.eval(idx))
    }
}
