use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

use crate::{
    expr::{equal, Expr, IndexIter},
    ops::{
        Binary, BinaryOp, Difference, IsEqual, Negate, Product, Quotient, ScalarLeft, ScalarRight,
        Sum, Unary, UnaryOp,
    },
    DType, Rank, Tensor, TensorExpr,
};

/// A tensor representing an unevaluated expression. Performing operations on
/// this tensor will not cause any computations; components are computed when
/// the expression is indexed down to an element, compared, formatted or
/// converted into a [`Tensor`].
#[derive(Clone, Copy, Debug)]
pub struct LazyTensor<E, const N: usize> {
    expr: E,
}

impl<E, const N: usize> LazyTensor<E, N> {
    pub fn new(expr: E) -> Self {
        Self { expr }
    }
}

impl<E: TensorExpr<N>, const N: usize> LazyTensor<E, N> {
    /// Evaluate this expression into a concrete `Tensor`.
    pub fn to_tensor(&self) -> Tensor<E::Rank, E::Elem, N> {
        Tensor::from_expr(self)
    }
}

impl<E: Expr, const N: usize> Expr for LazyTensor<E, N> {
    type Rank = E::Rank;
    type Elem = E::Elem;
}

impl<E: TensorExpr<N>, const N: usize> TensorExpr<N> for LazyTensor<E, N> {
    fn eval<I: IndexIter>(&self, idx: I) -> Self::Elem {
        self.expr.eval(idx)
    }
}

impl<E: TensorExpr<N>, const N: usize> From<LazyTensor<E, N>> for Tensor<E::Rank, E::Elem, N> {
    fn from(value: LazyTensor<E, N>) -> Self {
        Tensor::from_expr(value)
    }
}

impl<E, const N: usize> fmt::Display for LazyTensor<E, N>
where
    E: TensorExpr<N>,
    E::Elem: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <E::Rank as Rank>::fmt_expr(&self.expr, f)
    }
}

impl<E, Rhs, const N: usize> PartialEq<Rhs> for LazyTensor<E, N>
where
    E: TensorExpr<N>,
    Rhs: TensorExpr<N, Rank = E::Rank>,
    IsEqual: BinaryOp<E::Elem, Rhs::Elem, Output = bool>,
{
    fn eq(&self, other: &Rhs) -> bool {
        equal(&self.expr, other)
    }
}

// Operators are implemented for owned and borrowed lazy and concrete tensors.
// A borrowed operand is stored as a reference in the resulting expression.
macro_rules! expr_binop {
    (@op [$($lt:lifetime),*] [$($gen:tt)*] $ty:ty, $trait:ident, $fn_name:ident, $op:ident) => {
        impl<$($lt,)* Rhs, $($gen)*> $trait<Rhs> for $ty
        where
            $ty: TensorExpr<N>,
            Rhs: TensorExpr<N, Rank = <$ty as Expr>::Rank>,
            $op: BinaryOp<<$ty as Expr>::Elem, Rhs::Elem>,
        {
            type Output = LazyTensor<Binary<$op, $ty, Rhs>, N>;
            fn $fn_name(self, rhs: Rhs) -> Self::Output {
                LazyTensor::new(Binary::new(self, rhs))
            }
        }
    };
    ([$($lt:lifetime),*] [$($gen:tt)*] $ty:ty) => {
        expr_binop!(@op [$($lt),*] [$($gen)*] $ty, Add, add, Sum);
        expr_binop!(@op [$($lt),*] [$($gen)*] $ty, Sub, sub, Difference);
        expr_binop!(@op [$($lt),*] [$($gen)*] $ty, Mul, mul, Product);
        expr_binop!(@op [$($lt),*] [$($gen)*] $ty, Div, div, Quotient);

        impl<$($lt,)* $($gen)*> Neg for $ty
        where
            $ty: TensorExpr<N>,
            Negate: UnaryOp<<$ty as Expr>::Elem>,
        {
            type Output = LazyTensor<Unary<Negate, $ty>, N>;
            fn neg(self) -> Self::Output {
                LazyTensor::new(Unary::new(self))
            }
        }
    };
}

expr_binop!([] [E, const N: usize] LazyTensor<E, N>);
expr_binop!(['a] [E, const N: usize] &'a LazyTensor<E, N>);
expr_binop!([] [R: Rank, T: DType, const N: usize] Tensor<R, T, N>);
expr_binop!(['a] [R: Rank, T: DType, const N: usize] &'a Tensor<R, T, N>);

// Scalars never implement `TensorExpr`, so these cannot overlap with the
// expression forms above. A scalar on the left only combines with tensors of
// its own element type, so proving `f64: Mul<X>` never asks for `f64: Mul<Y>`
// with `Y` still unknown.
macro_rules! scalar_binop {
    (@op [$($lt:lifetime),*] [$($gen:tt)*] $ty:ty, $s:ty, $trait:ident, $fn_name:ident, $op:ident) => {
        impl<$($lt,)* $($gen)*> $trait<$s> for $ty
        where
            $ty: TensorExpr<N>,
            $op: BinaryOp<<$ty as Expr>::Elem, $s>,
        {
            type Output = LazyTensor<ScalarRight<$op, $ty, $s>, N>;
            fn $fn_name(self, rhs: $s) -> Self::Output {
                LazyTensor::new(ScalarRight::new(self, rhs))
            }
        }

        impl<$($lt,)* $($gen)*> $trait<$ty> for $s
        where
            $ty: TensorExpr<N, Elem = $s>,
            $op: BinaryOp<$s, $s>,
        {
            type Output = LazyTensor<ScalarLeft<$op, $s, $ty>, N>;
            fn $fn_name(self, rhs: $ty) -> Self::Output {
                LazyTensor::new(ScalarLeft::new(self, rhs))
            }
        }
    };
    (@scalar [$($lt:lifetime),*] [$($gen:tt)*] $ty:ty, $s:ty) => {
        scalar_binop!(@op [$($lt),*] [$($gen)*] $ty, $s, Add, add, Sum);
        scalar_binop!(@op [$($lt),*] [$($gen)*] $ty, $s, Sub, sub, Difference);
        scalar_binop!(@op [$($lt),*] [$($gen)*] $ty, $s, Mul, mul, Product);
        scalar_binop!(@op [$($lt),*] [$($gen)*] $ty, $s, Div, div, Quotient);
    };
    ($s:ty) => {
        scalar_binop!(@scalar [] [E, const N: usize] LazyTensor<E, N>, $s);
        scalar_binop!(@scalar ['a] [E, const N: usize] &'a LazyTensor<E, N>, $s);
        scalar_binop!(@scalar [] [R: Rank, T: DType, const N: usize] Tensor<R, T, N>, $s);
        scalar_binop!(@scalar ['a] [R: Rank, T: DType, const N: usize] &'a Tensor<R, T, N>, $s);
    };
}

scalar_binop!(u8);
scalar_binop!(u32);
scalar_binop!(i32);
scalar_binop!(i64);
scalar_binop!(f32);
scalar_binop!(f64);
