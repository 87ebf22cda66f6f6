//! Componentwise operations and the rank-changing products.
//!
//! An operation is a zero-sized marker type. Expression nodes are generic over
//! the marker, so `Binary<Sum, A, B>` and `Binary<IsLess, A, B>` share one
//! evaluation routine and differ only in [`BinaryOp::apply`].

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{DType, Real};

pub mod dot;
pub mod elementwise;
pub mod functions;
pub mod outer;

pub use dot::{dot, dot_metric, inner, Dot};
pub use elementwise::{Binary, ScalarLeft, ScalarRight, Unary};
pub use outer::{outer, Outer};

/// A scalar function of two arguments.
pub trait BinaryOp<L, R> {
    type Output: DType;

    fn apply(lhs: L, rhs: R) -> Self::Output;
}

/// A scalar function of one argument.
pub trait UnaryOp<T> {
    type Output: DType;

    fn apply(x: T) -> Self::Output;
}

macro_rules! arithmetic_op {
    ($name:ident, $trait:ident, $method:ident) => {
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name;

        impl<L: $trait<R>, R> BinaryOp<L, R> for $name
        where
            L::Output: DType,
        {
            type Output = L::Output;

            fn apply(lhs: L, rhs: R) -> Self::Output {
                lhs.$method(rhs)
            }
        }
    };
}

arithmetic_op!(Sum, Add, add);
arithmetic_op!(Difference, Sub, sub);
arithmetic_op!(Product, Mul, mul);
arithmetic_op!(Quotient, Div, div);

macro_rules! relational_op {
    ($name:ident, $bound:ident, $op:tt) => {
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name;

        impl<L: $bound<R>, R> BinaryOp<L, R> for $name {
            type Output = bool;

            fn apply(lhs: L, rhs: R) -> bool {
                lhs $op rhs
            }
        }
    };
}

relational_op!(IsGreaterEqual, PartialOrd, >=);
relational_op!(IsLessEqual, PartialOrd, <=);
relational_op!(IsGreater, PartialOrd, >);
relational_op!(IsLess, PartialOrd, <);
relational_op!(IsEqual, PartialEq, ==);

macro_rules! real_fn {
    ($($name:ident => $method:ident),* $(,)?) => {
        $(
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
            pub struct $name;

            impl<T: Real> UnaryOp<T> for $name {
                type Output = T;

                fn apply(x: T) -> T {
                    x.$method()
                }
            }
        )*
    };
}

real_fn!(
    Exp => exp,
    Log => log,
    Log10 => log10,
    Sqrt => sqrt,
    Sin => sin,
    Cos => cos,
    Tan => tan,
    Asin => asin,
    Acos => acos,
    Atan => atan,
    Sinh => sinh,
    Cosh => cosh,
    Tanh => tanh,
    Abs => abs,
);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Negate;

impl<T: Neg> UnaryOp<T> for Negate
where
    T::Output: DType,
{
    type Output = T::Output;

    fn apply(x: T) -> Self::Output {
        -x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_apply_scalar_functions() {
        assert_eq!(<Sum as BinaryOp<i32, i32>>::apply(2, 3), 5);
        assert_eq!(<Quotient as BinaryOp<f64, f64>>::apply(1.0, 4.0), 0.25);
        assert!(<IsGreaterEqual as BinaryOp<u8, u8>>::apply(3, 3));
        assert!(!<IsGreater as BinaryOp<u8, u8>>::apply(3, 3));
        assert_eq!(<Log as UnaryOp<f64>>::apply(1.0), 0.0);
        assert_eq!(<Negate as UnaryOp<i64>>::apply(7), -7);
    }
}
