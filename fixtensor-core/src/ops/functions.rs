//! Named constructors for every componentwise operation.
//!
//! The operator overloads cover the common scalar types. These functions work
//! for any element and scalar type the operation marker accepts.
//!
//! ```
//! use fixtensor_core::{add, Tensor, R1};
//!
//! let a = Tensor::<R1, i32, 2>::new([1, 2]);
//! let b = Tensor::<R1, i32, 2>::new([10, 20]);
//! assert_eq!(add(&a, &b), Tensor::<R1, i32, 2>::new([11, 22]));
//! ```
//!
//! Operands of a componentwise operation must have the same size:
//!
//! ```compile_fail
//! use fixtensor_core::{add, Tensor, R1};
//!
//! let a = Tensor::<R1, i32, 2>::new([1, 2]);
//! let b = Tensor::<R1, i32, 3>::new([10, 20, 30]);
//! let _ = add(&a, &b);
//! ```
//!
//! and the same rank:
//!
//! ```compile_fail
//! use fixtensor_core::{add, Tensor, R1, R2};
//!
//! let a = Tensor::<R1, i32, 2>::new([1, 2]);
//! let b = Tensor::<R2, i32, 2>::new([[10, 20], [30, 40]]);
//! let _ = add(&a, &b);
//! ```

use crate::{
    expr::TensorExpr,
    ops::{
        Abs, Acos, Asin, Atan, Binary, BinaryOp, Cos, Cosh, Difference, Exp, IsGreater,
        IsGreaterEqual, IsLess, IsLessEqual, Log, Log10, Product, Quotient, ScalarLeft,
        ScalarRight, Sin, Sinh, Sqrt, Sum, Tan, Tanh, Unary, UnaryOp,
    },
    tensor::LazyTensor,
};

macro_rules! named_binary {
    ($op:ident, $both:ident, $scalar_right:ident, $scalar_left:ident) => {
        pub fn $both<A, B, const N: usize>(lhs: A, rhs: B) -> LazyTensor<Binary<$op, A, B>, N>
        where
            A: TensorExpr<N>,
            B: TensorExpr<N, Rank = A::Rank>,
            $op: BinaryOp<A::Elem, B::Elem>,
        {
            LazyTensor::new(Binary::new(lhs, rhs))
        }

        pub fn $scalar_right<A, S, const N: usize>(
            lhs: A,
            rhs: S,
        ) -> LazyTensor<ScalarRight<$op, A, S>, N>
        where
            A: TensorExpr<N>,
            S: Clone,
            $op: BinaryOp<A::Elem, S>,
        {
            LazyTensor::new(ScalarRight::new(lhs, rhs))
        }

        pub fn $scalar_left<S, B, const N: usize>(
            lhs: S,
            rhs: B,
        ) -> LazyTensor<ScalarLeft<$op, S, B>, N>
        where
            B: TensorExpr<N>,
            S: Clone,
            $op: BinaryOp<S, B::Elem>,
        {
            LazyTensor::new(ScalarLeft::new(lhs, rhs))
        }
    };
}

named_binary!(Sum, add, add_scalar, scalar_add);
named_binary!(Difference, sub, sub_scalar, scalar_sub);
named_binary!(Product, mul, mul_scalar, scalar_mul);
named_binary!(Quotient, div, div_scalar, scalar_div);
named_binary!(
    IsGreaterEqual,
    greater_equal,
    greater_equal_scalar,
    scalar_greater_equal
);
named_binary!(IsLessEqual, less_equal, less_equal_scalar, scalar_less_equal);
named_binary!(IsGreater, greater, greater_scalar, scalar_greater);
named_binary!(IsLess, less, less_scalar, scalar_less);

macro_rules! named_unary {
    ($($op:ident => $name:ident),* $(,)?) => {
        $(
            pub fn $name<A, const N: usize>(x: A) -> LazyTensor<Unary<$op, A>, N>
            where
                A: TensorExpr<N>,
                $op: UnaryOp<A::Elem>,
            {
                LazyTensor::new(Unary::new(x))
            }
        )*
    };
}

named_unary!(
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
