//! Fixed-size tensor algebra with lazy expression templates.
//!
//! A [`Tensor<R, T, N>`](Tensor) has a type-level rank `R`, element type `T`
//! and dimension `N`. Arithmetic, comparisons, transcendental functions,
//! outer and dot products all build lazy expressions; nothing is computed
//! until an expression is materialized, indexed down to an element,
//! compared or formatted. Every component of a compound expression is then
//! computed in a single pass with no intermediate tensors.
//!
//! ```
//! use fixtensor_core::{dot, exp, Tensor, R1, R2};
//!
//! let m = Tensor::<R2>::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
//! let v = Tensor::<R1>::new([1.0, 2.0, 3.0]);
//! let w: Tensor<R1> = (dot(&m, &v) * 2.0 - &v).into();
//! assert_eq!(w, Tensor::<R1>::new([27.0, 62.0, 97.0]));
//! assert_eq!(exp(&v * 0.0).to_string(), "{1,1,1}");
//! ```

mod dtype;
mod error;
pub mod expr;
pub mod geometry;
pub mod index;
pub mod ops;
pub mod rank;
mod tensor;
pub mod type_checks;

pub use dtype::{DType, Real};
pub use error::{Error, Result};
pub use expr::{all, any, equal, fold, Bracket, Expr, IndexIter, TensorExpr};
pub use geometry::{lower_all, make_trace_free, raise_all, trace, trace_lower};
pub use index::{apply_indices, IndexContracter, IndexInserter};
pub use ops::functions::*;
pub use ops::{dot, dot_metric, inner, outer};
pub use rank::{Next, Rank, R1, R2, R3, R4, R5, R6};
pub use tensor::{LazyTensor, Tensor};

#[cfg(feature = "bfloat")]
pub use half::bf16;
#[cfg(feature = "half")]
pub use half::f16;
