use std::{
    array, fmt,
    ops::{AddAssign, DivAssign, Index, IndexMut, MulAssign, SubAssign},
    slice,
};

use rand::{
    distr::{Distribution, StandardUniform},
    Rng,
};
use rand_distr::Normal;

use crate::{
    expr::{equal, fold, Expr, Flat, IndexIter},
    index::apply_indices,
    ops::{BinaryOp, IsEqual},
    DType, Error, Rank, Result, TensorExpr,
};

/// A materialized tensor of rank `R` over `N` dimensions.
///
/// Storage is `N` slots holding elements (rank 1) or rank `R - 1` tensors.
/// A tensor is an expression like any other: operators on it build lazy
/// expressions that are evaluated when assigned back into a `Tensor`.
pub struct Tensor<R: Rank, T: DType = f64, const N: usize = 3> {
    slots: [R::Slot<T, N>; N],
}

impl<R: Rank, T: DType, const N: usize> Tensor<R, T, N> {
    /// Create a tensor from a nested array literal, outermost index first.
    pub fn new(array: R::Array<T, N>) -> Self {
        Self {
            slots: R::slots_from_array(array),
        }
    }

    /// Unwrap into the nested array representation.
    pub fn into_array(self) -> R::Array<T, N> {
        R::slots_into_array(self.slots)
    }

    /// Create a tensor with every component set to `value`.
    #[must_use]
    pub fn fill(value: T) -> Self {
        Self {
            slots: array::from_fn(|_| R::fill_slot(&value)),
        }
    }

    /// Evaluate `expr` into a new tensor.
    ///
    /// Slot 0 is evaluated completely before slot 1, recursively, so
    /// components are produced in row-major order.
    pub fn from_expr<E: TensorExpr<N, Rank = R, Elem = T>>(expr: E) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(rank = R::RANK, size = N, "materializing tensor expression");
        Self::build(&expr)
    }

    pub(crate) fn build<E: TensorExpr<N, Rank = R, Elem = T>>(expr: &E) -> Self {
        Self {
            slots: array::from_fn(|i| R::slot_from_expr(expr, i)),
        }
    }

    /// Number of components, `N^R`.
    pub const fn num_components() -> usize {
        N.pow(R::RANK as u32)
    }

    /// Create a tensor from its components in row-major order.
    pub fn from_flat(data: &[T]) -> Result<Self> {
        let expected = Self::num_components();
        if data.len() != expected {
            return Err(Error::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::build(&Flat::<R, T>::new(data)))
    }

    /// All components in row-major order.
    pub fn to_vec(&self) -> Vec<T> {
        fold(self, Vec::with_capacity(Self::num_components()), |mut out, x| {
            out.push(x);
            out
        })
    }

    /// Overwrite every component with the value of `expr`.
    pub fn assign<E: TensorExpr<N, Rank = R, Elem = T>>(&mut self, expr: E) {
        #[cfg(feature = "tracing")]
        tracing::trace!(rank = R::RANK, size = N, "assigning tensor expression");
        self.zip_with(&expr, &mut |x: &mut T, v: T| *x = v);
    }

    /// Call `f` on every component in row-major order.
    pub fn for_each_mut<F: FnMut(&mut T)>(&mut self, mut f: F) {
        self.visit_mut(&mut f);
    }

    pub(crate) fn zip_with<E, F>(&mut self, expr: &E, f: &mut F)
    where
        E: TensorExpr<N, Rank = R>,
        F: FnMut(&mut T, E::Elem),
    {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            R::zip_slot(slot, expr, i, f);
        }
    }

    pub(crate) fn visit_mut<F: FnMut(&mut T)>(&mut self, f: &mut F) {
        for slot in self.slots.iter_mut() {
            R::for_each_slot_mut(slot, f);
        }
    }

    /// Iterate over the top-level slots.
    pub fn iter(&self) -> slice::Iter<'_, R::Slot<T, N>> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, R::Slot<T, N>> {
        self.slots.iter_mut()
    }

    /// Sample every component from `dist`, in row-major order.
    pub fn sample<D, G>(dist: D, rng: &mut G) -> Self
    where
        D: Distribution<T>,
        G: Rng + ?Sized,
    {
        let data: Vec<T> = (0..Self::num_components()).map(|_| dist.sample(rng)).collect();
        Self::build(&Flat::<R, T>::new(&data))
    }

    /// Create a tensor with uniformly distributed components.
    #[must_use]
    pub fn rand() -> Self
    where
        StandardUniform: Distribution<T>,
    {
        Self::sample(StandardUniform, &mut rand::rng())
    }
}

macro_rules! randn {
    ($rt:ident) => {
        impl<R: Rank, const N: usize> Tensor<R, $rt, N> {
            /// Create a tensor with normally distributed components.
            pub fn randn(mean: $rt, std: $rt) -> Result<Self> {
                let normal = Normal::new(mean, std)?;
                Ok(Self::sample(normal, &mut rand::rng()))
            }
        }
    };
}

randn!(f32);
randn!(f64);

impl<R: Rank, T: DType + Default, const N: usize> Default for Tensor<R, T, N> {
    fn default() -> Self {
        Self::fill(T::default())
    }
}

impl<R: Rank, T: DType, const N: usize> Clone for Tensor<R, T, N> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<R: Rank, T: DType, const N: usize> fmt::Debug for Tensor<R, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots.iter()).finish()
    }
}

impl<R: Rank, T: DType + fmt::Display, const N: usize> fmt::Display for Tensor<R, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        R::fmt_expr(self, f)
    }
}

impl<R: Rank, T: DType, const N: usize> Expr for Tensor<R, T, N> {
    type Rank = R;
    type Elem = T;
}

impl<R: Rank, T: DType, const N: usize> TensorExpr<N> for Tensor<R, T, N> {
    fn eval<I: IndexIter>(&self, idx: I) -> T {
        apply_indices(self, idx)
    }
}

impl<R, T, Rhs, const N: usize> PartialEq<Rhs> for Tensor<R, T, N>
where
    R: Rank,
    T: DType,
    Rhs: TensorExpr<N, Rank = R>,
    IsEqual: BinaryOp<T, Rhs::Elem, Output = bool>,
{
    fn eq(&self, other: &Rhs) -> bool {
        equal(self, other)
    }
}

impl<R: Rank, T: DType, const N: usize> Index<usize> for Tensor<R, T, N> {
    type Output = R::Slot<T, N>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

impl<R: Rank, T: DType, const N: usize> IndexMut<usize> for Tensor<R, T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.slots[index]
    }
}

impl<'a, R: Rank, T: DType, const N: usize> IntoIterator for &'a Tensor<R, T, N> {
    type Item = &'a R::Slot<T, N>;
    type IntoIter = slice::Iter<'a, R::Slot<T, N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl<'a, R: Rank, T: DType, const N: usize> IntoIterator for &'a mut Tensor<R, T, N> {
    type Item = &'a mut R::Slot<T, N>;
    type IntoIter = slice::IterMut<'a, R::Slot<T, N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter_mut()
    }
}

macro_rules! tensor_assign_op {
    ($trait:ident, $fn_name:ident, $($scalar:ty),*) => {
        impl<R, T, E, const N: usize> $trait<E> for Tensor<R, T, N>
        where
            R: Rank,
            T: DType + $trait<E::Elem>,
            E: TensorExpr<N, Rank = R>,
        {
            /// Combine every component with the matching component of `rhs`,
            /// in row-major order.
            fn $fn_name(&mut self, rhs: E) {
                #[cfg(feature = "tracing")]
                tracing::trace!(rank = R::RANK, size = N, op = stringify!($fn_name), "compound assignment");
                self.zip_with(&rhs, &mut |x: &mut T, v: E::Elem| x.$fn_name(v));
            }
        }

        $(
            impl<R: Rank, T: DType + $trait<$scalar>, const N: usize> $trait<$scalar> for Tensor<R, T, N> {
                fn $fn_name(&mut self, rhs: $scalar) {
                    self.visit_mut(&mut |x: &mut T| x.$fn_name(rhs));
                }
            }
        )*
    };
}

tensor_assign_op!(AddAssign, add_assign, u8, u32, i32, i64, f32, f64);
tensor_assign_op!(SubAssign, sub_assign, u8, u32, i32, i64, f32, f64);
tensor_assign_op!(MulAssign, mul_assign, u8, u32, i32, i64, f32, f64);
tensor_assign_op!(DivAssign, div_assign, u8, u32, i32, i64, f32, f64);
