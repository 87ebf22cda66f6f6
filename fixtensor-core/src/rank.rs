//! Type-level ranks.
//!
//! A rank is a positive natural number encoded as a type: [`R1`] is one and
//! [`Next<R>`] is `R + 1`. There is no rank zero, scalars are plain element
//! values. Every behaviour that differs between "the slots hold elements" and
//! "the slots hold sub-tensors" lives in the hook methods of [`Rank`], which
//! recurse through [`Next`] at compile time.

use std::{fmt, iter, marker::PhantomData};

use crate::{
    expr::{Bracket, IndexIter, TensorExpr},
    DType, Tensor,
};

mod private {
    pub trait Sealed {}
}

/// A positive type-level natural used as tensor rank and as index depth.
pub trait Rank: Copy + Default + fmt::Debug + 'static + private::Sealed {
    /// Number of indices needed to reach an element.
    const RANK: usize;

    /// What one of the `N` top-level slots of a tensor of this rank holds.
    type Slot<T: DType, const N: usize>: Clone + fmt::Debug;

    /// Nested array literal of a whole tensor of this rank.
    type Array<T: DType, const N: usize>;

    fn slots_from_array<T: DType, const N: usize>(
        array: Self::Array<T, N>,
    ) -> [Self::Slot<T, N>; N];

    fn slots_into_array<T: DType, const N: usize>(
        slots: [Self::Slot<T, N>; N],
    ) -> Self::Array<T, N>;

    fn fill_slot<T: DType, const N: usize>(value: &T) -> Self::Slot<T, N>;

    /// Apply the remaining indices of `idx` to one slot.
    fn eval_slot<T: DType, I: IndexIter, const N: usize>(slot: &Self::Slot<T, N>, idx: I) -> T;

    /// Build slot `index` of a tensor from `expr`.
    fn slot_from_expr<E: TensorExpr<N, Rank = Self>, const N: usize>(
        expr: &E,
        index: usize,
    ) -> Self::Slot<E::Elem, N>;

    /// Combine slot `index` of `expr` into `slot`, component by component.
    fn zip_slot<T, E, F, const N: usize>(slot: &mut Self::Slot<T, N>, expr: &E, index: usize, f: &mut F)
    where
        T: DType,
        E: TensorExpr<N, Rank = Self>,
        F: FnMut(&mut T, E::Elem);

    fn for_each_slot_mut<T: DType, F: FnMut(&mut T), const N: usize>(
        slot: &mut Self::Slot<T, N>,
        f: &mut F,
    );

    /// Fold every component of `expr` in row-major order.
    fn fold<E, B, F, const N: usize>(expr: &E, init: B, f: &mut F) -> B
    where
        E: TensorExpr<N, Rank = Self>,
        F: FnMut(B, E::Elem) -> B;

    /// Render `expr` as `{e0,e1,...}`, nested per rank.
    fn fmt_expr<E, const N: usize>(expr: &E, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        E: TensorExpr<N, Rank = Self>,
        E::Elem: fmt::Display;
}

/// Rank one: the slots hold elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct R1;

/// Rank `R + 1`: the slots hold rank-`R` tensors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Next<R>(PhantomData<R>);

pub type R2 = Next<R1>;
pub type R3 = Next<R2>;
pub type R4 = Next<R3>;
pub type R5 = Next<R4>;
pub type R6 = Next<R5>;

impl private::Sealed for R1 {}
impl<R: Rank> private::Sealed for Next<R> {}

fn write_separated<F>(f: &mut fmt::Formatter<'_>, n: usize, mut item: F) -> fmt::Result
where
    F: FnMut(&mut fmt::Formatter<'_>, usize) -> fmt::Result,
{
    f.write_str("{")?;
    for i in 0..n {
        if i > 0 {
            f.write_str(",")?;
        }
        item(f, i)?;
    }
    f.write_str("}")
}

impl Rank for R1 {
    const RANK: usize = 1;

    type Slot<T: DType, const N: usize> = T;
    type Array<T: DType, const N: usize> = [T; N];

    fn slots_from_array<T: DType, const N: usize>(
        array: Self::Array<T, N>,
    ) -> [Self::Slot<T, N>; N] {
        array
    }

    fn slots_into_array<T: DType, const N: usize>(
        slots: [Self::Slot<T, N>; N],
    ) -> Self::Array<T, N> {
        slots
    }

    fn fill_slot<T: DType, const N: usize>(value: &T) -> Self::Slot<T, N> {
        value.clone()
    }

    fn eval_slot<T: DType, I: IndexIter, const N: usize>(slot: &Self::Slot<T, N>, _idx: I) -> T {
        slot.clone()
    }

    fn slot_from_expr<E: TensorExpr<N, Rank = Self>, const N: usize>(
        expr: &E,
        index: usize,
    ) -> Self::Slot<E::Elem, N> {
        expr.eval(iter::once(index))
    }

    fn zip_slot<T, E, F, const N: usize>(slot: &mut Self::Slot<T, N>, expr: &E, index: usize, f: &mut F)
    where
        T: DType,
        E: TensorExpr<N, Rank = Self>,
        F: FnMut(&mut T, E::Elem),
    {
        f(slot, expr.eval(iter::once(index)));
    }

    fn for_each_slot_mut<T: DType, F: FnMut(&mut T), const N: usize>(
        slot: &mut Self::Slot<T, N>,
        f: &mut F,
    ) {
        f(slot);
    }

    fn fold<E, B, F, const N: usize>(expr: &E, init: B, f: &mut F) -> B
    where
        E: TensorExpr<N, Rank = Self>,
        F: FnMut(B, E::Elem) -> B,
    {
        let mut acc = init;
        for i in 0..N {
            acc = f(acc, expr.eval(iter::once(i)));
        }
        acc
    }

    fn fmt_expr<E, const N: usize>(expr: &E, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        E: TensorExpr<N, Rank = Self>,
        E::Elem: fmt::Display,
    {
        write_separated(f, N, |f, i| write!(f, "{}", expr.eval(iter::once(i))))
    }
}

impl<R: Rank> Rank for Next<R> {
    const RANK: usize = R::RANK + 1;

    type Slot<T: DType, const N: usize> = Tensor<R, T, N>;
    type Array<T: DType, const N: usize> = [R::Array<T, N>; N];

    fn slots_from_array<T: DType, const N: usize>(
        array: Self::Array<T, N>,
    ) -> [Self::Slot<T, N>; N] {
        array.map(Tensor::new)
    }

    fn slots_into_array<T: DType, const N: usize>(
        slots: [Self::Slot<T, N>; N],
    ) -> Self::Array<T, N> {
        slots.map(Tensor::into_array)
    }

    fn fill_slot<T: DType, const N: usize>(value: &T) -> Self::Slot<T, N> {
        Tensor::fill(value.clone())
    }

    fn eval_slot<T: DType, I: IndexIter, const N: usize>(slot: &Self::Slot<T, N>, idx: I) -> T {
        slot.eval(idx)
    }

    fn slot_from_expr<E: TensorExpr<N, Rank = Self>, const N: usize>(
        expr: &E,
        index: usize,
    ) -> Self::Slot<E::Elem, N> {
        Tensor::build(&Bracket::new(expr, index))
    }

    fn zip_slot<T, E, F, const N: usize>(slot: &mut Self::Slot<T, N>, expr: &E, index: usize, f: &mut F)
    where
        T: DType,
        E: TensorExpr<N, Rank = Self>,
        F: FnMut(&mut T, E::Elem),
    {
        slot.zip_with(&Bracket::new(expr, index), f);
    }

    fn for_each_slot_mut<T: DType, F: FnMut(&mut T), const N: usize>(
        slot: &mut Self::Slot<T, N>,
        f: &mut F,
    ) {
        slot.visit_mut(f);
    }

    fn fold<E, B, F, const N: usize>(expr: &E, init: B, f: &mut F) -> B
    where
        E: TensorExpr<N, Rank = Self>,
        F: FnMut(B, E::Elem) -> B,
    {
        let mut acc = init;
        for i in 0..N {
            acc = R::fold(&Bracket::new(expr, i), acc, f);
        }
        acc
    }

    fn fmt_expr<E, const N: usize>(expr: &E, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        E: TensorExpr<N, Rank = Self>,
        E::Elem: fmt::Display,
    {
        write_separated(f, N, |f, i| R::fmt_expr(&Bracket::new(expr, i), f))
    }
}

/// Type-level addition, the rank of an outer product.
#[diagnostic::on_unimplemented(message = "cannot add the ranks `{Self}` and `{B}`")]
pub trait Plus<B: Rank>: Rank {
    type Output: Rank;
}

impl<B: Rank> Plus<B> for R1 {
    type Output = Next<B>;
}

impl<A: Plus<B>, B: Rank> Plus<B> for Next<A> {
    type Output = Next<A::Output>;
}

/// Rank left after contracting the last index of `Self` with the first of `B`.
///
/// Two vectors contract to a scalar, which is not a rank; use
/// [`inner`](crate::inner) for that case.
#[diagnostic::on_unimplemented(
    message = "contracting rank `{Self}` with rank `{B}` does not leave a tensor",
    note = "the dot product of two vectors is a scalar: use `inner` instead of `dot`"
)]
pub trait Contract<B: Rank>: Rank {
    type Output: Rank;
}

impl<B: Rank> Contract<Next<B>> for R1 {
    type Output = B;
}

impl<A: Rank> Contract<R1> for Next<A> {
    type Output = A;
}

impl<A: Plus<B>, B: Rank> Contract<Next<B>> for Next<A> {
    type Output = <A as Plus<B>>::Output;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank_of<R: Rank>() -> usize {
        R::RANK
    }

    #[test]
    fn aliases_count_up() {
        assert_eq!(rank_of::<R1>(), 1);
        assert_eq!(rank_of::<R2>(), 2);
        assert_eq!(rank_of::<R3>(), 3);
        assert_eq!(rank_of::<R6>(), 6);
    }

    #[test]
    fn plus_and_contract() {
        assert_eq!(rank_of::<<R1 as Plus<R2>>::Output>(), 3);
        assert_eq!(rank_of::<<R3 as Plus<R2>>::Output>(), 5);
        assert_eq!(rank_of::<<R1 as Contract<R2>>::Output>(), 1);
        assert_eq!(rank_of::<<R2 as Contract<R1>>::Output>(), 1);
        assert_eq!(rank_of::<<R2 as Contract<R2>>::Output>(), 2);
        assert_eq!(rank_of::<<R3 as Contract<R4>>::Output>(), 5);
    }
}
