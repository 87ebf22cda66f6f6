//! Compile-time predicates on tensor expressions.
//!
//! Size and rank agreement between operands is normally expressed directly in
//! trait bounds (`B: TensorExpr<N, Rank = A::Rank>`). The `const fn` queries
//! below expose the same facts for `const` assertions, and the checker types
//! turn a violated structural precondition into a build failure with a
//! message. A checker is armed by naming its constant inside a generic
//! function: `let () = Ordered::<P1, P2>::OK;`.

use std::marker::PhantomData;

use crate::{Rank, TensorExpr};

/// Whether `E`, an expression of size `N`, has size `M`.
pub const fn has_size<E: TensorExpr<N> + ?Sized, const N: usize, const M: usize>() -> bool {
    N == M
}

/// Whether `E` has rank `K`.
pub const fn has_rank<E: TensorExpr<N> + ?Sized, const N: usize, const K: usize>() -> bool {
    <E::Rank as Rank>::RANK == K
}

/// Whether two expressions have the same size.
pub const fn same_size<A, B, const N: usize, const M: usize>() -> bool
where
    A: TensorExpr<N> + ?Sized,
    B: TensorExpr<M> + ?Sized,
{
    N == M
}

/// Whether two expressions have the same rank.
pub const fn same_rank<A, B, const N: usize, const M: usize>() -> bool
where
    A: TensorExpr<N> + ?Sized,
    B: TensorExpr<M> + ?Sized,
{
    <A::Rank as Rank>::RANK == <B::Rank as Rank>::RANK
}

/// Depth `P1` lies strictly above depth `P2`.
///
/// ```compile_fail
/// use fixtensor_core::{type_checks::Ordered, R2};
///
/// const _: () = Ordered::<R2, R2>::OK;
/// ```
pub struct Ordered<P1, P2>(PhantomData<(P1, P2)>);

impl<P1: Rank, P2: Rank> Ordered<P1, P2> {
    pub const OK: () = assert!(
        P1::RANK < P2::RANK,
        "First index must be smaller than second"
    );
}

/// Depth `P` can be reached in an expression of rank `R`.
pub struct Within<P, R>(PhantomData<(P, R)>);

impl<P: Rank, R: Rank> Within<P, R> {
    pub const OK: () = assert!(
        P::RANK <= R::RANK,
        "insertion depth exceeds the expression rank"
    );
}

/// `K` indices address a single component of a rank-`R` expression.
///
/// ```compile_fail
/// use fixtensor_core::{type_checks::IndexCount, R3};
///
/// const _: () = IndexCount::<R3, 2>::OK;
/// ```
pub struct IndexCount<R, const K: usize>(PhantomData<R>);

impl<R: Rank, const K: usize> IndexCount<R, K> {
    pub const OK: () = assert!(
        K == R::RANK,
        "number of indices must match the tensor rank"
    );
}

/// Contractions and traces need at least one term.
///
/// ```compile_fail
/// use fixtensor_core::type_checks::NonEmpty;
///
/// const _: () = NonEmpty::<0>::OK;
/// ```
pub struct NonEmpty<const N: usize>;

impl<const N: usize> NonEmpty<N> {
    pub const OK: () = assert!(N > 0, "tensor size must be at least one");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tensor, R1, R2, R3};

    type Vector = Tensor<R1, f64, 3>;
    type Matrix = Tensor<R2, f64, 3>;
    type Small = Tensor<R2, f64, 2>;

    const _: () = assert!(has_size::<Matrix, 3, 3>());
    const _: () = assert!(!has_size::<Matrix, 3, 4>());
    const _: () = assert!(has_rank::<Tensor<R3, f32, 2>, 2, 3>());
    const _: () = assert!(same_size::<Vector, Matrix, 3, 3>());
    const _: () = assert!(!same_size::<Matrix, Small, 3, 2>());
    const _: () = assert!(same_rank::<Matrix, Small, 3, 2>());
    const _: () = assert!(!same_rank::<Vector, Matrix, 3, 3>());

    #[test]
    fn checkers_accept_valid_input() {
        let () = Ordered::<R1, R2>::OK;
        let () = Within::<R2, R2>::OK;
        let () = IndexCount::<R3, 3>::OK;
        let () = NonEmpty::<1>::OK;
    }

    #[test]
    fn predicates_see_through_references() {
        assert!(same_rank::<&Matrix, Matrix, 3, 3>());
        assert!(has_rank::<&&Vector, 3, 1>());
    }
}
