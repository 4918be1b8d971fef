use std::marker::PhantomData;

use crate::boolean::{And, Bool, False, Not, True};
use crate::sealed::Sealed;

/// Zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Z;

/// The successor of `N`.
pub struct S<N>(PhantomData<N>);

/// A Peano natural number.
///
/// Comparisons never fail: `Pred` of zero is zero, and the comparisons
/// check `IsZero` before they look at a predecessor.
pub trait Nat: Sealed {
    const VALUE: usize;

    type IsZero: Bool;
    type Pred: Nat;
    type Equals<R: Nat>: Bool;
    type Less<R: Nat>: Bool;
    type Plus<R: Nat>: Nat;
    /// `floor(self / 2)`
    type Half: Nat;
    /// `ceil(self / 2)`
    type HalfCeil: Nat;
}

impl Sealed for Z {}
impl<N: Nat> Sealed for S<N> {}

impl Nat for Z {
    const VALUE: usize = 0;

    type IsZero = True;
    type Pred = Z;
    type Equals<R: Nat> = R::IsZero;
    type Less<R: Nat> = Not<R::IsZero>;
    type Plus<R: Nat> = R;
    type Half = Z;
    type HalfCeil = Z;
}

impl<N: Nat> Nat for S<N> {
    const VALUE: usize = N::VALUE + 1;

    type IsZero = False;
    type Pred = N;
    type Equals<R: Nat> = And<Not<R::IsZero>, N::Equals<R::Pred>>;
    type Less<R: Nat> = And<Not<R::IsZero>, N::Less<R::Pred>>;
    type Plus<R: Nat> = S<N::Plus<R>>;
    type Half = N::HalfCeil;
    type HalfCeil = S<N::Half>;
}

pub type IsEqual<A, B> = <A as Nat>::Equals<B>;
pub type IsLess<A, B> = <A as Nat>::Less<B>;
pub type Sum<A, B> = <A as Nat>::Plus<B>;
pub type Half<N> = <N as Nat>::Half;
pub type HalfCeil<N> = <N as Nat>::HalfCeil;

pub type N0 = Z;
pub type N1 = S<N0>;
pub type N2 = S<N1>;
pub type N3 = S<N2>;
pub type N4 = S<N3>;
pub type N5 = S<N4>;
pub type N6 = S<N5>;
pub type N7 = S<N6>;
pub type N8 = S<N7>;
pub type N9 = S<N8>;
pub type N10 = S<N9>;
pub type N11 = S<N10>;
pub type N12 = S<N11>;
pub type N13 = S<N12>;
pub type N14 = S<N13>;
pub type N15 = S<N14>;
pub type N16 = S<N15>;

static_assertions::const_assert_eq!(N16::VALUE, 16);

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    #[test]
    fn test_value() {
        assert_eq!(N0::VALUE, 0);
        assert_eq!(N7::VALUE, 7);
        assert_eq!(<Sum<N3, N4> as Nat>::VALUE, 7);
    }

    #[test]
    fn test_equals() {
        assert_type_eq_all!(IsEqual<N0, N0>, True);
        assert_type_eq_all!(IsEqual<N3, N3>, True);
        assert_type_eq_all!(IsEqual<N0, N2>, False);
        assert_type_eq_all!(IsEqual<N2, N0>, False);
        assert_type_eq_all!(IsEqual<N2, N3>, False);
        assert_type_eq_all!(IsEqual<N5, N4>, False);
    }

    #[test]
    fn test_less() {
        assert_type_eq_all!(IsLess<N0, N0>, False);
        assert_type_eq_all!(IsLess<N0, N1>, True);
        assert_type_eq_all!(IsLess<N1, N0>, False);
        assert_type_eq_all!(IsLess<N1, N4>, True);
        assert_type_eq_all!(IsLess<N4, N4>, False);
        assert_type_eq_all!(IsLess<N8, N4>, False);
    }

    #[test]
    fn test_sum() {
        assert_type_eq_all!(Sum<N0, N0>, N0);
        assert_type_eq_all!(Sum<N0, N2>, N2);
        assert_type_eq_all!(Sum<N2, N3>, N5);
    }

    #[test]
    fn test_half() {
        assert_type_eq_all!(Half<N0>, N0);
        assert_type_eq_all!(Half<N1>, N0);
        assert_type_eq_all!(Half<N2>, N1);
        assert_type_eq_all!(Half<N3>, N1);
        assert_type_eq_all!(Half<N7>, N3);
        assert_type_eq_all!(HalfCeil<N0>, N0);
        assert_type_eq_all!(HalfCeil<N1>, N1);
        assert_type_eq_all!(HalfCeil<N3>, N2);
        assert_type_eq_all!(HalfCeil<N8>, N4);
    }

    #[test]
    fn test_halves_add_up() {
        assert_type_eq_all!(Sum<Half<N5>, HalfCeil<N5>>, N5);
        assert_type_eq_all!(Sum<Half<N6>, HalfCeil<N6>>, N6);
    }
}
