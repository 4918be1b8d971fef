//! Folds over sequences.
//!
//! A fold threads an accumulator through a sequence, one [`Fold`] step per
//! symbol. The accumulator is an ordinary type: a sequence built so far, or
//! any other state the step wants to carry.
use crate::sequence::{Cons, Nil, Sequence};
use crate::symbol::Symbol;

/// One step of a fold: combine the accumulator `Acc` with the symbol `Sym`.
pub trait Fold<Acc, Sym> {
    type Output;
}

/// Fold from the front: `F(..F(F(Init, s0), s1).., sn)`.
pub trait FoldLeft<F, Init>: Sequence {
    type Output;
}

impl<F, Init> FoldLeft<F, Init> for Nil {
    type Output = Init;
}

impl<F, Init, H, T> FoldLeft<F, Init> for Cons<H, T>
where
    H: Symbol,
    F: Fold<Init, H>,
    T: FoldLeft<F, <F as Fold<Init, H>>::Output>,
{
    type Output = <T as FoldLeft<F, <F as Fold<Init, H>>::Output>>::Output;
}

/// Fold from the back: `F(F(..F(Init, sn).., s1), s0)`.
pub trait FoldRight<F, Init>: Sequence {
    type Output;
}

impl<F, Init> FoldRight<F, Init> for Nil {
    type Output = Init;
}

impl<F, Init, H, T> FoldRight<F, Init> for Cons<H, T>
where
    H: Symbol,
    T: FoldRight<F, Init>,
    F: Fold<<T as FoldRight<F, Init>>::Output, H>,
{
    type Output = <F as Fold<<T as FoldRight<F, Init>>::Output, H>>::Output;
}
