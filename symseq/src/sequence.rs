use std::marker::PhantomData;

use symseq_logic::{And, Bool, Nat, Not, S, Z};

use crate::symbol::{Identical, IdenticalTo, Symbol};

/// The empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nil;

/// The symbol `H` in front of the sequence `T`.
pub struct Cons<H, T>(PhantomData<(H, T)>);

/// An ordered, immutable sequence of symbols.
///
/// The only implementors are [`Nil`] and [`Cons`]; write them with
/// [`seq!`](crate::seq).
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a symbol sequence",
    note = "sequences are built from `Nil` and `Cons`, usually with `symseq::seq![..]`"
)]
pub trait Sequence {
    type Size: Nat;
}

impl Sequence for Nil {
    type Size = Z;
}

impl<H: Symbol, T: Sequence> Sequence for Cons<H, T> {
    type Size = S<T::Size>;
}

/// Write a sequence type as a list of symbols.
///
/// `seq![]` is `Nil`, `seq![A, B]` is `Cons<A, Cons<B, Nil>>`.
#[macro_export]
macro_rules! seq {
    () => { $crate::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::seq![$($tail),*]>
    };
}

/// Exact equality: same length and the same symbol at every position.
pub trait Equal<R: Sequence>: Sequence {
    type Output: Bool;
}

impl Equal<Nil> for Nil {
    type Output = symseq_logic::True;
}

impl<H: Symbol, T: Sequence> Equal<Cons<H, T>> for Nil {
    type Output = symseq_logic::False;
}

impl<H: Symbol, T: Sequence> Equal<Nil> for Cons<H, T> {
    type Output = symseq_logic::False;
}

impl<H1, T1, H2, T2> Equal<Cons<H2, T2>> for Cons<H1, T1>
where
    H1: IdenticalTo<H2>,
    H2: Symbol,
    T1: Equal<T2>,
    T2: Sequence,
{
    type Output = And<Identical<H1, H2>, <T1 as Equal<T2>>::Output>;
}

pub trait NotEqual<R: Sequence>: Sequence {
    type Output: Bool;
}

impl<L, R> NotEqual<R> for L
where
    L: Equal<R>,
    R: Sequence,
{
    type Output = Not<<L as Equal<R>>::Output>;
}

pub const fn size<L: Sequence>() -> usize {
    <L::Size as Nat>::VALUE
}

pub const fn equal<A: Equal<B>, B: Sequence>() -> bool {
    <<A as Equal<B>>::Output as Bool>::VALUE
}

pub const fn not_equal<A: NotEqual<B>, B: Sequence>() -> bool {
    <<A as NotEqual<B>>::Output as Bool>::VALUE
}
