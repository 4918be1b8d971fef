use std::marker::PhantomData;

use symseq_logic::{False, IsEqual, Nat, True, S, Z};

use crate::fold::{Fold, FoldLeft};
use crate::sequence::{Cons, Nil, Sequence};
use crate::symbol::Symbol;

pub trait PushFront<T: Symbol>: Sequence {
    type Output: Sequence;
}

impl<L: Sequence, T: Symbol> PushFront<T> for L {
    type Output = Cons<T, L>;
}

pub trait PushBack<T: Symbol>: Sequence {
    type Output: Sequence;
}

impl<T: Symbol> PushBack<T> for Nil {
    type Output = Cons<T, Nil>;
}

impl<T: Symbol, H: Symbol, R: PushBack<T>> PushBack<T> for Cons<H, R> {
    type Output = Cons<H, <R as PushBack<T>>::Output>;
}

/// Remove the first symbol.
#[diagnostic::on_unimplemented(
    message = "cannot pop the front of `{Self}`",
    label = "the sequence is empty",
    note = "`PopFront` is only implemented for non-empty sequences"
)]
pub trait PopFront: Sequence {
    type Output: Sequence;
    /// The symbol that was removed.
    type Front: Symbol;
}

impl<H: Symbol, T: Sequence> PopFront for Cons<H, T> {
    type Output = T;
    type Front = H;
}

/// Remove the last symbol.
#[diagnostic::on_unimplemented(
    message = "cannot pop the back of `{Self}`",
    label = "the sequence is empty",
    note = "`PopBack` is only implemented for non-empty sequences"
)]
pub trait PopBack: Sequence {
    type Output: Sequence;
    /// The symbol that was removed.
    type Back: Symbol;
}

impl<H: Symbol> PopBack for Cons<H, Nil> {
    type Output = Nil;
    type Back = H;
}

impl<H, N, T> PopBack for Cons<H, Cons<N, T>>
where
    H: Symbol,
    N: Symbol,
    T: Sequence,
    Cons<N, T>: PopBack,
{
    type Output = Cons<H, <Cons<N, T> as PopBack>::Output>;
    type Back = <Cons<N, T> as PopBack>::Back;
}

/// Fold step that puts the symbol in front of the accumulator.
pub struct Prepend;

impl<Acc: Sequence, Sym: Symbol> Fold<Acc, Sym> for Prepend {
    type Output = Cons<Sym, Acc>;
}

/// The symbols in opposite order.
///
/// Each symbol in turn is prepended onto an accumulator that starts out
/// as `Nil`.
pub trait Reverse: Sequence {
    type Output: Sequence;
}

impl<L> Reverse for L
where
    L: FoldLeft<Prepend, Nil>,
    <L as FoldLeft<Prepend, Nil>>::Output: Sequence,
{
    type Output = <L as FoldLeft<Prepend, Nil>>::Output;
}

/// The symbol at index `I`.
#[diagnostic::on_unimplemented(
    message = "index `{I}` is out of range for `{Self}`",
    label = "no symbol at this index",
    note = "`At<I>` requires `I` to be less than the size of the sequence"
)]
pub trait At<I: Nat>: Sequence {
    type Output: Symbol;
}

impl<H: Symbol, T: Sequence> At<Z> for Cons<H, T> {
    type Output = H;
}

impl<H: Symbol, T: At<N>, N: Nat> At<S<N>> for Cons<H, T> {
    type Output = <T as At<N>>::Output;
}

/// Produces a symbol for each call; `I` is the 0-based call number.
#[diagnostic::on_unimplemented(message = "`{Self}` cannot generate a symbol for call `{I}`")]
pub trait Generator<I: Nat> {
    type Output: Symbol;
}

/// Generator that ignores the call number and always yields `T`.
pub struct Repeat<T>(PhantomData<T>);

impl<T: Symbol, I: Nat> Generator<I> for Repeat<T> {
    type Output = T;
}

/// A sequence of `Self` symbols taken from the generator `G`, in call
/// order.
pub trait Generate<G>: Nat {
    type Output: Sequence;
}

impl<N, G> Generate<G> for N
where
    N: GenerateFrom<G, Z>,
{
    type Output = <N as GenerateFrom<G, Z>>::Output;
}

#[doc(hidden)]
pub trait GenerateFrom<G, I: Nat>: Nat {
    type Output: Sequence;
}

impl<G, I: Nat> GenerateFrom<G, I> for Z {
    type Output = Nil;
}

impl<G, I, N> GenerateFrom<G, I> for S<N>
where
    I: Nat,
    G: Generator<I>,
    N: GenerateFrom<G, S<I>>,
{
    type Output = Cons<<G as Generator<I>>::Output, <N as GenerateFrom<G, S<I>>>::Output>;
}

pub trait Concat<R: Sequence>: Sequence {
    type Output: Sequence;
}

impl<R: Sequence> Concat<R> for Nil {
    type Output = R;
}

impl<H: Symbol, T: Concat<R>, R: Sequence> Concat<R> for Cons<H, T> {
    type Output = Cons<H, <T as Concat<R>>::Output>;
}

/// The last `N` symbols.
///
/// Symbols are dropped from the front until exactly `N` remain. Asking for
/// more symbols than the sequence has runs out of symbols to drop and does
/// not compile.
pub trait LastK<N: Nat>: Sequence {
    type Output: Sequence;
}

impl<L, N> LastK<N> for L
where
    L: Sequence,
    L: TrimFront<N, IsEqual<<L as Sequence>::Size, N>>,
    N: Nat,
{
    type Output = <L as TrimFront<N, IsEqual<<L as Sequence>::Size, N>>>::Output;
}

// `Done` tells whether the size already equals `N`. Only non-empty
// sequences can be trimmed further, so `N` past the size ends on `Nil`.
#[doc(hidden)]
#[diagnostic::on_unimplemented(
    message = "cannot take `{N}` symbols from a shorter sequence",
    label = "ran out of symbols",
    note = "`FirstK<N>` and `LastK<N>` need `N` to be at most the size of the sequence"
)]
pub trait TrimFront<N, Done>: Sequence {
    type Output: Sequence;
}

impl<L: Sequence, N> TrimFront<N, True> for L {
    type Output = L;
}

impl<H, T, N> TrimFront<N, False> for Cons<H, T>
where
    H: Symbol,
    N: Nat,
    T: TrimFront<N, IsEqual<<T as Sequence>::Size, N>>,
{
    type Output = <T as TrimFront<N, IsEqual<<T as Sequence>::Size, N>>>::Output;
}

/// The first `N` symbols: `reverse(last_k(N, reverse(self)))`.
pub trait FirstK<N: Nat>: Sequence {
    type Output: Sequence;
}

impl<L, N> FirstK<N> for L
where
    N: Nat,
    L: Reverse,
    <L as Reverse>::Output: LastK<N>,
    <<L as Reverse>::Output as LastK<N>>::Output: Reverse,
{
    type Output = <<<L as Reverse>::Output as LastK<N>>::Output as Reverse>::Output;
}
