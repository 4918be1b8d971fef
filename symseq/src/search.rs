use std::marker::PhantomData;

use symseq_logic::{Bool, False, IsEqual, Nat, Not, True, S, Z};

use crate::sequence::{Cons, Nil, Sequence};
use crate::symbol::{Identical, IdenticalTo, Symbol};

/// A predicate over symbols.
#[diagnostic::on_unimplemented(message = "`{Self}` cannot classify the symbol `{Sym}`")]
pub trait Classifier<Sym: Symbol> {
    type Output: Bool;
}

/// Matches exactly the symbol `T`.
pub struct SameAs<T>(PhantomData<T>);

impl<T: Symbol, Sym: IdenticalTo<T>> Classifier<Sym> for SameAs<T> {
    type Output = Identical<Sym, T>;
}

/// Matches what `C` rejects.
pub struct Negate<C>(PhantomData<C>);

impl<C: Classifier<Sym>, Sym: Symbol> Classifier<Sym> for Negate<C> {
    type Output = Not<<C as Classifier<Sym>>::Output>;
}

/// Matches the symbols contained in the sequence `L`.
pub struct Within<L>(PhantomData<L>);

impl<L: Contains<Sym>, Sym: Symbol> Classifier<Sym> for Within<L> {
    type Output = <L as Contains<Sym>>::Output;
}

/// Index of the first symbol accepted by `C`, or the size of the
/// sequence if there is none.
pub trait FindIf<C>: Sequence {
    type Output: Nat;
}

impl<C> FindIf<C> for Nil {
    type Output = Z;
}

impl<C, H, T> FindIf<C> for Cons<H, T>
where
    H: Symbol,
    T: FindIf<C>,
    C: Classifier<H>,
    <C as Classifier<H>>::Output: FindStep<<T as FindIf<C>>::Output>,
{
    type Output = <<C as Classifier<H>>::Output as FindStep<<T as FindIf<C>>::Output>>::Output;
}

// A hit is index zero, otherwise the index found in the tail moves up by
// one.
#[doc(hidden)]
pub trait FindStep<Rest: Nat>: Bool {
    type Output: Nat;
}

impl<Rest: Nat> FindStep<Rest> for True {
    type Output = Z;
}

impl<Rest: Nat> FindStep<Rest> for False {
    type Output = S<Rest>;
}

/// Index of the first `T`, or the size of the sequence if there is none.
pub trait Find<T: Symbol>: Sequence {
    type Output: Nat;
}

impl<L, T> Find<T> for L
where
    L: FindIf<SameAs<T>>,
    T: Symbol,
{
    type Output = <L as FindIf<SameAs<T>>>::Output;
}

pub trait Contains<T: Symbol>: Sequence {
    type Output: Bool;
}

impl<L, T> Contains<T> for L
where
    L: Sequence,
    L: Find<T>,
    T: Symbol,
{
    type Output = Not<IsEqual<<L as Find<T>>::Output, <L as Sequence>::Size>>;
}

pub const fn find<T: Symbol, L: Find<T>>() -> usize {
    <<L as Find<T>>::Output as Nat>::VALUE
}

pub const fn find_if<C, L: FindIf<C>>() -> usize {
    <<L as FindIf<C>>::Output as Nat>::VALUE
}

pub const fn contains<T: Symbol, L: Contains<T>>() -> bool {
    <<L as Contains<T>>::Output as Bool>::VALUE
}
