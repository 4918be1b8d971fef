use std::marker::PhantomData;

use symseq_logic::{And, Bool, False, Half, HalfCeil, IsLess, Nat, Not, Or, True, N2};

use crate::fold::{Fold, FoldLeft};
use crate::op;
use crate::sequence::{Cons, Nil, Sequence};
use crate::structural::{FirstK, LastK};
use crate::symbol::{SameUniverse, Symbol};

/// A strict order over symbols: `Output` is `True` iff `A` comes strictly
/// before `B`.
///
/// The operations in this module expect a strict weak order over the
/// symbols they actually compare.
#[diagnostic::on_unimplemented(message = "`{Self}` cannot compare `{A}` with `{B}`")]
pub trait Comparator<A: Symbol, B: Symbol> {
    type Output: Bool;
}

/// `A` strictly before `B`.
pub type Precedes<C, A, B> = <C as Comparator<A, B>>::Output;

/// `A` not after `B`, derived from the strict order as
/// `cmp(a, b) || !cmp(b, a)`. Ties count as in order.
pub type NotAfter<C, A, B> = Or<Precedes<C, A, B>, Not<Precedes<C, B, A>>>;

/// Orders symbols of one universe by their id, which is their declaration
/// order.
pub struct ById;

impl<A, B> Comparator<A, B> for ById
where
    A: Symbol,
    B: Symbol,
    A::Universe: SameUniverse<B::Universe>,
{
    type Output = IsLess<A::Id, B::Id>;
}

/// A sort key: maps a symbol to a natural number.
#[diagnostic::on_unimplemented(message = "`{Self}` has no key for the symbol `{Sym}`")]
pub trait Key<Sym: Symbol> {
    type Output: Nat;
}

/// Orders symbols by ascending key. Symbols with equal keys are ties.
pub struct ByKey<K>(PhantomData<K>);

impl<K, A, B> Comparator<A, B> for ByKey<K>
where
    A: Symbol,
    B: Symbol,
    K: Key<A> + Key<B>,
{
    type Output = IsLess<<K as Key<A>>::Output, <K as Key<B>>::Output>;
}

/// The opposite order of `C`.
pub struct Flip<C>(PhantomData<C>);

impl<C, A, B> Comparator<A, B> for Flip<C>
where
    A: Symbol,
    B: Symbol,
    C: Comparator<B, A>,
{
    type Output = <C as Comparator<B, A>>::Output;
}

/// Fold state before the first symbol has been seen.
pub struct Unstarted;

/// Fold state after at least one symbol: the last symbol seen and whether
/// every pair so far was in order.
pub struct Checked<Prev, InOrder>(PhantomData<(Prev, InOrder)>);

/// Fold step for [`IsSorted`].
pub struct CheckOrder<C>(PhantomData<C>);

impl<C, Sym: Symbol> Fold<Unstarted, Sym> for CheckOrder<C> {
    type Output = Checked<Sym, True>;
}

impl<C, Prev, InOrder, Sym> Fold<Checked<Prev, InOrder>, Sym> for CheckOrder<C>
where
    Prev: Symbol,
    InOrder: Bool,
    Sym: Symbol,
    C: Comparator<Prev, Sym> + Comparator<Sym, Prev>,
{
    type Output = Checked<Sym, And<InOrder, NotAfter<C, Prev, Sym>>>;
}

#[doc(hidden)]
pub trait Verdict {
    type Sorted: Bool;
}

impl Verdict for Unstarted {
    type Sorted = True;
}

impl<Prev, InOrder: Bool> Verdict for Checked<Prev, InOrder> {
    type Sorted = InOrder;
}

/// `True` iff every adjacent pair is in non-strict order under `C`.
///
/// Sequences of zero or one symbol are sorted.
pub trait IsSorted<C>: Sequence {
    type Output: Bool;
}

impl<L, C> IsSorted<C> for L
where
    L: FoldLeft<CheckOrder<C>, Unstarted>,
    <L as FoldLeft<CheckOrder<C>, Unstarted>>::Output: Verdict,
{
    type Output = <<L as FoldLeft<CheckOrder<C>, Unstarted>>::Output as Verdict>::Sorted;
}

/// Stable merge of two sequences that are each ordered by `C`.
///
/// On a tie the symbol from `Self` goes first.
pub trait Merge<C, R: Sequence>: Sequence {
    type Output: Sequence;
}

impl<C, R: Sequence> Merge<C, R> for Nil {
    type Output = R;
}

impl<C, H: Symbol, T: Sequence> Merge<C, Nil> for Cons<H, T> {
    type Output = Cons<H, T>;
}

impl<C, HA, TA, HB, TB> Merge<C, Cons<HB, TB>> for Cons<HA, TA>
where
    HA: Symbol,
    TA: Sequence,
    HB: Symbol,
    TB: Sequence,
    C: Comparator<HA, HB> + Comparator<HB, HA>,
    NotAfter<C, HA, HB>: MergeStep<C, Cons<HA, TA>, Cons<HB, TB>>,
{
    type Output = <NotAfter<C, HA, HB> as MergeStep<C, Cons<HA, TA>, Cons<HB, TB>>>::Output;
}

// `True` takes the head of the left sequence, `False` the head of the
// right one.
#[doc(hidden)]
pub trait MergeStep<C, A, B>: Bool {
    type Output: Sequence;
}

impl<C, HA, TA, B> MergeStep<C, Cons<HA, TA>, B> for True
where
    HA: Symbol,
    TA: Merge<C, B>,
    B: Sequence,
{
    type Output = Cons<HA, <TA as Merge<C, B>>::Output>;
}

impl<C, A, HB, TB> MergeStep<C, A, Cons<HB, TB>> for False
where
    A: Merge<C, TB>,
    HB: Symbol,
    TB: Sequence,
{
    type Output = Cons<HB, <A as Merge<C, TB>>::Output>;
}

/// Stable merge sort.
///
/// The first `n / 2` symbols and the remaining `n - n / 2` are sorted
/// separately and merged. Equal symbols keep their relative order.
pub trait StableSort<C>: Sequence {
    type Output: Sequence;
}

impl<L, C> StableSort<C> for L
where
    L: Sequence,
    IsLess<<L as Sequence>::Size, N2>: SortStep<C, L>,
{
    type Output = <IsLess<<L as Sequence>::Size, N2> as SortStep<C, L>>::Output;
}

// `True` when the sequence is short enough to be sorted already.
#[doc(hidden)]
pub trait SortStep<C, L>: Bool {
    type Output: Sequence;
}

impl<C, L: Sequence> SortStep<C, L> for True {
    type Output = L;
}

impl<C, L> SortStep<C, L> for False
where
    L: Sequence,
    L: FirstK<Half<op::Size<L>>> + LastK<HalfCeil<op::Size<L>>>,
    op::FirstK<Half<op::Size<L>>, L>: StableSort<C>,
    op::LastK<HalfCeil<op::Size<L>>, L>: StableSort<C>,
    op::StableSort<C, op::FirstK<Half<op::Size<L>>, L>>:
        Merge<C, op::StableSort<C, op::LastK<HalfCeil<op::Size<L>>, L>>>,
{
    type Output = op::Merge<
        C,
        op::StableSort<C, op::FirstK<Half<op::Size<L>>, L>>,
        op::StableSort<C, op::LastK<HalfCeil<op::Size<L>>, L>>,
    >;
}

pub const fn is_sorted<C, L: IsSorted<C>>() -> bool {
    <<L as IsSorted<C>>::Output as Bool>::VALUE
}
