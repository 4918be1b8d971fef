use std::marker::PhantomData;

use symseq_logic::{Bool, False, Not, True};

use crate::fold::{Fold, FoldRight};
use crate::search::Classifier;
use crate::sequence::{Cons, Nil, Sequence};
use crate::symbol::{Identical, IdenticalTo, Symbol};

/// A function from symbols to symbols.
#[diagnostic::on_unimplemented(message = "`{Self}` cannot map the symbol `{Sym}`")]
pub trait Mapper<Sym: Symbol> {
    type Output: Symbol;
}

/// Maps every symbol to itself.
pub struct Identity;

impl<Sym: Symbol> Mapper<Sym> for Identity {
    type Output = Sym;
}

/// Apply `M` to every symbol, keeping order and length.
pub trait Transform<M>: Sequence {
    type Output: Sequence;
}

impl<M> Transform<M> for Nil {
    type Output = Nil;
}

impl<M, H, T> Transform<M> for Cons<H, T>
where
    H: Symbol,
    T: Transform<M>,
    M: Mapper<H>,
{
    type Output = Cons<<M as Mapper<H>>::Output, <T as Transform<M>>::Output>;
}

#[doc(hidden)]
pub trait PrependIf<Sym: Symbol, Acc: Sequence>: Bool {
    type Output: Sequence;
}

impl<Sym: Symbol, Acc: Sequence> PrependIf<Sym, Acc> for True {
    type Output = Cons<Sym, Acc>;
}

impl<Sym: Symbol, Acc: Sequence> PrependIf<Sym, Acc> for False {
    type Output = Acc;
}

/// Fold step that prepends the symbol if `C` accepts it.
pub struct KeepIf<C>(PhantomData<C>);

impl<C, Acc, Sym> Fold<Acc, Sym> for KeepIf<C>
where
    Acc: Sequence,
    Sym: Symbol,
    C: Classifier<Sym>,
    <C as Classifier<Sym>>::Output: PrependIf<Sym, Acc>,
{
    type Output = <<C as Classifier<Sym>>::Output as PrependIf<Sym, Acc>>::Output;
}

/// The symbols accepted by `C`, in their original relative order.
pub trait Filter<C>: Sequence {
    type Output: Sequence;
}

impl<L, C> Filter<C> for L
where
    L: FoldRight<KeepIf<C>, Nil>,
    <L as FoldRight<KeepIf<C>, Nil>>::Output: Sequence,
{
    type Output = <L as FoldRight<KeepIf<C>, Nil>>::Output;
}

/// Fold step that prepends the symbol unless it equals the current front
/// of the accumulator.
pub struct SkipRepeat;

impl<Sym: Symbol> Fold<Nil, Sym> for SkipRepeat {
    type Output = Cons<Sym, Nil>;
}

impl<Sym, F, R> Fold<Cons<F, R>, Sym> for SkipRepeat
where
    Sym: IdenticalTo<F>,
    F: Symbol,
    R: Sequence,
    Not<Identical<Sym, F>>: PrependIf<Sym, Cons<F, R>>,
{
    type Output = <Not<Identical<Sym, F>> as PrependIf<Sym, Cons<F, R>>>::Output;
}

/// Collapse runs of the same symbol into one.
///
/// Only *adjacent* duplicates are removed: `[A, A, B, A, A]` becomes
/// `[A, B, A]`, not `[A, B]`. The sequence is folded from the back and each
/// symbol is compared with the front of what has been kept so far.
pub trait Unique: Sequence {
    type Output: Sequence;
}

impl<L> Unique for L
where
    L: FoldRight<SkipRepeat, Nil>,
    <L as FoldRight<SkipRepeat, Nil>>::Output: Sequence,
{
    type Output = <L as FoldRight<SkipRepeat, Nil>>::Output;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op;
    use crate::search::{Negate, SameAs, Within};
    use crate::seq;
    use crate::testing::{Bool, Char, Double, Float, Int};
    use static_assertions::assert_type_eq_all;

    // widens every numeric symbol to Double
    struct Widen;

    impl Mapper<Int> for Widen {
        type Output = Double;
    }

    impl Mapper<Float> for Widen {
        type Output = Double;
    }

    impl Mapper<Double> for Widen {
        type Output = Double;
    }

    impl Mapper<Char> for Widen {
        type Output = Char;
    }

    #[test]
    fn test_transform() {
        assert_type_eq_all!(op::Transform<Widen, seq![]>, seq![]);
        assert_type_eq_all!(
            op::Transform<Widen, seq![Int, Char, Float]>,
            seq![Double, Char, Double]
        );
        assert_type_eq_all!(op::Transform<Identity, seq![Bool, Int]>, seq![Bool, Int]);
    }

    #[test]
    fn test_filter() {
        type Numeric = Within<seq![Int, Float, Double]>;
        assert_type_eq_all!(op::Filter<Numeric, seq![]>, seq![]);
        assert_type_eq_all!(
            op::Filter<Numeric, seq![Char, Double, Bool, Int, Float]>,
            seq![Double, Int, Float]
        );
        assert_type_eq_all!(op::Filter<Numeric, seq![Char, Bool]>, seq![]);
        assert_type_eq_all!(
            op::Filter<Negate<SameAs<Int>>, seq![Int, Char, Int, Bool]>,
            seq![Char, Bool]
        );
    }

    #[test]
    fn test_unique_is_adjacent_only() {
        assert_type_eq_all!(op::Unique<seq![Int, Int, Char, Int, Int]>, seq![Int, Char, Int]);
    }

    #[test]
    fn test_unique() {
        assert_type_eq_all!(op::Unique<seq![]>, seq![]);
        assert_type_eq_all!(op::Unique<seq![Int]>, seq![Int]);
        assert_type_eq_all!(op::Unique<seq![Int, Int, Int]>, seq![Int]);
        assert_type_eq_all!(op::Unique<seq![Int, Char, Bool]>, seq![Int, Char, Bool]);
        assert_type_eq_all!(
            op::Unique<seq![Bool, Bool, Char, Char, Bool]>,
            seq![Bool, Char, Bool]
        );
    }
}
