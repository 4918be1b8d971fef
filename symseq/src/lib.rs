//! A compile-time algebra over sequences of symbols.
//!
//! Symbols are types implementing [`Symbol`]; sequences are type-level
//! lists built from [`Nil`] and [`Cons`], normally written with [`seq!`].
//! Every operation is a trait whose `Output` is computed by the trait
//! solver while the program is compiled. The [`op`] module has a type
//! alias for each of them, and the operations that answer with a number or
//! a boolean also have a `const fn` so the answer can be used in `const`
//! items.
//!
//! Operations with a precondition are only implemented where it holds:
//! popping `Nil`, indexing past the end, or comparing symbols from separate
//! [`symbols!`] declarations does not compile.
//!
//! ```
//! use symseq::logic::{N1, N4, N8};
//! use symseq::{contains, find, op, seq, size, symbols, ByKey, Key};
//!
//! symbols! { Int, Char, Double, Bool }
//!
//! struct Width;
//! impl Key<Int> for Width {
//!     type Output = N4;
//! }
//! impl Key<Char> for Width {
//!     type Output = N1;
//! }
//! impl Key<Double> for Width {
//!     type Output = N8;
//! }
//!
//! type Types = seq![Int, Char, Double];
//! type Sorted = op::StableSort<ByKey<Width>, Types>;
//!
//! assert_eq!(symseq::display::<Sorted>().to_string(), "[Char, Int, Double]");
//! const _: () = assert!(contains::<Char, Types>());
//! const _: () = assert!(find::<Bool, Types>() == size::<Types>());
//! ```
#![cfg_attr(test, recursion_limit = "256")]

pub use symseq_logic as logic;

mod fold;
mod functional;
pub mod op;
mod ordering;
mod render;
mod search;
mod sequence;
mod structural;
mod symbol;
#[cfg(test)]
mod testing;

pub use fold::{Fold, FoldLeft, FoldRight};
pub use functional::{Filter, Identity, KeepIf, Mapper, SkipRepeat, Transform, Unique};
pub use ordering::{
    is_sorted, ById, ByKey, CheckOrder, Checked, Comparator, Flip, IsSorted, Key, Merge, NotAfter,
    Precedes, StableSort, Unstarted,
};
pub use render::{display, Render, Rendered};
pub use search::{contains, find, find_if, Classifier, Contains, Find, FindIf, Negate, SameAs, Within};
pub use sequence::{equal, not_equal, size, Cons, Equal, Nil, NotEqual, Sequence};
pub use structural::{
    At, Concat, FirstK, Generate, Generator, LastK, PopBack, PopFront, Prepend, PushBack,
    PushFront, Repeat, Reverse,
};
pub use symbol::{name, Identical, IdenticalTo, SameUniverse, Symbol};
