use symseq_logic::{Bool, IsEqual, Nat};

/// An opaque identity token.
///
/// A symbol is a type that is never instantiated by this library. Symbols
/// belong to a `Universe`, and only symbols of the same universe can be
/// compared; within a universe two symbols are the same symbol iff their
/// `Id`s are equal. The [`symbols!`](crate::symbols) macro hands out the
/// ids and names the universe after the first symbol it declares.
///
/// A symbol implemented by hand that should not be compared with any other
/// can use `type Universe = Self`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a symbol",
    note = "declare symbols with `symseq::symbols!` or implement `symseq::Symbol` by hand"
)]
pub trait Symbol {
    type Universe;
    type Id: Nat;
    /// Name used when a sequence is rendered.
    const NAME: &'static str;
}

/// Holds iff `Self` and `U` are the same universe.
#[diagnostic::on_unimplemented(
    message = "symbols of the universe `{Self}` cannot be compared with symbols of the universe `{U}`",
    label = "these symbols come from separate `symbols!` declarations",
    note = "to extend an existing universe, start the `symbols!` call with `after Last;`"
)]
pub trait SameUniverse<U> {}

impl<U> SameUniverse<U> for U {}

/// Exact identity between `Self` and `B`.
///
/// Only implemented for symbols of the same universe, so comparing
/// unrelated symbols does not compile.
pub trait IdenticalTo<B: Symbol>: Symbol {
    type Output: Bool;
}

impl<A, B> IdenticalTo<B> for A
where
    A: Symbol,
    B: Symbol,
    A::Universe: SameUniverse<B::Universe>,
{
    type Output = IsEqual<A::Id, B::Id>;
}

/// `True` if `A` and `B` are the same symbol.
pub type Identical<A, B> = <A as IdenticalTo<B>>::Output;

pub const fn name<S: Symbol>() -> &'static str {
    S::NAME
}

/// Declare unit structs that implement [`Symbol`].
///
/// Each call starts a new universe with ids from zero, in declaration order.
/// To add more symbols to the same universe later on, continue after the
/// last one:
///
/// ```
/// symseq::symbols! { Int, Char }
/// symseq::symbols! { after Char; Double, Bool }
///
/// use symseq::{logic::Nat, Symbol};
///
/// assert_eq!(<<Bool as Symbol>::Id as Nat>::VALUE, 3);
/// ```
///
/// Attributes and visibility are passed through to each struct.
#[macro_export]
macro_rules! symbols {
    (after $prev:ty; $($rest:tt)*) => {
        $crate::symbols!(
            @declare <$prev as $crate::Symbol>::Universe;
            $crate::logic::S< <$prev as $crate::Symbol>::Id >;
            $($rest)*
        );
    };
    (@declare $universe:ty; $id:ty;) => {};
    (@declare $universe:ty; $id:ty; $(#[$meta:meta])* $vis:vis $name:ident $(, $($rest:tt)*)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::Symbol for $name {
            type Universe = $universe;
            type Id = $id;
            const NAME: &'static str = stringify!($name);
        }

        $crate::symbols!(@declare $universe; $crate::logic::S<$id>; $($($rest)*)?);
    };
    ($(#[$meta:meta])* $vis:vis $name:ident $(, $($rest:tt)*)?) => {
        $crate::symbols!(@declare $name; $crate::logic::Z; $(#[$meta])* $vis $name $(, $($rest)*)?);
    };
}
