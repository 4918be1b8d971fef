use crate::sealed::Sealed;

/// A boolean known to the trait solver.
///
/// There are exactly two: [`True`] and [`False`]. The logical operations are
/// generic associated types so they can be combined without extra bounds.
pub trait Bool: Sealed {
    const VALUE: bool;

    type Not: Bool;
    type And<B: Bool>: Bool;
    type Or<B: Bool>: Bool;
    /// `Then` for [`True`], `Else` for [`False`].
    type If<Then, Else>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct True;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct False;

impl Sealed for True {}
impl Sealed for False {}

impl Bool for True {
    const VALUE: bool = true;

    type Not = False;
    type And<B: Bool> = B;
    type Or<B: Bool> = True;
    type If<Then, Else> = Then;
}

impl Bool for False {
    const VALUE: bool = false;

    type Not = True;
    type And<B: Bool> = False;
    type Or<B: Bool> = B;
    type If<Then, Else> = Else;
}

pub type Not<A> = <A as Bool>::Not;
pub type And<A, B> = <A as Bool>::And<B>;
pub type Or<A, B> = <A as Bool>::Or<B>;
pub type If<C, Then, Else> = <C as Bool>::If<Then, Else>;
