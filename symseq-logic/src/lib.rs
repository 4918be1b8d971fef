//! Type-level booleans and natural numbers.
//!
//! Everything in this crate is computed by the trait solver. The `VALUE`
//! consts are the only way back into ordinary code, and they are usable in
//! `const` contexts.
mod boolean;
mod nat;

pub use boolean::{And, Bool, False, If, Not, Or, True};
pub use nat::{
    Half, HalfCeil, IsEqual, IsLess, Nat, Sum, N0, N1, N10, N11, N12, N13, N14, N15, N16, N2, N3,
    N4, N5, N6, N7, N8, N9, S, Z,
};

mod sealed {
    pub trait Sealed {}
}
