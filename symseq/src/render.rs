use std::fmt;
use std::marker::PhantomData;

use crate::sequence::{Cons, Nil, Sequence};
use crate::symbol::Symbol;

/// Writes the names of the symbols of a sequence.
///
/// This is the only runtime code attached to sequences; [`display`] is the
/// usual way to reach it.
pub trait Render: Sequence {
    /// Write the symbol names separated by `, `. `first` is false when
    /// something was already written before this part of the sequence.
    fn write_symbols(f: &mut fmt::Formatter<'_>, first: bool) -> fmt::Result;
}

impl Render for Nil {
    fn write_symbols(_f: &mut fmt::Formatter<'_>, _first: bool) -> fmt::Result {
        Ok(())
    }
}

impl<H: Symbol, T: Render> Render for Cons<H, T> {
    fn write_symbols(f: &mut fmt::Formatter<'_>, first: bool) -> fmt::Result {
        if !first {
            f.write_str(", ")?;
        }
        f.write_str(H::NAME)?;
        T::write_symbols(f, false)
    }
}

/// Renders the sequence `L` as `[A, B, C]` through `Display` and `Debug`.
///
/// Rendering writes straight into the formatter; nothing is allocated.
pub struct Rendered<L>(PhantomData<L>);

pub const fn display<L: Render>() -> Rendered<L> {
    Rendered(PhantomData)
}

impl<L: Render> fmt::Display for Rendered<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        L::write_symbols(f, true)?;
        f.write_str("]")
    }
}

impl<L: Render> fmt::Debug for Rendered<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Char, Double, Int};
    use crate::{op, seq};

    // writes into a plain `String` without going through `Rendered`
    struct Names<L>(PhantomData<L>);

    impl<L: Render> fmt::Display for Names<L> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            L::write_symbols(f, true)
        }
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(display::<seq![]>().to_string(), "[]");
    }

    #[test]
    fn test_display() {
        assert_eq!(display::<seq![Int]>().to_string(), "[Int]");
        assert_eq!(
            display::<seq![Int, Char, Double]>().to_string(),
            "[Int, Char, Double]"
        );
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", display::<seq![Char, Char]>()), "[Char, Char]");
    }

    #[test]
    fn test_render_operation_result() {
        assert_eq!(
            display::<op::Reverse<seq![Int, Char, Double]>>().to_string(),
            "[Double, Char, Int]"
        );
    }

    #[test]
    fn test_write_symbols() {
        assert_eq!(Names::<seq![]>(PhantomData).to_string(), "");
        assert_eq!(Names::<seq![Char, Int]>(PhantomData).to_string(), "Char, Int");
    }
}
