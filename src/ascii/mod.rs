//! ASCII character classes and the lexical parsers built from them.
//!
//! Every class compares tokens through [`Atomic::to_char`], so the same
//! parser runs over [`StrCursor`](crate::cursors::StrCursor) and
//! [`ByteCursor`](crate::cursors::ByteCursor).

use crate::atomic::Atomic;
use crate::input::Input;
use crate::label::{Label, LabelExt};
use crate::or::OrExt;
use crate::parser::Parser;
use crate::satisfy::satisfy;

pub mod number;
pub mod whitespace;

pub use number::{integer, number};
pub use whitespace::{end_of_line, skip_spaces, space};

fn class<'code, C>(
    name: &'static str,
    accept: fn(char) -> bool,
) -> Label<impl Parser<'code, Cursor = C, Output = C::Token>>
where
    C: Input<'code>,
{
    satisfy::<C, _>(move |token: C::Token| accept(token.to_char())).label(name)
}

/// Parser that matches a single decimal digit (0-9)
pub fn digit<'code, C>() -> Label<impl Parser<'code, Cursor = C, Output = C::Token>>
where
    C: Input<'code>,
{
    class("digit", |c| c.is_ascii_digit())
}

/// Parser that matches a single hexadecimal digit (0-9, a-f, A-F)
pub fn hex_digit<'code, C>() -> Label<impl Parser<'code, Cursor = C, Output = C::Token>>
where
    C: Input<'code>,
{
    class("hex digit", |c| c.is_ascii_hexdigit())
}

/// Parser that matches a single ASCII lowercase letter
pub fn lower_alphabet<'code, C>() -> Label<impl Parser<'code, Cursor = C, Output = C::Token>>
where
    C: Input<'code>,
{
    class("lowercase letter", |c| c.is_ascii_lowercase())
}

/// Parser that matches a single ASCII uppercase letter
pub fn upper_alphabet<'code, C>() -> Label<impl Parser<'code, Cursor = C, Output = C::Token>>
where
    C: Input<'code>,
{
    class("uppercase letter", |c| c.is_ascii_uppercase())
}

/// Parser that matches a single ASCII letter of either case
pub fn alphabet<'code, C>() -> impl Parser<'code, Cursor = C, Output = C::Token>
where
    C: Input<'code>,
{
    lower_alphabet().or(upper_alphabet())
}

/// Parser that matches a single ASCII letter or digit
pub fn alpha_num<'code, C>() -> impl Parser<'code, Cursor = C, Output = C::Token>
where
    C: Input<'code>,
{
    alphabet().or(digit())
}
