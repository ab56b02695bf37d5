//! Single-token parsers defined in terms of [`satisfy`].
//!
//! Tokens are compared through [`Atomic::to_char`], so the same parsers work over
//! text and byte input.

use crate::atomic::Atomic;
use crate::input::Input;
use crate::label::{Label, LabelExt};
use crate::parser::Parser;
use crate::satisfy::satisfy;
use std::borrow::Cow;

/// Parser that matches one specific character
///
/// Over byte input only characters up to `'\u{ff}'` can match, each as the
/// single byte of the same value. UTF-8 sequences are never decoded.
pub fn char<'code, C>(
    expected: char,
) -> Label<impl Parser<'code, Cursor = C, Output = C::Token>>
where
    C: Input<'code>,
{
    satisfy::<C, _>(move |token: C::Token| token.to_char() == expected)
        .label(format!("{:?}", expected))
}

/// Parser that matches any character except `excluded`
pub fn not_char<'code, C>(
    excluded: char,
) -> Label<impl Parser<'code, Cursor = C, Output = C::Token>>
where
    C: Input<'code>,
{
    satisfy::<C, _>(move |token: C::Token| token.to_char() != excluded)
        .label(format!("anything but {:?}", excluded))
}

/// Parser that matches any character contained in `set`
pub fn one_of<'code, C>(
    set: impl Into<Cow<'static, str>>,
) -> Label<impl Parser<'code, Cursor = C, Output = C::Token>>
where
    C: Input<'code>,
{
    let set = set.into();
    let label = format!("one of {:?}", set);
    satisfy::<C, _>(move |token: C::Token| set.contains(token.to_char())).label(label)
}

/// Parser that matches any character not contained in `set`
pub fn none_of<'code, C>(
    set: impl Into<Cow<'static, str>>,
) -> Label<impl Parser<'code, Cursor = C, Output = C::Token>>
where
    C: Input<'code>,
{
    let set = set.into();
    let label = format!("none of {:?}", set);
    satisfy::<C, _>(move |token: C::Token| !set.contains(token.to_char())).label(label)
}
