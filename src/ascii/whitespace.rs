use crate::atomic::Atomic;
use crate::char::char;
use crate::input::Input;
use crate::label::{Label, LabelExt};
use crate::many::skip_many;
use crate::map::MapExt;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::satisfy::satisfy;
use crate::string::string;

/// Parser that matches a single ASCII whitespace character (space, tab, newline, carriage return)
pub fn space<'code, C>() -> Label<impl Parser<'code, Cursor = C, Output = C::Token>>
where
    C: Input<'code>,
{
    satisfy::<C, _>(|token: C::Token| matches!(token.to_char(), ' ' | '\t' | '\n' | '\r'))
        .label("whitespace")
}

/// Parser that skips any amount of whitespace, including none
pub fn skip_spaces<'code, C>() -> impl Parser<'code, Cursor = C, Output = ()>
where
    C: Input<'code>,
{
    skip_many(space())
}

/// Parser that matches a line ending, either `\n` or `\r\n`
pub fn end_of_line<'code, C>() -> impl Parser<'code, Cursor = C, Output = ()>
where
    C: Input<'code>,
{
    char('\n').value(()).or(string("\r\n").value(()))
}
