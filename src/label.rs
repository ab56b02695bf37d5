use super::parser::Parser;
use crate::error::ParseResult;
use std::borrow::Cow;
use std::fmt;

/// Parser combinator that names what its parser was trying to match (`<?>`)
///
/// On failure the label is appended to the error's `expected` list. Success is
/// passed through untouched.
pub struct Label<P> {
    parser: P,
    label: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, label: impl Into<Cow<'static, str>>) -> Self {
        Label {
            parser,
            label: label.into(),
        }
    }
}

impl<P> fmt::Debug for Label<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Label")
            .field("parser", &"<parser>")
            .field("label", &self.label)
            .finish()
    }
}

impl<'code, P> Parser<'code> for Label<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        self.parser
            .parse(cursor)
            .map_err(|error| error.expecting(self.label.clone()))
    }
}

/// Extension trait to add .label() method support for parsers
pub trait LabelExt<'code>: Parser<'code> + Sized {
    fn label(self, label: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, label)
    }
}

/// Implement LabelExt for all parsers
impl<'code, P> LabelExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Label parser
pub fn label<'code, P>(parser: P, label: impl Into<Cow<'static, str>>) -> Label<P>
where
    P: Parser<'code>,
{
    Label::new(parser, label)
}
