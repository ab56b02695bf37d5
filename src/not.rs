use super::parser::Parser;
use crate::error::{ParseError, ParseResult};
use crate::input::Input;
use std::marker::PhantomData;

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'code, P> Parser<'code> for Not<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = ();

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        match self.parser.parse(cursor) {
            Ok(_) => Err(ParseError::new(
                cursor,
                "negative lookahead failed: unexpected match",
            )),
            Err(_) => Ok(((), cursor)),
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not_followed_by<'code, P>(parser: P) -> Not<P>
where
    P: Parser<'code>,
{
    Not::new(parser)
}

/// Extension trait to add .not_followed_by() method support for parsers
pub trait NotExt<'code>: Parser<'code> + Sized {
    fn not_followed_by(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers
impl<'code, P> NotExt<'code> for P where P: Parser<'code> {}

/// Parser that succeeds only when no input remains
pub struct EndOfInput<C> {
    _cursor: PhantomData<fn() -> C>,
}

impl<'code, C> Parser<'code> for EndOfInput<C>
where
    C: Input<'code>,
{
    type Cursor = C;
    type Output = ();

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        match cursor.uncons() {
            None => Ok(((), cursor)),
            Some((token, _)) => {
                Err(ParseError::unexpected(cursor, token).expecting("end of input"))
            }
        }
    }
}

/// Convenience function to create an EndOfInput parser
pub fn end_of_input<'code, C>() -> EndOfInput<C>
where
    C: Input<'code>,
{
    EndOfInput {
        _cursor: PhantomData,
    }
}
