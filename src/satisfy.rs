use crate::error::{ParseError, ParseResult};
use crate::input::Input;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that consumes a single token matching a predicate
pub struct Satisfy<C, F> {
    predicate: F,
    _cursor: PhantomData<fn() -> C>,
}

impl<C, F> Satisfy<C, F> {
    pub fn new(predicate: F) -> Self {
        Satisfy {
            predicate,
            _cursor: PhantomData,
        }
    }
}

impl<'code, C, F> Parser<'code> for Satisfy<C, F>
where
    C: Input<'code>,
    F: Fn(C::Token) -> bool,
{
    type Cursor = C;
    type Output = C::Token;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        match cursor.uncons() {
            Some((token, rest)) if (self.predicate)(token) => Ok((token, rest)),
            Some((token, _)) => Err(ParseError::unexpected(cursor, token)),
            None => Err(ParseError::end_of_input(cursor)),
        }
    }
}

/// Parser that consumes a single token matching a predicate and discards it
pub struct Skip<C, F> {
    predicate: F,
    _cursor: PhantomData<fn() -> C>,
}

impl<'code, C, F> Parser<'code> for Skip<C, F>
where
    C: Input<'code>,
    F: Fn(C::Token) -> bool,
{
    type Cursor = C;
    type Output = ();

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        match cursor.uncons() {
            Some((token, rest)) if (self.predicate)(token) => Ok(((), rest)),
            Some((token, _)) => Err(ParseError::unexpected(cursor, token)),
            None => Err(ParseError::end_of_input(cursor)),
        }
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<'code, C, F>(predicate: F) -> Satisfy<C, F>
where
    C: Input<'code>,
    F: Fn(C::Token) -> bool,
{
    Satisfy::new(predicate)
}

/// Convenience function to create a Skip parser
pub fn skip<'code, C, F>(predicate: F) -> Skip<C, F>
where
    C: Input<'code>,
    F: Fn(C::Token) -> bool,
{
    Skip {
        predicate,
        _cursor: PhantomData,
    }
}

/// Parser that consumes any single token, failing only at end of input
pub fn any<'code, C>() -> Satisfy<C, fn(C::Token) -> bool>
where
    C: Input<'code>,
{
    let accept: fn(C::Token) -> bool = |_| true;
    Satisfy::new(accept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{ByteCursor, StrCursor};

    #[test]
    fn test_satisfy_consumes_one() {
        let cursor = StrCursor::new("a1");
        let parser = satisfy(|c: char| c.is_ascii_lowercase());

        let (ch, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.rest(), "1");
    }

    #[test]
    fn test_satisfy_failure_does_not_consume() {
        let cursor = StrCursor::new("1a");
        let parser = satisfy(|c: char| c.is_ascii_lowercase());

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.remaining, cursor);
        assert!(error.expected.is_empty());
        assert_eq!(error.message, "unexpected '1'");
    }

    #[test]
    fn test_satisfy_at_end_of_input() {
        let cursor = ByteCursor::new(b"");
        let parser = satisfy(|b: u8| b == b'x');

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.message, "unexpected end of input");
    }

    #[test]
    fn test_skip_discards_token() {
        let cursor = ByteCursor::new(b"  x");
        let parser = skip(|b: u8| b == b' ');

        let ((), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(cursor.rest(), b" x");
        assert!(parser.parse(ByteCursor::new(b"x")).is_err());
    }

    #[test]
    fn test_any() {
        let parser = any();

        let (ch, _) = parser.parse(StrCursor::new("中")).unwrap();
        assert_eq!(ch, '中');
        assert!(parser.parse(StrCursor::new("")).is_err());
    }
}
