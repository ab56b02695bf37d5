use super::parser::Parser;
use crate::error::{ParseError, ParseResult};
use crate::input::Input;
use tracing::warn;

/// Run `parser` until it fails, handing every value to `sink`
///
/// Iterative, so the stack stays flat however many repetitions there are.
/// A repetition that succeeds without consuming would otherwise loop forever,
/// so it fails fast instead.
fn repeat<'code, P, F>(
    parser: &P,
    mut cursor: P::Cursor,
    mut sink: F,
) -> ParseResult<P::Cursor, ()>
where
    P: Parser<'code>,
    F: FnMut(P::Output),
{
    loop {
        match parser.parse(cursor) {
            Ok((value, next)) => {
                check_progress(cursor, next)?;
                sink(value);
                cursor = next;
            }
            Err(_) => return Ok(((), cursor)),
        }
    }
}

fn check_progress<'code, C>(before: C, after: C) -> Result<(), ParseError<C>>
where
    C: Input<'code>,
{
    if after.position() > before.position() {
        return Ok(());
    }
    warn!(
        position = before.position(),
        "repeated parser succeeded without consuming input"
    );
    Err(ParseError::new(before, "repetition made no progress"))
}

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// The repeated parser must consume input whenever it succeeds.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        let mut results = Vec::new();
        let ((), cursor) = repeat(&self.parser, cursor, |value| results.push(value))?;
        Ok((results, cursor))
    }
}

/// Parser combinator that matches one or more occurrences of the given parser
///
/// The repeated parser must consume input whenever it succeeds.
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        // First parse must succeed
        let (first, next) = self.parser.parse(cursor)?;
        check_progress(cursor, next)?;

        let mut results = vec![first];
        let ((), cursor) = repeat(&self.parser, next, |value| results.push(value))?;
        Ok((results, cursor))
    }
}

/// Parser combinator that skips zero or more occurrences of the given parser
pub struct SkipMany<P> {
    parser: P,
    at_least_one: bool,
}

impl<'code, P> Parser<'code> for SkipMany<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = ();

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        let cursor = if self.at_least_one {
            let (_, next) = self.parser.parse(cursor)?;
            check_progress(cursor, next)?;
            next
        } else {
            cursor
        };
        repeat(&self.parser, cursor, drop)
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Convenience function to create a Many1 parser
pub fn many1<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
{
    Many1::new(parser)
}

/// Skip zero or more occurrences of `parser`
pub fn skip_many<'code, P>(parser: P) -> SkipMany<P>
where
    P: Parser<'code>,
{
    SkipMany {
        parser,
        at_least_one: false,
    }
}

/// Skip one or more occurrences of `parser`
pub fn skip_many1<'code, P>(parser: P) -> SkipMany<P>
where
    P: Parser<'code>,
{
    SkipMany {
        parser,
        at_least_one: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::char;
    use crate::cursors::{ByteCursor, StrCursor};
    use crate::or::OrExt;
    use crate::pure::{Pure, pure};
    use crate::satisfy::{any, satisfy};
    use crate::string::string;

    #[test]
    fn test_many_zero_matches() {
        let cursor = StrCursor::new("xyz");
        let parser = many(char('a'));

        let (results, rest) = parser.parse(cursor).unwrap();
        assert!(results.is_empty());
        assert_eq!(rest, cursor);
    }

    #[test]
    fn test_many_multiple_matches() {
        let cursor = StrCursor::new("aaabcd");
        let parser = many(char('a'));

        let (results, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(results, vec!['a', 'a', 'a']);
        assert_eq!(cursor.rest(), "bcd");
    }

    #[test]
    fn test_many_all_matches() {
        let cursor = ByteCursor::new(b"hello");
        let parser = many(any());

        let (results, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(results, b"hello".to_vec());
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_many_empty_input() {
        let cursor = StrCursor::new("");
        let (results, _) = many(char('a')).parse(cursor).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_many_of_strings() {
        let cursor = StrCursor::new("abababa");
        let (results, cursor) = many(string("ab")).parse(cursor).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(cursor.rest(), "a");
    }

    #[test]
    fn test_many1_zero_matches_fails() {
        let cursor = StrCursor::new("xyz");
        let error = many1(char('a')).parse(cursor).unwrap_err();
        assert_eq!(error.remaining, cursor);
        assert_eq!(error.expected, vec!["'a'"]);
    }

    #[test]
    fn test_many1_one_match() {
        let cursor = StrCursor::new("abc");
        let (results, cursor) = many1(char('a')).parse(cursor).unwrap();
        assert_eq!(results, vec!['a']);
        assert_eq!(cursor.rest(), "bc");
    }

    #[test]
    fn test_skip_many() {
        let cursor = StrCursor::new("   x");
        let ((), cursor) = skip_many(char(' ')).parse(cursor).unwrap();
        assert_eq!(cursor.rest(), "x");

        let cursor = StrCursor::new("x");
        let ((), rest) = skip_many(char(' ')).parse(cursor).unwrap();
        assert_eq!(rest, cursor);
    }

    #[test]
    fn test_skip_many1() {
        let parser = skip_many1(char(' '));
        let ((), cursor) = parser.parse(StrCursor::new("  x")).unwrap();
        assert_eq!(cursor.rest(), "x");
        assert!(parser.parse(StrCursor::new("x")).is_err());
    }

    #[test]
    fn test_non_consuming_parser_fails_fast() {
        let cursor = StrCursor::new("abc");
        let stalls: Pure<StrCursor, ()> = pure(());

        let error = many(stalls).parse(cursor).unwrap_err();
        assert_eq!(error.message, "repetition made no progress");
        assert_eq!(error.position, 0);
    }

    #[test]
    fn test_non_consuming_parser_fails_fast_after_progress() {
        let cursor = StrCursor::new("aab");
        // Consumes an 'a' while there is one, then succeeds without consuming
        let parser = many(char('a').or(pure('-')));

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.position, 2);
        assert!(many1(pure::<StrCursor, _>(1)).parse(cursor).is_err());
        assert!(skip_many(pure::<StrCursor, _>(1)).parse(cursor).is_err());
    }

    #[test]
    fn test_many_long_input() {
        let text = "a".repeat(100_000);
        let cursor = StrCursor::new(&text);
        let parser = many(satisfy(|c: char| c == 'a'));

        let (results, rest) = parser.parse(cursor).unwrap();
        assert_eq!(results.len(), 100_000);
        assert!(rest.is_empty());
    }
}
