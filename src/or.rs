use super::parser::Parser;
use crate::error::ParseResult;
use crate::input::Input;
use tracing::trace;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Choice is ordered and fully backtracking: the second parser always starts from
/// the original input, whatever the first one consumed before failing.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor, Output = P1::Output>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        let first = match self.parser1.parse(cursor) {
            Ok(result) => return Ok(result),
            Err(error) => error,
        };
        trace!(
            position = cursor.position(),
            failed_at = first.position,
            "backtracking to second alternative"
        );
        self.parser2
            .parse(cursor)
            .map_err(|second| first.merge(second, cursor))
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::char;
    use crate::cursors::StrCursor;
    use crate::string::string;

    #[test]
    fn test_or_first_succeeds() {
        let cursor = StrCursor::new("abc");
        let parser = or(char('a'), char('b'));

        let (ch, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.rest(), "bc");
    }

    #[test]
    fn test_or_second_succeeds() {
        let cursor = StrCursor::new("bcd");
        let parser = or(char('a'), char('b'));

        let (ch, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(ch, 'b');
        assert_eq!(cursor.rest(), "cd");
    }

    #[test]
    fn test_or_both_fail_accumulates_labels() {
        let cursor = StrCursor::new("xyz");
        let parser = char('a').or(char('b')).or(char('c'));

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.remaining, cursor);
        assert_eq!(error.expected, vec!["'a'", "'b'", "'c'"]);
    }

    #[test]
    fn test_or_rewinds_partial_consumption() {
        // "abd" matches the first two tokens of "abc" before failing
        let cursor = StrCursor::new("abd");
        let parser = string("abc").or(string("ab"));

        let (matched, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(matched, "ab");
        assert_eq!(cursor.rest(), "d");
    }

    #[test]
    fn test_or_failure_reported_at_original_input() {
        let cursor = StrCursor::new("abx");
        let parser = string("abc").or(string("abd"));

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.position, 0);
        assert_eq!(error.expected, vec!["\"abc\"", "\"abd\""]);
    }
}
