use super::parser::Parser;
use crate::error::ParseResult;

/// Parser combinator that makes a parser optional
///
/// Returns `Some` with the parser's value if it succeeded, `None` without
/// consuming anything if it failed.
pub struct Optional<P> {
    parser: P,
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Parser combinator that falls back to a default value when its parser fails
pub struct OptionOr<P, T> {
    parser: P,
    default: T,
}

impl<'code, P, T> Parser<'code> for OptionOr<P, T>
where
    P: Parser<'code, Output = T>,
    T: Clone,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        match self.parser.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => Ok((self.default.clone(), cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional { parser }
}

/// Run `parser`, or succeed with `default` without consuming if it fails
pub fn option<'code, P>(default: P::Output, parser: P) -> OptionOr<P, P::Output>
where
    P: Parser<'code>,
{
    OptionOr { parser, default }
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional { parser: self }
    }

    fn or_default_to(self, default: Self::Output) -> OptionOr<Self, Self::Output> {
        OptionOr {
            parser: self,
            default,
        }
    }
}

impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::char::char;
    use crate::cursors::StrCursor;
    use crate::string::string;

    #[test]
    fn test_optional_present() {
        let cursor = StrCursor::new("-5");
        let (sign, cursor) = optional(char('-')).parse(cursor).unwrap();
        assert_eq!(sign, Some('-'));
        assert_eq!(cursor.rest(), "5");
    }

    #[test]
    fn test_optional_absent_does_not_consume() {
        let cursor = StrCursor::new("5");
        let (sign, rest) = char('-').optional().parse(cursor).unwrap();
        assert_eq!(sign, None);
        assert_eq!(rest, cursor);
    }

    #[test]
    fn test_optional_rewinds_partial_match() {
        let cursor = StrCursor::new("ab!");
        let parser = string("abc").optional().and(char('a'));

        let ((matched, a), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(matched, None);
        assert_eq!(a, 'a');
        assert_eq!(cursor.rest(), "b!");
    }

    #[test]
    fn test_option_default() {
        let parser = option('+', char('-'));

        let (sign, _) = parser.parse(StrCursor::new("-1")).unwrap();
        assert_eq!(sign, '-');

        let (sign, cursor) = parser.parse(StrCursor::new("1")).unwrap();
        assert_eq!(sign, '+');
        assert_eq!(cursor.rest(), "1");
    }

    #[test]
    fn test_or_default_to() {
        let (value, _) = string("x")
            .or_default_to("none".into())
            .parse(StrCursor::new("y"))
            .unwrap();
        assert_eq!(value, "none");
    }
}
