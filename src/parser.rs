use crate::error::ParseResult;
use crate::input::Input;
use tracing::{trace, trace_span};

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Cursor: Input<'code>;
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and updated cursor on success,
    /// or Err if the parse fails. Failures should not consume input.
    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Run a parser against an input
///
/// Leftover input is not an error; compose with
/// [`end_of_input`](crate::not::end_of_input) to require full consumption.
pub fn run<'code, P>(parser: &P, input: P::Cursor) -> ParseResult<P::Cursor, P::Output>
where
    P: Parser<'code> + ?Sized,
{
    let start = input.position();
    let _span = trace_span!("run", start).entered();
    let result = parser.parse(input);
    match &result {
        Ok((_, remaining)) => trace!(end = remaining.position(), "parse succeeded"),
        Err(error) => trace!(position = error.position, %error, "parse failed"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::char;
    use crate::cursors::StrCursor;

    #[test]
    fn test_run_leaves_remainder() {
        let parser = char('a');
        let (value, rest) = run(&parser, StrCursor::new("abc")).unwrap();
        assert_eq!(value, 'a');
        assert_eq!(rest.rest(), "bc");
    }

    #[test]
    fn test_parser_by_reference() {
        let parser = char('a');
        let by_ref = &parser;

        // The same parser value can be invoked any number of times
        assert!(by_ref.parse(StrCursor::new("a")).is_ok());
        assert!(by_ref.parse(StrCursor::new("b")).is_err());
        assert!(run(by_ref, StrCursor::new("a")).is_ok());
    }
}
