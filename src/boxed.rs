use crate::error::ParseResult;
use crate::input::Input;
use crate::parser::Parser;
use std::sync::Arc;

/// Type-erased parser that can be cloned and shared across threads
///
/// Useful for naming the type of a parser, e.g. as the return type of a
/// recursive grammar rule, or for storing parsers of different shapes in one
/// collection.
pub struct BoxedParser<'code, C, T> {
    inner: Arc<dyn Parser<'code, Cursor = C, Output = T> + Send + Sync + 'code>,
}

impl<'code, C, T> BoxedParser<'code, C, T>
where
    C: Input<'code>,
{
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'code, Cursor = C, Output = T> + Send + Sync + 'code,
    {
        BoxedParser {
            inner: Arc::new(parser),
        }
    }
}

impl<C, T> Clone for BoxedParser<'_, C, T> {
    fn clone(&self) -> Self {
        BoxedParser {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<'code, C, T> Parser<'code> for BoxedParser<'code, C, T>
where
    C: Input<'code>,
{
    type Cursor = C;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        self.inner.parse(cursor)
    }
}

/// Convenience function to create a BoxedParser
pub fn boxed<'code, P>(parser: P) -> BoxedParser<'code, P::Cursor, P::Output>
where
    P: Parser<'code> + Send + Sync + 'code,
{
    BoxedParser::new(parser)
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed(self) -> BoxedParser<'code, Self::Cursor, Self::Output>
    where
        Self: Send + Sync + 'code,
    {
        BoxedParser::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::{alphabet, digit};
    use crate::char::char;
    use crate::cursors::StrCursor;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use std::thread;

    #[test]
    fn test_boxed_parsers_in_collection() {
        let parsers: Vec<BoxedParser<StrCursor, char>> =
            vec![digit().boxed(), alphabet().boxed(), boxed(char('_'))];

        let cursor = StrCursor::new("_");
        let matched = parsers
            .iter()
            .position(|parser| parser.parse(cursor).is_ok());
        assert_eq!(matched, Some(2));
    }

    #[test]
    fn test_boxed_clone_shares_parser() {
        let parser: BoxedParser<StrCursor, u32> = digit()
            .map(|d: char| d.to_digit(10).unwrap_or_default())
            .boxed();
        let copy = parser.clone();

        let (a, _) = parser.parse(StrCursor::new("4")).unwrap();
        let (b, _) = copy.parse(StrCursor::new("4")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_boxed_composes_with_combinators() {
        let parser = char('x').boxed().or(char('y').boxed());
        assert!(parser.parse(StrCursor::new("y")).is_ok());
    }

    #[test]
    fn test_boxed_parser_across_threads() {
        let parser: BoxedParser<'static, StrCursor<'static>, char> = digit().boxed();

        let handles: Vec<_> = ["1", "2", "3"]
            .into_iter()
            .map(|input| {
                let parser = parser.clone();
                thread::spawn(move || parser.parse(StrCursor::new(input)).map(|(d, _)| d))
            })
            .collect();

        let digits: Vec<char> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect();
        assert_eq!(digits, vec!['1', '2', '3']);
    }
}
