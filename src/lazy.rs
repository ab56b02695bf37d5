use crate::error::ParseResult;
use crate::parser::Parser;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::boxed::{BoxedExt, BoxedParser};
    use crate::char::char;
    use crate::cursors::{ByteCursor, StrCursor};
    use crate::input::Input;
    use crate::many::many;
    use crate::map::MapExt;
    use crate::optional::OptionalExt;
    use std::cell::Cell;

    /// Depth of nested parentheses, e.g. `((()))` is 3
    fn nesting<'code>() -> BoxedParser<'code, StrCursor<'code>, usize> {
        char('(')
            .then(lazy(nesting))
            .skip(char(')'))
            .map(|depth| depth + 1)
            .or_default_to(0)
            .boxed()
    }

    #[test]
    fn test_lazy_basic() {
        let cursor = ByteCursor::new(b"aaaa");

        let (output, remaining) = lazy(|| char('a')).parse(cursor).unwrap();
        assert_eq!(output, b'a');
        assert_eq!(remaining.position(), 1);
    }

    #[test]
    fn test_lazy_with_many() {
        let cursor = ByteCursor::new(b"aaaa");

        let (output, remaining) = lazy(|| many(char('a'))).parse(cursor).unwrap();
        assert_eq!(output.len(), 4);
        assert_eq!(remaining.position(), 4);
    }

    #[test]
    fn test_lazy_deferred_construction() {
        let built = Cell::new(0);
        let parser = lazy(|| {
            built.set(built.get() + 1);
            char('x')
        });
        assert_eq!(built.get(), 0);

        let cursor = StrCursor::new("xyz");
        let (output, _) = parser.parse(cursor).unwrap();
        assert_eq!(output, 'x');
        assert_eq!(built.get(), 1);
    }

    #[test]
    fn test_lazy_recursive_grammar() {
        let (depth, rest) = nesting().parse(StrCursor::new("((()))")).unwrap();
        assert_eq!(depth, 3);
        assert!(rest.rest().is_empty());

        // Unbalanced input stops at the deepest complete group
        let (depth, rest) = nesting().parse(StrCursor::new("(()")).unwrap();
        assert_eq!(depth, 0);
        assert_eq!(rest.rest(), "(()");
    }
}
