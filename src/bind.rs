use super::parser::Parser;
use crate::error::ParseResult;

/// Monadic sequencing (`>>=`)
///
/// Runs the first parser and feeds its value to `next` to choose the parser that
/// runs on the remainder. Unlike [`Apply`](crate::apply::Apply) the second parser
/// may depend on what the first one produced.
pub struct Bind<P, F> {
    parser: P,
    next: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, next: F) -> Self {
        Bind { parser, next }
    }
}

impl<'code, P, F, Q> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code, Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = Q::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.next)(value).parse(cursor)
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, Q>(parser: P, next: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code, Cursor = P::Cursor>,
{
    Bind::new(parser, next)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn bind<F, Q>(self, next: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code, Cursor = Self::Cursor>,
    {
        Bind::new(self, next)
    }
}

impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}
