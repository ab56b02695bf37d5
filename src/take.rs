use crate::error::{ParseError, ParseResult};
use crate::input::Input;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that consumes exactly `count` tokens and returns them
///
/// A negative count cannot be expressed: `count` is a `usize`.
pub struct Take<C> {
    count: usize,
    _cursor: PhantomData<fn() -> C>,
}

impl<'code, C> Parser<'code> for Take<C>
where
    C: Input<'code>,
{
    type Cursor = C;
    type Output = C::Slice;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        cursor.split_at(self.count).ok_or_else(|| {
            ParseError::new(
                cursor,
                format!("expected {} more tokens", self.count),
            )
        })
    }
}

/// Convenience function to create a Take parser
pub fn take<'code, C>(count: usize) -> Take<C>
where
    C: Input<'code>,
{
    Take {
        count,
        _cursor: PhantomData,
    }
}

/// Advance past every leading token that matches `predicate`
fn scan<'code, C, F>(mut cursor: C, predicate: &F) -> C
where
    C: Input<'code>,
    F: Fn(C::Token) -> bool,
{
    while let Some((token, rest)) = cursor.uncons() {
        if !predicate(token) {
            break;
        }
        cursor = rest;
    }
    cursor
}

/// Parser that consumes tokens while a predicate holds and returns them
///
/// [`take_while`] always succeeds, possibly with an empty slice.
pub struct TakeWhile<C, F> {
    predicate: F,
    at_least_one: bool,
    _cursor: PhantomData<fn() -> C>,
}

impl<'code, C, F> Parser<'code> for TakeWhile<C, F>
where
    C: Input<'code>,
    F: Fn(C::Token) -> bool,
{
    type Cursor = C;
    type Output = C::Slice;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        let rest = scan(cursor, &self.predicate);
        if self.at_least_one && rest.position() == cursor.position() {
            return Err(match cursor.uncons() {
                Some((token, _)) => ParseError::unexpected(cursor, token),
                None => ParseError::end_of_input(cursor),
            });
        }
        Ok((cursor.slice_to(rest), rest))
    }
}

/// Convenience function to create a TakeWhile parser
pub fn take_while<'code, C, F>(predicate: F) -> TakeWhile<C, F>
where
    C: Input<'code>,
    F: Fn(C::Token) -> bool,
{
    TakeWhile {
        predicate,
        at_least_one: false,
        _cursor: PhantomData,
    }
}

/// Like [`take_while`] but fails unless at least one token matches
pub fn take_while1<'code, C, F>(predicate: F) -> TakeWhile<C, F>
where
    C: Input<'code>,
    F: Fn(C::Token) -> bool,
{
    TakeWhile {
        predicate,
        at_least_one: true,
        _cursor: PhantomData,
    }
}

/// Parser that skips tokens while a predicate holds
pub struct SkipWhile<C, F> {
    predicate: F,
    _cursor: PhantomData<fn() -> C>,
}

impl<'code, C, F> Parser<'code> for SkipWhile<C, F>
where
    C: Input<'code>,
    F: Fn(C::Token) -> bool,
{
    type Cursor = C;
    type Output = ();

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        Ok(((), scan(cursor, &self.predicate)))
    }
}

/// Convenience function to create a SkipWhile parser
pub fn skip_while<'code, C, F>(predicate: F) -> SkipWhile<C, F>
where
    C: Input<'code>,
    F: Fn(C::Token) -> bool,
{
    SkipWhile {
        predicate,
        _cursor: PhantomData,
    }
}
