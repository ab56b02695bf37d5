use crate::atomic::Atomic;
use crate::error::{ParseError, ParseResult};
use crate::input::Input;
use crate::parser::Parser;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Walk `expected` against the input, comparing tokens with `same`
///
/// Returns the cursor after the match, or the failure describing the first
/// mismatch. The failure is always reported at `cursor`: a partial match
/// consumes nothing.
fn match_prefix<'code, C, F>(cursor: C, expected: &str, same: F) -> Result<C, ParseError<C>>
where
    C: Input<'code>,
    F: Fn(char, char) -> bool,
{
    let mut current = cursor;
    for expected_char in expected.chars() {
        match current.uncons() {
            Some((token, rest)) if same(token.to_char(), expected_char) => current = rest,
            Some((token, _)) => {
                return Err(ParseError::new(
                    cursor,
                    format!(
                        "expected {:?}, found {:?} while matching {:?}",
                        expected_char,
                        token.to_char(),
                        expected
                    ),
                ));
            }
            None => {
                return Err(ParseError::new(
                    cursor,
                    format!(
                        "expected {:?}, but reached end of input while matching {:?}",
                        expected_char, expected
                    ),
                ));
            }
        }
    }
    Ok(current)
}

/// Parser that matches an exact string token by token
///
/// Over byte input each byte is read as the Latin-1 code point of the same
/// value, so a non-ASCII literal such as `"é"` matches the byte `0xE9`, not its
/// UTF-8 encoding.
pub struct StringParser<C> {
    expected: Cow<'static, str>,
    _cursor: PhantomData<fn() -> C>,
}

impl<'code, C> Parser<'code> for StringParser<C>
where
    C: Input<'code>,
{
    type Cursor = C;
    type Output = Cow<'static, str>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        let rest = match_prefix(cursor, &self.expected, |found, wanted| found == wanted)
            .map_err(|error| error.expecting(format!("{:?}", self.expected)))?;
        Ok((self.expected.clone(), rest))
    }
}

/// Convenience function to create a StringParser
pub fn string<'code, C>(expected: impl Into<Cow<'static, str>>) -> StringParser<C>
where
    C: Input<'code>,
{
    StringParser {
        expected: expected.into(),
        _cursor: PhantomData,
    }
}

/// Parser that matches a string ignoring the case of ASCII letters
///
/// Only `a`-`z` and `A`-`Z` are folded; every other token must match exactly.
/// Returns the input as it was actually written.
pub struct AsciiCi<C> {
    expected: Cow<'static, str>,
    _cursor: PhantomData<fn() -> C>,
}

impl<'code, C> Parser<'code> for AsciiCi<C>
where
    C: Input<'code>,
{
    type Cursor = C;
    type Output = C::Slice;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        let rest = match_prefix(cursor, &self.expected, |found, wanted| {
            found.to_ascii_uppercase() == wanted.to_ascii_uppercase()
        })
        .map_err(|error| error.expecting(format!("{:?} (any case)", self.expected)))?;
        Ok((cursor.slice_to(rest), rest))
    }
}

/// Convenience function to create an AsciiCi parser
pub fn ascii_ci<'code, C>(expected: impl Into<Cow<'static, str>>) -> AsciiCi<C>
where
    C: Input<'code>,
{
    AsciiCi {
        expected: expected.into(),
        _cursor: PhantomData,
    }
}
