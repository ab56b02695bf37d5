use super::digit;
use crate::and::AndExt;
use crate::apply::ApplyExt;
use crate::atomic::Atomic;
use crate::bind::BindExt;
use crate::char::{char, one_of};
use crate::error::{ParseError, ParseResult};
use crate::input::Input;
use crate::many::many1;
use crate::map::MapExt;
use crate::optional::option;
use crate::parser::Parser;
use crate::pure::pure;

/// Reports any failure of the inner parser at the cursor it started from
struct Lexeme<P> {
    parser: P,
    name: &'static str,
}

impl<'code, P> Parser<'code> for Lexeme<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        self.parser
            .parse(cursor)
            .map_err(|error| error.at(cursor).expecting(self.name))
    }
}

/// Optional leading `+` or `-`, absent meaning positive
fn sign<'code, C, T>(negative: T, positive: T) -> impl Parser<'code, Cursor = C, Output = T>
where
    C: Input<'code>,
    T: Copy,
{
    let sign = one_of::<C>("+-").map(move |token: C::Token| {
        if token.to_char() == '-' {
            negative
        } else {
            positive
        }
    });
    option(positive, sign)
}

fn digit_value<T: Atomic>(digit: T) -> u32 {
    digit.to_char().to_digit(10).unwrap_or_default()
}

/// Parser that matches an optionally signed decimal integer
///
/// Fails without consuming input if the digits do not fit in an `i64`.
pub fn integer<'code, C>() -> impl Parser<'code, Cursor = C, Output = i64>
where
    C: Input<'code>,
{
    Integer {
        parts: Lexeme {
            parser: sign::<C, i64>(-1, 1).and(many1(digit::<C>())),
            name: "integer",
        },
    }
}

struct Integer<P> {
    parts: P,
}

impl<'code, P, T> Parser<'code> for Integer<P>
where
    P: Parser<'code, Output = (i64, Vec<T>)>,
    T: Atomic,
{
    type Cursor = P::Cursor;
    type Output = i64;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        let ((sign, digits), rest) = self.parts.parse(cursor)?;

        // Accumulate with the sign applied so i64::MIN is representable
        digits
            .iter()
            .try_fold(0i64, |value, digit| {
                value
                    .checked_mul(10)?
                    .checked_add(sign * i64::from(digit_value(*digit)))
            })
            .map(|value| (value, rest))
            .ok_or_else(|| {
                ParseError::new(cursor, "integer does not fit in 64 bits").expecting("integer")
            })
    }
}

fn identity(value: f64) -> f64 {
    value
}

fn negate(value: f64) -> f64 {
    -value
}

/// One or more digits kept as text
fn digits<'code, C>() -> impl Parser<'code, Cursor = C, Output = String>
where
    C: Input<'code>,
{
    many1(digit::<C>()).map(|digits| <C::Token as Atomic>::slice_to_string(&digits))
}

/// A `marker` that, once matched, must be followed by `body`
///
/// Without the marker the parser succeeds with `default` and consumes nothing.
/// With it, a failing `body` fails the whole parser.
struct Marked<M, P, T> {
    marker: M,
    body: P,
    default: T,
}

impl<'code, M, P, T> Parser<'code> for Marked<M, P, T>
where
    M: Parser<'code>,
    P: Parser<'code, Cursor = M::Cursor, Output = T>,
    T: Clone,
{
    type Cursor = M::Cursor;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        match self.marker.parse(cursor) {
            Ok((_, rest)) => self.body.parse(rest),
            Err(_) => Ok((self.default.clone(), cursor)),
        }
    }
}

/// `.` and one or more digits, or `0` when absent
fn fraction<'code, C>() -> impl Parser<'code, Cursor = C, Output = String>
where
    C: Input<'code>,
{
    Marked {
        marker: char::<C>('.'),
        body: digits::<C>(),
        default: String::from("0"),
    }
}

/// `e` or `E` followed by a signed power of ten, or `0` when absent
fn exponent<'code, C>() -> impl Parser<'code, Cursor = C, Output = i32>
where
    C: Input<'code>,
{
    let power = sign::<C, i32>(-1, 1).bind(|sign| {
        many1(digit::<C>()).map(move |digits| {
            let magnitude = digits.iter().fold(0i32, |value, digit| {
                value
                    .saturating_mul(10)
                    .saturating_add(digit_value(*digit) as i32)
            });
            sign * magnitude
        })
    });

    Marked {
        marker: one_of::<C>("eE"),
        body: power,
        default: 0,
    }
}

/// Rounds `<whole>.<fraction>e<exponent>` once, overflowing to `inf` and
/// underflowing through subnormals to `0.0`
fn decimal(whole: &str, fraction: &str, exponent: i32) -> f64 {
    format!("{}.{}e{}", whole, fraction, exponent)
        .parse::<f64>()
        .unwrap_or_default()
}

/// Parser that matches a decimal floating point number
///
/// Accepts an optional sign, one or more digits, an optional fraction and an
/// optional exponent, e.g. `-12.5e-1`. A `.` or `e` must be followed by digits.
/// Failures are reported at the start of the number.
pub fn number<'code, C>() -> impl Parser<'code, Cursor = C, Output = f64>
where
    C: Input<'code>,
{
    let parts = pure::<C, _>(|sign: fn(f64) -> f64| {
        move |whole: String| {
            move |fraction: String| {
                move |exponent: i32| sign(decimal(&whole, &fraction, exponent))
            }
        }
    })
    .apply(sign::<C, fn(f64) -> f64>(negate, identity))
    .apply(digits::<C>())
    .apply(fraction::<C>())
    .apply(exponent::<C>());

    Lexeme {
        parser: parts,
        name: "number",
    }
}
