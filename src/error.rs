use crate::atomic::Atomic;
use crate::input::Input;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Outcome of a single parse step
///
/// `Ok((value, remaining))` is a successful parse that left `remaining` unconsumed.
/// `Err` carries the position and diagnostics of the failure.
pub type ParseResult<C, T> = Result<(T, C), ParseError<C>>;

/// Human-readable position of a cursor in its source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// 1-based line number
    pub line: usize,
    /// 0-based token offset within the line
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A failed parse
///
/// `expected` accumulates labels of what was being attempted. It is purely
/// diagnostic: no combinator inspects it to make decisions.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} at offset {position}{}", render_expected(.expected))]
pub struct ParseError<C> {
    /// Input at the point of failure
    pub remaining: C,
    /// Absolute offset of `remaining` in its source
    pub position: usize,
    /// Labels of what was being attempted, innermost first
    pub expected: Vec<Cow<'static, str>>,
    /// Description of the immediate failure
    pub message: Cow<'static, str>,
}

fn render_expected(expected: &[Cow<'static, str>]) -> String {
    if expected.is_empty() {
        String::new()
    } else {
        format!(" (expected {})", expected.join(" or "))
    }
}

impl<C> ParseError<C> {
    pub fn new<'code>(remaining: C, message: impl Into<Cow<'static, str>>) -> Self
    where
        C: Input<'code>,
    {
        ParseError {
            position: remaining.position(),
            remaining,
            expected: Vec::new(),
            message: message.into(),
        }
    }

    /// Failure caused by running out of input
    pub fn end_of_input<'code>(remaining: C) -> Self
    where
        C: Input<'code>,
    {
        Self::new(remaining, "unexpected end of input")
    }

    /// Failure caused by a token that did not fit
    pub fn unexpected<'code>(remaining: C, token: C::Token) -> Self
    where
        C: Input<'code>,
    {
        Self::new(remaining, format!("unexpected {:?}", token.to_char()))
    }

    /// Add an expectation label
    pub fn expecting(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.expected.push(label.into());
        self
    }

    /// Move the failure to another cursor, keeping the diagnostics
    pub fn at<'code>(self, remaining: C) -> Self
    where
        C: Input<'code>,
    {
        ParseError {
            position: remaining.position(),
            remaining,
            ..self
        }
    }

    /// Combine the failures of two alternatives tried at the same input
    ///
    /// Labels of `self` come first; the message of `later` wins since it is the
    /// last thing that was attempted.
    pub fn merge<'code>(mut self, later: Self, input: C) -> Self
    where
        C: Input<'code>,
    {
        self.expected.extend(later.expected);
        ParseError {
            position: input.position(),
            remaining: input,
            expected: self.expected,
            message: later.message,
        }
    }

    /// Line and column of the failure
    pub fn location<'code>(&self) -> Location
    where
        C: Input<'code>,
    {
        self.remaining.location()
    }
}
