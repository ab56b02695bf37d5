use super::parser::Parser;
use crate::error::ParseResult;

/// Applicative sequencing (`<*>`)
///
/// Runs the function parser, then the value parser on the remainder, and applies
/// the parsed function to the parsed value. Input is threaded strictly left to right.
pub struct Apply<PF, PV> {
    function: PF,
    value: PV,
}

impl<PF, PV> Apply<PF, PV> {
    pub fn new(function: PF, value: PV) -> Self {
        Apply { function, value }
    }
}

impl<'code, PF, PV, F, U> Parser<'code> for Apply<PF, PV>
where
    PF: Parser<'code, Output = F>,
    PV: Parser<'code, Cursor = PF::Cursor>,
    F: FnOnce(PV::Output) -> U,
{
    type Cursor = PF::Cursor;
    type Output = U;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        let (function, cursor) = self.function.parse(cursor)?;
        let (value, cursor) = self.value.parse(cursor)?;
        Ok((function(value), cursor))
    }
}

/// Convenience function to create an Apply parser
pub fn apply<'code, PF, PV, F, U>(function: PF, value: PV) -> Apply<PF, PV>
where
    PF: Parser<'code, Output = F>,
    PV: Parser<'code, Cursor = PF::Cursor>,
    F: FnOnce(PV::Output) -> U,
{
    Apply::new(function, value)
}

/// Extension trait to add .apply() to parsers producing functions
pub trait ApplyExt<'code>: Parser<'code> + Sized {
    fn apply<PV, U>(self, value: PV) -> Apply<Self, PV>
    where
        PV: Parser<'code, Cursor = Self::Cursor>,
        Self::Output: FnOnce(PV::Output) -> U,
    {
        Apply::new(self, value)
    }
}

impl<'code, P> ApplyExt<'code> for P where P: Parser<'code> {}
