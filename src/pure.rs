use crate::error::ParseResult;
use crate::input::Input;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that always succeeds with a fixed value without consuming input
pub struct Pure<C, T> {
    value: T,
    _cursor: PhantomData<fn() -> C>,
}

impl<C, T> Pure<C, T> {
    pub fn new(value: T) -> Self {
        Pure {
            value,
            _cursor: PhantomData,
        }
    }
}

impl<'code, C, T> Parser<'code> for Pure<C, T>
where
    C: Input<'code>,
    T: Clone,
{
    type Cursor = C;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a Pure parser
pub fn pure<C, T>(value: T) -> Pure<C, T> {
    Pure::new(value)
}

/// Parser that always succeeds with `T::default()` without consuming input
pub fn default<C, T>() -> Pure<C, T>
where
    T: Default,
{
    Pure::new(T::default())
}
