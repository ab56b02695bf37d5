use crate::error::ParseResult;
use crate::input::Input;
use crate::parser::Parser;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use tracing::trace;

/// Identity of a cursor: the source it reads from and its offset into it
type MemoKey = ((usize, usize), usize);

/// Parser combinator that caches the result of its parser per input position
///
/// Running the wrapped parser again on a cursor it has already seen, e.g. after
/// an `or` backtracked over it, returns the stored result without re-parsing.
/// Entries are keyed by source identity, so one `Memo` may be used on several
/// inputs.
///
/// The table is unbounded and holds one entry per position the parser was run
/// at. Call [`Memo::clear`] once an input is finished, before reusing the same
/// `Memo` on unrelated input.
pub struct Memo<P, C, T> {
    parser: P,
    table: Mutex<HashMap<MemoKey, ParseResult<C, T>>>,
}

impl<P, C, T> Memo<P, C, T> {
    pub fn new(parser: P) -> Self {
        Memo {
            parser,
            table: Mutex::new(HashMap::new()),
        }
    }

    /// Drop every cached result
    pub fn clear(&self) {
        self.table.lock().clear();
    }

    /// Number of cached results
    pub fn len(&self) -> usize {
        self.table.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.lock().is_empty()
    }
}

impl<P, C, T> fmt::Debug for Memo<P, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo").field("entries", &self.len()).finish()
    }
}

impl<'code, P, C, T> Parser<'code> for Memo<P, C, T>
where
    P: Parser<'code, Cursor = C, Output = T>,
    C: Input<'code>,
    T: Clone,
{
    type Cursor = C;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        let key = (cursor.source_id(), cursor.position());

        // The lock is released before parsing so recursive grammars can re-enter
        if let Some(result) = self.table.lock().get(&key) {
            trace!(position = key.1, "memo hit");
            return result.clone();
        }

        let result = self.parser.parse(cursor);
        self.table.lock().insert(key, result.clone());
        result
    }
}

/// Convenience function to create a Memo parser
pub fn memo<'code, P>(parser: P) -> Memo<P, P::Cursor, P::Output>
where
    P: Parser<'code>,
    P::Output: Clone,
{
    Memo::new(parser)
}

/// Extension trait to add .memo() method support for parsers
pub trait MemoExt<'code>: Parser<'code> + Sized {
    fn memo(self) -> Memo<Self, Self::Cursor, Self::Output>
    where
        Self::Output: Clone,
    {
        Memo::new(self)
    }
}

impl<'code, P> MemoExt<'code> for P where P: Parser<'code> {}
