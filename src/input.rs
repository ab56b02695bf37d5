use crate::atomic::Atomic;
use crate::error::Location;
use std::fmt;

/// Generic input trait for parser combinators
///
/// An input is an immutable cursor into a sequence of tokens. Consuming never
/// mutates: every operation that advances returns a new cursor, so backtracking
/// is nothing more than keeping a copy of an earlier cursor around.
pub trait Input<'code>: Copy + fmt::Debug {
    /// The type of tokens this input yields
    type Token: Atomic;

    /// A contiguous run of tokens borrowed from the source
    type Slice: Copy + fmt::Debug + PartialEq;

    /// Split into the first token and the remainder, or `None` when empty
    fn uncons(self) -> Option<(Self::Token, Self)>;

    /// Split off the first `n` tokens
    ///
    /// Returns `None` if fewer than `n` tokens remain.
    fn split_at(self, n: usize) -> Option<(Self::Slice, Self)>;

    /// Number of tokens remaining
    fn count(&self) -> usize;

    /// Check if no tokens remain
    fn is_empty(&self) -> bool {
        self.uncons().is_none()
    }

    /// Absolute offset of the cursor within its source
    ///
    /// Offsets are only comparable between cursors over the same source.
    fn position(&self) -> usize;

    /// Identity of the underlying source buffer
    fn source_id(&self) -> (usize, usize);

    /// The tokens between this cursor and a later cursor `rest` over the same source
    fn slice_to(self, rest: Self) -> Self::Slice;

    /// Line and column of the cursor, for diagnostics
    fn location(&self) -> Location;
}
