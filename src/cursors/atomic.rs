use crate::atomic::Atomic;
use crate::error::Location;
use crate::input::Input;

/// Cursor over a slice of atomic tokens
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AtomicCursor<'code, T: Atomic> {
    Valid { data: &'code [T], position: usize },
    EndOfFile { data: &'code [T] },
}

impl<'code, T: Atomic> AtomicCursor<'code, T> {
    pub fn new(data: &'code [T]) -> Self {
        Self::at(data, 0)
    }

    fn at(data: &'code [T], position: usize) -> Self {
        if position >= data.len() {
            AtomicCursor::EndOfFile { data }
        } else {
            AtomicCursor::Valid { data, position }
        }
    }

    /// Get the source data without consuming the cursor
    pub fn source(&self) -> &'code [T] {
        match self {
            AtomicCursor::Valid { data, .. } => data,
            AtomicCursor::EndOfFile { data } => data,
        }
    }

    /// The tokens not yet consumed
    pub fn rest(&self) -> &'code [T] {
        &self.source()[self.position()..]
    }
}

impl<'code, T: Atomic> Input<'code> for AtomicCursor<'code, T> {
    type Token = T;
    type Slice = &'code [T];

    fn uncons(self) -> Option<(Self::Token, Self)> {
        match self {
            AtomicCursor::Valid { data, position } => {
                Some((data[position], Self::at(data, position + 1)))
            }
            AtomicCursor::EndOfFile { .. } => None,
        }
    }

    fn split_at(self, n: usize) -> Option<(Self::Slice, Self)> {
        let data = self.source();
        let start = self.position();
        let end = start.checked_add(n).filter(|&end| end <= data.len())?;
        Some((&data[start..end], Self::at(data, end)))
    }

    fn count(&self) -> usize {
        self.source().len() - self.position()
    }

    fn is_empty(&self) -> bool {
        matches!(self, AtomicCursor::EndOfFile { .. })
    }

    fn position(&self) -> usize {
        match self {
            AtomicCursor::Valid { position, .. } => *position,
            AtomicCursor::EndOfFile { data } => data.len(),
        }
    }

    fn source_id(&self) -> (usize, usize) {
        let data = self.source();
        (data.as_ptr() as usize, data.len())
    }

    fn slice_to(self, rest: Self) -> Self::Slice {
        let start = self.position();
        let end = rest.position().max(start);
        &self.source()[start..end]
    }

    fn location(&self) -> Location {
        let consumed = &self.source()[..self.position()];
        let line_start = consumed
            .iter()
            .rposition(|&element| element == T::NEWLINE)
            .map_or(0, |i| i + 1);
        let line = 1 + consumed.iter().filter(|&&e| e == T::NEWLINE).count();
        Location {
            line,
            column: consumed.len() - line_start,
        }
    }
}
