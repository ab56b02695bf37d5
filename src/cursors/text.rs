use crate::error::Location;
use crate::input::Input;
use std::iter;

/// Cursor over UTF-8 text whose tokens are Unicode scalar values
///
/// `uncons` is constant time. `count` and `split_at` walk the text and are linear
/// in the number of characters involved.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StrCursor<'code> {
    text: &'code str,
    /// Byte offset into `text`, always on a character boundary
    position: usize,
}

impl<'code> StrCursor<'code> {
    pub fn new(text: &'code str) -> Self {
        StrCursor { text, position: 0 }
    }

    /// The text not yet consumed
    pub fn rest(&self) -> &'code str {
        &self.text[self.position..]
    }

    /// Get the source text without consuming the cursor
    pub fn source(&self) -> &'code str {
        self.text
    }

    fn advanced(self, bytes: usize) -> Self {
        StrCursor {
            text: self.text,
            position: self.position + bytes,
        }
    }
}

impl<'code> Input<'code> for StrCursor<'code> {
    type Token = char;
    type Slice = &'code str;

    fn uncons(self) -> Option<(Self::Token, Self)> {
        let ch = self.rest().chars().next()?;
        Some((ch, self.advanced(ch.len_utf8())))
    }

    fn split_at(self, n: usize) -> Option<(Self::Slice, Self)> {
        let rest = self.rest();
        let end = rest
            .char_indices()
            .map(|(i, _)| i)
            .chain(iter::once(rest.len()))
            .nth(n)?;
        Some((&rest[..end], self.advanced(end)))
    }

    fn count(&self) -> usize {
        self.rest().chars().count()
    }

    fn is_empty(&self) -> bool {
        self.position >= self.text.len()
    }

    fn position(&self) -> usize {
        self.position
    }

    fn source_id(&self) -> (usize, usize) {
        (self.text.as_ptr() as usize, self.text.len())
    }

    fn slice_to(self, rest: Self) -> Self::Slice {
        let end = rest.position.max(self.position);
        &self.text[self.position..end]
    }

    fn location(&self) -> Location {
        let consumed = &self.text[..self.position];
        let line_start = consumed.rfind('\n').map_or(0, |i| i + 1);
        Location {
            line: 1 + consumed.matches('\n').count(),
            column: consumed[line_start..].chars().count(),
        }
    }
}
