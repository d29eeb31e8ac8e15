//! Byte ranges into the source text.

use std::fmt;
use std::ops::Range;

/// Where a token sits in the source, as byte offsets.
///
/// `end` is exclusive. Human-facing positions (line, column) are carried on
/// [`Token`](crate::Token) instead; a span exists so the exact source text
/// can be sliced back out.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Placeholder for tokens made outside the lexer.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Empty span at `offset`, used for end of input.
    #[inline]
    pub const fn point(offset: u32) -> Self {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Offsets beyond `u32::MAX` are clamped.
    pub fn from_range(range: Range<usize>) -> Self {
        let clamp = |offset: usize| u32::try_from(offset).unwrap_or(u32::MAX);
        Span {
            start: clamp(range.start),
            end: clamp(range.end),
        }
    }

    #[inline]
    pub fn to_range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests;
