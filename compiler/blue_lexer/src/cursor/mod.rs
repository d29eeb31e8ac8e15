//! Code-point cursor over the source text.
//!
//! Tracks four positions at once: byte offset (for slicing lexemes and
//! building spans), code-point offset, and the 1-based line and column of the
//! character under the cursor. Columns count code points, so `é` advances the
//! column by one even though it is two bytes.

#[derive(Clone, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    /// Byte offset of the current character.
    pos: usize,
    /// Code-point offset of the current character.
    char_pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor {
            source,
            pos: 0,
            char_pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Character under the cursor, `None` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Character after the current one.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Consume the current character and return it.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        self.char_pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume characters while `pred` holds.
    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.bump();
        }
    }

    /// Source text from byte offset `start` up to the cursor.
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn char_pos(&self) -> usize {
        self.char_pos
    }

    #[inline]
    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub(crate) fn column(&self) -> u32 {
        self.column
    }
}

#[cfg(test)]
mod tests;
