//! Byte cursor with line/column bookkeeping.
//!
//! Columns count bytes. `\n`, `\r\n` and a lone `\r` each end a line.

/// Cursor over the source bytes.
pub(crate) struct Cursor<'src> {
    src: &'src str,
    pos: usize,
    line: u32,
    col: u32,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(src: &'src str) -> Self {
        Cursor {
            src,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Current byte, or `0` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.peek_at(0)
    }

    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.peek_at(1)
    }

    #[inline]
    pub(crate) fn peek_at(&self, n: usize) -> u8 {
        self.src.as_bytes().get(self.pos + n).copied().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub(crate) fn col(&self) -> u32 {
        self.col
    }

    /// Remaining input.
    #[inline]
    pub(crate) fn rest(&self) -> &'src [u8] {
        &self.src.as_bytes()[self.pos..]
    }

    /// Source text between two byte offsets.
    ///
    /// Both offsets are token boundaries the scanner produced, which are
    /// always on ASCII bytes and therefore valid char boundaries.
    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'src str {
        self.src.get(start..end).unwrap_or_default()
    }

    /// The (possibly multi-byte) character at the cursor.
    pub(crate) fn current_char(&self) -> Option<char> {
        self.src.get(self.pos..).and_then(|s| s.chars().next())
    }

    /// Advance one byte, updating the line and column.
    pub(crate) fn advance(&mut self) {
        match self.current() {
            b'\n' => self.newline(),
            b'\r' if self.peek() != b'\n' => self.newline(),
            _ => self.col += 1,
        }
        self.pos = (self.pos + 1).min(self.src.len());
    }

    pub(crate) fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    #[inline]
    fn newline(&mut self) {
        self.line += 1;
        self.col = 1;
    }

    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Skip to just past the next `*/`, or to end of input when unterminated.
    pub(crate) fn skip_block_comment_body(&mut self) {
        let len = match memchr::memmem::find(self.rest(), b"*/") {
            Some(offset) => offset + 2,
            None => self.rest().len(),
        };
        self.advance_n(len);
    }

    /// Skip to the next `"` without consuming it, or to end of input.
    pub(crate) fn skip_to_quote(&mut self) {
        let len = memchr::memchr(b'"', self.rest()).unwrap_or(self.rest().len());
        self.advance_n(len);
    }
}
