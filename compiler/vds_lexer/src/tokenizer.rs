//! Two-token lookahead tokenizer.
//!
//! Tokens are scanned lazily. The tokenizer holds exactly the current
//! token and the one after it; [`Tokenizer::consume`] shifts the next token
//! into place and scans a new one behind it.

use vds_ir::{Keyword, Operator, SourcePos, Token, TokenClass, TokenKind};

use crate::cursor::Cursor;
use crate::keywords;
use crate::number::scan_number;
use crate::operators::{match_operator, PUNCTUATORS};

pub struct Tokenizer<'src> {
    cursor: Cursor<'src>,
    current: Token<'src>,
    next: Token<'src>,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut cursor = Cursor::new(source);
        let current = scan_token(&mut cursor);
        let next = scan_token(&mut cursor);
        Tokenizer {
            cursor,
            current,
            next,
        }
    }

    /// The current token, without consuming it.
    #[inline]
    pub fn current_token(&self) -> &Token<'src> {
        &self.current
    }

    /// Class of the token after the current one.
    #[inline]
    pub fn peek_next_class(&self) -> TokenClass {
        self.next.class()
    }

    /// Advance to the next token. At end of input this stays on `Eos`.
    pub fn consume(&mut self) {
        let scanned = scan_token(&mut self.cursor);
        self.current = std::mem::replace(&mut self.next, scanned);
    }

    #[inline]
    pub fn is_eos(&self) -> bool {
        self.current.kind == TokenKind::Eos
    }

    #[inline]
    pub fn is_punctuator(&self, c: char) -> bool {
        self.current.kind == TokenKind::Punctuator(c)
    }

    /// Consume the current token if it is punctuator `c`.
    pub fn skip_if_punctuator(&mut self, c: char) -> bool {
        let matched = self.is_punctuator(c);
        if matched {
            self.consume();
        }
        matched
    }

    #[inline]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.current.kind == TokenKind::Keyword(keyword)
    }

    /// Consume the current token if it is `keyword`.
    pub fn skip_if_keyword(&mut self, keyword: Keyword) -> bool {
        let matched = self.is_keyword(keyword);
        if matched {
            self.consume();
        }
        matched
    }

    #[inline]
    pub fn is_operator(&self, op: Operator) -> bool {
        self.current.kind == TokenKind::Operator(op)
    }

    /// Consume the current token if it is operator `op`.
    pub fn skip_if_operator(&mut self, op: Operator) -> bool {
        let matched = self.is_operator(op);
        if matched {
            self.consume();
        }
        matched
    }
}

/// Skip blanks and `/* */` comments.
fn skip_trivia(cursor: &mut Cursor<'_>) {
    loop {
        match cursor.current() {
            b' ' | b'\t' | b'\n' | b'\r' => cursor.advance(),
            b'/' if cursor.peek() == b'*' => {
                cursor.advance_n(2);
                cursor.skip_block_comment_body();
            }
            _ => return,
        }
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Scan one token, leaving the cursor just past it.
fn scan_token<'src>(cursor: &mut Cursor<'src>) -> Token<'src> {
    skip_trivia(cursor);

    let line = cursor.line();
    let start_col = cursor.col();
    let start = cursor.offset();

    let kind = if cursor.is_eof() {
        TokenKind::Eos
    } else {
        match cursor.current() {
            b if is_ident_start(b) => {
                cursor.eat_while(is_ident_continue);
                let text = cursor.slice(start, cursor.offset());
                match keywords::lookup(text) {
                    Some(keyword) => TokenKind::Keyword(keyword),
                    None => TokenKind::Ident(text),
                }
            }
            b'0'..=b'9' => TokenKind::NumConst(scan_number(cursor)),
            b'"' => {
                cursor.advance();
                let body_start = cursor.offset();
                cursor.skip_to_quote();
                let text = cursor.slice(body_start, cursor.offset());
                if !cursor.is_eof() {
                    cursor.advance();
                }
                TokenKind::StringConst(text)
            }
            b => {
                if let Some((op, len)) = match_operator(cursor.rest()) {
                    cursor.advance_n(len);
                    TokenKind::Operator(op)
                } else if PUNCTUATORS.contains(&b) {
                    cursor.advance();
                    TokenKind::Punctuator(char::from(b))
                } else {
                    let c = cursor.current_char().unwrap_or(char::REPLACEMENT_CHARACTER);
                    cursor.advance_n(c.len_utf8());
                    TokenKind::Invalid(c)
                }
            }
        }
    };

    let end_col = if cursor.line() == line {
        cursor.col().saturating_sub(1).max(start_col)
    } else {
        start_col
    };
    Token::new(kind, SourcePos::new(line, start_col, end_col))
}

#[cfg(test)]
mod tests;
