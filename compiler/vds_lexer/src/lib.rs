//! Tokenizer for VDScript.
//!
//! Turns source text into a stream of [`Token`]s with two-token lookahead:
//! the parser sees the current token and the class of the one after it.
//!
//! - blanks and `/* ... */` comments are skipped; there are no line comments
//! - identifiers are matched against the keyword table by exact text
//! - numbers accept `0x` hex, leading-`0` octal and `K`/`M`/`G`/`T` suffixes
//! - strings run verbatim to the next `"`; there are no escape sequences
//! - operators are matched longest first
//!
//! The tokenizer never fails. Characters that start no token come out as
//! [`TokenKind::Invalid`]; unterminated strings and comments run to end of
//! input and the parser reports whatever that leaves it with.

mod cursor;
mod keywords;
mod number;
mod operators;
mod tokenizer;

pub use tokenizer::Tokenizer;
pub use vds_ir::{Token, TokenClass, TokenKind};

/// Tokenize a whole source, including the final `Eos` token.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = *tokenizer.current_token();
        tokens.push(token);
        if token.kind == TokenKind::Eos {
            return tokens;
        }
        tokenizer.consume();
    }
}
