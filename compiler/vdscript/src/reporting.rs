//! Diagnostic rendering for the terminal.
//!
//! Errors with a source position are shown with the offending line and a
//! caret under the reported columns:
//!
//! ```text
//! error[E1001]: expected `;`, found `}` (while parsing an expression statement)
//!  --> script.vds:1:14
//!   |
//! 1 | void f() { x }
//!   |              ^
//! ```

use std::fmt::Write;

use vds_ir::SourcePos;
use vds_parse::ParseError;

use crate::ScriptError;

/// Render any context error; parse errors get a source excerpt.
pub fn render_error(source: &str, path: &str, err: &ScriptError) -> String {
    match err {
        ScriptError::Parse(err) => render_parse_error(source, path, err),
        other => format!("error[{}]: {other}\n", other.code()),
    }
}

pub fn render_parse_error(source: &str, path: &str, err: &ParseError) -> String {
    let mut out = format!("error[{}]: {}\n", err.code, err.full_message());
    render_snippet(&mut out, source, path, err.pos);
    out
}

fn render_snippet(out: &mut String, source: &str, path: &str, pos: SourcePos) {
    let _ = writeln!(out, " --> {path}:{pos}");
    let Some(line) = source_line(source, pos.line) else {
        return;
    };
    let gutter = pos.line.to_string();
    let pad = " ".repeat(gutter.len());
    let _ = writeln!(out, "{pad} |");
    let _ = writeln!(out, "{gutter} | {line}");

    // Columns are byte based; the indent follows the line's own tabs so
    // the caret lines up.
    let start = (pos.start_col as usize).saturating_sub(1);
    let indent: String = line
        .bytes()
        .take(start)
        .map(|b| if b == b'\t' { '\t' } else { ' ' })
        .collect();
    let carets = "^".repeat(pos.width() as usize);
    let _ = writeln!(out, "{pad} | {indent}{carets}");
}

/// Line `number` (1-based) of `source` without its terminator. `\r\n`,
/// `\n` and a lone `\r` each end a line.
fn source_line(source: &str, number: u32) -> Option<String> {
    let index = (number as usize).checked_sub(1)?;
    source
        .replace("\r\n", "\n")
        .split(['\n', '\r'])
        .nth(index)
        .map(str::to_owned)
}
