//! Binary/unicode character inspection.
//!
//! Rewrites or reports characters outside the printable-ASCII range:
//! [`translate`] rewrites them inline (with highlight spans for the host to
//! colorize), [`instances`] lists their line/column positions, [`hex_dump`]
//! shows raw codepoints in rows of sixteen, and [`number_lines`] prefixes
//! each line with its index.

use std::fmt;

use serde::Serialize;
use textops_diagnostics::Span;

/// Expected control characters, shown by name rather than codepoint.
fn control_name(c: char) -> Option<&'static str> {
    match c {
        '\0' => Some("NUL"),
        '\n' => Some("LF"),
        '\r' => Some("CR"),
        '\t' => Some("TAB"),
        '\u{1b}' => Some("ESC"),
        _ => None,
    }
}

fn is_printable_ascii(c: char) -> bool {
    (' '..='~').contains(&c)
}

// ── Translate ───────────────────────────────────────────────────────────

/// Delimiters wrapped around a rewritten codepoint, e.g. `<<CP1F30B>>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delims {
    /// Text emitted before the codepoint.
    pub left: String,
    /// Text emitted after the codepoint.
    pub right: String,
}

impl Default for Delims {
    fn default() -> Self {
        Self {
            left: "<<".to_string(),
            right: ">>".to_string(),
        }
    }
}

/// Result of [`translate`]: the rewritten text plus highlight regions,
/// as character spans into `text`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Translation {
    /// The rewritten text, one output line per input line.
    pub text: String,
    /// Spans covering named controls and other sub-space codepoints.
    pub control: Vec<Span>,
    /// Spans covering non-ASCII (unicode) codepoints.
    pub unicode: Vec<Span>,
}

/// Rewrite every non-printable character as a readable token.
///
/// Printable ASCII passes through. Expected controls become their names
/// (`NUL`, `LF`, ...). Everything else becomes
/// `<left>CP<XXXX><right>` with the codepoint in uppercase hex, padded to
/// four digits. Each rewritten token is recorded as a highlight span over
/// the output text: controls in [`Translation::control`], other unicode in
/// [`Translation::unicode`].
pub fn translate(text: &str, delims: &Delims) -> Translation {
    let mut out = Translation::default();
    let mut out_pos = 0usize;

    for line in text.split('\n') {
        for c in line.chars() {
            if is_printable_ascii(c) {
                out.text.push(c);
                out_pos += 1;
            } else if let Some(name) = control_name(c) {
                let start = out_pos;
                out.text.push_str(name);
                out_pos += name.chars().count();
                out.control.push(Span::new(start, out_pos));
            } else {
                let start = out_pos;
                let token = format!("{}CP{:04X}{}", delims.left, c as u32, delims.right);
                out_pos += token.chars().count();
                out.text.push_str(&token);
                if c < ' ' {
                    out.control.push(Span::new(start, out_pos));
                } else {
                    out.unicode.push(Span::new(start, out_pos));
                }
            }
        }
        out.text.push('\n');
        out_pos += 1;
    }

    out
}

// ── Instances ───────────────────────────────────────────────────────────

/// One non-printable character found by [`instances`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instance {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column (character) number.
    pub col: usize,
    /// Rendering: a control name or `0x<XXXX>`.
    pub value: String,
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line:{} col:{} val:{}", self.line, self.col, self.value)
    }
}

/// Report the position of every non-printable character.
///
/// Named controls are reported but do not count against `limit`; other
/// binary characters do. Scanning stops at the end of the line in which
/// the limit is exhausted.
pub fn instances(text: &str, limit: usize) -> Vec<Instance> {
    let mut found = Vec::new();
    let mut remaining = limit;

    for (line_idx, line) in text.split('\n').enumerate() {
        for (col_idx, c) in line.chars().enumerate() {
            if is_printable_ascii(c) {
                continue;
            }
            let value = match control_name(c) {
                Some(name) => name.to_string(),
                None => {
                    remaining = remaining.saturating_sub(1);
                    format!("0x{:04X}", c as u32)
                }
            };
            found.push(Instance {
                line: line_idx + 1,
                col: col_idx + 1,
                value,
            });
        }
        if remaining == 0 {
            break;
        }
    }

    found
}

// ── Hex dump ────────────────────────────────────────────────────────────

/// Dump codepoints in rows of sixteen, each row prefixed with the character
/// offset of its first cell.
///
/// Cells are lowercase hex padded to two digits; codepoints above 0xFF
/// render wider. A final partial row is included.
pub fn hex_dump(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();

    for (row, cells) in chars.chunks(16).enumerate() {
        out.push_str(&format!("0x{:04x}", row * 16));
        for &c in cells {
            out.push_str(&format!(" {:02x}", c as u32));
        }
        out.push('\n');
    }

    out
}

// ── Line numbering ──────────────────────────────────────────────────────

/// Prefix each line with a 1-based index, zero-padded to the width of the
/// total line count, followed by a space.
pub fn number_lines(text: &str) -> String {
    let had_trailing_newline = text.ends_with('\n');
    let body = if had_trailing_newline {
        &text[..text.len() - 1]
    } else {
        text
    };

    let lines: Vec<&str> = body.split('\n').collect();
    let width = lines.len().to_string().len();

    let mut out = lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:0width$} {line}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");
    if had_trailing_newline {
        out.push('\n');
    }
    out
}
