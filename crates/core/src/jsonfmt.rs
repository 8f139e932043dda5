//! Comment-tolerant JSON normalizer.
//!
//! Scans JSON-like text that may contain `//` line comments, `/* */` block
//! comments, and trailing commas; rewrites it into strict JSON; re-parses and
//! re-serializes with indentation. Comments are not dropped: each one becomes
//! a synthetic `"//N": "<text>"` member so it survives the strict-JSON round
//! trip and stays visible in the output. On parse failure the error position
//! is mapped back to the original text and reported with a contextual
//! snippet.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use textops_diagnostics::{Diagnostic, LineIndex, Span, codes};
use thiserror::Error;

/// Number of original-text characters shown on each side of an error.
const CONTEXT_CHARS: usize = 40;

// ── Error type ──────────────────────────────────────────────────────────

/// A JSON syntax error surviving comment stripping and trailing-comma
/// cleanup, located in the **original** input text.
///
/// The `Display` rendering is the user-facing contract:
///
/// ```text
/// Json Error: <parser message> pos: <original offset>
/// <up to 40 chars before>
/// ---------here----------
/// <up to 40 chars after>
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("Json Error: {message} pos: {position}\n{before}\n---------here----------\n{after}")]
pub struct FormatError {
    /// Parser message, without the parser's own line/column suffix.
    pub message: String,
    /// Character offset of the failure in the original input.
    pub position: usize,
    /// Up to 40 original characters preceding the failure.
    pub before: String,
    /// Up to 40 original characters starting at the failure.
    pub after: String,
}

impl FormatError {
    /// Convert to a structured [`Diagnostic`] for machine-readable output.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(
            codes::JSON_SYNTAX,
            self.message.clone(),
            Some(Span::new(self.position, self.position + 1)),
        )
        .with_context(BTreeMap::from([
            ("position".to_string(), self.position.to_string()),
            ("before".to_string(), self.before.clone()),
            ("after".to_string(), self.after.clone()),
        ]))
    }
}

// ── Scanner ─────────────────────────────────────────────────────────────

/// Scanner state. Held only for the duration of one [`normalize`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Idle — structural characters and whitespace.
    Default,
    /// Inside a quoted string.
    InString,
    /// Inside a `//` line comment.
    LineComment,
    /// Inside a `/* */` block comment.
    BlockComment,
}

/// Output of the cleaning pass: the stripped text and a parallel map from
/// each cleaned character back to the original character index that
/// produced it.
struct Cleaned {
    text: String,
    /// `pos_map[i]` is the original index of the i-th cleaned character.
    /// Monotonic non-decreasing; every character of a synthetic comment tag
    /// shares the tag's anchor index.
    pos_map: Vec<usize>,
}

impl Cleaned {
    fn push(&mut self, c: char, orig: usize) {
        self.text.push(c);
        self.pos_map.push(orig);
    }

    /// Emit all pending synthetic `"//N":"<comment>",` members, every
    /// character anchored at `orig` (the flush-point index).
    fn flush_tags(&mut self, pending: &mut Vec<String>, orig: usize) {
        for tag in pending.drain(..) {
            for c in tag.chars() {
                self.push(c, orig);
            }
            self.push(',', orig);
        }
    }

    /// Whether a comma is required before inserting a member here.
    fn needs_comma(&self) -> bool {
        !matches!(self.text.chars().next_back(), None | Some('{' | '[' | ','))
    }
}

/// Strip comments and structural whitespace from `input`, transforming
/// comments into synthetic members. Single left-to-right pass with one
/// character of lookahead.
///
/// A finished comment is not emitted where it was found: a `"//N":"…"`
/// member is only legal at a member boundary, so finished tags are held
/// pending and flushed at the next `,`, `}`, `]`, or end of input. All
/// characters of a flushed tag map to the flush-point index, which keeps
/// the position map monotonic.
fn clean(input: &str) -> Cleaned {
    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();

    let mut out = Cleaned {
        text: String::with_capacity(input.len()),
        pos_map: Vec::with_capacity(len),
    };
    let mut state = ScanState::Default;
    let mut comment = String::new();
    let mut comment_count = 0usize;
    let mut pending: Vec<String> = Vec::new();
    let mut escaped = false;

    let mut i = 0usize;
    while i < len {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        match state {
            ScanState::Default => {
                if c == '/' && next == Some('/') {
                    state = ScanState::LineComment;
                    comment.clear();
                    i += 1; // consume the second '/'
                } else if c == '/' && next == Some('*') {
                    state = ScanState::BlockComment;
                    comment.clear();
                    i += 1;
                } else if c == '"' {
                    if !pending.is_empty() && !out.needs_comma() && !out.text.is_empty() {
                        // Member start right after '{', '[', or ',': pending
                        // tags go in place.
                        out.flush_tags(&mut pending, i);
                    }
                    out.push(c, i);
                    state = ScanState::InString;
                } else if c == ',' {
                    out.push(c, i);
                    out.flush_tags(&mut pending, i);
                } else if c == '}' || c == ']' {
                    if !pending.is_empty() {
                        if out.needs_comma() {
                            out.push(',', i);
                        }
                        out.flush_tags(&mut pending, i);
                    }
                    out.push(c, i);
                } else if c.is_whitespace() {
                    // Structural whitespace is dropped, not mapped.
                } else {
                    // Includes a lone '/' not starting a comment.
                    out.push(c, i);
                }
            }

            ScanState::InString => {
                // Strings are kept verbatim, whitespace included.
                out.push(c, i);
                if c == '\\' {
                    escaped = true;
                } else if c == '"' {
                    if !escaped {
                        state = ScanState::Default;
                    }
                    escaped = false;
                } else {
                    escaped = false;
                }
            }

            ScanState::LineComment => {
                if c == '\n' {
                    pending.push(format!("\"//{comment_count}\":\"{comment}\""));
                    comment_count += 1;
                    state = ScanState::Default;
                } else if c == '\r' {
                    // dropped
                } else {
                    // Escape so the comment stays a valid string literal.
                    if c == '"' || c == '\\' {
                        comment.push('\\');
                    }
                    comment.push(c);
                }
            }

            ScanState::BlockComment => {
                if c == '*' && next == Some('/') {
                    pending.push(format!("\"//{comment_count}\":\"{comment}\""));
                    comment_count += 1;
                    state = ScanState::Default;
                    i += 1; // consume the '/'
                } else if c == '\n' || c == '\r' {
                    // dropped, does not end the comment
                } else {
                    if c == '"' || c == '\\' {
                        comment.push('\\');
                    }
                    comment.push(c);
                }
            }
        }

        i += 1;
    }

    // Tags still pending at end of input are flushed for visibility; the
    // buffer is usually malformed at that point and the parse failure path
    // reports it.
    if !pending.is_empty() {
        if out.needs_comma() {
            out.push(',', len.saturating_sub(1));
        }
        out.flush_tags(&mut pending, len.saturating_sub(1));
    }

    // An unterminated string or comment leaves the scanner mid-state here.
    // Not detected separately: the cleaned buffer is then malformed JSON and
    // the parse failure path reports it, matching the expected behavior.
    out
}

// ── Public API ──────────────────────────────────────────────────────────

/// Normalize JSON-with-comments text into indented strict JSON.
///
/// Tolerates `//` line comments, `/* */` block comments, and trailing commas.
/// Comments are preserved as synthetic `"//N"` members; a comment directly
/// before an array element has no member slot to land in and surfaces as a
/// parse failure. Object keys keep their original insertion order. Malformed JSON is the expected unhappy
/// path and returns a [`FormatError`] pointing into the original text; this
/// function never panics on bad input.
///
/// Panics if `indent` is zero (precondition violation, caller bug).
pub fn normalize(input: &str, indent: usize) -> Result<String, FormatError> {
    assert!(indent > 0, "indent must be a positive number of spaces");

    let cleaned = clean(input);

    // Trailing-comma tolerance. A blunt text substitution, not a structural
    // fix: a string value whose content contains literal ",}" or ",]" is
    // also affected. Known limitation, kept as-is.
    let text = cleaned.text.replace(",}", "}").replace(",]", "]");

    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(value) => {
            let indent_bytes = vec![b' '; indent];
            let formatter = PrettyFormatter::with_indent(&indent_bytes);
            let mut buf = Vec::new();
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
            value
                .serialize(&mut ser)
                .expect("Value serialization to a Vec cannot fail");
            Ok(String::from_utf8(buf).expect("serde_json emits valid UTF-8"))
        }
        Err(e) => Err(position_error(&e, &text, &cleaned.pos_map, input)),
    }
}

// ── Error mapping ───────────────────────────────────────────────────────

/// Map a parse failure in the cleaned buffer back to the original input.
fn position_error(
    e: &serde_json::Error,
    cleaned: &str,
    pos_map: &[usize],
    input: &str,
) -> FormatError {
    // serde_json reports 1-based line/column (0 for I/O-class errors).
    // Recover the byte offset in the cleaned buffer, then convert to a
    // character index for the position-map lookup.
    let byte_off = if e.line() == 0 {
        cleaned.len()
    } else {
        let idx = LineIndex::new(cleaned);
        idx.offset(e.line() - 1, e.column().saturating_sub(1))
            .min(cleaned.len())
    };
    let char_idx = cleaned
        .char_indices()
        .take_while(|(b, _)| *b < byte_off)
        .count();

    // Offsets at or past the end of the map clamp to the last entry; an
    // empty map (empty cleaned buffer) yields position 0.
    let position = pos_map
        .get(char_idx)
        .or_else(|| pos_map.last())
        .copied()
        .unwrap_or(0);

    let original: Vec<char> = input.chars().collect();
    let at = position.min(original.len());
    let before: String = original[at.saturating_sub(CONTEXT_CHARS)..at].iter().collect();
    let after: String = original[at..(at + CONTEXT_CHARS).min(original.len())]
        .iter()
        .collect();

    FormatError {
        message: parser_message(e),
        position,
        before,
        after,
    }
}

/// Strip serde_json's own " at line X column Y" suffix; the rendered error
/// carries the original-text position instead.
fn parser_message(e: &serde_json::Error) -> String {
    let msg = e.to_string();
    msg.split(" at line ").next().unwrap_or(&msg).to_string()
}
