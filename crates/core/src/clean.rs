//! Whitespace and empty-line cleanup.
//!
//! Multiline regex substitutions over the selected text. Each function
//! compiles its pattern per call and returns a new string; nothing here
//! holds state between calls.

use regex::Regex;

// ── Modes ───────────────────────────────────────────────────────────────

/// Which side of each line [`trim`] strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trim {
    /// Strip spaces/tabs at line starts.
    Leading,
    /// Strip spaces/tabs at line ends.
    Trailing,
    /// Strip both sides.
    Both,
}

/// How [`remove_empty_lines`] treats blank lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyLines {
    /// Delete every whitespace-only line.
    RemoveAll,
    /// Collapse each run of blank lines into exactly one blank line.
    Normalize,
}

/// How [`remove_ws`] treats whitespace characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveWs {
    /// Strip all whitespace, line endings included.
    RemoveAll,
    /// Strip spaces/tabs/vertical whitespace but keep line endings.
    KeepEol,
    /// Collapse runs of spaces into a single space. Does not trim trailing.
    Normalize,
}

// ── Operations ──────────────────────────────────────────────────────────

/// Strip leading and/or trailing spaces and tabs from every line.
pub fn trim(text: &str, how: Trim) -> String {
    let re = match how {
        Trim::Leading => pattern(r"(?m)^[ \t]+"),
        Trim::Trailing => pattern(r"(?m)[ \t]+$"),
        Trim::Both => pattern(r"(?m)^[ \t]+|[ \t]+$"),
    };
    re.replace_all(text, "").into_owned()
}

/// Delete or collapse empty lines.
pub fn remove_empty_lines(text: &str, how: EmptyLines) -> String {
    match how {
        EmptyLines::Normalize => {
            let re = pattern(r"(?:\s*)(\r?\n)(?:\s*)(?:\r?\n+)");
            re.replace_all(text, "${1}${1}").into_owned()
        }
        EmptyLines::RemoveAll => {
            let re = pattern(r"(?m)^[ \t]*$\r?\n");
            re.replace_all(text, "").into_owned()
        }
    }
}

/// Remove or normalize whitespace characters.
pub fn remove_ws(text: &str, how: RemoveWs) -> String {
    match how {
        RemoveWs::Normalize => {
            let re = pattern(r"([ ])[ ]+");
            re.replace_all(text, "${1}").into_owned()
        }
        RemoveWs::KeepEol => {
            let re = pattern(r"[ \t\x0B\x0C]");
            re.replace_all(text, "").into_owned()
        }
        RemoveWs::RemoveAll => {
            let re = pattern(r"[ \t\r\n\x0B\x0C]");
            re.replace_all(text, "").into_owned()
        }
    }
}

fn pattern(pat: &str) -> Regex {
    Regex::new(pat).expect("cleanup patterns are static and valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── trim ─────────────────────────────────────────────────────────────

    #[test]
    fn trim_leading() {
        assert_eq!(trim("  a\n\tb  \n", Trim::Leading), "a\nb  \n");
    }

    #[test]
    fn trim_trailing() {
        assert_eq!(trim("  a \nb\t\n", Trim::Trailing), "  a\nb\n");
    }

    #[test]
    fn trim_both() {
        assert_eq!(trim(" a \n\t b \t\n", Trim::Both), "a\nb\n");
    }

    #[test]
    fn trim_leaves_interior_whitespace() {
        assert_eq!(trim("a  b\n", Trim::Both), "a  b\n");
    }

    // ── remove_empty_lines ──────────────────────────────────────────────

    #[test]
    fn empty_lines_remove_all() {
        let input = "a\n\n  \t\nb\n\nc\n";
        assert_eq!(remove_empty_lines(input, EmptyLines::RemoveAll), "a\nb\nc\n");
    }

    #[test]
    fn empty_lines_normalize_collapses_runs() {
        let input = "a\n\n\n\nb\n";
        assert_eq!(remove_empty_lines(input, EmptyLines::Normalize), "a\n\nb\n");
    }

    #[test]
    fn empty_lines_normalize_keeps_single_blank() {
        let input = "a\n\nb\n";
        assert_eq!(remove_empty_lines(input, EmptyLines::Normalize), "a\n\nb\n");
    }

    // ── remove_ws ───────────────────────────────────────────────────────

    #[test]
    fn ws_remove_all() {
        assert_eq!(remove_ws("a b\tc\r\nd", RemoveWs::RemoveAll), "abcd");
    }

    #[test]
    fn ws_keep_eol() {
        assert_eq!(remove_ws("a b\tc\r\nd e\n", RemoveWs::KeepEol), "abc\r\nde\n");
    }

    #[test]
    fn ws_normalize_collapses_spaces() {
        assert_eq!(remove_ws("a   b  c\n", RemoveWs::Normalize), "a b c\n");
    }

    #[test]
    fn ws_normalize_keeps_tabs() {
        // Only space runs collapse; tabs pass through.
        assert_eq!(remove_ws("a\t\tb", RemoveWs::Normalize), "a\t\tb");
    }
}
