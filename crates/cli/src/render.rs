//! Output rendering for the textops CLI.
//!
//! Pretty mode renders the JSON normalizer's failure as the plain contract
//! string plus an ariadne report annotating the original selection. JSON
//! mode emits the structured diagnostic instead.

use std::io::{self, IsTerminal};

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use textops_core::FormatError;

// ── Output format ───────────────────────────────────────────────────────

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// Plain text / coloured source-annotated errors.
    Pretty,
    /// Machine-readable JSON.
    Json,
}

impl Format {
    /// Resolve an explicit `--output` value, defaulting by TTY detection.
    pub(crate) fn resolve_or_detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            Some("pretty") => Format::Pretty,
            // Default: pretty for interactive terminals, JSON for pipes
            _ => {
                if io::stdout().is_terminal() {
                    Format::Pretty
                } else {
                    Format::Json
                }
            }
        }
    }
}

// ── JSON normalizer failure ─────────────────────────────────────────────

/// Render a [`FormatError`] against the original selection.
///
/// - `Pretty` → the contract string and an ariadne report, both to stderr.
/// - `Json`   → `{"error": <diagnostic>}` to stdout.
pub(crate) fn render_json_error(source: &str, filename: &str, err: &FormatError, format: Format) {
    match format {
        Format::Json => {
            let envelope = serde_json::json!({ "error": err.to_diagnostic() });
            println!(
                "{}",
                serde_json::to_string_pretty(&envelope)
                    .expect("Diagnostic serialization cannot fail")
            );
        }
        Format::Pretty => {
            eprintln!("{err}");

            // The error position is a character offset; ariadne wants bytes.
            let start = source
                .char_indices()
                .nth(err.position)
                .map_or(source.len(), |(b, _)| b);
            let end = source
                .char_indices()
                .nth(err.position + 1)
                .map_or(source.len(), |(b, _)| b)
                .max(start);

            Report::build(ReportKind::Error, (filename, start..end))
                .with_code(err.to_diagnostic().id.as_ref())
                .with_message(&err.message)
                .with_config(Config::default().with_compact(false))
                .with_label(
                    Label::new((filename, start..end))
                        .with_message("here")
                        .with_color(Color::Red),
                )
                .finish()
                .eprint((filename, Source::from(source)))
                .ok();
        }
    }
}

// ── Transformed text ────────────────────────────────────────────────────

/// Print a plain transformed-text result.
///
/// Pretty mode writes the text verbatim; JSON mode wraps it in an object so
/// downstream tooling gets one parseable value.
pub(crate) fn print_text(text: &str, format: Format) {
    match format {
        Format::Pretty => print!("{text}"),
        Format::Json => {
            let envelope = serde_json::json!({ "text": text });
            println!(
                "{}",
                serde_json::to_string_pretty(&envelope).expect("String serialization cannot fail")
            );
        }
    }
}
