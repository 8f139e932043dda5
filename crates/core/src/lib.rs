//! textops core library.
//!
//! Every operation here is a pure function over an in-memory string: the host
//! (editor plugin, CLI, test harness) supplies the selected text and any
//! configuration, and gets back an output string plus optional structured
//! annotations. No I/O, no shared state, no cross-call state.

#![warn(missing_docs)]

/// Binary/unicode character inspection: translate, instances, hex dump,
/// line numbering.
pub mod binstr;
/// Whitespace and empty-line cleanup.
pub mod clean;
/// Comment-tolerant JSON normalizer with position-mapped error reporting.
pub mod jsonfmt;
/// Tool settings, loaded from JSONC.
pub mod settings;

// ── Convenience re-exports ──────────────────────────────────────────────────
// Flat imports for the most common entry points. The full module paths
// remain available.

// JSON normalizer
pub use jsonfmt::{FormatError, normalize};

// Cleanup
pub use clean::{EmptyLines, RemoveWs, Trim, remove_empty_lines, remove_ws, trim};

// Binary inspection
pub use binstr::{Delims, Instance, Translation, hex_dump, instances, number_lines, translate};

// Settings
pub use settings::Settings;
