mod render;

use std::fs;
use std::io::Read;
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use textops_core::{
    Delims, EmptyLines, RemoveWs, Settings, Trim, clean, hex_dump, instances, normalize,
    number_lines, translate,
};
use textops_diagnostics::codes;

use crate::render::{Format, print_text, render_json_error};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "textops",
    version,
    about = "textops — JSONC normalizing, whitespace cleanup, and binary/unicode inspection for text selections"
)]
struct Cli {
    /// Output mode: "pretty" for plain/coloured terminal output, "json" for
    /// machine-readable JSON. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    /// JSONC settings file supplying defaults for --indent, --limit, and
    /// --delims.
    #[arg(long, global = true)]
    settings: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Normalize JSON-with-comments into indented strict JSON.
    ///
    /// Tolerates // and /* */ comments (preserved as "//N" members) and
    /// trailing commas. On failure, reports the error position in the
    /// original text with surrounding context.
    Json {
        /// Input file, or "-" for stdin.
        input: String,
        /// Spaces per indent level. Defaults to the settings tab_size.
        #[arg(long)]
        indent: Option<usize>,
    },

    /// Strip leading/trailing spaces and tabs from every line.
    Trim {
        /// Input file, or "-" for stdin.
        input: String,
        #[arg(long, value_enum, default_value_t = TrimHow::Both)]
        how: TrimHow,
    },

    /// Delete or collapse empty lines.
    EmptyLines {
        /// Input file, or "-" for stdin.
        input: String,
        #[arg(long, value_enum, default_value_t = EmptyLinesHow::RemoveAll)]
        how: EmptyLinesHow,
    },

    /// Remove or normalize whitespace characters.
    Whitespace {
        /// Input file, or "-" for stdin.
        input: String,
        #[arg(long, value_enum, default_value_t = WhitespaceHow::RemoveAll)]
        how: WhitespaceHow,
    },

    /// Rewrite binary/unicode characters as readable tokens.
    Translate {
        /// Input file, or "-" for stdin.
        input: String,
        /// Token delimiters as "LEFT,RIGHT". Defaults to the settings
        /// translate_delims.
        #[arg(long)]
        delims: Option<String>,
    },

    /// Report line/column of every binary/unicode character.
    Instances {
        /// Input file, or "-" for stdin.
        input: String,
        /// Stop after this many unnamed binary characters. Defaults to the
        /// settings instance_limit.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Hex dump of the input codepoints, sixteen per row.
    Dump {
        /// Input file, or "-" for stdin.
        input: String,
    },

    /// Prefix each line with its line number.
    Number {
        /// Input file, or "-" for stdin.
        input: String,
    },

    /// Explain a diagnostic ID (e.g. TXT1001).
    Explain { id: String },
}

/// `--how` for the `trim` subcommand.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum TrimHow {
    /// Strip line starts.
    Leading,
    /// Strip line ends.
    Trailing,
    /// Strip both sides.
    Both,
}

impl From<TrimHow> for Trim {
    fn from(h: TrimHow) -> Self {
        match h {
            TrimHow::Leading => Trim::Leading,
            TrimHow::Trailing => Trim::Trailing,
            TrimHow::Both => Trim::Both,
        }
    }
}

/// `--how` for the `empty-lines` subcommand.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum EmptyLinesHow {
    /// Delete every whitespace-only line.
    RemoveAll,
    /// Collapse runs of blank lines into one.
    Normalize,
}

impl From<EmptyLinesHow> for EmptyLines {
    fn from(h: EmptyLinesHow) -> Self {
        match h {
            EmptyLinesHow::RemoveAll => EmptyLines::RemoveAll,
            EmptyLinesHow::Normalize => EmptyLines::Normalize,
        }
    }
}

/// `--how` for the `whitespace` subcommand.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum WhitespaceHow {
    /// Strip all whitespace, line endings included.
    RemoveAll,
    /// Keep line endings.
    KeepEol,
    /// Collapse runs of spaces.
    Normalize,
}

impl From<WhitespaceHow> for RemoveWs {
    fn from(h: WhitespaceHow) -> Self {
        match h {
            WhitespaceHow::RemoveAll => RemoveWs::RemoveAll,
            WhitespaceHow::KeepEol => RemoveWs::KeepEol,
            WhitespaceHow::Normalize => RemoveWs::Normalize,
        }
    }
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let format = Format::resolve_or_detect(cli.output.as_deref());
    let settings = load_settings(cli.settings.as_deref())?;

    match cli.cmd {
        Cmd::Json { input, indent } => {
            let indent = indent.unwrap_or(settings.tab_size);
            if indent == 0 {
                bail!("--indent must be a positive number of spaces");
            }
            cmd_json(&input, indent, format)?;
        }
        Cmd::Trim { input, how } => {
            let text = read_input(&input)?;
            print_text(&clean::trim(&text, how.into()), format);
        }
        Cmd::EmptyLines { input, how } => {
            let text = read_input(&input)?;
            print_text(&clean::remove_empty_lines(&text, how.into()), format);
        }
        Cmd::Whitespace { input, how } => {
            let text = read_input(&input)?;
            print_text(&clean::remove_ws(&text, how.into()), format);
        }
        Cmd::Translate { input, delims } => {
            let delims = match delims.as_deref() {
                Some(spec) => parse_delims(spec)?,
                None => settings.delims(),
            };
            cmd_translate(&input, &delims, format)?;
        }
        Cmd::Instances { input, limit } => {
            let limit = limit.unwrap_or(settings.instance_limit);
            cmd_instances(&input, limit, format)?;
        }
        Cmd::Dump { input } => {
            let text = read_input(&input)?;
            print_text(&hex_dump(&text), format);
        }
        Cmd::Number { input } => {
            let text = read_input(&input)?;
            print_text(&number_lines(&text), format);
        }
        Cmd::Explain { id } => cmd_explain(&id),
    }

    Ok(())
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_json(input: &str, indent: usize, format: Format) -> Result<()> {
    let text = read_input(input)?;

    match normalize(&text, indent) {
        Ok(formatted) => match format {
            Format::Pretty => println!("{formatted}"),
            Format::Json => {
                let out = serde_json::json!({ "formatted": formatted });
                println!("{}", serde_json::to_string_pretty(&out)?);
            }
        },
        Err(err) => {
            render_json_error(&text, input, &err, format);
            process::exit(1);
        }
    }
    Ok(())
}

fn cmd_translate(input: &str, delims: &Delims, format: Format) -> Result<()> {
    let text = read_input(input)?;
    let translation = translate(&text, delims);

    match format {
        Format::Pretty => print!("{}", translation.text),
        Format::Json => println!("{}", serde_json::to_string_pretty(&translation)?),
    }
    Ok(())
}

fn cmd_instances(input: &str, limit: usize, format: Format) -> Result<()> {
    let text = read_input(input)?;
    let found = instances(&text, limit);

    match format {
        Format::Pretty => {
            for instance in &found {
                println!("{instance}");
            }
        }
        Format::Json => {
            let out = serde_json::json!({ "instances": found });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

fn cmd_explain(id: &str) {
    match codes::explain(id) {
        Some(text) => println!("{id}: {text}"),
        None => {
            eprintln!("unknown diagnostic code: {id}");
            process::exit(1);
        }
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Read the input file, or stdin when the path is `-`.
fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {path}"))
    }
}

fn load_settings(path: Option<&str>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading settings {path}"))?;
    Settings::from_jsonc(&text).with_context(|| format!("parsing settings {path}"))
}

/// Parse `--delims "LEFT,RIGHT"`.
fn parse_delims(spec: &str) -> Result<Delims> {
    let Some((left, right)) = spec.split_once(',') else {
        bail!("--delims expects \"LEFT,RIGHT\", got {spec:?}");
    };
    Ok(Delims {
        left: left.to_string(),
        right: right.to_string(),
    })
}
