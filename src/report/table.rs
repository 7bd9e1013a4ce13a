#![forbid(unsafe_code)]

//! Aligned table rendering of a resolved option mapping
//!
//! Scalar-valued options share a two-column layout sorted by name; each
//! sequence-valued option is broken out into its own block, since sequences
//! have no bounded width to align against. The exact contract:
//! - empty input yields `"OPTION VALUE\n"` with headers, `""` without;
//! - the left column is as wide as the longest scalar option name, counting
//!   the header word `OPTION` when headers are on;
//! - booleans render as `True`/`False`, integers in decimal, floats with six
//!   fractional digits, strings verbatim;
//! - a sequence block is a blank line, the upper-cased name with `S:`
//!   appended, then one four-space-indented line per element;
//! - lines are newline-joined with a single trailing newline.

use crate::model::{ResolvedOptions, ResolvedValue, Value};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

const JUST_HEADERS: &str = "OPTION VALUE\n";
const HEADER_OPTION: &str = "OPTION";
const HEADER_VALUE: &str = "VALUE";
const ELEMENT_INDENT: &str = "    ";

/// Table formatter for resolved option values
///
/// Headers are on by default; `format` returns plain text and
/// `write_to_stdout` adds colors.
pub struct ReportFormatter {
    with_headers: bool,
    color_choice: ColorChoice,
}

impl ReportFormatter {
    /// Creates a formatter with headers enabled
    pub fn new(color_choice: ColorChoice) -> Self {
        ReportFormatter {
            with_headers: true,
            color_choice,
        }
    }

    /// Enables or disables the `OPTION VALUE` header line
    pub fn with_headers(mut self, with_headers: bool) -> Self {
        self.with_headers = with_headers;
        self
    }

    /// Format the resolved mapping as an aligned table
    ///
    /// Returns a plain string; output is byte-for-byte deterministic for a
    /// given mapping.
    pub fn format(&self, values: &ResolvedOptions) -> String {
        if values.is_empty() {
            return if self.with_headers {
                JUST_HEADERS.to_string()
            } else {
                String::new()
            };
        }

        let (scalars, sequences) = partition(values);
        let width = self.column_width(&scalars);

        let mut lines: Vec<String> = Vec::new();
        if self.with_headers {
            lines.push(format!("{:<width$} {}", HEADER_OPTION, HEADER_VALUE));
        }

        for &(name, value) in &scalars {
            lines.push(format!("{:<width$} {}", name, scalar_text(value)));
        }

        for &(name, elements) in &sequences {
            // The embedded newline yields the blank line before the block.
            lines.push(format!("\n{}S:", name.to_uppercase()));
            for element in elements {
                lines.push(format!("{}{}", ELEMENT_INDENT, scalar_text(element)));
            }
        }

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }

    /// Write the table to stdout with colors
    ///
    /// Same text as [`ReportFormatter::format`], with the header and
    /// sequence headers bold and option names cyan.
    pub fn write_to_stdout(&self, values: &ResolvedOptions) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);

        if values.is_empty() {
            if self.with_headers {
                stdout.set_color(ColorSpec::new().set_bold(true))?;
                write!(stdout, "{} {}", HEADER_OPTION, HEADER_VALUE)?;
                stdout.reset()?;
                writeln!(stdout)?;
            }
            return Ok(());
        }

        let (scalars, sequences) = partition(values);
        let width = self.column_width(&scalars);

        if self.with_headers {
            stdout.set_color(ColorSpec::new().set_bold(true))?;
            write!(stdout, "{:<width$} {}", HEADER_OPTION, HEADER_VALUE)?;
            stdout.reset()?;
            writeln!(stdout)?;
        }

        for &(name, value) in &scalars {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            write!(stdout, "{:<width$}", name)?;
            stdout.reset()?;
            writeln!(stdout, " {}", scalar_text(value))?;
        }

        for &(name, elements) in &sequences {
            writeln!(stdout)?;
            stdout.set_color(ColorSpec::new().set_bold(true))?;
            write!(stdout, "{}S:", name.to_uppercase())?;
            stdout.reset()?;
            writeln!(stdout)?;
            for element in elements {
                writeln!(stdout, "{}{}", ELEMENT_INDENT, scalar_text(element))?;
            }
        }

        Ok(())
    }

    fn column_width(&self, scalars: &[(&str, &Value)]) -> usize {
        let mut width = if self.with_headers {
            HEADER_OPTION.len()
        } else {
            0
        };
        // Sequence names sit under their own headers and do not widen the
        // column.
        for (name, _) in scalars {
            width = width.max(name.chars().count());
        }
        width
    }
}

/// Renders a resolved mapping as an aligned table without colors
pub fn render(values: &ResolvedOptions, with_headers: bool) -> String {
    ReportFormatter::new(ColorChoice::Never)
        .with_headers(with_headers)
        .format(values)
}

type ScalarEntries<'a> = Vec<(&'a str, &'a Value)>;
type SequenceEntries<'a> = Vec<(&'a str, &'a [Value])>;

fn partition(values: &ResolvedOptions) -> (ScalarEntries<'_>, SequenceEntries<'_>) {
    let mut scalars: ScalarEntries = Vec::new();
    let mut sequences: SequenceEntries = Vec::new();
    for (name, value) in values {
        match value {
            ResolvedValue::Scalar(value) => scalars.push((name.as_str(), value)),
            ResolvedValue::Sequence(elements) => {
                sequences.push((name.as_str(), elements.as_slice()));
            }
        }
    }
    // The source mapping carries no defined order; sort for determinism.
    scalars.sort_by(|a, b| a.0.cmp(b.0));
    sequences.sort_by(|a, b| a.0.cmp(b.0));
    (scalars, sequences)
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Int(n) => n.to_string(),
        Value::Float(x) => format!("{:.6}", x),
        Value::Str(s) => s.clone(),
    }
}
