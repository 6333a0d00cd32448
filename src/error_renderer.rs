//! Error rendering using ariadne
//!
//! This module renders calc errors with source code snippets and help
//! annotations.

use crate::{Diagnostic, Error};
use ariadne::{Color, Label, Report, ReportKind, Source};
use std::io::Write;
use std::ops::Range;

const SOURCE_ID: &str = "<input>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use calc::{Engine, EngineOptions, Environment, render_error};
///
/// let engine = Engine::new(EngineOptions::default());
/// let mut env = Environment::new();
///
/// if let Err(e) = engine.eval("1 + + ;", &mut env) {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String (useful for logs, web UIs, etc.)
pub fn render_error_to_string(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    match error {
        Error::Parse { diagnostic, src } => render_diagnostic(src, diagnostic, writer, use_color),
        Error::Evaluation { statement, error } => {
            writeln!(writer, "Evaluation error in statement {}: {}", statement + 1, error)
        }
    }
}

fn render_diagnostic(
    source: &str,
    diag: &Diagnostic,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let span = span_of(source, diag);

    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
        .with_message(&diag.message)
        .with_config(ariadne::Config::default().with_color(use_color));

    if let Some(code) = &diag.code {
        report = report.with_code(code);
    }

    report = report.with_label(
        Label::new((SOURCE_ID, span))
            .with_message(&diag.message)
            .with_color(Color::Red),
    );

    if let Some(help) = &diag.help {
        report = report.with_help(help);
    }

    report.finish().write((SOURCE_ID, Source::from(source)), &mut *writer)
}

// One-character span at the diagnostic position, in char offsets. Errors at
// end of input point just past the last character.
fn span_of(source: &str, diag: &Diagnostic) -> Range<usize> {
    let len = source.chars().count();
    let start = diag.position.offset.min(len);
    start..(start + 1).min(len.max(start))
}
