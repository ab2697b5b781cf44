//! Rendering of session errors against their source text.

use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use minic_ir::Span;

use crate::session::SessionError;

/// Whether rendered reports carry ANSI colors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Always,
    Never,
    /// Color only when stderr is a terminal.
    Auto,
}

impl ColorMode {
    fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}

/// Render `error` as a report pointing into `source`.
///
/// Errors without a location render as a plain `Error: message` line.
pub fn render_error(path: &str, source: &str, error: &SessionError, color: ColorMode) -> String {
    let Some(span) = error.span() else {
        return format!("Error: {error}\n");
    };
    let (title, label) = match error {
        SessionError::Syntax(err) => ("syntax error".to_string(), err.message.clone()),
        SessionError::Eval(err) => (err.to_string(), "while evaluating this".to_string()),
    };

    let range = char_range(source, span);
    let label_color = if matches!(error, SessionError::Syntax(_)) {
        Color::Red
    } else {
        Color::Yellow
    };
    let report = Report::build(ReportKind::Error, path, range.start)
        .with_config(Config::default().with_color(color.enabled()))
        .with_message(title)
        .with_label(
            Label::new((path, range))
                .with_message(label)
                .with_color(label_color),
        )
        .finish();

    let mut buffer = Vec::new();
    if report.write((path, Source::from(source)), &mut buffer).is_err() {
        return format!("Error: {error}\n");
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Character range covering `span`, which is in bytes. Labels index by
/// character.
fn char_range(source: &str, span: Span) -> Range<usize> {
    let range = span.to_range();
    let start = floor_char_boundary(source, range.start);
    let end = floor_char_boundary(source, range.end.max(start));
    let start_char = source[..start].chars().count();
    start_char..start_char + source[start..end].chars().count()
}

fn floor_char_boundary(source: &str, offset: usize) -> usize {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

#[cfg(test)]
mod tests;
