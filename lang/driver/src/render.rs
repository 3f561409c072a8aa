//! Terminal rendering of parse errors, type errors and warnings.

use crate::{CheckedFile, Surface};
use colored::{ColoredString, Colorize};
use nospace_utils::span::{FileInfo, SourceRange};
use std::fmt::Write;

/// Everything wrong with a file, errors first, then a one-line summary.
pub fn render(file: &CheckedFile) -> String {
    let mut out = String::new();
    // invisible and whitespace programs have nothing worth quoting
    let snippets = file.surface == Surface::Nossembly;
    for err in &file.ir.parse_errors {
        entry(&mut out, &file.info, "error".red().bold(), &err.kind, &err.message, err.range, snippets);
    }
    if let Some(report) = &file.report {
        for err in &report.errors {
            entry(&mut out, &file.info, "error".red().bold(), &err.kind, &err.message, err.range, snippets);
        }
        for warn in &report.warnings {
            entry(
                &mut out,
                &file.info,
                "warning".yellow().bold(),
                &warn.kind,
                &warn.message,
                warn.range,
                snippets,
            );
        }
    }
    let _ = writeln!(out, "{}", summary(file));
    out
}

pub fn summary(file: &CheckedFile) -> String {
    let path = file.info.path();
    let name = if path.as_os_str().is_empty() {
        format!("<source>")
    } else {
        format!("{}", path.display())
    };
    let status = if file.is_ok() { "ok".green() } else { "failed".red() };
    format!(
        "check {} ... {} ({} errors, {} warnings)",
        name,
        status,
        file.error_count(),
        file.warning_count()
    )
}

fn entry(
    out: &mut String, info: &FileInfo, level: ColoredString, kind: &dyn std::fmt::Display,
    message: &str, range: SourceRange, snippet: bool,
) {
    let _ = writeln!(out, "{}{}: {}", level, format!("[{}]", kind).bold(), message);
    let _ = writeln!(out, "  {} {}", "-->".blue(), info.locate(range.start));
    if !snippet {
        return;
    }
    let Some(line) = info.line(range.start.line) else { return };
    let gutter = format!("{}", range.start.line + 1);
    let pad = " ".repeat(gutter.len());
    let width = if range.end.line == range.start.line {
        range.end.column.saturating_sub(range.start.column).max(1)
    } else {
        line.chars().count().saturating_sub(range.start.column).max(1)
    };
    let _ = writeln!(out, "{} {}", pad, "|".blue());
    let _ = writeln!(out, "{} {} {}", gutter.blue(), "|".blue(), line);
    let _ = writeln!(
        out,
        "{} {} {}{}",
        pad,
        "|".blue(),
        " ".repeat(range.start.column),
        "^".repeat(width).red()
    );
}
