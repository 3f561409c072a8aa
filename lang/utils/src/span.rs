use std::{
    fmt::{Debug, Display},
    path::PathBuf,
    sync::Arc,
};

/// A position in a source text; zero-based line, zero-based column counted in chars.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor {
    pub line: usize,
    pub column: usize,
}

impl Cursor {
    pub fn new(line: usize, column: usize) -> Self {
        Cursor { line, column }
    }
}

impl Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Cursor { line, column } = self;
        write!(f, "{}:{}", line + 1, column)
    }
}

impl Debug for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// Start and end cursors of a piece of source, as consumed by editor markers.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SourceRange {
    pub start: Cursor,
    pub end: Cursor,
}

impl SourceRange {
    pub fn new(start: Cursor, end: Cursor) -> Self {
        SourceRange { start, end }
    }
    /// A range confined to a single line.
    pub fn line(line: usize, start: usize, end: usize) -> Self {
        SourceRange::new(Cursor::new(line, start), Cursor::new(line, end))
    }
    pub fn dummy() -> Self {
        SourceRange::default()
    }
}

impl Display for SourceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let SourceRange { start, end } = self;
        write!(f, "{start} - {end}")
    }
}

impl Debug for SourceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// Tracks the cursor while scanning a text char by char.
#[derive(Clone, Copy, Debug, Default)]
pub struct CursorTracker {
    cursor: Cursor,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }
    /// The position of the next char to be consumed.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.cursor.line += 1;
            self.cursor.column = 0;
        } else {
            self.cursor.column += 1;
        }
    }
}

/// A source file as seen by diagnostics: its path and its lines.
#[derive(Clone, Debug)]
pub struct FileInfo {
    lines: Vec<String>,
    path: Option<Arc<PathBuf>>,
}

impl FileInfo {
    pub fn new(s: &str, path: Option<Arc<PathBuf>>) -> Self {
        FileInfo { lines: s.split('\n').map(ToOwned::to_owned).collect(), path }
    }
    pub fn path(&self) -> PathBuf {
        self.path.as_ref().map(|p| p.to_path_buf()).unwrap_or_default()
    }
    pub fn line(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(|s| s.as_str())
    }
    /// `path:line:column` of a cursor, for terminal output.
    pub fn locate(&self, cursor: Cursor) -> String {
        match &self.path {
            | Some(path) => format!("{}:{}", path.display(), cursor),
            | None => format!("{}", cursor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tracker_counts_chars_not_bytes() {
        let mut tracker = CursorTracker::new();
        for c in "\u{200B}\u{200C}\n\t".chars() {
            tracker.advance(c);
        }
        assert_eq!(tracker.cursor(), Cursor::new(1, 1));
    }

    #[test]
    fn cursor_displays_one_based_lines() {
        let range = SourceRange::line(0, 2, 7);
        assert_eq!(format!("{}", range), "1:2 - 1:7");
    }
}
