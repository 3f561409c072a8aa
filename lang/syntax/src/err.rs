use nospace_utils::span::SourceRange;
use std::fmt;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ParseErrorKind {
    UnknownInstruction,
    Argument,
    Pragma,
    DuplicatedLabel,
}

impl ParseErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            | ParseErrorKind::UnknownInstruction => "unknown_instruction",
            | ParseErrorKind::Argument => "argument",
            | ParseErrorKind::Pragma => "pragma",
            | ParseErrorKind::DuplicatedLabel => "duplicated_label",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recoverable problem found while parsing; parsing carries on past it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub range: SourceRange,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, range: SourceRange) -> Self {
        ParseError { kind, message: message.into(), range }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.kind, self.range.start, self.message)
    }
}
