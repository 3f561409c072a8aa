use nospace_utils::span::SourceRange;
use std::fmt;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum TypeErrorKind {
    Underflow,
    Mismatch,
    Assertion,
    StrictModeViolation,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum TypeWarningKind {
    Unreachable,
    UnderflowWarn,
}

impl fmt::Display for TypeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            | TypeErrorKind::Underflow => "underflow",
            | TypeErrorKind::Mismatch => "mismatch",
            | TypeErrorKind::Assertion => "assertion",
            | TypeErrorKind::StrictModeViolation => "strict_mode_violation",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for TypeWarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            | TypeWarningKind::Unreachable => "unreachable",
            | TypeWarningKind::UnderflowWarn => "underflow_warn",
        };
        write!(f, "{}", s)
    }
}

/// A finding about the checked program, pointing at the operation it concerns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic<Kind> {
    pub kind: Kind,
    pub message: String,
    pub range: SourceRange,
}

pub type TypeError = Diagnostic<TypeErrorKind>;
pub type TypeWarning = Diagnostic<TypeWarningKind>;

impl<Kind: fmt::Display> fmt::Display for Diagnostic<Kind> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.kind, self.range.start, self.message)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeReport {
    pub errors: Vec<TypeError>,
    pub warnings: Vec<TypeWarning>,
}

impl TypeReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}
