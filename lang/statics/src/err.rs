use nospace_syntax::LabelName;
use nospace_utils::span::SourceRange;
use thiserror::Error;

/// Failures that stop a check outright. Problems with the checked program
/// itself are reported as diagnostics instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("label `{label}` is used at {range} but never defined")]
    UndefinedLabel { label: LabelName, range: SourceRange },
    #[error("label `{label}` is defined again at {range}")]
    DuplicatedLabel { label: LabelName, range: SourceRange },
    #[error("stack depth {depth} at {range} is out of range")]
    DepthOutOfRange { depth: i64, range: SourceRange },
    #[error("type graph did not settle within {0} passes")]
    IterationLimit(usize),
}

pub type Result<T> = std::result::Result<T, CheckError>;
