use nospace_statics::CheckError;
use nospace_syntax::ParseError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Source file not found: `{}`", .0.display())]
    SrcFileNotFound(PathBuf),
    #[error("Cannot tell the surface syntax of `{}`; expected a .nsa, .ns or .ws file", .0.display())]
    UnknownSurface(PathBuf),
    #[error("Unknown surface syntax `{0}`; expected one of nossembly, nospace, whitespace")]
    UnknownSurfaceName(String),
    #[error("Parse error:\n\t{}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("\n\t"))]
    ParseErrors(Vec<ParseError>),
    #[error("Internal checker error: {0}")]
    CheckError(#[from] CheckError),
}

pub type Result<T> = std::result::Result<T, BuildError>;
