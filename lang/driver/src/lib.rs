#![allow(clippy::style)]
#![allow(clippy::useless_format)]

//! Loads nospace programs, checks them and converts between their spellings.

pub mod conf;
pub mod err;
pub mod surface;
pub mod render;

#[cfg(test)]
mod tests;

pub use conf::Conf;
pub use err::*;
pub use surface::Surface;

use nospace_statics::{TypeReport, Typechecker};
use nospace_syntax::NospaceIR;
use nospace_utils::span::FileInfo;
use std::{io, path::PathBuf, sync::Arc};

/// A program after parsing and, if it parsed cleanly, checking.
#[derive(Clone, Debug)]
pub struct CheckedFile {
    pub surface: Surface,
    pub info: FileInfo,
    pub ir: NospaceIR,
    /// `None` when parse errors kept the checker from running.
    pub report: Option<TypeReport>,
}

impl CheckedFile {
    pub fn is_ok(&self) -> bool {
        self.ir.is_ok() && self.report.as_ref().is_some_and(TypeReport::is_ok)
    }
    pub fn error_count(&self) -> usize {
        self.ir.parse_errors.len() + self.report.as_ref().map_or(0, |r| r.errors.len())
    }
    pub fn warning_count(&self) -> usize {
        self.report.as_ref().map_or(0, |r| r.warnings.len())
    }
}

pub struct Driver {
    pub conf: Conf,
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(Conf::default())
    }
}

impl Driver {
    pub fn new(conf: Conf) -> Self {
        Driver { conf }
    }
    /// Check a file, picking its surface syntax from the extension.
    pub fn check_file(&self, path: impl Into<PathBuf>) -> Result<CheckedFile> {
        let path = path.into();
        let surface = Surface::from_path(&path)?;
        let source = std::fs::read_to_string(&path).map_err(|err| match err.kind() {
            | io::ErrorKind::NotFound => BuildError::SrcFileNotFound(path.clone()),
            | _ => err.into(),
        })?;
        self.check(surface, &source, Some(Arc::new(path)))
    }
    pub fn check_source(&self, surface: Surface, source: &str) -> Result<CheckedFile> {
        self.check(surface, source, None)
    }
    fn check(
        &self, surface: Surface, source: &str, path: Option<Arc<PathBuf>>,
    ) -> Result<CheckedFile> {
        let ir = surface.parse(source);
        let report = if ir.is_ok() {
            let report = Typechecker::new(&ir)
                .strict(self.conf.strict)
                .max_passes(self.conf.max_passes)
                .run()?;
            Some(report)
        } else {
            log::debug!("skipping the checker: {} parse errors", ir.parse_errors.len());
            None
        };
        Ok(CheckedFile { surface, info: FileInfo::new(source, path), ir, report })
    }
    /// Re-spell a program. Label and type names may change; whitespace has no
    /// room for annotations and drops them.
    pub fn convert(&self, from: Surface, source: &str, to: Surface) -> Result<String> {
        let ir = from.parse(source);
        if !ir.is_ok() {
            return Err(BuildError::ParseErrors(ir.parse_errors));
        }
        if to == Surface::Whitespace && ir.operations.iter().any(|op| op.instruction.is_annotation()) {
            log::warn!("Casts, asserts and strict markers are dropped in whitespace.");
        }
        Ok(to.serialize(&ir))
    }
}
