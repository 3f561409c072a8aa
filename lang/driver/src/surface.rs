use crate::err::{BuildError, Result};
use nospace_surface::{parse_nossembly, parse_nospace, parse_whitespace};
use nospace_syntax::NospaceIR;
use std::{fmt, path::Path, str::FromStr};

/// The three spellings of a program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Nossembly,
    Nospace,
    Whitespace,
}

impl Surface {
    pub const ALL: [Surface; 3] = [Surface::Nossembly, Surface::Nospace, Surface::Whitespace];

    pub fn name(self) -> &'static str {
        match self {
            | Surface::Nossembly => "nossembly",
            | Surface::Nospace => "nospace",
            | Surface::Whitespace => "whitespace",
        }
    }
    pub fn extension(self) -> &'static str {
        match self {
            | Surface::Nossembly => "nsa",
            | Surface::Nospace => "ns",
            | Surface::Whitespace => "ws",
        }
    }
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
        Surface::ALL
            .into_iter()
            .find(|surface| surface.extension() == ext)
            .ok_or_else(|| BuildError::UnknownSurface(path.to_path_buf()))
    }

    pub fn parse(self, source: &str) -> NospaceIR {
        log::debug!("parsing {} bytes of {}", source.len(), self);
        match self {
            | Surface::Nossembly => parse_nossembly(source),
            | Surface::Nospace => parse_nospace(source),
            | Surface::Whitespace => parse_whitespace(source),
        }
    }
    pub fn serialize(self, ir: &NospaceIR) -> String {
        match self {
            | Surface::Nossembly => ir.to_nossembly(),
            | Surface::Nospace => ir.to_nospace(),
            | Surface::Whitespace => ir.to_whitespace(),
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Surface {
    type Err = BuildError;
    fn from_str(s: &str) -> Result<Self> {
        Surface::ALL
            .into_iter()
            .find(|surface| surface.name() == s || surface.extension() == s)
            .ok_or_else(|| BuildError::UnknownSurfaceName(s.to_owned()))
    }
}
