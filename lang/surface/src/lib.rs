/// Logos-based lexer for assembly lines.
pub mod lexer;
/// Parser for the invisible nospace and the whitespace syntaxes.
pub mod raw;
pub use raw::*;
/// Parser for the nossembly assembly syntax, with `#define`/`#if` pragmas.
pub mod assembly;
pub use assembly::*;
/// Checks shared by every parser once the whole program is read.
pub mod validate;

pub use nospace_syntax::{NospaceIR, ParseError, ParseErrorKind};
