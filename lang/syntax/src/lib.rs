/// The four-letter alphabet programs are spelled in.
pub mod symbol;
pub use symbol::*;
/// Instruction catalog and its encodings.
pub mod instr;
pub use instr::*;
/// Signed binary numbers and generated token names.
pub mod number;
pub use number::*;
/// The canonical IR shared by every surface syntax.
pub mod ir;
pub use ir::*;
/// Parse errors carried alongside the IR.
pub mod err;
pub use err::*;
/// Serializers back to each surface syntax.
pub mod fmt;

mod impls;
