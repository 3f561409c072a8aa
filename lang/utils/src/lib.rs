#![allow(clippy::style)]
#![allow(clippy::useless_format)]

/// Typed arenas and the bijective token table.
pub mod arena;
/// Source positions and files.
pub mod span;
