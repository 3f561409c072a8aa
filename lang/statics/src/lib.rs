#![allow(clippy::style)]
#![allow(clippy::useless_format)]

//! A flow-sensitive stack type checker for nospace programs.
//!
//! Operations are split into branches, branches expand into a graph of stack
//! effects, and the graph is resolved to a fixpoint. Whatever cannot be
//! resolved is reported, along with warnings about underflows on some paths
//! and unreachable code.

/// The type lattice and the per-check registry of custom types.
pub mod types;
/// Stack effects of each instruction.
pub mod effects;
/// Control-flow branches.
pub mod branch;
/// The effect graph over all branches.
pub mod graph;
/// Fixpoint resolution and warnings.
pub mod resolve;
/// Type errors and warnings reported to the user.
pub mod diag;
pub use diag::*;
/// Failures that abort a check.
pub mod err;
pub use err::*;
/// Entry points.
pub mod tyck;
pub use tyck::*;
