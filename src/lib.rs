//! Blockfall (workspace facade crate).
//!
//! Re-exports the rules engine as `blockfall::{core,types}` and hosts the headless
//! [`replay`] driver used by the `blockfall-replay` binary.

pub use blockfall_core as core;
pub use blockfall_types as types;

pub mod replay;
