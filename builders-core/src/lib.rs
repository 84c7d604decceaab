//! Core utilities and types for the PHP builder generator.
//!
//! This crate provides file writing rules and the name helpers shared by
//! the declaration loader and the PHP code generator.

mod file;
mod names;

// File operations
pub use file::{File, FileRules, Overwrite, WriteResult};
// Name utilities
pub use names::{join_qualified, short_name, split_qualified, strip_leading_separator, ucfirst};
