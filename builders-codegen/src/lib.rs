//! Shared code generation utilities for the PHP builder generator.
//!
//! This crate provides language-agnostic abstractions used by the
//! PHP backend (`php-builders-php`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Backend abstractions (LanguageCodegen, PreviewFile, etc.)

pub mod builder;
pub mod language;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use language::{GenerateResult, LanguageCodegen, PreviewFile, SkippedEntity};
