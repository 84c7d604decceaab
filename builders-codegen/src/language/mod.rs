//! Backend abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for code generators
//! - [`GenerateResult`] - Result of code generation
//! - [`PreviewFile`] - Generated file preview

mod traits;

pub use traits::{GenerateResult, LanguageCodegen, PreviewFile, SkippedEntity};
