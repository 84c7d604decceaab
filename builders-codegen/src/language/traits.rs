//! Code generation traits.

use std::path::Path;

use eyre::Result;

/// Trait for target-language code generators.
pub trait LanguageCodegen {
    /// File extension for generated source files (e.g., "php")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written, relative to the output directory
    pub written: Vec<String>,
    /// Entities for which no file was generated
    pub skipped: Vec<SkippedEntity>,
}

/// An entity the generator declined to produce a file for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntity {
    /// Fully qualified entity name
    pub name: String,
    /// Human readable reason
    pub reason: String,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
