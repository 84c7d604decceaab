use std::path::Path;

use eyre::Result;
use php_builders_codegen::{GenerateResult, LanguageCodegen, PreviewFile, SkippedEntity};
use php_builders_core::{File, WriteResult};
use php_builders_decl::{EntityDeclaration, Manifest, PrinterStyle};

use crate::{BuilderGenerator, KnownTypes};

/// PHP builder generator for every entity of a manifest
pub struct Generator<'a> {
    manifest: &'a Manifest,
    known_types: KnownTypes,
    printer: PrinterStyle,
}

impl LanguageCodegen for Generator<'_> {
    fn file_extension(&self) -> &'static str {
        "php"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.preview_files()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }
}

impl<'a> Generator<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        Self {
            manifest,
            known_types: KnownTypes::for_manifest(manifest),
            printer: manifest.generator.printer,
        }
    }

    /// Override the printer configured in the manifest
    pub fn with_printer(mut self, printer: PrinterStyle) -> Self {
        self.printer = printer;
        self
    }

    /// Builder generator for one entity, using the manifest settings
    pub fn builder<'e>(&'e self, entity: &'e EntityDeclaration) -> BuilderGenerator<'e> {
        BuilderGenerator::new(entity)
            .with_marker(self.manifest.generator.marker())
            .with_known_types(&self.known_types)
            .with_printer(self.printer)
    }

    /// Entities no builder is generated for, with the reason
    pub fn skipped(&self) -> Vec<SkippedEntity> {
        self.manifest
            .entities
            .iter()
            .filter(|e| !self.builder(e).should_generate())
            .map(|e| SkippedEntity {
                name: e.qualified_name().to_string(),
                reason: "class is a builder itself".to_string(),
            })
            .collect()
    }

    /// Path of the builder file, relative to the output directory
    pub fn file_path(&self, builder: &BuilderGenerator<'_>) -> String {
        let name = builder.builder_name().replace('\\', "/");
        format!("{}.{}", name, self.file_extension())
    }

    /// Preview generated files without writing to disk
    fn preview_files(&self) -> Vec<PreviewFile> {
        self.manifest
            .entities
            .iter()
            .filter_map(|entity| {
                let builder = self.builder(entity);
                let content = builder.generate()?;
                Some(PreviewFile {
                    path: self.file_path(&builder),
                    content,
                })
            })
            .collect()
    }

    /// Generate all files into the specified output directory
    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult {
            skipped: self.skipped(),
            ..GenerateResult::default()
        };

        for skipped in &result.skipped {
            tracing::info!(entity = %skipped.name, reason = %skipped.reason, "skipped");
        }

        for file in self.preview_files() {
            let written = File::new(output_dir.join(&file.path), file.content).write()?;
            if written == WriteResult::Written {
                tracing::info!(path = %file.path, "generated builder");
                result.written.push(file.path);
            }
        }

        Ok(result)
    }
}
