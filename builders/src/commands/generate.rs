use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use php_builders_decl::{Manifest, PrinterStyle};
use php_builders_php::{Generator, LanguageCodegen};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to builders.toml (defaults to ./builders.toml)
    #[arg(short, long, default_value = "builders.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to `generator.output`, relative to the manifest)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output layout, overriding `generator.printer` (psr or nette)
    #[arg(long)]
    pub printer: Option<PrinterStyle>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();

        let mut generator = Generator::new(&manifest);
        if let Some(printer) = self.printer {
            generator = generator.with_printer(printer);
        }

        if self.dry_run {
            self.run_preview(&generator)
        } else {
            self.run_generation(&generator, &manifest)
        }
    }

    fn run_generation(&self, generator: &Generator, manifest: &Manifest) -> Result<()> {
        let output_dir = self.output_dir(manifest);
        tracing::debug!(output = %output_dir.display(), "generating builders");

        let result = generator
            .generate(&output_dir)
            .wrap_err("Failed to generate code")?;

        println!("Generated: {}/", output_dir.display());
        for path in &result.written {
            println!("  + {}", path);
        }

        if !result.skipped.is_empty() {
            println!();
            println!("Skipped:");
            for skipped in &result.skipped {
                println!("  - {} ({})", skipped.name, skipped.reason);
            }
        }

        Ok(())
    }

    fn run_preview(&self, generator: &Generator) -> Result<()> {
        let files = generator.preview();

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }

    /// `--output`, else `generator.output` next to the manifest, else the manifest's directory.
    fn output_dir(&self, manifest: &Manifest) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }

        let base = self
            .config
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        match &manifest.generator.output {
            Some(output) => base.join(output),
            None => base.to_path_buf(),
        }
    }
}
