use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use php_builders_decl::Manifest;
use php_builders_php::Generator;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to builders.toml (defaults to ./builders.toml)
    #[arg(short, long, default_value = "builders.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let generator = Generator::new(&manifest);

        println!("✓ {} is valid\n", self.config.display());

        println!("  marker:  {}", manifest.generator.marker());
        println!("  printer: {}\n", manifest.generator.printer);

        let count = manifest.entities.len();
        println!("  {} entit{}:", count, if count == 1 { "y" } else { "ies" });
        for entity in &manifest.entities {
            let builder = generator.builder(entity);
            if builder.should_generate() {
                println!("    {} -> {}", entity.qualified_name(), builder.builder_name());
            } else {
                println!("    {} (skipped: class is a builder itself)", entity.qualified_name());
            }
        }

        Ok(())
    }
}
