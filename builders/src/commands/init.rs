use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use php_builders_core::{File, WriteResult};

/// Starter manifest written by `builders init`.
const STARTER_MANIFEST: &str = r#"# Entities to generate fluent builders for.

[generator]
# marker = "Kelunik\\Builders\\Builder"
printer = "psr"
output = "generated"
known_types = []

[[entities]]
name = "App\\Model\\User"

[[entities.properties]]
name = "email"
type = "string"

[[entities.properties]]
name = "createdAt"
doc = "/** @var \\DateTimeImmutable|null */"

[[entities.methods]]
name = "setName"

[[entities.methods.params]]
name = "name"
type = "?string"
default = "null"
"#;

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create builders.toml in
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let path = self.dir.join("builders.toml");

        match File::new(&path, STARTER_MANIFEST).if_missing().write()? {
            WriteResult::Written => {
                println!("Created {}", path.display());
                println!();
                println!("Next steps:");
                println!("  builders check -c {}", path.display());
                println!("  builders generate -c {}", path.display());
            }
            WriteResult::Skipped => {
                println!("{} already exists, leaving it untouched", path.display());
            }
        }

        Ok(())
    }
}
