//! The `builders.toml` manifest: generator settings plus entity declarations.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{EntityDeclaration, Error, Result, error::SourceContext, validate::validate_manifest};

/// Interface implemented by every generated builder unless configured otherwise.
pub const DEFAULT_MARKER: &str = "Kelunik\\Builders\\Builder";

/// Root manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Declared entities, in file order
    #[serde(default)]
    pub entities: Vec<EntityDeclaration>,
}

/// `[generator]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratorConfig {
    /// Fully qualified marker interface name
    pub marker: Option<String>,

    /// Output layout of the generated code
    #[serde(default)]
    pub printer: PrinterStyle,

    /// Output directory, relative to the manifest
    pub output: Option<PathBuf>,

    /// Class names accepted in `@var` annotations besides the declared entities
    #[serde(default)]
    pub known_types: Vec<String>,
}

impl GeneratorConfig {
    /// Marker interface, falling back to [`DEFAULT_MARKER`].
    pub fn marker(&self) -> &str {
        self.marker.as_deref().unwrap_or(DEFAULT_MARKER)
    }
}

/// Supported output layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrinterStyle {
    /// PSR-12: four spaces, one blank line between methods
    #[default]
    Psr,
    /// Nette: tabs, two blank lines between methods
    Nette,
}

impl PrinterStyle {
    /// Returns the style identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrinterStyle::Psr => "psr",
            PrinterStyle::Nette => "nette",
        }
    }
}

impl fmt::Display for PrinterStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrinterStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "psr" | "psr12" => Ok(PrinterStyle::Psr),
            "nette" => Ok(PrinterStyle::Nette),
            _ => Err(format!("unknown printer '{}', expected 'psr' or 'nette'", s)),
        }
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml_str(s, "builders.toml")
    }
}

impl Manifest {
    /// Load a manifest; files ending in `.json` are read as JSON, anything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content, &filename)
        } else {
            Self::from_toml_str(&content, &filename)
        }
    }

    /// Parse TOML with a custom filename for error reporting.
    pub fn from_toml_str(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.toml_error(e))?;
        validate_manifest(&manifest, &ctx)?;
        Ok(manifest)
    }

    /// Parse JSON (as emitted by a reflector) with a custom filename for error reporting.
    pub fn from_json_str(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let manifest: Manifest = serde_json::from_str(content).map_err(|e| ctx.json_error(e))?;
        validate_manifest(&manifest, &ctx)?;
        Ok(manifest)
    }

    /// Find an entity by its qualified name (leading `\` optional, case-insensitive).
    pub fn entity(&self, name: &str) -> Option<&EntityDeclaration> {
        let name = php_builders_core::strip_leading_separator(name);
        self.entities
            .iter()
            .find(|e| e.qualified_name().eq_ignore_ascii_case(name))
    }
}
