//! Entity declarations for the PHP builder generator.
//!
//! A declaration is the reflective view of one PHP class: its namespace,
//! properties and methods. Declarations are loaded from a `builders.toml`
//! manifest, or from JSON emitted by an external reflector.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod entity;
mod error;
mod manifest;
mod types;
mod validate;

pub use entity::{
    EntityDeclaration, MethodDeclaration, ParameterDeclaration, PropertyDeclaration, Visibility,
};
pub use error::{Error, Result};
pub use manifest::{DEFAULT_MARKER, GeneratorConfig, Manifest, PrinterStyle};
pub use types::{DefaultValue, TypeHint, Value};
pub use validate::{is_identifier, is_reserved_class_name, is_type_name};
