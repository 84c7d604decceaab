//! PHP builder generator.
//!
//! Given the declaration of a PHP class (an "entity"), this crate emits a
//! `<Entity>BuilderMethods` class with fluent `with*` methods and a `build`
//! method returning the finished entity.
//!
//! # Usage
//!
//! ```
//! use php_builders_decl::{EntityDeclaration, PropertyDeclaration};
//! use php_builders_php::BuilderGenerator;
//!
//! let entity = EntityDeclaration::new("App\\Foo")
//!     .property(PropertyDeclaration::new("bar").doc("/** @var string */"));
//!
//! let generator = BuilderGenerator::new(&entity);
//! assert!(generator.should_generate());
//! assert_eq!(generator.builder_name(), "App\\FooBuilderMethods");
//!
//! let code = generator.generate().unwrap();
//! assert!(code.contains("final public function withBar(string $value)"));
//! ```
//!
//! # Generated Output
//!
//! - a private `$entity` property initialised by the constructor
//! - `with<Property>` for each public instance property
//! - `with<Suffix>` for each public one-argument `set<Suffix>` method
//! - a pass-through for each public `with*` method of immutable entities
//! - `build()` returning the entity

mod accessor;
mod builder_generator;
mod generator;
mod types;

pub mod ast;
pub mod printer;

pub use accessor::{Accessor, accessors};
pub use builder_generator::{BuilderGenerator, is_eligible};
pub use generator::Generator;
pub use php_builders_codegen::{GenerateResult, LanguageCodegen, PreviewFile, SkippedEntity};
pub use printer::{NettePrinter, Printer, PsrPrinter, printer_for};
pub use types::KnownTypes;
