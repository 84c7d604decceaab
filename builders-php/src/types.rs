//! Property type resolution.
//!
//! Structured types from the declaration are used when they parse as a type
//! list; anything else leaves the parameter untyped. Older entities only
//! carry a `@var` doc annotation; those types are accepted when they are a
//! scalar keyword or a class the generator knows about.

use std::collections::HashSet;

use php_builders_core::strip_leading_separator;
use php_builders_decl::{Manifest, PropertyDeclaration, TypeHint, is_type_name};

/// Type keywords accepted from `@var` annotations.
const ALLOWED_KEYWORDS: &[&str] = &[
    "int", "bool", "string", "float", "iterable", "callable", "array", "object", "void",
];

/// Classes that ship with PHP.
const BUILTIN_CLASSES: &[&str] = &[
    "DateTime",
    "DateTimeImmutable",
    "DateTimeInterface",
    "DateInterval",
    "Closure",
    "Generator",
    "Traversable",
    "Iterator",
    "IteratorAggregate",
    "ArrayAccess",
    "Countable",
    "Stringable",
    "JsonSerializable",
    "Throwable",
    "Exception",
    "stdClass",
];

/// Class names that may appear as parameter types.
///
/// Lookups ignore case and a leading `\`.
#[derive(Debug, Clone, Default)]
pub struct KnownTypes {
    names: HashSet<String>,
}

impl KnownTypes {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// PHP's builtin classes.
    pub fn builtin() -> Self {
        let mut types = Self::new();
        types.extend(BUILTIN_CLASSES.iter().copied());
        types
    }

    /// Builtin classes, every declared entity and the configured extras.
    pub fn for_manifest(manifest: &Manifest) -> Self {
        let mut types = Self::builtin();
        types.extend(manifest.entities.iter().map(|e| e.name.as_str()));
        types.extend(manifest.generator.known_types.iter().map(String::as_str));
        types
    }

    pub fn insert(&mut self, name: &str) {
        self.names.insert(key(name));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&key(name))
    }
}

impl<'a> Extend<&'a str> for KnownTypes {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

fn key(name: &str) -> String {
    strip_leading_separator(name).to_ascii_lowercase()
}

/// Parameter type for a `with*` method generated from a property.
pub fn property_type(property: &PropertyDeclaration, known: &KnownTypes) -> Option<TypeHint> {
    if let Some(ty) = &property.ty {
        return checked_type(ty, &property.name);
    }

    let ty = TypeHint::parse(var_annotation(property.doc.as_deref()?)?);
    let allowed = ALLOWED_KEYWORDS
        .iter()
        .any(|k| k.eq_ignore_ascii_case(&ty.name))
        || known.contains(&ty.name);

    if allowed {
        Some(ty)
    } else {
        tracing::debug!(property = %property.name, ty = %ty.name, "dropping unknown @var type");
        None
    }
}

/// A structured type, or `None` when it is not a `|`-separated list of names.
pub fn checked_type(ty: &TypeHint, owner: &str) -> Option<TypeHint> {
    if is_type_name(&ty.name) {
        Some(ty.clone())
    } else {
        tracing::debug!(owner, ty = %ty.name, "dropping malformed type");
        None
    }
}

/// The type written after the first `@var` tag of a doc comment.
pub fn var_annotation(doc: &str) -> Option<&str> {
    doc.match_indices("@var")
        .map(|(i, tag)| &doc[i + tag.len()..])
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .find_map(|rest| {
            let rest = rest.trim_start_matches([' ', '\t']);
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            (end > 0).then(|| &rest[..end])
        })
}
