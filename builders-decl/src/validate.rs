//! Validation of PHP names in a declaration manifest.

use std::collections::HashSet;

use php_builders_core::strip_leading_separator;

use crate::{EntityDeclaration, Manifest, Result, TypeHint, error::SourceContext};

/// Names PHP does not accept as class names.
/// Source: https://www.php.net/manual/en/reserved.other-reserved-words.php
pub(crate) const RESERVED_CLASS_NAMES: &[&str] = &[
    // Type names
    "array", "bool", "callable", "false", "float", "int", "iterable", "mixed", "never", "null",
    "object", "string", "true", "void",
    // Relative class references
    "parent", "self", "static",
    // Keywords that cannot name a class
    "abstract", "and", "as", "break", "case", "catch", "class", "clone", "const", "continue",
    "declare", "default", "do", "echo", "else", "elseif", "empty", "enddeclare", "endfor",
    "endforeach", "endif", "endswitch", "endwhile", "enum", "eval", "exit", "extends", "final",
    "finally", "fn", "for", "foreach", "function", "global", "goto", "if", "implements",
    "include", "instanceof", "insteadof", "interface", "isset", "list", "match", "namespace",
    "new", "or", "print", "private", "protected", "public", "readonly", "require", "return",
    "switch", "throw", "trait", "try", "unset", "use", "var", "while", "xor", "yield",
];

/// Check if a name is reserved as a class name (case-insensitive)
pub fn is_reserved_class_name(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    RESERVED_CLASS_NAMES.contains(&lower.as_str())
}

/// Check if a name is a valid PHP label.
///
/// A label starts with a letter, underscore or non-ASCII byte, followed by
/// letters, digits, underscores or non-ASCII bytes.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || !c.is_ascii() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || !c.is_ascii())
}

/// Check if a type is a `|`-separated list of keywords or (possibly qualified) class names.
///
/// ```
/// use php_builders_decl::is_type_name;
///
/// assert!(is_type_name("\\DateTimeImmutable|int"));
/// assert!(!is_type_name("string[]"));
/// ```
pub fn is_type_name(ty: &str) -> bool {
    ty.split('|').all(|part| {
        let part = strip_leading_separator(part.trim());
        !part.is_empty() && part.split('\\').all(is_identifier)
    })
}

fn validate_type(ty: Option<&TypeHint>, ctx: &SourceContext) -> Result<()> {
    match ty {
        Some(ty) if !is_type_name(&ty.name) => Err(ctx.invalid_identifier_error(&ty.name, "type")),
        _ => Ok(()),
    }
}

/// Validate every name in a parsed manifest.
pub(crate) fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let mut seen = HashSet::new();

    if let Some(marker) = &manifest.generator.marker {
        validate_class_name(marker, "marker interface", ctx)?;
    }
    for known in &manifest.generator.known_types {
        validate_class_name(known, "known type", ctx)?;
    }

    for entity in &manifest.entities {
        validate_entity(entity, ctx)?;

        if !seen.insert(entity.qualified_name().to_ascii_lowercase()) {
            return Err(ctx.duplicate_entity_error(entity.qualified_name()));
        }
    }

    Ok(())
}

fn validate_entity(entity: &EntityDeclaration, ctx: &SourceContext) -> Result<()> {
    validate_class_name(&entity.name, "entity", ctx)?;

    for property in &entity.properties {
        if !is_identifier(&property.name) {
            return Err(ctx.invalid_identifier_error(&property.name, "property"));
        }
        validate_type(property.ty.as_ref(), ctx)?;
    }

    for method in &entity.methods {
        if !is_identifier(&method.name) {
            return Err(ctx.invalid_identifier_error(&method.name, "method"));
        }

        let mut params = HashSet::new();
        for param in &method.params {
            if !is_identifier(&param.name) {
                return Err(ctx.invalid_identifier_error(&param.name, "parameter"));
            }
            validate_type(param.ty.as_ref(), ctx)?;
            if param.name == "this" {
                return Err(ctx.validation_error(
                    format!("'$this' cannot be a parameter of '{}'", method.name),
                    &param.name,
                ));
            }
            if !params.insert(param.name.as_str()) {
                return Err(ctx.validation_error(
                    format!(
                        "duplicate parameter '${}' in method '{}'",
                        param.name, method.name
                    ),
                    &param.name,
                ));
            }
            if let Some(constant) = param.default.as_ref().and_then(|d| d.constant_name()) {
                if !is_identifier(constant) {
                    return Err(ctx.invalid_identifier_error(constant, "constant"));
                }
            }
        }
    }

    Ok(())
}

/// Validate a (possibly qualified) class name.
fn validate_class_name(name: &str, context: &str, ctx: &SourceContext) -> Result<()> {
    let qualified = strip_leading_separator(name);
    if qualified.is_empty() || !qualified.split('\\').all(is_identifier) {
        return Err(ctx.invalid_identifier_error(name, context));
    }

    let short = qualified.rsplit('\\').next().unwrap_or(qualified);
    if is_reserved_class_name(short) {
        return Err(ctx.reserved_name_error(name));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("bar"));
        assert!(is_identifier("_bar2"));
        assert!(is_identifier("withÜmlaut"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2bar"));
        assert!(!is_identifier("bar-baz"));
        assert!(!is_identifier("$bar"));
    }

    #[test]
    fn test_is_type_name() {
        assert!(is_type_name("string"));
        assert!(is_type_name("\\App\\Money"));
        assert!(is_type_name("int|string"));
        assert!(is_type_name("\u{212A}a\\Bar"));
        assert!(!is_type_name(""));
        assert!(!is_type_name("string[]"));
        assert!(!is_type_name("int|"));
        assert!(!is_type_name("App\\"));
        assert!(!is_type_name("int $x) {} function evil("));
    }

    #[test]
    fn test_reserved_class_names() {
        assert!(is_reserved_class_name("String"));
        assert!(is_reserved_class_name("static"));
        assert!(!is_reserved_class_name("User"));
    }

    #[test]
    fn test_validate_class_name() {
        let ctx = SourceContext::new("", "builders.toml");
        assert!(validate_class_name("\\App\\Foo", "entity", &ctx).is_ok());
        assert!(validate_class_name("Foo", "entity", &ctx).is_ok());
        assert!(validate_class_name("App\\\\Foo", "entity", &ctx).is_err());
        assert!(validate_class_name("App\\", "entity", &ctx).is_err());
        assert!(validate_class_name("App\\List", "entity", &ctx).is_err());
    }
}
