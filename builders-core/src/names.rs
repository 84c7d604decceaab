//! Helpers for PHP class and namespace names.

/// Namespace separator used by PHP.
const SEPARATOR: char = '\\';

/// Uppercase the first character if it is ASCII (e.g., "fooBar" -> "FooBar").
pub fn ucfirst(s: &str) -> String {
    let mut out = s.to_string();
    if let Some(first) = out.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    out
}

/// Remove a single leading `\` from a name, if any.
pub fn strip_leading_separator(name: &str) -> &str {
    name.strip_prefix(SEPARATOR).unwrap_or(name)
}

/// Split a qualified name into its namespace and short name.
///
/// The namespace is empty for names in the global namespace.
///
/// ```
/// use php_builders_core::split_qualified;
///
/// assert_eq!(split_qualified("App\\Model\\User"), ("App\\Model", "User"));
/// assert_eq!(split_qualified("User"), ("", "User"));
/// ```
pub fn split_qualified(name: &str) -> (&str, &str) {
    let name = strip_leading_separator(name);
    match name.rfind(SEPARATOR) {
        Some(pos) => (&name[..pos], &name[pos + 1..]),
        None => ("", name),
    }
}

/// The last segment of a qualified name.
pub fn short_name(name: &str) -> &str {
    split_qualified(name).1
}

/// Join a namespace and a short name; the global namespace yields the bare name.
pub fn join_qualified(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{}{}{}", namespace, SEPARATOR, name)
    }
}
