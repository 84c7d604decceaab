//! PHP namespace with `use` imports and name shortening.

use indexmap::IndexMap;
use php_builders_core::{short_name, strip_leading_separator};

use super::PhpClass;

/// Type keywords that are never namespace-qualified.
const BUILTIN_TYPES: &[&str] = &[
    "array", "bool", "callable", "false", "float", "int", "iterable", "mixed", "never", "null",
    "object", "parent", "self", "static", "string", "true", "void",
];

/// Check if a type name is a builtin keyword (case-insensitive)
pub fn is_builtin_type(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    BUILTIN_TYPES.contains(&lower.as_str())
}

/// A namespace containing classes.
///
/// The empty name stands for the global namespace.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    name: String,
    /// alias => fully qualified name
    uses: IndexMap<String, String>,
    classes: Vec<PhpClass>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: strip_leading_separator(&name.into()).to_string(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Import a name under its last segment. Empty names are ignored.
    pub fn add_use(&mut self, name: &str) -> &mut Self {
        let name = strip_leading_separator(name);
        if !name.is_empty() {
            self.uses
                .insert(short_name(name).to_string(), name.to_string());
        }
        self
    }

    /// Imported names, sorted.
    pub fn uses(&self) -> Vec<&str> {
        let mut uses: Vec<&str> = self.uses.values().map(String::as_str).collect();
        uses.sort_unstable_by_key(|u| u.to_ascii_lowercase());
        uses
    }

    pub fn add_class(&mut self, class: PhpClass) -> &mut Self {
        self.classes.push(class);
        self
    }

    pub fn classes(&self) -> &[PhpClass] {
        &self.classes
    }

    /// Shorten a fully qualified class name for use inside this namespace.
    ///
    /// An import covering the name wins (shortest result); otherwise names
    /// below the namespace become relative, and anything else keeps a
    /// leading `\`. In the global namespace names are written without it.
    ///
    /// ```
    /// use php_builders_php::ast::Namespace;
    ///
    /// let mut ns = Namespace::new("App");
    /// ns.add_use("App");
    /// assert_eq!(ns.unresolve("App\\Foo"), "App\\Foo");
    /// assert_eq!(ns.unresolve("Vendor\\Marker"), "\\Vendor\\Marker");
    ///
    /// assert_eq!(Namespace::new("").unresolve("\\Foo"), "Foo");
    /// ```
    pub fn unresolve(&self, name: &str) -> String {
        if name.is_empty() || is_builtin_type(name) {
            return name.to_string();
        }

        let name = strip_leading_separator(name);
        let lower = format!("{}\\", name.to_ascii_lowercase());

        let mut best: Option<String> = None;
        for (alias, original) in &self.uses {
            if lower.starts_with(&format!("{}\\", original.to_ascii_lowercase())) {
                let short = format!("{}{}", alias, &name[original.len()..]);
                if best.as_ref().is_none_or(|b| b.len() > short.len()) {
                    best = Some(short);
                }
            }
        }
        if let Some(best) = best {
            return best;
        }

        let prefix = format!("{}\\", self.name.to_ascii_lowercase());
        if !self.name.is_empty() && lower.starts_with(&prefix) {
            return name[self.name.len() + 1..].to_string();
        }

        if self.name.is_empty() {
            name.to_string()
        } else {
            format!("\\{}", name)
        }
    }

    /// Shorten every `\Fully\Qualified` name in a line of code.
    ///
    /// Only names starting with `\` outside string literals are touched.
    pub fn simplify_names(&self, code: &str) -> String {
        let chars: Vec<char> = code.chars().collect();
        let mut out = String::with_capacity(code.len());
        let mut quote: Option<char> = None;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if let Some(q) = quote {
                out.push(c);
                if c == '\\' && i + 1 < chars.len() {
                    out.push(chars[i + 1]);
                    i += 2;
                    continue;
                }
                if c == q {
                    quote = None;
                }
                i += 1;
                continue;
            }

            if c == '\'' || c == '"' {
                quote = Some(c);
                out.push(c);
                i += 1;
                continue;
            }

            let prev_is_word = i > 0 && is_name_char(chars[i - 1]);
            if c == '\\' && !prev_is_word && chars.get(i + 1).is_some_and(|n| is_name_start(*n)) {
                let start = i;
                i += 1;
                while i < chars.len()
                    && (is_name_char(chars[i])
                        || (chars[i] == '\\'
                            && chars.get(i + 1).is_some_and(|n| is_name_start(*n))))
                {
                    i += 1;
                }
                let name: String = chars[start..i].iter().collect();
                out.push_str(&self.unresolve(&name));
                continue;
            }

            out.push(c);
            i += 1;
        }

        out
    }
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || !c.is_ascii()
}
