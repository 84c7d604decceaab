//! PHP class builder.

use indexmap::IndexMap;
use php_builders_decl::Visibility;

use super::Method;

/// A class property (without a default value).
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub visibility: Visibility,
}

impl Property {
    pub fn private(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Private,
        }
    }
}

/// A class definition.
///
/// Methods are keyed by their lowercased name, since PHP method names are
/// case-insensitive: adding a method whose name is already taken replaces
/// the existing one at its original position.
#[derive(Debug, Clone, Default)]
pub struct PhpClass {
    pub name: String,
    /// Implemented interfaces, fully qualified.
    pub implements: Vec<String>,
    pub properties: Vec<Property>,
    methods: IndexMap<String, Method>,
}

impl PhpClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn implement(mut self, interface: impl Into<String>) -> Self {
        self.implements.push(interface.into());
        self
    }

    pub fn add_property(&mut self, property: Property) -> &mut Self {
        self.properties.push(property);
        self
    }

    /// Add a method, replacing any existing method of the same name.
    pub fn add_method(&mut self, method: Method) -> &mut Self {
        let key = method.name.to_ascii_lowercase();
        if let Some(previous) = self.methods.insert(key, method) {
            tracing::debug!(method = %previous.name, "replaced generated method");
        }
        self
    }

    /// Methods in insertion order.
    pub fn methods(&self) -> impl ExactSizeIterator<Item = &Method> {
        self.methods.values()
    }

    /// Look up a method by name (case-insensitive).
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.get(&name.to_ascii_lowercase())
    }
}
