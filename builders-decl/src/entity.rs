//! Reflective view of a PHP class.

use php_builders_core::{short_name, split_qualified, strip_leading_separator};
use serde::Deserialize;

use crate::types::{DefaultValue, TypeHint};

/// Member visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// A class whose instances a builder constructs.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityDeclaration {
    /// Fully qualified class name (e.g. `App\Model\User`).
    pub name: String,

    /// Properties in declaration order.
    #[serde(default)]
    pub properties: Vec<PropertyDeclaration>,

    /// Methods in declaration order.
    #[serde(default)]
    pub methods: Vec<MethodDeclaration>,
}

impl EntityDeclaration {
    /// Create an empty declaration for the given class name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Add a property.
    pub fn property(mut self, property: PropertyDeclaration) -> Self {
        self.properties.push(property);
        self
    }

    /// Add a method.
    pub fn method(mut self, method: MethodDeclaration) -> Self {
        self.methods.push(method);
        self
    }

    /// Class name without a leading `\`.
    pub fn qualified_name(&self) -> &str {
        strip_leading_separator(&self.name)
    }

    /// Namespace of the class; empty for the global namespace.
    pub fn namespace(&self) -> &str {
        split_qualified(&self.name).0
    }

    /// Class name without its namespace.
    pub fn short_name(&self) -> &str {
        short_name(&self.name)
    }
}

/// A class property.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyDeclaration {
    pub name: String,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default, rename = "static")]
    pub is_static: bool,

    /// Structured type, when the reflector knows it.
    #[serde(default, rename = "type")]
    pub ty: Option<TypeHint>,

    /// Raw doc comment (legacy `@var` annotations).
    #[serde(default)]
    pub doc: Option<String>,
}

impl PropertyDeclaration {
    /// Create a public, non-static, untyped property.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            ty: None,
            doc: None,
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn private(self) -> Self {
        self.visibility(Visibility::Private)
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn ty(mut self, ty: impl Into<TypeHint>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Whether the property is a public instance property.
    pub fn is_public_instance(&self) -> bool {
        self.visibility == Visibility::Public && !self.is_static
    }
}

/// A class method.
#[derive(Debug, Clone, Deserialize)]
pub struct MethodDeclaration {
    pub name: String,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default, rename = "static")]
    pub is_static: bool,

    /// Parameters in declaration order.
    #[serde(default)]
    pub params: Vec<ParameterDeclaration>,
}

impl MethodDeclaration {
    /// Create a public, non-static method without parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            params: Vec::new(),
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn param(mut self, param: ParameterDeclaration) -> Self {
        self.params.push(param);
        self
    }

    /// Whether the method is a public instance method.
    pub fn is_public_instance(&self) -> bool {
        self.visibility == Visibility::Public && !self.is_static
    }
}

/// A method parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterDeclaration {
    pub name: String,

    #[serde(default, rename = "type")]
    pub ty: Option<TypeHint>,

    /// Explicit nullability, for reflectors that report it separately from the type.
    #[serde(default)]
    pub nullable: bool,

    #[serde(default)]
    pub default: Option<DefaultValue>,
}

impl ParameterDeclaration {
    /// Create an untyped parameter without a default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            nullable: false,
            default: None,
        }
    }

    pub fn ty(mut self, ty: impl Into<TypeHint>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Declared type with the nullability flag folded in.
    ///
    /// A `null` default makes the type nullable, as PHP does for `string $x = null`.
    pub fn type_hint(&self) -> Option<TypeHint> {
        self.ty.clone().map(|mut ty| {
            ty.nullable |= self.nullable || self.default == Some(DefaultValue::Null);
            ty
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_names() {
        let entity = EntityDeclaration::new("\\App\\Model\\User");
        assert_eq!(entity.qualified_name(), "App\\Model\\User");
        assert_eq!(entity.namespace(), "App\\Model");
        assert_eq!(entity.short_name(), "User");

        let global = EntityDeclaration::new("Foo");
        assert_eq!(global.namespace(), "");
        assert_eq!(global.short_name(), "Foo");
    }

    #[test]
    fn test_public_instance() {
        assert!(PropertyDeclaration::new("bar").is_public_instance());
        assert!(!PropertyDeclaration::new("bar").private().is_public_instance());
        assert!(!PropertyDeclaration::new("bar").static_().is_public_instance());
        assert!(
            !MethodDeclaration::new("setBar")
                .visibility(Visibility::Protected)
                .is_public_instance()
        );
    }

    #[test]
    fn test_type_hint_folds_nullable_flag() {
        let mut param = ParameterDeclaration::new("bar").ty("string");
        assert_eq!(param.type_hint(), Some(TypeHint::new("string")));

        param.nullable = true;
        assert_eq!(param.type_hint(), Some(TypeHint::new("string").nullable()));

        assert_eq!(ParameterDeclaration::new("bar").type_hint(), None);
    }

    #[test]
    fn test_null_default_makes_type_nullable() {
        let param = ParameterDeclaration::new("bar")
            .ty("string")
            .default(DefaultValue::Null);
        assert_eq!(param.type_hint(), Some(TypeHint::new("string").nullable()));

        let param = ParameterDeclaration::new("bar")
            .ty("string")
            .default(DefaultValue::Constant("self::X".into()));
        assert_eq!(param.type_hint(), Some(TypeHint::new("string")));
    }
}
