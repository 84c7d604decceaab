//! Classification of entity members into builder accessors.

use php_builders_decl::{EntityDeclaration, MethodDeclaration, PropertyDeclaration};

/// An entity member the builder exposes a `with*` method for.
#[derive(Debug, Clone, Copy)]
pub enum Accessor<'a> {
    /// Public instance property, assigned directly.
    Field(&'a PropertyDeclaration),
    /// Public `setX($value)` method.
    Setter(&'a MethodDeclaration),
    /// Public `withX(...)` method returning a modified copy.
    Mutator(&'a MethodDeclaration),
}

impl<'a> Accessor<'a> {
    /// Classify a method, if it is an accessor at all.
    pub fn for_method(method: &'a MethodDeclaration) -> Option<Self> {
        if !method.is_public_instance() {
            return None;
        }
        if method.name.starts_with("set") && method.params.len() == 1 {
            Some(Self::Setter(method))
        } else if method.name.starts_with("with") && !method.params.is_empty() {
            Some(Self::Mutator(method))
        } else {
            None
        }
    }

    /// Name of the generated builder method.
    pub fn method_name(&self) -> String {
        match self {
            Self::Field(property) => format!("with{}", php_builders_core::ucfirst(&property.name)),
            Self::Setter(method) => format!("with{}", &method.name["set".len()..]),
            Self::Mutator(method) => method.name.clone(),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Field(_) => 0,
            Self::Setter(_) => 1,
            Self::Mutator(_) => 2,
        }
    }
}

/// All accessors of an entity: fields, then setters, then mutators, each
/// group in declaration order.
pub fn accessors(entity: &EntityDeclaration) -> Vec<Accessor<'_>> {
    let mut found: Vec<Accessor<'_>> = entity
        .properties
        .iter()
        .filter(|p| p.is_public_instance())
        .map(Accessor::Field)
        .chain(entity.methods.iter().filter_map(Accessor::for_method))
        .collect();
    found.sort_by_key(Accessor::rank);
    found
}

#[cfg(test)]
mod tests {
    use php_builders_decl::{ParameterDeclaration, Visibility};

    use super::*;

    fn names(entity: &EntityDeclaration) -> Vec<String> {
        accessors(entity).iter().map(Accessor::method_name).collect()
    }

    #[test]
    fn test_order_is_by_kind_then_declaration() {
        let entity = EntityDeclaration::new("Foo")
            .method(MethodDeclaration::new("withName").param(ParameterDeclaration::new("name")))
            .method(MethodDeclaration::new("setB").param(ParameterDeclaration::new("b")))
            .property(PropertyDeclaration::new("z"))
            .method(MethodDeclaration::new("setA").param(ParameterDeclaration::new("a")))
            .property(PropertyDeclaration::new("y"));

        assert_eq!(names(&entity), ["withZ", "withY", "withB", "withA", "withName"]);
    }

    #[test]
    fn test_non_accessors_are_ignored() {
        let entity = EntityDeclaration::new("Foo")
            .property(PropertyDeclaration::new("hidden").private())
            .property(PropertyDeclaration::new("shared").static_())
            .method(MethodDeclaration::new("setNothing"))
            .method(
                MethodDeclaration::new("setPair")
                    .param(ParameterDeclaration::new("a"))
                    .param(ParameterDeclaration::new("b")),
            )
            .method(MethodDeclaration::new("withNothing"))
            .method(
                MethodDeclaration::new("setHidden")
                    .visibility(Visibility::Private)
                    .param(ParameterDeclaration::new("v")),
            )
            .method(
                MethodDeclaration::new("withShared")
                    .static_()
                    .param(ParameterDeclaration::new("v")),
            )
            .method(MethodDeclaration::new("getBar"));

        assert!(accessors(&entity).is_empty());
    }

    #[test]
    fn test_setter_keeps_suffix_case() {
        let entity = EntityDeclaration::new("Foo")
            .method(MethodDeclaration::new("set_bar").param(ParameterDeclaration::new("v")))
            .method(MethodDeclaration::new("settings").param(ParameterDeclaration::new("v")));

        assert_eq!(names(&entity), ["with_bar", "withtings"]);
    }

    #[test]
    fn test_field_names_uppercase_ascii_only() {
        let entity = EntityDeclaration::new("Foo")
            .property(PropertyDeclaration::new("\u{df}ig"))
            .property(PropertyDeclaration::new("stra\u{df}e"));

        assert_eq!(names(&entity), ["with\u{df}ig", "withStra\u{df}e"]);
    }

    #[test]
    fn test_multi_param_with_is_mutator() {
        let entity = EntityDeclaration::new("Foo").method(
            MethodDeclaration::new("withRange")
                .param(ParameterDeclaration::new("from"))
                .param(ParameterDeclaration::new("to")),
        );

        assert!(matches!(accessors(&entity)[..], [Accessor::Mutator(_)]));
    }
}
