//! Builder class synthesis for a single entity.

use std::borrow::Cow;

use php_builders_core::join_qualified;
use php_builders_decl::{
    DEFAULT_MARKER, DefaultValue, EntityDeclaration, MethodDeclaration, ParameterDeclaration,
    PrinterStyle, PropertyDeclaration, TypeHint,
};

use crate::{
    accessor::{Accessor, accessors},
    ast::{Literal, Method, Namespace, Parameter, PhpClass, Property},
    printer::printer_for,
    types::{KnownTypes, checked_type, property_type},
};

/// Suffix appended to the entity name to form the builder class name.
const BUILDER_SUFFIX: &str = "BuilderMethods";

/// Whether a builder should be generated for a class of this name.
///
/// Builders themselves (`*Builder`, `*BuilderMethods`) are skipped.
pub fn is_eligible(name: &str) -> bool {
    !(name.ends_with(BUILDER_SUFFIX) || name.ends_with("Builder"))
}

/// Generates the `<Entity>BuilderMethods` class for one entity.
#[derive(Debug, Clone)]
pub struct BuilderGenerator<'a> {
    entity: &'a EntityDeclaration,
    marker: Cow<'a, str>,
    known_types: Cow<'a, KnownTypes>,
    printer: PrinterStyle,
}

impl<'a> BuilderGenerator<'a> {
    /// Generator with the default marker, PSR layout, and the builtin classes
    /// plus the entity itself as known types.
    pub fn new(entity: &'a EntityDeclaration) -> Self {
        let mut known_types = KnownTypes::builtin();
        known_types.insert(&entity.name);

        Self {
            entity,
            marker: Cow::Borrowed(DEFAULT_MARKER),
            known_types: Cow::Owned(known_types),
            printer: PrinterStyle::default(),
        }
    }

    /// Interface the builder implements.
    pub fn with_marker(mut self, marker: impl Into<Cow<'a, str>>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Classes accepted from `@var` annotations.
    pub fn with_known_types(mut self, known_types: &'a KnownTypes) -> Self {
        self.known_types = Cow::Borrowed(known_types);
        self
    }

    pub fn with_printer(mut self, printer: PrinterStyle) -> Self {
        self.printer = printer;
        self
    }

    pub fn entity(&self) -> &EntityDeclaration {
        self.entity
    }

    pub fn should_generate(&self) -> bool {
        is_eligible(&self.entity.name)
    }

    /// Builder class name without namespace.
    pub fn builder_short_name(&self) -> String {
        format!("{}{}", self.entity.short_name(), BUILDER_SUFFIX)
    }

    /// Fully qualified builder class name.
    pub fn builder_name(&self) -> String {
        join_qualified(self.entity.namespace(), &self.builder_short_name())
    }

    /// PHP source of the builder, or `None` if the entity is a builder itself.
    pub fn generate(&self) -> Option<String> {
        if !self.should_generate() {
            tracing::debug!(entity = %self.entity.name, "not generating a builder for a builder");
            return None;
        }
        Some(printer_for(self.printer).print_file(&self.build_namespace()))
    }

    /// The builder class wrapped in the entity's namespace.
    pub fn build_namespace(&self) -> Namespace {
        let mut namespace = Namespace::new(self.entity.namespace());
        namespace.add_use(self.entity.namespace());
        namespace.add_class(self.build_class());
        namespace
    }

    /// The builder class.
    pub fn build_class(&self) -> PhpClass {
        let entity_type = format!("\\{}", self.entity.qualified_name());

        let mut class = PhpClass::new(self.builder_short_name()).implement(self.marker.as_ref());
        class.add_property(Property::private("entity"));
        class.add_method(
            Method::new("__construct").body(format!("$this->entity = new {};", entity_type)),
        );

        for accessor in accessors(self.entity) {
            class.add_method(self.accessor_method(&accessor));
        }

        class.add_method(
            Method::new("build")
                .final_()
                .returns(TypeHint::new(entity_type))
                .body("return $this->entity;"),
        );
        class
    }

    fn accessor_method(&self, accessor: &Accessor<'_>) -> Method {
        let method = Method::new(accessor.method_name()).final_();
        match accessor {
            Accessor::Field(property) => self.field_method(method, property),
            Accessor::Setter(setter) => self.setter_method(method, setter),
            Accessor::Mutator(mutator) => self.mutator_method(method, mutator),
        }
    }

    fn field_method(&self, method: Method, property: &PropertyDeclaration) -> Method {
        method
            .param(Parameter::new("value").ty(property_type(property, &self.known_types)))
            .body(format!(
                "$this->entity->{} = $value;\n\nreturn $this;",
                property.name
            ))
    }

    fn setter_method(&self, method: Method, setter: &MethodDeclaration) -> Method {
        let params = setter
            .params
            .iter()
            .map(|p| self.parameter(p).with_name("value"));
        method.params(params).body(format!(
            "$this->entity->{}($value);\n\nreturn $this;",
            setter.name
        ))
    }

    fn mutator_method(&self, method: Method, mutator: &MethodDeclaration) -> Method {
        let args: Vec<String> = mutator.params.iter().map(|p| format!("${}", p.name)).collect();
        method
            .params(mutator.params.iter().map(|p| self.parameter(p)))
            .body(format!(
                "$this->entity = $this->entity->{}({});\n\nreturn $this;",
                mutator.name,
                args.join(", ")
            ))
    }

    fn parameter(&self, param: &ParameterDeclaration) -> Parameter {
        Parameter::new(&param.name)
            .ty(param.type_hint().and_then(|ty| checked_type(&ty, &param.name)))
            .default(param.default.as_ref().map(|d| self.default_literal(d)))
    }

    /// Constants are referenced through the entity class, whatever their visibility.
    fn default_literal(&self, default: &DefaultValue) -> Literal {
        match default {
            DefaultValue::Null => Literal::raw("null"),
            DefaultValue::Value(value) => Literal::dump(value),
            DefaultValue::Constant(_) => Literal::raw(format!(
                "{}::{}",
                self.entity.short_name(),
                default.constant_name().unwrap_or_default()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use php_builders_decl::Value;

    use super::*;

    #[test]
    fn test_is_eligible() {
        assert!(is_eligible("Foo"));
        assert!(is_eligible("App\\Foo"));
        assert!(is_eligible("Builders"));
        assert!(is_eligible("FooBuildermethods"));
        assert!(!is_eligible("FooBuilder"));
        assert!(!is_eligible("FooBuilderMethods"));
        assert!(!is_eligible("App\\Builder"));
    }

    #[test]
    fn test_builder_names() {
        let entity = EntityDeclaration::new("\\App\\Model\\User");
        let generator = BuilderGenerator::new(&entity);
        assert_eq!(generator.builder_short_name(), "UserBuilderMethods");
        assert_eq!(generator.builder_name(), "App\\Model\\UserBuilderMethods");

        let global = EntityDeclaration::new("Foo");
        assert_eq!(BuilderGenerator::new(&global).builder_name(), "FooBuilderMethods");
    }

    #[test]
    fn test_ineligible_entity_generates_nothing() {
        let entity = EntityDeclaration::new("FooBuilder");
        assert_eq!(BuilderGenerator::new(&entity).generate(), None);
    }

    #[test]
    fn test_class_shape() {
        let entity = EntityDeclaration::new("Foo")
            .property(PropertyDeclaration::new("bar"))
            .method(MethodDeclaration::new("setBaz").param(ParameterDeclaration::new("baz")));
        let class = BuilderGenerator::new(&entity).build_class();

        assert_eq!(class.name, "FooBuilderMethods");
        assert_eq!(class.implements, [DEFAULT_MARKER]);
        let names: Vec<_> = class.methods().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["__construct", "withBar", "withBaz", "build"]);
        assert!(class.methods().skip(1).all(|m| m.is_final));
        assert!(!class.method("__construct").unwrap().is_final);
    }

    #[test]
    fn test_setter_parameter_is_renamed() {
        let entity = EntityDeclaration::new("Foo").method(
            MethodDeclaration::new("setBar").param(
                ParameterDeclaration::new("bar")
                    .ty("?string")
                    .default(DefaultValue::Value(Value::String("foo".into()))),
            ),
        );
        let class = BuilderGenerator::new(&entity).build_class();
        let method = class.method("withBar").unwrap();

        assert_eq!(method.params.len(), 1);
        assert_eq!(method.params[0].name, "value");
        assert_eq!(method.params[0].ty, Some(TypeHint::new("string").nullable()));
        assert_eq!(method.params[0].default, Some(Literal::raw("'foo'")));
        assert_eq!(method.body[0], "$this->entity->setBar($value);");
    }

    #[test]
    fn test_constant_default_uses_entity_name() {
        let entity = EntityDeclaration::new("App\\Foo").method(
            MethodDeclaration::new("setBar").param(
                ParameterDeclaration::new("bar").default(DefaultValue::Constant("self::X".into())),
            ),
        );
        let class = BuilderGenerator::new(&entity).build_class();

        assert_eq!(
            class.method("withBar").unwrap().params[0].default,
            Some(Literal::raw("Foo::X"))
        );
    }

    #[test]
    fn test_setter_replaces_field_method() {
        let entity = EntityDeclaration::new("Foo")
            .property(PropertyDeclaration::new("bar"))
            .property(PropertyDeclaration::new("baz"))
            .method(MethodDeclaration::new("setBar").param(ParameterDeclaration::new("bar")));
        let class = BuilderGenerator::new(&entity).build_class();

        let names: Vec<_> = class.methods().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["__construct", "withBar", "withBaz", "build"]);
        assert_eq!(
            class.method("withBar").unwrap().body[0],
            "$this->entity->setBar($value);"
        );
    }

    #[test]
    fn test_null_default_prints_nullable_type() {
        let entity = EntityDeclaration::new("Foo").method(
            MethodDeclaration::new("setBar").param(
                ParameterDeclaration::new("bar")
                    .ty("string")
                    .default(DefaultValue::Null),
            ),
        );
        let code = BuilderGenerator::new(&entity).generate().unwrap();

        assert!(code.contains("final public function withBar(?string $value = null)\n"));
    }

    #[test]
    fn test_malformed_parameter_type_is_dropped() {
        let entity = EntityDeclaration::new("Foo").method(
            MethodDeclaration::new("setBar")
                .param(ParameterDeclaration::new("bar").ty("int $x) {} function evil(")),
        );
        let class = BuilderGenerator::new(&entity).build_class();

        assert_eq!(class.method("withBar").unwrap().params[0].ty, None);
    }

    #[test]
    fn test_non_ascii_type_in_similar_namespace() {
        let entity = EntityDeclaration::new("Ka\\Foo").method(
            MethodDeclaration::new("setBar")
                .param(ParameterDeclaration::new("bar").ty("\u{212A}a\\Bar")),
        );
        let code = BuilderGenerator::new(&entity).generate().unwrap();

        assert!(code.contains("withBar(\\\u{212A}a\\Bar $value)"));
    }

    #[test]
    fn test_custom_marker() {
        let entity = EntityDeclaration::new("Foo");
        let class = BuilderGenerator::new(&entity)
            .with_marker("Acme\\Buildable")
            .build_class();
        assert_eq!(class.implements, ["Acme\\Buildable"]);
    }
}
