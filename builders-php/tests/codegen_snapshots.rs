//! Snapshot tests for PHP builder generation.
//!
//! These tests verify that the generated PHP code matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::str::FromStr;

use php_builders_decl::{
    DefaultValue, EntityDeclaration, Manifest, MethodDeclaration, ParameterDeclaration,
    PrinterStyle, PropertyDeclaration,
};
use php_builders_php::{BuilderGenerator, Generator, LanguageCodegen};

/// Generate the builder for the single entity of a manifest.
fn generate(manifest_toml: &str) -> String {
    let manifest = Manifest::from_str(manifest_toml).expect("Failed to parse manifest");
    let mut files = Generator::new(&manifest).preview();
    assert_eq!(files.len(), 1, "expected exactly one generated file");
    files.remove(0).content
}

fn generate_entity(entity: &EntityDeclaration) -> String {
    BuilderGenerator::new(entity)
        .generate()
        .expect("entity should be eligible")
}

#[test]
fn test_builder_classes_are_skipped() {
    for name in ["FooBuilder", "FooBuilderMethods", "App\\UserBuilder"] {
        let entity = EntityDeclaration::new(name).property(PropertyDeclaration::new("bar"));
        let generator = BuilderGenerator::new(&entity);
        assert!(!generator.should_generate(), "{name}");
        assert_eq!(generator.generate(), None);
    }
}

#[test]
fn test_untyped_property() {
    let code = generate(
        r#"
        [[entities]]
        name = "Foo"

        [[entities.properties]]
        name = "bar"
        "#,
    );

    insta::assert_snapshot!("untyped_property", code);
}

#[test]
fn test_untyped_property_exact_output() {
    let entity = EntityDeclaration::new("Foo").property(PropertyDeclaration::new("bar"));

    assert_eq!(
        generate_entity(&entity),
        r#"<?php

class FooBuilderMethods implements Kelunik\Builders\Builder
{
    private $entity;

    public function __construct()
    {
        $this->entity = new Foo;
    }

    final public function withBar($value)
    {
        $this->entity->bar = $value;

        return $this;
    }

    final public function build(): Foo
    {
        return $this->entity;
    }
}
"#
    );
}

#[test]
fn test_var_annotation_types() {
    let typed = EntityDeclaration::new("Foo")
        .property(PropertyDeclaration::new("bar").doc("/** @var string */"));
    assert!(generate_entity(&typed).contains("final public function withBar(string $value)\n"));

    for annotation in ["string|null", "null|string", "?string"] {
        let nullable = EntityDeclaration::new("Foo").property(
            PropertyDeclaration::new("bar").doc(format!("/** @var {} */", annotation)),
        );
        assert!(
            generate_entity(&nullable).contains("final public function withBar(?string $value)\n"),
            "{annotation}"
        );
    }
}

#[test]
fn test_unknown_annotation_type_is_untyped() {
    let entity = EntityDeclaration::new("Foo")
        .property(PropertyDeclaration::new("bar").doc("/** @var Unknown\\Thing */"));
    assert!(generate_entity(&entity).contains("final public function withBar($value)\n"));
}

#[test]
fn test_private_property_only() {
    let entity = EntityDeclaration::new("Foo").property(PropertyDeclaration::new("bar").private());

    assert_eq!(
        generate_entity(&entity),
        r#"<?php

class FooBuilderMethods implements Kelunik\Builders\Builder
{
    private $entity;

    public function __construct()
    {
        $this->entity = new Foo;
    }

    final public function build(): Foo
    {
        return $this->entity;
    }
}
"#
    );
}

#[test]
fn test_namespaced_entity() {
    let code = generate(
        r#"
        [[entities]]
        name = "App\\Foo"
        "#,
    );

    assert_eq!(
        code,
        r#"<?php

namespace App;

use App;

class FooBuilderMethods implements \Kelunik\Builders\Builder
{
    private $entity;

    public function __construct()
    {
        $this->entity = new App\Foo;
    }

    final public function build(): App\Foo
    {
        return $this->entity;
    }
}
"#
    );
}

#[test]
fn test_setter_with_literal_default() {
    let code = generate(
        r#"
        [[entities]]
        name = "Foo"

        [[entities.methods]]
        name = "setBar"

        [[entities.methods.params]]
        name = "bar"
        type = "?string"
        default = { value = "foo" }
        "#,
    );

    assert!(code.contains(
        "    final public function withBar(?string $value = 'foo')\n    {\n        $this->entity->setBar($value);\n\n        return $this;\n    }\n"
    ));
}

#[test]
fn test_setter_with_constant_default() {
    let code = generate(
        r#"
        [[entities]]
        name = "App\\Foo"

        [[entities.methods]]
        name = "setBar"

        [[entities.methods.params]]
        name = "bar"
        type = "?string"
        default = { constant = "self::X" }
        "#,
    );

    assert!(code.contains("final public function withBar(?string $value = Foo::X)\n"));
}

#[test]
fn test_immutable_entity() {
    let code = generate(
        r#"
        [[entities]]
        name = "App\\Model\\Money"

        [[entities.methods]]
        name = "withAmount"
        [[entities.methods.params]]
        name = "amount"
        type = "int"

        [[entities.methods]]
        name = "withCurrency"
        [[entities.methods.params]]
        name = "currency"
        type = "string"
        default = { value = "EUR" }

        [[entities.methods]]
        name = "setNote"
        [[entities.methods.params]]
        name = "note"
        type = "string"
        nullable = true
        default = "null"

        [[entities.methods]]
        name = "withoutNote"

        [[entities.methods]]
        name = "getAmount"
        "#,
    );

    insta::assert_snapshot!("immutable_entity", code);
}

#[test]
fn test_mutator_with_several_parameters() {
    let entity = EntityDeclaration::new("Period").method(
        MethodDeclaration::new("withRange")
            .param(ParameterDeclaration::new("from").ty("\\DateTimeImmutable"))
            .param(
                ParameterDeclaration::new("to")
                    .ty("?\\DateTimeImmutable")
                    .default(DefaultValue::Null),
            ),
    );

    assert!(generate_entity(&entity).contains(
        "    final public function withRange(DateTimeImmutable $from, ?DateTimeImmutable $to = null)\n    {\n        $this->entity = $this->entity->withRange($from, $to);\n\n        return $this;\n    }\n"
    ));
}

#[test]
fn test_namespaced_known_class() {
    let code = generate(
        r#"
        [[entities]]
        name = "App\\User"

        [[entities.properties]]
        name = "email"
        doc = "/** @var string */"

        [[entities.properties]]
        name = "createdAt"
        doc = """
        /**
         * @var \\DateTimeImmutable|null
         */"""

        [[entities.properties]]
        name = "role"
        type = "App\\Role"
        "#,
    );

    insta::assert_snapshot!("namespaced_known_class", code);
}

#[test]
fn test_nette_printer() {
    let manifest = Manifest::from_str(
        r#"
        [[entities]]
        name = "Foo"

        [[entities.properties]]
        name = "bar"

        [[entities.properties]]
        name = "baz"
        "#,
    )
    .unwrap();
    let files = Generator::new(&manifest)
        .with_printer(PrinterStyle::Nette)
        .preview();

    assert_eq!(
        files[0].content,
        "<?php\n\nclass FooBuilderMethods implements Kelunik\\Builders\\Builder\n{\n\tprivate $entity;\n\n\n\tpublic function __construct()\n\t{\n\t\t$this->entity = new Foo;\n\t}\n\n\n\tfinal public function withBar($value)\n\t{\n\t\t$this->entity->bar = $value;\n\n\t\treturn $this;\n\t}\n\n\n\tfinal public function withBaz($value)\n\t{\n\t\t$this->entity->baz = $value;\n\n\t\treturn $this;\n\t}\n\n\n\tfinal public function build(): Foo\n\t{\n\t\treturn $this->entity;\n\t}\n}\n"
    );
}

#[test]
fn test_output_is_idempotent() {
    let manifest = r#"
        [[entities]]
        name = "App\\Model\\Money"

        [[entities.properties]]
        name = "amount"
        doc = "/** @var int */"

        [[entities.methods]]
        name = "withCurrency"
        [[entities.methods.params]]
        name = "currency"
        type = "string"
    "#;

    assert_eq!(generate(manifest), generate(manifest));
}

#[test]
fn test_output_ends_with_single_newline() {
    let entity = EntityDeclaration::new("App\\Foo");
    let code = generate_entity(&entity);

    assert!(code.ends_with("}\n"));
    assert!(!code.ends_with("\n\n"));
}
