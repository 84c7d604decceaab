//! Printing PHP syntax trees to source text.
//!
//! A [`Printer`] decides indentation and vertical spacing; everything else
//! (member order, name shortening against the namespace imports, parameter
//! wrapping) is shared by all printers.

mod nette;
mod psr;

pub use nette::NettePrinter;
use php_builders_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};
use php_builders_decl::{PrinterStyle, TypeHint, Visibility};
pub use psr::PsrPrinter;

use crate::ast::{Method, Namespace, Parameter, PhpClass};

/// Parameter lists longer than this are written one parameter per line.
const WRAP_LENGTH: usize = 120;

/// Layout settings for generated PHP files.
pub trait Printer {
    /// Indentation for one nesting level.
    fn indent(&self) -> Indent;

    /// Blank lines between methods (and between properties and methods).
    fn lines_between_methods(&self) -> usize;

    /// Print a complete file: `<?php` marker followed by the namespace.
    fn print_file(&self, namespace: &Namespace) -> String {
        let mut builder = CodeBuilder::new(self.indent());
        builder.push_line("<?php").push_blank();
        builder.emit(&NamespaceLayout {
            namespace,
            spacing: self.lines_between_methods(),
        });
        builder.build()
    }
}

/// Printer for a configured style.
pub fn printer_for(style: PrinterStyle) -> Box<dyn Printer> {
    match style {
        PrinterStyle::Psr => Box::new(PsrPrinter),
        PrinterStyle::Nette => Box::new(NettePrinter),
    }
}

/// Render a type hint relative to a namespace.
pub fn print_type(ty: &TypeHint, namespace: &Namespace) -> String {
    let joined = ty
        .name
        .split('|')
        .map(|part| namespace.unresolve(part.trim()))
        .collect::<Vec<_>>()
        .join("|");

    let implicit_null = matches!(ty.name.to_ascii_lowercase().as_str(), "mixed" | "null");
    match (ty.nullable && !implicit_null, ty.is_union()) {
        (false, _) => joined,
        (true, true) => format!("{}|null", joined),
        (true, false) => format!("?{}", joined),
    }
}

fn visibility_keyword(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Public => "public",
        Visibility::Protected => "protected",
        Visibility::Private => "private",
    }
}

struct NamespaceLayout<'a> {
    namespace: &'a Namespace,
    spacing: usize,
}

impl Renderable for NamespaceLayout<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let ns = self.namespace;
        let mut fragments = Vec::new();

        if !ns.name().is_empty() {
            fragments.push(CodeFragment::line(format!("namespace {};", ns.name())));
            fragments.push(CodeFragment::Blank);
        }

        let uses = ns.uses();
        if !uses.is_empty() {
            fragments.extend(uses.iter().map(|u| CodeFragment::line(format!("use {};", u))));
            fragments.push(CodeFragment::Blank);
        }

        for (i, class) in ns.classes().iter().enumerate() {
            if i > 0 {
                fragments.push(CodeFragment::Blank);
            }
            fragments.extend(
                ClassLayout {
                    class,
                    namespace: ns,
                    spacing: self.spacing,
                }
                .to_fragments(),
            );
        }

        fragments
    }
}

struct ClassLayout<'a> {
    class: &'a PhpClass,
    namespace: &'a Namespace,
    spacing: usize,
}

impl ClassLayout<'_> {
    fn header(&self) -> String {
        let mut header = format!("class {}", self.class.name);
        if !self.class.implements.is_empty() {
            let interfaces: Vec<String> = self
                .class
                .implements
                .iter()
                .map(|i| self.namespace.unresolve(i))
                .collect();
            header.push_str(" implements ");
            header.push_str(&interfaces.join(", "));
        }
        header
    }

    fn separator(&self) -> impl Iterator<Item = CodeFragment> {
        std::iter::repeat_n(CodeFragment::Blank, self.spacing)
    }
}

impl Renderable for ClassLayout<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut members = Vec::new();

        for property in &self.class.properties {
            members.push(CodeFragment::line(format!(
                "{} ${};",
                visibility_keyword(property.visibility),
                property.name
            )));
        }

        for (i, method) in self.class.methods().enumerate() {
            if i > 0 || !self.class.properties.is_empty() {
                members.extend(self.separator());
            }
            members.extend(
                MethodLayout {
                    method,
                    namespace: self.namespace,
                }
                .to_fragments(),
            );
        }

        vec![
            CodeFragment::line(self.header()),
            CodeFragment::block("{", members, Some("}".to_string())),
        ]
    }
}

struct MethodLayout<'a> {
    method: &'a Method,
    namespace: &'a Namespace,
}

impl MethodLayout<'_> {
    fn prefix(&self) -> String {
        let final_kw = if self.method.is_final { "final " } else { "" };
        format!(
            "{}{} function {}",
            final_kw,
            visibility_keyword(self.method.visibility),
            self.method.name
        )
    }

    fn param(&self, param: &Parameter) -> String {
        let mut out = String::new();
        if let Some(ty) = &param.ty {
            out.push_str(&print_type(ty, self.namespace));
            out.push(' ');
        }
        out.push('$');
        out.push_str(&param.name);
        if let Some(default) = &param.default {
            out.push_str(" = ");
            out.push_str(default.as_str());
        }
        out
    }

    fn return_type(&self) -> String {
        self.method
            .return_type
            .as_ref()
            .map(|ty| format!(": {}", print_type(ty, self.namespace)))
            .unwrap_or_default()
    }

    fn body(&self) -> Vec<CodeFragment> {
        self.method
            .body
            .iter()
            .map(|line| {
                if line.trim().is_empty() {
                    CodeFragment::Blank
                } else {
                    CodeFragment::line(self.namespace.simplify_names(line))
                }
            })
            .collect()
    }
}

impl Renderable for MethodLayout<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let params: Vec<String> = self.method.params.iter().map(|p| self.param(p)).collect();
        let inline = params.join(", ");
        let close = Some("}".to_string());

        if params.len() > 1 && inline.len() > WRAP_LENGTH {
            let last = params.len() - 1;
            let wrapped = params
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    let comma = if i == last { "" } else { "," };
                    CodeFragment::line(format!("{}{}", p, comma))
                })
                .collect();

            return vec![
                CodeFragment::line(format!("{}(", self.prefix())),
                CodeFragment::Indent(wrapped),
                CodeFragment::block(format!("){} {{", self.return_type()), self.body(), close),
            ];
        }

        vec![
            CodeFragment::line(format!(
                "{}({}){}",
                self.prefix(),
                inline,
                self.return_type()
            )),
            CodeFragment::block("{", self.body(), close),
        ]
    }
}
