//! PHP method builder.

use php_builders_decl::{TypeHint, Visibility};

use super::Literal;

/// A method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub ty: Option<TypeHint>,
    pub default: Option<Literal>,
}

impl Parameter {
    /// Create an untyped parameter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            default: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn ty(mut self, ty: Option<TypeHint>) -> Self {
        self.ty = ty;
        self
    }

    pub fn default(mut self, default: Option<Literal>) -> Self {
        self.default = default;
        self
    }
}

/// Builder for PHP methods.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: String,
    pub visibility: Visibility,
    pub is_final: bool,
    pub params: Vec<Parameter>,
    pub return_type: Option<TypeHint>,
    /// Body lines; class names written as `\Fully\Qualified` are shortened on print.
    pub body: Vec<String>,
}

impl Method {
    /// Create a public method with an empty body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_final: false,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Parameter>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn returns(mut self, ty: TypeHint) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Add raw body content (can contain multiple lines).
    pub fn body(mut self, content: impl AsRef<str>) -> Self {
        self.body
            .extend(content.as_ref().lines().map(str::to_string));
        self
    }
}
