//! PHP syntax tree for generated code.
//!
//! These nodes describe *what* is generated; layout (indentation, blank
//! lines, name shortening) is decided by a [`Printer`](crate::Printer).

mod class;
mod literal;
mod method;
mod namespace;

pub use class::{PhpClass, Property};
pub use literal::Literal;
pub use method::{Method, Parameter};
pub use namespace::{Namespace, is_builtin_type};
