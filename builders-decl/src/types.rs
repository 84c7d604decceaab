//! Declared types and default values.

use std::fmt;

use indexmap::IndexMap;
use serde::{
    Deserialize,
    de::{self, Deserializer, MapAccess, SeqAccess, Visitor},
};

/// A declared PHP type together with its nullability.
///
/// Parsed from strings such as `string`, `?string`, `string|null` or
/// `null|\DateTimeImmutable`. A `null` alternative is recognised only at the
/// first or last position of a union.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub struct TypeHint {
    /// Type name without the nullability marker, as written (may keep a leading `\`).
    pub name: String,
    /// Whether `null` is accepted.
    pub nullable: bool,
}

impl TypeHint {
    /// Create a non-nullable type hint.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: false,
        }
    }

    /// Mark the type as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Parse a type string, extracting nullability.
    ///
    /// ```
    /// use php_builders_decl::TypeHint;
    ///
    /// assert_eq!(TypeHint::parse("?string"), TypeHint::new("string").nullable());
    /// assert_eq!(TypeHint::parse("null|int"), TypeHint::new("int").nullable());
    /// assert_eq!(TypeHint::parse("int|string"), TypeHint::new("int|string"));
    /// ```
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let (mut nullable, mut name) = match raw.strip_prefix('?') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        if let Some(rest) = name.strip_prefix("null|") {
            name = rest;
            nullable = true;
        } else if let Some(rest) = name.strip_suffix("|null") {
            name = rest;
            nullable = true;
        }

        Self {
            name: name.to_string(),
            nullable,
        }
    }

    /// Whether the type is a union of several alternatives.
    pub fn is_union(&self) -> bool {
        self.name.contains('|')
    }
}

impl From<String> for TypeHint {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for TypeHint {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for TypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.nullable, self.is_union()) {
            (true, true) => write!(f, "{}|null", self.name),
            (true, false) => write!(f, "?{}", self.name),
            (false, _) => f.write_str(&self.name),
        }
    }
}

/// Default value of a method parameter.
///
/// In TOML: `default = "null"`, `default = { value = 'foo' }` or
/// `default = { constant = "X" }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultValue {
    /// The `null` literal.
    Null,
    /// Any other literal value.
    Value(Value),
    /// A constant declared on the entity class (`self::X`).
    Constant(String),
}

impl DefaultValue {
    /// Constant name with any `self::`/`static::` qualifier removed.
    pub fn constant_name(&self) -> Option<&str> {
        match self {
            Self::Constant(name) => Some(
                name.strip_prefix("self::")
                    .or_else(|| name.strip_prefix("static::"))
                    .unwrap_or(name),
            ),
            _ => None,
        }
    }
}

/// A literal PHP value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// A list (`[1, 2]`).
    List(Vec<Value>),
    /// An associative array (`['a' => 1]`), in declaration order.
    Map(IndexMap<String, Value>),
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a PHP literal (null, bool, int, float, string, list or table)")
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E: de::Error>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Value, E> {
                Ok(Value::Bool(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Value, E> {
                Ok(Value::Int(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Value, E> {
                i64::try_from(v)
                    .map(Value::Int)
                    .map_err(|_| E::custom(format!("integer {} does not fit a PHP int", v)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Value, E> {
                Ok(Value::Float(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Value, E> {
                Ok(Value::String(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Value, E> {
                Ok(Value::String(v))
            }

            fn visit_seq<A: SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> std::result::Result<Value, A::Error> {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Value::List(items))
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Value, A::Error> {
                let mut entries = IndexMap::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    entries.insert(key, value);
                }
                Ok(Value::Map(entries))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}
