//! PHP literal expressions.

use std::fmt::Write;

use php_builders_decl::Value;

/// A PHP expression used verbatim, e.g. a parameter default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal(String);

impl Literal {
    /// Use already-formatted PHP code.
    pub fn raw(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Dump a value as a PHP literal.
    ///
    /// ```
    /// use php_builders_decl::Value;
    /// use php_builders_php::ast::Literal;
    ///
    /// assert_eq!(Literal::dump(&Value::String("it's".into())).as_str(), r"'it\'s'");
    /// assert_eq!(Literal::dump(&Value::Float(2.0)).as_str(), "2.0");
    /// ```
    pub fn dump(value: &Value) -> Self {
        let mut out = String::new();
        dump_into(&mut out, value);
        Self(out)
    }

    /// The PHP code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn dump_into(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(i) => {
            let _ = write!(out, "{}", i);
        }
        Value::Float(f) => dump_float(out, *f),
        Value::String(s) => dump_string(out, s),
        Value::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                dump_into(out, item);
            }
            out.push(']');
        }
        Value::Map(entries) => {
            out.push('[');
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                dump_key(out, key);
                out.push_str(" => ");
                dump_into(out, item);
            }
            out.push(']');
        }
    }
}

fn dump_float(out: &mut String, f: f64) {
    if f.is_nan() {
        out.push_str("NAN");
    } else if f.is_infinite() {
        out.push_str(if f > 0.0 { "INF" } else { "-INF" });
    } else {
        let text = f.to_string();
        out.push_str(&text);
        if !text.contains(['.', 'e', 'E']) {
            out.push_str(".0");
        }
    }
}

/// Canonical integer keys are written bare, like PHP stores them.
fn dump_key(out: &mut String, key: &str) {
    match key.parse::<i64>() {
        Ok(i) if i.to_string() == key => {
            let _ = write!(out, "{}", i);
        }
        _ => dump_string(out, key),
    }
}

fn dump_string(out: &mut String, s: &str) {
    let needs_double = s.chars().any(|c| c.is_control());

    if !needs_double {
        out.push('\'');
        for c in s.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '\'' => out.push_str("\\'"),
                c => out.push(c),
            }
        }
        out.push('\'');
        return;
    }

    out.push('"');
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0b}' => out.push_str("\\v"),
            '\u{0c}' => out.push_str("\\f"),
            '\u{1b}' => out.push_str("\\e"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            c if c.is_control() => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    let _ = write!(out, "\\x{:02X}", byte);
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;

    fn dump(value: Value) -> String {
        Literal::dump(&value).as_str().to_string()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(dump(Value::Null), "null");
        assert_eq!(dump(Value::Bool(true)), "true");
        assert_eq!(dump(Value::Bool(false)), "false");
        assert_eq!(dump(Value::Int(-42)), "-42");
        assert_eq!(dump(Value::Float(1.5)), "1.5");
        assert_eq!(dump(Value::Float(3.0)), "3.0");
        assert_eq!(dump(Value::Float(f64::INFINITY)), "INF");
        assert_eq!(dump(Value::Float(f64::NAN)), "NAN");
    }

    #[test]
    fn test_strings() {
        assert_eq!(dump(Value::String("foo".into())), "'foo'");
        assert_eq!(dump(Value::String("a\\b".into())), r"'a\\b'");
        assert_eq!(dump(Value::String("line\n$x".into())), r#""line\n\$x""#);
        assert_eq!(dump(Value::String("\u{0}".into())), r#""\x00""#);
    }

    #[test]
    fn test_arrays() {
        assert_eq!(dump(Value::List(vec![])), "[]");
        assert_eq!(
            dump(Value::List(vec![Value::Int(1), Value::String("two".into())])),
            "[1, 'two']"
        );

        let mut map = IndexMap::new();
        map.insert("b".to_string(), Value::Bool(true));
        map.insert("10".to_string(), Value::Null);
        map.insert("007".to_string(), Value::Int(7));
        assert_eq!(dump(Value::Map(map)), "['b' => true, 10 => null, '007' => 7]");
    }

    #[test]
    fn test_raw() {
        assert_eq!(Literal::raw("Foo::X").as_str(), "Foo::X");
    }
}
