use std::fmt;

use crate::literal::Literal;
use crate::schema::DefaultValue;

/// Serialize a normalized value into its canonical bytes.
///
/// No whitespace, object keys in source order, numbers as their original
/// token. Re-encoding the parse of the output yields the same bytes.
pub fn encode(literal: &Literal) -> DefaultValue {
    DefaultValue::from_canonical(literal.to_string())
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => f.write_str("null"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Number(text) => f.write_str(text),
            Literal::String(s) => write_quoted(f, s),
            Literal::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Literal::Object(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_quoted(f, key)?;
                    write!(f, ":{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
    f.write_str(&quoted)
}
