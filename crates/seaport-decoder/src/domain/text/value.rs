use {
    super::Structure,
    num::BigInt,
    std::fmt::{self, Display, Formatter, Write as _},
};

/// A leaf of the generic tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scalar {
    /// A decimal literal.
    Int(BigInt),
    /// A quoted string (without its quotes) or a bare word.
    Str(String),
    /// A `0x` prefixed literal, kept verbatim so that the width and case of
    /// addresses and hashes survive.
    Hex(String),
}

impl Scalar {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Str(_) => "string",
            Self::Hex(_) => "hex literal",
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Hex(hex) => f.write_str(hex),
            Self::Str(string) if string.contains('"') => write!(f, "'{string}'"),
            Self::Str(string) => write!(f, "\"{string}\""),
        }
    }
}

/// Generic tree produced by the parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Scalar(Scalar),
    /// Origin: `[...]`.
    Sequence(Vec<Value>),
    /// Origin: `(...)`. The arity is significant when mapping onto records.
    Tuple(Vec<Value>),
}

impl Value {
    pub fn int(value: impl Into<BigInt>) -> Self {
        Self::Scalar(Scalar::Int(value.into()))
    }

    pub fn str(value: impl Into<String>) -> Self {
        Self::Scalar(Scalar::Str(value.into()))
    }

    pub fn hex(value: impl Into<String>) -> Self {
        Self::Scalar(Scalar::Hex(value.into()))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(scalar) => scalar.kind(),
            Self::Sequence(_) => "sequence",
            Self::Tuple(_) => "tuple",
        }
    }

    /// Number of scalars in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Sequence(items) | Self::Tuple(items) => items.iter().map(Self::leaf_count).sum(),
        }
    }
}

/// Renders the canonical textual form, which parses back into an equal tree.
impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let (structure, items) = match self {
            Self::Scalar(scalar) => return Display::fmt(scalar, f),
            Self::Sequence(items) => (Structure::Sequence, items),
            Self::Tuple(items) => (Structure::Tuple, items),
        };
        f.write_char(structure.opener())?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(item, f)?;
        }
        f.write_char(structure.closer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_canonical_form() {
        let value = Value::Sequence(vec![
            Value::Tuple(vec![Value::int(-1), Value::hex("0xAbC123")]),
            Value::Sequence(vec![]),
            Value::str("true"),
            Value::str("say \"hi\""),
        ]);
        assert_eq!(
            value.to_string(),
            r#"[(-1, 0xAbC123), [], "true", 'say "hi"']"#
        );
    }

    #[test]
    fn counts_leaves() {
        let value = Value::Sequence(vec![
            Value::Tuple(vec![Value::int(1), Value::Sequence(vec![Value::int(2)])]),
            Value::Tuple(vec![]),
            Value::hex("0x00"),
        ]);
        assert_eq!(value.leaf_count(), 3);
        assert_eq!(Value::int(7).leaf_count(), 1);
    }
}
