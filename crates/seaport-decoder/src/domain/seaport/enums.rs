//! Enums are transmitted as their declaration index. The tables mapping the
//! index back to a name are loaded once at startup and are immutable
//! afterwards.

use {
    num::{BigInt, ToPrimitive},
    regex::Regex,
    serde::{Serialize, Serializer},
    std::{
        fmt::{self, Display, Formatter},
        sync::LazyLock,
    },
};

static ENUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"enum\s+(\w+)\s*\{([^}]*)\}").unwrap());
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//[^\n]*|/\*[\s\S]*?\*/").unwrap());
static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// An ordered list of named constants. The value of a constant is its index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumDefinition {
    name: String,
    constants: Vec<String>,
}

impl EnumDefinition {
    pub fn new<C: Into<String>>(
        name: impl Into<String>,
        constants: impl IntoIterator<Item = C>,
    ) -> Self {
        Self {
            name: name.into(),
            constants: constants.into_iter().map(Into::into).collect(),
        }
    }

    pub fn constants(&self) -> &[String] {
        &self.constants
    }

    /// Looks up the constant with the value `tag`.
    pub fn resolve(&self, tag: &BigInt) -> Result<EnumConstant, InvalidEnumValue> {
        tag.to_usize()
            .and_then(|index| {
                let name = self.constants.get(index)?;
                Some(EnumConstant {
                    index,
                    name: name.clone(),
                })
            })
            .ok_or_else(|| InvalidEnumValue {
                name: self.name.clone(),
                value: tag.clone(),
                len: self.constants.len(),
            })
    }
}

/// A resolved enum value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnumConstant {
    pub index: usize,
    pub name: String,
}

impl Display for EnumConstant {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}({})", self.name, self.index)
    }
}

impl Serialize for EnumConstant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{value} is not a valid {name} value, expected a value below {len}")]
pub struct InvalidEnumValue {
    pub name: String,
    pub value: BigInt,
    pub len: usize,
}

/// The enums whose values appear as the first element of Seaport tuples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    pub item_type: EnumDefinition,
    pub order_type: EnumDefinition,
    pub basic_order_type: EnumDefinition,
    pub side: EnumDefinition,
}

/// The definitions of `ConsiderationEnums.sol` of Seaport 1.x.
impl Default for Schema {
    fn default() -> Self {
        let basic_order_type = [
            "ETH_TO_ERC721",
            "ETH_TO_ERC1155",
            "ERC20_TO_ERC721",
            "ERC20_TO_ERC1155",
            "ERC721_TO_ERC20",
            "ERC1155_TO_ERC20",
        ]
        .into_iter()
        .flat_map(|route| {
            ["FULL_OPEN", "PARTIAL_OPEN", "FULL_RESTRICTED", "PARTIAL_RESTRICTED"]
                .map(|kind| format!("{route}_{kind}"))
        });
        Self {
            item_type: EnumDefinition::new(
                "ItemType",
                [
                    "NATIVE",
                    "ERC20",
                    "ERC721",
                    "ERC1155",
                    "ERC721_WITH_CRITERIA",
                    "ERC1155_WITH_CRITERIA",
                ],
            ),
            order_type: EnumDefinition::new(
                "OrderType",
                [
                    "FULL_OPEN",
                    "PARTIAL_OPEN",
                    "FULL_RESTRICTED",
                    "PARTIAL_RESTRICTED",
                    "CONTRACT",
                ],
            ),
            basic_order_type: EnumDefinition::new("BasicOrderType", basic_order_type),
            side: EnumDefinition::new("Side", ["OFFER", "CONSIDERATION"]),
        }
    }
}

impl Schema {
    /// Replaces the definitions of the known enums with the ones declared in
    /// Solidity `source`. Enums that are not declared there keep their
    /// current definition.
    pub fn with_solidity(mut self, source: &str) -> Result<Self, SchemaError> {
        for definition in parse_solidity_enums(source) {
            if definition.constants.is_empty() {
                return Err(SchemaError::Empty(definition.name));
            }
            let slot = match definition.name.as_str() {
                "ItemType" => &mut self.item_type,
                "OrderType" => &mut self.order_type,
                "BasicOrderType" => &mut self.basic_order_type,
                "Side" => &mut self.side,
                other => {
                    tracing::debug!(name = other, "ignoring unused enum");
                    continue;
                }
            };
            tracing::debug!(
                name = %definition.name,
                constants = definition.constants.len(),
                "loaded enum"
            );
            *slot = definition;
        }
        Ok(self)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("enum {0} declares no constants")]
    Empty(String),
}

/// Extracts all `enum Name { A, B, ... }` declarations from Solidity source.
pub fn parse_solidity_enums(source: &str) -> Vec<EnumDefinition> {
    let source = COMMENT.replace_all(source, "");
    ENUM.captures_iter(&source)
        .map(|captures| {
            EnumDefinition::new(
                &captures[1],
                IDENTIFIER.find_iter(&captures[2]).map(|m| m.as_str()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_by_declaration_index() {
        let schema = Schema::default();
        assert_eq!(
            schema.item_type.resolve(&BigInt::from(1)).unwrap(),
            EnumConstant {
                index: 1,
                name: "ERC20".into()
            }
        );
        assert_eq!(
            schema.order_type.resolve(&BigInt::from(4)).unwrap().to_string(),
            "CONTRACT(4)"
        );
        assert_eq!(schema.basic_order_type.constants().len(), 24);
        assert_eq!(
            schema.basic_order_type.resolve(&BigInt::from(23)).unwrap().name,
            "ERC1155_TO_ERC20_PARTIAL_RESTRICTED"
        );
        assert_eq!(
            schema.basic_order_type.resolve(&BigInt::from(8)).unwrap().name,
            "ERC20_TO_ERC721_FULL_OPEN"
        );
    }

    #[test]
    fn rejects_out_of_range_values() {
        let item_type = Schema::default().item_type;
        for value in [6, -1] {
            assert_eq!(
                item_type.resolve(&BigInt::from(value)),
                Err(InvalidEnumValue {
                    name: "ItemType".into(),
                    value: value.into(),
                    len: 6,
                })
            );
        }
        let huge = BigInt::from(u128::MAX) * 4;
        assert!(item_type.resolve(&huge).is_err());
    }

    #[test]
    fn parses_solidity_declarations() {
        let source = r#"
            // SPDX-License-Identifier: MIT
            pragma solidity ^0.8.13;

            enum Side {
                // 0: Items that can be spent
                OFFER,

                /* 1: Items that must be received */
                CONSIDERATION
            }

            enum Unrelated { A, B, C }
        "#;
        assert_eq!(
            parse_solidity_enums(source),
            vec![
                EnumDefinition::new("Side", ["OFFER", "CONSIDERATION"]),
                EnumDefinition::new("Unrelated", ["A", "B", "C"]),
            ]
        );
    }

    #[test]
    fn solidity_overrides_known_enums() {
        let schema = Schema::default()
            .with_solidity("enum ItemType { NATIVE, ERC20, ERC721, ERC1155, ERC6909 }")
            .unwrap();
        assert_eq!(schema.item_type.resolve(&BigInt::from(4)).unwrap().name, "ERC6909");
        assert_eq!(schema.order_type, Schema::default().order_type);
    }

    #[test]
    fn solidity_enums_must_not_be_empty() {
        assert_eq!(
            Schema::default().with_solidity("enum Side {}"),
            Err(SchemaError::Empty("Side".into()))
        );
    }

    #[test]
    fn serializes_as_name() {
        let constant = EnumConstant {
            index: 2,
            name: "ERC721".into(),
        };
        assert_eq!(serde_json::to_string(&constant).unwrap(), r#""ERC721""#);
    }
}
