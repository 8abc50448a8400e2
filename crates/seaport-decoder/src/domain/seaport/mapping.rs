//! Positional mapping of generic tuples onto Seaport records.
//!
//! Every tuple is arity checked before any of its fields is looked at, so a
//! record is either built completely or not at all.

use {
    super::{
        ConsiderationItem,
        EnumConstant,
        EnumDefinition,
        Fulfillment,
        FulfillmentComponent,
        OfferItem,
        Order,
        OrderParameters,
        Schema,
        enums::InvalidEnumValue,
    },
    crate::domain::text::{Scalar, Value},
    alloy_primitives::U256,
};

/// Name and field names of a record, in declaration order.
struct Layout {
    record: &'static str,
    fields: &'static [&'static str],
}

static OFFER_ITEM: Layout = Layout {
    record: "OfferItem",
    fields: &[
        "itemType",
        "token",
        "identifierOrCriteria",
        "startAmount",
        "endAmount",
    ],
};

static CONSIDERATION_ITEM: Layout = Layout {
    record: "ConsiderationItem",
    fields: &[
        "itemType",
        "token",
        "identifierOrCriteria",
        "startAmount",
        "endAmount",
        "recipient",
    ],
};

static ORDER_PARAMETERS: Layout = Layout {
    record: "OrderParameters",
    fields: &[
        "offerer",
        "zone",
        "offer",
        "consideration",
        "orderType",
        "startTime",
        "endTime",
        "zoneHash",
        "salt",
        "conduitKey",
        "totalOriginalConsiderationItems",
    ],
};

static ORDER: Layout = Layout {
    record: "Order",
    fields: &["parameters", "signature"],
};

static FULFILLMENT_COMPONENT: Layout = Layout {
    record: "FulfillmentComponent",
    fields: &["orderIndex", "itemIndex"],
};

static FULFILLMENT: Layout = Layout {
    record: "Fulfillment",
    fields: &["offerComponents", "considerationComponents"],
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{record} expects a tuple of {expected} fields but got {actual}")]
    ArityMismatch {
        record: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{record} expects a tuple but got a {found}")]
    NotATuple {
        record: &'static str,
        found: &'static str,
    },
    #[error("{context} expects a sequence but got a {found}")]
    NotASequence {
        context: &'static str,
        found: &'static str,
    },
    #[error("{record}.{field} expects {expected} but got a {found}")]
    UnexpectedKind {
        record: &'static str,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("{record}.{field}: {source}")]
    InvalidEnumValue {
        record: &'static str,
        field: &'static str,
        #[source]
        source: InvalidEnumValue,
    },
    #[error("{record}.{field}: {value} does not fit into 256 unsigned bits")]
    IntegerOutOfRange {
        record: &'static str,
        field: &'static str,
        value: String,
    },
    #[error("{context}[{index}]")]
    Nested {
        context: &'static str,
        index: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    fn nested(self, context: &'static str, index: usize) -> Self {
        Self::Nested {
            context,
            index,
            source: Box::new(self),
        }
    }

    /// The error without the `Nested` wrappers locating it.
    pub fn innermost(&self) -> &Self {
        match self {
            Self::Nested { source, .. } => source.innermost(),
            other => other,
        }
    }
}

/// The fields of a tuple whose arity matches a [`Layout`].
struct Fields<'a> {
    layout: &'static Layout,
    values: &'a [Value],
}

impl<'a> Fields<'a> {
    fn new(layout: &'static Layout, value: &'a Value) -> Result<Self, Error> {
        let Value::Tuple(values) = value else {
            return Err(Error::NotATuple {
                record: layout.record,
                found: value.kind(),
            });
        };
        if values.len() != layout.fields.len() {
            return Err(Error::ArityMismatch {
                record: layout.record,
                expected: layout.fields.len(),
                actual: values.len(),
            });
        }
        Ok(Self { layout, values })
    }

    fn unexpected(&self, index: usize, expected: &'static str) -> Error {
        Error::UnexpectedKind {
            record: self.layout.record,
            field: self.layout.fields[index],
            expected,
            found: self.values[index].kind(),
        }
    }

    fn value(&self, index: usize) -> &'a Value {
        &self.values[index]
    }

    /// An address, hash or signature.
    fn text(&self, index: usize) -> Result<String, Error> {
        match &self.values[index] {
            Value::Scalar(Scalar::Hex(text) | Scalar::Str(text)) => Ok(text.clone()),
            _ => Err(self.unexpected(index, "a hex literal or string")),
        }
    }

    fn integer(&self, index: usize) -> Result<U256, Error> {
        let out_of_range = |value: String| Error::IntegerOutOfRange {
            record: self.layout.record,
            field: self.layout.fields[index],
            value,
        };
        match &self.values[index] {
            Value::Scalar(Scalar::Int(value)) => number::conversions::big_int_to_u256(value)
                .map_err(|_| out_of_range(value.to_string())),
            // `0x` alone is empty `bytes`, not zero.
            Value::Scalar(Scalar::Hex(hex)) if hex == "0x" => {
                Err(self.unexpected(index, "an integer"))
            }
            Value::Scalar(Scalar::Hex(hex)) => {
                let digits = hex.strip_prefix("0x").unwrap_or(hex);
                U256::from_str_radix(digits, 16).map_err(|_| out_of_range(hex.clone()))
            }
            _ => Err(self.unexpected(index, "an integer")),
        }
    }

    fn enumeration(
        &self,
        index: usize,
        definition: &EnumDefinition,
    ) -> Result<EnumConstant, Error> {
        let Value::Scalar(Scalar::Int(tag)) = &self.values[index] else {
            return Err(self.unexpected(index, "an integer"));
        };
        definition
            .resolve(tag)
            .map_err(|source| Error::InvalidEnumValue {
                record: self.layout.record,
                field: self.layout.fields[index],
                source,
            })
    }

    /// Maps every element of the sequence at `index`, preserving order.
    fn sequence<T>(
        &self,
        index: usize,
        map: impl Fn(&Value) -> Result<T, Error>,
    ) -> Result<Vec<T>, Error> {
        sequence(self.layout.fields[index], &self.values[index], map)
    }
}

fn sequence<T>(
    context: &'static str,
    value: &Value,
    map: impl Fn(&Value) -> Result<T, Error>,
) -> Result<Vec<T>, Error> {
    let Value::Sequence(items) = value else {
        return Err(Error::NotASequence {
            context,
            found: value.kind(),
        });
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| map(item).map_err(|err| err.nested(context, i)))
        .collect()
}

/// Maps generic values onto records, resolving enum tags with `schema`.
#[derive(Clone, Copy, Debug)]
pub struct Mapper<'a> {
    schema: &'a Schema,
}

impl<'a> Mapper<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    pub fn offer_item(&self, value: &Value) -> Result<OfferItem, Error> {
        let fields = Fields::new(&OFFER_ITEM, value)?;
        Ok(OfferItem {
            item_type: fields.enumeration(0, &self.schema.item_type)?,
            token: fields.text(1)?,
            identifier_or_criteria: fields.integer(2)?,
            start_amount: fields.integer(3)?,
            end_amount: fields.integer(4)?,
        })
    }

    pub fn consideration_item(&self, value: &Value) -> Result<ConsiderationItem, Error> {
        let fields = Fields::new(&CONSIDERATION_ITEM, value)?;
        Ok(ConsiderationItem {
            item_type: fields.enumeration(0, &self.schema.item_type)?,
            token: fields.text(1)?,
            identifier_or_criteria: fields.integer(2)?,
            start_amount: fields.integer(3)?,
            end_amount: fields.integer(4)?,
            recipient: fields.text(5)?,
        })
    }

    pub fn order_parameters(&self, value: &Value) -> Result<OrderParameters, Error> {
        let fields = Fields::new(&ORDER_PARAMETERS, value)?;
        Ok(OrderParameters {
            offerer: fields.text(0)?,
            zone: fields.text(1)?,
            offer: fields.sequence(2, |item| self.offer_item(item))?,
            consideration: fields.sequence(3, |item| self.consideration_item(item))?,
            order_type: fields.enumeration(4, &self.schema.order_type)?,
            start_time: fields.integer(5)?,
            end_time: fields.integer(6)?,
            zone_hash: fields.text(7)?,
            salt: fields.integer(8)?,
            conduit_key: fields.text(9)?,
            total_original_consideration_items: fields.integer(10)?,
        })
    }

    pub fn order(&self, value: &Value) -> Result<Order, Error> {
        let fields = Fields::new(&ORDER, value)?;
        Ok(Order {
            parameters: self
                .order_parameters(fields.value(0))
                .map_err(|err| err.nested("parameters", 0))?,
            signature: fields.text(1)?,
        })
    }

    pub fn fulfillment_component(&self, value: &Value) -> Result<FulfillmentComponent, Error> {
        let fields = Fields::new(&FULFILLMENT_COMPONENT, value)?;
        Ok(FulfillmentComponent {
            order_index: fields.integer(0)?,
            item_index: fields.integer(1)?,
        })
    }

    pub fn fulfillment(&self, value: &Value) -> Result<Fulfillment, Error> {
        let fields = Fields::new(&FULFILLMENT, value)?;
        Ok(Fulfillment {
            offer_components: fields.sequence(0, |item| self.fulfillment_component(item))?,
            consideration_components: fields
                .sequence(1, |item| self.fulfillment_component(item))?,
        })
    }

    /// Maps the `orders` argument of `matchOrders`.
    pub fn orders(&self, value: &Value) -> Result<Vec<Order>, Error> {
        sequence("orders", value, |item| self.order(item))
    }

    /// Maps the `fulfillments` argument of `matchOrders`.
    pub fn fulfillments(&self, value: &Value) -> Result<Vec<Fulfillment>, Error> {
        sequence("fulfillments", value, |item| self.fulfillment(item))
    }
}
