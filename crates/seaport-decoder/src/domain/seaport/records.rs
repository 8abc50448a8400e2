//! Seaport structs as they appear in `matchOrders` calldata.
//!
//! Integer fields are `uint256` (or narrower) on chain. Addresses, hashes and
//! signatures are kept as the text the decoder printed.

use {
    super::EnumConstant,
    alloy_primitives::U256,
    serde::Serialize,
    serde_with::{DisplayFromStr, serde_as},
};

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferItem {
    pub item_type: EnumConstant,
    pub token: String,
    #[serde_as(as = "DisplayFromStr")]
    pub identifier_or_criteria: U256,
    #[serde_as(as = "DisplayFromStr")]
    pub start_amount: U256,
    #[serde_as(as = "DisplayFromStr")]
    pub end_amount: U256,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsiderationItem {
    pub item_type: EnumConstant,
    pub token: String,
    #[serde_as(as = "DisplayFromStr")]
    pub identifier_or_criteria: U256,
    #[serde_as(as = "DisplayFromStr")]
    pub start_amount: U256,
    #[serde_as(as = "DisplayFromStr")]
    pub end_amount: U256,
    pub recipient: String,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderParameters {
    pub offerer: String,
    pub zone: String,
    pub offer: Vec<OfferItem>,
    pub consideration: Vec<ConsiderationItem>,
    pub order_type: EnumConstant,
    #[serde_as(as = "DisplayFromStr")]
    pub start_time: U256,
    #[serde_as(as = "DisplayFromStr")]
    pub end_time: U256,
    pub zone_hash: String,
    #[serde_as(as = "DisplayFromStr")]
    pub salt: U256,
    pub conduit_key: String,
    #[serde_as(as = "DisplayFromStr")]
    pub total_original_consideration_items: U256,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Order {
    pub parameters: OrderParameters,
    pub signature: String,
}

/// Points at an item of one of the matched orders.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentComponent {
    #[serde_as(as = "DisplayFromStr")]
    pub order_index: U256,
    #[serde_as(as = "DisplayFromStr")]
    pub item_index: U256,
}

/// Offer items that are aggregated and transferred to the recipient of the
/// aggregated consideration items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fulfillment {
    pub offer_components: Vec<FulfillmentComponent>,
    pub consideration_components: Vec<FulfillmentComponent>,
}
