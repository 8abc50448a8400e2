//! Typed Seaport records and the mapping of generic values onto them.

pub mod enums;
pub mod mapping;
pub mod records;

pub use {
    enums::{EnumConstant, EnumDefinition, Schema},
    mapping::Mapper,
    records::{
        ConsiderationItem,
        Fulfillment,
        FulfillmentComponent,
        OfferItem,
        Order,
        OrderParameters,
    },
};
