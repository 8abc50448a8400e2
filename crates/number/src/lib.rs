//! Exact conversions between arbitrary precision numbers and the fixed width
//! integers used on chain.

pub mod conversions;
