//! Reconstructs Seaport `matchOrders` arguments from the textual output of an
//! ABI decoder.
//!
//! The decoding happens in three steps: the decoder output is parsed into a
//! generic tree of scalars, sequences and tuples ([`domain::text`]), the tree
//! is mapped onto typed protocol records ([`domain::seaport`]) and the
//! [`domain::pipeline`] ties both together with the external tools that fetch
//! and decode the calldata of a transaction.

pub mod domain;
pub mod infra;
mod run;

pub use self::run::{run, start};
