use {
    alloy_primitives::U256,
    anyhow::{Context, Result, ensure},
    bigdecimal::{BigDecimal, num_bigint::ToBigInt},
    num::{BigInt, BigUint, bigint::Sign},
};

pub fn big_uint_to_u256(input: &BigUint) -> Result<U256> {
    let bytes = input.to_bytes_be();
    ensure!(bytes.len() <= 32, "too large");
    U256::try_from_be_slice(&bytes).context("too large")
}

pub fn big_int_to_u256(input: &BigInt) -> Result<U256> {
    ensure!(input.sign() != Sign::Minus, "negative");
    big_uint_to_u256(input.magnitude())
}

/// Returns the integer value of `big_decimal`, or `None` if it has a non-zero
/// fractional part.
pub fn big_decimal_to_big_int(big_decimal: &BigDecimal) -> Option<BigInt> {
    if !big_decimal.is_integer() {
        return None;
    }
    big_decimal.to_bigint()
}
