//! Positional base-N encoding of arbitrary-precision integers.
//!
//! Digits are `0-9` followed by `a-z` (case-insensitive), which covers every
//! base from 2 up to and including 36.
use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

use crate::errors::Error;

/// The smallest supported base.
pub const MIN_BASE: u32 = 2;
/// The largest supported base.
pub const MAX_BASE: u32 = 36;

/// Decodes a signed digit string in the given base.
///
/// A single leading `+` or `-` is accepted. At least one digit must follow.
pub fn decode(value: &str, base: u32) -> Result<BigInt, Error> {
    check_base(base)?;

    let (sign, digits, offset) = match value.as_bytes().first() {
        Some(b'-') => (Sign::Minus, &value[1..], 1),
        Some(b'+') => (Sign::Plus, &value[1..], 1),
        _ => (Sign::Plus, value, 0),
    };
    if digits.is_empty() {
        return Err(Error::EmptyValue);
    }

    let mut ds = Vec::with_capacity(digits.len());
    for (i, c) in digits.chars().enumerate() {
        match c.to_digit(base) {
            Some(d) => ds.push(d as u8),
            None => {
                return Err(Error::InvalidDigit {
                    digit: c,
                    position: i + offset,
                    base,
                })
            }
        }
    }

    BigInt::from_radix_be(sign, &ds, base).ok_or_else(|| Error::InvalidBase {
        base: base.into(),
    })
}

/// Encodes an integer in the given base using lower-case digits.
pub fn encode(value: &BigInt, base: u32) -> Result<String, Error> {
    check_base(base)?;
    Ok(value.to_str_radix(base))
}

/// Parses a decimal base as it appears in input documents, e.g. `"16"`.
pub fn parse_base(text: &str) -> Result<u32, Error> {
    let base: BigInt = text
        .trim()
        .parse()
        .map_err(|_| Error::Malformed(format!("base {:?} is not a number", text)))?;

    match base.to_u32() {
        Some(b) if (MIN_BASE..=MAX_BASE).contains(&b) => Ok(b),
        _ => Err(Error::InvalidBase { base }),
    }
}

fn check_base(base: u32) -> Result<(), Error> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(Error::InvalidBase { base: base.into() });
    }
    Ok(())
}
