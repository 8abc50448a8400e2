//! Classifies and consumes a single token.

use {
    super::{Error, Scalar, Structure},
    bigdecimal::BigDecimal,
    num::BigInt,
    regex::{Captures, Regex},
    std::sync::LazyLock,
};

/// Largest power of ten a numeric literal may be scaled by.
const MAX_EXPONENT: u64 = 1024;

static DOUBLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"([^"\n]*)""#).unwrap());
static SINGLE_QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^'([^'\n]*)'").unwrap());
static HEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]*").unwrap());
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(?:([0-9]+)(?:\.([0-9]*))?|\.([0-9]+))(?:[eE]([-+]?[0-9]+))?").unwrap()
});
/// The scientific notation newer `cast` releases print after large numbers,
/// as in `1000000000000000000 [1e18]`.
static ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ \[-?[0-9]+(?:\.[0-9]+)?e[0-9]+\]").unwrap());
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w+").unwrap());

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Whitespace or a comma was consumed.
    None,
    Scalar(Scalar),
    /// An opening bracket was consumed.
    Open(Structure),
    /// A closing bracket is at the position. It is not consumed.
    Close(Structure),
}

/// Scans the token at byte offset `position` of `input` and returns it with
/// the position of whatever follows it.
///
/// `position` must lie on a character boundary before the end of `input`.
pub fn scan(input: &str, position: usize) -> Result<(Token, usize), Error> {
    let rest = &input[position..];
    let Some(character) = rest.chars().next() else {
        return Err(Error::UnexpectedEnd { position });
    };
    let token = match character {
        ' ' | '\t' | '\n' | '\r' | ',' => (Token::None, position + 1),
        '[' => (Token::Open(Structure::Sequence), position + 1),
        '(' => (Token::Open(Structure::Tuple), position + 1),
        ']' => (Token::Close(Structure::Sequence), position),
        ')' => (Token::Close(Structure::Tuple), position),
        _ => {
            let (scalar, len) = scalar(rest, position)?;
            (Token::Scalar(scalar), position + len)
        }
    };
    Ok(token)
}

/// Matches the literal rules in order and returns the scalar with the number
/// of bytes it spans.
fn scalar(rest: &str, position: usize) -> Result<(Scalar, usize), Error> {
    for quoted in [&DOUBLE_QUOTED, &SINGLE_QUOTED] {
        if let Some(captures) = quoted.captures(rest) {
            return Ok((Scalar::Str(captures[1].to_owned()), captures[0].len()));
        }
    }
    if let Some(hex) = HEX.find(rest) {
        return Ok((Scalar::Hex(hex.as_str().to_owned()), hex.end()));
    }
    if let Some(captures) = NUMBER.captures(rest) {
        let number = number(&captures, position)?;
        let len = captures[0].len();
        let annotation = ANNOTATION.find(&rest[len..]).map_or(0, |m| m.end());
        return Ok((Scalar::Int(number), len + annotation));
    }
    if let Some(word) = WORD.find(rest) {
        return Ok((Scalar::Str(word.as_str().to_owned()), word.end()));
    }
    Err(Error::Lex {
        position,
        character: rest.chars().next().unwrap_or_default(),
    })
}

/// Evaluates a decimal literal exactly. Fractional and exponent notation is
/// accepted as long as the value is integral.
fn number(captures: &Captures, position: usize) -> Result<BigInt, Error> {
    let literal = &captures[0];
    let out_of_range = || Error::NumberOutOfRange {
        position,
        literal: literal.to_owned(),
    };

    let integer = captures.get(1).map_or("", |m| m.as_str());
    let fraction = captures
        .get(2)
        .or_else(|| captures.get(3))
        .map_or("", |m| m.as_str());
    let exponent = match captures.get(4) {
        Some(exponent) => exponent
            .as_str()
            .parse::<i64>()
            .map_err(|_| out_of_range())?,
        None => 0,
    };
    let scale = i64::try_from(fraction.len())
        .ok()
        .and_then(|len| len.checked_sub(exponent))
        .filter(|scale| scale.unsigned_abs() <= MAX_EXPONENT)
        .ok_or_else(out_of_range)?;

    let digits = format!("{integer}{fraction}")
        .parse::<BigInt>()
        .map_err(|_| out_of_range())?;
    let digits = if literal.starts_with('-') {
        -digits
    } else {
        digits
    };

    number::conversions::big_decimal_to_big_int(&BigDecimal::new(digits, scale)).ok_or_else(
        || Error::FractionalNumber {
            position,
            literal: literal.to_owned(),
        },
    )
}
