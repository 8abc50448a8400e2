//! Parsing of the bracket/parenthesis/comma notation an ABI decoder uses to
//! print nested arguments into a generic [`Value`] tree.

pub mod parser;
pub mod scanner;
pub mod value;

pub use {
    parser::{parse_document, parse_sequence, parse_tuple, parse_value},
    value::{Scalar, Value},
};

use std::fmt::{self, Display, Formatter};

/// The two kinds of bracketed structures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Structure {
    /// `[...]`, an ordered list of arbitrary length.
    Sequence,
    /// `(...)`, a fixed arity list.
    Tuple,
}

impl Structure {
    pub fn opener(self) -> char {
        match self {
            Self::Sequence => '[',
            Self::Tuple => '(',
        }
    }

    pub fn closer(self) -> char {
        match self {
            Self::Sequence => ']',
            Self::Tuple => ')',
        }
    }

    fn collect(self, items: Vec<Value>) -> Value {
        match self {
            Self::Sequence => Value::Sequence(items),
            Self::Tuple => Value::Tuple(items),
        }
    }
}

impl Display for Structure {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Sequence => f.write_str("sequence"),
            Self::Tuple => f.write_str("tuple"),
        }
    }
}

/// Positions are byte offsets into the parsed text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unexpected character {character:?} at position {position}")]
    Lex { position: usize, character: char },
    #[error("{structure} opened at position {start} is never closed")]
    Unterminated { structure: Structure, start: usize },
    #[error("unexpected {found:?} at position {position}")]
    UnexpectedCloser { position: usize, found: char },
    #[error("unexpected end of input at position {position}")]
    UnexpectedEnd { position: usize },
    #[error("unexpected trailing input at position {position}")]
    TrailingInput { position: usize },
    #[error("number {literal:?} at position {position} is not an integer")]
    FractionalNumber { position: usize, literal: String },
    #[error("number {literal:?} at position {position} is out of range")]
    NumberOutOfRange { position: usize, literal: String },
    #[error("structures nested deeper than {limit} levels at position {position}")]
    TooDeep { position: usize, limit: usize },
}
