//! Recursive descent over the tokens of the [`scanner`](super::scanner).

use super::{
    Error,
    Structure,
    Value,
    scanner::{self, Token},
};

/// Nesting limit. Decoded `matchOrders` arguments nest four levels deep.
const MAX_DEPTH: usize = 256;

/// Parses a complete document: a single value surrounded by nothing but
/// whitespace.
pub fn parse_document(input: &str) -> Result<Value, Error> {
    let (value, position) = parse_value(input, 0)?;
    match input[position..].find(|c: char| !c.is_whitespace()) {
        Some(offset) => Err(Error::TrailingInput {
            position: position + offset,
        }),
        None => Ok(value),
    }
}

/// Parses the value at `position`, skipping any whitespace and commas in
/// front of it.
pub fn parse_value(input: &str, position: usize) -> Result<(Value, usize), Error> {
    Parser::new(input).value(position)
}

/// Parses the elements of a sequence. `position` points just past the `[`.
pub fn parse_sequence(input: &str, position: usize) -> Result<(Value, usize), Error> {
    Parser::new(input).structure(Structure::Sequence, position)
}

/// Parses the elements of a tuple. `position` points just past the `(`.
pub fn parse_tuple(input: &str, position: usize) -> Result<(Value, usize), Error> {
    Parser::new(input).structure(Structure::Tuple, position)
}

struct Parser<'a> {
    input: &'a str,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, depth: 0 }
    }

    fn value(&mut self, mut position: usize) -> Result<(Value, usize), Error> {
        while position < self.input.len() {
            let (token, next) = scanner::scan(self.input, position)?;
            match token {
                Token::None => position = next,
                Token::Scalar(scalar) => return Ok((Value::Scalar(scalar), next)),
                Token::Open(structure) => return self.structure(structure, next),
                Token::Close(found) => {
                    return Err(Error::UnexpectedCloser {
                        position,
                        found: found.closer(),
                    });
                }
            }
        }
        Err(Error::UnexpectedEnd { position })
    }

    fn structure(&mut self, structure: Structure, start: usize) -> Result<(Value, usize), Error> {
        let opened_at = start.saturating_sub(1);
        if self.depth == MAX_DEPTH {
            return Err(Error::TooDeep {
                position: opened_at,
                limit: MAX_DEPTH,
            });
        }
        self.depth += 1;

        let mut items = Vec::new();
        let mut position = start;
        while position < self.input.len() {
            let (token, next) = scanner::scan(self.input, position)?;
            match token {
                Token::None => position = next,
                Token::Scalar(scalar) => {
                    items.push(Value::Scalar(scalar));
                    position = next;
                }
                Token::Open(inner) => {
                    let (item, after) = self.structure(inner, next)?;
                    items.push(item);
                    position = after;
                }
                Token::Close(found) if found == structure => {
                    self.depth -= 1;
                    return Ok((structure.collect(items), position + 1));
                }
                Token::Close(found) => {
                    return Err(Error::UnexpectedCloser {
                        position,
                        found: found.closer(),
                    });
                }
            }
        }
        Err(Error::Unterminated {
            structure,
            start: opened_at,
        })
    }
}
