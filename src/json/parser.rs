//! JSON reader producing ordered value trees.
//!
//! Recursive descent over [`Lexer`] tokens. Objects become [`Value::Map`]
//! with their keys normalized and their order kept, arrays become
//! [`Value::List`], and numbers keep their literal text.
//!
//! - Duplicate keys (after unescaping and normalization) are rejected
//! - E111: Nesting depth limit
//! - E113: Object field count limit
//! - E114: Array length limit

use std::collections::HashSet;

use super::lexer::{Lexer, Token};
use super::limits::Limits;
use super::types::{Key, Map, Number, Value};
use crate::error::{ErrorCode, HelperResult};

/// JSON parser.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    limits: Limits,
    depth: u64,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input.
    pub fn new(input: &'a [u8], limits: Limits) -> HelperResult<Self> {
        let mut lexer = Lexer::new(input, limits)?;
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            limits,
            depth: 0,
        })
    }

    /// Parse a single document, rejecting trailing content.
    pub fn parse(&mut self) -> HelperResult<Value> {
        let value = self.parse_value()?;

        if self.current != Token::Eof {
            tracing::debug!(offset = self.lexer.position(), "trailing content after document");
            return Err(ErrorCode::E100_InvalidJSON);
        }

        Ok(value)
    }

    fn advance(&mut self) -> HelperResult<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Take the current token and move to the next one.
    fn take(&mut self) -> HelperResult<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn parse_value(&mut self) -> HelperResult<Value> {
        match self.current {
            Token::LeftBrace => return self.parse_object(),
            Token::LeftBracket => return self.parse_array(),
            _ => {}
        }

        match self.take()? {
            Token::Null => Ok(Value::Null),
            Token::True => Ok(Value::Bool(true)),
            Token::False => Ok(Value::Bool(false)),
            Token::String(s) => Ok(Value::String(s)),
            Token::Number(text) => Number::parse(&text)
                .map(Value::Number)
                .ok_or(ErrorCode::E100_InvalidJSON),
            _ => Err(ErrorCode::E100_InvalidJSON),
        }
    }

    fn descend(&mut self) -> HelperResult<()> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(ErrorCode::E111_NestingTooDeep(
                self.depth,
                self.limits.max_nesting_depth,
            ));
        }
        Ok(())
    }

    fn parse_object(&mut self) -> HelperResult<Value> {
        self.descend()?;
        // Opening brace
        self.advance()?;

        let mut map = Map::new();
        let mut seen: HashSet<Key> = HashSet::new();

        if self.current == Token::RightBrace {
            self.advance()?;
            self.depth -= 1;
            return Ok(Value::Map(map));
        }

        loop {
            let raw_key = match self.take()? {
                Token::String(s) => s,
                _ => return Err(ErrorCode::E100_InvalidJSON),
            };

            let key = Key::from(raw_key.as_str());
            if !seen.insert(key.clone()) {
                return Err(ErrorCode::E101_DuplicateKey(raw_key));
            }

            if self.current != Token::Colon {
                return Err(ErrorCode::E100_InvalidJSON);
            }
            self.advance()?;

            let value = self.parse_value()?;
            map.append(key, value);

            if map.len() as u64 > self.limits.max_object_fields {
                return Err(ErrorCode::E113_TooManyFields(
                    map.len() as u64,
                    self.limits.max_object_fields,
                ));
            }

            match self.current {
                Token::Comma => {
                    self.advance()?;
                    if self.current == Token::RightBrace {
                        return Err(ErrorCode::E100_InvalidJSON);
                    }
                }
                Token::RightBrace => {
                    self.advance()?;
                    break;
                }
                _ => return Err(ErrorCode::E100_InvalidJSON),
            }
        }

        self.depth -= 1;
        Ok(Value::Map(map))
    }

    fn parse_array(&mut self) -> HelperResult<Value> {
        self.descend()?;
        // Opening bracket
        self.advance()?;

        let mut items = Vec::new();

        if self.current == Token::RightBracket {
            self.advance()?;
            self.depth -= 1;
            return Ok(Value::List(items));
        }

        loop {
            items.push(self.parse_value()?);

            if items.len() as u64 > self.limits.max_array_length {
                return Err(ErrorCode::E114_ArrayTooLong(
                    items.len() as u64,
                    self.limits.max_array_length,
                ));
            }

            match self.current {
                Token::Comma => {
                    self.advance()?;
                    if self.current == Token::RightBracket {
                        return Err(ErrorCode::E100_InvalidJSON);
                    }
                }
                Token::RightBracket => {
                    self.advance()?;
                    break;
                }
                _ => return Err(ErrorCode::E100_InvalidJSON),
            }
        }

        self.depth -= 1;
        Ok(Value::List(items))
    }
}

/// Parse JSON text with the standard limits.
pub fn parse(input: &[u8]) -> HelperResult<Value> {
    parse_with_limits(input, Limits::standard())
}

/// Parse JSON text with custom limits.
pub fn parse_with_limits(input: &[u8], limits: Limits) -> HelperResult<Value> {
    let mut parser = Parser::new(input, limits)?;
    parser.parse()
}
