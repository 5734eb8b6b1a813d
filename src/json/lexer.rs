//! JSON tokenizer for the ingest parser.
//!
//! Works on validated UTF-8 text. String escapes are decoded here, including
//! surrogate pairs; numbers are kept as their literal text so the encoder can
//! emit them verbatim.

use super::limits::Limits;
use crate::error::{ErrorCode, HelperResult};

/// Token types produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Left brace `{`
    LeftBrace,
    /// Right brace `}`
    RightBrace,
    /// Left bracket `[`
    LeftBracket,
    /// Right bracket `]`
    RightBracket,
    /// Colon `:`
    Colon,
    /// Comma `,`
    Comma,
    /// Null literal
    Null,
    /// True literal
    True,
    /// False literal
    False,
    /// String value (unescaped)
    String(String),
    /// Number literal text
    Number(String),
    /// End of input
    Eof,
}

/// JSON lexer over UTF-8 text.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    limits: Limits,
}

impl<'a> Lexer<'a> {
    /// Create a lexer, checking size and UTF-8 validity up front.
    pub fn new(input: &'a [u8], limits: Limits) -> HelperResult<Self> {
        if input.len() as u64 > limits.max_input_size {
            return Err(ErrorCode::E110_InputTooLarge(
                input.len() as u64,
                limits.max_input_size,
            ));
        }

        let input = std::str::from_utf8(input).map_err(|_| ErrorCode::E105_InvalidUTF8)?;

        Ok(Self {
            input,
            pos: 0,
            limits,
        })
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    /// Read the next token.
    pub fn next_token(&mut self) -> HelperResult<Token> {
        self.skip_whitespace();

        let token = match self.peek() {
            None => return Ok(Token::Eof),
            Some(b'{') => Token::LeftBrace,
            Some(b'}') => Token::RightBrace,
            Some(b'[') => Token::LeftBracket,
            Some(b']') => Token::RightBracket,
            Some(b':') => Token::Colon,
            Some(b',') => Token::Comma,
            Some(b'"') => return self.read_string(),
            Some(b'-' | b'0'..=b'9') => return self.read_number(),
            Some(b't') => return self.read_literal("true", Token::True),
            Some(b'f') => return self.read_literal("false", Token::False),
            Some(b'n') => return self.read_literal("null", Token::Null),
            Some(_) => return Err(ErrorCode::E100_InvalidJSON),
        };
        self.pos += 1;
        Ok(token)
    }

    fn read_string(&mut self) -> HelperResult<Token> {
        // Opening quote
        self.pos += 1;
        let mut result = String::new();

        loop {
            match self.peek() {
                None => return Err(ErrorCode::E100_InvalidJSON),
                Some(b'"') => {
                    self.pos += 1;
                    break;
                }
                Some(b'\\') => {
                    self.pos += 1;
                    let ch = self.read_escape_sequence()?;
                    result.push(ch);
                }
                Some(b) if b < 0x20 => return Err(ErrorCode::E100_InvalidJSON),
                Some(_) => {
                    let ch = self.input[self.pos..]
                        .chars()
                        .next()
                        .ok_or(ErrorCode::E105_InvalidUTF8)?;
                    self.pos += ch.len_utf8();
                    result.push(ch);
                }
            }

            if result.len() as u64 > self.limits.max_string_length {
                return Err(ErrorCode::E112_StringTooLong(
                    result.len() as u64,
                    self.limits.max_string_length,
                ));
            }
        }

        Ok(Token::String(result))
    }

    fn read_escape_sequence(&mut self) -> HelperResult<char> {
        match self.bump() {
            Some(b'"') => Ok('"'),
            Some(b'\\') => Ok('\\'),
            Some(b'/') => Ok('/'),
            Some(b'b') => Ok('\x08'),
            Some(b'f') => Ok('\x0C'),
            Some(b'n') => Ok('\n'),
            Some(b'r') => Ok('\r'),
            Some(b't') => Ok('\t'),
            Some(b'u') => self.read_unicode_escape(),
            _ => Err(ErrorCode::E100_InvalidJSON),
        }
    }

    fn read_unicode_escape(&mut self) -> HelperResult<char> {
        let unit = self.read_hex4()?;

        if (0xD800..=0xDBFF).contains(&unit) {
            if self.bump() != Some(b'\\') || self.bump() != Some(b'u') {
                return Err(ErrorCode::E105_InvalidUTF8);
            }
            let low = self.read_hex4()?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(ErrorCode::E105_InvalidUTF8);
            }
            let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
            return char::from_u32(combined).ok_or(ErrorCode::E105_InvalidUTF8);
        }

        // Lone low surrogate
        if (0xDC00..=0xDFFF).contains(&unit) {
            return Err(ErrorCode::E105_InvalidUTF8);
        }

        char::from_u32(unit).ok_or(ErrorCode::E105_InvalidUTF8)
    }

    fn read_hex4(&mut self) -> HelperResult<u32> {
        let mut value = 0u32;
        for _ in 0..4 {
            let digit = self
                .bump()
                .and_then(|b| (b as char).to_digit(16))
                .ok_or(ErrorCode::E100_InvalidJSON)?;
            value = (value << 4) | digit;
        }
        Ok(value)
    }

    fn eat_digits(&mut self) -> usize {
        let start = self.pos;
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }
        self.pos - start
    }

    fn read_number(&mut self) -> HelperResult<Token> {
        let start = self.pos;

        if self.peek() == Some(b'-') {
            self.pos += 1;
        }

        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                if let Some(b'0'..=b'9') = self.peek() {
                    return Err(ErrorCode::E100_InvalidJSON);
                }
            }
            Some(b'1'..=b'9') => {
                self.eat_digits();
            }
            _ => return Err(ErrorCode::E100_InvalidJSON),
        }

        if self.peek() == Some(b'.') {
            self.pos += 1;
            if self.eat_digits() == 0 {
                return Err(ErrorCode::E100_InvalidJSON);
            }
        }

        if let Some(b'e' | b'E') = self.peek() {
            self.pos += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.pos += 1;
            }
            if self.eat_digits() == 0 {
                return Err(ErrorCode::E100_InvalidJSON);
            }
        }

        Ok(Token::Number(self.input[start..self.pos].to_string()))
    }

    fn read_literal(&mut self, literal: &str, token: Token) -> HelperResult<Token> {
        if self.input[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            Ok(token)
        } else {
            Err(ErrorCode::E100_InvalidJSON)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> HelperResult<Vec<Token>> {
        let mut lexer = Lexer::new(input.as_bytes(), Limits::lenient())?;
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token()?;
            if token == Token::Eof {
                break;
            }
            tokens.push(token);
        }
        Ok(tokens)
    }

    #[test]
    fn test_structural_tokens() {
        let tokens = lex("{}[],:").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::LeftBrace,
                Token::RightBrace,
                Token::LeftBracket,
                Token::RightBracket,
                Token::Comma,
                Token::Colon,
            ]
        );
    }

    #[test]
    fn test_literals() {
        let tokens = lex("null true false").unwrap();
        assert_eq!(tokens, vec![Token::Null, Token::True, Token::False]);
        assert!(lex("nul").is_err());
    }

    #[test]
    fn test_string_escapes() {
        let tokens = lex(r#""a\nb\tc\/\"""#).unwrap();
        assert_eq!(tokens, vec![Token::String("a\nb\tc/\"".to_string())]);
    }

    #[test]
    fn test_unicode() {
        assert_eq!(lex(r#""\u0041""#).unwrap(), vec![Token::String("A".into())]);
        assert_eq!(
            lex(r#""\uD83D\uDE00""#).unwrap(),
            vec![Token::String("\u{1F600}".into())]
        );
        assert_eq!(lex("\"héllo\"").unwrap(), vec![Token::String("héllo".into())]);
        assert!(lex(r#""\uD800""#).is_err());
        assert!(lex(r#""\uDC00""#).is_err());
    }

    #[test]
    fn test_numbers_kept_verbatim() {
        let tokens = lex("42 -123 0 3.14 1e10 -2.5E-3").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number("42".to_string()),
                Token::Number("-123".to_string()),
                Token::Number("0".to_string()),
                Token::Number("3.14".to_string()),
                Token::Number("1e10".to_string()),
                Token::Number("-2.5E-3".to_string()),
            ]
        );
    }

    #[test]
    fn test_malformed_numbers() {
        assert!(lex("01").is_err());
        assert!(lex("1.").is_err());
        assert!(lex("1e").is_err());
        assert!(lex("-").is_err());
    }

    #[test]
    fn test_control_character_rejected() {
        assert!(lex("\"a\nb\"").is_err());
    }

    #[test]
    fn test_invalid_utf8() {
        let result = Lexer::new(&[0xFF, 0xFE], Limits::standard());
        assert_eq!(result.err(), Some(ErrorCode::E105_InvalidUTF8));
    }

    #[test]
    fn test_input_too_large() {
        let mut limits = Limits::standard();
        limits.max_input_size = 10;
        let result = Lexer::new(b"this is more than 10 bytes", limits);
        assert_eq!(result.err(), Some(ErrorCode::E110_InputTooLarge(26, 10)));
    }

    #[test]
    fn test_string_too_long() {
        let mut limits = Limits::standard();
        limits.max_string_length = 3;
        let mut lexer = Lexer::new(br#""abcd""#, limits).unwrap();
        assert_eq!(lexer.next_token().err().map(|e| e.code()), Some(112));
    }
}
