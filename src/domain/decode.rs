// SPDX-License-Identifier: MIT OR Apache-2.0

//! Literal-expression decoder.
//!
//! This module provides [`decode`], a recursive-descent parser that turns a
//! literal-expression string into a typed [`Literal`]. The grammar is the
//! constant-expression subset only: quoted strings, decimal integers and
//! floats, the keywords `True`/`False`/`None`, and list/mapping composites
//! whose elements are themselves literals. Anything else, including
//! identifiers, calls, and attribute access, is rejected with an error.
//!
//! Configuration files may originate from a remote, less-trusted source, so
//! the decoder never evaluates its input; it only recognizes the grammar
//! above.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::literal::Literal;
use std::collections::BTreeMap;

/// Maximum nesting depth for composite literals.
/// This bounds recursion on adversarial inputs like `[[[[...`.
const MAX_DEPTH: usize = 128;

/// Decodes a literal-expression string into a typed value.
///
/// The whole input must be a single literal; leading and trailing whitespace
/// is ignored, anything else after the literal is an error.
///
/// # Examples
///
/// ```
/// use litcfg::domain::decode::decode;
/// use litcfg::domain::literal::Literal;
///
/// assert_eq!(decode("'abc'").unwrap(), Literal::Str("abc".to_string()));
/// assert_eq!(decode("42").unwrap(), Literal::Int(42));
/// assert_eq!(decode("True").unwrap(), Literal::Bool(true));
/// assert_eq!(decode("None").unwrap(), Literal::Null);
/// assert!(decode("import os").is_err());
/// ```
pub fn decode(literal: &str) -> Result<Literal> {
    let mut decoder = Decoder::new(literal);
    decoder.skip_whitespace();
    let value = decoder.parse_value(0)?;
    decoder.skip_whitespace();
    if let Some(c) = decoder.peek() {
        return Err(ConfigError::decode(
            format!("unexpected trailing character '{}'", c),
            decoder.pos,
        ));
    }
    Ok(value)
}

/// Cursor over the literal text.
struct Decoder<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Decoder<'a> {
    fn new(input: &'a str) -> Self {
        Decoder { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<Literal> {
        if depth > MAX_DEPTH {
            return Err(ConfigError::decode("literal nested too deeply", self.pos));
        }
        match self.peek() {
            Some(quote @ ('\'' | '"')) => self.parse_string(quote),
            Some('[') => self.parse_list(depth),
            Some('{') => self.parse_map(depth),
            Some('T') => self.parse_keyword("True", Literal::Bool(true)),
            Some('F') => self.parse_keyword("False", Literal::Bool(false)),
            Some('N') => self.parse_keyword("None", Literal::Null),
            Some('+' | '-' | '.' | '0'..='9') => self.parse_number(),
            Some(c) => Err(ConfigError::decode(
                format!("unexpected character '{}'", c),
                self.pos,
            )),
            None => Err(ConfigError::decode("unexpected end of input", self.pos)),
        }
    }

    fn parse_keyword(&mut self, word: &str, value: Literal) -> Result<Literal> {
        if self.input[self.pos..].starts_with(word) {
            self.pos += word.len();
            Ok(value)
        } else {
            Err(ConfigError::decode(
                format!("expected keyword '{}'", word),
                self.pos,
            ))
        }
    }

    fn parse_string(&mut self, quote: char) -> Result<Literal> {
        let start = self.pos;
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                None => {
                    return Err(ConfigError::decode("unterminated string literal", start));
                }
                Some(c) if c == quote => return Ok(Literal::Str(out)),
                Some('\\') => {
                    let escape_pos = self.pos - 1;
                    match self.bump() {
                        Some('\\') => out.push('\\'),
                        Some('\'') => out.push('\''),
                        Some('"') => out.push('"'),
                        Some('n') => out.push('\n'),
                        Some('t') => out.push('\t'),
                        Some('r') => out.push('\r'),
                        Some('0') => out.push('\0'),
                        Some('x') => out.push(self.parse_hex_escape(escape_pos)?),
                        Some(c) => {
                            return Err(ConfigError::decode(
                                format!("unsupported escape sequence '\\{}'", c),
                                escape_pos,
                            ));
                        }
                        None => {
                            return Err(ConfigError::decode(
                                "unterminated string literal",
                                start,
                            ));
                        }
                    }
                }
                Some(c) => out.push(c),
            }
        }
    }

    fn parse_hex_escape(&mut self, escape_pos: usize) -> Result<char> {
        let mut code = 0u32;
        for _ in 0..2 {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| {
                    ConfigError::decode("expected two hex digits after '\\x'", escape_pos)
                })?;
            code = code * 16 + digit;
        }
        // Always valid: code is at most 0xFF
        char::from_u32(code)
            .ok_or_else(|| ConfigError::decode("invalid hex escape", escape_pos))
    }

    fn parse_number(&mut self) -> Result<Literal> {
        let start = self.pos;
        if matches!(self.peek(), Some('+' | '-')) {
            self.bump();
        }
        let int_digits = self.consume_digits();
        let mut is_float = false;
        if self.peek() == Some('.') {
            is_float = true;
            self.bump();
            let frac_digits = self.consume_digits();
            if int_digits == 0 && frac_digits == 0 {
                return Err(ConfigError::decode("expected digits in number", start));
            }
        } else if int_digits == 0 {
            return Err(ConfigError::decode("expected digits in number", start));
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            is_float = true;
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            if self.consume_digits() == 0 {
                return Err(ConfigError::decode("expected exponent digits", start));
            }
        }
        let text = &self.input[start..self.pos];
        if is_float {
            let value = text
                .parse::<f64>()
                .map_err(|e| ConfigError::decode(format!("invalid float: {}", e), start))?;
            Ok(Literal::Float(value))
        } else {
            let value = text
                .parse::<i64>()
                .map_err(|e| ConfigError::decode(format!("invalid integer: {}", e), start))?;
            Ok(Literal::Int(value))
        }
    }

    fn consume_digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.peek(), Some('0'..='9')) {
            self.bump();
            count += 1;
        }
        count
    }

    fn parse_list(&mut self, depth: usize) -> Result<Literal> {
        self.bump();
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some(']') {
                self.bump();
                return Ok(Literal::List(items));
            }
            items.push(self.parse_value(depth + 1)?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(']') => {
                    self.bump();
                    return Ok(Literal::List(items));
                }
                _ => {
                    return Err(ConfigError::decode(
                        "expected ',' or ']' in list literal",
                        self.pos,
                    ));
                }
            }
        }
    }

    fn parse_map(&mut self, depth: usize) -> Result<Literal> {
        self.bump();
        let mut entries = BTreeMap::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some('}') {
                self.bump();
                return Ok(Literal::Map(entries));
            }
            let key_pos = self.pos;
            let key = match self.parse_value(depth + 1)? {
                Literal::Str(s) => s,
                _ => {
                    return Err(ConfigError::decode(
                        "mapping keys must be string literals",
                        key_pos,
                    ));
                }
            };
            self.skip_whitespace();
            if self.peek() != Some(':') {
                return Err(ConfigError::decode(
                    "expected ':' in mapping literal",
                    self.pos,
                ));
            }
            self.bump();
            self.skip_whitespace();
            let value = self.parse_value(depth + 1)?;
            entries.insert(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some('}') => {
                    self.bump();
                    return Ok(Literal::Map(entries));
                }
                _ => {
                    return Err(ConfigError::decode(
                        "expected ',' or '}' in mapping literal",
                        self.pos,
                    ));
                }
            }
        }
    }
}
