// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed configuration value produced by the literal decoder.
//!
//! This module provides the `Literal` type, the tagged union of every value
//! shape the literal grammar can express. Literals are produced by
//! [`decode`](crate::domain::decode::decode) and are immutable once
//! constructed.

use std::collections::BTreeMap;
use std::fmt;

/// A decoded literal value.
///
/// `Literal` is the result of decoding a literal-expression string: a plain
/// string, a number, a boolean, a null, or a composite list/mapping whose
/// elements are themselves literals.
///
/// # Examples
///
/// ```
/// use litcfg::domain::literal::Literal;
///
/// let value = Literal::Int(42);
/// assert_eq!(value.as_i64(), Some(42));
/// assert_eq!(value.to_string(), "42");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// A string value, e.g. `'hello'`.
    Str(String),
    /// A decimal integer, e.g. `42`.
    Int(i64),
    /// A decimal float, e.g. `3.14` or `1e3`.
    Float(f64),
    /// A boolean keyword, `True` or `False`.
    Bool(bool),
    /// The null keyword, `None`.
    Null,
    /// A list literal, e.g. `['a', 'b']`.
    List(Vec<Literal>),
    /// A mapping literal with string keys, e.g. `{'k': 1}`.
    Map(BTreeMap<String, Literal>),
}

impl Literal {
    /// Returns the string content if this is a `Str` literal.
    ///
    /// # Examples
    ///
    /// ```
    /// use litcfg::domain::literal::Literal;
    ///
    /// let value = Literal::Str("hello".to_string());
    /// assert_eq!(value.as_str(), Some("hello"));
    /// assert_eq!(Literal::Int(1).as_str(), None);
    /// ```
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer value if this is an `Int` literal.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Literal::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float value if this is a `Float` literal.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the boolean value if this is a `Bool` literal.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Literal::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns `true` if this is the `Null` literal.
    ///
    /// # Examples
    ///
    /// ```
    /// use litcfg::domain::literal::Literal;
    ///
    /// assert!(Literal::Null.is_null());
    /// assert!(!Literal::Bool(false).is_null());
    /// ```
    pub fn is_null(&self) -> bool {
        matches!(self, Literal::Null)
    }

    /// Returns the elements if this is a `List` literal.
    pub fn as_list(&self) -> Option<&[Literal]> {
        match self {
            Literal::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries if this is a `Map` literal.
    pub fn as_map(&self) -> Option<&BTreeMap<String, Literal>> {
        match self {
            Literal::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Encodes a plain string as a quoted literal.
    ///
    /// The result is single-quoted with backslash escapes, so decoding it
    /// yields `Literal::Str` holding the original text. This is the encoding
    /// the secrets transform applies to every secret value before writing the
    /// credentials file.
    ///
    /// # Examples
    ///
    /// ```
    /// use litcfg::domain::literal::Literal;
    ///
    /// assert_eq!(Literal::quote("xyz"), "'xyz'");
    /// assert_eq!(Literal::quote("it's"), r"'it\'s'");
    /// ```
    pub fn quote(s: &str) -> String {
        let mut out = String::with_capacity(s.len() + 2);
        out.push('\'');
        for c in s.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '\'' => out.push_str("\\'"),
                '\n' => out.push_str("\\n"),
                '\t' => out.push_str("\\t"),
                '\r' => out.push_str("\\r"),
                '\0' => out.push_str("\\0"),
                c if (c as u32) < 0x20 => {
                    out.push_str(&format!("\\x{:02x}", c as u32));
                }
                c => out.push(c),
            }
        }
        out.push('\'');
        out
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Str(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::Str(s)
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Int(n)
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Bool(b)
    }
}

/// Formats a float so it re-parses as a float rather than an integer.
fn fmt_float(f: f64, out: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = format!("{}", f);
    if text.contains('.') || text.contains('e') || text.contains('E') {
        write!(out, "{}", text)
    } else {
        write!(out, "{}.0", text)
    }
}

impl fmt::Display for Literal {
    /// Re-encodes the literal in the decoder's grammar.
    ///
    /// For finite values the output decodes back to an equal literal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(s) => write!(f, "{}", Literal::quote(s)),
            Literal::Int(n) => write!(f, "{}", n),
            Literal::Float(x) => fmt_float(*x, f),
            Literal::Bool(true) => write!(f, "True"),
            Literal::Bool(false) => write!(f, "False"),
            Literal::Null => write!(f, "None"),
            Literal::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Literal::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", Literal::quote(key), value)?;
                }
                write!(f, "}}")
            }
        }
    }
}
