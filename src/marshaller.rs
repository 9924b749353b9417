//! Per-flag value holders that decode zero or one token from the argument list.

use crate::error::ArgsError;
use crate::schema::ArgType;
use std::fmt;

/// Current value of one declared flag.
#[derive(Debug, Clone, PartialEq)]
pub enum Marshaller {
    Boolean(bool),
    Integer(i32),
    Double(f64),
    String(String),
}

impl Marshaller {
    /// Fresh marshaller holding the type's default value.
    pub fn new(arg_type: ArgType) -> Self {
        match arg_type {
            ArgType::Boolean => Marshaller::Boolean(false),
            ArgType::Integer => Marshaller::Integer(0),
            ArgType::Double => Marshaller::Double(0.0),
            ArgType::String => Marshaller::String(String::new()),
        }
    }

    pub fn arg_type(&self) -> ArgType {
        match self {
            Marshaller::Boolean(_) => ArgType::Boolean,
            Marshaller::Integer(_) => ArgType::Integer,
            Marshaller::Double(_) => ArgType::Double,
            Marshaller::String(_) => ArgType::String,
        }
    }

    /// Apply flag `id` at `cursor`, the index of the next unread token.
    /// Returns the cursor past any consumed value token.
    pub fn consume<S: AsRef<str>>(
        &mut self,
        id: char,
        tokens: &[S],
        cursor: usize,
    ) -> Result<usize, ArgsError> {
        let next: Option<&str> = tokens.get(cursor).map(|t| t.as_ref());
        match self {
            Marshaller::Boolean(v) => {
                *v = true;
                Ok(cursor)
            }
            Marshaller::Integer(v) => {
                let raw = next.ok_or(ArgsError::MissingInteger { id })?;
                *v = raw.parse::<i32>().map_err(|_| ArgsError::InvalidInteger {
                    id,
                    value: raw.to_string(),
                })?;
                Ok(cursor + 1)
            }
            Marshaller::Double(v) => {
                let raw = next.ok_or(ArgsError::MissingDouble { id })?;
                *v = raw.parse::<f64>().map_err(|_| ArgsError::InvalidDouble {
                    id,
                    value: raw.to_string(),
                })?;
                Ok(cursor + 1)
            }
            Marshaller::String(v) => {
                let raw = next.ok_or(ArgsError::MissingString { id })?;
                *v = raw.to_string();
                Ok(cursor + 1)
            }
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Marshaller::Boolean(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Marshaller::Integer(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Marshaller::Double(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Marshaller::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Marshaller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marshaller::Boolean(x) => write!(f, "{}", x),
            Marshaller::Integer(x) => write!(f, "{}", x),
            Marshaller::Double(x) => write!(f, "{}", x),
            Marshaller::String(s) => write!(f, "{:?}", s),
        }
    }
}
