//! Parsed command-line arguments and their typed accessors.

use crate::error::ArgsError;
use crate::marshaller::Marshaller;
use crate::scanner;
use crate::schema::{self, ArgType};
use std::collections::{HashMap, HashSet};

/// Arguments parsed against a schema.
///
/// ```
/// use flagschema::Args;
///
/// let args = Args::new("l, p#, d*", &["-l", "-p", "8080", "-d", "/var/tmp"]).unwrap();
/// assert!(args.get_boolean('l'));
/// assert_eq!(args.get_int('p'), 8080);
/// assert_eq!(args.get_string('d'), "/var/tmp");
/// ```
///
/// Accessors never fail: an undeclared flag, or one declared with another type,
/// yields the type's default.
#[derive(Debug, Clone)]
pub struct Args {
    schema: String,
    marshallers: HashMap<char, Marshaller>,
    found: HashSet<char>,
}

impl Args {
    /// Compile `schema` and scan `tokens` against it.
    pub fn new<S: AsRef<str>>(schema: &str, tokens: &[S]) -> Result<Self, ArgsError> {
        let compiled = schema::compile(schema)?;
        let mut marshallers = compiled.marshallers();
        let found = scanner::scan(&mut marshallers, tokens)?;
        Ok(Args {
            schema: compiled.source().to_string(),
            marshallers,
            found,
        })
    }

    pub fn get_boolean(&self, id: char) -> bool {
        self.get(id).and_then(Marshaller::as_bool).unwrap_or(false)
    }

    pub fn get_string(&self, id: char) -> &str {
        self.get(id).and_then(Marshaller::as_str).unwrap_or("")
    }

    pub fn get_int(&self, id: char) -> i32 {
        self.get(id).and_then(Marshaller::as_i32).unwrap_or(0)
    }

    pub fn get_double(&self, id: char) -> f64 {
        self.get(id).and_then(Marshaller::as_f64).unwrap_or(0.0)
    }

    /// Raw marshaller for a declared flag.
    pub fn get(&self, id: char) -> Option<&Marshaller> {
        self.marshallers.get(&id)
    }

    /// True if `id` is declared in the schema, whether or not it was supplied.
    pub fn has(&self, id: char) -> bool {
        self.marshallers.contains_key(&id)
    }

    /// True if `id` appeared on the command line.
    pub fn found(&self, id: char) -> bool {
        self.found.contains(&id)
    }

    /// Declared flags and their types, sorted by flag.
    pub fn declared(&self) -> Vec<(char, ArgType)> {
        let mut flags: Vec<_> = self
            .marshallers
            .iter()
            .map(|(id, m)| (*id, m.arg_type()))
            .collect();
        flags.sort_by_key(|(id, _)| *id);
        flags
    }

    /// The schema wrapped as `-[schema]`, or empty for an empty schema.
    pub fn usage(&self) -> String {
        if self.schema.is_empty() {
            String::new()
        } else {
            format!("-[{}]", self.schema)
        }
    }
}
