//! Compile a flag schema such as `"l, p#, d*, v##"` into flag definitions using PEST.

use crate::error::ArgsError;
use crate::marshaller::Marshaller;
use pest::error::InputLocation;
use pest::Parser;
use pest_derive::Parser as PestParser;
use std::collections::HashMap;
use std::fmt;

#[derive(PestParser)]
#[grammar = "grammar.pest"]
struct SchemaParser;

/// Value type of a flag, selected by the suffix after the flag letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgType {
    /// No suffix.
    Boolean,
    /// `#`
    Integer,
    /// `##`
    Double,
    /// `*`
    String,
}

impl ArgType {
    pub fn from_suffix(suffix: &str) -> Option<ArgType> {
        match suffix {
            "" => Some(ArgType::Boolean),
            "*" => Some(ArgType::String),
            "#" => Some(ArgType::Integer),
            "##" => Some(ArgType::Double),
            _ => None,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            ArgType::Boolean => "",
            ArgType::String => "*",
            ArgType::Integer => "#",
            ArgType::Double => "##",
        }
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArgType::Boolean => "boolean",
            ArgType::Integer => "integer",
            ArgType::Double => "double",
            ArgType::String => "string",
        };
        f.write_str(name)
    }
}

/// One schema element: a flag letter and its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagDef {
    pub id: char,
    pub arg_type: ArgType,
}

/// A compiled schema. Keeps the source text verbatim for usage rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    source: String,
    definitions: Vec<FlagDef>,
}

impl Schema {
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Definitions in declaration order, redeclarations included.
    pub fn definitions(&self) -> &[FlagDef] {
        &self.definitions
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// One fresh marshaller per flag. A redeclared flag keeps its last definition.
    pub fn marshallers(&self) -> HashMap<char, Marshaller> {
        self.definitions
            .iter()
            .map(|def| (def.id, Marshaller::new(def.arg_type)))
            .collect()
    }
}

/// Compile schema source. The first invalid element aborts compilation.
pub fn compile(source: &str) -> Result<Schema, ArgsError> {
    let mut pairs = SchemaParser::parse(Rule::schema, source).map_err(|e| {
        let pos = match e.location {
            InputLocation::Pos(p) => p,
            InputLocation::Span((p, _)) => p,
        };
        ArgsError::InvalidArgumentName {
            id: source.get(pos..).and_then(|s| s.chars().next()).unwrap_or('\0'),
            schema: source.to_string(),
        }
    })?;

    let mut definitions = Vec::new();
    if let Some(schema) = pairs.next() {
        for element in schema.into_inner() {
            if element.as_rule() != Rule::element {
                continue;
            }
            if let Some(def) = build_element(element, source)? {
                tracing::trace!(id = %def.id, arg_type = %def.arg_type, "compiled schema element");
                definitions.push(def);
            }
        }
    }

    tracing::debug!(schema = source, flags = definitions.len(), "compiled schema");
    Ok(Schema {
        source: source.to_string(),
        definitions,
    })
}

fn build_element(
    pair: pest::iterators::Pair<Rule>,
    source: &str,
) -> Result<Option<FlagDef>, ArgsError> {
    let mut id = None;
    let mut suffix = "";
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::flag_id => id = inner.as_str().chars().next(),
            Rule::suffix => suffix = inner.as_str(),
            _ => {}
        }
    }
    // Blank element, e.g. between two commas.
    let Some(id) = id else {
        return Ok(None);
    };
    if !id.is_alphabetic() {
        return Err(ArgsError::InvalidArgumentName {
            id,
            schema: source.to_string(),
        });
    }
    let arg_type = ArgType::from_suffix(suffix).ok_or_else(|| ArgsError::InvalidFormat {
        id,
        format: suffix.to_string(),
    })?;
    Ok(Some(FlagDef { id, arg_type }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(schema: &str) -> Vec<(char, ArgType)> {
        compile(schema)
            .expect("compile")
            .definitions()
            .iter()
            .map(|d| (d.id, d.arg_type))
            .collect()
    }

    #[test]
    fn all_suffixes() {
        assert_eq!(
            types("l,p#,d*,v##"),
            vec![
                ('l', ArgType::Boolean),
                ('p', ArgType::Integer),
                ('d', ArgType::String),
                ('v', ArgType::Double),
            ]
        );
    }

    #[test]
    fn whitespace_and_blank_elements_are_skipped() {
        assert_eq!(
            types("  a ,, b#\t, ,"),
            vec![('a', ArgType::Boolean), ('b', ArgType::Integer)]
        );
        assert!(compile("   ").expect("blank").is_empty());
    }

    #[test]
    fn internal_space_is_part_of_the_suffix() {
        let err = compile("f #").unwrap_err();
        assert_eq!(err, ArgsError::InvalidFormat { id: 'f', format: " #".to_string() });
    }

    #[test]
    fn unicode_letters_are_valid_ids() {
        assert_eq!(types("é*"), vec![('é', ArgType::String)]);
    }

    #[test]
    fn suffix_round_trips_through_from_suffix() {
        for t in [ArgType::Boolean, ArgType::Integer, ArgType::Double, ArgType::String] {
            assert_eq!(ArgType::from_suffix(t.suffix()), Some(t));
        }
        assert_eq!(ArgType::from_suffix("###"), None);
    }

    #[test]
    fn first_bad_element_wins() {
        let err = compile("a~, 1").unwrap_err();
        assert_eq!(err, ArgsError::InvalidFormat { id: 'a', format: "~".to_string() });
    }
}
