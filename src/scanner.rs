//! Walk the argument tokens and feed every flag to its marshaller.
//!
//! Value errors (missing or unparsable parameter) abort the scan at once. Unknown flags
//! are collected and reported together after the last token.

use crate::error::ArgsError;
use crate::marshaller::Marshaller;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Prefix that marks a token as a group of flags.
pub const FLAG_PREFIX: char = '-';

/// Scan `tokens`, updating `marshallers` in place. Returns the set of flags found.
///
/// Tokens without the flag prefix are skipped, except where a marshaller consumes
/// them as its value.
pub fn scan<S: AsRef<str>>(
    marshallers: &mut HashMap<char, Marshaller>,
    tokens: &[S],
) -> Result<HashSet<char>, ArgsError> {
    let mut found = HashSet::new();
    let mut unexpected = BTreeSet::new();
    let mut cursor = 0;

    while let Some(token) = tokens.get(cursor) {
        cursor += 1;
        let token: &str = token.as_ref();
        let Some(flags) = token.strip_prefix(FLAG_PREFIX) else {
            continue;
        };
        for id in flags.chars() {
            match marshallers.get_mut(&id) {
                Some(m) => {
                    tracing::trace!(%id, cursor, "setting flag");
                    cursor = m.consume(id, tokens, cursor)?;
                    found.insert(id);
                }
                None => {
                    tracing::debug!(%id, "unexpected flag");
                    unexpected.insert(id);
                }
            }
        }
    }

    if !unexpected.is_empty() {
        return Err(ArgsError::UnexpectedArgument {
            flags: unexpected.into_iter().collect(),
        });
    }
    tracing::debug!(tokens = tokens.len(), found = found.len(), "scanned arguments");
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::compile;

    fn marshallers(schema: &str) -> HashMap<char, Marshaller> {
        compile(schema).expect("schema").marshallers()
    }

    #[test]
    fn grouped_flags_share_the_cursor() {
        let mut m = marshallers("b, d#, x##");
        let found = scan(&mut m, &["-bdx", "3", "1.5"]).expect("scan");
        assert_eq!(m[&'b'], Marshaller::Boolean(true));
        assert_eq!(m[&'d'], Marshaller::Integer(3));
        assert_eq!(m[&'x'], Marshaller::Double(1.5));
        assert_eq!(found, HashSet::from(['b', 'd', 'x']));
    }

    #[test]
    fn consumed_values_are_not_scanned_as_flags() {
        let mut m = marshallers("s*");
        scan(&mut m, &["-s", "-zz"]).expect("scan");
        assert_eq!(m[&'s'], Marshaller::String("-zz".to_string()));
    }

    #[test]
    fn bare_words_and_lone_prefix_are_ignored() {
        let mut m = marshallers("b");
        let found = scan(&mut m, &["file.txt", "-", "b"]).expect("scan");
        assert!(found.is_empty());
        assert_eq!(m[&'b'], Marshaller::Boolean(false));
    }

    #[test]
    fn unexpected_flags_are_sorted_and_deduplicated() {
        let mut m = marshallers("b");
        let err = scan(&mut m, &["-zb", "-az", "-b"]).unwrap_err();
        assert_eq!(err, ArgsError::UnexpectedArgument { flags: "az".to_string() });
    }

    #[test]
    fn value_error_beats_earlier_unexpected_flag() {
        let mut m = marshallers("d#");
        let err = scan(&mut m, &["-q", "-d", "nope", "-r"]).unwrap_err();
        assert_eq!(err, ArgsError::InvalidInteger { id: 'd', value: "nope".to_string() });
    }

    #[test]
    fn missing_value_in_group_names_the_flag() {
        let mut m = marshallers("b, s*");
        let err = scan(&mut m, &["-sb"]).unwrap_err();
        assert_eq!(err, ArgsError::MissingString { id: 's' });
    }
}
