//! # flagschema — Schema-driven command-line flag parser
//!
//! Parses single-letter command-line flags against a compact schema string and
//! exposes the decoded values through typed accessors.
//!
//! ## Schema
//!
//! A comma-separated list of elements; each element is a flag letter followed by an
//! optional type suffix. Whitespace around elements is ignored.
//!
//! | Suffix | Type    | Default |
//! |--------|---------|---------|
//! | (none) | boolean | `false` |
//! | `*`    | string  | `""`    |
//! | `#`    | integer | `0`     |
//! | `##`   | double  | `0.0`   |
//!
//! ```text
//! l, p#, d*, v##
//! ```
//!
//! declares boolean `l`, integer `p`, string `d` and double `v`.
//!
//! ## Arguments
//!
//! Tokens starting with `-` hold one or more flags (`-lp 80` sets `l` and reads `80` for
//! `p`). Non-boolean flags take the next token as their value. Other tokens are ignored.
//!
//! ## Usage
//!
//! ```
//! use flagschema::{Args, ErrorCode};
//!
//! let args = Args::new("l, p#, d*, v##", &["-l", "-p", "3002", "-v", "-0.5"]).unwrap();
//! assert!(args.get_boolean('l'));
//! assert_eq!(args.get_int('p'), 3002);
//! assert_eq!(args.get_double('v'), -0.5);
//! assert_eq!(args.get_string('d'), "");
//!
//! let err = Args::new("l", &["-lq"]).unwrap_err();
//! assert_eq!(err.code(), ErrorCode::UnexpectedArgument);
//! assert_eq!(err.to_string(), "Argument(s) -q unexpected.");
//! ```

pub mod args;
pub mod error;
pub mod marshaller;
pub mod scanner;
pub mod schema;

pub use args::Args;
pub use error::{ArgsError, ErrorCode};
pub use marshaller::Marshaller;
pub use scanner::scan;
pub use schema::{compile, ArgType, FlagDef, Schema};
