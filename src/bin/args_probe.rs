//! Parse tokens against a flag schema and print the decoded values.
//!
//! Usage:
//!   args_probe [--usage] SCHEMA [TOKEN ...]
//!
//! Example:
//!   args_probe "l, p#, d*" -l -p 3002 -d /var/tmp
//!
//! Options:
//!   --usage, -u   Print the usage line for SCHEMA instead of the values
//!
//! Prints one line per declared flag: `-<flag> <type>: <value>`. On a parse error the
//! message goes to stderr and the exit code is 1. Set RUST_LOG=debug to trace the scan.

use anyhow::Context;
use flagschema::Args;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    // Options are only recognised before the schema; later tokens belong to the parser.
    let usage_only = match args.first().map(String::as_str) {
        Some("--usage") | Some("-u") => {
            args.remove(0);
            true
        }
        _ => false,
    };
    if args.is_empty() {
        eprintln!("usage: args_probe [--usage] SCHEMA [TOKEN ...]");
        std::process::exit(2);
    }
    let schema = args.remove(0);

    let parsed = match Args::new(&schema, args.as_slice()) {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!(code = ?e.code(), id = ?e.argument_id(), "parse failed");
            eprintln!("error: {}", e);
            // Schema errors have no usage line to show.
            if let Ok(bare) = Args::new(&schema, &[] as &[String]) {
                let usage = bare.usage();
                if !usage.is_empty() {
                    eprintln!("usage: {}", usage);
                }
            }
            std::process::exit(1);
        }
    };

    if usage_only {
        println!("{}", parsed.usage());
        return Ok(());
    }

    for (id, arg_type) in parsed.declared() {
        let value = parsed
            .get(id)
            .with_context(|| format!("flag -{} has no marshaller", id))?;
        let marker = if parsed.found(id) { "" } else { " (default)" };
        println!("-{} {}: {}{}", id, arg_type, value, marker);
    }
    Ok(())
}
