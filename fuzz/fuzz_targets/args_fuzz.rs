//! Args fuzz target: the first line of the input is the schema, the remaining lines
//! are tokens. Parsing must not panic; it returns Ok(Args) or Err(ArgsError).
//! Build with: cargo fuzz run args_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    let s = match std::str::from_utf8(data) {
        Ok(x) => x,
        Err(_) => return,
    };
    let mut lines = s.lines();
    let schema = lines.next().unwrap_or("");
    let tokens: Vec<&str> = lines.collect();
    if let Ok(args) = flagschema::Args::new(schema, &tokens) {
        for (id, _) in args.declared() {
            let _ = (args.get_boolean(id), args.get_int(id), args.get_double(id), args.get_string(id));
        }
        let _ = args.usage();
    }
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run args_fuzz");
}
