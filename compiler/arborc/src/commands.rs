//! Command implementations for the `arbor` binary.
//!
//! Commands return `Err` with a user-facing message; `main` decides the
//! exit code.

use arbor_eval::{evaluate_with_globals, Value};
use arbor_fmt::format_expr;
use tracing::debug;

use crate::samples;

/// List the built-in samples with their one-line summaries.
pub fn list_samples() {
    for sample in samples::all() {
        println!("{:<12} {}", sample.name, sample.summary);
    }
}

/// Render a sample without evaluating it.
pub fn show_sample(name: &str) -> Result<(), String> {
    let sample = find(name)?;
    let program = sample.build();
    println!(
        "{}",
        format_expr(&program.arena, &program.interner, program.root)
    );
    Ok(())
}

/// Render a sample, evaluate it with the given global bindings, and print
/// the result.
pub fn run_sample(name: &str, bindings: &[(String, Value)]) -> Result<(), String> {
    let sample = find(name)?;
    let program = sample.build();
    println!(
        "{}",
        format_expr(&program.arena, &program.interner, program.root)
    );

    let globals: Vec<_> = bindings
        .iter()
        .map(|(name, value)| (program.interner.intern(name), *value))
        .collect();
    debug!(sample = name, seeded = globals.len(), "evaluating");

    let value = evaluate_with_globals(&program.arena, &program.interner, program.root, globals)
        .map_err(|error| error.to_string())?;
    println!("{value}");
    Ok(())
}

/// Parse a `name=int` binding argument.
pub fn parse_binding(arg: &str) -> Result<(String, Value), String> {
    let Some((name, value)) = arg.split_once('=') else {
        return Err(format!("expected name=int, got `{arg}`"));
    };
    if name.is_empty() {
        return Err(format!("expected name=int, got `{arg}`"));
    }
    let value: Value = value
        .parse()
        .map_err(|_| format!("invalid integer in `{arg}`"))?;
    Ok((name.to_string(), value))
}

fn find(name: &str) -> Result<&'static samples::Sample, String> {
    samples::find(name).ok_or_else(|| format!("unknown sample `{name}` (try `arbor list`)"))
}

#[cfg(test)]
mod tests;
