//! Arbor CLI
//!
//! Renders and evaluates the built-in sample programs.

use arborc::commands::{list_samples, parse_binding, run_sample, show_sample};

fn main() {
    arborc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "list" => list_samples(),
        "show" => {
            if args.len() < 3 {
                eprintln!("Usage: arbor show <sample>");
                std::process::exit(1);
            }
            exit_on_error(show_sample(&args[2]));
        }
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: arbor run <sample> [name=int ...]");
                std::process::exit(1);
            }
            let mut bindings = Vec::new();
            for arg in &args[3..] {
                match parse_binding(arg) {
                    Ok(binding) => bindings.push(binding),
                    Err(message) => {
                        eprintln!("error: {message}");
                        std::process::exit(1);
                    }
                }
            }
            exit_on_error(run_sample(&args[2], &bindings));
        }
        other => {
            eprintln!("error: unknown command `{other}`");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn exit_on_error(result: Result<(), String>) {
    if let Err(message) = result {
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: arbor <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  list                         List built-in sample programs");
    eprintln!("  show <sample>                Render a sample without evaluating it");
    eprintln!("  run <sample> [name=int ...]  Render and evaluate a sample");
}
