//! Blue CLI.

use bluec::commands::{
    is_blue_file, lex_file, parse_debug_args, parse_file, parse_run_args, run_file,
};
use bluec::DriverError;

fn main() {
    bluec::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "run" => run_command(&args[2..]),
        "lex" => parse_debug_args(&args[2..]).and_then(|(path, format)| {
            lex_file(&path, format)?;
            Ok(true)
        }),
        "parse" => parse_debug_args(&args[2..]).and_then(|(path, format)| {
            parse_file(&path, format)?;
            Ok(true)
        }),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(true)
        }
        "version" | "--version" | "-V" => {
            println!("Blue {}", env!("CARGO_PKG_VERSION"));
            Ok(true)
        }
        _ => {
            // A bare `.blue` path is shorthand for `run`
            if is_blue_file(command) {
                run_command(&args[1..])
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            eprintln!("error: {error}");
            if matches!(
                error,
                DriverError::MissingPath | DriverError::UnknownOption(_)
            ) {
                eprintln!();
                print_usage();
            }
            std::process::exit(1);
        }
    }
}

fn run_command(args: &[String]) -> Result<bool, DriverError> {
    let (path, options) = parse_run_args(args)?;
    run_file(&path, &options)
}

fn print_usage() {
    println!("Blue interpreter");
    println!();
    println!("Usage: blue <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.blue>       Evaluate a program and print its result");
    println!("  lex <file.blue>       Tokenize and display tokens");
    println!("  parse <file.blue>     Parse and display the syntax tree");
    println!("  help                  Show this help message");
    println!("  version               Show version information");
    println!("  <file.blue>           Same as `run <file.blue>`");
    println!();
    println!("Run options:");
    println!("  --max-depth=<n>       Call-depth limit (default: 10000, 0 = unlimited)");
    println!("  --lines               Evaluate each line on its own");
    println!();
    println!("Lex/parse options:");
    println!("  --json                Print as JSON");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=<filter>     Enable logging, e.g. RUST_LOG=blue_eval=debug");
    println!("  BLUE_LOG_TREE=1       Render log spans as a tree");
}
