//! MiniC interpreter CLI.

use minic::commands::{eval_expr, run_file, start_repl};
use minic::init_tracing;
use minic_eval::EvalConfig;

/// Call depth the CLI allows unless `--max-depth` says otherwise.
const DEFAULT_MAX_DEPTH: usize = 10_000;

fn main() {
    init_tracing();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let config = match take_max_depth(&mut args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            std::process::exit(2);
        }
    };

    let code = match args.first().map(String::as_str) {
        None | Some("repl") => start_repl(config),
        Some("run") => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: minic run <file.c> [--max-depth=N]");
                std::process::exit(1);
            };
            run_file(path, config)
        }
        Some("eval") => {
            if args.len() < 2 {
                eprintln!("Usage: minic eval <code> [--max-depth=N]");
                std::process::exit(1);
            }
            eval_expr(&args[1..].join(" "), config)
        }
        Some("help" | "--help" | "-h") => {
            print_usage();
            0
        }
        Some("version" | "--version" | "-V") => {
            println!("MiniC {}", env!("CARGO_PKG_VERSION"));
            0
        }
        Some(command) => {
            // A bare path runs the file.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("c"))
            {
                run_file(command, config)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                1
            }
        }
    };
    std::process::exit(code);
}

/// Remove `--max-depth=N` from `args`. `0` disables the limit.
fn take_max_depth(args: &mut Vec<String>) -> Result<EvalConfig, String> {
    let mut depth = Some(DEFAULT_MAX_DEPTH);
    let mut error = None;
    args.retain(|arg| {
        let Some(value) = arg.strip_prefix("--max-depth=") else {
            return true;
        };
        match value.parse::<usize>() {
            Ok(0) => depth = None,
            Ok(n) => depth = Some(n),
            Err(_) => error = Some(format!("invalid --max-depth value '{value}'")),
        }
        false
    });
    match error {
        Some(message) => Err(message),
        None => Ok(EvalConfig::default().with_max_call_depth(depth)),
    }
}

fn print_usage() {
    println!("MiniC interpreter");
    println!();
    println!("Usage: minic [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl              Start an interactive session (default)");
    println!("  run <file.c>      Run a program by calling its main()");
    println!("  eval <code>       Evaluate one line and print the result");
    println!("  help              Show this help message");
    println!("  version           Show version information");
    println!();
    println!("Options:");
    println!("  --max-depth=N     Maximum function call depth (default {DEFAULT_MAX_DEPTH}, 0 = unlimited)");
    println!();
    println!("Environment:");
    println!("  MINIC_LOG         Log filter, e.g. MINIC_LOG=minic_eval=debug (RUST_LOG also works)");
    println!();
    println!("Examples:");
    println!("  minic");
    println!("  minic run fact.c");
    println!("  minic eval 'int sq(int x) {{ return x * x; }} sq(7);'");
}
