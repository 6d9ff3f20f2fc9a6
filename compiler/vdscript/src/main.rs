//! VDScript runner CLI.

use vdscript::commands::{ast_file, run_file, tokens_file};

fn main() {
    vdscript::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: vds run <file.vds> [entry]");
                std::process::exit(1);
            }
            let entry = args.get(3).map_or("main", String::as_str);
            run_file(&args[2], entry);
        }
        "tokens" => {
            if args.len() < 3 {
                eprintln!("Usage: vds tokens <file.vds>");
                std::process::exit(1);
            }
            tokens_file(&args[2]);
        }
        "ast" => {
            if args.len() < 3 {
                eprintln!("Usage: vds ast <file.vds>");
                std::process::exit(1);
            }
            ast_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("vds {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("VDScript runner");
    println!();
    println!("Usage: vds <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.vds> [entry]  Load a script and call its entry function (default: main)");
    println!("  tokens <file.vds>       Tokenize and display tokens");
    println!("  ast <file.vds>          Parse and display the AST of every function");
    println!("  help                    Show this help message");
    println!("  version                 Show version information");
    println!();
    println!("Host functions available to scripts:");
    println!("  void print(string msg)");
    println!("  void sleep(uint64_t ms)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG                tracing filter, e.g. RUST_LOG=vds_eval=trace");
    println!("  VDS_MAX_CALL_DEPTH      limit on nested script function calls");
}
