//! ML lexer CLI

use std::io;

use mlc::commands::{lex_file, parse_lex_options};

fn main() {
    mlc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let options = match parse_lex_options(&args[2..]) {
                Ok(options) => options,
                Err(e) => {
                    eprintln!("error: {e}");
                    eprintln!("Usage: mlc lex <file.ml> [options]");
                    std::process::exit(1);
                }
            };
            let stdout = io::stdout();
            let stderr = io::stderr();
            match lex_file(&options, &mut stdout.lock(), &mut stderr.lock()) {
                Ok(summary) if summary.failed => std::process::exit(1),
                Ok(_) => {}
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("mlc {}", env!("CARGO_PKG_VERSION"));
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
    println!("ML lexer");
    println!();
    println!("Usage: mlc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.ml>        Tokenize and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --chunk <n>          Feed the lexer <n> bytes at a time (default: 8192)");
    println!("  --no-comments        Leave comments out of the dump");
    println!("  --file-name <name>   File name reported in spans (default: the path)");
    println!("  --no-color           Plain diagnostics");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=ml_lexer=trace     Enable lexer tracing");
    println!("  MLC_LOG_TREE=1              Render tracing output as a tree");
}
