//! tidesh - small interactive Unix shell
//!
//! Usage:
//!   tidesh                 Interactive shell
//!   tidesh -c "command"    Execute a single line

use std::env;
use std::process;

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use tidesh::shell::{builtin, parser, prompt};
use tidesh::{Session, SessionConfig};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "-c" => {
                if args.len() < 3 {
                    eprintln!("tidesh: -c requires an argument");
                    process::exit(2);
                }
                let line = args[2..].join(" ");
                let code = execute_line(&line);
                process::exit(code);
            }
            "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            "-v" | "--version" => {
                println!("tidesh v{}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            _ => {
                eprintln!("tidesh: unknown option: {}", args[1]);
                process::exit(2);
            }
        }
    }

    let code = run_repl()?;
    process::exit(code);
}

fn print_help() {
    println!("tidesh - small interactive Unix shell");
    println!();
    println!("Usage:");
    println!("  tidesh                 Start interactive shell");
    println!("  tidesh -c \"command\"    Execute a single line");
    println!("  tidesh -h, --help      Show this help");
    println!("  tidesh -v, --version   Show version");
    println!();
    println!("Builtins: cd, exit, history");
    println!("Prompt override: MY_PROMPT");
}

/// Run one line through the tokenizer and builtin dispatcher.
fn execute_line(line: &str) -> i32 {
    let session = Session::new(SessionConfig::from_env());
    let tokens = parser::tokenize(parser::trim(line));
    if tokens.is_empty() {
        return 0;
    }
    if builtin::dispatch(&session, &tokens) {
        0
    } else {
        eprintln!("{}: {}: command not found", "tidesh".red(), tokens[0]);
        127
    }
}

fn run_repl() -> Result<i32> {
    let mut session = Session::new(SessionConfig::from_env());
    let mut rl = DefaultEditor::new()?;

    loop {
        let current = session
            .prompt()
            .unwrap_or(prompt::DEFAULT_PROMPT)
            .to_string();

        match rl.readline(&current) {
            Ok(line) => {
                let line = parser::trim(&line);
                if line.is_empty() {
                    continue;
                }
                // In-memory recall only; nothing is persisted.
                let _ = rl.add_history_entry(line);

                let tokens = parser::tokenize(line);
                if !builtin::dispatch(&session, &tokens) {
                    // An external-command executor would take over here.
                    eprintln!("{}: {}: command not found", "tidesh".red(), tokens[0]);
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {}", "tidesh".red(), e);
                break;
            }
        }
    }

    session.destroy();
    Ok(0)
}
