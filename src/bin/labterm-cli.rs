//! labterm CLI - native REPL over the lab shell
//!
//! Run with: cargo run --bin labterm-cli -- [LAB] [CONFIG.json]
//!
//! LAB is the capability token (`lab1`, `lab2`, ...). CONFIG.json may hold a
//! `lab` and a `filesystem`; a LAB argument overrides the file's `lab`.

use labterm::config::{ConfigError, SessionConfig};
use labterm::platform::OutputSink;
use labterm::shell::{Capability, Executor};
use std::io::{self, BufRead, Write};

/// Prints plain output to stdout. Echo lines are skipped: the user's own
/// terminal already shows what they typed.
struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit_line(&mut self, text: &str, styled: bool) {
        if !styled {
            println!("{}", text);
        }
    }

    fn clear(&mut self) {
        print!("\x1b[2J\x1b[H");
    }
}

fn load_config() -> Result<SessionConfig, ConfigError> {
    let mut args = std::env::args().skip(1);
    let lab = args.next();

    let config = match args.next() {
        Some(path) => SessionConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => SessionConfig::default(),
    };

    Ok(match lab {
        Some(token) => SessionConfig {
            capability: Capability::from_token(Some(&token)),
            ..config
        },
        None => config,
    })
}

/// Session commands handled by the CLI itself, never by the shell
fn is_exit(line: &str) -> bool {
    matches!(line.trim(), "exit" | "quit")
}

/// Read lines from `input` until EOF or an exit command, feeding each one
/// to the shell. Prompts go to stdout.
fn run<R: BufRead, S: OutputSink>(mut input: R, executor: &mut Executor, sink: &mut S) {
    let mut stdout = io::stdout();

    loop {
        // Print prompt
        print!("{} ", executor.prompt());
        let _ = stdout.flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => {
                // EOF
                println!();
                break;
            }
            Ok(_) => {
                let line = line.trim_end_matches(['\r', '\n']);
                if is_exit(line) {
                    println!("Goodbye!");
                    break;
                }
                executor.submit(line, sink);
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }
}

fn main() {
    let config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("labterm: {}", e);
            std::process::exit(2);
        }
    };

    let mut executor = Executor::from_config(config);

    println!("labterm (lab: {})", executor.capability());
    println!("Type exit or press Ctrl+D to leave.\n");

    run(io::stdin().lock(), &mut executor, &mut StdoutSink);
}
