//! Vigenere cipher CLI
//!
//! Usage: textcraft_cipher --key <KEY> [options] [MESSAGE...]
//!
//! Options:
//!   --key, -k <KEY>  Cipher key (ASCII letters)
//!   --decrypt, -d    Decrypt instead of encrypt
//!   --reverse, -r    Use a reverse machine (output is reversed)
//!   --help, -h       Show help
//!
//! Without MESSAGE arguments, lines are read from stdin until EOF or 'q'.
//! Arguments after `--` are always messages, even if they start with `-`.
//!
//! Example:
//!   textcraft_cipher --key alphonse "attack at dawn!"
//!   textcraft_cipher --key alphonse --decrypt --reverse

mod logging;

use std::env;
use std::io::{self, Write};
use textcraft::domain::vigenere::Operation;
use textcraft::{CipherError, VigenereCipheringMachine};

struct Args {
    key: String,
    operation: Operation,
    direct: bool,
    messages: Vec<String>,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} --key <KEY> [options] [MESSAGE...]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --key, -k <KEY>  Cipher key (ASCII letters)");
    eprintln!("  --decrypt, -d    Decrypt instead of encrypt");
    eprintln!("  --reverse, -r    Use a reverse machine (output is reversed)");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Without MESSAGE arguments, lines are read from stdin.");
    eprintln!("Arguments after -- are treated as messages.");
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut key: Option<String> = None;
    let mut operation = Operation::Encrypt;
    let mut direct = true;
    let mut messages = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--" => {
                messages.extend(args[i + 1..].iter().cloned());
                break;
            }
            "--key" | "-k" => {
                i += 1;
                if i >= args.len() {
                    return Err("--key requires a value".to_string());
                }
                key = Some(args[i].clone());
            }
            "--decrypt" | "-d" => operation = Operation::Decrypt,
            "--reverse" | "-r" => direct = false,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') || arg == "-" => messages.push(arg.to_string()),
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    let key = key.ok_or("Missing --key argument")?;

    Ok(Args {
        key,
        operation,
        direct,
        messages,
    })
}

fn format_cipher_error(err: &CipherError) -> String {
    match err {
        CipherError::IncorrectArguments => {
            format!("{}\nBoth the message and the key must be non-empty.", err)
        }
        CipherError::InvalidKey {
            character,
            position,
        } => format!(
            "Invalid key: character {:?} at position {} is not a letter.\nUse only A-Z / a-z in the key.",
            character, position
        ),
    }
}

fn main() {
    logging::init_logging();

    let raw_args: Vec<String> = env::args().collect();
    let args = match parse_args(&raw_args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(raw_args.first().map(String::as_str).unwrap_or_default());
            std::process::exit(1);
        }
    };

    let machine = VigenereCipheringMachine::new(args.direct);

    if !args.messages.is_empty() {
        for message in &args.messages {
            match machine.process(message, &args.key, args.operation) {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    eprintln!("Error: {}", format_cipher_error(&e));
                    std::process::exit(1);
                }
            }
        }
        return;
    }

    let verb = match args.operation {
        Operation::Encrypt => "encrypt",
        Operation::Decrypt => "decrypt",
    };
    let mode = if machine.is_direct() { "direct" } else { "reverse" };
    eprintln!("Using {} machine. Enter lines to {} ('q' to quit).", mode, verb);

    let stdin = io::stdin();
    loop {
        eprint!("> ");
        io::stderr().flush().ok();

        let mut input = String::new();
        match stdin.read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                continue;
            }
        }

        let line = input.trim_end_matches(['\r', '\n']);

        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        match machine.process(line, &args.key, args.operation) {
            Ok(output) => println!("{}", output),
            Err(e) => eprintln!("Error: {}", format_cipher_error(&e)),
        }
    }
}
