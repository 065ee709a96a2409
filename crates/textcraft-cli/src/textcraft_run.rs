//! One-shot runner for the list and number exercises
//!
//! Usage: textcraft_run <command> [args]
//!
//! Commands:
//!   digit <N>   Largest number after deleting one digit of N
//!   dns         Read domains (one per line) from stdin, print suffix counts
//!   rename      Read file names (one per line) from stdin, print unique names
//!   team        Read a JSON member list from stdin, print the team name
//!
//! Example:
//!   textcraft_run digit 152
//!   printf 'code.yandex.ru\nyandex.ru\n' | textcraft_run dns

mod logging;

use std::env;
use std::io::{self, BufRead};
use std::time::Instant;
use textcraft::{DigitError, delete_digit_str, get_dns_stats_parallel, rename_files, sorted_stats};

fn print_usage(program: &str) {
    eprintln!("Usage: {} <command> [args]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  digit <N>   Largest number after deleting one digit of N");
    eprintln!("  dns         Read domains (one per line) from stdin, print suffix counts");
    eprintln!("  rename      Read file names (one per line) from stdin, print unique names");
    eprintln!("  team        Read a JSON member list from stdin, print the team name");
}

fn format_digit_error(err: &DigitError) -> String {
    match err {
        DigitError::Negative(n) => format!(
            "Negative numbers are not supported (got {}).\nPass a non-negative integer.",
            n
        ),
        DigitError::SingleDigit(n) => format!(
            "{} has a single digit; deleting it leaves no number.\nPass a number with at least two digits.",
            n
        ),
        DigitError::NotANumber(input) => format!("'{}' is not a decimal integer.", input),
        DigitError::TooLarge(input) => format!(
            "'{}' is too large.\nPass a number no greater than {}.",
            input,
            i64::MAX
        ),
    }
}

fn read_lines() -> io::Result<Vec<String>> {
    io::stdin().lock().lines().collect()
}

fn run_digit(args: &[String]) -> Result<(), String> {
    let input = args.first().ok_or("digit requires a number argument")?;
    let result = delete_digit_str(input).map_err(|e| format_digit_error(&e))?;
    println!("{}", result);
    Ok(())
}

fn run_dns() -> Result<(), String> {
    let domains: Vec<String> = read_lines()
        .map_err(|e| format!("I/O error: {}", e))?
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    let start = Instant::now();
    let stats = get_dns_stats_parallel(&domains);
    tracing::info!(
        domains = domains.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "dns stats computed"
    );

    for (key, count) in sorted_stats(&stats) {
        println!("{}: {}", key, count);
    }
    Ok(())
}

fn run_rename() -> Result<(), String> {
    let names = read_lines().map_err(|e| format!("I/O error: {}", e))?;
    for name in rename_files(&names) {
        println!("{}", name);
    }
    Ok(())
}

#[cfg(feature = "json")]
fn run_team() -> Result<(), String> {
    use std::io::Read;
    use textcraft::{Value, create_dream_team};

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| format!("I/O error: {}", e))?;

    let json: serde_json::Value =
        serde_json::from_str(&input).map_err(|e| format!("Invalid JSON input: {}", e))?;

    match create_dream_team(&Value::from(json)) {
        Some(name) => println!("{}", name),
        None => println!("false"),
    }
    Ok(())
}

#[cfg(not(feature = "json"))]
fn run_team() -> Result<(), String> {
    Err("team requires the 'json' feature".to_string())
}

fn main() {
    logging::init_logging();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let result = match args[1].as_str() {
        "digit" => run_digit(&args[2..]),
        "dns" => run_dns(),
        "rename" => run_rename(),
        "team" => run_team(),
        "--help" | "-h" => {
            print_usage(&args[0]);
            return;
        }
        other => Err(format!("Unknown command: {}", other)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
