use std::io::{self, Write};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use clap::{value_parser, Arg, ArgAction, Command};
use log::{debug, LevelFilter};
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

use numtheory::arithmetic::extended_euclidean;
use numtheory::crt::crt_solve;
use numtheory::totient::totient;

fn main() -> ExitCode {
    let matches = Command::new("numtheory")
        .about("Euler's totient, the extended Euclidean algorithm and a Chinese remainder solver")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Prints debug messages"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Prints results as JSON"),
        )
        .subcommand(
            Command::new("euler")
                .about("Compute Euler's totient of a number")
                .arg(Arg::new("n").required(true).value_parser(value_parser!(u64))),
        )
        .subcommand(
            Command::new("euclid")
                .about("Run the extended Euclidean algorithm on two numbers")
                .allow_negative_numbers(true)
                .arg(Arg::new("a").required(true).value_parser(value_parser!(i64)))
                .arg(Arg::new("b").required(true).value_parser(value_parser!(i64))),
        )
        .subcommand(
            Command::new("chinese")
                .about("Solve a system of congruences x = r[i] (mod m[i])")
                .allow_negative_numbers(true)
                .arg(
                    Arg::new("remainders")
                        .short('r')
                        .long("remainders")
                        .value_delimiter(',')
                        .value_parser(value_parser!(i64))
                        .help("Comma-separated remainders, e.g. 2,3,2"),
                )
                .arg(
                    Arg::new("moduli")
                        .short('m')
                        .long("moduli")
                        .value_delimiter(',')
                        .value_parser(value_parser!(i64))
                        .help("Comma-separated moduli, e.g. 3,5,7"),
                ),
        )
        .get_matches();

    // We initialize the logger with proper verbosity
    let verb = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    CombinedLogger::init(vec![TermLogger::new(
        verb,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .unwrap();

    let json = matches.get_flag("json");

    match matches.subcommand() {
        Some(("euler", sub)) => {
            run_euler(*sub.get_one::<u64>("n").unwrap(), json);
            ExitCode::SUCCESS
        }
        Some(("euclid", sub)) => {
            let a = *sub.get_one::<i64>("a").unwrap();
            let b = *sub.get_one::<i64>("b").unwrap();
            run_euclid(a, b, json);
            ExitCode::SUCCESS
        }
        Some(("chinese", sub)) => {
            let remainders: Vec<i64> = sub
                .get_many::<i64>("remainders")
                .map(|v| v.copied().collect())
                .unwrap_or_default();
            let moduli: Vec<i64> = sub
                .get_many::<i64>("moduli")
                .map(|v| v.copied().collect())
                .unwrap_or_default();

            if remainders.is_empty() && moduli.is_empty() {
                // no arguments given, read the system from stdin as the
                // interactive mode does
                match read_system() {
                    Some((r, m)) => run_chinese(&r, &m, json),
                    None => {
                        eprintln!("error: could not read the congruence system");
                        ExitCode::FAILURE
                    }
                }
            } else {
                run_chinese(&remainders, &moduli, json)
            }
        }
        _ => interactive(json),
    }
}

fn run_euler(n: u64, json: bool) {
    let start = Instant::now();
    let result = totient(n);
    let elapsed = start.elapsed();
    debug!("totient({n}) computed in {elapsed:?}");

    if json {
        println!(
            "{}",
            serde_json::json!({
                "n": n,
                "totient": result,
                "elapsed_us": elapsed.as_micros() as u64,
            })
        );
    } else {
        println!("φ({n}) = {result}");
        println!("time: {} us", elapsed.as_micros());
    }
}

fn run_euclid(a: i64, b: i64, json: bool) {
    let start = Instant::now();
    let (g, x, y) = extended_euclidean(a, b);
    let elapsed = start.elapsed();
    debug!("extended_euclidean({a}, {b}) computed in {elapsed:?}");

    if json {
        println!(
            "{}",
            serde_json::json!({
                "a": a,
                "b": b,
                "gcd": g,
                "x": x,
                "y": y,
                "elapsed_us": elapsed.as_micros() as u64,
            })
        );
    } else {
        println!("gcd({a}, {b}) = {g}");
        println!("coefficients: x = {x}, y = {y}");
        println!("check: {a}*{x} + {b}*{y} = {}", a * x + b * y);
        println!("time: {} us", elapsed.as_micros());
    }
}

fn run_chinese(remainders: &[i64], moduli: &[i64], json: bool) -> ExitCode {
    let start = Instant::now();
    match crt_solve(remainders, moduli) {
        Ok(result) => {
            let elapsed = start.elapsed();
            debug!(
                "crt_solve over {} congruences computed in {elapsed:?}",
                moduli.len()
            );

            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "solution": result.solution,
                        "modulus": result.modulus,
                        "elapsed_us": elapsed.as_micros() as u64,
                    })
                );
            } else {
                println!("x ≡ {} (mod {})", result.solution, result.modulus);
                println!("time: {} us", elapsed.as_micros());
                for (&r, &m) in remainders.iter().zip(moduli) {
                    let check = result.solution % m;
                    let expected = ((r % m) + m) % m;
                    let mark = if check == expected { "ok" } else { "MISMATCH" };
                    println!("  {} mod {m} = {check} (expected {expected}) {mark}", result.solution);
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn interactive(json: bool) -> ExitCode {
    println!("Select an algorithm:");
    println!("1. Euler's totient function");
    println!("2. Extended Euclidean algorithm");
    println!("3. Chinese remainder theorem");

    let Ok(choice) = prompt("Enter a number (1-3): ") else {
        eprintln!("error: could not read from stdin");
        return ExitCode::FAILURE;
    };

    match choice.as_str() {
        "1" => {
            let Some(n) = read_parsed::<u64>("Enter a number: ") else {
                eprintln!("error: expected a non-negative number");
                return ExitCode::FAILURE;
            };
            run_euler(n, json);
            ExitCode::SUCCESS
        }
        "2" => {
            let (Some(a), Some(b)) = (
                read_parsed::<i64>("Enter the first number: "),
                read_parsed::<i64>("Enter the second number: "),
            ) else {
                eprintln!("error: expected two integers");
                return ExitCode::FAILURE;
            };
            run_euclid(a, b, json);
            ExitCode::SUCCESS
        }
        "3" => match read_system() {
            Some((r, m)) => run_chinese(&r, &m, json),
            None => {
                eprintln!("error: could not read the congruence system");
                ExitCode::FAILURE
            }
        },
        other => {
            eprintln!("error: invalid choice '{other}'");
            ExitCode::FAILURE
        }
    }
}

fn prompt(msg: &str) -> io::Result<String> {
    print!("{msg}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn read_parsed<T: FromStr>(msg: &str) -> Option<T> {
    prompt(msg).ok()?.parse().ok()
}

fn read_system() -> Option<(Vec<i64>, Vec<i64>)> {
    let k: usize = read_parsed("Number of congruences: ")?;
    let mut remainders = Vec::with_capacity(k);
    let mut moduli = Vec::with_capacity(k);

    println!("Enter the system, one 'remainder modulus' pair per line:");
    for i in 0..k {
        let line = prompt(&format!("congruence {}: ", i + 1)).ok()?;
        let mut parts = line.split_whitespace();
        remainders.push(parts.next()?.parse().ok()?);
        moduli.push(parts.next()?.parse().ok()?);
    }

    Some((remainders, moduli))
}
