use std::{
    env, fs,
    io::{self, Read},
    process::ExitCode,
    time::Instant,
};

use scanner::{errors::errors::Error, reference, render_error, scan_with, ScanOptions};

const USAGE: &str = "usage: scanner [--recover] [--trivia] [FILE]";

fn main() -> ExitCode {
    scanner::init_tracing();

    let mut options = ScanOptions::default();
    let mut file: Option<String> = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--recover" => options.recover = true,
            "--trivia" => options.keep_trivia = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return ExitCode::SUCCESS;
            }
            flag if flag.starts_with('-') && flag != "-" => {
                eprintln!("unknown option `{}`\n{}", flag, USAGE);
                return ExitCode::FAILURE;
            }
            path if file.is_none() => file = Some(path.to_string()),
            _ => {
                eprintln!("{}", USAGE);
                return ExitCode::FAILURE;
            }
        }
    }

    let (source, file_name) = match read_input(file.as_deref()) {
        Ok(input) => input,
        Err(error) => {
            eprintln!("Error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let scan = scan_with(reference(), &source, options);
    tracing::info!(elapsed = ?start.elapsed(), tokens = scan.tokens.len(), "tokenized");

    for token in &scan.tokens {
        println!("{}", token);
    }

    for error in &scan.errors {
        eprint!("{}", render_error(error, &source, &file_name));
    }

    if scan.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn read_input(file: Option<&str>) -> Result<(String, String), Error> {
    match file {
        Some(path) if path != "-" => Ok((fs::read_to_string(path)?, path.to_string())),
        _ => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok((source, String::from("<stdin>")))
        }
    }
}
