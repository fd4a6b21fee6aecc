// Monkey: a tree-walking interpreter.
//
// Usage:
//   monkey                 start the interactive prompt (eval mode)
//   monkey --mode p        start the interactive prompt, printing the AST
//   monkey path/to/file.mk run a file and print its result
//   monkey --mode l file   run a file, printing its token stream

use std::fs;
use std::io;
use std::process::ExitCode;

use monkey::error::MonkeyError;
use monkey::repl::{self, Mode};

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_target(false).compact().init();

    let args: Vec<String> = std::env::args().collect();
    let (mode, path) = match parse_args(&args[1..]) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    match path {
        Some(path) => match run_file(&path, mode) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        },
        None => {
            tracing::info!("no file given, starting interactive prompt");
            let stdin = io::stdin();
            let stdout = io::stdout();
            repl::start(stdin.lock(), stdout.lock(), mode);
            ExitCode::SUCCESS
        }
    }
}

fn parse_args(args: &[String]) -> Result<(Mode, Option<String>), String> {
    let mut mode = Mode::default();
    let mut path = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--mode" => {
                let flag = args
                    .get(i + 1)
                    .ok_or_else(|| "--mode requires an argument (l, p, or e)".to_string())?;
                mode = Mode::from_flag(flag)
                    .ok_or_else(|| format!("unknown mode '{flag}', expected l, p, or e"))?;
                i += 2;
            }
            other => {
                path = Some(other.to_string());
                i += 1;
            }
        }
    }

    Ok((mode, path))
}

fn run_file(path: &str, mode: Mode) -> Result<(), MonkeyError> {
    tracing::info!(path, "running file");
    let source = fs::read_to_string(path).map_err(|source| MonkeyError::ReadSource {
        path: path.to_string(),
        source,
    })?;
    repl::run(&source, io::stdout(), mode);
    Ok(())
}
