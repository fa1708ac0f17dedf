use std::io::Read;
use std::process::ExitCode;

use wordswap::domain::ServiceKind;
use wordswap::infrastructure::{ServiceConfig, init_tracing};

const USAGE: &str = "usage: garble <adjective|sounds|wordsafter> < words.json";

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let kind = match std::env::args().nth(1).map(|arg| arg.parse::<ServiceKind>()) {
        Some(Ok(kind)) => kind,
        Some(Err(e)) => {
            eprintln!("{}\n{}", e, USAGE);
            return ExitCode::from(2);
        }
        None => {
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("Failed to read stdin: {}", e);
        return ExitCode::FAILURE;
    }

    let config = match ServiceConfig::from_env(kind) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match wordswap::garble(config, &input).await {
        Ok((output, None)) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Ok((output, Some(error))) => {
            println!("{}", output);
            eprintln!("Stopped early: {}", error);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
