// src/main.rs

use std::env;
use std::process;
use log::warn;
use env_logger::Env;
use factorizer::config::EngineConfig;
use factorizer::engine::{FactorizationEngine, FactorizationRequest, FactorizationResult};

fn main() {
    // Initialize the logger
    let env = Env::default()
        .filter_or("FACTORIZER_LOG_LEVEL", "info")
        .write_style_or("FACTORIZER_LOG_STYLE", "always");

    env_logger::Builder::from_env(env).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!(
            "usage: {} <number> [trial-division|pollard-rho|quadratic-sieve|external-lookup]",
            args[0]
        );
        process::exit(2);
    }

    let config = EngineConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load configuration, using defaults: {}", e);
        EngineConfig::default()
    });

    let engine = FactorizationEngine::new(config);

    let result = match FactorizationRequest::parse(&args[1], args.get(2).map(String::as_str)) {
        Ok(request) => engine.factorize(&request),
        Err(err) => FactorizationResult::failed(
            num::BigInt::from(0),
            err.to_string(),
            std::time::Duration::ZERO,
        ),
    };

    match result.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("failed to encode result: {}", e);
            process::exit(1);
        }
    }
}
