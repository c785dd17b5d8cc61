//! Synthesizes a pattern for a fixed pair of word lists and checks it.
//!
//! Run with `RUST_LOG=debug` to see the synthesis steps.

use regex_golf::{synthesize, validate_regex};
use std::process::ExitCode;

const POSITIVES: &[&str] = &["youth", "son", "killer", "grass", "weather"];
const NEGATIVES: &[&str] = &["you", "nickson", "ill", "glass", "water"];

fn main() -> ExitCode {
    env_logger::init();

    println!("match words: {:?}\n", POSITIVES);
    println!("non-match words: {:?}\n", NEGATIVES);

    let result = synthesize(POSITIVES, NEGATIVES).and_then(|pattern| {
        println!("regex: {:?}\n", pattern);
        validate_regex(&pattern, POSITIVES, NEGATIVES)
    });
    match result {
        Ok(validation) if validation.is_success() => {
            println!("All OK");
            ExitCode::SUCCESS
        }
        Ok(validation) => {
            for mismatch in &validation.mismatches {
                println!("{}", mismatch);
            }
            println!("Failed");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
