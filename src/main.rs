//! Binary entry point for `ios-deployment-target`.

use colored::Colorize;
use std::process;

fn main() {
    if let Err(e) = ios_deployment_target::run() {
        eprintln!("{} {}", "✗ Error:".red().bold(), e);
        process::exit(1);
    }
}
