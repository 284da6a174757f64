//! Chat mode UI components.

use super::command::COMMANDS;
use crate::config::ConfigRecord;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Interactive Translation Mode",
        Style::header("gtl"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &ConfigRecord, raw: bool) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}      {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}      {}",
        Style::label("proxy"),
        config
            .proxy_url()
            .map_or_else(|| Style::secondary("(direct)"), Style::value)
    );
    println!(
        "  {}    {}",
        Style::label("api_key"),
        if config.has_api_key() {
            Style::secondary(config.masked_api_key())
        } else {
            Style::warning("(not set)")
        }
    );
    println!(
        "  {}     {}",
        Style::label("output"),
        Style::value(if raw { "raw JSON" } else { "rendered" })
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    for info in COMMANDS {
        println!(
            "  {}  {}",
            Style::command(format!("{:<14}", info.usage())),
            Style::secondary(info.about)
        );
    }
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
}
