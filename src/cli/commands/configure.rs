//! Configure command handler for the API key, proxy and model.

use anyhow::{Result, bail};
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};

use super::open_translator;
use crate::config::{ConfigRecord, KNOWN_MODELS, Persistence, SqliteStore};
use crate::status;
use crate::translation::Translator;
use crate::ui::Style;

/// Label of the model entry that switches to free-text input.
const CUSTOM_MODEL: &str = "(other model...)";

/// Values passed as flags to `gtl configure`.
#[derive(Debug, Default)]
pub struct ConfigureOptions {
    pub api_key: Option<String>,
    pub proxy: Option<String>,
    pub model: Option<String>,
}

impl ConfigureOptions {
    const fn is_empty(&self) -> bool {
        self.api_key.is_none() && self.proxy.is_none() && self.model.is_none()
    }
}

/// Prints the current configuration with the API key masked.
pub fn run_show() -> Result<()> {
    let translator = open_translator()?;
    print_config(&translator.current_config());
    println!(
        "  {}       {}",
        Style::label("path"),
        Style::secondary(translator.store().persistence().db_path().display())
    );
    Ok(())
}

/// Updates the configuration from flags, or interactively when none are given.
pub fn run_configure(options: ConfigureOptions) -> Result<()> {
    let translator = open_translator()?;

    if options.is_empty() {
        match run_interactive(&translator) {
            Err(e) if is_cancelled(&e) => {
                // Leave the prompt line before returning to the shell
                println!();
                Ok(())
            }
            result => result,
        }
    } else {
        let current = translator.current_config();
        let api_key = options.api_key.unwrap_or(current.api_key);
        let proxy = options.proxy.unwrap_or(current.proxy);
        let model = options.model.unwrap_or(current.model);
        save(&translator, &api_key, &proxy, &model)
    }
}

fn run_interactive(translator: &Translator<SqliteStore>) -> Result<()> {
    let current = translator.current_config();
    print_config(&current);

    let api_key = prompt_api_key(&current)?;
    let proxy = prompt_proxy(&current)?;
    let model = select_model(&current.model)?;

    save(translator, &api_key, &proxy, &model)
}

/// Ctrl+C or Escape at a prompt abandons the change without an error.
fn is_cancelled(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<InquireError>(),
        Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
    )
}

fn save<P: Persistence>(
    translator: &Translator<P>,
    api_key: &str,
    proxy: &str,
    model: &str,
) -> Result<()> {
    let model = model.trim();
    if model.is_empty() {
        bail!("Model name cannot be empty");
    }

    if !translator.update_config(api_key.trim(), proxy.trim(), model) {
        bail!("Failed to save configuration (run with GTL_LOG=error for details)");
    }

    status!("{} Configuration saved", Style::success("✓"));
    Ok(())
}

fn print_config(config: &ConfigRecord) {
    let not_set = || Style::secondary("(not set)");

    println!("{}", Style::header("Current configuration"));
    println!(
        "  {}    {}",
        Style::label("api_key"),
        if config.has_api_key() {
            Style::value(config.masked_api_key())
        } else {
            not_set()
        }
    );
    println!(
        "  {}      {}",
        Style::label("proxy"),
        config.proxy_url().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}      {}",
        Style::label("model"),
        Style::value(&config.model)
    );
}

fn prompt_api_key(current: &ConfigRecord) -> Result<String> {
    let help = if current.has_api_key() {
        "Leave empty to keep the current key"
    } else {
        "Create one at https://aistudio.google.com/apikey"
    };

    let key = Password::new("Gemini API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message(help)
        .prompt()?;

    if key.trim().is_empty() {
        Ok(current.api_key.clone())
    } else {
        Ok(key.trim().to_string())
    }
}

fn prompt_proxy(current: &ConfigRecord) -> Result<String> {
    let proxy = Text::new("Proxy URL:")
        .with_default(&current.proxy)
        .with_help_message("e.g. http://127.0.0.1:7890; leave empty for a direct connection")
        .prompt()?;

    Ok(proxy.trim().to_string())
}

fn select_model(current: &str) -> Result<String> {
    let mut options: Vec<String> = KNOWN_MODELS.iter().map(ToString::to_string).collect();
    if !options.iter().any(|m| m == current) {
        options.insert(0, current.to_string());
    }
    options.push(CUSTOM_MODEL.to_string());

    let default_index = options.iter().position(|m| m == current).unwrap_or(0);

    let selection = Select::new("Model:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    if selection != CUSTOM_MODEL {
        return Ok(selection);
    }

    let model = Text::new("Model name:")
        .with_help_message("Any model that supports generateContent")
        .prompt()?;

    if model.trim().is_empty() {
        bail!("Model name cannot be empty");
    }

    Ok(model.trim().to_string())
}
