use anyhow::{Result, bail};
use std::path::Path;

use super::open_translator;
use crate::config::{ResolveOptions, resolve_config};
use crate::fs::atomic_write;
use crate::input::InputReader;
use crate::translation::TranslationResult;
use crate::ui::{Style, render_result, with_spinner};
use crate::{status, warning};

pub struct TranslateOptions {
    pub text: Vec<String>,
    pub file: Option<String>,
    pub model: Option<String>,
    pub proxy: Option<String>,
    pub json: bool,
    pub output: Option<String>,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let source_text = InputReader::read(&options.text, options.file.as_deref())?;
    let source_text = source_text.trim();

    if source_text.is_empty() {
        bail!("Input is empty");
    }

    let translator = open_translator()?;
    let config = resolve_config(
        &ResolveOptions {
            model: options.model,
            proxy: options.proxy,
        },
        &translator.current_config(),
    );

    let payload = with_spinner(
        "Translating...",
        translator.translate_with(&config, source_text),
    )
    .await?;

    if let Some(path) = &options.output {
        atomic_write(Path::new(path), &payload)?;
        status!("{} Saved result to {}", Style::success("✓"), Style::secondary(path));
    }

    print_payload(&payload, options.json);

    Ok(())
}

/// Prints a reply: rendered when it parses, raw otherwise or when asked.
pub fn print_payload(payload: &str, raw: bool) {
    if raw {
        println!("{payload}");
        return;
    }

    match TranslationResult::parse(payload) {
        Ok(result) => print!("{}", render_result(&result)),
        Err(e) => {
            warning!("Could not parse the model output ({e}); showing it as-is");
            println!("{payload}");
        }
    }
}
