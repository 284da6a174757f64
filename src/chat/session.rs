use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::cli::commands::translate::print_payload;
use crate::config::{ConfigRecord, Persistence, ResolveOptions, resolve_config};
use crate::translation::Translator;
use crate::ui::{Style, with_spinner};

/// Per-session settings layered over the stored configuration.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Overrides given on the command line or via `/model`.
    pub overrides: ResolveOptions,
    /// Print the raw JSON payload instead of the rendered result.
    pub raw: bool,
}

/// An interactive chat session for translation.
///
/// Each line of input is one `translate` call; the stored configuration is
/// re-read for every line so that changes made elsewhere take effect.
pub struct ChatSession<P> {
    config: SessionConfig,
    translator: Translator<P>,
}

impl<P: Persistence> ChatSession<P> {
    pub const fn new(config: SessionConfig, translator: Translator<P>) -> Self {
        Self { config, translator }
    }

    /// The configuration the next translation will use.
    pub fn effective_config(&self) -> ConfigRecord {
        resolve_config(&self.config.overrides, &self.translator.current_config())
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type text to translate, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.translate_and_print(&text).await?;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(&self.effective_config(), self.config.raw);
            }
            SlashCommand::Model(name) => self.set_model(name),
            SlashCommand::Raw => {
                self.config.raw = !self.config.raw;
                println!(
                    "{} Raw JSON output {}\n",
                    Style::success("✓"),
                    if self.config.raw { "on" } else { "off" }
                );
            }
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quit => return false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        true
    }

    fn set_model(&mut self, name: Option<String>) {
        match name {
            None => {
                println!(
                    "  {}      {}\n",
                    Style::label("model"),
                    Style::value(self.effective_config().model)
                );
            }
            Some(model) => {
                println!(
                    "{} Model set to {} for this session\n",
                    Style::success("✓"),
                    Style::value(&model)
                );
                self.config.overrides.model = Some(model);
            }
        }
    }

    /// Translates one line. Request failures are reported and the session
    /// continues; only terminal I/O errors end it.
    async fn translate_and_print(&self, text: &str) -> Result<()> {
        let config = self.effective_config();

        let result = with_spinner(
            "Translating...",
            self.translator.translate_with(&config, text),
        )
        .await;

        match result {
            Ok(payload) => print_payload(&payload, self.config.raw),
            Err(e) => ui::print_error(&e.to_string()),
        }

        println!();
        Ok(())
    }
}
