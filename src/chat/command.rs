//! Slash commands: one table drives parsing, autocomplete and `/help`.

use inquire::CustomUserError;
use inquire::autocompletion::{Autocomplete, Replacement};

/// A slash command as listed in `/help` and offered by autocomplete.
#[derive(Debug)]
pub struct CommandInfo {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub args: &'static str,
    pub about: &'static str,
}

impl CommandInfo {
    /// `/name` followed by the argument synopsis, if any.
    pub fn usage(&self) -> String {
        if self.args.is_empty() {
            format!("/{}", self.name)
        } else {
            format!("/{} {}", self.name, self.args)
        }
    }

    fn answers_to(&self, word: &str) -> bool {
        self.name == word || self.aliases.contains(&word)
    }
}

pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "config",
        aliases: &[],
        args: "",
        about: "Show the configuration used for the next line",
    },
    CommandInfo {
        name: "model",
        aliases: &[],
        args: "[name]",
        about: "Show the model, or switch it for this session",
    },
    CommandInfo {
        name: "raw",
        aliases: &["json"],
        args: "",
        about: "Toggle raw JSON output",
    },
    CommandInfo {
        name: "help",
        aliases: &[],
        args: "",
        about: "Show available commands",
    },
    CommandInfo {
        name: "quit",
        aliases: &["exit", "q"],
        args: "",
        about: "Exit chat mode",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Model(Option<String>),
    Raw,
    Help,
    Quit,
    Unknown(String),
}

/// One line typed at the chat prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }

    let Some(rest) = line.strip_prefix('/') else {
        return Input::Text(line.to_string());
    };

    let mut words = rest.split_whitespace();
    let word = words.next().unwrap_or_default();
    let name = COMMANDS
        .iter()
        .find(|info| info.answers_to(word))
        .map(|info| info.name);

    let command = match name {
        Some("config") => SlashCommand::Config,
        Some("model") => SlashCommand::Model(words.next().map(str::to_string)),
        Some("raw") => SlashCommand::Raw,
        Some("help") => SlashCommand::Help,
        Some("quit") => SlashCommand::Quit,
        _ => SlashCommand::Unknown(rest.split_whitespace().collect::<Vec<_>>().join(" ")),
    };

    Input::Command(command)
}

/// Completes `/...` prefixes against [`COMMANDS`].
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        let Some(prefix) = input.strip_prefix('/') else {
            return Ok(Vec::new());
        };

        Ok(COMMANDS
            .iter()
            .filter(|info| info.name.starts_with(prefix))
            .map(|info| format!("{:<16}{}", info.usage(), info.about))
            .collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion
            .and_then(|s| s.split_whitespace().next().map(str::to_string)))
    }
}
