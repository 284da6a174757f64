//! Terminal rendering of a parsed translation reply.

use std::fmt::Write as _;

use super::Style;
use crate::translation::{TranslationResult, VocabularyEntry};

/// Formats a reply for the terminal.
///
/// Sentences show the translation first and the source text dimmed below
/// it. Single words have no translation, so the source text heads the
/// vocabulary list instead.
pub fn render_result(result: &TranslationResult) -> String {
    let mut out = String::new();

    match result.translation() {
        Some(translation) => {
            let _ = writeln!(out, "{}", Style::translation(translation));
            let _ = writeln!(out, "{}", Style::secondary(result.text.trim()));
        }
        None => {
            let _ = writeln!(out, "{}", Style::header(result.text.trim()));
        }
    }

    for entry in &result.vocabulary {
        out.push('\n');
        render_entry(&mut out, entry);
    }

    out
}

fn render_entry(out: &mut String, entry: &VocabularyEntry) {
    let _ = write!(out, "{}", Style::term(&entry.text));
    if !entry.pronunciation.trim().is_empty() {
        let _ = write!(
            out,
            " {}",
            Style::pronunciation(format!("[{}]", entry.pronunciation.trim()))
        );
    }
    out.push('\n');

    for (index, definition) in entry.definitions.iter().enumerate() {
        let _ = write!(out, "  {}. ", index + 1);
        if let Some(pos) = definition
            .part_of_speech
            .as_deref()
            .filter(|p| !p.trim().is_empty())
        {
            let _ = write!(out, "{} ", Style::part_of_speech(pos.trim()));
        }
        let _ = writeln!(out, "{}", definition.definition);

        for example in &definition.examples {
            let _ = writeln!(out, "     {}", Style::hint(example));
        }
    }
}
