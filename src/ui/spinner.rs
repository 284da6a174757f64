use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::future::Future;
use std::time::Duration;

use crate::output;

/// Braille frames; the trailing space is the finished frame.
const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ";

/// Awaits `task` behind a stderr spinner labelled `message`.
///
/// The spinner is hidden in quiet mode and is cleared before the task's
/// output is returned, or when the future is dropped early.
pub async fn with_spinner<F: Future>(message: &str, task: F) -> F::Output {
    let _spinner = Spinner::start(message);
    task.await
}

struct Spinner(ProgressBar);

impl Spinner {
    fn start(message: &str) -> Self {
        let target = if output::is_quiet() {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stderr()
        };
        let style = ProgressStyle::with_template("{spinner} {msg}")
            .map_or_else(|_| ProgressStyle::default_spinner(), |s| s.tick_chars(TICK_CHARS));

        let bar = ProgressBar::with_draw_target(None, target)
            .with_style(style)
            .with_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self(bar)
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.0.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_spinner_returns_task_output() {
        let output = with_spinner("Translating...", async { 40 + 2 }).await;
        assert_eq!(output, 42);
    }
}
