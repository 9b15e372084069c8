//! Spinner display for command steps

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// One running step of a command
pub struct StepProgress {
    spinner: ProgressBar,
    title: String,
}

impl StepProgress {
    /// Start a spinner titled `title`
    pub fn start(title: &str) -> Self {
        let spinner_style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ");

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style);
        spinner.set_message(title.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));

        Self {
            spinner,
            title: title.to_string(),
        }
    }

    /// Mark the step done
    pub fn finish(&self) {
        self.spinner
            .finish_with_message(format!("{} {}", style("✔").green(), self.title));
    }

    /// Mark the step skipped with a reason
    pub fn skip(&self, reason: &str) {
        self.spinner.finish_with_message(format!(
            "{} {} {}",
            style("↓").yellow(),
            self.title,
            style(format!("[{reason}]")).dim()
        ));
    }

    /// Abandon on error
    pub fn fail(&self) {
        self.spinner
            .abandon_with_message(format!("{} {}", style("✖").red(), self.title));
    }
}

/// Run `task` under a spinner, marking it failed when it errors
pub fn step<T, E>(title: &str, task: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
    let progress = StepProgress::start(title);
    match task() {
        Ok(value) => {
            progress.finish();
            Ok(value)
        }
        Err(e) => {
            progress.fail();
            Err(e)
        }
    }
}
