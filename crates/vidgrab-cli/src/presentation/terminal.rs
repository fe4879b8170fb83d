use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;
use vidgrab_runtime::UiSurface;

const TICK: Duration = Duration::from_millis(120);

/// [`UiSurface`] backed by an indicatif spinner.
///
/// On a terminal the status text is the spinner message. When stderr is
/// not a terminal the spinner is hidden, so each status is printed as a
/// line instead.
pub struct TerminalSurface {
    spinner: ProgressBar,
    trigger_enabled: bool,
    prompt_on_enable: bool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::with_spinner(create_spinner())
    }

    /// A surface that prints nothing. Used by tests.
    pub fn hidden() -> Self {
        Self::with_spinner(ProgressBar::hidden())
    }

    fn with_spinner(spinner: ProgressBar) -> Self {
        Self {
            spinner,
            trigger_enabled: false,
            prompt_on_enable: false,
        }
    }

    /// Print an input prompt each time the trigger becomes enabled.
    #[must_use]
    pub const fn prompting(mut self) -> Self {
        self.prompt_on_enable = true;
        self
    }

    pub const fn trigger_enabled(&self) -> bool {
        self.trigger_enabled
    }

    /// Print a line without tearing the spinner.
    pub fn println(&self, line: &str) {
        if self.spinner.is_hidden() {
            println!("{line}");
        } else {
            self.spinner.println(line);
        }
    }

    /// Stop the spinner, leaving the last status on screen.
    pub fn finish(&self) {
        if !self.spinner.is_finished() {
            self.spinner.finish();
        }
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl UiSurface for TerminalSurface {
    fn show_status(&mut self, text: &str) {
        if self.spinner.is_hidden() {
            println!("{text}");
        } else {
            self.spinner.set_message(text.to_string());
        }
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        if enabled == self.trigger_enabled {
            return;
        }
        debug!(enabled, "Trigger state changed");
        self.trigger_enabled = enabled;

        // The tool writes to the inherited stdout while it runs.
        if enabled {
            self.spinner.enable_steady_tick(TICK);
        } else {
            self.spinner.disable_steady_tick();
        }

        if enabled && self.prompt_on_enable {
            self.println("Enter a video URL (Ctrl-D to quit):");
        }
    }
}

fn create_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.enable_steady_tick(TICK);
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_trigger_state() {
        let mut surface = TerminalSurface::hidden();
        assert!(!surface.trigger_enabled());
        surface.set_trigger_enabled(true);
        assert!(surface.trigger_enabled());
        surface.set_trigger_enabled(false);
        assert!(!surface.trigger_enabled());
    }
}
