use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Spinner shown while a search request is in flight.
///
/// It holds no search state of its own; the owner decides when it is visible.
pub struct LoadingSpinner {
    draw: bool,
    bar: Option<ProgressBar>,
}

impl LoadingSpinner {
    /// A spinner drawing to stderr.
    pub fn new() -> Self {
        LoadingSpinner {
            draw: true,
            bar: None,
        }
    }

    /// A spinner that never draws, used when stderr is not a terminal.
    pub fn hidden() -> Self {
        LoadingSpinner {
            draw: false,
            bar: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    pub fn set_visible(&mut self, visible: bool) {
        match (visible, self.bar.take()) {
            (true, None) => self.bar = Some(self.start()),
            (false, Some(bar)) => bar.finish_and_clear(),
            (_, bar) => self.bar = bar,
        }
    }

    /// Run `f` with the spinner cleared from the terminal.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        match &self.bar {
            Some(bar) => bar.suspend(f),
            None => f(),
        }
    }

    fn start(&self) -> ProgressBar {
        let bar = if self.draw {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        let style = ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
        bar.set_style(style);
        bar.set_message("Loading...");
        bar.enable_steady_tick(TICK_INTERVAL);
        bar
    }
}

impl Default for LoadingSpinner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_visibility() {
        let mut spinner = LoadingSpinner::hidden();
        assert!(!spinner.is_visible());

        spinner.set_visible(true);
        spinner.set_visible(true);
        assert!(spinner.is_visible());

        spinner.set_visible(false);
        assert!(!spinner.is_visible());
        spinner.set_visible(true);
        assert!(spinner.is_visible());
        assert_eq!(spinner.suspend(|| 7), 7);
    }
}
