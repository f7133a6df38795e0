//! Startup spinner, a no-op when the `progress` feature is disabled

#[cfg(feature = "progress")]
pub use self::bar::Spinner;

#[cfg(not(feature = "progress"))]
pub use self::noop::Spinner;

#[cfg(feature = "progress")]
mod bar {
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::Duration;

    /// Spinner tick interval
    const TICK: Duration = Duration::from_millis(80);

    /// Terminal spinner shown while the corpus loads and the index builds
    pub struct Spinner {
        bar: Option<ProgressBar>,
    }

    impl Spinner {
        /// Start a spinner with a message; `enabled = false` shows nothing
        pub fn start(message: &str, enabled: bool) -> Self {
            if !enabled {
                return Self { bar: None };
            }

            let bar = ProgressBar::new_spinner();
            if let Ok(style) =
                ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")
            {
                bar.set_style(style);
            }
            bar.set_message(message.to_string());
            bar.enable_steady_tick(TICK);
            Self { bar: Some(bar) }
        }

        pub fn set_message(&self, message: &str) {
            if let Some(bar) = &self.bar {
                bar.set_message(message.to_string());
            }
        }

        /// Remove the spinner from the terminal
        pub fn finish(self) {
            if let Some(bar) = self.bar {
                bar.finish_and_clear();
            }
        }
    }
}

#[cfg(not(feature = "progress"))]
mod noop {
    /// No-op spinner when `progress` feature is disabled
    pub struct Spinner;

    impl Spinner {
        pub fn start(_message: &str, _enabled: bool) -> Self {
            Spinner
        }

        pub fn set_message(&self, _message: &str) {}

        pub fn finish(self) {}
    }
}
