use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Line-count progress bar for an import. A silent reporter draws nothing.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    pub fn new(total: u64, message: &str, silent: bool) -> Self {
        if silent {
            return Self::silent();
        }

        let pb = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines ({eta})")
            .map(|s| s.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            progress_bar: Some(pb),
        }
    }

    pub fn silent() -> Self {
        Self { progress_bar: None }
    }

    pub fn increment(&self, delta: u64) {
        if let Some(ref pb) = self.progress_bar {
            pb.inc(delta);
        }
    }

    pub fn set_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.set_message(message.to_string());
        }
    }

    pub fn finish_with_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_with_message(message.to_string());
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish();
        }
    }
}
