use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for multi-file batch runs
pub struct ProgressTracker {
    bar: ProgressBar,
}

impl ProgressTracker {
    pub fn new(total: u64, description: &str) -> Self {
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} sheets {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bar = ProgressBar::new(total);
        bar.set_style(style);
        bar.set_message(description.to_string());

        ProgressTracker { bar }
    }

    /// Advance the bar by one processed file
    pub fn tick_file(&self, file_name: &str) {
        self.bar.set_message(file_name.to_string());
        self.bar.inc(1);
    }

    /// Finish with the per-file success/failure tally
    pub fn finish_with_counts(&self, succeeded: usize, failed: usize) {
        self.bar
            .finish_with_message(format!("{} succeeded, {} failed", succeeded, failed));
    }
}
