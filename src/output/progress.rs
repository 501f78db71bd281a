use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for the per-file analysis loop.
///
/// Hidden in quiet mode or when stderr is not a TTY, so piped output stays
/// clean. The bar writes to stderr to avoid interfering with stdout output.
pub struct AnalysisProgress {
    bar: ProgressBar,
}

impl AnalysisProgress {
    /// # Panics
    /// Panics if the progress bar template is invalid; the template is a
    /// compile-time constant, so this should never happen.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let bar = if quiet || !std::io::stderr().is_terminal() {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(total);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} Analyzing [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%)",
                    )
                    .expect("valid progress template")
                    .progress_chars("#>-"),
            );
            bar
        };

        Self { bar }
    }

    pub fn tick(&self) {
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
