//! Line-indexing progress reporting; a no-op when the `progress` feature is disabled

#[cfg(feature = "progress")]
pub use self::bar::BuildProgress;

#[cfg(not(feature = "progress"))]
pub use self::noop::BuildProgress;

#[cfg(feature = "progress")]
mod bar {
    use indicatif::{ProgressBar, ProgressStyle};

    /// Progress over the lines of the words file.
    pub struct BuildProgress {
        bar: Option<ProgressBar>,
    }

    impl BuildProgress {
        /// Create a tracker for `total_lines`. Nothing is drawn unless `enabled`.
        pub fn new(total_lines: usize, enabled: bool) -> Self {
            if !enabled {
                return Self { bar: None };
            }

            let bar = ProgressBar::new(total_lines as u64);
            if let Ok(style) = ProgressStyle::default_bar().template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines {msg}",
            ) {
                bar.set_style(style.progress_chars("█▓▒░  "));
            }
            bar.set_message("Indexing...");
            Self { bar: Some(bar) }
        }

        /// A tracker that never draws.
        pub fn hidden() -> Self {
            Self { bar: None }
        }

        #[inline]
        pub fn line_done(&self) {
            if let Some(ref bar) = self.bar {
                bar.inc(1);
            }
        }

        pub fn finish(&self, summary: String) {
            if let Some(ref bar) = self.bar {
                bar.finish_with_message(summary);
            }
        }
    }
}

#[cfg(not(feature = "progress"))]
mod noop {
    /// No-op tracker when `progress` feature is disabled
    pub struct BuildProgress;

    impl BuildProgress {
        pub fn new(_total_lines: usize, _enabled: bool) -> Self {
            BuildProgress
        }

        pub fn hidden() -> Self {
            BuildProgress
        }

        pub fn line_done(&self) {}

        pub fn finish(&self, _summary: String) {}
    }
}
