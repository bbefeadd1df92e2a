//! Progress bar over the wallpapers a batch command visits

use indicatif::{ProgressBar, ProgressStyle};

const BAR_TEMPLATE: &str = "{spinner:.green} {prefix} [{bar:40.cyan/blue}] {pos}/{len} images ({eta}) {wide_msg}";

/// Per-image progress for `generate` and `add-ratio`
///
/// The image count is usually unknown when the bar is created, since the
/// sidecar has to be loaded first; callers fix it with [`set_length`].
///
/// [`set_length`]: ProgressTracker::set_length
pub struct ProgressTracker {
    bar: ProgressBar,
}

impl ProgressTracker {
    /// Drawn bar labelled with `description`
    pub fn new(total: u64, description: &str) -> Self {
        let bar = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar().template(BAR_TEMPLATE) {
            bar.set_style(style.progress_chars("=> "));
        }
        bar.set_prefix(description.to_string());

        ProgressTracker { bar }
    }

    /// A tracker that draws nothing, for library callers and tests
    pub fn hidden() -> Self {
        ProgressTracker {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn set_length(&self, images: u64) {
        self.bar.set_length(images);
    }

    pub fn increment(&self, images: u64) {
        self.bar.inc(images);
    }

    /// Show the image currently being processed
    pub fn set_message(&self, image: &str) {
        self.bar.set_message(image.to_string());
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }
}
