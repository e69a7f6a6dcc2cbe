//! Progress bar display for documentation builds

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for the per-file documentation loop
pub struct BuildProgress {
    file_pb: ProgressBar,
}

impl BuildProgress {
    /// Create a new progress display with total file count
    pub fn new(total_files: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let file_pb = ProgressBar::new(total_files);
        file_pb.set_style(style);

        Self { file_pb }
    }

    /// Progress display that never draws
    #[cfg(test)]
    pub fn hidden() -> Self {
        Self {
            file_pb: ProgressBar::hidden(),
        }
    }

    /// Update to show the file currently being processed
    pub fn update_file(&self, file_path: &str) {
        // Keep the tail of long paths, that's where name and version are
        let display_path = match file_path.char_indices().rev().nth(46) {
            Some((start, _)) if file_path.chars().count() > 50 => {
                format!("...{}", &file_path[start..])
            }
            _ => file_path.to_string(),
        };
        self.file_pb.set_message(display_path);
    }

    /// Print a line above the bar
    pub fn println(&self, line: impl AsRef<str>) {
        self.file_pb.suspend(|| println!("{}", line.as_ref()));
    }

    /// Increment file progress
    pub fn inc_file(&self) {
        self.file_pb.inc(1);
    }

    /// Finish the progress bar
    pub fn finish(&self) {
        self.file_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.file_pb.abandon();
    }
}
