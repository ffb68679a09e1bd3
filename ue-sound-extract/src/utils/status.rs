//! Batch status messages

use console::{Style, style};
use std::fmt;

/// Status of a drop/extract batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    /// None of the inputs was a JSON file
    NoJsonFiles,
    /// Processing is about to start for this many files
    Processing(usize),
    /// This many CSV files were written
    Success(usize),
    /// JSON files were given but none produced output
    NothingProcessed,
}

impl BatchStatus {
    /// Status line text
    pub fn text(&self) -> String {
        match self {
            Self::NoJsonFiles => "No JSON files found".to_string(),
            Self::Processing(count) => format!("Processing {count} files..."),
            Self::Success(count) => format!("Success: {count} files processed"),
            Self::NothingProcessed => "No valid files processed".to_string(),
        }
    }

    /// Colour of the status line; orange is 256-colour index 208
    pub fn style(&self) -> Style {
        match self {
            Self::NoJsonFiles => Style::new().red(),
            Self::Processing(_) => Style::new().blue(),
            Self::Success(_) => Style::new().green(),
            Self::NothingProcessed => Style::new().color256(208),
        }
    }

    /// Whether the batch should end with a failing exit status
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::NoJsonFiles | Self::NothingProcessed)
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.style().apply_to(self.text()))
    }
}

/// Print a status line to stdout
pub fn show_status(status: BatchStatus) {
    println!("{status}");
}

/// Print the completion summary shown once a batch wrote at least one file
pub fn show_completion(succeeded: usize) {
    println!(
        "{} Processed {} files",
        style("Complete:").bold(),
        style(succeeded).cyan()
    );
}
