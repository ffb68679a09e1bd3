//! Progress bar utilities

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress bar for a batch of exports, hidden for quiet runs
pub fn create_progress_bar(total: u64, message: &str, hidden: bool) -> ProgressBar {
    let pb = ProgressBar::new(total);
    if hidden {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }
    if let Ok(style) =
        ProgressStyle::default_bar().template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("##-"));
    }
    pb.set_message(message.to_string());
    pb
}
