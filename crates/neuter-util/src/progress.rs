use std::io::Write;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Print a Cargo-style status line: `  Neutering app.js`
///
/// The `label` is right-padded to 12 characters and printed in bold green,
/// followed by the `message` in the default terminal colour.
pub fn status(label: &str, message: &str) {
    let green_bold = Style::new().green().bold();
    write_line(&format!("{:>12} {message}", green_bold.apply_to(label)));
}

/// Print a warning-style status line (bold yellow label).
pub fn status_warn(label: &str, message: &str) {
    let yellow_bold = Style::new().yellow().bold();
    write_line(&format!("{:>12} {message}", yellow_bold.apply_to(label)));
}

// The whole line goes out under one stderr lock so lines from concurrent
// root resolutions never interleave.
fn write_line(line: &str) {
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(handle, "{line}");
}

/// Create a progress bar with the given length and message for determinate progress.
pub fn progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .expect("valid template")
            .progress_chars("=> "),
    );
    pb.set_message(message.to_string());
    pb
}
