//! Output in the GitHub Actions workflow command format.
//!
//! The runner scans stdout for lines such as `::error::<message>` and turns
//! them into annotations on the job.

#[cfg(test)]
#[path = "reporting_tests.rs"]
mod tests;

/// Escapes a message so that it survives as a single workflow command line.
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Formats an `::error::` workflow command.
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Marks the current step as failed with the given message.
pub fn set_failed(message: &str) {
    println!("{}", error_command(message));
}
