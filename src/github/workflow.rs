// GitHub Actions workflow commands.
//
// Printing `::error::message` to stdout makes the runner attach an error
// annotation to the step. Message data must have `%`, CR and LF escaped or
// the runner truncates it at the first newline.

/// Escape a message for use as workflow command data.
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Format an `::error::` workflow command.
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Emit an error annotation for the current step.
pub fn annotate_error(message: &str) {
    println!("{}", error_command(message));
}
