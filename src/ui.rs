//! Output formatting for the gate's three line kinds.
//!
//! `format_*` functions build the plain text and are pure; `display_*` add
//! styling and print. Colour is dropped automatically when the stream is not
//! a terminal, which is the usual case in CI logs.

use console::style;

use crate::boundary::SkipNotice;

/// Prefix carried by every line the gate prints
pub const PREFIX: &str = "[release-readiness]";

pub fn format_success(tag: &str) -> String {
    format!("{} OK (version {})", PREFIX, tag)
}

pub fn format_info(message: &str) -> String {
    format!("{} INFO: {}", PREFIX, message)
}

pub fn format_error(message: &str) -> String {
    format!("{} ERROR: {}", PREFIX, message)
}

/// Print the confirmation line on stdout
pub fn display_success(tag: &str) {
    println!("{}", style(format_success(tag)).green());
}

/// Print an informational line on stderr
pub fn display_notice(notice: &SkipNotice) {
    eprintln!("{}", style(format_info(&notice.to_string())).yellow().for_stderr());
}

/// Print a fatal error line on stderr
pub fn display_error(message: &str) {
    eprintln!("{}", style(format_error(message)).red().for_stderr());
}
