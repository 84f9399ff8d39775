use std::io::IsTerminal;

use anstyle::{AnsiColor, Reset, Style};

const PRIMARY_COLOR: Style = Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Cyan)));
const SUCCESS_COLOR: Style = Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Green)));
const ERROR_COLOR: Style = Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Red)));

/// Only emit escape codes when stderr is a terminal.
fn paint(style: Style, s: &str) -> String {
    if std::io::stderr().is_terminal() {
        format!("{style}{s}{Reset}")
    } else {
        s.to_string()
    }
}

#[must_use]
pub fn format_start_message(tool: &str, command_line: &str) -> String {
    format!("{} {tool} {command_line}", paint(PRIMARY_COLOR, "❱"))
}

#[must_use]
pub fn format_success_message(operation: &str) -> String {
    format!(
        "{} {operation} succeeded {}",
        paint(PRIMARY_COLOR, "❱"),
        paint(SUCCESS_COLOR, "✓")
    )
}

#[must_use]
pub fn describe_exit(exit_code: Option<i32>) -> String {
    exit_code.map_or_else(|| "killed by signal".to_string(), |c| format!("exit code {c}"))
}

#[must_use]
pub fn format_failure_message(operation: &str, exit_code: Option<i32>) -> String {
    format!(
        "{} {operation} failed {} ({})",
        paint(PRIMARY_COLOR, "❱"),
        paint(ERROR_COLOR, "✘"),
        describe_exit(exit_code)
    )
}
