//! Terminal styling for plain output.
//!
//! Colour is decided once per process: on when stdout is a terminal and
//! `NO_COLOR` is unset.

use drsla_engine::GroupHealth;
use drsla_types::Severity;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::sync::atomic::{AtomicBool, Ordering};

static COLOR: AtomicBool = AtomicBool::new(false);

pub fn init() {
    let enabled = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    COLOR.store(enabled, Ordering::Relaxed);
}

fn enabled() -> bool {
    COLOR.load(Ordering::Relaxed)
}

pub fn bold(text: &str) -> String {
    if enabled() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn dim(text: &str) -> String {
    if enabled() {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

pub fn accent(text: &str) -> String {
    if enabled() {
        text.cyan().to_string()
    } else {
        text.to_string()
    }
}

pub fn severity(severity: Severity, text: &str) -> String {
    if !enabled() {
        return text.to_string();
    }
    match severity {
        Severity::Critical => text.red().bold().to_string(),
        Severity::Warning => text.yellow().to_string(),
        Severity::Info => text.blue().to_string(),
    }
}

pub fn health(health: GroupHealth, text: &str) -> String {
    match health {
        GroupHealth::Healthy if enabled() => text.green().bold().to_string(),
        GroupHealth::Healthy => text.to_string(),
        GroupHealth::Info => severity(Severity::Info, text),
        GroupHealth::Warning => severity(Severity::Warning, text),
        GroupHealth::Critical => severity(Severity::Critical, text),
    }
}

pub fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "✗",
        Severity::Warning => "!",
        Severity::Info => "i",
    }
}
