use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    pub plain_mode: bool,
    pub quiet_mode: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    if prefs.plain_mode {
        colored::control::set_override(false);
    }
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

fn preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn should_skip(kind: MessageKind, prefs: &OutputPreferences) -> bool {
    prefs.quiet_mode && matches!(kind, MessageKind::Info)
}

fn icon(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "[i]",
        MessageKind::Success => "[ok]",
        MessageKind::Warning => "[!]",
        MessageKind::Error => "[x]",
        MessageKind::Section => "",
    }
}

pub(crate) fn apply_style(
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> String {
    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => format!("{} {}", icon(kind), text),
    };

    if prefs.plain_mode {
        return formatted;
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = preferences();
    if should_skip(kind, &prefs) {
        return;
    }
    println!("{}", apply_style(kind, message, &prefs));
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Writes a line verbatim; used for rendered form content.
pub fn line(text: impl fmt::Display) {
    println!("{}", text);
}
