// Leveled diagnostic messages, written to stderr

use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Error,
    Warning,
    Info,
    Debug,
}

impl DebugLevel {
    pub fn from_name(name: &str) -> Option<DebugLevel> {
        match name {
            "error" => Some(DebugLevel::Error),
            "warning" => Some(DebugLevel::Warning),
            "info" => Some(DebugLevel::Info),
            "debug" => Some(DebugLevel::Debug),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Msg {
    debug_level: DebugLevel,
}

impl Msg {
    pub fn new() -> Msg {
        Msg {
            debug_level: DebugLevel::Error,
        }
    }

    pub fn set_level(&mut self, lev: DebugLevel) {
        self.debug_level = lev;
    }

    pub fn get_level(&self) -> DebugLevel {
        self.debug_level
    }

    /// True if a message at `level` would be shown.
    pub fn enabled(&self, level: DebugLevel) -> bool {
        level <= self.debug_level
    }

    pub fn error<T: Debug>(&self, context: &str, text: &str, value: Option<T>) {
        self.emit(DebugLevel::Error, "Error", context, text, value);
    }

    pub fn warning<T: Debug>(&self, context: &str, text: &str, value: Option<T>) {
        self.emit(DebugLevel::Warning, "WARNING", context, text, value);
    }

    pub fn info<T: Debug>(&self, context: &str, text: &str, value: Option<T>) {
        self.emit(DebugLevel::Info, "INFO", context, text, value);
    }

    pub fn debug<T: Debug>(&self, context: &str, text: &str, value: Option<T>) {
        self.emit(DebugLevel::Debug, "DEBUG", context, text, value);
    }

    fn emit<T: Debug>(
        &self,
        level: DebugLevel,
        tag: &str,
        context: &str,
        text: &str,
        value: Option<T>,
    ) {
        if self.enabled(level) {
            eprintln!("{}", format_message(tag, context, text, value));
        }
    }
}

fn format_message<T: Debug>(tag: &str, context: &str, text: &str, value: Option<T>) -> String {
    match value {
        Some(value) => format!("{tag}:{context}: {text} {value:?}"),
        None => format!("{tag}:{context}: {text}"),
    }
}

impl Default for Msg {
    fn default() -> Self {
        Msg::new()
    }
}
