use colored::Colorize;

/// How a reader finding should be routed. Warnings always reach the user,
/// debug records only when verbose output was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Warning,
}

impl Severity {
    pub fn color_tag(&self) -> impl std::fmt::Display {
        match self {
            Severity::Debug => "debug:".cyan(),
            Severity::Warning => "warning:".yellow().bold(),
        }
    }
}

/// A finding collected while reading a source. The readers never print
/// themselves; the caller decides the channel.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn debug(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Debug,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}
