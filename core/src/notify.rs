//! User-facing collaborator contracts: toasts and confirmation prompts.
//!
//! # Design
//! `Notifier` is fire-and-forget; the manager never waits on it or reads a
//! result back. `Confirmer` resolves asynchronously to a yes/no answer so a
//! host can show a modal without blocking the caller's executor.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

/// How long a toast stays on screen before dismissing itself.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(2);

pub const MSG_NAME_REQUIRED: &str = "Country name required";
pub const MSG_ADDED: &str = "Country added";
pub const MSG_UPDATED: &str = "Country updated";
pub const MSG_DELETED: &str = "Country deleted";
pub const MSG_LOAD_FAILED: &str = "Failed to load countries";
pub const MSG_SAVE_FAILED: &str = "Failed to save country";
pub const MSG_DELETE_FAILED: &str = "Failed to delete country";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        f.write_str(label)
    }
}

/// A transient, non-blocking message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
    pub duration: Duration,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Text of a yes/cancel prompt for a destructive action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmPrompt {
    pub fn delete_country() -> Self {
        Self {
            title: "Delete country?".to_string(),
            text: "This cannot be undone!".to_string(),
            confirm_label: "Yes".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }
}

#[async_trait]
pub trait Confirmer: Send + Sync {
    /// Resolves to `true` only if the user accepted the prompt.
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}
