//! Clipboard access and copy acknowledgement.

use std::time::{Duration, Instant};

/// How long the "copied" acknowledgement stays visible.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Error returned by clipboard backends.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard is available in this environment.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    /// The environment refused clipboard access.
    #[error("clipboard access denied")]
    PermissionDenied,
}

/// System clipboard service.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-memory clipboard.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    /// Last written text.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_owned());
        Ok(())
    }
}

/// Transient "copied" acknowledgement.
///
/// Active for [`COPY_FEEDBACK_DURATION`] after the last successful copy,
/// then reverts on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied_at: Option<Instant>,
}

impl CopyFeedback {
    /// Record a successful copy at `now`.
    pub fn mark(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// Whether the acknowledgement shows at `now`.
    pub fn is_active(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPY_FEEDBACK_DURATION)
    }
}
