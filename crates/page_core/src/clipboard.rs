use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use shared::domain::Notice;
use shared::error::{PageError, PageResult};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardOutcome {
    Success,
    Failure,
}

/// Host clipboard, write-only.
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    async fn write_text(&self, text: String) -> PageResult<()>;
}

/// Text the user asked to copy. Has no identity beyond its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardRequest {
    pub text: String,
}

impl ClipboardRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn notice(&self, outcome: ClipboardOutcome) -> Notice {
        match outcome {
            ClipboardOutcome::Success => Notice::info(format!("Enlace copiado: {}", self.text)),
            ClipboardOutcome::Failure => Notice::error("No se pudo copiar el enlace."),
        }
    }
}

#[derive(Clone)]
pub struct ClipboardService {
    writer: Arc<dyn ClipboardWriter>,
}

impl ClipboardService {
    pub fn new(writer: Arc<dyn ClipboardWriter>) -> Self {
        Self { writer }
    }

    /// Single attempt; rejection of any kind becomes `Failure`.
    pub async fn copy(&self, text: &str) -> ClipboardOutcome {
        match self.writer.write_text(text.to_string()).await {
            Ok(()) => {
                info!(len = text.len(), "copied text to clipboard");
                ClipboardOutcome::Success
            }
            Err(err) => {
                warn!(code = ?err.code(), error = %err, "clipboard write failed");
                ClipboardOutcome::Failure
            }
        }
    }

    pub async fn fulfil(&self, request: &ClipboardRequest) -> ClipboardOutcome {
        self.copy(&request.text).await
    }
}

/// In-process clipboard for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
    denied: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects every write, like a clipboard without permission.
    pub fn denied() -> Self {
        Self {
            contents: Arc::default(),
            denied: true,
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ClipboardWriter for MemoryClipboard {
    async fn write_text(&self, text: String) -> PageResult<()> {
        if self.denied {
            return Err(PageError::clipboard("permission denied"));
        }
        *self.lock() = Some(text);
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/clipboard_tests.rs"]
mod tests;
