//! User actions and backend results consumed by the UI thread.

use std::path::PathBuf;

use page_core::{ClipboardOutcome, ClipboardRequest};

/// Results reported by the backend worker.
#[derive(Debug)]
pub enum UiEvent {
    ClipboardFinished {
        request: ClipboardRequest,
        outcome: ClipboardOutcome,
    },
    ExportSaved(PathBuf),
    ExportFailed(String),
}

/// Affordances clicked during a frame, applied after rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    ToggleTheme,
    Print,
    CopyLink,
    Open { url: &'static str, new_tab: bool },
    DismissNotice,
}
