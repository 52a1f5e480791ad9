//! Backend commands queued from UI to backend worker.

use std::{path::PathBuf, sync::Arc};

use page_core::ClipboardRequest;

pub enum BackendCommand {
    CopyToClipboard(ClipboardRequest),
    /// `path` is chosen on the UI thread before the command is queued.
    ExportSnapshot {
        image: Arc<egui::ColorImage>,
        path: PathBuf,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::CopyToClipboard(_) => "copy_to_clipboard",
            BackendCommand::ExportSnapshot { .. } => "export_snapshot",
        }
    }
}
