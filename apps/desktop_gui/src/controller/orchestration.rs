//! Command orchestration helpers from UI actions to backend command queue.

use std::{path::PathBuf, sync::Arc};

use crossbeam_channel::{Sender, TrySendError};
use shared::domain::Notice;

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd` without blocking the UI thread. A full or closed queue is
/// reported through `notice`.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    notice: &mut Option<Notice>,
) {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "backend queue full");
            *notice = Some(Notice::error(
                "La aplicación está ocupada; inténtalo de nuevo.",
            ));
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "backend worker disconnected");
            *notice = Some(Notice::error(
                "El proceso en segundo plano no está disponible.",
            ));
        }
    }
}

/// Builds the export command once a destination is picked. `pick_path`
/// runs on the calling thread, which must be the UI thread for native
/// dialogs. `None` means the user cancelled.
pub fn export_command(
    image: Arc<egui::ColorImage>,
    pick_path: impl FnOnce() -> Option<PathBuf>,
) -> Option<BackendCommand> {
    let Some(path) = pick_path() else {
        tracing::debug!("export dialog cancelled");
        return None;
    };
    Some(BackendCommand::ExportSnapshot { image, path })
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use page_core::ClipboardRequest;

    use super::*;

    fn copy_cmd() -> BackendCommand {
        BackendCommand::CopyToClipboard(ClipboardRequest::new("https://example.com/resume"))
    }

    fn snapshot() -> Arc<egui::ColorImage> {
        Arc::new(egui::ColorImage::from_rgba_unmultiplied([1, 1], &[0, 0, 0, 255]))
    }

    #[test]
    fn export_command_carries_path_picked_by_caller() {
        let picked = PathBuf::from("/tmp/cv.png");

        let cmd = export_command(snapshot(), || Some(picked.clone()));

        assert!(matches!(
            cmd,
            Some(BackendCommand::ExportSnapshot { ref path, .. }) if path == &picked
        ));
    }

    #[test]
    fn cancelled_pick_queues_nothing() {
        assert!(export_command(snapshot(), || None).is_none());
    }

    #[test]
    fn queued_command_leaves_notice_untouched() {
        let (tx, rx) = bounded(1);
        let mut notice = None;

        dispatch_backend_command(&tx, copy_cmd(), &mut notice);

        assert!(notice.is_none());
        assert!(matches!(rx.try_recv(), Ok(BackendCommand::CopyToClipboard(_))));
    }

    #[test]
    fn full_queue_reports_busy_notice() {
        let (tx, _rx) = bounded(1);
        let mut notice = None;

        dispatch_backend_command(&tx, copy_cmd(), &mut notice);
        dispatch_backend_command(&tx, copy_cmd(), &mut notice);

        assert!(notice.expect("notice").is_error());
    }

    #[test]
    fn disconnected_worker_reports_error_notice() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut notice = None;

        dispatch_backend_command(&tx, copy_cmd(), &mut notice);

        assert!(notice.expect("notice").is_error());
    }
}
