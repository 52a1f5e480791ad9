//! Runtime bridge between UI command queue and backend event intake.

use std::{path::PathBuf, thread};

use crossbeam_channel::{Receiver, Sender};
use page_core::ClipboardService;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Spawns the worker thread. It exits once every command sender is dropped.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    clipboard: ClipboardService,
    repaint: egui::Context,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                let event = match cmd {
                    BackendCommand::CopyToClipboard(request) => {
                        let outcome = clipboard.fulfil(&request).await;
                        UiEvent::ClipboardFinished { request, outcome }
                    }
                    BackendCommand::ExportSnapshot { image, path } => {
                        export_snapshot(&image, path).await
                    }
                };

                if ui_tx.try_send(event).is_err() {
                    tracing::warn!("ui event queue unavailable; dropping backend result");
                }
                repaint.request_repaint();
            }
            tracing::debug!("backend worker stopped");
        });
    });
}

async fn export_snapshot(image: &egui::ColorImage, path: PathBuf) -> UiEvent {
    let png = match encode_rgba_png(image.as_raw(), image.size[0], image.size[1]) {
        Ok(png) => png,
        Err(err) => return UiEvent::ExportFailed(format!("No se pudo generar la imagen: {err}")),
    };

    match tokio::fs::write(&path, png).await {
        Ok(()) => {
            tracing::info!(path = %path.display(), "page exported");
            UiEvent::ExportSaved(path)
        }
        Err(err) => UiEvent::ExportFailed(format!(
            "No se pudo guardar {}: {err}",
            path.display()
        )),
    }
}

fn encode_rgba_png(rgba: &[u8], width: usize, height: usize) -> Result<Vec<u8>, String> {
    let image = image::RgbaImage::from_raw(width as u32, height as u32, rgba.to_vec())
        .ok_or_else(|| "invalid RGBA buffer".to_string())?;
    let dynamic = image::DynamicImage::ImageRgba8(image);
    let mut out = std::io::Cursor::new(Vec::new());
    dynamic
        .write_to(&mut out, image::ImageFormat::Png)
        .map_err(|err| err.to_string())?;
    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> egui::ColorImage {
        let rgba: Vec<u8> = [20u8, 184, 166, 255].repeat(8);
        egui::ColorImage::from_rgba_unmultiplied([4, 2], &rgba)
    }

    #[test]
    fn encodes_png_signature() {
        let image = snapshot();
        let png = encode_rgba_png(image.as_raw(), 4, 2).expect("png");
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn rejects_short_buffer() {
        assert!(encode_rgba_png(&[0; 3], 4, 2).is_err());
    }

    fn current_thread() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime")
    }

    #[test]
    fn export_writes_file_to_given_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("cv.png");

        let event = current_thread().block_on(export_snapshot(&snapshot(), target.clone()));

        assert!(matches!(event, UiEvent::ExportSaved(ref path) if path == &target));
        let written = std::fs::read(&target).expect("exported file");
        assert_eq!(&written[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn unwritable_path_reports_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("missing").join("cv.png");

        let event = current_thread().block_on(export_snapshot(&snapshot(), target));

        assert!(matches!(event, UiEvent::ExportFailed(ref message) if message.contains("cv.png")));
    }

    #[test]
    fn worker_reports_export_without_a_dialog() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("cv.png");
        let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(1);
        let (ui_tx, ui_rx) = crossbeam_channel::bounded(1);
        let clipboard = ClipboardService::new(std::sync::Arc::new(page_core::MemoryClipboard::new()));

        launch(cmd_rx, ui_tx, clipboard, egui::Context::default());
        cmd_tx
            .send(BackendCommand::ExportSnapshot {
                image: std::sync::Arc::new(snapshot()),
                path: target.clone(),
            })
            .expect("queue export");

        let event = ui_rx
            .recv_timeout(std::time::Duration::from_secs(5))
            .expect("worker result");
        assert!(matches!(event, UiEvent::ExportSaved(ref path) if path == &target));
        assert!(target.exists());
    }
}
