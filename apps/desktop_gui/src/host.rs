//! Desktop implementations of the page's host collaborators.

use std::sync::{Arc, Mutex};

use arboard::Clipboard;
use async_trait::async_trait;
use page_core::{ClipboardWriter, PrintHost, StyleScope};
use shared::error::{PageError, PageResult};

use crate::ui::theme::visuals_for;

/// System clipboard. The handle is kept alive after the first write so the
/// contents outlive the call on platforms where the owner serves them.
#[derive(Clone, Default)]
pub struct SystemClipboard {
    inner: Arc<Mutex<Option<Clipboard>>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: String) -> PageResult<()> {
        let inner = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = inner
                .lock()
                .map_err(|_| PageError::clipboard("clipboard handle poisoned"))?;
            if guard.is_none() {
                let clipboard =
                    Clipboard::new().map_err(|err| PageError::clipboard(err.to_string()))?;
                *guard = Some(clipboard);
            }
            let Some(clipboard) = guard.as_mut() else {
                return Err(PageError::clipboard("clipboard unavailable"));
            };
            clipboard
                .set_text(text)
                .map_err(|err| PageError::clipboard(err.to_string()))
        })
        .await
        .map_err(|err| PageError::clipboard(format!("clipboard task failed: {err}")))?
    }
}

/// Style scope backed by the egui context shared by every panel.
pub struct EguiStyleScope {
    ctx: egui::Context,
}

impl EguiStyleScope {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl StyleScope for EguiStyleScope {
    fn set_dark(&mut self, dark: bool) {
        let theme = if dark {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        };
        self.ctx.set_visuals_of(theme, visuals_for(dark));
        self.ctx.set_theme(theme);
        self.ctx.request_repaint();
    }
}

/// Requests a screenshot of the window; the frame is exported once it
/// arrives as an `egui::Event::Screenshot`.
pub struct ScreenshotPrintHost {
    ctx: egui::Context,
}

impl ScreenshotPrintHost {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl PrintHost for ScreenshotPrintHost {
    fn request_print(&self) -> PageResult<()> {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
        Ok(())
    }
}
