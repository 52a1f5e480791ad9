//! Composition root for the page's interactive state.
//!
//! Owns `{theme_preference, skills_revealed}`. Every transition happens on
//! the caller's thread in response to one discrete event.

use std::sync::Arc;
use std::time::{Duration, Instant};

use shared::domain::{Notice, RegionId, ThemePreference, SKILLS_REVEAL_THRESHOLD};
use storage::PreferenceStore;
use tracing::info;

use crate::clipboard::{ClipboardRequest, ClipboardService, ClipboardWriter};
use crate::print::{PrintHost, PrintTrigger};
use crate::theme::{PersistenceMode, StyleScope, ThemeController};
use crate::visibility::{self, LayoutHost, Subscription};

/// Host collaborators injected into the controller.
pub struct PageHost {
    pub store: Box<dyn PreferenceStore>,
    pub style: Box<dyn StyleScope>,
    pub clipboard: Arc<dyn ClipboardWriter>,
    pub printer: Arc<dyn PrintHost>,
}

pub struct PageController {
    theme: ThemeController,
    theme_preference: ThemePreference,
    skills_revealed: bool,
    revealed_at: Option<Instant>,
    skills_region: RegionId,
    skills_subscription: Option<Subscription>,
    clipboard: ClipboardService,
    printer: PrintTrigger,
    page_url: String,
}

impl PageController {
    pub fn new(host: PageHost, page_url: impl Into<String>) -> Self {
        let mut theme = ThemeController::new(host.store, host.style);
        let theme_preference = theme.initialize();
        theme.apply(theme_preference);
        info!(theme = %theme_preference, "page initialized");

        Self {
            theme,
            theme_preference,
            skills_revealed: false,
            revealed_at: None,
            skills_region: RegionId::skills(),
            skills_subscription: None,
            clipboard: ClipboardService::new(host.clipboard),
            printer: PrintTrigger::new(host.printer),
            page_url: page_url.into(),
        }
    }

    pub fn theme_preference(&self) -> ThemePreference {
        self.theme_preference
    }

    pub fn persistence_mode(&self) -> PersistenceMode {
        self.theme.persistence_mode()
    }

    pub fn skills_revealed(&self) -> bool {
        self.skills_revealed
    }

    pub fn since_reveal(&self) -> Option<Duration> {
        self.revealed_at.map(|at| at.elapsed())
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    pub fn skills_region(&self) -> &RegionId {
        &self.skills_region
    }

    /// Theme toggle: flip, then apply before the next event is handled.
    pub fn toggle_theme(&mut self) -> ThemePreference {
        self.theme_preference = ThemeController::toggle(self.theme_preference);
        self.theme.apply(self.theme_preference);
        info!(theme = %self.theme_preference, "theme toggled");
        self.theme_preference
    }

    /// Acquires the skills subscription. Remounting releases the previous one.
    pub fn mount(&mut self, layout: &dyn LayoutHost) {
        if let Some(mut previous) = self.skills_subscription.take() {
            previous.dispose();
        }
        if self.skills_revealed {
            return;
        }
        self.skills_subscription = Some(visibility::watch(
            layout,
            self.skills_region.clone(),
            SKILLS_REVEAL_THRESHOLD,
        ));
    }

    /// Releases the skills subscription whether or not it fired.
    pub fn unmount(&mut self) {
        if let Some(mut subscription) = self.skills_subscription.take() {
            subscription.dispose();
        }
    }

    pub fn is_observing(&self) -> bool {
        self.skills_subscription
            .as_ref()
            .is_some_and(Subscription::is_watching)
    }

    /// Intersection report from the host. Returns `true` when this report
    /// set the reveal latch.
    pub fn report_visibility(&mut self, region: &RegionId, ratio: f32) -> bool {
        let fired = self
            .skills_subscription
            .as_mut()
            .is_some_and(|subscription| subscription.report(region, ratio));
        if !fired {
            return false;
        }

        if let Some(mut subscription) = self.skills_subscription.take() {
            subscription.dispose();
        }
        self.reveal_skills()
    }

    fn reveal_skills(&mut self) -> bool {
        if self.skills_revealed {
            return false;
        }
        self.skills_revealed = true;
        self.revealed_at = Some(Instant::now());
        info!("skills revealed");
        true
    }

    /// Copy-link request for the current page URL.
    pub fn copy_link_request(&self) -> ClipboardRequest {
        ClipboardRequest::new(self.page_url.clone())
    }

    pub fn clipboard_service(&self) -> ClipboardService {
        self.clipboard.clone()
    }

    /// Copies the page URL and returns the notice to show.
    pub async fn copy_link(&self) -> Notice {
        let request = self.copy_link_request();
        let outcome = self.clipboard.fulfil(&request).await;
        request.notice(outcome)
    }

    pub fn print(&self) {
        self.printer.invoke();
    }
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
