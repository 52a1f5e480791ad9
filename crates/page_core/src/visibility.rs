//! One-shot viewport intersection latch.
//!
//! The host measures how much of a region is on screen and reports the
//! ratio; a [`Subscription`] turns those reports into a single reveal.

use shared::content::ResumeContent;
use shared::domain::RegionId;
use shared::error::PageError;
use tracing::{debug, info};

/// Layout side of the host: which regions are currently on the page.
pub trait LayoutHost {
    fn has_region(&self, region: &RegionId) -> bool;
}

impl LayoutHost for ResumeContent {
    fn has_region(&self, region: &RegionId) -> bool {
        ResumeContent::has_region(self, region)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn from_min_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn area(&self) -> f32 {
        (self.max_x - self.min_x).max(0.0) * (self.max_y - self.min_y).max(0.0)
    }

    pub fn intersect(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            self.min_x.max(other.min_x),
            self.min_y.max(other.min_y),
            self.max_x.min(other.max_x),
            self.max_y.min(other.max_y),
        )
    }
}

/// Fraction of `region` inside `viewport`, in `0.0..=1.0`.
pub fn visible_fraction(region: Bounds, viewport: Bounds) -> f32 {
    let total = region.area();
    if total <= 0.0 {
        return 0.0;
    }
    (region.intersect(&viewport).area() / total).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionState {
    /// Target was missing at watch time; never fires.
    Inert,
    Watching,
    Fired,
    Disposed,
}

#[derive(Debug)]
pub struct Subscription {
    region: RegionId,
    threshold: f32,
    state: SubscriptionState,
}

/// Starts observing `region`. A region missing from the layout yields an
/// inert subscription rather than an error.
pub fn watch(layout: &dyn LayoutHost, region: RegionId, threshold: f32) -> Subscription {
    let threshold = if threshold.is_nan() {
        1.0
    } else {
        threshold.clamp(0.0, 1.0)
    };
    let state = if layout.has_region(&region) {
        debug!(region = %region, threshold, "watching region");
        SubscriptionState::Watching
    } else {
        let err = PageError::ObservationTargetMissing(region.to_string());
        debug!(error = %err, "reveal disabled");
        SubscriptionState::Inert
    };

    Subscription {
        region,
        threshold,
        state,
    }
}

impl Subscription {
    pub fn state(&self) -> SubscriptionState {
        self.state
    }

    pub fn is_watching(&self) -> bool {
        self.state == SubscriptionState::Watching
    }

    /// Feeds one intersection measurement. Returns `true` exactly once: on
    /// the first report for this region at or above the threshold.
    pub fn report(&mut self, region: &RegionId, ratio: f32) -> bool {
        if !self.is_watching() || region != &self.region {
            return false;
        }

        let ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        if ratio < self.threshold {
            return false;
        }

        info!(region = %self.region, ratio, "region crossed visibility threshold");
        self.state = SubscriptionState::Fired;
        true
    }

    /// Stops observation. Safe to repeat and safe before the region was seen.
    pub fn dispose(&mut self) {
        if self.state == SubscriptionState::Disposed {
            return;
        }
        debug!(region = %self.region, from = ?self.state, "subscription disposed");
        self.state = SubscriptionState::Disposed;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
#[path = "tests/visibility_tests.rs"]
mod tests;
