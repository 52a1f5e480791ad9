use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use shared::domain::RegionId;
use shared::error::{PageError, PageResult};
use storage::PreferenceStore;

use crate::print::PrintHost;
use crate::theme::StyleScope;
use crate::visibility::LayoutHost;

/// Style scope that records every `set_dark` call.
#[derive(Clone, Default)]
pub struct RecordingScope {
    calls: Arc<Mutex<Vec<bool>>>,
}

impl RecordingScope {
    pub fn calls(&self) -> Vec<bool> {
        self.calls.lock().expect("scope lock").clone()
    }

    pub fn is_dark(&self) -> Option<bool> {
        self.calls().last().copied()
    }
}

impl StyleScope for RecordingScope {
    fn set_dark(&mut self, dark: bool) {
        self.calls.lock().expect("scope lock").push(dark);
    }
}

/// Store that fails reads, writes, or both.
pub struct BrokenStore {
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub write_attempts: Arc<AtomicUsize>,
}

impl BrokenStore {
    pub fn unavailable() -> Self {
        Self {
            fail_reads: true,
            fail_writes: true,
            write_attempts: Arc::default(),
        }
    }

    pub fn read_only() -> Self {
        Self {
            fail_reads: false,
            fail_writes: true,
            write_attempts: Arc::default(),
        }
    }
}

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> PageResult<Option<String>> {
        if self.fail_reads {
            Err(PageError::persistence("storage disabled"))
        } else {
            Ok(None)
        }
    }

    fn set(&mut self, _key: &str, _value: &str) -> PageResult<()> {
        self.write_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            Err(PageError::persistence("quota exceeded"))
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
pub struct CountingPrinter {
    pub calls: AtomicUsize,
}

impl PrintHost for CountingPrinter {
    fn request_print(&self) -> PageResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub struct FixedLayout(pub Vec<RegionId>);

impl FixedLayout {
    pub fn with_skills() -> Self {
        Self(vec![RegionId::skills()])
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }
}

impl LayoutHost for FixedLayout {
    fn has_region(&self, region: &RegionId) -> bool {
        self.0.contains(region)
    }
}
