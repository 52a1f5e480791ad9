use std::sync::Arc;

use shared::error::PageResult;
use tracing::{debug, warn};

/// Host side of the native print/export flow.
pub trait PrintHost: Send + Sync {
    fn request_print(&self) -> PageResult<()>;
}

#[derive(Clone)]
pub struct PrintTrigger {
    host: Arc<dyn PrintHost>,
}

impl PrintTrigger {
    pub fn new(host: Arc<dyn PrintHost>) -> Self {
        Self { host }
    }

    /// Fire-and-forget; host failures are logged, never returned.
    pub fn invoke(&self) {
        match self.host.request_print() {
            Ok(()) => debug!("print requested"),
            Err(err) => warn!(code = ?err.code(), error = %err, "print request failed"),
        }
    }
}
