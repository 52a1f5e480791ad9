//! Interactive state for the portfolio page: theme preference, skills reveal
//! latch, clipboard and print actions. Host capabilities are injected through
//! the traits re-exported here.

pub mod animation;
pub mod clipboard;
pub mod page;
pub mod print;
pub mod theme;
pub mod visibility;

pub use clipboard::{
    ClipboardOutcome, ClipboardRequest, ClipboardService, ClipboardWriter, MemoryClipboard,
};
pub use page::{PageController, PageHost};
pub use print::{PrintHost, PrintTrigger};
pub use theme::{PersistenceMode, StyleScope, ThemeController};
pub use visibility::{visible_fraction, Bounds, LayoutHost, Subscription, SubscriptionState};

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
