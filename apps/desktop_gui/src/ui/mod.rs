//! UI layer for the desktop page: app shell, section renderers and palettes.

pub mod app;
pub mod sections;
pub mod theme;

pub use app::PortfolioApp;
