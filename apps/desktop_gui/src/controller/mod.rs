//! Controller layer: UI events, page actions, and command orchestration.

pub mod events;
pub mod orchestration;
