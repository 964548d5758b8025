//! Controller layer: UI events, navigation state, responsive layout, and
//! command orchestration.

pub mod events;
pub mod layout;
pub mod navigation;
pub mod orchestration;
