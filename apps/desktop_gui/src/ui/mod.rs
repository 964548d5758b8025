//! UI layer: app shell, sidebar, theme palette, and page bodies.

pub mod app;
pub mod pages;
pub mod theme;

pub use app::AdminConsoleApp;
