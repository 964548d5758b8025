//! Bridge between the UI thread and the HTTP worker thread.

pub mod commands;
pub mod runtime;
