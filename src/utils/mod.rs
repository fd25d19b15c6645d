//! Shared helpers for the content pipeline.

pub mod date;
pub mod log;
pub mod meta;
pub mod slug;
