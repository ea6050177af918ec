//! Shared utilities for the domain layer.

mod format;

pub use format::format_xp;
