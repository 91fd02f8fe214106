//! macOS support.
//!
//! Everything but feature probes is shared with the other
//! Unixes.

#![cfg(target_os = "macos")]

#[allow(clippy::wildcard_imports)]
pub use super::unix::*;

/// Whether this is a macOS build.
pub const HAS_OSX_SUPPORT: bool = true;
