//! # Vermilion Engine Input
//!
//! Platform-agnostic keyboard input types for Vermilion Engine.
//!
//! The [`keyboard`] module defines the [`Key`](keyboard::Key) identifiers
//! and their canonical display names. Key codes follow the Windows
//! virtual-key numbering, so raw codes supplied by external input sources
//! can be resolved directly with [`keyboard::key_name`]. Platform layers
//! (e.g. winit) map their native key codes onto [`Key`](keyboard::Key)
//! values.

pub mod keyboard;

/// Input library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
