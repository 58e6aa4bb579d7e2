//! # mb-platform
//!
//! Platform-specific implementations for Motorbook.
//!
//! Native and web targets collect dates and files differently. Each gets its
//! own adapter here; the composition root picks one set through
//! [`capability::PlatformCapabilities`].

pub mod app_dirs;
pub mod capability;
pub mod date_input;
pub mod file_picker;

pub use capability::PlatformCapabilities;
