//! # Core Module
//!
//! Shared containers used across the crate.
//!
//! ## Key Components
//! - `MtResource`: Thread-safe reference-counted resource with read-write locking,
//!   used to publish whole mesh buffer sets from the generating thread to readers.

/// Shared `Arc<RwLock<T>>` container.
pub mod mt_resource;

pub use mt_resource::MtResource;
