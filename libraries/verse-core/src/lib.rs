//! Verse Player Core
//!
//! Platform-agnostic domain types for Verse Player.
//!
//! This crate provides the foundational building blocks shared by the
//! playback engine and any presentation surface:
//! - **Domain Types**: [`Track`], [`Catalog`]
//! - **Error Handling**: [`CoreError`] and the crate [`Result`] alias
//! - **Display Helpers**: [`format_time`]
//!
//! # Example
//!
//! ```rust
//! use verse_core::{Catalog, Track};
//!
//! let catalog = Catalog::new(vec![
//!     Track::new("Midnight Drive", "The Wanderers", "audio/midnight.mp3", 214.0),
//!     Track::new("Glass Houses", "Nova Lane", "audio/glass.mp3", 187.0),
//! ])?;
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.get(0).map(|t| t.title.as_str()), Some("Midnight Drive"));
//! # Ok::<(), verse_core::CoreError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod display;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use display::format_time;
pub use error::{CoreError, Result};
pub use types::{Catalog, Track};
