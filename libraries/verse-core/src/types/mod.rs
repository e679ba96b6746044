//! Domain types for Verse Player

mod catalog;
mod track;

pub use catalog::Catalog;
pub use track::Track;
