//! Play catalog domain module.
//!
//! Reference data only: genres, plays, and the read-only lookup through which
//! the rest of the system resolves a performance's play.

pub mod catalog;
pub mod genre;
pub mod play;

pub use catalog::{PlayCatalog, PlayLookup};
pub use genre::Genre;
pub use play::Play;
