//! # mdpages-render
//!
//! Page rendering for mdpages.
//!
//! This crate turns outlines into navigation markup and fills the Askama
//! page and index templates.

pub mod assets;
pub mod outline;
pub mod templates;

pub use assets::AssetLinks;
pub use outline::render_outline;
pub use templates::{IndexEntry, IndexTemplate, PageTemplate};
