//! # mdpages-core
//!
//! Core library for the mdpages converter.
//!
//! This crate turns markdown documents into page bodies and derives, for each
//! document, a navigation outline anchored to its section headings.

pub mod builder;
pub mod config;
pub mod markdown;
pub mod models;
pub mod outline;
pub mod slug;

pub use builder::{BuildError, SiteBuilder};
pub use config::{AssetSource, Config, ConfigError, Settings};
pub use markdown::{MarkdownProcessor, RenderedDocument};
pub use models::{Page, SiteIndex};
pub use outline::{Heading, Outline, OutlineBuilder, OutlineNode};
pub use slug::{slugify, Slugger};
