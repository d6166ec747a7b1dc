//! CLI command implementations.

pub mod build;
pub mod init;

pub use build::{build_site, BuildArgs};
pub use init::init_project;
