//! lj2hugo - LiveJournal to Hugo post converter
//!
//! Converts XML entry exports (as produced by ljdump) and their
//! companion comment files into markdown posts with TOML front matter
//! for the Hugo static site generator.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::Lj2HugoError;
