//! Infrastructure layer - File I/O and XML decoding

pub mod loader;

pub use loader::{companion_path, RecordLoader};
