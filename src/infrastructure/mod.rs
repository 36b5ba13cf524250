//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where configuration and trace output live on the host platform.

pub mod paths;

pub use paths::{config_file, data_dir, expand_tilde};
