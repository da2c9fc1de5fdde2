//! Configuration loading for the Overtime Engine.
//!
//! The daily threshold, weekly double-overtime cap and pay multipliers live
//! in YAML so they can change without a rebuild. [`OvertimePolicy::default`]
//! carries the standard values when no configuration directory is used.
//!
//! # Example
//!
//! ```no_run
//! use overtime_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded policy: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{OvertimePolicy, PolicyConfig, PolicyMetadata};
