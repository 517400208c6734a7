//! Side-scrolling arcade shooter.
//!
//! The library is the simulation core: plain data in `entities`, pure
//! per-frame functions in `compute`, and the small helpers they lean on.
//! Terminal I/O lives in the binary.

pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod input;
pub mod scheduler;
pub mod spawner;

pub use config::GameConfig;
pub use error::ConfigError;
