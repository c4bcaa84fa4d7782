//! # MeatyCapture
//!
//! Local-first capture configuration: global settings, a project registry,
//! and field-option catalogs persisted as JSON files under a store root
//! (default `~/.meatycapture`). Usable both as a CLI binary and as a library.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! meatycapture = { version = "0.1", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use meatycapture::store::{ProjectStore, create_adapters};
//!
//! let adapters = create_adapters(std::path::Path::new("/tmp/capture"))?;
//! for project in adapters.projects.list()? {
//!     println!("{} ({})", project.name, project.id);
//! }
//! ```
//!
//! The store layer holds no in-process locks: every mutation is a
//! read-modify-write protected only by atomic file replacement. Two racing
//! invocations on the same file each see a consistent snapshot and the last
//! writer wins.
//!
//! ## Feature Flags
//!
//! - `cli` (default): Includes CLI module. Disable with `default-features = false`.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod store;
pub mod types;
