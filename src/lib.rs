//! # carbon-batch
//!
//! Batch front-end for the `carbon-now` code-screenshot CLI.
//!
//! Splits a phrases file into delimiter-separated snippets and invokes the
//! external renderer once per snippet, collecting the styled images in a
//! freshly recreated output directory.
//!
//! ## Quick Start
//!
//! ```no_run
//! use carbon_batch::{Config, Pipeline};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::builder()
//!     .phrases_file("phrases.txt")
//!     .default_settings_file("default-settings.json")
//!     .output_dir("out")
//!     .build()?;
//!
//! let stats = Pipeline::new(config)?.run()?;
//! stats.print_summary();
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The library is a single sequential pipeline:
//! 1. **Settings**: merges user overrides into the default settings object
//! 2. **Splitter**: breaks the phrases file on a literal delimiter
//! 3. **Renderer**: shells out to the external tool per chunk, aborting the
//!    whole run on the first failure

#![warn(
    missing_docs,
    rust_2018_idioms,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]

mod config;
mod error;
mod filename;
mod pipeline;
mod render;
mod settings;
mod splitter;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use filename::{stem_from_chunk, FALLBACK_STEM};
pub use pipeline::{Pipeline, RunStats};
pub use render::{Launcher, Renderer};
pub use settings::Settings;
pub use splitter::{Chunk, SplitReport, Splitter};

/// Runs the complete batch pipeline with the given configuration.
///
/// This is the main entry point for the library.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration is invalid
/// - A required input file is missing or malformed
/// - The output directory cannot be recreated
/// - Any renderer invocation exits with a non-zero status
pub fn run(config: Config) -> Result<RunStats> {
    Pipeline::new(config)?.run()
}
