//! # Texport Core
//!
//! Engine-agnostic plumbing for repackaging textures embedded in game-engine
//! asset files into standard image containers.
//!
//! This crate provides the pieces shared by every engine plugin:
//!
//! - **Outcome taxonomy**: every extraction call ends in exactly one of
//!   `Extracted`, `Skipped`, or `Failed`, so batch drivers can tell expected
//!   no-ops apart from named capability gaps
//! - **Output sinks**: the `OutputSink` trait decouples container synthesis
//!   from where the bytes end up; `DirectorySink` writes plain files
//!
//! The actual format resolution and container-header synthesis live in the
//! per-engine plugin crates (e.g. `texport-unity-plugin`).

pub mod outcome;
pub mod sink;

// Re-export commonly used types
pub use outcome::{ExtractOutcome, ExtractedAsset, FailReason, SkipReason};
pub use sink::{DirectorySink, OutputSink};

use anyhow::Result;
use tracing::info;

/// Version information for the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the Texport library with structured logging
pub fn init() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("texport_core=info,texport_unity_plugin=info")
        .with_target(false)
        .try_init();

    info!("Initializing Texport Core v{}", VERSION);

    Ok(())
}
