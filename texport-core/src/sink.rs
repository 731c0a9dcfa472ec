use crate::outcome::ExtractedAsset;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Destination for repackaged assets.
///
/// The extraction pipeline calls `emit` exactly once per successfully
/// extracted item; skipped and failed items never reach the sink.
pub trait OutputSink {
    fn emit(&mut self, asset: &ExtractedAsset, id: i64) -> Result<()>;
}

/// Writes each asset as an individual file under a base directory.
///
/// Asset names come from the source container and may contain arbitrary
/// bytes, so they are sanitized before being used as file stems. When an
/// asset carries sidecar metadata it is written next to the asset as
/// `<stem>.<ext>.json`.
pub struct DirectorySink {
    base_dir: PathBuf,
}

impl DirectorySink {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Reduce an asset name to a safe file stem, falling back to the
    /// object id when nothing usable remains
    fn sanitize_stem(name: &str, id: i64) -> String {
        let stem: String = name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        if stem.trim_matches(&['_', '.'][..]).is_empty() {
            format!("asset_{}", id)
        } else {
            stem
        }
    }
}

impl OutputSink for DirectorySink {
    fn emit(&mut self, asset: &ExtractedAsset, id: i64) -> Result<()> {
        fs::create_dir_all(&self.base_dir).with_context(|| {
            format!("Failed to create output directory {}", self.base_dir.display())
        })?;

        let stem = Self::sanitize_stem(&asset.name, id);
        let path = self.base_dir.join(format!("{}.{}", stem, asset.extension));
        fs::write(&path, &asset.data)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        if let Some(sidecar) = &asset.sidecar {
            let sidecar_path = self
                .base_dir
                .join(format!("{}.{}.json", stem, asset.extension));
            fs::write(&sidecar_path, sidecar)
                .with_context(|| format!("Failed to write {}", sidecar_path.display()))?;
        }

        info!("Wrote {} ({} bytes)", path.display(), asset.data.len());

        Ok(())
    }
}
