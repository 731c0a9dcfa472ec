use thiserror::Error;

/// A successfully repackaged asset, ready to be handed to an output sink.
#[derive(Debug, Clone)]
pub struct ExtractedAsset {
    /// Name of the source object, used as the output file stem
    pub name: String,
    /// Output file extension without the leading dot (e.g. "dds")
    pub extension: String,
    /// Complete container bytes: header followed by the raw payload
    pub data: Vec<u8>,
    /// Optional sidecar metadata JSON written next to the asset
    pub sidecar: Option<String>,
}

impl ExtractedAsset {
    /// Output filename for this asset
    pub fn filename(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }
}

/// Non-fatal reasons for skipping an item.
///
/// Skips are expected input conditions: the pipeline logs a warning and
/// moves on to the next item. The three reasons stay distinct so callers
/// can tell them apart; downstream consumers must not assume equivalence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("texture has no image data")]
    EmptyPayload,

    #[error("unknown texture format code {code}")]
    UnknownFormat { code: i32 },

    #[error("texture format {format} is not supported by the target container")]
    UnsupportedFormat { format: String },
}

/// Fatal reasons for failing an item.
///
/// Distinct from [`SkipReason`]: a failure marks a known, named capability
/// gap rather than unexpected input, so tests can assert the gap is
/// intentional instead of silent data loss.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailReason {
    #[error("{family} container output is not yet implemented")]
    NotImplemented { family: String },
}

/// Terminal outcome of one extraction call.
///
/// The logic behind an extraction is pure and deterministic; there are no
/// retries because a retry would reproduce the same outcome.
#[derive(Debug, Clone)]
pub enum ExtractOutcome {
    /// A container was synthesized; the asset was (or should be) emitted
    Extracted(ExtractedAsset),
    /// The item was passed over for an expected reason; nothing was emitted
    Skipped(SkipReason),
    /// The item hit a named capability gap; nothing was emitted
    Failed(FailReason),
}

impl ExtractOutcome {
    pub fn is_extracted(&self) -> bool {
        matches!(self, Self::Extracted(_))
    }

    /// The extracted asset, if this outcome carries one
    pub fn asset(&self) -> Option<&ExtractedAsset> {
        match self {
            Self::Extracted(asset) => Some(asset),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_reasons_are_distinct() {
        let empty = SkipReason::EmptyPayload;
        let unknown = SkipReason::UnknownFormat { code: 99 };
        let unsupported = SkipReason::UnsupportedFormat {
            format: "R16".to_string(),
        };

        assert_ne!(empty, unknown);
        assert_ne!(unknown, unsupported);
        assert_ne!(empty, unsupported);
    }

    #[test]
    fn reasons_render_for_logging() {
        let reason = SkipReason::UnknownFormat { code: 42 };
        assert_eq!(reason.to_string(), "unknown texture format code 42");

        let fail = FailReason::NotImplemented {
            family: "PVR".to_string(),
        };
        assert!(fail.to_string().contains("PVR"));
        assert!(fail.to_string().contains("not yet implemented"));
    }

    #[test]
    fn outcome_accessors() {
        let asset = ExtractedAsset {
            name: "icon".to_string(),
            extension: "dds".to_string(),
            data: vec![0u8; 4],
            sidecar: None,
        };
        assert_eq!(asset.filename(), "icon.dds");

        let extracted = ExtractOutcome::Extracted(asset);
        assert!(extracted.is_extracted());
        assert!(extracted.asset().is_some());

        let skipped = ExtractOutcome::Skipped(SkipReason::EmptyPayload);
        assert!(!skipped.is_extracted());
        assert!(skipped.asset().is_none());
    }
}
