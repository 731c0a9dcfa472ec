//! Per-record extraction dispatch.
//!
//! Each call takes one decoded [`Texture2D`] and ends in exactly one of
//! three terminal outcomes: `Extracted` with the finished container bytes,
//! `Skipped` for expected no-ops (empty payload, unknown or unsupported
//! format), or `Failed` for the named mobile-format capability gap.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, warn};

use texport_core::outcome::{ExtractOutcome, ExtractedAsset, FailReason, SkipReason};
use texport_core::sink::OutputSink;

use crate::dds::{self, mip_level_count, DdsHeader};
use crate::formats::{FormatDescriptor, TextureFormat};
use crate::texture::Texture2D;

/// Output extension for the generic container family
pub const DDS_EXTENSION: &str = "dds";

/// Sidecar metadata written next to each repackaged texture
#[derive(Debug, Serialize)]
struct TextureSidecar<'a> {
    source_name: &'a str,
    source_format: String,
    container: &'static str,
    width: u32,
    height: u32,
    mip_levels: u32,
    payload_bytes: usize,
    extraction_time: String,
}

/// Repackage one texture record into a standard container.
///
/// Pure function: the record is borrowed immutably and no state survives
/// the call, so records may be processed concurrently by an external
/// scheduler without coordination.
pub fn extract_texture(texture: &Texture2D) -> ExtractOutcome {
    // some textures don't have any image data, not sure why
    if texture.image_data.is_empty() {
        return ExtractOutcome::Skipped(SkipReason::EmptyPayload);
    }

    let format = match TextureFormat::from_code(texture.format_code) {
        Some(format) => format,
        None => {
            return ExtractOutcome::Skipped(SkipReason::UnknownFormat {
                code: texture.format_code,
            })
        }
    };

    match format.descriptor() {
        FormatDescriptor::MobileCompressed(family) => {
            // Deliberate hard failure: a named capability gap, not
            // unexpected input
            ExtractOutcome::Failed(FailReason::NotImplemented {
                family: family.to_string(),
            })
        }
        descriptor => extract_dds(texture, format, descriptor),
    }
}

/// Build and serialize the generic (DDS) container for a resolved format
fn extract_dds(
    texture: &Texture2D,
    format: TextureFormat,
    descriptor: FormatDescriptor,
) -> ExtractOutcome {
    let header = match DdsHeader::for_texture(texture, descriptor) {
        Ok(header) => header,
        Err(err) => {
            return ExtractOutcome::Skipped(SkipReason::UnsupportedFormat { format: err.format })
        }
    };

    debug!(
        "Packaging texture '{}' ({:?}, {}x{}) as DDS",
        texture.name, format, texture.width, texture.height
    );

    let data = dds::package(&header, &texture.image_data);
    let sidecar = sidecar_json(texture, format, &header);

    ExtractOutcome::Extracted(ExtractedAsset {
        name: texture.name.clone(),
        extension: DDS_EXTENSION.to_string(),
        data,
        sidecar,
    })
}

fn sidecar_json(texture: &Texture2D, format: TextureFormat, header: &DdsHeader) -> Option<String> {
    let sidecar = TextureSidecar {
        source_name: &texture.name,
        source_format: format!("{:?}", format),
        container: "DDS",
        width: header.width,
        height: header.height,
        mip_levels: if texture.mip_map {
            mip_level_count(texture.width, texture.height)
        } else {
            1
        },
        payload_bytes: texture.image_data.len(),
        extraction_time: chrono::Utc::now().to_rfc3339(),
    };

    match serde_json::to_string_pretty(&sidecar) {
        Ok(json) => Some(json),
        Err(e) => {
            warn!("Failed to serialize sidecar for '{}': {}", texture.name, e);
            None
        }
    }
}

/// Run one extraction call and emit the result to a sink.
///
/// Skips and failures are logged as warnings and never reach the sink;
/// the outcome is returned either way so batch drivers can account for
/// every item.
pub fn extract_to_sink(
    texture: &Texture2D,
    id: i64,
    sink: &mut dyn OutputSink,
) -> Result<ExtractOutcome> {
    let outcome = extract_texture(texture);

    match &outcome {
        ExtractOutcome::Extracted(asset) => {
            sink.emit(asset, id)?;
        }
        ExtractOutcome::Skipped(reason) => {
            warn!("Skipping texture '{}': {}", texture.name, reason);
        }
        ExtractOutcome::Failed(reason) => {
            warn!("Cannot extract texture '{}': {}", texture.name, reason);
        }
    }

    Ok(outcome)
}
