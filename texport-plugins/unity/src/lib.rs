//! Unity Texture2D repackaging for Texport.
//!
//! Takes a decoded `Texture2D` record (dimensions, format code, mipmap flag,
//! raw payload) and repackages its payload into a standard DDS container
//! that external viewers and toolchains can open directly. Pixel data is
//! treated as opaque bytes throughout: nothing here decompresses or
//! re-encodes texture content, it only synthesizes a byte-exact header
//! describing the payload's layout.
//!
//! The pipeline is a pure function per record: resolve the format code into
//! a [`FormatDescriptor`], dispatch on the descriptor family, build and
//! serialize the container header, and hand header + payload to an output
//! sink. Records are independent, so callers may parallelize extraction
//! calls without coordination.

pub mod dds;
pub mod extract;
pub mod formats;
pub mod texture;


// Re-export the per-record extraction entry points
pub use dds::{mip_level_count, DdsHeader, DdsPixelFormat};
pub use extract::{extract_texture, extract_to_sink, DDS_EXTENSION};
pub use formats::{FormatDescriptor, MobileFamily, TextureFormat};
pub use texture::{ColorSpace, Texture2D};
