//! DDS container header synthesis and serialization.
//!
//! The header layout is the classic 128-byte DirectDraw Surface header:
//! magic, size/flags, dimensions, pitch-or-linear-size, mipmap count, a
//! nested 32-byte pixel-format block, and capability flags, all integers
//! little-endian. Unused fields stay zero.

use anyhow::{bail, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Read;
use thiserror::Error;

use crate::formats::FormatDescriptor;
use crate::texture::Texture2D;

/// "DDS " magic preceding the header
pub const DDS_MAGIC: u32 = u32::from_le_bytes(*b"DDS ");

/// Serialized size of the magic plus header, in bytes
pub const HEADER_SIZE: usize = 128;

// dwFlags
pub const DDSD_CAPS: u32 = 0x1;
pub const DDSD_HEIGHT: u32 = 0x2;
pub const DDSD_WIDTH: u32 = 0x4;
pub const DDSD_PIXELFORMAT: u32 = 0x1000;
pub const DDSD_MIPMAPCOUNT: u32 = 0x20000;
pub const DDSD_LINEARSIZE: u32 = 0x80000;
pub const DDS_HEADER_FLAGS_TEXTURE: u32 = DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT;

// ddspf.dwFlags
pub const DDPF_ALPHAPIXELS: u32 = 0x1;
pub const DDPF_ALPHA: u32 = 0x2;
pub const DDPF_FOURCC: u32 = 0x4;
pub const DDPF_RGB: u32 = 0x40;
pub const DDPF_RGBA: u32 = DDPF_RGB | DDPF_ALPHAPIXELS;

// dwCaps
pub const DDSCAPS_COMPLEX: u32 = 0x8;
pub const DDSCAPS_TEXTURE: u32 = 0x1000;
pub const DDSCAPS_MIPMAP: u32 = 0x400000;
pub const DDS_SURFACE_FLAGS_MIPMAP: u32 = DDSCAPS_COMPLEX | DDSCAPS_MIPMAP;

// Block-compression fourCC tags
pub const FOURCC_DXT1: u32 = u32::from_le_bytes(*b"DXT1");
pub const FOURCC_DXT5: u32 = u32::from_le_bytes(*b"DXT5");

/// Number of mip levels for a texture of the given dimensions, counting
/// the base image: halve the larger dimension until it reaches 1.
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    let mut count = 1;
    let mut dim = width.max(height);
    while dim > 1 {
        dim /= 2;
        count += 1;
    }
    count
}

/// Raised when a resolved format has no DDS rendition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("format {format} cannot be described by a DDS header")]
pub struct UnsupportedFormat {
    pub format: String,
}

/// Nested pixel-format block of a DDS header (32 bytes serialized)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsPixelFormat {
    pub size: u32,
    pub flags: u32,
    pub four_cc: u32,
    pub rgb_bit_count: u32,
    pub r_bit_mask: u32,
    pub g_bit_mask: u32,
    pub b_bit_mask: u32,
    pub a_bit_mask: u32,
}

impl Default for DdsPixelFormat {
    fn default() -> Self {
        Self {
            size: 32,
            flags: 0,
            four_cc: 0,
            rgb_bit_count: 0,
            r_bit_mask: 0,
            g_bit_mask: 0,
            b_bit_mask: 0,
            a_bit_mask: 0,
        }
    }
}

/// 128-byte DDS header, constructed fresh per extraction call and
/// serialized once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsHeader {
    pub size: u32,
    pub flags: u32,
    pub height: u32,
    pub width: u32,
    pub pitch_or_linear_size: u32,
    pub depth: u32,
    pub mip_map_count: u32,
    pub pixel_format: DdsPixelFormat,
    pub caps: u32,
    pub caps2: u32,
    pub caps3: u32,
    pub caps4: u32,
}

impl Default for DdsHeader {
    fn default() -> Self {
        Self {
            size: 124,
            flags: DDS_HEADER_FLAGS_TEXTURE,
            height: 0,
            width: 0,
            pitch_or_linear_size: 0,
            depth: 0,
            mip_map_count: 0,
            pixel_format: DdsPixelFormat::default(),
            caps: DDSCAPS_TEXTURE,
            caps2: 0,
            caps3: 0,
            caps4: 0,
        }
    }
}

impl DdsHeader {
    /// Build a header describing the payload layout of a texture record.
    ///
    /// Mobile-compressed descriptors are routed to their own builders by
    /// the dispatcher and must never reach this one; a descriptor this
    /// builder cannot express is reported as [`UnsupportedFormat`].
    pub fn for_texture(
        texture: &Texture2D,
        descriptor: FormatDescriptor,
    ) -> Result<Self, UnsupportedFormat> {
        let mut header = DdsHeader {
            width: texture.width,
            height: texture.height,
            ..Default::default()
        };

        match descriptor {
            FormatDescriptor::Uncompressed {
                red_mask,
                green_mask,
                blue_mask,
                alpha_mask,
                bits_per_pixel,
                has_alpha,
            } => {
                let pf = &mut header.pixel_format;
                pf.flags = if (red_mask | green_mask | blue_mask) == 0 {
                    DDPF_ALPHA
                } else if has_alpha {
                    DDPF_RGBA
                } else {
                    DDPF_RGB
                };
                pf.r_bit_mask = red_mask;
                pf.g_bit_mask = green_mask;
                pf.b_bit_mask = blue_mask;
                pf.a_bit_mask = alpha_mask;
                pf.rgb_bit_count = bits_per_pixel;
            }
            FormatDescriptor::BlockCompressed { four_cc, .. } => {
                header.pixel_format.flags = DDPF_FOURCC;
                header.pixel_format.four_cc = four_cc;
            }
            FormatDescriptor::MobileCompressed(family) => {
                return Err(UnsupportedFormat {
                    format: family.to_string(),
                });
            }
        }

        if texture.mip_map {
            header.flags |= DDSD_MIPMAPCOUNT;
            header.caps |= DDS_SURFACE_FLAGS_MIPMAP;
            header.mip_map_count = mip_level_count(header.width, header.height);
        }

        header.flags |= DDSD_LINEARSIZE;
        header.pitch_or_linear_size = match descriptor {
            FormatDescriptor::BlockCompressed { bits_per_pixel, .. } => {
                let linear_size = header.width * header.height;
                // 4-bpp block formats pack two pixels per byte
                if bits_per_pixel == 4 {
                    linear_size / 2
                } else {
                    linear_size
                }
            }
            _ => texture.width * texture.height * header.pixel_format.rgb_bit_count / 8,
        };

        Ok(header)
    }

    /// Serialize into exactly [`HEADER_SIZE`] little-endian bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_SIZE);

        buf.extend_from_slice(&DDS_MAGIC.to_le_bytes());
        buf.extend_from_slice(&self.size.to_le_bytes());
        buf.extend_from_slice(&self.flags.to_le_bytes());
        buf.extend_from_slice(&self.height.to_le_bytes());
        buf.extend_from_slice(&self.width.to_le_bytes());
        buf.extend_from_slice(&self.pitch_or_linear_size.to_le_bytes());
        buf.extend_from_slice(&self.depth.to_le_bytes());
        buf.extend_from_slice(&self.mip_map_count.to_le_bytes());
        // dwReserved1[11]
        buf.extend_from_slice(&[0u8; 44]);

        let pf = &self.pixel_format;
        buf.extend_from_slice(&pf.size.to_le_bytes());
        buf.extend_from_slice(&pf.flags.to_le_bytes());
        buf.extend_from_slice(&pf.four_cc.to_le_bytes());
        buf.extend_from_slice(&pf.rgb_bit_count.to_le_bytes());
        buf.extend_from_slice(&pf.r_bit_mask.to_le_bytes());
        buf.extend_from_slice(&pf.g_bit_mask.to_le_bytes());
        buf.extend_from_slice(&pf.b_bit_mask.to_le_bytes());
        buf.extend_from_slice(&pf.a_bit_mask.to_le_bytes());

        buf.extend_from_slice(&self.caps.to_le_bytes());
        buf.extend_from_slice(&self.caps2.to_le_bytes());
        buf.extend_from_slice(&self.caps3.to_le_bytes());
        buf.extend_from_slice(&self.caps4.to_le_bytes());
        // dwReserved2
        buf.extend_from_slice(&0u32.to_le_bytes());

        debug_assert_eq!(buf.len(), HEADER_SIZE);
        buf
    }

    /// Decode a serialized header, for downstream tooling and round-trip
    /// verification
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let magic = reader.read_u32::<LittleEndian>()?;
        if magic != DDS_MAGIC {
            bail!("Missing DDS magic (got {:#010x})", magic);
        }

        let size = reader.read_u32::<LittleEndian>()?;
        if size != 124 {
            bail!("Unexpected DDS header size: {}", size);
        }

        let flags = reader.read_u32::<LittleEndian>()?;
        let height = reader.read_u32::<LittleEndian>()?;
        let width = reader.read_u32::<LittleEndian>()?;
        let pitch_or_linear_size = reader.read_u32::<LittleEndian>()?;
        let depth = reader.read_u32::<LittleEndian>()?;
        let mip_map_count = reader.read_u32::<LittleEndian>()?;

        let mut reserved1 = [0u8; 44];
        reader.read_exact(&mut reserved1)?;

        let pixel_format = DdsPixelFormat {
            size: reader.read_u32::<LittleEndian>()?,
            flags: reader.read_u32::<LittleEndian>()?,
            four_cc: reader.read_u32::<LittleEndian>()?,
            rgb_bit_count: reader.read_u32::<LittleEndian>()?,
            r_bit_mask: reader.read_u32::<LittleEndian>()?,
            g_bit_mask: reader.read_u32::<LittleEndian>()?,
            b_bit_mask: reader.read_u32::<LittleEndian>()?,
            a_bit_mask: reader.read_u32::<LittleEndian>()?,
        };

        let caps = reader.read_u32::<LittleEndian>()?;
        let caps2 = reader.read_u32::<LittleEndian>()?;
        let caps3 = reader.read_u32::<LittleEndian>()?;
        let caps4 = reader.read_u32::<LittleEndian>()?;
        let _reserved2 = reader.read_u32::<LittleEndian>()?;

        Ok(Self {
            size,
            flags,
            height,
            width,
            pitch_or_linear_size,
            depth,
            mip_map_count,
            pixel_format,
            caps,
            caps2,
            caps3,
            caps4,
        })
    }
}

/// Concatenate a serialized header with the unmodified payload bytes.
/// The result is always exactly `HEADER_SIZE + payload.len()` bytes; no
/// checksum, no padding, no compression.
pub fn package(header: &DdsHeader, payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len());
    buf.extend_from_slice(&header.to_bytes());
    buf.extend_from_slice(payload);
    buf
}
