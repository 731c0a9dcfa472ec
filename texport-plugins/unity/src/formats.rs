use std::fmt;

use crate::dds::{FOURCC_DXT1, FOURCC_DXT5};

/// Unity texture format codes as stored in the Texture2D record
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    Alpha8 = 1,
    ARGB4444 = 2,
    RGB24 = 3,
    RGBA32 = 4,
    ARGB32 = 5,
    RGB565 = 7,
    DXT1 = 10,
    DXT5 = 12,
    RGBA4444 = 13,
    BGRA32 = 14,
    PVRTC_RGB2 = 30,
    PVRTC_RGBA2 = 31,
    PVRTC_RGB4 = 32,
    PVRTC_RGBA4 = 33,
    ATC_RGB4 = 35,
    ATC_RGBA8 = 36,
}

impl TextureFormat {
    /// Resolve a raw format code. Codes outside the table yield `None`,
    /// which callers treat as "skip this item", not a pipeline error.
    pub fn from_code(value: i32) -> Option<Self> {
        match value {
            1 => Some(Self::Alpha8),
            2 => Some(Self::ARGB4444),
            3 => Some(Self::RGB24),
            4 => Some(Self::RGBA32),
            5 => Some(Self::ARGB32),
            7 => Some(Self::RGB565),
            10 => Some(Self::DXT1),
            12 => Some(Self::DXT5),
            13 => Some(Self::RGBA4444),
            14 => Some(Self::BGRA32),
            30 => Some(Self::PVRTC_RGB2),
            31 => Some(Self::PVRTC_RGBA2),
            32 => Some(Self::PVRTC_RGB4),
            33 => Some(Self::PVRTC_RGBA4),
            35 => Some(Self::ATC_RGB4),
            36 => Some(Self::ATC_RGBA8),
            _ => None,
        }
    }

    /// Static table mapping each format onto the container-header layout
    /// it serializes to. Entries are constants, never rebuilt at call time.
    pub fn descriptor(self) -> FormatDescriptor {
        match self {
            Self::Alpha8 => FormatDescriptor::Uncompressed {
                red_mask: 0,
                green_mask: 0,
                blue_mask: 0,
                alpha_mask: 0xff,
                bits_per_pixel: 8,
                has_alpha: true,
            },
            Self::RGB24 => FormatDescriptor::Uncompressed {
                red_mask: 0xff0000,
                green_mask: 0x00ff00,
                blue_mask: 0x0000ff,
                alpha_mask: 0,
                bits_per_pixel: 24,
                has_alpha: false,
            },
            Self::RGBA32 => FormatDescriptor::Uncompressed {
                red_mask: 0x000000ff,
                green_mask: 0x0000ff00,
                blue_mask: 0x00ff0000,
                alpha_mask: 0xff000000,
                bits_per_pixel: 32,
                has_alpha: true,
            },
            Self::BGRA32 => FormatDescriptor::Uncompressed {
                red_mask: 0x00ff0000,
                green_mask: 0x0000ff00,
                blue_mask: 0x000000ff,
                alpha_mask: 0xff000000,
                bits_per_pixel: 32,
                has_alpha: true,
            },
            Self::ARGB32 => FormatDescriptor::Uncompressed {
                red_mask: 0x0000ff00,
                green_mask: 0x00ff0000,
                blue_mask: 0xff000000,
                alpha_mask: 0x000000ff,
                bits_per_pixel: 32,
                has_alpha: true,
            },
            Self::ARGB4444 => FormatDescriptor::Uncompressed {
                red_mask: 0x0f00,
                green_mask: 0x00f0,
                blue_mask: 0x000f,
                alpha_mask: 0xf000,
                bits_per_pixel: 16,
                has_alpha: true,
            },
            Self::RGBA4444 => FormatDescriptor::Uncompressed {
                red_mask: 0xf000,
                green_mask: 0x0f00,
                blue_mask: 0x00f0,
                alpha_mask: 0x000f,
                bits_per_pixel: 16,
                has_alpha: true,
            },
            Self::RGB565 => FormatDescriptor::Uncompressed {
                red_mask: 0xf800,
                green_mask: 0x07e0,
                blue_mask: 0x001f,
                alpha_mask: 0,
                bits_per_pixel: 16,
                has_alpha: false,
            },
            Self::DXT1 => FormatDescriptor::BlockCompressed {
                four_cc: FOURCC_DXT1,
                bits_per_pixel: 4,
            },
            Self::DXT5 => FormatDescriptor::BlockCompressed {
                four_cc: FOURCC_DXT5,
                bits_per_pixel: 8,
            },
            Self::PVRTC_RGB2 | Self::PVRTC_RGBA2 | Self::PVRTC_RGB4 | Self::PVRTC_RGBA4 => {
                FormatDescriptor::MobileCompressed(MobileFamily::Pvr)
            }
            Self::ATC_RGB4 | Self::ATC_RGBA8 => {
                FormatDescriptor::MobileCompressed(MobileFamily::Atc)
            }
        }
    }
}

/// Resolved description of how a texture format maps onto container-header
/// fields. Adding a format means adding one table entry and, at most, one
/// match arm in the header builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatDescriptor {
    /// Plain pixel layouts described by channel masks
    Uncompressed {
        red_mask: u32,
        green_mask: u32,
        blue_mask: u32,
        alpha_mask: u32,
        bits_per_pixel: u32,
        has_alpha: bool,
    },
    /// Fixed-rate block compression identified by a fourCC tag
    BlockCompressed {
        four_cc: u32,
        /// Effective bits per pixel, used for linear-size arithmetic
        bits_per_pixel: u32,
    },
    /// Mobile GPU compression families with no container encoding yet
    MobileCompressed(MobileFamily),
}

/// Mobile compression families. Carries no layout because container
/// output for these is not implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobileFamily {
    Pvr,
    Atc,
}

impl fmt::Display for MobileFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pvr => write!(f, "PVR"),
            Self::Atc => write!(f, "ATC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codes_resolve_to_none() {
        assert_eq!(TextureFormat::from_code(0), None);
        assert_eq!(TextureFormat::from_code(6), None);
        assert_eq!(TextureFormat::from_code(999), None);
        assert_eq!(TextureFormat::from_code(-1), None);
    }

    #[test]
    fn known_codes_round_trip() {
        assert_eq!(TextureFormat::from_code(1), Some(TextureFormat::Alpha8));
        assert_eq!(TextureFormat::from_code(10), Some(TextureFormat::DXT1));
        assert_eq!(TextureFormat::from_code(36), Some(TextureFormat::ATC_RGBA8));
    }

    #[test]
    fn rgba32_masks_cover_all_bits_without_overlap() {
        let FormatDescriptor::Uncompressed {
            red_mask,
            green_mask,
            blue_mask,
            alpha_mask,
            bits_per_pixel,
            ..
        } = TextureFormat::RGBA32.descriptor()
        else {
            panic!("RGBA32 must be uncompressed");
        };

        assert_eq!(bits_per_pixel, 32);
        let masks = [red_mask, green_mask, blue_mask, alpha_mask];
        for (i, a) in masks.iter().enumerate() {
            for b in &masks[i + 1..] {
                assert_eq!(a & b, 0, "channel masks must not overlap");
            }
        }
        assert_eq!(
            red_mask | green_mask | blue_mask | alpha_mask,
            0xffff_ffff,
            "channel masks must cover the full pixel"
        );
    }

    #[test]
    fn channel_orderings_are_distinct() {
        assert_ne!(
            TextureFormat::RGBA32.descriptor(),
            TextureFormat::BGRA32.descriptor()
        );
        assert_ne!(
            TextureFormat::RGBA32.descriptor(),
            TextureFormat::ARGB32.descriptor()
        );
        assert_ne!(
            TextureFormat::BGRA32.descriptor(),
            TextureFormat::ARGB32.descriptor()
        );
    }

    #[test]
    fn block_formats_carry_fourcc_tags() {
        let FormatDescriptor::BlockCompressed {
            four_cc,
            bits_per_pixel,
        } = TextureFormat::DXT1.descriptor()
        else {
            panic!("DXT1 must be block-compressed");
        };
        assert_eq!(four_cc.to_le_bytes(), *b"DXT1");
        assert_eq!(bits_per_pixel, 4);

        let FormatDescriptor::BlockCompressed {
            four_cc,
            bits_per_pixel,
        } = TextureFormat::DXT5.descriptor()
        else {
            panic!("DXT5 must be block-compressed");
        };
        assert_eq!(four_cc.to_le_bytes(), *b"DXT5");
        assert_eq!(bits_per_pixel, 8);
    }

    #[test]
    fn mobile_formats_resolve_to_families() {
        for format in [
            TextureFormat::PVRTC_RGB2,
            TextureFormat::PVRTC_RGBA2,
            TextureFormat::PVRTC_RGB4,
            TextureFormat::PVRTC_RGBA4,
        ] {
            assert_eq!(
                format.descriptor(),
                FormatDescriptor::MobileCompressed(MobileFamily::Pvr)
            );
        }
        for format in [TextureFormat::ATC_RGB4, TextureFormat::ATC_RGBA8] {
            assert_eq!(
                format.descriptor(),
                FormatDescriptor::MobileCompressed(MobileFamily::Atc)
            );
        }
    }
}
