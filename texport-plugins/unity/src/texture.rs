/// Decoded Texture2D record as produced by the asset parser.
///
/// One record is owned by one extraction call and never mutated by it;
/// no state survives between calls.
#[derive(Debug, Clone)]
pub struct Texture2D {
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Raw Unity texture format code; resolved via
    /// [`TextureFormat::from_code`](crate::formats::TextureFormat::from_code)
    pub format_code: i32,
    /// Whether the payload carries a full mipmap chain
    pub mip_map: bool,
    pub color_space: ColorSpace,
    /// Opaque pixel payload; may be empty
    pub image_data: Vec<u8>,
}

/// Color space recorded on the texture.
///
/// Not consumed by the repackaging logic yet; kept on the record so
/// normal-map handling can key off it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Linear,
    Gamma,
}

impl ColorSpace {
    pub fn from_raw(value: i32) -> Self {
        if value == 0 {
            Self::Linear
        } else {
            Self::Gamma
        }
    }
}
