use imgref::ImgVec;

use crate::Color;

/// Alpha at or above this is opaque after [`Bitmap::to_bitmask`].
const BITMASK_THRESHOLD: u8 = 0x80;

/// How a bitmap uses its alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transparency {
    /// Every pixel is fully opaque.
    Opaque,
    /// Every pixel is either fully opaque or fully transparent, and at least one is transparent.
    Bitmask,
    /// At least one pixel is partially transparent.
    Translucent,
}

/// A decoded RGBA bitmap.
///
/// Bitmaps are never empty: both dimensions are at least 1.
#[derive(Clone, Debug)]
pub struct Bitmap {
    img: ImgVec<Color>,
}

impl PartialEq for Bitmap {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.pixels() == other.pixels()
    }
}

impl Eq for Bitmap {}

impl Bitmap {
    /// Creates a bitmap from row-major pixels.
    ///
    /// Returns [`None`] if either dimension is zero or `pixels` does not hold exactly `width * height` pixels.
    pub fn new(pixels: Vec<Color>, width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 || pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            img: ImgVec::new(pixels, width as usize, height as usize),
        })
    }

    /// Builds a bitmap by evaluating `f(x, y)` for every pixel. Both dimensions must be non-zero.
    pub(crate) fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Color) -> Self {
        debug_assert!(width > 0 && height > 0);
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self {
            img: ImgVec::new(pixels, width as usize, height as usize),
        }
    }

    /// Converts a decoded image to 8-bit RGBA.
    ///
    /// Returns [`None`] for zero-sized images.
    pub fn from_image(decoded: image::DynamicImage) -> Option<Self> {
        let rgba = decoded.into_rgba8();
        let (width, height) = rgba.dimensions();
        let pixels = rgba
            .pixels()
            .map(|p| Color::new(p[0], p[1], p[2], p[3]))
            .collect();
        Self::new(pixels, width, height)
    }

    pub fn width(&self) -> u32 {
        self.img.width() as u32
    }

    pub fn height(&self) -> u32 {
        self.img.height() as u32
    }

    /// The size of the bitmap, in pixels.
    pub fn size(&self) -> glam::UVec2 {
        glam::UVec2::new(self.width(), self.height())
    }

    /// Gets the pixel at `(x, y)`, or [`None`] if it is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.pixels()[y as usize * self.img.width() + x as usize])
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Color] {
        self.img.buf()
    }

    /// The raw RGBA8 bytes, suitable for uploading.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.pixels())
    }

    /// Classifies how the bitmap uses alpha.
    pub fn transparency(&self) -> Transparency {
        let mut transparency = Transparency::Opaque;
        for px in self.pixels() {
            match px.a {
                0xff => {}
                0 => transparency = Transparency::Bitmask,
                _ => return Transparency::Translucent,
            }
        }
        transparency
    }

    /// Whether every pixel is either fully opaque or fully transparent.
    pub fn is_binary(&self) -> bool {
        self.transparency() != Transparency::Translucent
    }

    /// Converts the bitmap to binary transparency.
    ///
    /// Pixels with alpha of at least 128 become fully opaque, the rest become fully transparent with their color cleared.
    pub fn to_bitmask(&self) -> Self {
        let pixels = self
            .pixels()
            .iter()
            .map(|px| {
                if px.a >= BITMASK_THRESHOLD {
                    Color { a: 0xff, ..*px }
                } else {
                    Color::new(0, 0, 0, 0)
                }
            })
            .collect();
        Self {
            img: ImgVec::new(pixels, self.img.width(), self.img.height()),
        }
    }
}
