use crate::{Bitmap, Color};

/// Generates the stand-in bitmap used when a sprite cannot be loaded.
///
/// The placeholder is a solid disc inscribed in a square, on a fully transparent background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    /// Width and height of the placeholder, in pixels. Clamped to at least 1.
    pub size: u32,
    /// Color of the disc.
    pub color: Color,
}

impl Placeholder {
    pub const DEFAULT_SIZE: u32 = 20;
    pub const DEFAULT_COLOR: Color = Color {
        r: 0x00,
        g: 0xff,
        b: 0x00,
        a: 0xff,
    };

    /// Renders the placeholder.
    pub fn generate(&self) -> Bitmap {
        let size = self.size.max(1);
        let radius = size as f32 / 2.0;
        let center = glam::Vec2::splat(radius);
        let opaque = Color {
            a: 0xff,
            ..self.color
        };

        Bitmap::from_fn(size, size, |x, y| {
            let p = glam::Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if p.distance_squared(center) <= radius * radius {
                opaque
            } else {
                Color::new(0, 0, 0, 0)
            }
        })
    }
}

impl Default for Placeholder {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            color: Self::DEFAULT_COLOR,
        }
    }
}
