use std::sync::atomic::{AtomicU64, Ordering};

use crate::Bitmap;

/// An immutable, cacheable image.
///
/// Each sprite gets a process-unique id when it is created, which keys its GPU texture.
#[derive(Debug)]
pub struct Sprite {
    id: u64,
    bitmap: Bitmap,
}

impl Sprite {
    /// Creates a new sprite.
    pub fn new(bitmap: Bitmap) -> Self {
        static SPRITE_ID: AtomicU64 = AtomicU64::new(0);
        Self {
            id: SPRITE_ID.fetch_add(1, Ordering::Relaxed),
            bitmap,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    pub fn size(&self) -> glam::UVec2 {
        self.bitmap.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Placeholder;

    #[test]
    fn ids_are_unique() {
        let a = Sprite::new(Placeholder::default().generate());
        let b = Sprite::new(Placeholder::default().generate());
        assert_ne!(a.id(), b.id());
        assert_eq!(a.bitmap(), b.bitmap());
        assert_eq!((a.width(), a.height()), (20, 20));
    }
}
