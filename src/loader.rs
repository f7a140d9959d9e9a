//! Turning references into bitmaps.

use crate::{
    locate::{DirLocator, Locator, Resource},
    Bitmap, Placeholder,
};

/// Produces the bitmap for a sprite reference.
///
/// Producers never fail: if there is nothing sensible to return, they return a placeholder.
pub trait SpriteProducer {
    fn produce(&self, reference: &str) -> Bitmap;
}

impl<F> SpriteProducer for F
where
    F: Fn(&str) -> Bitmap,
{
    fn produce(&self, reference: &str) -> Bitmap {
        self(reference)
    }
}

/// Reasons a sprite could not be loaded.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// Nothing backs the reference.
    #[error("no resource found for sprite {reference:?}")]
    NotFound { reference: String },

    /// The resource exists but could not be read or decoded.
    #[error("failed to decode sprite {reference:?}: {source}")]
    Decode {
        reference: String,
        #[source]
        source: image::ImageError,
    },
}

/// Loads sprites through a [`Locator`] and the `image` decoders.
///
/// Anything that cannot be loaded is replaced by the [`Placeholder`]. Missing resources are replaced silently, decode failures are logged at error level first.
#[derive(Debug, Clone)]
pub struct ImageLoader<L> {
    locator: L,
    placeholder: Placeholder,
    bitmask: bool,
}

impl<L> ImageLoader<L>
where
    L: Locator,
{
    /// Creates a loader with the default placeholder and bitmask conversion on.
    pub fn new(locator: L) -> Self {
        Self {
            locator,
            placeholder: Placeholder::default(),
            bitmask: true,
        }
    }

    /// Sets the placeholder used for sprites that fail to load.
    pub fn with_placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Sets whether loaded bitmaps are converted to binary transparency.
    pub fn with_bitmask(mut self, bitmask: bool) -> Self {
        self.bitmask = bitmask;
        self
    }

    pub fn locator(&self) -> &L {
        &self.locator
    }

    pub fn placeholder(&self) -> &Placeholder {
        &self.placeholder
    }

    /// Loads the sprite for `reference` without falling back to the placeholder.
    pub fn try_load(&self, reference: &str) -> Result<Bitmap, LoadError> {
        let resource = self
            .locator
            .locate(reference)
            .ok_or_else(|| LoadError::NotFound {
                reference: reference.to_string(),
            })?;

        let bitmap = decode(&resource).map_err(|source| LoadError::Decode {
            reference: reference.to_string(),
            source,
        })?;

        Ok(if self.bitmask {
            bitmap.to_bitmask()
        } else {
            bitmap
        })
    }
}

impl ImageLoader<DirLocator> {
    /// Creates a loader reading files under `root`.
    pub fn from_dir(root: impl Into<std::path::PathBuf>) -> Self {
        Self::new(DirLocator::new(root))
    }
}

impl<L> SpriteProducer for ImageLoader<L>
where
    L: Locator,
{
    fn produce(&self, reference: &str) -> Bitmap {
        match self.try_load(reference) {
            Ok(bitmap) => bitmap,
            Err(LoadError::NotFound { .. }) => self.placeholder.generate(),
            Err(err @ LoadError::Decode { .. }) => {
                tracing::error!(reference, error = %err, "failed to load sprite, using placeholder");
                self.placeholder.generate()
            }
        }
    }
}

fn decode(resource: &Resource) -> Result<Bitmap, image::ImageError> {
    let decoded = match resource {
        Resource::Path(path) => image::load_from_memory(&std::fs::read(path)?)?,
        Resource::Bytes(bytes) => image::load_from_memory(bytes)?,
    };
    Bitmap::from_image(decoded).ok_or_else(|| {
        image::ImageError::Limits(image::error::LimitError::from_kind(
            image::error::LimitErrorKind::DimensionError,
        ))
    })
}
