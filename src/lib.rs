//! spritestore is a load-once sprite cache. Ask it for a sprite by reference and it loads the image the first time, then hands back the same sprite forever after. If the image is missing or broken, you get a placeholder instead of an error.
//!
//! ```no_run
//! let store = spritestore::SpriteStore::from_dir("assets");
//! let ship = store.get_sprite("sprites/ship.png");
//! assert!(std::sync::Arc::ptr_eq(&ship, &store.get_sprite("sprites/ship.png")));
//! ```

mod bitmap;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod loader;
pub mod locate;
mod placeholder;
mod sprite;
mod store;

/// 8-bit RGBA color.
pub type Color = rgb::Rgba<u8>;

pub use bitmap::{Bitmap, Transparency};
pub use loader::{ImageLoader, LoadError, SpriteProducer};
pub use locate::{DirLocator, Locator, MemoryLocator, Resource};
pub use placeholder::Placeholder;
pub use sprite::Sprite;
pub use store::SpriteStore;
