use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use indexmap::IndexMap;

use crate::{loader::SpriteProducer, DirLocator, ImageLoader, Sprite};

type Slot = Arc<OnceLock<Arc<Sprite>>>;

/// A load-once cache of sprites, keyed by reference.
///
/// The first [`get_sprite`](Self::get_sprite) for a reference asks the producer for its bitmap; every later call returns the same [`Arc<Sprite>`]. Entries are never evicted.
///
/// The store can be shared between threads. Each reference is produced at most once: concurrent callers asking for the same reference wait for a single producer call, while callers asking for other references are not blocked by it. A producer must not call back into its own store for the reference it is producing.
pub struct SpriteStore<P> {
    producer: P,
    sprites: Mutex<IndexMap<String, Slot>>,
}

impl<P> SpriteStore<P>
where
    P: SpriteProducer,
{
    /// Creates an empty store.
    pub fn new(producer: P) -> Self {
        Self {
            producer,
            sprites: Mutex::new(IndexMap::new()),
        }
    }

    /// Gets the sprite for `reference`, producing it on first use.
    ///
    /// This never fails: references that cannot be loaded resolve to whatever the producer substitutes.
    pub fn get_sprite(&self, reference: &str) -> Arc<Sprite> {
        let slot = {
            let mut sprites = self.lock();
            match sprites.get(reference) {
                Some(slot) => slot.clone(),
                None => sprites.entry(reference.to_string()).or_default().clone(),
            }
        };
        slot.get_or_init(|| Arc::new(Sprite::new(self.producer.produce(reference))))
            .clone()
    }

    /// Gets the sprite for `reference` if it has already been produced.
    pub fn get(&self, reference: &str) -> Option<Arc<Sprite>> {
        self.lock().get(reference)?.get().cloned()
    }

    /// Whether `reference` has already been produced.
    pub fn contains(&self, reference: &str) -> bool {
        self.get(reference).is_some()
    }

    /// Number of produced sprites.
    pub fn len(&self) -> usize {
        self.lock()
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Produced references, in the order they were first requested.
    pub fn references(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|(_, slot)| slot.get().is_some())
            .map(|(reference, _)| reference.clone())
            .collect()
    }

    pub fn producer(&self) -> &P {
        &self.producer
    }

    fn lock(&self) -> MutexGuard<'_, IndexMap<String, Slot>> {
        // The map is insert-only, so it is consistent even if a holder panicked.
        self.sprites.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SpriteStore<ImageLoader<DirLocator>> {
    /// Creates a store loading image files under `root`.
    pub fn from_dir(root: impl Into<std::path::PathBuf>) -> Self {
        Self::new(ImageLoader::from_dir(root))
    }
}
