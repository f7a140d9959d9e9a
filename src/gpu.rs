//! Uploading sprites to wgpu.

use wgpu::util::DeviceExt;

use crate::Sprite;

/// Caches [`wgpu::Texture`]s for [`Sprite`]s, keyed by sprite id.
#[derive(Default)]
pub struct TextureCache {
    textures: std::collections::HashMap<u64, wgpu::Texture>,
}

impl TextureCache {
    /// Creates an empty cache. Make a new one whenever the wgpu device is recreated.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert_if_not_exists(&mut self, id: u64, f: impl FnOnce() -> wgpu::Texture) {
        self.textures.entry(id).or_insert_with(f);
    }

    pub(crate) fn get(&self, id: u64) -> Option<&wgpu::Texture> {
        self.textures.get(&id)
    }

    /// Number of uploaded textures.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

/// Something that can be bound as a wgpu texture.
///
/// Sprites live in CPU memory and are uploaded lazily into a [`TextureCache`]. A [`wgpu::Texture`] is already on the GPU and is used as is; its lifetime is the caller's to manage.
pub trait Texture {
    /// The size of the texture.
    fn size(&self) -> wgpu::Extent3d;

    /// Makes sure the texture is on the GPU. Uploading is skipped if `cache` already holds it.
    fn upload_to_wgpu(&self, device: &wgpu::Device, queue: &wgpu::Queue, cache: &mut TextureCache);

    /// Gets the uploaded texture, or [`None`] if it has not been uploaded to `cache` yet.
    fn get_wgpu_texture<'a>(&'a self, cache: &'a TextureCache) -> Option<&'a wgpu::Texture>;
}

impl Sprite {
    /// Describes the texture this sprite uploads to.
    pub fn texture_descriptor(&self) -> wgpu::TextureDescriptor<'static> {
        wgpu::TextureDescriptor {
            label: Some("spritestore: Sprite"),
            size: wgpu::Extent3d {
                width: self.width(),
                height: self.height(),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        }
    }
}

impl Texture for Sprite {
    fn size(&self) -> wgpu::Extent3d {
        self.texture_descriptor().size
    }

    fn upload_to_wgpu(&self, device: &wgpu::Device, queue: &wgpu::Queue, cache: &mut TextureCache) {
        cache.insert_if_not_exists(self.id(), || {
            device.create_texture_with_data(
                queue,
                &self.texture_descriptor(),
                wgpu::util::TextureDataOrder::default(),
                self.bitmap().as_bytes(),
            )
        });
    }

    fn get_wgpu_texture<'a>(&'a self, cache: &'a TextureCache) -> Option<&'a wgpu::Texture> {
        cache.get(self.id())
    }
}

impl Texture for wgpu::Texture {
    fn size(&self) -> wgpu::Extent3d {
        self.size()
    }

    fn upload_to_wgpu(&self, _device: &wgpu::Device, _queue: &wgpu::Queue, _cache: &mut TextureCache) {}

    fn get_wgpu_texture<'a>(&'a self, _cache: &'a TextureCache) -> Option<&'a wgpu::Texture> {
        Some(self)
    }
}
