use std::collections::HashMap;
use std::path::PathBuf;

use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};

use crate::asset::ImageAsset;

/// Uploads decoded images to the GPU once per source path
pub struct TextureManager {
    /// Cache of textures by source path
    texture_cache: HashMap<PathBuf, TextureHandle>,
    /// Tracks when each texture was last used
    last_used: HashMap<PathBuf, u64>,
    /// Current frame counter for LRU tracking
    current_frame: u64,
    /// Maximum number of textures to cache
    max_cache_size: usize,
}

impl TextureManager {
    /// Creates a new texture manager with the specified cache size
    pub fn new(max_cache_size: usize) -> Self {
        Self {
            texture_cache: HashMap::new(),
            last_used: HashMap::new(),
            current_frame: 0,
            max_cache_size,
        }
    }

    /// Increments the frame counter, should be called at the start of each frame
    pub fn begin_frame(&mut self) {
        self.current_frame += 1;
    }

    /// Gets or uploads the texture for `asset`
    pub fn texture_for(&mut self, asset: &ImageAsset, ctx: &Context) -> TextureId {
        let key = asset.path().to_path_buf();

        if let Some(handle) = self.texture_cache.get(&key) {
            self.last_used.insert(key, self.current_frame);
            return handle.id();
        }

        self.prune_cache_if_needed();

        let image = ColorImage::from_rgba_unmultiplied(asset.dimensions(), asset.rgba());
        let name = format!("image_{}", key.display());
        let handle = ctx.load_texture(name, image, TextureOptions::LINEAR);
        let id = handle.id();

        self.texture_cache.insert(key.clone(), handle);
        self.last_used.insert(key, self.current_frame);
        id
    }

    /// Drops least recently used textures until there is room for one more
    fn prune_cache_if_needed(&mut self) {
        if self.texture_cache.len() < self.max_cache_size {
            return;
        }

        let mut entries: Vec<(PathBuf, u64)> = self
            .last_used
            .iter()
            .map(|(path, frame)| (path.clone(), *frame))
            .collect();

        // Oldest first
        entries.sort_by_key(|(_, frame)| *frame);

        let to_remove = self.texture_cache.len() + 1 - self.max_cache_size.max(1);
        for (path, _) in entries.into_iter().take(to_remove) {
            self.texture_cache.remove(&path);
            self.last_used.remove(&path);
        }
    }

    /// Returns the number of textures currently in the cache
    pub fn cache_size(&self) -> usize {
        self.texture_cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(dir: &tempfile::TempDir, name: &str) -> ImageAsset {
        let path = dir.path().join(name);
        image::RgbaImage::new(4, 2).save(&path).unwrap();
        ImageAsset::decode(&path).unwrap()
    }

    #[test]
    fn test_cache_hit() {
        let dir = tempfile::tempdir().unwrap();
        let asset = write_png(&dir, "a.png");
        let ctx = Context::default();
        let mut manager = TextureManager::new(10);

        let first = manager.texture_for(&asset, &ctx);
        let second = manager.texture_for(&asset, &ctx);

        assert_eq!(first, second);
        assert_eq!(manager.cache_size(), 1);
    }

    #[test]
    fn test_lru_eviction() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_png(&dir, "a.png");
        let b = write_png(&dir, "b.png");
        let c = write_png(&dir, "c.png");
        let ctx = Context::default();
        let mut manager = TextureManager::new(2);

        manager.texture_for(&a, &ctx);
        manager.begin_frame();
        manager.texture_for(&b, &ctx);
        manager.begin_frame();
        manager.texture_for(&c, &ctx);

        assert_eq!(manager.cache_size(), 2);
        assert!(!manager.texture_cache.contains_key(a.path()));
        assert!(manager.texture_cache.contains_key(c.path()));
    }
}
