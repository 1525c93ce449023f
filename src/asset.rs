use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use egui::Vec2;
use log::{info, warn};

use crate::error::{EditorError, EditorResult};

/// A decoded image, shared read-only between every shape that shows it.
pub struct ImageAsset {
    path: PathBuf,
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

// Custom Debug so the pixel buffer isn't dumped
impl std::fmt::Debug for ImageAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageAsset")
            .field("path", &self.path)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("data_len", &self.rgba.len())
            .finish()
    }
}

impl ImageAsset {
    /// Decode an image file into straight RGBA8 pixels
    pub fn decode(path: &Path) -> EditorResult<Self> {
        let image = image::open(path).map_err(|err| EditorError::AssetLoad {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(Self {
            path: path.to_path_buf(),
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pixel dimensions as `[width, height]`
    pub fn dimensions(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}

/// Owns decoded images, keyed by source path.
#[derive(Debug, Default)]
pub struct AssetCache {
    assets: HashMap<PathBuf, Arc<ImageAsset>>,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached asset for `path`, decoding it on first use.
    /// Failed decodes are not cached.
    pub fn load(&mut self, path: &Path) -> EditorResult<Arc<ImageAsset>> {
        if let Some(asset) = self.assets.get(path) {
            return Ok(Arc::clone(asset));
        }

        match ImageAsset::decode(path) {
            Ok(asset) => {
                info!("🖼️ Loaded image {}: {}x{}", path.display(), asset.width, asset.height);
                let asset = Arc::new(asset);
                self.assets.insert(path.to_path_buf(), Arc::clone(&asset));
                Ok(asset)
            }
            Err(err) => {
                warn!("{}", err);
                Err(err)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
