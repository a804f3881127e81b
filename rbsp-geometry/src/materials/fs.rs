//! Finds textures on disk by name

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::io::Reader;
use image::{ImageResult, RgbaImage};
use log::{debug, warn};

use super::{MaterialCache, MaterialResolver};

/// Extensions tried, in order, when looking for a texture.
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["jpg", "png", "tga"];

/// A texture found and decoded by [`FsTextureResolver`].
#[derive(Debug, Clone)]
pub struct LoadedTexture {
    /// Name that was asked for, without extension
    pub name: String,
    pub path: PathBuf,
    pub image: RgbaImage,
}

/// Resolves a shader name to the image file with the same name under a root directory.
///
/// Any extension on the name is ignored; each valid extension is tried in
/// order and the first file that decodes wins. Shader scripts are not read.
pub struct FsTextureResolver {
    root: PathBuf,
    extensions: Vec<String>,
    cache: MaterialCache<Arc<LoadedTexture>>,
}

impl FsTextureResolver {
    pub fn new<P: Into<PathBuf>>(root: P) -> FsTextureResolver {
        FsTextureResolver {
            root: root.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_owned()).collect(),
            cache: MaterialCache::new(),
        }
    }

    /// Replace the extensions tried, highest priority first.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> FsTextureResolver
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self.cache.clear();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Number of distinct names looked up so far.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

impl MaterialResolver for FsTextureResolver {
    type Handle = Arc<LoadedTexture>;

    fn resolve(&mut self, name: &str) -> Vec<Arc<LoadedTexture>> {
        let root = &self.root;
        let extensions = &self.extensions;

        self.cache
            .get_or_insert_with(strip_extension(name), |name| {
                load(root, extensions, name)
                    .map(|tex| vec![Arc::new(tex)])
                    .unwrap_or_default()
            })
            .to_vec()
    }
}

fn load(root: &Path, extensions: &[String], name: &str) -> Option<LoadedTexture> {
    for ext in extensions {
        let path = root.join(format!("{}.{}", name, ext));
        if !path.is_file() {
            continue;
        }

        debug!("Loading texture from {:?}", path);
        match decode(&path) {
            Ok(image) => {
                return Some(LoadedTexture {
                    name: name.to_owned(),
                    path,
                    image,
                })
            }
            Err(e) => warn!("Couldn't decode texture {:?}: {}", path, e),
        }
    }

    debug!("No texture found for {}", name);
    None
}

fn decode(path: &Path) -> ImageResult<RgbaImage> {
    Ok(Reader::open(path)?
        .with_guessed_format()?
        .decode()?
        .into_rgba8())
}

/// `textures/base/wall.tga` -> `textures/base/wall`
fn strip_extension(name: &str) -> &str {
    let file_start = name.rfind('/').map_or(0, |i| i + 1);

    match name[file_start..].rfind('.') {
        Some(dot) if dot > 0 => &name[..file_start + dot],
        _ => name,
    }
}
