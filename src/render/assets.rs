//! Country photos and word clouds
//!
//! Images are found by convention (`images/{ISO}.jpg`, `wordclouds/{ISO}.jpg`) and embedded
//! as base64 data URIs. A missing file is not an error: the view gets a placeholder.

use super::{Artifact, RenderContext};
use crate::consts::cli_consts::{PHOTO_DIR, PLACEHOLDER_FILE, WORDCLOUD_DIR};
use crate::dataset::Iso;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::{debug, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Transparent 1x1 PNG used when not even the placeholder file exists.
const BLANK_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum ImageKind {
    #[strum(serialize = "photo")]
    Photo,
    #[strum(serialize = "word cloud")]
    Wordcloud,
}

impl ImageKind {
    fn dir(&self) -> &'static str {
        match self {
            ImageKind::Photo => PHOTO_DIR,
            ImageKind::Wordcloud => WORDCLOUD_DIR,
        }
    }
}

/// Where the embedded bytes came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ImageSource {
    Asset { path: PathBuf },
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    // `kind` is taken by the artifact tag.
    #[serde(rename = "image_kind")]
    pub kind: ImageKind,
    /// `data:` URI ready for an `<img src>`.
    pub src: String,
    pub source: ImageSource,
    pub bytes: usize,
}

/// Read-only view of the asset directory.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Conventional location of the `kind` image for `iso`.
    pub fn path_for(&self, kind: ImageKind, iso: &Iso) -> PathBuf {
        self.root.join(kind.dir()).join(format!("{}.jpg", iso))
    }

    /// Loads the image for `iso`, falling back to the placeholder on any read failure.
    pub fn load(&self, kind: ImageKind, iso: &Iso) -> Image {
        let path = self.path_for(kind, iso);
        match std::fs::read(&path) {
            Ok(bytes) => {
                debug!("Embedding {} ({} bytes)", path.display(), bytes.len());
                Image {
                    kind,
                    src: data_uri(&path, &bytes),
                    bytes: bytes.len(),
                    source: ImageSource::Asset { path },
                }
            }
            Err(e) => {
                warn!("No {} for {} at {}: {}", kind, iso, path.display(), e);
                self.placeholder(kind)
            }
        }
    }

    fn placeholder(&self, kind: ImageKind) -> Image {
        let path = self.root.join(PHOTO_DIR).join(PLACEHOLDER_FILE);
        let (src, bytes) = match std::fs::read(&path) {
            Ok(bytes) => (data_uri(&path, &bytes), bytes.len()),
            Err(_) => (data_uri(Path::new("blank.png"), BLANK_PNG), BLANK_PNG.len()),
        };
        Image {
            kind,
            src,
            source: ImageSource::Placeholder,
            bytes,
        }
    }
}

fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        _ => "image/jpeg",
    }
}

fn data_uri(path: &Path, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_for(path), STANDARD.encode(bytes))
}

fn render_image(ctx: &RenderContext<'_>, kind: ImageKind) -> Artifact {
    match ctx.state.selection() {
        Some(iso) => Artifact::Image(ctx.assets.load(kind, iso)),
        None => Artifact::Empty,
    }
}

pub fn render_photo(ctx: &RenderContext<'_>) -> Artifact {
    render_image(ctx, ImageKind::Photo)
}

pub fn render_wordcloud(ctx: &RenderContext<'_>) -> Artifact {
    render_image(ctx, ImageKind::Wordcloud)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::iso;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_existing_photo_is_embedded() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        fs::write(dir.path().join("images/MLI.jpg"), b"jpeg-bytes").unwrap();

        let store = AssetStore::new(dir.path());
        let image = store.load(ImageKind::Photo, &iso("MLI"));
        assert_eq!(
            image.src,
            format!("data:image/jpeg;base64,{}", STANDARD.encode(b"jpeg-bytes"))
        );
        assert_eq!(image.bytes, 10);
        assert_eq!(
            image.source,
            ImageSource::Asset {
                path: dir.path().join("images/MLI.jpg")
            }
        );
    }

    #[test]
    fn test_wordcloud_lives_in_its_own_folder() {
        let store = AssetStore::new("/srv/kiva");
        assert_eq!(
            store.path_for(ImageKind::Wordcloud, &iso("KEN")),
            PathBuf::from("/srv/kiva/wordclouds/KEN.jpg")
        );
    }

    #[test]
    fn test_missing_asset_uses_placeholder_file() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        fs::write(dir.path().join("images/placeholder.jpg"), b"ph").unwrap();

        let image = AssetStore::new(dir.path()).load(ImageKind::Wordcloud, &iso("KEN"));
        assert_eq!(image.source, ImageSource::Placeholder);
        assert_eq!(image.kind, ImageKind::Wordcloud);
        assert_eq!(image.src, format!("data:image/jpeg;base64,{}", STANDARD.encode(b"ph")));
    }

    #[test]
    fn test_missing_placeholder_falls_back_to_blank_png() {
        let dir = tempdir().unwrap();
        let image = AssetStore::new(dir.path()).load(ImageKind::Photo, &iso("KEN"));
        assert_eq!(image.source, ImageSource::Placeholder);
        assert!(image.src.starts_with("data:image/png;base64,"));
        assert_eq!(image.bytes, BLANK_PNG.len());
    }
}
