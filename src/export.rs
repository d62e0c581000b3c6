use std::io::Cursor;
use std::path::PathBuf;

use anyhow::Context as _;

use crate::foundation::error::{SceneError, SceneResult};
use crate::surface::Surface;

/// File name every exported portrait is saved under.
pub const PORTRAIT_FILENAME: &str = "male-mahadeshwara-swamiji-cinematic-portrait.png";

/// Destination for an exported image.
pub trait SaveTarget {
    /// Persist `bytes` under `filename`. Called at most once per export.
    fn save(&mut self, filename: &str, bytes: &[u8]) -> SceneResult<()>;
}

/// Writes exports into a directory, creating it if needed.
#[derive(Clone, Debug)]
pub struct DirectoryTarget {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectoryTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Paths written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl SaveTarget for DirectoryTarget {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> SceneResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
        let path = self.dir.join(filename);
        std::fs::write(&path, bytes).with_context(|| format!("write '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "saved export");
        self.written.push(path);
        Ok(())
    }
}

/// In-memory target for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemoryTarget {
    saves: Vec<(String, Vec<u8>)>,
}

impl InMemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured `(filename, bytes)` pairs in save order.
    pub fn saves(&self) -> &[(String, Vec<u8>)] {
        &self.saves
    }
}

impl SaveTarget for InMemoryTarget {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> SceneResult<()> {
        self.saves.push((filename.to_owned(), bytes.to_vec()));
        Ok(())
    }
}

/// Result of an export request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The PNG was handed to the target.
    Saved {
        /// Encoded size in bytes.
        bytes: usize,
    },
    /// No finished surface exists yet.
    NotReady,
    /// The surface has no pixels.
    Empty,
}

/// Encode the surface as a straight-alpha RGBA8 PNG.
pub fn encode_png(surface: &Surface) -> SceneResult<Vec<u8>> {
    let (w, h) = surface.physical_size();
    let rgba = surface.to_rgba8_straight();
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| SceneError::export("surface buffer does not match its dimensions"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| SceneError::export(format!("png encode: {e}")))?;
    Ok(buf)
}

/// Save the finished portrait under [`PORTRAIT_FILENAME`].
///
/// Does nothing when no surface is ready or the surface is empty.
pub fn export_portrait(
    surface: Option<&Surface>,
    target: &mut dyn SaveTarget,
) -> SceneResult<ExportOutcome> {
    let Some(surface) = surface else {
        return Ok(ExportOutcome::NotReady);
    };
    if surface.is_empty() {
        return Ok(ExportOutcome::Empty);
    }

    let png = encode_png(surface)?;
    target.save(PORTRAIT_FILENAME, &png)?;
    Ok(ExportOutcome::Saved { bytes: png.len() })
}

#[cfg(test)]
#[path = "../tests/unit/export.rs"]
mod tests;
