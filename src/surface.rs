use crate::foundation::core::{DeviceScale, SceneSize};
use crate::foundation::error::{SceneError, SceneResult};
use crate::paint::composite::unpremultiply;
use crate::paint::context::DrawContext;

/// Raster target owned by the host: a premultiplied RGBA8 buffer with a logical size
/// and a device scale.
///
/// The physical resolution is `floor(logical * scale)` per axis. Reconfiguring always
/// discards previous content.
pub struct Surface {
    logical: SceneSize,
    scale: DeviceScale,
    physical: (u32, u32),
    pixmap: Option<vello_cpu::Pixmap>,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("logical", &self.logical)
            .field("scale", &self.scale)
            .field("physical", &self.physical)
            .field("allocated", &self.pixmap.is_some())
            .finish()
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface {
    /// Unconfigured, zero-area surface.
    pub fn new() -> Self {
        Self {
            logical: SceneSize::new(0, 0),
            scale: DeviceScale::ONE,
            physical: (0, 0),
            pixmap: None,
        }
    }

    /// Resize the backing buffer for `size` at `scale`, clearing it to transparent.
    ///
    /// Sizes beyond what the rasterizer can address are recorded but left unallocated;
    /// [`Surface::context_2d`] then reports [`SceneError::SurfaceUnavailable`].
    pub fn configure(&mut self, size: SceneSize, scale: DeviceScale) {
        let pw = scale.physical(size.width);
        let ph = scale.physical(size.height);
        self.logical = size;
        self.scale = scale;
        self.physical = (
            u32::try_from(pw).unwrap_or(u32::MAX),
            u32::try_from(ph).unwrap_or(u32::MAX),
        );
        self.pixmap = match (u16::try_from(pw), u16::try_from(ph)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => Some(vello_cpu::Pixmap::new(w, h)),
            _ => None,
        };
    }

    /// Logical size used for layout.
    pub fn logical_size(&self) -> SceneSize {
        self.logical
    }

    /// Physical pixel dimensions `(width, height)`.
    pub fn physical_size(&self) -> (u32, u32) {
        self.physical
    }

    pub fn device_scale(&self) -> DeviceScale {
        self.scale
    }

    /// Return `true` when the surface has no pixels.
    pub fn is_empty(&self) -> bool {
        self.physical.0 == 0 || self.physical.1 == 0
    }

    /// Borrow a drawing context whose coordinates are logical units.
    pub fn context_2d(&mut self) -> SceneResult<DrawContext<'_>> {
        let (pw, ph) = self.physical;
        let scale = self.scale.get();
        match self.pixmap.as_mut() {
            Some(pixmap) => Ok(DrawContext::new(pixmap, scale)),
            None if pw == 0 || ph == 0 => Err(SceneError::surface_unavailable(
                "surface has zero area",
            )),
            None => Err(SceneError::surface_unavailable(format!(
                "surface {pw}x{ph} exceeds the rasterizer limit of {}x{}",
                u16::MAX,
                u16::MAX
            ))),
        }
    }

    /// Premultiplied RGBA8 pixel data, row-major. Empty when unallocated.
    pub fn data(&self) -> &[u8] {
        self.pixmap
            .as_ref()
            .map(|p| p.data_as_u8_slice())
            .unwrap_or(&[])
    }

    /// Premultiplied pixel at physical coordinates.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let (w, h) = self.physical;
        if self.pixmap.is_none() || x >= w || y >= h {
            return None;
        }
        let i = (y as usize * w as usize + x as usize) * 4;
        let d = self.data();
        Some([d[i], d[i + 1], d[i + 2], d[i + 3]])
    }

    /// Straight-alpha RGBA8 copy of the pixels, as image encoders expect.
    pub fn to_rgba8_straight(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data().len());
        for px in self.data().chunks_exact(4) {
            out.extend_from_slice(&unpremultiply([px[0], px[1], px[2], px[3]]));
        }
        out
    }
}

#[cfg(test)]
#[path = "../tests/unit/surface.rs"]
mod tests;
