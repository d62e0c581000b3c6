use crate::foundation::error::{SceneError, SceneResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Canvas width the reference composition was laid out for.
pub const DESIGN_WIDTH: f64 = 1600.0;
/// Canvas height the reference composition was laid out for.
pub const DESIGN_HEIGHT: f64 = 900.0;

/// Logical scene dimensions in CSS-style pixels.
///
/// Everything the renderer draws is derived from these two numbers.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SceneSize {
    /// Logical width.
    pub width: u32,
    /// Logical height.
    pub height: u32,
}

impl SceneSize {
    /// Create a size from logical width and height.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Logical width as `f64`.
    pub fn w(self) -> f64 {
        f64::from(self.width)
    }

    /// Logical height as `f64`.
    pub fn h(self) -> f64 {
        f64::from(self.height)
    }

    /// Return `true` when either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Scale applied to absolute lengths of the reference drawing.
    ///
    /// Equal to `1.0` at 1600x900 and shrinks/grows uniformly with the canvas.
    pub fn unit(self) -> f64 {
        (self.w() / DESIGN_WIDTH).min(self.h() / DESIGN_HEIGHT)
    }

    /// Point at fractions of the canvas (`fx * W`, `fy * H`).
    pub fn frac(self, fx: f64, fy: f64) -> Point {
        Point::new(self.w() * fx, self.h() * fy)
    }
}

impl Default for SceneSize {
    fn default() -> Self {
        Self::new(DESIGN_WIDTH as u32, DESIGN_HEIGHT as u32)
    }
}

/// Ratio between logical units and physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeviceScale(f64);

impl DeviceScale {
    /// Identity scale.
    pub const ONE: Self = Self(1.0);

    /// Create a validated device scale.
    pub fn new(scale: f64) -> SceneResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(SceneError::validation(format!(
                "device scale must be finite and > 0, got {scale}"
            )));
        }
        Ok(Self(scale))
    }

    /// Like [`DeviceScale::new`], but falls back to `1.0` for unusable input.
    pub fn or_one(scale: f64) -> Self {
        Self::new(scale).unwrap_or(Self::ONE)
    }

    /// Raw scale factor.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Physical pixel count for a logical length (truncating).
    pub fn physical(self, logical: u32) -> u64 {
        (f64::from(logical) * self.0).floor().max(0.0) as u64
    }
}

impl Default for DeviceScale {
    fn default() -> Self {
        Self::ONE
    }
}

/// Straight-alpha colour: 8-bit RGB channels and a fractional alpha.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0.0);

    /// Colour from channels and alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Opaque colour from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Same colour with alpha multiplied by `factor`.
    pub fn fade(self, factor: f64) -> Self {
        let a = (f64::from(self.a) * factor).clamp(0.0, 1.0) as f32;
        Self { a, ..self }
    }

    /// Premultiplied RGBA8 representation.
    pub fn to_premul_rgba8(self) -> [u8; 4] {
        let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u16;
        let premul = |c: u8| -> u8 { crate::foundation::math::mul_div255_u8(u16::from(c), a) };
        [premul(self.r), premul(self.g), premul(self.b), a as u8]
    }

    pub(crate) fn to_cpu(self) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::new([
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            self.a.clamp(0.0, 1.0),
        ])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
