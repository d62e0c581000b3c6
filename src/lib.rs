//! Procedural renderer for a devotional sunrise portrait.
//!
//! A robed saint seated on a tiger in a misty forest at dawn, painted by ten ordered
//! stages onto a CPU raster surface and exported as PNG:
//!
//! - Configure a [`Surface`] and run [`render_scene`] (or let a [`PortraitHost`] do it)
//! - Inspect the deterministic geometry with [`SceneLayout`]
//! - Save the result through a [`SaveTarget`] with [`export_portrait`]
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod paint;

/// PNG export and save targets.
pub mod export;
/// Host glue owning the surface across mount and resize.
pub mod host;
/// Drawing stages, layout and the render pipeline.
pub mod scene;
/// The raster target.
pub mod surface;

pub use crate::foundation::core::{
    Affine, BezPath, Color, DESIGN_HEIGHT, DESIGN_WIDTH, DeviceScale, Point, Rect, SceneSize, Vec2,
};
pub use crate::foundation::error::{SceneError, SceneResult};
pub use crate::foundation::math::Rng64;

pub use crate::export::{
    DirectoryTarget, ExportOutcome, InMemoryTarget, PORTRAIT_FILENAME, SaveTarget, encode_png,
    export_portrait,
};
pub use crate::host::PortraitHost;
pub use crate::paint::context::{CompositeMode, DrawContext, DrawState, LineCap, LineJoin, Paint};
pub use crate::paint::gradient::{Gradient, GradientKind, GradientStop};
pub use crate::scene::layout::SceneLayout;
pub use crate::scene::pipeline::{RenderOpts, RenderStats, Stage, render_scene};
pub use crate::surface::Surface;
