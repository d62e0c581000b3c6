use crate::foundation::core::{DeviceScale, SceneSize};
use crate::foundation::error::{SceneError, SceneResult};
use crate::foundation::math::{Rng64, ambient_seed};
use crate::paint::context::DrawContext;
use crate::scene::{figure, forest, glow, halo, haze, light, mount, sky};
use crate::surface::Surface;

/// Signature shared by every stage painter.
pub(crate) type Painter =
    fn(&mut DrawContext<'_>, SceneSize, &mut Rng64) -> SceneResult<()>;

/// One pass of the drawing pipeline. Stages run in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Sky gradient and vignette.
    Sky,
    /// Additive sun disc.
    LightSource,
    /// Fan of beams around the sun.
    LightBeams,
    /// Parallax silhouette field.
    Forest,
    /// Mist bands and fog blobs.
    Haze,
    /// The tiger.
    Mount,
    /// The robed figure and the staff.
    CentralFigure,
    /// Halo behind the figure's head.
    Halo,
    /// Sparkles and streaks.
    AmbientGlow,
    /// Mist over the lower part of the picture.
    ForegroundHaze,
}

impl Stage {
    /// Every stage, in paint order.
    pub const ALL: [Stage; 10] = [
        Stage::Sky,
        Stage::LightSource,
        Stage::LightBeams,
        Stage::Forest,
        Stage::Haze,
        Stage::Mount,
        Stage::CentralFigure,
        Stage::Halo,
        Stage::AmbientGlow,
        Stage::ForegroundHaze,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Sky => "sky",
            Stage::LightSource => "light_source",
            Stage::LightBeams => "light_beams",
            Stage::Forest => "forest",
            Stage::Haze => "haze",
            Stage::Mount => "mount",
            Stage::CentralFigure => "central_figure",
            Stage::Halo => "halo",
            Stage::AmbientGlow => "ambient_glow",
            Stage::ForegroundHaze => "foreground_haze",
        }
    }

    pub(crate) fn painter(self) -> Painter {
        match self {
            Stage::Sky => sky::paint_sky,
            Stage::LightSource => light::paint_light_source,
            Stage::LightBeams => light::paint_light_beams,
            Stage::Forest => forest::paint_forest,
            Stage::Haze => haze::paint_haze,
            Stage::Mount => mount::paint_mount,
            Stage::CentralFigure => figure::paint_central_figure,
            Stage::Halo => halo::paint_halo,
            Stage::AmbientGlow => glow::paint_ambient_glow,
            Stage::ForegroundHaze => haze::paint_foreground_haze,
        }
    }
}

/// Render options.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderOpts {
    /// Logical to physical pixel ratio.
    pub device_scale: DeviceScale,
    /// Fixed seed for bit-reproducible renders. `None` draws a fresh seed per render.
    pub seed: Option<u64>,
}

impl RenderOpts {
    /// Set the device scale; unusable values fall back to `1.0`.
    pub fn with_device_scale(mut self, scale: f64) -> Self {
        self.device_scale = DeviceScale::or_one(scale);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Read `DEVOTIONAL_SCENE_DEVICE_SCALE` and `DEVOTIONAL_SCENE_SEED`.
    ///
    /// Missing or unparsable values leave the defaults in place.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let device_scale = lookup("DEVOTIONAL_SCENE_DEVICE_SCALE")
            .and_then(|v| v.trim().parse::<f64>().ok())
            .map(DeviceScale::or_one)
            .unwrap_or_default();
        let seed = lookup("DEVOTIONAL_SCENE_SEED").and_then(|v| v.trim().parse::<u64>().ok());
        Self { device_scale, seed }
    }
}

/// What a render did.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct RenderStats {
    /// Stages executed, in order.
    pub stages: Vec<Stage>,
    /// Offscreen layers composited onto the surface.
    pub layers: usize,
    pub physical_width: u32,
    pub physical_height: u32,
    /// Seed the stage generators were forked from.
    pub seed: u64,
}

/// Paint the full scene onto `surface` at `size`, then hand the surface to `on_ready`.
///
/// The surface is reconfigured (and so cleared) first. A zero-area size skips every
/// stage but still reports readiness. If the surface cannot provide a drawing context,
/// the render fails before any stage runs and `on_ready` is not called.
#[tracing::instrument(skip(surface, on_ready))]
pub fn render_scene<F>(
    surface: &mut Surface,
    size: SceneSize,
    opts: &RenderOpts,
    on_ready: F,
) -> SceneResult<RenderStats>
where
    F: FnOnce(&Surface),
{
    let seed = opts.seed.unwrap_or_else(ambient_seed);
    surface.configure(size, opts.device_scale);
    let (physical_width, physical_height) = surface.physical_size();

    let mut stats = RenderStats {
        stages: Vec::with_capacity(Stage::ALL.len()),
        layers: 0,
        physical_width,
        physical_height,
        seed,
    };

    if surface.is_empty() {
        tracing::debug!("zero-area surface; nothing to paint");
        on_ready(surface);
        return Ok(stats);
    }

    let mut ctx = surface.context_2d()?;
    for (index, stage) in Stage::ALL.into_iter().enumerate() {
        let before = ctx.state().clone();
        let mut rng = Rng64::for_stage(seed, index as u64);

        tracing::debug!(stage = stage.name(), "paint stage");
        (stage.painter())(&mut ctx, size, &mut rng)?;

        if ctx.save_depth() != 0 || ctx.state() != &before {
            return Err(SceneError::render(format!(
                "stage {} did not restore the drawing state",
                stage.name()
            )));
        }
        stats.stages.push(stage);
    }
    stats.layers = ctx.finish()?;

    tracing::debug!(
        layers = stats.layers,
        width = physical_width,
        height = physical_height,
        "scene ready"
    );
    on_ready(surface);
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/pipeline.rs"]
mod tests;
