use std::collections::BTreeMap;

use crate::foundation::core::{Color, Point, SceneSize};
use crate::scene::forest::ForestLayer;
use crate::scene::glow::{SPARKLE_COUNT, STREAK_COUNT, STREAK_STOPS};
use crate::scene::halo::{HALO_STOPS, HaloLayout};
use crate::scene::haze::{FOG_BLOB_COUNT, FOREGROUND_STOPS, ForegroundHaze, HazeBand};
use crate::scene::light::{BEAM_STOPS, DISC_STOPS, LightLayout};
use crate::scene::sky::{SKY_STOPS, VIGNETTE_STOPS, Vignette};
use crate::scene::{figure, mount};

/// Deterministic geometry of the scene for a given canvas size.
///
/// Everything here is a pure function of `(W, H)`; random placement (tree jitter,
/// fog, sparkles, stripe angles) is not part of the layout.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneLayout {
    pub size: SceneSize,
    /// `min(W / 1600, H / 900)`.
    pub unit: f64,
    pub vignette: Vignette,
    pub light: LightLayout,
    pub forest: Vec<ForestLayer>,
    pub haze_bands: Vec<HazeBand>,
    pub fog_blobs: u32,
    pub mount_anchor: Point,
    pub figure_anchor: Point,
    pub halo: HaloLayout,
    pub sparkles: u32,
    pub streaks: u32,
    pub foreground_haze: ForegroundHaze,
    /// Stop offsets of every fixed gradient, keyed by name.
    pub gradient_offsets: BTreeMap<&'static str, Vec<f32>>,
}

impl SceneLayout {
    pub fn for_size(size: SceneSize) -> Self {
        fn offsets<const N: usize>(stops: &[(f32, Color); N]) -> Vec<f32> {
            stops.iter().map(|(o, _)| *o).collect()
        }

        let gradient_offsets = BTreeMap::from([
            ("sky", offsets(&SKY_STOPS)),
            ("vignette", offsets(&VIGNETTE_STOPS)),
            ("light_disc", offsets(&DISC_STOPS)),
            ("light_beam", offsets(&BEAM_STOPS)),
            ("foreground_haze", offsets(&FOREGROUND_STOPS)),
            ("mount_body", offsets(&mount::BODY_STOPS)),
            ("robe", offsets(&figure::ROBE_STOPS)),
            ("halo", offsets(&HALO_STOPS)),
            ("streak", offsets(&STREAK_STOPS)),
        ]);

        Self {
            size,
            unit: size.unit(),
            vignette: Vignette::for_size(size),
            light: LightLayout::for_size(size),
            forest: ForestLayer::all(size),
            haze_bands: HazeBand::all(size),
            fog_blobs: FOG_BLOB_COUNT,
            mount_anchor: mount::anchor(size),
            figure_anchor: figure::anchor(size),
            halo: HaloLayout::for_size(size),
            sparkles: SPARKLE_COUNT,
            streaks: STREAK_COUNT,
            foreground_haze: ForegroundHaze::for_size(size),
            gradient_offsets,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layout.rs"]
mod tests;
