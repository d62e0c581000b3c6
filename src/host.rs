use crate::export::{ExportOutcome, SaveTarget, export_portrait};
use crate::foundation::core::SceneSize;
use crate::foundation::error::SceneResult;
use crate::scene::pipeline::{RenderOpts, RenderStats, render_scene};
use crate::surface::Surface;

/// Owner of the portrait surface: renders on mount and on resize, and exports on demand.
///
/// The surface only counts as ready after a render has reported it finished; a failed
/// render clears readiness so a stale or partial image is never exported.
#[derive(Debug)]
pub struct PortraitHost {
    opts: RenderOpts,
    surface: Surface,
    size: Option<SceneSize>,
    ready: bool,
    last_stats: Option<RenderStats>,
}

impl PortraitHost {
    pub fn new(opts: RenderOpts) -> Self {
        Self {
            opts,
            surface: Surface::new(),
            size: None,
            ready: false,
            last_stats: None,
        }
    }

    /// Create the surface at `size` and paint it.
    pub fn mount(&mut self, size: SceneSize) -> SceneResult<RenderStats> {
        self.render(size)
    }

    /// Repaint at `size`. Returns `None` when the size is unchanged.
    pub fn resize(&mut self, size: SceneSize) -> SceneResult<Option<RenderStats>> {
        if self.size == Some(size) {
            return Ok(None);
        }
        self.render(size).map(Some)
    }

    /// The finished surface, if the last render completed.
    pub fn ready_surface(&self) -> Option<&Surface> {
        self.ready.then_some(&self.surface)
    }

    pub fn size(&self) -> Option<SceneSize> {
        self.size
    }

    pub fn last_stats(&self) -> Option<&RenderStats> {
        self.last_stats.as_ref()
    }

    /// Export the finished portrait to `target`.
    pub fn download(&self, target: &mut dyn SaveTarget) -> SceneResult<ExportOutcome> {
        export_portrait(self.ready_surface(), target)
    }

    fn render(&mut self, size: SceneSize) -> SceneResult<RenderStats> {
        self.ready = false;
        self.size = Some(size);

        let mut finished = false;
        let stats = render_scene(&mut self.surface, size, &self.opts, |_| finished = true)?;
        self.ready = finished;
        self.last_stats = Some(stats.clone());
        Ok(stats)
    }
}
