use crate::foundation::core::{Color, Point};
use crate::foundation::error::{SceneError, SceneResult};

/// One colour stop of a [`Gradient`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GradientStop {
    /// Position along the ramp, `0.0..=1.0`.
    pub offset: f32,
    /// Colour at `offset`.
    pub color: Color,
}

/// Geometry of a colour ramp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GradientKind {
    /// Ramp along the segment `start -> end`.
    Linear {
        /// Offset 0 position.
        start: Point,
        /// Offset 1 position.
        end: Point,
    },
    /// Ramp between two circles.
    Radial {
        /// Centre of the offset-0 circle.
        start_center: Point,
        /// Radius of the offset-0 circle.
        start_radius: f64,
        /// Centre of the offset-1 circle.
        end_center: Point,
        /// Radius of the offset-1 circle.
        end_radius: f64,
    },
}

/// Gradient descriptor: geometry plus ordered colour stops.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    kind: GradientKind,
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Linear ramp from `start` to `end`.
    pub fn linear(start: Point, end: Point) -> Self {
        Self {
            kind: GradientKind::Linear { start, end },
            stops: Vec::new(),
        }
    }

    /// Radial ramp between two circles.
    pub fn radial(start_center: Point, start_radius: f64, end_center: Point, end_radius: f64) -> Self {
        Self {
            kind: GradientKind::Radial {
                start_center,
                start_radius,
                end_center,
                end_radius,
            },
            stops: Vec::new(),
        }
    }

    /// Radial ramp between two concentric circles.
    pub fn concentric(center: Point, inner_radius: f64, outer_radius: f64) -> Self {
        Self::radial(center, inner_radius, center, outer_radius)
    }

    /// Append a stop.
    ///
    /// Offsets must lie in `[0, 1]` and must not decrease.
    pub fn add_stop(&mut self, offset: f32, color: Color) -> SceneResult<()> {
        if !offset.is_finite() || !(0.0..=1.0).contains(&offset) {
            return Err(SceneError::validation(format!(
                "gradient stop offset {offset} outside [0, 1]"
            )));
        }
        if let Some(last) = self.stops.last()
            && offset < last.offset
        {
            return Err(SceneError::validation(format!(
                "gradient stop offset {offset} precedes previous offset {}",
                last.offset
            )));
        }
        self.stops.push(GradientStop { offset, color });
        Ok(())
    }

    /// Builder form of [`Gradient::add_stop`] for a whole list of stops.
    pub fn with_stops(mut self, stops: &[(f32, Color)]) -> SceneResult<Self> {
        for &(offset, color) in stops {
            self.add_stop(offset, color)?;
        }
        Ok(self)
    }

    /// Stops in ramp order.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Convert to a `vello_cpu` paint with every stop's alpha scaled by `alpha`.
    pub(crate) fn to_cpu(&self, alpha: f64) -> vello_cpu::peniko::Gradient {
        use vello_cpu::peniko::{ColorStop, color::DynamicColor};

        let stops: Vec<ColorStop> = self
            .stops()
            .iter()
            .map(|s| ColorStop {
                offset: s.offset,
                color: DynamicColor::from_alpha_color(s.color.fade(alpha).to_cpu()),
            })
            .collect();

        let base = match self.kind {
            GradientKind::Linear { start, end } => {
                vello_cpu::peniko::Gradient::new_linear(point_to_cpu(start), point_to_cpu(end))
            }
            GradientKind::Radial {
                start_center,
                start_radius,
                end_center,
                end_radius,
            } => vello_cpu::peniko::Gradient::new_two_point_radial(
                point_to_cpu(start_center),
                start_radius as f32,
                point_to_cpu(end_center),
                end_radius as f32,
            ),
        };
        base.with_stops(stops.as_slice())
    }
}

pub(crate) fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

#[cfg(test)]
#[path = "../../tests/unit/paint/gradient.rs"]
mod tests;
