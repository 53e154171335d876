use std::ops::RangeInclusive;
use std::time::Duration;

use crate::error::{Result, SceneError};
use crate::geometry::{Line, DEFAULT_LINE_EXTENT};
use crate::math::Point2;

/// Which shape the primary pointer manipulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeMode {
    /// Press sets the center, drag sets radius and rotation.
    #[default]
    Polygon,
    /// Press sets the anchor corner, drag moves the opposite corner.
    Rectangle,
}

/// Settings for a [`ShapeController`](super::ShapeController).
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    /// Canvas width in pixels.
    pub canvas_width: f64,
    /// Canvas height in pixels.
    pub canvas_height: f64,
    /// Start point of the reference line before any input.
    pub initial_line_start: Point2,
    /// End point of the reference line before any input.
    pub initial_line_end: Point2,
    /// Half-length of the line when it is re-aimed around the pivot.
    pub line_extent: f64,
    /// Side counts the host control may select; requests are clamped.
    pub side_range: RangeInclusive<u32>,
    /// Side count of the polygon before any input.
    pub initial_sides: u32,
    /// Circumradius of the polygon before any input.
    pub initial_radius: f64,
    /// Active shape before any input.
    pub initial_mode: ShapeMode,
    /// Suggested delay between host ticks.
    pub tick_interval: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            canvas_width: 500.0,
            canvas_height: 500.0,
            initial_line_start: Point2::origin(),
            initial_line_end: Point2::new(500.0, 500.0),
            line_extent: DEFAULT_LINE_EXTENT,
            side_range: 2..=50,
            initial_sides: 4,
            initial_radius: 50.0,
            initial_mode: ShapeMode::Polygon,
            tick_interval: Duration::from_millis(15),
        }
    }
}

impl ControllerConfig {
    /// Center of the canvas, where the polygon starts out.
    #[must_use]
    pub fn canvas_center(&self) -> Point2 {
        Point2::new(self.canvas_width * 0.5, self.canvas_height * 0.5)
    }

    /// Clamps a requested side count into [`side_range`](Self::side_range).
    #[must_use]
    pub fn clamp_sides(&self, sides: u32) -> u32 {
        sides.clamp(*self.side_range.start(), *self.side_range.end())
    }

    /// Checks the configuration for values the controller cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidConfig`] for an empty or zero-based side
    /// range, an initial side count outside it, a non-positive extent,
    /// radius or canvas size, and a geometry error for a degenerate initial
    /// line.
    pub fn validate(&self) -> Result<()> {
        let (lo, hi) = (*self.side_range.start(), *self.side_range.end());
        if lo == 0 || lo > hi {
            return Err(invalid(format!("side range {lo}..={hi} must be non-empty and start at 1 or more")));
        }
        if !self.side_range.contains(&self.initial_sides) {
            return Err(invalid(format!(
                "initial side count {} is outside {lo}..={hi}",
                self.initial_sides
            )));
        }
        if !(self.line_extent > 0.0 && self.line_extent.is_finite()) {
            return Err(invalid(format!("line extent {} must be positive", self.line_extent)));
        }
        if !(self.initial_radius >= 0.0 && self.initial_radius.is_finite()) {
            return Err(invalid(format!("initial radius {} must be non-negative", self.initial_radius)));
        }
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(invalid(format!(
                "canvas size {}x{} must be positive",
                self.canvas_width, self.canvas_height
            )));
        }
        Line::from_points(self.initial_line_start, self.initial_line_end)?;
        Ok(())
    }
}

fn invalid(message: String) -> crate::error::VecprojError {
    SceneError::InvalidConfig(message).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, VecprojError};

    #[test]
    fn default_is_valid() {
        let cfg = ControllerConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.tick_interval, Duration::from_millis(15));
        assert_eq!(cfg.canvas_center(), Point2::new(250.0, 250.0));
    }

    #[test]
    fn clamp_sides_to_range() {
        let cfg = ControllerConfig::default();
        assert_eq!(cfg.clamp_sides(0), 2);
        assert_eq!(cfg.clamp_sides(7), 7);
        assert_eq!(cfg.clamp_sides(999), 50);
    }

    #[test]
    fn rejects_bad_side_ranges() {
        let cfg = ControllerConfig {
            side_range: 0..=10,
            ..ControllerConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(VecprojError::Scene(SceneError::InvalidConfig(_)))));

        #[allow(clippy::reversed_empty_ranges)]
        let cfg = ControllerConfig {
            side_range: 10..=3,
            ..ControllerConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = ControllerConfig {
            initial_sides: 60,
            ..ControllerConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_bad_extent_and_radius() {
        let cfg = ControllerConfig {
            line_extent: 0.0,
            ..ControllerConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = ControllerConfig {
            initial_radius: -3.0,
            ..ControllerConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_degenerate_initial_line() {
        let cfg = ControllerConfig {
            initial_line_end: Point2::origin(),
            ..ControllerConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(VecprojError::Geometry(GeometryError::DegenerateLine))
        ));
    }
}
