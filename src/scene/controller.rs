use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::geometry::{DragRectangle, Line, RegularPolygon};
use crate::math::distance_2d::distance;
use crate::math::Point2;
use crate::operations::query::ProjectionExtrema;
use crate::tessellation::tessellate;

use super::{ControllerConfig, Frame, Scene, Shape, ShapeId, ShapeMode};

/// Which pointer an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerChannel {
    /// Manipulates the active shape.
    Primary,
    /// Re-aims the reference line.
    Secondary,
}

/// Whether the pointer was just pressed or is moving while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Press,
    Drag,
}

/// A pointer update delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub channel: PointerChannel,
    pub phase: PointerPhase,
    pub position: Point2,
}

impl PointerEvent {
    #[must_use]
    pub fn new(channel: PointerChannel, phase: PointerPhase, position: Point2) -> Self {
        Self {
            channel,
            phase,
            position,
        }
    }
}

/// Owns the demo's shapes and turns host input into shape updates.
///
/// The scene holds one reference line, one regular polygon and one drag
/// rectangle; [`ShapeMode`] picks which of the two shapes the primary
/// pointer edits and which one is projected.
#[derive(Debug)]
pub struct ShapeController {
    config: ControllerConfig,
    scene: Scene,
    line: ShapeId,
    polygon: ShapeId,
    rectangle: ShapeId,
    mode: ShapeMode,
    pivot: Point2,
}

impl ShapeController {
    /// Builds a controller with the initial shapes described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn new(config: ControllerConfig) -> Result<Self> {
        config.validate()?;

        let mut scene = Scene::new();
        let line = scene.insert(Shape::Line(Line::from_points(
            config.initial_line_start,
            config.initial_line_end,
        )?));
        let polygon = scene.insert(Shape::Polygon(RegularPolygon::new(
            config.canvas_center(),
            config.initial_radius,
            0.0,
            config.initial_sides,
        )?));
        let rectangle = scene.insert(Shape::Rectangle(DragRectangle::default()));

        debug!(
            sides = config.initial_sides,
            mode = ?config.initial_mode,
            "shape controller created"
        );
        Ok(Self {
            mode: config.initial_mode,
            pivot: config.initial_line_start,
            config,
            scene,
            line,
            polygon,
            rectangle,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Returns the scene with all shapes.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Returns the id of the reference line.
    #[must_use]
    pub fn line_id(&self) -> ShapeId {
        self.line
    }

    /// Returns the id of the shape the current mode projects.
    #[must_use]
    pub fn active_shape_id(&self) -> ShapeId {
        match self.mode {
            ShapeMode::Polygon => self.polygon,
            ShapeMode::Rectangle => self.rectangle,
        }
    }

    /// Returns the active mode.
    #[must_use]
    pub fn mode(&self) -> ShapeMode {
        self.mode
    }

    /// Returns the pivot the reference line rotates around.
    #[must_use]
    pub fn pivot(&self) -> &Point2 {
        &self.pivot
    }

    /// Returns the current reference line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line was removed from the scene.
    pub fn line(&self) -> Result<&Line> {
        Ok(self.scene.line(self.line)?)
    }

    /// Returns the regular polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon was removed from the scene.
    pub fn polygon(&self) -> Result<&RegularPolygon> {
        Ok(self.scene.polygon(self.polygon)?)
    }

    /// Switches which shape the primary pointer edits and the frame projects.
    pub fn set_mode(&mut self, mode: ShapeMode) {
        if self.mode != mode {
            debug!(from = ?self.mode, to = ?mode, "shape mode changed");
            self.mode = mode;
        }
    }

    /// Applies a pointer event.
    ///
    /// # Errors
    ///
    /// Returns an error if a shape is missing from the scene.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<()> {
        trace!(?event, "pointer event");
        match (event.channel, event.phase) {
            (PointerChannel::Primary, PointerPhase::Press) => self.press_shape(event.position),
            (PointerChannel::Primary, PointerPhase::Drag) => self.drag_shape(event.position),
            (PointerChannel::Secondary, PointerPhase::Press) => {
                debug!(x = event.position.x, y = event.position.y, "pivot set");
                self.pivot = event.position;
                Ok(())
            }
            (PointerChannel::Secondary, PointerPhase::Drag) => self.aim_line(event.position),
        }
    }

    /// Requests a new side count for the polygon.
    ///
    /// Values outside the configured range are clamped. The vertex sequence
    /// is only reallocated when the count actually changes. Returns the
    /// count in effect.
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon was removed from the scene.
    pub fn set_sides(&mut self, requested: u32) -> Result<u32> {
        let sides = self.config.clamp_sides(requested);
        if sides != requested {
            warn!(requested, clamped = sides, "side count clamped");
        }
        if let Shape::Polygon(poly) = self.scene.shape_mut(self.polygon)? {
            if poly.sides() != sides {
                poly.set_sides(sides)?;
                debug!(sides, "polygon side count changed");
            }
        }
        Ok(sides)
    }

    /// Recomputes derived geometry and builds the frame for this tick.
    ///
    /// # Errors
    ///
    /// Returns an error if a shape is missing from the scene.
    pub fn tick(&mut self) -> Result<Frame> {
        self.scene.recompute_all();

        let line = *self.line()?;
        let active = self.active_shape_id();
        let extrema = if self.scene.vertices(active)?.is_empty() {
            None
        } else {
            Some(ProjectionExtrema::new(active, self.line).execute(&self.scene)?)
        };

        let outlines = self
            .scene
            .iter()
            .map(|(id, shape)| (id, shape.kind(), tessellate(shape)))
            .collect();

        Ok(Frame {
            outlines,
            line,
            extrema,
        })
    }

    fn press_shape(&mut self, position: Point2) -> Result<()> {
        match self.mode {
            ShapeMode::Polygon => {
                if let Shape::Polygon(poly) = self.scene.shape_mut(self.polygon)? {
                    poly.set_center(position);
                }
            }
            ShapeMode::Rectangle => {
                if let Shape::Rectangle(rect) = self.scene.shape_mut(self.rectangle)? {
                    rect.set_anchor(position);
                }
            }
        }
        Ok(())
    }

    fn drag_shape(&mut self, position: Point2) -> Result<()> {
        match self.mode {
            ShapeMode::Polygon => {
                if let Shape::Polygon(poly) = self.scene.shape_mut(self.polygon)? {
                    let center = *poly.center();
                    poly.set_radius(distance(&center, &position))?;
                    poly.set_angle((position.x - center.x).atan2(position.y - center.y));
                }
            }
            ShapeMode::Rectangle => {
                if let Shape::Rectangle(rect) = self.scene.shape_mut(self.rectangle)? {
                    rect.drag_to(position);
                }
            }
        }
        Ok(())
    }

    fn aim_line(&mut self, target: Point2) -> Result<()> {
        let line = Line::through_pivot(self.pivot, target, self.config.line_extent)?;
        if let Shape::Line(current) = self.scene.shape_mut(self.line)? {
            *current = line;
        }
        Ok(())
    }
}
