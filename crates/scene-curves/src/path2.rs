//! 2D polyline path builder.

use crate::arc2::{Arc2, Orientation};
use scene_math::Vector2;

/// A 2D path built from line and arc segments.
///
/// Arcs are flattened into line segments at build time, so the stored
/// representation is always a polyline. Once closed, the path rejects
/// further segments.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path2 {
    points: Vec<Vector2>,
    closed: bool,
}

impl Path2 {
    /// Default number of line segments an arc is flattened into.
    pub const ARC_SEGMENTS: usize = 36;

    /// Starts a path at the given point.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            points: vec![Vector2::new(x, y)],
            closed: false,
        }
    }

    /// Whether [`close`](Self::close) has been called.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The flattened points of the path.
    #[inline]
    pub fn get_points(&self) -> &[Vector2] {
        &self.points
    }

    /// Appends a straight segment to `(x, y)`.
    ///
    /// No-op on a closed path.
    pub fn add_line_to(&mut self, x: f32, y: f32) -> &mut Self {
        if self.closed {
            return self;
        }
        self.points.push(Vector2::new(x, y));
        self
    }

    /// Appends an arc from the current point through mid to end,
    /// flattened into `segments` line segments.
    ///
    /// No-op on a closed path.
    pub fn add_arc_to(&mut self, mid_x: f32, mid_y: f32, end_x: f32, end_y: f32, segments: usize) -> &mut Self {
        if self.closed || segments == 0 {
            return self;
        }
        // new() guarantees at least one point.
        let start = self.points[self.points.len() - 1];
        let arc = Arc2::new(start, Vector2::new(mid_x, mid_y), Vector2::new(end_x, end_y));

        let mut increment = arc.angle.radians() / segments as f32;
        if arc.orientation == Orientation::Clockwise {
            increment = -increment;
        }

        let mut current_angle = arc.start_angle.radians() + increment;
        for _ in 0..segments {
            let x = current_angle.cos() * arc.radius + arc.center_point.x;
            let y = current_angle.sin() * arc.radius + arc.center_point.y;
            self.add_line_to(x, y);
            current_angle += increment;
        }
        self
    }

    /// Marks the path closed. The closing segment back to the first
    /// point is implicit in [`length`](Self::length).
    pub fn close(&mut self) -> &mut Self {
        self.closed = true;
        self
    }

    /// Total polyline length, including the closing segment when closed.
    pub fn length(&self) -> f32 {
        let mut result = 0.0;
        for pair in self.points.windows(2) {
            result += Vector2::distance(&pair[0], &pair[1]);
        }
        if self.closed && self.points.len() > 1 {
            result += Vector2::distance(&self.points[self.points.len() - 1], &self.points[0]);
        }
        result
    }
}
