use serde::{Deserialize, Serialize};

use crate::core::SeriesVertex;

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Joins adjacent vertices into segments.
#[must_use]
pub fn project_line_segments(vertices: &[SeriesVertex]) -> Vec<LineSegment> {
    vertices
        .windows(2)
        .map(|pair| LineSegment {
            x1: pair[0].x,
            y1: pair[0].y,
            x2: pair[1].x,
            y2: pair[1].y,
        })
        .collect()
}
