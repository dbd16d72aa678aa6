use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, SeriesVertex};

/// Deterministic bar geometry for an interval layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalBar {
    pub x_center: f64,
    pub x_left: f64,
    pub x_right: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

/// Projects vertices into bars standing on the plot bottom.
///
/// Bar width is an even share of the plot width, at least one pixel.
#[must_use]
pub fn project_interval_bars(vertices: &[SeriesVertex], area: PlotArea) -> Vec<IntervalBar> {
    if vertices.is_empty() {
        return Vec::new();
    }

    let bar_width = (area.width / vertices.len() as f64 * 0.5).max(1.0);
    let half = bar_width / 2.0;
    let baseline = area.bottom();
    vertices
        .iter()
        .map(|vertex| IntervalBar {
            x_center: vertex.x,
            x_left: vertex.x - half,
            x_right: vertex.x + half,
            y_top: vertex.y.min(baseline),
            y_bottom: baseline,
        })
        .collect()
}
