use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, SeriesVertex};

/// Deterministic geometry for an area layer.
///
/// `line_points` follows the mapped data points.
/// `fill_polygon` is an explicitly closed polygon against the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub line_points: Vec<SeriesVertex>,
    pub fill_polygon: Vec<SeriesVertex>,
}

impl AreaGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            line_points: Vec::new(),
            fill_polygon: Vec::new(),
        }
    }
}

/// Builds area geometry anchored at the plot bottom.
#[must_use]
pub fn project_area_geometry(vertices: &[SeriesVertex], area: PlotArea) -> AreaGeometry {
    let (Some(first), Some(last)) = (vertices.first(), vertices.last()) else {
        return AreaGeometry::empty();
    };

    let baseline_y = area.bottom();
    let mut fill_polygon = Vec::with_capacity(vertices.len() + 3);
    fill_polygon.push(SeriesVertex {
        x: first.x,
        y: baseline_y,
    });
    fill_polygon.extend(vertices.iter().copied());
    fill_polygon.push(SeriesVertex {
        x: last.x,
        y: baseline_y,
    });
    fill_polygon.push(SeriesVertex {
        x: first.x,
        y: baseline_y,
    });

    AreaGeometry {
        line_points: vertices.to_vec(),
        fill_polygon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_closes_on_baseline() {
        let area = PlotArea::new(0.0, 0.0, 100.0, 20.0);
        let vertices = [
            SeriesVertex { x: 0.0, y: 5.0 },
            SeriesVertex { x: 100.0, y: 10.0 },
        ];
        let geometry = project_area_geometry(&vertices, area);
        assert_eq!(geometry.fill_polygon.len(), 5);
        assert_eq!(geometry.fill_polygon.first(), geometry.fill_polygon.last());
        assert_eq!(geometry.fill_polygon[0].y, 20.0);
    }
}
