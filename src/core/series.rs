use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{DomainValue, Scale};

/// Series layer types available for the background chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Area,
    Line,
    Interval,
}

/// Pixel rectangle the background series are projected into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn x_at(self, ratio: f64) -> f64 {
        self.left + ratio * self.width
    }

    /// Y grows downward, so ratio 1 is the top edge.
    #[must_use]
    pub fn y_at(self, ratio: f64) -> f64 {
        self.top + (1.0 - ratio) * self.height
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// One projected sample in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesVertex {
    pub x: f64,
    pub y: f64,
}

/// Maps `(x, y)` domain pairs through both scales into `area`.
///
/// Pairs a scale cannot map, or that land on non-finite pixels, are skipped.
pub fn project_vertices<'a>(
    pairs: impl IntoIterator<Item = (&'a DomainValue, &'a DomainValue)>,
    x_scale: &dyn Scale,
    y_scale: &dyn Scale,
    area: PlotArea,
) -> Vec<SeriesVertex> {
    let mut skipped = 0usize;
    let mut vertices = Vec::new();
    for (x, y) in pairs {
        let mapped = x_scale
            .scale(x)
            .and_then(|x_ratio| Ok((x_ratio, y_scale.scale(y)?)));
        match mapped {
            Ok((x_ratio, y_ratio)) => {
                let vertex = SeriesVertex {
                    x: area.x_at(x_ratio),
                    y: area.y_at(y_ratio),
                };
                if vertex.x.is_finite() && vertex.y.is_finite() {
                    vertices.push(vertex);
                } else {
                    skipped += 1;
                }
            }
            Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!(
            skipped,
            x_field = x_scale.field(),
            y_field = y_scale.field(),
            "skipping background records that cannot be projected"
        );
    }
    vertices
}
