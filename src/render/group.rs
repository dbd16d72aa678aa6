use crate::render::{LinePrimitive, PolygonPrimitive, RectPrimitive, TextPrimitive};

/// Named bundle of primitives drawn together at a shared offset.
///
/// Surfaces keep groups in insertion order; later groups paint on top.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrimitiveGroup {
    name: String,
    dx: f64,
    dy: f64,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl PrimitiveGroup {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Moves the whole group; offsets accumulate.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.dx += dx;
        self.dy += dy;
    }

    #[must_use]
    pub fn translation(&self) -> (f64, f64) {
        (self.dx, self.dy)
    }
}
