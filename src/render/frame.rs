use crate::core::Viewport;
use crate::error::{SliderError, SliderResult};
use crate::render::{LinePrimitive, PolygonPrimitive, PrimitiveGroup, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            rects: Vec::new(),
            polygons: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// Appends a group's primitives with its translation applied.
    pub fn push_group(&mut self, group: &PrimitiveGroup) {
        let (dx, dy) = group.translation();
        self.lines
            .extend(group.lines.iter().map(|line| line.translated(dx, dy)));
        self.rects
            .extend(group.rects.iter().map(|rect| rect.translated(dx, dy)));
        self.polygons.extend(
            group
                .polygons
                .iter()
                .map(|polygon| polygon.clone().translated(dx, dy)),
        );
        self.texts
            .extend(group.texts.iter().map(|text| text.clone().translated(dx, dy)));
    }

    pub fn validate(&self) -> SliderResult<()> {
        if !self.viewport.is_valid() {
            return Err(SliderError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.rects.is_empty()
            && self.polygons.is_empty()
            && self.texts.is_empty()
    }
}
