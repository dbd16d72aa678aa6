//! In-memory collaborators for hosts without a windowing layer and for tests.
//!
//! Both types are cheap handles over shared state: clone one before handing
//! it to a controller to keep observing it.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::core::{
    Dataset, PlotArea, Scale, SeriesKind, SeriesVertex, Viewport, build_scale,
    project_area_geometry, project_interval_bars, project_line_segments, project_vertices,
};
use crate::error::{SliderError, SliderResult};
use crate::render::{Color, LinePrimitive, PolygonPrimitive, RectPrimitive, RenderFrame};

use super::{BackgroundChart, BackgroundChartSpec, ChartFactory, Container, NodeId, NodeKind};

const SERIES_STROKE_WIDTH: f64 = 1.0;

#[derive(Debug)]
struct ContainerState {
    width: Option<u32>,
    next_node: u64,
    children: Vec<(NodeId, NodeKind)>,
}

/// Container backed by shared memory.
#[derive(Debug, Clone)]
pub struct MemoryContainer {
    id: Rc<str>,
    state: Rc<RefCell<ContainerState>>,
}

impl MemoryContainer {
    /// Attached container reporting `width`.
    #[must_use]
    pub fn new(id: impl Into<String>, width: u32) -> Self {
        Self::with_width(id, Some(width))
    }

    /// Container whose element cannot be resolved yet.
    #[must_use]
    pub fn detached(id: impl Into<String>) -> Self {
        Self::with_width(id, None)
    }

    fn with_width(id: impl Into<String>, width: Option<u32>) -> Self {
        let id: String = id.into();
        Self {
            id: Rc::from(id),
            state: Rc::new(RefCell::new(ContainerState {
                width,
                next_node: 0,
                children: Vec::new(),
            })),
        }
    }

    pub fn set_width(&self, width: u32) {
        self.state.borrow_mut().width = Some(width);
    }

    pub fn detach(&self) {
        self.state.borrow_mut().width = None;
    }

    #[must_use]
    pub fn children(&self) -> Vec<NodeKind> {
        self.state
            .borrow()
            .children
            .iter()
            .map(|(_, kind)| *kind)
            .collect()
    }
}

impl Container for MemoryContainer {
    fn id(&self) -> &str {
        &self.id
    }

    fn measure_width(&self) -> SliderResult<u32> {
        self.state
            .borrow()
            .width
            .ok_or_else(|| SliderError::ContainerUnavailable(self.id.to_string()))
    }

    fn append_node(&mut self, kind: NodeKind) -> SliderResult<NodeId> {
        let mut state = self.state.borrow_mut();
        if state.width.is_none() {
            return Err(SliderError::ContainerUnavailable(self.id.to_string()));
        }
        state.next_node += 1;
        let node = NodeId(state.next_node);
        state.children.push((node, kind));
        Ok(node)
    }

    fn remove_node(&mut self, node: NodeId) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.children.len();
        state.children.retain(|(id, _)| *id != node);
        state.children.len() != before
    }

    fn child_count(&self) -> usize {
        self.state.borrow().children.len()
    }

    fn remove_all_children(&mut self) {
        self.state.borrow_mut().children.clear();
    }
}

/// Counters shared between a `HeadlessChartFactory` and its charts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartFactoryStats {
    pub created: usize,
    pub rendered: usize,
    pub destroyed: usize,
    pub width_changes: usize,
    pub last_spec: Option<BackgroundChartSpec>,
}

/// Chart factory that derives scales from the data and projects the series
/// layers into a `RenderFrame`.
#[derive(Debug, Clone, Default)]
pub struct HeadlessChartFactory {
    stats: Rc<RefCell<ChartFactoryStats>>,
}

impl HeadlessChartFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stats(&self) -> ChartFactoryStats {
        self.stats.borrow().clone()
    }
}

impl ChartFactory for HeadlessChartFactory {
    fn create_chart(
        &mut self,
        spec: BackgroundChartSpec,
        data: &Dataset,
    ) -> SliderResult<Box<dyn BackgroundChart>> {
        for scale in [&spec.x_scale, &spec.y_scale] {
            if scale.range != [0.0, 1.0] || scale.nice {
                return Err(SliderError::InvalidData(format!(
                    "headless chart only maps `{}` onto an un-niced [0, 1] range",
                    scale.field
                )));
            }
        }
        {
            let mut stats = self.stats.borrow_mut();
            stats.created += 1;
            stats.last_spec = Some(spec.clone());
        }
        Ok(Box::new(HeadlessChart {
            spec,
            data: data.clone(),
            x_scale: None,
            y_scale: None,
            frame: None,
            destroyed: false,
            stats: Rc::clone(&self.stats),
        }))
    }
}

#[derive(Debug)]
pub struct HeadlessChart {
    spec: BackgroundChartSpec,
    data: Dataset,
    x_scale: Option<Rc<dyn Scale>>,
    y_scale: Option<Rc<dyn Scale>>,
    frame: Option<RenderFrame>,
    destroyed: bool,
    stats: Rc<RefCell<ChartFactoryStats>>,
}

impl HeadlessChart {
    fn plot_area(&self) -> PlotArea {
        let padding = self.spec.padding;
        PlotArea::new(
            padding.left,
            padding.top,
            f64::from(self.spec.width) - padding.left - padding.right,
            f64::from(self.spec.height) - padding.top - padding.bottom,
        )
    }

    fn project(&self, x_scale: &dyn Scale, y_scale: &dyn Scale) -> SliderResult<RenderFrame> {
        let mut frame = RenderFrame::new(Viewport::new(self.spec.width, self.spec.height));
        let area = self.plot_area();
        if !area.is_drawable() {
            debug!(
                width = area.width,
                height = area.height,
                "background plot area is empty, skipping series"
            );
            return Ok(frame);
        }

        let vertices = project_vertices(
            self.data
                .field_pairs(&self.spec.x_scale.field, &self.spec.y_scale.field),
            x_scale,
            y_scale,
            area,
        );
        for layer in &self.spec.layers {
            let color = Color::from_hex(&layer.color)?.with_alpha(layer.opacity);
            match layer.kind {
                SeriesKind::Area => {
                    let geometry = project_area_geometry(&vertices, area);
                    if !geometry.fill_polygon.is_empty() {
                        frame.polygons.push(PolygonPrimitive::new(
                            geometry
                                .fill_polygon
                                .iter()
                                .map(|vertex| (vertex.x, vertex.y))
                                .collect(),
                            color,
                        ));
                    }
                    push_segments(&mut frame, &geometry.line_points, color);
                }
                SeriesKind::Line => push_segments(&mut frame, &vertices, color),
                SeriesKind::Interval => {
                    for bar in project_interval_bars(&vertices, area) {
                        frame.rects.push(RectPrimitive::new(
                            bar.x_left,
                            bar.y_top,
                            bar.x_right - bar.x_left,
                            bar.y_bottom - bar.y_top,
                            color,
                        ));
                    }
                }
            }
        }
        Ok(frame)
    }

    fn ensure_alive(&self) -> SliderResult<()> {
        if self.destroyed {
            return Err(SliderError::Destroyed);
        }
        Ok(())
    }
}

fn push_segments(frame: &mut RenderFrame, vertices: &[SeriesVertex], color: Color) {
    frame
        .lines
        .extend(project_line_segments(vertices).into_iter().map(|segment| {
            LinePrimitive::new(
                segment.x1,
                segment.y1,
                segment.x2,
                segment.y2,
                SERIES_STROKE_WIDTH,
                color,
            )
        }));
}

impl BackgroundChart for HeadlessChart {
    fn render(&mut self) -> SliderResult<()> {
        self.ensure_alive()?;
        let x_scale = build_scale(
            &self.spec.x_scale.field,
            &self.data,
            self.spec.x_scale.options.as_ref(),
        )?;
        let y_scale = build_scale(
            &self.spec.y_scale.field,
            &self.data,
            self.spec.y_scale.options.as_ref(),
        )?;
        self.frame = Some(self.project(x_scale.as_ref(), y_scale.as_ref())?);
        self.x_scale = Some(x_scale);
        self.y_scale = Some(y_scale);
        self.stats.borrow_mut().rendered += 1;
        Ok(())
    }

    fn x_scale(&self) -> SliderResult<Rc<dyn Scale>> {
        self.x_scale.clone().ok_or(SliderError::NotRendered)
    }

    fn y_scales(&self) -> Vec<Rc<dyn Scale>> {
        self.y_scale.iter().cloned().collect()
    }

    fn change_width(&mut self, width: u32) -> SliderResult<()> {
        self.ensure_alive()?;
        self.spec.width = width;
        if let (Some(x_scale), Some(y_scale)) = (self.x_scale.clone(), self.y_scale.clone()) {
            self.frame = Some(self.project(x_scale.as_ref(), y_scale.as_ref())?);
        }
        self.stats.borrow_mut().width_changes += 1;
        Ok(())
    }

    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.frame = None;
        self.stats.borrow_mut().destroyed += 1;
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn last_frame(&self) -> Option<&RenderFrame> {
        self.frame.as_ref()
    }
}
