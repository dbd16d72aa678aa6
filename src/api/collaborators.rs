use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::{Dataset, Padding, Scale, ScaleOptions, SeriesKind};
use crate::error::SliderResult;
use crate::interaction::{OverlayFactory, RangeElementFactory};
use crate::render::{FrameSurfaceFactory, NullRenderer, RenderFrame, SurfaceFactory};

use super::headless::{HeadlessChartFactory, MemoryContainer};

/// Handle of a node appended to a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    SliderSurface,
    BackgroundChart,
}

/// Host element the slider mounts into.
pub trait Container {
    fn id(&self) -> &str;

    /// Current rendered width in pixels.
    ///
    /// Fails with `ContainerUnavailable` while the element cannot be resolved.
    fn measure_width(&self) -> SliderResult<u32>;

    fn append_node(&mut self, kind: NodeKind) -> SliderResult<NodeId>;

    /// Returns `true` when the node was attached.
    fn remove_node(&mut self, node: NodeId) -> bool;

    fn child_count(&self) -> usize;

    fn remove_all_children(&mut self);
}

/// Scale settings handed to the background chart for one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartScaleSpec {
    pub field: String,
    /// Output range of the scale; the slider always asks for `[0, 1]`.
    pub range: [f64; 2],
    pub nice: bool,
    pub options: Option<ScaleOptions>,
}

/// One drawn series of the background chart, mapped as `x*y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesLayerSpec {
    pub kind: SeriesKind,
    pub color: String,
    pub opacity: f64,
}

/// Everything the slider asks of its background chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundChartSpec {
    pub container: String,
    pub width: u32,
    pub height: u32,
    pub padding: Padding,
    pub animate: bool,
    pub show_axis: bool,
    pub show_tooltip: bool,
    pub show_legend: bool,
    pub x_scale: ChartScaleSpec,
    pub y_scale: ChartScaleSpec,
    pub layers: Vec<SeriesLayerSpec>,
}

/// Mini chart drawn behind the slider and used as its scale source.
pub trait BackgroundChart {
    fn render(&mut self) -> SliderResult<()>;

    /// Scale of the `x` field after `render`.
    fn x_scale(&self) -> SliderResult<Rc<dyn Scale>>;

    /// Scales of the `y` field after `render`, first one preferred.
    fn y_scales(&self) -> Vec<Rc<dyn Scale>>;

    fn change_width(&mut self, width: u32) -> SliderResult<()>;

    fn destroy(&mut self);

    fn is_destroyed(&self) -> bool;

    /// Frame of the latest render, when the chart keeps one.
    fn last_frame(&self) -> Option<&RenderFrame> {
        None
    }
}

pub trait ChartFactory {
    fn create_chart(
        &mut self,
        spec: BackgroundChartSpec,
        data: &Dataset,
    ) -> SliderResult<Box<dyn BackgroundChart>>;
}

/// Injected host services the controller drives.
pub struct SliderCollaborators {
    pub container: Box<dyn Container>,
    pub surfaces: Box<dyn SurfaceFactory>,
    pub charts: Box<dyn ChartFactory>,
    pub overlays: Box<dyn OverlayFactory>,
}

impl SliderCollaborators {
    #[must_use]
    pub fn new(
        container: Box<dyn Container>,
        surfaces: Box<dyn SurfaceFactory>,
        charts: Box<dyn ChartFactory>,
        overlays: Box<dyn OverlayFactory>,
    ) -> Self {
        Self {
            container,
            surfaces,
            charts,
            overlays,
        }
    }

    /// In-memory collaborators; keep clones of the container and chart
    /// factory to observe them from the outside.
    #[must_use]
    pub fn headless(container: MemoryContainer, charts: HeadlessChartFactory) -> Self {
        Self::new(
            Box::new(container),
            Box::new(FrameSurfaceFactory::new(NullRenderer::default)),
            Box::new(charts),
            Box::new(RangeElementFactory),
        )
    }
}
