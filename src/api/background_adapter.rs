use std::rc::Rc;

use tracing::debug;

use crate::core::{Dataset, Padding, Scale, SliderGeometry, SliderLayout};
use crate::error::{SliderError, SliderResult};

use super::{
    BackgroundChart, BackgroundChartSpec, ChartFactory, ChartScaleSpec, Container, NodeId,
    NodeKind, SeriesLayerSpec, SliderConfig,
};

const LAYER_OPACITY: f64 = 1.0;

/// Background chart kept after initialization, together with its node.
pub struct MountedBackground {
    pub chart: Box<dyn BackgroundChart>,
    pub node: NodeId,
}

/// Result of one background initialization.
pub struct BackgroundInit {
    /// `None` in vertical layout, where the chart only supplies the scale.
    pub mounted: Option<MountedBackground>,
    pub scale: Rc<dyn Scale>,
}

/// Builds the suppressed-UI mini chart and extracts the slider scale from it.
pub struct BackgroundChartAdapter;

impl BackgroundChartAdapter {
    /// Chart request for the current config and geometry.
    ///
    /// Fails when the data or either axis field is missing.
    pub fn spec(
        config: &SliderConfig,
        data: Option<&Dataset>,
        geometry: SliderGeometry,
    ) -> SliderResult<BackgroundChartSpec> {
        if data.is_none() {
            return Err(SliderError::MissingData);
        }
        let x_field = config
            .x_axis
            .as_deref()
            .filter(|field| !field.is_empty())
            .ok_or(SliderError::MissingAxisField { axis: "xAxis" })?;
        let y_field = config
            .y_axis
            .as_deref()
            .filter(|field| !field.is_empty())
            .ok_or(SliderError::MissingAxisField { axis: "yAxis" })?;

        let layers = if config.background_chart.visible {
            config
                .background_chart
                .series
                .iter()
                .map(|kind| SeriesLayerSpec {
                    kind: *kind,
                    color: config.background_chart.color.clone(),
                    opacity: LAYER_OPACITY,
                })
                .collect()
        } else {
            Vec::new()
        };

        Ok(BackgroundChartSpec {
            container: config.container.clone(),
            width: geometry.dom_width,
            height: config.height,
            padding: Padding::sides(0.0, config.padding.right, 0.0, config.padding.left),
            animate: false,
            show_axis: false,
            show_tooltip: false,
            show_legend: false,
            x_scale: scale_spec(config, x_field),
            y_scale: scale_spec(config, y_field),
            layers,
        })
    }

    /// Creates, renders and mounts the chart, then extracts the scale.
    ///
    /// Vertical layout destroys the chart right after extraction.
    pub fn init(
        config: &SliderConfig,
        data: Option<&Dataset>,
        geometry: SliderGeometry,
        charts: &mut dyn ChartFactory,
        container: &mut dyn Container,
    ) -> SliderResult<BackgroundInit> {
        let spec = Self::spec(config, data, geometry)?;
        let data = data.ok_or(SliderError::MissingData)?;

        let mut chart = charts.create_chart(spec, data)?;
        chart.render()?;
        let node = container.append_node(NodeKind::BackgroundChart)?;

        match config.layout {
            SliderLayout::Horizontal => {
                let scale = chart.x_scale()?;
                debug!(field = scale.field(), "background chart mounted");
                Ok(BackgroundInit {
                    mounted: Some(MountedBackground { chart, node }),
                    scale,
                })
            }
            SliderLayout::Vertical => {
                let scale = chart.y_scales().into_iter().next().ok_or_else(|| {
                    SliderError::InvalidData("background chart exposes no y scale".to_owned())
                })?;
                chart.destroy();
                container.remove_node(node);
                debug!(
                    field = scale.field(),
                    "background chart discarded after scale extraction"
                );
                Ok(BackgroundInit {
                    mounted: None,
                    scale,
                })
            }
        }
    }
}

fn scale_spec(config: &SliderConfig, field: &str) -> ChartScaleSpec {
    ChartScaleSpec {
        field: field.to_owned(),
        range: [0.0, 1.0],
        nice: false,
        options: config.scales.get(field).cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{HeadlessChartFactory, MemoryContainer};
    use crate::core::SeriesKind;

    fn geometry() -> SliderGeometry {
        SliderGeometry {
            dom_width: 300,
            plot_width: 200.0,
            plot_height: 26.0,
            plot_padding: 80.0,
        }
    }

    fn data() -> Dataset {
        Dataset::from_pairs("x", "y", [(1.0, 2.0), (2.0, 4.0)])
    }

    #[test]
    fn spec_checks_preconditions_in_order() {
        let config = SliderConfig::new("slider");
        assert!(matches!(
            BackgroundChartAdapter::spec(&config, None, geometry()),
            Err(SliderError::MissingData)
        ));
        assert!(matches!(
            BackgroundChartAdapter::spec(&config, Some(&data()), geometry()),
            Err(SliderError::MissingAxisField { axis: "xAxis" })
        ));
        let config = SliderConfig {
            x_axis: Some("x".to_owned()),
            ..config
        };
        assert!(matches!(
            BackgroundChartAdapter::spec(&config, Some(&data()), geometry()),
            Err(SliderError::MissingAxisField { axis: "yAxis" })
        ));
    }

    #[test]
    fn spec_keeps_only_horizontal_padding() {
        let config = SliderConfig::new("slider").with_axes("x", "y");
        let spec =
            BackgroundChartAdapter::spec(&config, Some(&data()), geometry()).expect("spec");
        assert_eq!(spec.padding.to_array(), [0.0, 20.0, 0.0, 80.0]);
        assert_eq!(spec.width, 300);
        assert_eq!(spec.layers.len(), 1);
        assert_eq!(spec.layers[0].kind, SeriesKind::Area);
        assert!(!spec.animate && !spec.show_axis && !spec.show_tooltip && !spec.show_legend);
    }

    #[test]
    fn vertical_init_drops_the_chart() {
        let config = SliderConfig::new("slider")
            .with_axes("x", "y")
            .with_layout(SliderLayout::Vertical);
        let factory = HeadlessChartFactory::new();
        let mut charts = factory.clone();
        let mut container = MemoryContainer::new("slider", 300);

        let init = BackgroundChartAdapter::init(
            &config,
            Some(&data()),
            geometry(),
            &mut charts,
            &mut container,
        )
        .expect("init");

        assert!(init.mounted.is_none());
        assert_eq!(init.scale.field(), "y");
        assert_eq!(container.child_count(), 0);
        assert_eq!(factory.stats().destroyed, 1);
    }
}
