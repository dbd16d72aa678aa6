use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::{
    Dataset, DomainValue, Padding, ScaleOptions, SeriesKind, SliderLayout, SliderWidth,
};
use crate::error::{SliderError, SliderResult};
use crate::interaction::OverlayStyle;
use crate::render::Color;

pub const DEFAULT_SLIDER_HEIGHT: u32 = 26;
pub const DEFAULT_HANDLE_IMAGE: &str =
    "https://gw.alipayobjects.com/zos/rmsportal/QXtfhORGlDuRvLXFzpsQ.png";

/// Style of the selected region between the handles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillerStyle {
    pub fill: String,
    #[serde(alias = "fillOpacity")]
    pub fill_opacity: f64,
}

impl Default for FillerStyle {
    fn default() -> Self {
        Self {
            fill: "#BDCCED".to_owned(),
            fill_opacity: 0.3,
        }
    }
}

/// Style of the slider track behind the filler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundStyle {
    pub stroke: String,
    pub fill: String,
    #[serde(alias = "fillOpacity")]
    pub fill_opacity: f64,
    #[serde(alias = "lineWidth")]
    pub line_width: f64,
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self {
            stroke: "#CCD6EC".to_owned(),
            fill: "#CCD6EC".to_owned(),
            fill_opacity: 0.3,
            line_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub fill: String,
    #[serde(alias = "fontSize")]
    pub font_size: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            fill: "#545454".to_owned(),
            font_size: 10.0,
        }
    }
}

/// Handle style as configured.
///
/// A configured handle style replaces the default one wholesale; missing
/// sizes then fall back to the slider height (see `resolve`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandleStyle {
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub fill: Option<String>,
}

impl Default for HandleStyle {
    fn default() -> Self {
        Self {
            img: Some(DEFAULT_HANDLE_IMAGE.to_owned()),
            width: Some(5.0),
            height: None,
            fill: None,
        }
    }
}

impl HandleStyle {
    /// Layers this style over `{ width: height, height: height }`.
    #[must_use]
    pub fn resolve(&self, slider_height: u32) -> ResolvedHandleStyle {
        let fallback = f64::from(slider_height);
        ResolvedHandleStyle {
            img: self.img.clone(),
            width: self.width.unwrap_or(fallback),
            height: self.height.unwrap_or(fallback),
            fill: self
                .fill
                .clone()
                .unwrap_or_else(|| DEFAULT_HANDLE_FILL.to_owned()),
        }
    }
}

const DEFAULT_HANDLE_FILL: &str = "#A3B1BF";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedHandleStyle {
    pub img: Option<String>,
    pub width: f64,
    pub height: f64,
    pub fill: String,
}

/// Background mini-chart settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundChartConfig {
    /// Series layers, accepted as a single name or a list.
    #[serde(rename = "type", deserialize_with = "one_or_many")]
    pub series: SmallVec<[SeriesKind; 2]>,
    pub color: String,
    /// `false` keeps the chart as a scale source without drawing layers.
    pub visible: bool,
}

impl Default for BackgroundChartConfig {
    fn default() -> Self {
        Self {
            series: smallvec![SeriesKind::Area],
            color: "#CCD6EC".to_owned(),
            visible: true,
        }
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<SmallVec<[SeriesKind; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(SeriesKind),
        Many(SmallVec<[SeriesKind; 2]>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(kind) => smallvec![kind],
        OneOrMany::Many(kinds) => kinds,
    })
}

/// Slider configuration merged over documented defaults.
///
/// Keys accept both snake_case and the host's camelCase spelling. The change
/// callback is attached on the controller since closures do not serialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    #[serde(default)]
    pub container: String,
    #[serde(default)]
    pub width: SliderWidth,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default)]
    pub padding: Padding,
    #[serde(default, alias = "xAxis")]
    pub x_axis: Option<String>,
    #[serde(default, alias = "yAxis")]
    pub y_axis: Option<String>,
    #[serde(default)]
    pub start: Option<DomainValue>,
    #[serde(default)]
    pub end: Option<DomainValue>,
    #[serde(default)]
    pub layout: SliderLayout,
    #[serde(default, alias = "fillerStyle")]
    pub filler_style: FillerStyle,
    #[serde(default, alias = "backgroundStyle")]
    pub background_style: BackgroundStyle,
    #[serde(default, alias = "textStyle")]
    pub text_style: TextStyle,
    #[serde(default, alias = "handleStyle")]
    pub handle_style: HandleStyle,
    #[serde(default, alias = "backgroundChart")]
    pub background_chart: BackgroundChartConfig,
    #[serde(default)]
    pub scales: IndexMap<String, ScaleOptions>,
    #[serde(default)]
    pub data: Option<Dataset>,
}

fn default_height() -> u32 {
    DEFAULT_SLIDER_HEIGHT
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            container: String::new(),
            width: SliderWidth::Auto,
            height: DEFAULT_SLIDER_HEIGHT,
            padding: Padding::default(),
            x_axis: None,
            y_axis: None,
            start: None,
            end: None,
            layout: SliderLayout::Horizontal,
            filler_style: FillerStyle::default(),
            background_style: BackgroundStyle::default(),
            text_style: TextStyle::default(),
            handle_style: HandleStyle::default(),
            background_chart: BackgroundChartConfig::default(),
            scales: IndexMap::new(),
            data: None,
        }
    }
}

impl SliderConfig {
    /// Creates a default config bound to `container`.
    #[must_use]
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_axes(mut self, x_axis: impl Into<String>, y_axis: impl Into<String>) -> Self {
        self.x_axis = Some(x_axis.into());
        self.y_axis = Some(y_axis.into());
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: SliderWidth) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: SliderLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the initial selection bounds.
    #[must_use]
    pub fn with_selection(
        mut self,
        start: Option<DomainValue>,
        end: Option<DomainValue>,
    ) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: Dataset) -> Self {
        self.data = Some(data);
        self
    }

    #[must_use]
    pub fn with_background_chart(mut self, background_chart: BackgroundChartConfig) -> Self {
        self.background_chart = background_chart;
        self
    }

    #[must_use]
    pub fn with_handle_style(mut self, handle_style: HandleStyle) -> Self {
        self.handle_style = handle_style;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, field: impl Into<String>, options: ScaleOptions) -> Self {
        self.scales.insert(field.into(), options);
        self
    }

    /// Resolved colors and sizes for the overlay.
    pub fn overlay_style(&self) -> SliderResult<OverlayStyle> {
        let handle = self.handle_style.resolve(self.height);
        Ok(OverlayStyle {
            filler_color: Color::from_hex(&self.filler_style.fill)?
                .with_alpha(self.filler_style.fill_opacity),
            background_fill: Color::from_hex(&self.background_style.fill)?
                .with_alpha(self.background_style.fill_opacity),
            background_stroke: Color::from_hex(&self.background_style.stroke)?,
            background_line_width: self.background_style.line_width,
            text_color: Color::from_hex(&self.text_style.fill)?,
            font_size_px: self.text_style.font_size,
            handle_width: handle.width,
            handle_height: handle.height,
            handle_color: Color::from_hex(&handle.fill)?,
            handle_image: handle.img,
        })
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> SliderResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SliderError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> SliderResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| SliderError::InvalidData(format!("failed to parse config: {e}")))
    }
}
