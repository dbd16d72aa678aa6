use serde::{Deserialize, Serialize};

use crate::core::Padding;
use crate::error::{SliderError, SliderResult};

/// Orientation of the slider's main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliderLayout {
    #[default]
    Horizontal,
    Vertical,
}

/// Configured slider width: a fixed pixel count or the container width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "WidthRepr", into = "WidthRepr")]
pub enum SliderWidth {
    #[default]
    Auto,
    Fixed(u32),
}

impl SliderWidth {
    #[must_use]
    pub fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    #[must_use]
    pub fn fixed(self) -> Option<u32> {
        match self {
            Self::Auto => None,
            Self::Fixed(width) => Some(width),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum WidthRepr {
    Pixels(u32),
    Keyword(String),
}

impl TryFrom<WidthRepr> for SliderWidth {
    type Error = SliderError;

    fn try_from(repr: WidthRepr) -> Result<Self, Self::Error> {
        match repr {
            WidthRepr::Pixels(width) => Ok(Self::Fixed(width)),
            WidthRepr::Keyword(keyword) if keyword == "auto" => Ok(Self::Auto),
            WidthRepr::Keyword(keyword) => Err(SliderError::InvalidData(format!(
                "width must be a pixel count or \"auto\", got \"{keyword}\""
            ))),
        }
    }
}

impl From<SliderWidth> for WidthRepr {
    fn from(width: SliderWidth) -> Self {
        match width {
            SliderWidth::Auto => Self::Keyword("auto".to_owned()),
            SliderWidth::Fixed(width) => Self::Pixels(width),
        }
    }
}

/// Pixel geometry derived from configuration and the measured container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderGeometry {
    /// Resolved widget width: the fixed width or the measured container width.
    pub dom_width: u32,
    pub plot_width: f64,
    pub plot_height: f64,
    /// Offset of the overlay along the main axis.
    pub plot_padding: f64,
}

/// Resolves the widget geometry for one layout pass.
///
/// `measured_width` is only consulted for `SliderWidth::Auto`.
///
/// Vertical layout keeps the host's historical arithmetic: the plot width is
/// the configured width and the plot height is derived from `dom_width` minus
/// the top and bottom padding. It therefore needs a fixed width.
///
/// Plot sizes never go below zero: a container narrower than its padding
/// yields an empty plot rather than an error.
pub fn compute_geometry(
    layout: SliderLayout,
    width: SliderWidth,
    measured_width: impl FnOnce() -> SliderResult<u32>,
    height: u32,
    padding: Padding,
) -> SliderResult<SliderGeometry> {
    let dom_width = match width {
        SliderWidth::Fixed(width) => width,
        SliderWidth::Auto => measured_width()?,
    };
    let dom = f64::from(dom_width);

    match layout {
        SliderLayout::Horizontal => Ok(SliderGeometry {
            dom_width,
            plot_width: (dom - padding.left - padding.right).max(0.0),
            plot_height: f64::from(height),
            plot_padding: padding.left,
        }),
        SliderLayout::Vertical => {
            let configured = width.fixed().ok_or_else(|| {
                SliderError::InvalidData("vertical layout requires a fixed width".to_owned())
            })?;
            Ok(SliderGeometry {
                dom_width,
                plot_width: f64::from(configured),
                plot_height: (dom - padding.top - padding.bottom).max(0.0),
                plot_padding: padding.top,
            })
        }
    }
}
