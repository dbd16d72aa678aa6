use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};

/// Default plot padding of the host chart: `[top, right, bottom, left]`.
pub const DEFAULT_PLOT_PADDING: [f64; 4] = [20.0, 20.0, 95.0, 80.0];

/// Four-sided padding normalized from a scalar or a 1–4 element list.
///
/// Lists follow CSS shorthand order: `[all]`, `[vertical, horizontal]`,
/// `[top, horizontal, bottom]`, `[top, right, bottom, left]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PaddingRepr", into = "PaddingRepr")]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    #[must_use]
    pub const fn all(value: f64) -> Self {
        Self::sides(value, value, value, value)
    }

    #[must_use]
    pub const fn sides(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn from_slice(values: &[f64]) -> SliderResult<Self> {
        match *values {
            [all] => Ok(Self::all(all)),
            [vertical, horizontal] => Ok(Self::sides(vertical, horizontal, vertical, horizontal)),
            [top, horizontal, bottom] => Ok(Self::sides(top, horizontal, bottom, horizontal)),
            [top, right, bottom, left] => Ok(Self::sides(top, right, bottom, left)),
            _ => Err(SliderError::InvalidData(format!(
                "padding expects 1 to 4 values, got {}",
                values.len()
            ))),
        }
    }

    #[must_use]
    pub fn to_array(self) -> [f64; 4] {
        [self.top, self.right, self.bottom, self.left]
    }

    pub fn validate(self) -> SliderResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SliderError::InvalidData(format!(
                    "padding `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

impl Default for Padding {
    fn default() -> Self {
        let [top, right, bottom, left] = DEFAULT_PLOT_PADDING;
        Self::sides(top, right, bottom, left)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum PaddingRepr {
    Uniform(f64),
    Sides(Vec<f64>),
}

impl TryFrom<PaddingRepr> for Padding {
    type Error = SliderError;

    fn try_from(repr: PaddingRepr) -> Result<Self, Self::Error> {
        match repr {
            PaddingRepr::Uniform(value) => Ok(Self::all(value)),
            PaddingRepr::Sides(values) => Self::from_slice(&values),
        }
    }
}

impl From<Padding> for PaddingRepr {
    fn from(padding: Padding) -> Self {
        Self::Sides(padding.to_array().to_vec())
    }
}
