use serde::{Deserialize, Serialize};

use crate::core::{DomainValue, Scale};
use crate::error::{SliderError, SliderResult};

/// Ratio used for a bound the caller left unset.
///
/// Both bounds fall back to the far end of the axis, so an unconfigured
/// slider opens as `[100, 100]`.
pub const UNSET_BOUND_RATIO: f64 = 1.0;

/// Selected span as percentages of the overlay's pixel span.
///
/// Invariant: `0 <= min <= max <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    min: f64,
    max: f64,
}

impl SliderRange {
    pub fn new(min: f64, max: f64) -> SliderResult<Self> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 || max > 100.0 || min > max {
            return Err(SliderError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn full() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
        }
    }

    /// Builds a range from axis ratios, clamping into `[0, 1]` and ordering.
    pub fn from_ratios(min_ratio: f64, max_ratio: f64) -> SliderResult<Self> {
        if !min_ratio.is_finite() || !max_ratio.is_finite() {
            return Err(SliderError::InvalidRange {
                min: min_ratio * 100.0,
                max: max_ratio * 100.0,
            });
        }
        let min = min_ratio.clamp(0.0, 1.0) * 100.0;
        let max = max_ratio.clamp(0.0, 1.0) * 100.0;
        Ok(Self {
            min: min.min(max),
            max: min.max(max),
        })
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn min_ratio(self) -> f64 {
        self.min / 100.0
    }

    #[must_use]
    pub fn max_ratio(self) -> f64 {
        self.max / 100.0
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn to_array(self) -> [f64; 2] {
        [self.min, self.max]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleKind {
    Min,
    Max,
}

/// User-facing bounds of the selection, in domain units.
///
/// `None` means the bound was never set. After a slider change both bounds
/// hold the scale's display text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub start: Option<DomainValue>,
    pub end: Option<DomainValue>,
}

impl Selection {
    #[must_use]
    pub fn new(start: Option<DomainValue>, end: Option<DomainValue>) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn bound(&self, handle: HandleKind) -> Option<&DomainValue> {
        match handle {
            HandleKind::Min => self.start.as_ref(),
            HandleKind::Max => self.end.as_ref(),
        }
    }
}

/// Computes the initial overlay range from the selection.
pub fn initial_range(scale: &dyn Scale, selection: &Selection) -> SliderResult<SliderRange> {
    let min = bound_ratio(scale, selection.start.as_ref())?;
    let max = bound_ratio(scale, selection.end.as_ref())?;
    SliderRange::from_ratios(min, max)
}

fn bound_ratio(scale: &dyn Scale, bound: Option<&DomainValue>) -> SliderResult<f64> {
    match bound {
        Some(value) => scale.scale(value),
        None => Ok(UNSET_BOUND_RATIO),
    }
}

/// Domain value shown on a handle.
///
/// A stored bound wins over the scale-derived value so literal bounds are
/// displayed as given.
pub fn handle_value(
    scale: &dyn Scale,
    selection: &Selection,
    range: SliderRange,
    handle: HandleKind,
) -> SliderResult<DomainValue> {
    if let Some(bound) = selection.bound(handle) {
        return Ok(bound.clone());
    }
    let ratio = match handle {
        HandleKind::Min => range.min_ratio(),
        HandleKind::Max => range.max_ratio(),
    };
    scale.invert(ratio)
}

/// Display text for both handles at overlay construction.
pub fn handle_texts(
    scale: &dyn Scale,
    selection: &Selection,
    range: SliderRange,
) -> SliderResult<(String, String)> {
    let min = handle_value(scale, selection, range, HandleKind::Min)?;
    let max = handle_value(scale, selection, range, HandleKind::Max)?;
    Ok((scale.get_text(&min), scale.get_text(&max)))
}

/// Display text for a range reported by the overlay, always scale-derived.
pub fn range_texts(scale: &dyn Scale, range: SliderRange) -> SliderResult<(String, String)> {
    let min = scale.invert(range.min_ratio())?;
    let max = scale.invert(range.max_ratio())?;
    Ok((scale.get_text(&min), scale.get_text(&max)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_rejects_inverted_bounds() {
        assert!(SliderRange::new(60.0, 40.0).is_err());
        assert!(SliderRange::new(-1.0, 40.0).is_err());
        assert!(SliderRange::new(10.0, 100.5).is_err());
    }

    #[test]
    fn from_ratios_clamps_and_orders() {
        let range = SliderRange::from_ratios(1.2, -0.1).expect("range");
        assert_eq!(range.to_array(), [0.0, 100.0]);
    }
}
