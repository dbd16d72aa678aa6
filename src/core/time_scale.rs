use crate::core::primitives::parse_date_millis;
use crate::core::scale::{DEFAULT_TIME_MASK, format_millis, validate_time_mask};
use crate::core::{DomainValue, Scale, ScaleKind};
use crate::error::{SliderError, SliderResult};

/// Continuous time axis over epoch milliseconds.
///
/// Text values are read as dates; numbers are already milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeScale {
    field: String,
    start_ms: f64,
    end_ms: f64,
    mask: String,
}

impl TimeScale {
    pub fn new(start_ms: f64, end_ms: f64) -> SliderResult<Self> {
        if !start_ms.is_finite() || !end_ms.is_finite() || start_ms == end_ms {
            return Err(SliderError::InvalidData(
                "time scale range must be finite and non-zero".to_owned(),
            ));
        }
        Ok(Self {
            field: String::new(),
            start_ms,
            end_ms,
            mask: DEFAULT_TIME_MASK.to_owned(),
        })
    }

    /// Fits the range to the values of `field`.
    ///
    /// A single instant widens by one day so it still has a usable span.
    pub fn from_values<'a>(
        field: &str,
        values: impl IntoIterator<Item = &'a DomainValue>,
    ) -> SliderResult<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            let Some(millis) = to_millis(value) else {
                continue;
            };
            min = min.min(millis);
            max = max.max(millis);
        }

        if !min.is_finite() || !max.is_finite() {
            return Err(SliderError::InvalidData(format!(
                "field `{field}` has no parseable time values"
            )));
        }
        if min == max {
            max = min + 86_400_000.0;
        }

        Ok(Self::new(min, max)?.with_field(field))
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    pub fn with_mask(mut self, mask: impl Into<String>) -> SliderResult<Self> {
        let mask = mask.into();
        validate_time_mask(&mask)?;
        self.mask = mask;
        Ok(self)
    }

    #[must_use]
    pub fn range_ms(&self) -> (f64, f64) {
        (self.start_ms, self.end_ms)
    }

    #[must_use]
    pub fn mask(&self) -> &str {
        &self.mask
    }
}

impl Scale for TimeScale {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Time
    }

    fn field(&self) -> &str {
        &self.field
    }

    fn scale(&self, value: &DomainValue) -> SliderResult<f64> {
        let millis = to_millis(value)
            .ok_or_else(|| SliderError::InvalidData(format!("`{value}` is not a time value")))?;
        Ok((millis - self.start_ms) / (self.end_ms - self.start_ms))
    }

    fn invert(&self, ratio: f64) -> SliderResult<DomainValue> {
        if !ratio.is_finite() {
            return Err(SliderError::InvalidData("ratio must be finite".to_owned()));
        }
        Ok(DomainValue::Number(
            self.start_ms + ratio * (self.end_ms - self.start_ms),
        ))
    }

    fn get_text(&self, value: &DomainValue) -> String {
        match to_millis(value) {
            Some(millis) => format_millis(millis, &self.mask),
            None => value.to_string(),
        }
    }
}

fn to_millis(value: &DomainValue) -> Option<f64> {
    let millis = match value {
        DomainValue::Number(millis) => Some(*millis),
        DomainValue::Text(text) => parse_date_millis(text).or_else(|| text.trim().parse().ok()),
    };
    millis.filter(|millis| millis.is_finite())
}
