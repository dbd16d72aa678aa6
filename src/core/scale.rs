use std::fmt;
use std::rc::Rc;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{parse_date_millis, unix_millis_to_datetime};
use crate::core::{CategoryScale, Dataset, DomainValue, TimeScale};
use crate::error::{SliderError, SliderResult};

pub const DEFAULT_TIME_MASK: &str = "%Y-%m-%d";

/// Bidirectional mapping between axis values and normalized ratios in `[0, 1]`.
///
/// Scales are owned by the background chart; the slider only holds shared
/// read access and drops it on `clear()`.
pub trait Scale: fmt::Debug {
    fn kind(&self) -> ScaleKind;

    fn field(&self) -> &str;

    /// Maps a domain value to its ratio along the axis.
    fn scale(&self, value: &DomainValue) -> SliderResult<f64>;

    /// Maps a ratio back to a domain value.
    fn invert(&self, ratio: f64) -> SliderResult<DomainValue>;

    /// Display text for a domain value.
    fn get_text(&self, value: &DomainValue) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleKind {
    Linear,
    Category,
    Time,
}

/// Label formatting policy applied by `Scale::get_text`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LabelFormat {
    #[default]
    Auto,
    FixedDecimals {
        precision: u8,
    },
    TimeMask {
        mask: String,
    },
}

impl LabelFormat {
    pub fn validate(&self) -> SliderResult<()> {
        match self {
            Self::Auto => Ok(()),
            Self::FixedDecimals { precision } => {
                if *precision > 12 {
                    return Err(SliderError::InvalidData(
                        "label decimal precision must be <= 12".to_owned(),
                    ));
                }
                Ok(())
            }
            Self::TimeMask { mask } => validate_time_mask(mask),
        }
    }
}

/// Per-field scale overrides.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScaleOptions {
    #[serde(default)]
    pub kind: Option<ScaleKind>,
    #[serde(default)]
    pub format: LabelFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    field: String,
    domain_start: f64,
    domain_end: f64,
    format: LabelFormat,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> SliderResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(SliderError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            field: String::new(),
            domain_start,
            domain_end,
            format: LabelFormat::Auto,
        })
    }

    /// Fits the domain to the numeric values of `field` without nicing.
    ///
    /// A single distinct value widens to `[value, value + 1]`.
    pub fn from_values<'a>(
        field: &str,
        values: impl IntoIterator<Item = &'a DomainValue>,
    ) -> SliderResult<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            let Some(number) = value.as_number().filter(|number| number.is_finite()) else {
                continue;
            };
            min = min.min(number);
            max = max.max(number);
        }

        if !min.is_finite() || !max.is_finite() {
            return Err(SliderError::InvalidData(format!(
                "field `{field}` has no finite numeric values"
            )));
        }
        if min == max {
            max = min + 1.0;
        }

        Ok(Self::new(min, max)?.with_field(field))
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    pub fn with_format(mut self, format: LabelFormat) -> SliderResult<Self> {
        format.validate()?;
        self.format = format;
        Ok(self)
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }
}

impl Scale for LinearScale {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Linear
    }

    fn field(&self) -> &str {
        &self.field
    }

    fn scale(&self, value: &DomainValue) -> SliderResult<f64> {
        let number = value
            .as_number()
            .filter(|number| number.is_finite())
            .ok_or_else(|| {
                SliderError::InvalidData(format!("`{value}` is not a finite number"))
            })?;
        let span = self.domain_end - self.domain_start;
        Ok((number - self.domain_start) / span)
    }

    fn invert(&self, ratio: f64) -> SliderResult<DomainValue> {
        if !ratio.is_finite() {
            return Err(SliderError::InvalidData("ratio must be finite".to_owned()));
        }
        let span = self.domain_end - self.domain_start;
        Ok(DomainValue::Number(self.domain_start + ratio * span))
    }

    fn get_text(&self, value: &DomainValue) -> String {
        match value.as_number() {
            Some(number) => format_number(number, &self.format),
            None => value.to_string(),
        }
    }
}

/// Formats a number under `format`; time masks read it as epoch milliseconds.
#[must_use]
pub fn format_number(value: f64, format: &LabelFormat) -> String {
    match format {
        LabelFormat::Auto => format!("{value}"),
        LabelFormat::FixedDecimals { precision } => {
            format!("{value:.prec$}", prec = usize::from(*precision))
        }
        LabelFormat::TimeMask { mask } => format_millis(value, mask),
    }
}

/// Formats epoch milliseconds with a validated strftime mask.
#[must_use]
pub fn format_millis(millis: f64, mask: &str) -> String {
    match unix_millis_to_datetime(millis) {
        Some(time) => time.format(mask).to_string(),
        None => format!("{millis}"),
    }
}

pub fn validate_time_mask(mask: &str) -> SliderResult<()> {
    if mask.is_empty() {
        return Err(SliderError::InvalidData(
            "time mask must not be empty".to_owned(),
        ));
    }
    if StrftimeItems::new(mask).any(|item| matches!(item, Item::Error)) {
        return Err(SliderError::InvalidData(format!(
            "time mask `{mask}` is not a valid strftime pattern"
        )));
    }
    Ok(())
}

/// Guesses the scale kind for a field from its values.
#[must_use]
pub fn infer_scale_kind<'a>(values: impl IntoIterator<Item = &'a DomainValue>) -> ScaleKind {
    let mut saw_value = false;
    let mut all_numbers = true;
    let mut all_dates = true;
    for value in values {
        saw_value = true;
        match value {
            DomainValue::Number(_) => all_dates = false,
            DomainValue::Text(text) => {
                all_numbers = false;
                if all_dates && parse_date_millis(text).is_none() {
                    all_dates = false;
                }
            }
        }
        if !all_numbers && !all_dates {
            return ScaleKind::Category;
        }
    }

    if !saw_value || all_numbers {
        ScaleKind::Linear
    } else {
        ScaleKind::Time
    }
}

/// Builds the scale for `field` over `data`, honoring explicit overrides.
pub fn build_scale(
    field: &str,
    data: &Dataset,
    options: Option<&ScaleOptions>,
) -> SliderResult<Rc<dyn Scale>> {
    let kind = options
        .and_then(|options| options.kind)
        .unwrap_or_else(|| infer_scale_kind(data.field_values(field)));
    let format = options
        .map(|options| options.format.clone())
        .unwrap_or_default();

    let scale: Rc<dyn Scale> = match kind {
        ScaleKind::Linear => {
            Rc::new(LinearScale::from_values(field, data.field_values(field))?.with_format(format)?)
        }
        ScaleKind::Category => Rc::new(CategoryScale::from_values(field, data.field_values(field))?),
        ScaleKind::Time => {
            let scale = TimeScale::from_values(field, data.field_values(field))?;
            match format {
                LabelFormat::TimeMask { mask } => Rc::new(scale.with_mask(mask)?),
                _ => Rc::new(scale),
            }
        }
    };
    Ok(scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_category_for_mixed_text() {
        let values = [DomainValue::from("a"), DomainValue::from("2017-01-01")];
        assert_eq!(infer_scale_kind(values.iter()), ScaleKind::Category);
    }

    #[test]
    fn infers_time_for_date_strings() {
        let values = [DomainValue::from("2017-01-01"), DomainValue::from("2017-02-01")];
        assert_eq!(infer_scale_kind(values.iter()), ScaleKind::Time);
    }

    #[test]
    fn fixed_decimals_pad_and_round() {
        let format = LabelFormat::FixedDecimals { precision: 2 };
        assert_eq!(format_number(1.116, &format), "1.12");
        assert_eq!(format_number(3.0, &format), "3.00");
    }

    #[test]
    fn broken_time_mask_is_rejected() {
        assert!(validate_time_mask("%Y-%").is_err());
        assert!(validate_time_mask("%Y/%m").is_ok());
    }
}
