use indexmap::IndexSet;

use crate::core::{DomainValue, Scale, ScaleKind};
use crate::error::{SliderError, SliderResult};

/// Ordinal scale over the distinct values of a field, in first-seen order.
///
/// Ratios sit on category centers: index `i` of `n` maps to `i / (n - 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScale {
    field: String,
    values: IndexSet<String>,
}

impl CategoryScale {
    pub fn new(values: impl IntoIterator<Item = impl Into<String>>) -> SliderResult<Self> {
        let values: IndexSet<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(SliderError::InvalidData(
                "category scale needs at least one value".to_owned(),
            ));
        }
        Ok(Self {
            field: String::new(),
            values,
        })
    }

    pub fn from_values<'a>(
        field: &str,
        values: impl IntoIterator<Item = &'a DomainValue>,
    ) -> SliderResult<Self> {
        let scale = Self::new(values.into_iter().map(ToString::to_string)).map_err(|_| {
            SliderError::InvalidData(format!("field `{field}` has no category values"))
        })?;
        Ok(scale.with_field(field))
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        self.values.iter().map(String::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Scale for CategoryScale {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Category
    }

    fn field(&self) -> &str {
        &self.field
    }

    fn scale(&self, value: &DomainValue) -> SliderResult<f64> {
        let key = value.to_string();
        let index = self.values.get_index_of(&key).ok_or_else(|| {
            SliderError::InvalidData(format!(
                "`{key}` is not a category of field `{}`",
                self.field
            ))
        })?;
        if self.values.len() > 1 {
            Ok(index as f64 / (self.values.len() - 1) as f64)
        } else {
            Ok(index as f64)
        }
    }

    fn invert(&self, ratio: f64) -> SliderResult<DomainValue> {
        if !ratio.is_finite() {
            return Err(SliderError::InvalidData("ratio must be finite".to_owned()));
        }
        let ratio = ratio.clamp(0.0, 1.0);
        let last = self.values.len() - 1;
        let index = (ratio * last as f64).round() as usize % self.values.len();
        self.values
            .get_index(index)
            .map(|value| DomainValue::Text(value.clone()))
            .ok_or_else(|| SliderError::InvalidData(format!("category index {index} out of range")))
    }

    fn get_text(&self, value: &DomainValue) -> String {
        value.to_string()
    }
}
