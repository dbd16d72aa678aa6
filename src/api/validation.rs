use crate::error::{SliderError, SliderResult};
use crate::render::Color;

use super::{BackgroundChartConfig, HandleStyle, SliderConfig};

/// Checks everything that can be rejected before a container is resolved.
///
/// Missing data and axis fields are reported later by `render` so that a
/// slider can be constructed first and fed data afterwards.
pub(super) fn validate_slider_config(config: &SliderConfig) -> SliderResult<()> {
    if config.height == 0 {
        return Err(SliderError::InvalidData(
            "slider height must be > 0".to_owned(),
        ));
    }
    if config.width.fixed() == Some(0) {
        return Err(SliderError::InvalidData(
            "slider width must be > 0".to_owned(),
        ));
    }
    config.padding.validate()?;

    validate_opacity("filler", config.filler_style.fill_opacity)?;
    Color::from_hex(&config.filler_style.fill)?;

    validate_opacity("background", config.background_style.fill_opacity)?;
    Color::from_hex(&config.background_style.fill)?;
    Color::from_hex(&config.background_style.stroke)?;
    if !config.background_style.line_width.is_finite() || config.background_style.line_width < 0.0
    {
        return Err(SliderError::InvalidData(
            "background line width must be finite and >= 0".to_owned(),
        ));
    }

    Color::from_hex(&config.text_style.fill)?;
    if !config.text_style.font_size.is_finite() || config.text_style.font_size <= 0.0 {
        return Err(SliderError::InvalidData(
            "text font size must be finite and > 0".to_owned(),
        ));
    }

    validate_handle_style(&config.handle_style)?;
    validate_background_chart(&config.background_chart)?;

    for (field, options) in &config.scales {
        if field.is_empty() {
            return Err(SliderError::InvalidData(
                "scale options need a non-empty field name".to_owned(),
            ));
        }
        options.format.validate()?;
    }
    Ok(())
}

fn validate_opacity(part: &str, opacity: f64) -> SliderResult<()> {
    if !(0.0..=1.0).contains(&opacity) {
        return Err(SliderError::InvalidData(format!(
            "{part} fill opacity must be in [0, 1], got {opacity}"
        )));
    }
    Ok(())
}

fn validate_handle_style(style: &HandleStyle) -> SliderResult<()> {
    for (name, size) in [("width", style.width), ("height", style.height)] {
        if let Some(size) = size {
            if !size.is_finite() || size <= 0.0 {
                return Err(SliderError::InvalidData(format!(
                    "handle {name} must be finite and > 0"
                )));
            }
        }
    }
    if let Some(fill) = &style.fill {
        Color::from_hex(fill)?;
    }
    if style.img.as_deref() == Some("") {
        return Err(SliderError::InvalidData(
            "handle image must not be empty".to_owned(),
        ));
    }
    Ok(())
}

fn validate_background_chart(config: &BackgroundChartConfig) -> SliderResult<()> {
    Color::from_hex(&config.color)?;
    Ok(())
}
