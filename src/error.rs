use thiserror::Error;

pub type SliderResult<T> = Result<T, SliderError>;

#[derive(Debug, Error)]
pub enum SliderError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("Please specify the data!")]
    MissingData,

    #[error("Please specify the {axis}!")]
    MissingAxisField { axis: &'static str },

    #[error("container `{0}` is not available")]
    ContainerUnavailable(String),

    #[error("invalid slider range: min={min}, max={max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("slider is already rendered; call clear() before rendering again")]
    AlreadyRendered,

    #[error("slider has not been rendered")]
    NotRendered,

    #[error("slider has been destroyed")]
    Destroyed,
}
