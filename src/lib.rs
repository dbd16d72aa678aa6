//! chart-datazoom: range slider ("data zoom") for chart hosts.
//!
//! The slider draws a selection overlay over a background mini-chart, maps
//! handle positions through the chart's axis scale and reports the selected
//! domain range to the host as formatted text.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{SliderCollaborators, SliderConfig, SliderController};
pub use error::{SliderError, SliderResult};
