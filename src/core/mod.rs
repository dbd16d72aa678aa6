pub mod area_series;
pub mod category_scale;
pub mod dataset;
pub mod interval_series;
pub mod layout;
pub mod line_series;
pub mod padding;
pub mod primitives;
pub mod range;
pub mod scale;
pub mod series;
pub mod time_scale;
pub mod types;

pub use area_series::{AreaGeometry, project_area_geometry};
pub use category_scale::CategoryScale;
pub use dataset::{Dataset, Record};
pub use interval_series::{IntervalBar, project_interval_bars};
pub use layout::{SliderGeometry, SliderLayout, SliderWidth, compute_geometry};
pub use line_series::{LineSegment, project_line_segments};
pub use padding::{DEFAULT_PLOT_PADDING, Padding};
pub use range::{
    HandleKind, Selection, SliderRange, UNSET_BOUND_RATIO, handle_texts, handle_value,
    initial_range, range_texts,
};
pub use scale::{
    LabelFormat, LinearScale, Scale, ScaleKind, ScaleOptions, build_scale, infer_scale_kind,
};
pub use series::{PlotArea, SeriesKind, SeriesVertex, project_vertices};
pub use time_scale::TimeScale;
pub use types::{DomainValue, Viewport};
