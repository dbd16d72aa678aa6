//! Slider facade, configuration and host collaborator seams.
//!
//! `SliderController` is split per concern across the files below; each adds
//! an `impl SliderController` block over the shared runtime state.

mod background_adapter;
mod collaborators;
mod controller;
mod force_fit;
mod headless;
mod json_contract;
mod plugin_dispatch;
mod plugin_registry;
mod render_pass;
mod resize_debounce;
mod selection_controller;
mod slider_config;
mod slider_runtime;
mod snapshot;
mod validation;

pub use background_adapter::{BackgroundChartAdapter, BackgroundInit, MountedBackground};
pub use collaborators::{
    BackgroundChart, BackgroundChartSpec, ChartFactory, ChartScaleSpec, Container, NodeId,
    NodeKind, SeriesLayerSpec, SliderCollaborators,
};
pub use controller::SliderController;
pub use headless::{ChartFactoryStats, HeadlessChart, HeadlessChartFactory, MemoryContainer};
pub use json_contract::{
    SLIDER_CONFIG_JSON_SCHEMA_V1, SLIDER_SNAPSHOT_JSON_SCHEMA_V1, SliderConfigJsonContractV1,
    SliderSnapshotJsonContractV1,
};
pub use resize_debounce::{FORCE_FIT_DEBOUNCE, ResizeDebouncer};
pub use slider_config::{
    BackgroundChartConfig, BackgroundStyle, DEFAULT_HANDLE_IMAGE, DEFAULT_SLIDER_HEIGHT,
    FillerStyle, HandleStyle, ResolvedHandleStyle, SliderConfig, TextStyle,
};
pub use snapshot::SliderSnapshot;
