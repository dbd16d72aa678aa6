use chart_datazoom::api::{
    Container, HeadlessChartFactory, MemoryContainer, NodeKind, SliderCollaborators, SliderConfig,
    SliderController,
};
use chart_datazoom::core::{Dataset, Padding, SliderLayout, SliderWidth};
use chart_datazoom::extensions::SliderLifecycle;
use chart_datazoom::interaction::DragTarget;
use chart_datazoom::SliderError;

fn series() -> Dataset {
    Dataset::from_pairs(
        "x",
        "y",
        (0..=10).map(|i| (f64::from(i) * 10.0, f64::from(i % 3) + 1.0)),
    )
}

fn slider_with(
    config: SliderConfig,
    width: u32,
) -> (SliderController, MemoryContainer, HeadlessChartFactory) {
    let container = MemoryContainer::new("zoom", width);
    let charts = HeadlessChartFactory::new();
    let slider = SliderController::new(
        config,
        SliderCollaborators::headless(container.clone(), charts.clone()),
    )
    .expect("slider init");
    (slider, container, charts)
}

fn config() -> SliderConfig {
    SliderConfig::new("zoom")
        .with_axes("x", "y")
        .with_data(series())
}

#[test]
fn render_mounts_surface_and_background_chart() {
    let (mut slider, container, charts) = slider_with(config(), 400);
    assert_eq!(slider.lifecycle(), SliderLifecycle::Constructed);
    assert_eq!(container.child_count(), 0);

    slider.render().expect("render");

    assert_eq!(slider.lifecycle(), SliderLifecycle::Rendered);
    assert_eq!(
        container.children(),
        vec![NodeKind::SliderSurface, NodeKind::BackgroundChart]
    );
    let geometry = slider.geometry().expect("geometry");
    assert_eq!(geometry.dom_width, 400);
    assert_eq!(geometry.plot_width, 300.0);
    assert_eq!(geometry.plot_height, 26.0);
    assert_eq!(geometry.plot_padding, 80.0);

    let surface = slider.surface().expect("surface");
    assert_eq!(surface.draw_count(), 1);
    let frame = surface.last_frame().expect("frame");
    assert_eq!(frame.viewport.width, 400);
    // Track, filler and both handles.
    assert_eq!(frame.rects.len(), 4);
    assert_eq!(frame.rects[0].x, 80.0);

    let stats = charts.stats();
    assert_eq!(stats.created, 1);
    assert_eq!(stats.rendered, 1);
    let background = slider.background_chart().expect("background chart");
    assert!(!background.last_frame().expect("background frame").polygons.is_empty());
}

#[test]
fn second_render_without_clear_is_rejected() {
    let (mut slider, _container, _charts) = slider_with(config(), 400);
    slider.render().expect("render");
    assert!(matches!(slider.render(), Err(SliderError::AlreadyRendered)));
}

#[test]
fn clear_then_render_matches_a_fresh_render() {
    let (mut reused, reused_container, _charts) = slider_with(config(), 400);
    reused.render().expect("render");
    reused.clear().expect("clear");
    assert_eq!(reused.lifecycle(), SliderLifecycle::Cleared);
    assert!(reused.scale().is_none());
    assert!(reused.background_chart().is_none());
    reused.render().expect("render after clear");

    let (mut fresh, fresh_container, _charts) = slider_with(config(), 400);
    fresh.render().expect("render");

    assert_eq!(reused.snapshot(), fresh.snapshot());
    assert_eq!(
        reused.surface().expect("surface").last_frame(),
        fresh.surface().expect("surface").last_frame()
    );
    assert_eq!(reused_container.children(), fresh_container.children());
}

#[test]
fn selection_survives_clear() {
    let (mut slider, _container, _charts) = slider_with(config(), 400);
    slider.render().expect("render");
    slider.drag(DragTarget::MinHandle, -75.0).expect("drag");

    slider.repaint().expect("repaint");

    assert_eq!(slider.range().expect("range").to_array(), [25.0, 100.0]);
    let overlay = slider.overlay().expect("overlay");
    assert_eq!(
        overlay.display_text(),
        ("25".to_owned(), "100".to_owned())
    );
}

#[test]
fn render_requires_data_and_both_axes() {
    let (mut slider, _container, _charts) =
        slider_with(SliderConfig::new("zoom").with_axes("x", "y"), 400);
    assert!(matches!(slider.render(), Err(SliderError::MissingData)));

    let (mut slider, _container, _charts) =
        slider_with(SliderConfig::new("zoom").with_data(series()), 400);
    let err = slider.render().expect_err("missing x axis");
    assert_eq!(err.to_string(), "Please specify the xAxis!");

    let mut config = SliderConfig::new("zoom").with_data(series());
    config.x_axis = Some("x".to_owned());
    let (mut slider, _container, _charts) = slider_with(config, 400);
    assert!(matches!(
        slider.render(),
        Err(SliderError::MissingAxisField { axis: "yAxis" })
    ));
}

#[test]
fn data_can_arrive_after_a_failed_render() {
    let (mut slider, container, _charts) =
        slider_with(SliderConfig::new("zoom").with_axes("x", "y"), 400);
    assert!(slider.render().is_err());

    slider.change_data(series()).expect("change data");

    assert_eq!(slider.lifecycle(), SliderLifecycle::Rendered);
    assert_eq!(slider.data().expect("data").len(), 11);
    assert_eq!(container.child_count(), 2);
}

#[test]
fn change_data_rebuilds_the_background_chart() {
    let (mut slider, container, charts) = slider_with(config(), 400);
    slider.render().expect("render");

    let wider = Dataset::from_pairs("x", "y", [(0.0, 1.0), (200.0, 2.0)]);
    slider.change_data(wider).expect("change data");

    let stats = charts.stats();
    assert_eq!(stats.created, 2);
    assert_eq!(stats.destroyed, 1);
    assert_eq!(container.child_count(), 2);
    assert_eq!(
        slider.overlay().expect("overlay").display_text(),
        ("200".to_owned(), "200".to_owned())
    );
}

#[test]
fn detached_container_fails_auto_width_until_attached() {
    let container = MemoryContainer::detached("zoom");
    let mut slider = SliderController::new(
        config(),
        SliderCollaborators::headless(container.clone(), HeadlessChartFactory::new()),
    )
    .expect("construction never touches the container");

    assert!(matches!(
        slider.render(),
        Err(SliderError::ContainerUnavailable(id)) if id == "zoom"
    ));

    container.set_width(320);
    slider.render().expect("render once attached");
    assert_eq!(slider.dom_width(), Some(320));
}

#[test]
fn destroy_empties_container_and_stops_delivery() {
    let (mut slider, container, charts) = slider_with(config(), 400);
    let calls = std::rc::Rc::new(std::cell::Cell::new(0));
    let counter = calls.clone();
    slider.set_on_change(move |_, _| counter.set(counter.get() + 1));
    slider.render().expect("render");

    slider.destroy().expect("destroy");

    assert_eq!(container.child_count(), 0);
    assert_eq!(slider.lifecycle(), SliderLifecycle::Destroyed);
    assert!(!slider.is_listening_for_resize());
    assert!(
        !slider
            .overlay()
            .expect("overlay kept for inspection")
            .is_listening(chart_datazoom::interaction::OverlayEventKind::SliderChange)
    );
    assert!(slider.surface().expect("surface").is_destroyed());
    assert_eq!(charts.stats().destroyed, 1);

    assert!(matches!(
        slider.drag(DragTarget::Filler, -10.0),
        Err(SliderError::Destroyed)
    ));
    assert!(matches!(slider.render(), Err(SliderError::Destroyed)));
    assert!(matches!(slider.destroy(), Err(SliderError::Destroyed)));
    assert_eq!(calls.get(), 0);
}

#[test]
fn vertical_layout_sources_scale_from_discarded_chart() {
    let config = config()
        .with_layout(SliderLayout::Vertical)
        .with_width(SliderWidth::Fixed(60))
        .with_padding(Padding::all(10.0));
    let (mut slider, container, charts) = slider_with(config, 400);

    slider.render().expect("render");

    let geometry = slider.geometry().expect("geometry");
    assert_eq!(geometry.dom_width, 60);
    assert_eq!(geometry.plot_width, 60.0);
    assert_eq!(geometry.plot_height, 40.0);
    assert_eq!(geometry.plot_padding, 10.0);
    assert_eq!(slider.scale().expect("scale").field(), "y");
    assert!(slider.background_chart().is_none());
    assert_eq!(container.children(), vec![NodeKind::SliderSurface]);
    assert_eq!(charts.stats().destroyed, 1);
    assert_eq!(
        slider.overlay().expect("overlay").translation(),
        (0.0, 10.0)
    );
}

#[test]
fn vertical_layout_needs_a_fixed_width() {
    let (mut slider, _container, _charts) =
        slider_with(config().with_layout(SliderLayout::Vertical), 400);
    assert!(matches!(slider.render(), Err(SliderError::InvalidData(_))));
}

#[test]
fn invalid_style_is_rejected_at_construction() {
    let mut config = config();
    config.background_style.stroke = "not-a-color".to_owned();
    let result = SliderController::new(
        config,
        SliderCollaborators::headless(
            MemoryContainer::new("zoom", 400),
            HeadlessChartFactory::new(),
        ),
    );
    assert!(matches!(result, Err(SliderError::InvalidData(_))));
}
