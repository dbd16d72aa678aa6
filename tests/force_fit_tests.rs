use std::time::{Duration, Instant};

use chart_datazoom::SliderError;
use chart_datazoom::api::{
    Container, FORCE_FIT_DEBOUNCE, HeadlessChartFactory, MemoryContainer, SliderCollaborators, SliderConfig,
    SliderController,
};
use chart_datazoom::core::{Dataset, DomainValue, SliderWidth};
use chart_datazoom::interaction::DragTarget;

fn rendered(
    config: SliderConfig,
    width: u32,
) -> (SliderController, MemoryContainer, HeadlessChartFactory) {
    let container = MemoryContainer::new("zoom", width);
    let charts = HeadlessChartFactory::new();
    let mut slider = SliderController::new(
        config,
        SliderCollaborators::headless(container.clone(), charts.clone()),
    )
    .expect("slider init");
    slider.render().expect("render");
    (slider, container, charts)
}

fn config() -> SliderConfig {
    SliderConfig::new("zoom")
        .with_axes("x", "y")
        .with_data(Dataset::from_pairs(
            "x",
            "y",
            (0..=20).map(|i| (f64::from(i) * 5.0, f64::from(i % 5))),
        ))
        .with_selection(Some(DomainValue::from(25.0)), Some(DomainValue::from(75.0)))
}

#[test]
fn unchanged_width_is_a_no_op() {
    let (mut slider, _container, charts) = rendered(config(), 400);
    let draws = slider.surface().expect("surface").draw_count();
    let before = slider.snapshot();

    assert!(!slider.force_fit().expect("force fit"));

    assert_eq!(slider.snapshot(), before);
    assert_eq!(slider.dom_width(), Some(400));
    assert_eq!(slider.surface().expect("surface").draw_count(), draws);
    assert_eq!(charts.stats().created, 1);
    assert_eq!(charts.stats().width_changes, 0);
}

#[test]
fn width_change_reflows_without_rebuilding_the_chart() {
    let (mut slider, container, charts) = rendered(config(), 400);
    let scale = slider.scale().expect("scale");
    container.set_width(600);

    assert!(slider.force_fit().expect("force fit"));

    let geometry = slider.geometry().expect("geometry");
    assert_eq!(geometry.dom_width, 600);
    assert_eq!(geometry.plot_width, 500.0);
    assert_eq!(slider.surface().expect("surface").viewport().width, 600);
    let stats = charts.stats();
    assert_eq!(stats.created, 1);
    assert_eq!(stats.destroyed, 0);
    assert_eq!(stats.width_changes, 1);
    assert!(std::rc::Rc::ptr_eq(&scale, &slider.scale().expect("scale")));
    assert_eq!(slider.range().expect("range").to_array(), [25.0, 75.0]);
    assert_eq!(container.child_count(), 2);

    let frame = slider
        .surface()
        .expect("surface")
        .last_frame()
        .expect("frame");
    // Filler starts a quarter into the 500px plot.
    assert_eq!(frame.rects[1].x, 80.0 + 125.0);
}

#[test]
fn reflow_keeps_a_dragged_selection() {
    let (mut slider, container, _charts) = rendered(config(), 400);
    slider.drag(DragTarget::Filler, 10.0).expect("drag");
    container.set_width(300);

    assert!(slider.force_fit().expect("force fit"));

    assert_eq!(slider.range().expect("range").to_array(), [35.0, 85.0]);
    assert_eq!(
        slider.overlay().expect("overlay").display_text(),
        ("35".to_owned(), "85".to_owned())
    );
}

#[test]
fn resize_is_debounced() {
    let (mut slider, container, charts) = rendered(config(), 400);
    let start = Instant::now();
    assert!(slider.is_listening_for_resize());

    container.set_width(500);
    assert!(slider.window_resized(start));
    assert!(slider.window_resized(start + Duration::from_millis(120)));
    assert!(slider.has_pending_force_fit());

    assert!(
        !slider
            .poll_timers(start + Duration::from_millis(250))
            .expect("poll")
    );
    assert_eq!(slider.dom_width(), Some(400));

    assert!(
        slider
            .poll_timers(start + Duration::from_millis(120) + FORCE_FIT_DEBOUNCE)
            .expect("poll")
    );
    assert_eq!(slider.dom_width(), Some(500));
    assert!(!slider.has_pending_force_fit());
    assert_eq!(charts.stats().width_changes, 1);
}

#[test]
fn fixed_width_never_listens_for_resize() {
    let (mut slider, container, _charts) =
        rendered(config().with_width(SliderWidth::Fixed(320)), 400);
    assert!(!slider.is_listening_for_resize());
    assert!(!slider.window_resized(Instant::now()));

    container.set_width(900);
    assert!(!slider.force_fit().expect("force fit"));
    assert_eq!(slider.dom_width(), Some(320));
}

#[test]
fn destroy_cancels_a_pending_fit() {
    let (mut slider, container, charts) = rendered(config(), 400);
    let start = Instant::now();
    container.set_width(500);
    assert!(slider.window_resized(start));

    slider.destroy().expect("destroy");

    assert!(!slider.has_pending_force_fit());
    assert!(
        !slider
            .poll_timers(start + Duration::from_secs(1))
            .expect("late timer is inert")
    );
    assert!(!slider.window_resized(start + Duration::from_secs(2)));
    assert_eq!(charts.stats().width_changes, 0);
}

#[test]
fn force_fit_before_render_does_nothing() {
    let mut slider = SliderController::new(
        config(),
        SliderCollaborators::headless(
            MemoryContainer::new("zoom", 400),
            HeadlessChartFactory::new(),
        ),
    )
    .expect("slider init");
    assert!(!slider.force_fit().expect("force fit"));
    assert!(slider.geometry().is_none());
}

#[test]
fn container_narrower_than_padding_collapses_the_plot() {
    let (mut slider, container, _charts) = rendered(config(), 400);
    container.set_width(90);

    assert!(slider.force_fit().expect("force fit"));

    let geometry = slider.geometry().expect("geometry");
    assert_eq!(geometry.dom_width, 90);
    assert_eq!(geometry.plot_width, 0.0);
    let surface = slider.surface().expect("surface");
    assert_eq!(surface.groups().len(), 1);
    assert_eq!(slider.overlay().expect("overlay").range().to_array(), [25.0, 75.0]);
    assert!(!slider.force_fit().expect("second force fit"));

    let (fresh, _container, _charts) = rendered(config(), 90);
    assert_eq!(fresh.geometry(), Some(geometry));
}

#[test]
fn failed_refit_keeps_the_previous_layout() {
    let (mut slider, container, charts) = rendered(config(), 400);
    let draws = slider.surface().expect("surface").draw_count();
    let before = slider.snapshot();
    container.set_width(0);

    assert!(matches!(
        slider.force_fit(),
        Err(SliderError::InvalidViewport { width: 0, .. })
    ));

    assert_eq!(slider.snapshot(), before);
    assert_eq!(slider.dom_width(), Some(400));
    let surface = slider.surface().expect("surface");
    assert_eq!(surface.viewport().width, 400);
    assert_eq!(surface.draw_count(), draws);
    assert_eq!(surface.groups().len(), 1);
    assert_eq!(charts.stats().width_changes, 0);

    container.set_width(500);
    assert!(slider.force_fit().expect("retry"));
    assert_eq!(slider.dom_width(), Some(500));
}
