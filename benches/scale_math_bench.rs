use chart_datazoom::api::{
    HeadlessChartFactory, MemoryContainer, SliderCollaborators, SliderConfig, SliderController,
};
use chart_datazoom::core::{
    Dataset, DomainValue, LinearScale, PlotArea, Scale, project_area_geometry, project_vertices,
};
use chart_datazoom::interaction::DragTarget;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn series(points: u32) -> Dataset {
    Dataset::from_pairs(
        "x",
        "y",
        (0..points).map(|i| (f64::from(i), 100.0 + f64::from(i % 97) * 0.5)),
    )
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new(0.0, 10_000.0).expect("valid scale");
    let value = DomainValue::from(4_321.123);

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let ratio = scale.scale(black_box(&value)).expect("to ratio");
            let _ = scale.invert(ratio).expect("from ratio");
        })
    });
}

fn bench_area_projection_10k(c: &mut Criterion) {
    let data = series(10_000);
    let x_scale = LinearScale::from_values("x", data.field_values("x")).expect("x scale");
    let y_scale = LinearScale::from_values("y", data.field_values("y")).expect("y scale");
    let area = PlotArea::new(80.0, 0.0, 1_600.0, 26.0);

    c.bench_function("area_projection_10k", |b| {
        b.iter(|| {
            let vertices = project_vertices(
                black_box(&data).field_pairs("x", "y"),
                &x_scale,
                &y_scale,
                black_box(area),
            );
            let _ = project_area_geometry(&vertices, area);
        })
    });
}

fn bench_slider_drag_2k(c: &mut Criterion) {
    let mut slider = SliderController::new(
        SliderConfig::new("zoom")
            .with_axes("x", "y")
            .with_data(series(2_000))
            .with_selection(Some(DomainValue::from(500.0)), Some(DomainValue::from(1_500.0))),
        SliderCollaborators::headless(
            MemoryContainer::new("zoom", 1_600),
            HeadlessChartFactory::new(),
        ),
    )
    .expect("slider init");
    slider.render().expect("render");
    slider.set_on_change(|start, end| {
        black_box((start, end));
    });

    let mut step = 1.0;
    c.bench_function("slider_drag_2k", |b| {
        b.iter(|| {
            step = -step;
            let _ = slider
                .drag(DragTarget::Filler, black_box(step))
                .expect("drag should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_area_projection_10k,
    bench_slider_drag_2k
);
criterion_main!(benches);
