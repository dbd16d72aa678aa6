use chart_datazoom::api::{
    HeadlessChartFactory, MemoryContainer, SLIDER_SNAPSHOT_JSON_SCHEMA_V1, SliderCollaborators,
    SliderConfig, SliderController, SliderSnapshot,
};
use chart_datazoom::core::{
    Dataset, DomainValue, LabelFormat, ScaleKind, ScaleOptions, SeriesKind, SliderLayout,
    SliderWidth,
};
use smallvec::smallvec;

#[test]
fn partial_host_config_merges_over_defaults() {
    let config = SliderConfig::from_json_str(
        r##"{
            "container": "zoom",
            "xAxis": "date",
            "yAxis": "value",
            "height": 30,
            "padding": [10, 20],
            "start": "2017-01-01",
            "fillerStyle": { "fill": "#FF0000" },
            "backgroundChart": { "type": "line" },
            "handleStyle": { "img": "handle.png" }
        }"##,
    )
    .expect("config should parse");

    assert_eq!(config.container, "zoom");
    assert_eq!(config.x_axis.as_deref(), Some("date"));
    assert_eq!(config.y_axis.as_deref(), Some("value"));
    assert_eq!(config.width, SliderWidth::Auto);
    assert_eq!(config.height, 30);
    assert_eq!(config.padding.to_array(), [10.0, 20.0, 10.0, 20.0]);
    assert_eq!(config.start, Some(DomainValue::from("2017-01-01")));
    assert_eq!(config.end, None);
    assert_eq!(config.layout, SliderLayout::Horizontal);

    assert_eq!(config.filler_style.fill, "#FF0000");
    assert_eq!(config.filler_style.fill_opacity, 0.3);
    assert_eq!(config.background_style.stroke, "#CCD6EC");
    assert_eq!(config.text_style.font_size, 10.0);

    let series: smallvec::SmallVec<[SeriesKind; 2]> = smallvec![SeriesKind::Line];
    assert_eq!(config.background_chart.series, series);
    assert_eq!(config.background_chart.color, "#CCD6EC");
    assert!(config.background_chart.visible);

    // A configured handle style replaces the default one, so sizes come
    // from the slider height.
    let handle = config.handle_style.resolve(config.height);
    assert_eq!(handle.img.as_deref(), Some("handle.png"));
    assert_eq!(handle.width, 30.0);
    assert_eq!(handle.height, 30.0);
}

#[test]
fn default_handle_keeps_its_width() {
    let config = SliderConfig::default();
    let handle = config.handle_style.resolve(config.height);
    assert_eq!(handle.width, 5.0);
    assert_eq!(handle.height, 26.0);
    assert!(handle.img.is_some());
    assert_eq!(config.padding.to_array(), [20.0, 20.0, 95.0, 80.0]);
}

#[test]
fn background_chart_accepts_a_type_list() {
    let config = SliderConfig::from_json_str(
        r#"{ "background_chart": { "type": ["area", "interval"], "visible": false } }"#,
    )
    .expect("config should parse");
    let series: smallvec::SmallVec<[SeriesKind; 2]> =
        smallvec![SeriesKind::Area, SeriesKind::Interval];
    assert_eq!(config.background_chart.series, series);
    assert!(!config.background_chart.visible);
}

#[test]
fn config_json_roundtrip() {
    let config = SliderConfig::new("zoom")
        .with_axes("x", "y")
        .with_width(SliderWidth::Fixed(480))
        .with_layout(SliderLayout::Vertical)
        .with_selection(Some(DomainValue::from(2.0)), Some(DomainValue::from("8")))
        .with_scale(
            "x",
            ScaleOptions {
                kind: Some(ScaleKind::Linear),
                format: LabelFormat::FixedDecimals { precision: 2 },
            },
        )
        .with_data(Dataset::from_pairs("x", "y", [(1.0, 2.0), (3.0, 4.0)]));

    let json = config.to_json_pretty().expect("serialize");
    assert_eq!(SliderConfig::from_json_str(&json).expect("parse"), config);

    let contract = config.to_json_contract_v1_pretty().expect("serialize contract");
    assert!(contract.contains("\"schema_version\": 1"));
    assert_eq!(
        SliderConfig::from_json_compat_str(&contract).expect("parse contract"),
        config
    );
    assert_eq!(
        SliderConfig::from_json_compat_str(&json).expect("parse bare"),
        config
    );
}

#[test]
fn unknown_config_schema_is_rejected() {
    let result = SliderConfig::from_json_compat_str(r#"{ "schema_version": 9, "config": {} }"#);
    assert!(result.is_err());
}

#[test]
fn fixed_decimals_shape_handle_text() {
    let config = SliderConfig::new("zoom")
        .with_axes("x", "y")
        .with_data(Dataset::from_pairs("x", "y", [(0.0, 1.0), (3.0, 2.0)]))
        .with_scale(
            "x",
            ScaleOptions {
                kind: None,
                format: LabelFormat::FixedDecimals { precision: 2 },
            },
        );
    let mut slider = SliderController::new(
        config,
        SliderCollaborators::headless(
            MemoryContainer::new("zoom", 400),
            HeadlessChartFactory::new(),
        ),
    )
    .expect("slider init");
    slider.render().expect("render");
    assert_eq!(
        slider.overlay().expect("overlay").display_text(),
        ("3.00".to_owned(), "3.00".to_owned())
    );
}

#[test]
fn snapshot_json_contract_roundtrip() {
    let mut slider = SliderController::new(
        SliderConfig::new("zoom")
            .with_axes("x", "y")
            .with_data(Dataset::from_pairs("x", "y", [(0.0, 1.0), (10.0, 2.0)])),
        SliderCollaborators::headless(
            MemoryContainer::new("zoom", 400),
            HeadlessChartFactory::new(),
        ),
    )
    .expect("slider init");
    slider.render().expect("render");

    let snapshot = slider.snapshot();
    assert!(snapshot.surface_mounted);
    assert!(snapshot.background_mounted);
    assert!(snapshot.listening_for_resize);
    assert_eq!(snapshot.records_len, 2);
    assert_eq!(
        snapshot.display_text,
        Some(("10".to_owned(), "10".to_owned()))
    );

    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("serialize snapshot");
    assert!(json.contains(&format!(
        "\"schema_version\": {SLIDER_SNAPSHOT_JSON_SCHEMA_V1}"
    )));
    let restored = SliderSnapshot::from_json_compat_str(&json).expect("parse snapshot");
    assert_eq!(restored, snapshot);
}
