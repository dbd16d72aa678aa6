use approx::relative_eq;
use chart_datazoom::api::SliderConfig;
use chart_datazoom::core::{
    CategoryScale, DomainValue, LinearScale, Scale, Selection, SliderLayout, SliderRange,
    TimeScale, initial_range,
};
use chart_datazoom::interaction::{
    DragTarget, OverlayEventKind, OverlayOptions, RangeElement, RangeOverlay,
};
use proptest::prelude::*;

fn drag_target() -> impl Strategy<Value = DragTarget> {
    prop_oneof![
        Just(DragTarget::MinHandle),
        Just(DragTarget::MaxHandle),
        Just(DragTarget::Filler),
    ]
}

fn range_element(min: f64, max: f64) -> RangeElement {
    let style = SliderConfig::default()
        .overlay_style()
        .expect("default style resolves");
    RangeElement::new(OverlayOptions {
        range: SliderRange::new(min, max).expect("range"),
        layout: SliderLayout::Horizontal,
        width: 300.0,
        height: 26.0,
        style,
        min_text: String::new(),
        max_text: String::new(),
    })
    .expect("overlay")
}

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let scale = LinearScale::new(domain_start, domain_start + domain_span).expect("scale");
        let value = domain_start + value_factor * domain_span;

        let ratio = scale.scale(&DomainValue::from(value)).expect("to ratio");
        let recovered = scale
            .invert(ratio)
            .expect("from ratio")
            .as_number()
            .expect("number");

        prop_assert!((recovered - value).abs() <= 1e-7);
    }

    #[test]
    fn time_scale_round_trip_property(
        start_ms in 0.0f64..4_000_000_000_000.0,
        span_ms in 86_400_000.0f64..1_000_000_000_000.0,
        ratio in 0.0f64..1.0
    ) {
        let scale = TimeScale::new(start_ms, start_ms + span_ms).expect("scale");

        let value = scale.invert(ratio).expect("from ratio");
        let recovered = scale.scale(&value).expect("to ratio");

        prop_assert!(relative_eq!(recovered, ratio, epsilon = 1e-9));
    }

    #[test]
    fn category_scale_round_trip_property(count in 1usize..64, index_seed in 0usize..64) {
        let names: Vec<String> = (0..count).map(|i| format!("c{i}")).collect();
        let scale = CategoryScale::new(names.iter().cloned()).expect("scale");
        let index = index_seed % count;

        let ratio = scale.scale(&DomainValue::from(names[index].as_str())).expect("to ratio");
        let recovered = scale.invert(ratio).expect("from ratio");

        prop_assert_eq!(recovered, DomainValue::from(names[index].as_str()));
    }

    #[test]
    fn initial_range_is_ordered_and_bounded(
        start in proptest::option::of(-500.0f64..1_500.0),
        end in proptest::option::of(-500.0f64..1_500.0)
    ) {
        let scale = LinearScale::new(0.0, 1_000.0).expect("scale");
        let selection = Selection::new(start.map(DomainValue::from), end.map(DomainValue::from));

        let range = initial_range(&scale, &selection).expect("range");

        prop_assert!(range.min() >= 0.0);
        prop_assert!(range.max() <= 100.0);
        prop_assert!(range.min() <= range.max());
        if start.is_none() && end.is_none() {
            prop_assert_eq!(range.to_array(), [100.0, 100.0]);
        }
    }

    #[test]
    fn drags_keep_the_range_ordered_and_bounded(
        min in 0.0f64..100.0,
        span in 0.0f64..100.0,
        drags in proptest::collection::vec((drag_target(), -150.0f64..150.0), 1..24)
    ) {
        let max = (min + span).min(100.0);
        let mut overlay = range_element(min, max);
        overlay.on(OverlayEventKind::SliderChange);

        for (target, delta) in drags {
            let before = overlay.range();
            let event = overlay.drag(target, delta);
            let after = overlay.range();

            prop_assert!(after.min() >= 0.0);
            prop_assert!(after.max() <= 100.0);
            prop_assert!(after.min() <= after.max());
            prop_assert_eq!(event.is_some(), after != before);
            if target == DragTarget::Filler && after != before {
                prop_assert!(relative_eq!(
                    after.span(),
                    before.span(),
                    epsilon = 1e-9
                ));
            }
        }
    }
}
