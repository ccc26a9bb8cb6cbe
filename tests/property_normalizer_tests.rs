use proptest::prelude::*;
use rallyplot::core::{
    AxisLabels, AxisMode, AxisTransition, Rgba, normalize, normalize_required_color,
};

proptest! {
    #[test]
    fn partial_colors_are_padded_with_zero_and_opaque_alpha(
        components in prop::collection::vec(0.0f64..=1.0, 1..=4)
    ) {
        let color = normalize_required_color(components.clone()).expect("valid color");
        let channels = color.to_array();
        for (index, channel) in channels.iter().enumerate() {
            let expected = match components.get(index) {
                Some(value) => *value as f32,
                None if index == 3 => 1.0,
                None => 0.0,
            };
            prop_assert_eq!(*channel, expected);
        }
    }

    #[test]
    fn canonical_colors_are_fixed_points(
        red in 0.0f32..=1.0,
        green in 0.0f32..=1.0,
        blue in 0.0f32..=1.0,
        alpha in 0.0f32..=1.0
    ) {
        let color = Rgba::rgba(red, green, blue, alpha);
        let again = normalize_required_color(color).expect("canonical color");
        prop_assert_eq!(again, color);
    }

    #[test]
    fn out_of_range_components_are_rejected(
        prefix in prop::collection::vec(0.0f64..=1.0, 0..3),
        bad in prop_oneof![1.0001f64..100.0, -100.0f64..-0.0001]
    ) {
        let mut components = prefix;
        components.push(bad);
        prop_assert!(normalize_required_color(components).is_err());
    }

    #[test]
    fn normalized_series_preserve_length_and_order(
        values in prop::collection::vec(-1.0e6f64..1.0e6, 1..256)
    ) {
        let buffer = normalize(&values).expect("numeric series");
        prop_assert_eq!(buffer.len(), values.len());
        for (sample, value) in buffer.iter().zip(&values) {
            prop_assert_eq!(*sample, *value as f32);
        }
    }

    #[test]
    fn label_kind_never_changes_once_committed(
        first in prop::collection::vec("[a-z]{1,6}", 1..16),
        second in prop::collection::vec("[a-z]{1,6}", 1..16),
        seconds in prop::collection::vec(0i64..1_000_000, 1..16)
    ) {
        let committed = AxisMode::Unset
            .resolve(Some(&AxisLabels::Strings(first.clone())))
            .expect("first labels")
            .next;

        let again = committed
            .resolve(Some(&AxisLabels::Strings(second.clone())))
            .expect("same kind");
        let expected = if first == second {
            AxisTransition::Unchanged
        } else {
            AxisTransition::Replaced
        };
        prop_assert_eq!(again.transition, expected);
        prop_assert_eq!(again.next, AxisMode::StringLabeled(second));

        let times = seconds
            .iter()
            .filter_map(|s| chrono::DateTime::from_timestamp(*s, 0))
            .collect::<Vec<_>>();
        prop_assert!(committed.resolve(Some(&AxisLabels::Timestamps(times))).is_err());
        prop_assert_eq!(
            committed.resolve(None).expect("no labels").transition,
            AxisTransition::Unchanged
        );
    }
}
