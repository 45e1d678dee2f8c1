use feature_atlas::core::{CategoryCatalog, Emphasis, PointRecord, compute_point_styles};
use feature_atlas::render::ScatterStyle;
use proptest::prelude::*;

fn labelled_points() -> impl Strategy<Value = Vec<Vec<i64>>> {
    prop::collection::vec(prop::collection::vec(-3i64..30, 0..5), 0..60)
}

proptest! {
    #[test]
    fn emphasis_matches_valid_label_membership(
        labels in labelled_points(),
        selected in prop::option::of(-3i64..30)
    ) {
        let catalog = CategoryCatalog::clinical();
        let points: Vec<PointRecord> = labels
            .iter()
            .enumerate()
            .map(|(i, labels)| PointRecord::new(i as u64, 0.0, 0.0, "p", labels.clone(), 50))
            .collect();

        let styles = compute_point_styles(&points, selected, catalog, &ScatterStyle::default());
        prop_assert_eq!(styles.len(), points.len());

        for (point, style) in points.iter().zip(&styles) {
            let expected = match selected {
                None => Emphasis::Unfiltered,
                Some(id) if catalog.contains(id) && point.labels().contains(&id) => {
                    Emphasis::Highlighted
                }
                Some(_) => Emphasis::Dimmed,
            };
            prop_assert_eq!(style.emphasis, expected);
        }
    }

    #[test]
    fn styles_are_a_pure_function_of_inputs(
        labels in labelled_points(),
        selected in prop::option::of(0i64..25)
    ) {
        let points: Vec<PointRecord> = labels
            .into_iter()
            .map(|labels| PointRecord::new(0, 1.0, 2.0, "p", labels, 50))
            .collect();
        let style = ScatterStyle::default();
        let catalog = CategoryCatalog::clinical();
        prop_assert_eq!(
            compute_point_styles(&points, selected, catalog, &style),
            compute_point_styles(&points, selected, catalog, &style)
        );
    }
}
