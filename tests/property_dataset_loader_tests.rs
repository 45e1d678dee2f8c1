use std::collections::HashSet;

use feature_atlas::api::normalize_document;
use feature_atlas::core::wrap;
use proptest::prelude::*;
use serde_json::json;

type Entry = (u64, f64, f64, String, Option<Vec<i64>>);

// Quarter steps print as short decimals that parse back exactly.
fn coordinate() -> impl Strategy<Value = f64> {
    (-4_000_000i32..4_000_000).prop_map(|v| f64::from(v) / 4.0)
}

fn entries() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(
        (
            0u64..1_000_000,
            coordinate(),
            coordinate(),
            "[a-z]{1,12}( [a-z]{1,12}){0,8}",
            prop::option::of(prop::collection::vec(-5i64..30, 0..4)),
        ),
        0..40,
    )
    .prop_map(|entries| {
        let mut seen = HashSet::new();
        entries
            .into_iter()
            .filter(|entry| seen.insert(entry.0))
            .collect()
    })
}

fn document(entries: &[Entry]) -> String {
    let body: Vec<String> = entries
        .iter()
        .map(|(key, x, y, description, labels)| {
            let mut record = json!({ "embedding": [x, y], "description": description });
            if let Some(labels) = labels {
                record["labels"] = json!(labels);
            }
            format!("\"{key}\": {record}")
        })
        .collect();
    format!("{{{}}}", body.join(", "))
}

proptest! {
    #[test]
    fn valid_documents_normalize_every_entry(
        entries in entries(),
        wrap_width in 1usize..60
    ) {
        let dataset = normalize_document(&document(&entries), wrap_width).expect("document");
        prop_assert!(dataset.rejections.is_empty());
        prop_assert_eq!(dataset.points.len(), entries.len());

        for (point, (key, x, y, description, labels)) in dataset.points.iter().zip(&entries) {
            prop_assert_eq!(point.index(), *key);
            prop_assert_eq!(point.position(), (*x, *y));
            prop_assert_eq!(point.description(), description.as_str());
            let expected_wrap = wrap(description, wrap_width);
            prop_assert_eq!(point.wrapped_description(), expected_wrap.as_str());
            let expected_labels = labels.clone().unwrap_or_default();
            prop_assert_eq!(point.labels(), expected_labels.as_slice());
        }
    }

    #[test]
    fn non_numeric_keys_are_rejected_without_touching_valid_entries(
        entries in entries(),
        bad_key in "[a-z_-]{1,6}"
    ) {
        let mut text = document(&entries);
        let bad = format!("\"{bad_key}\": {{\"embedding\": [0, 0], \"description\": \"x\"}}");
        text = if entries.is_empty() {
            format!("{{{bad}}}")
        } else {
            format!("{{{bad}, {}", &text[1..])
        };

        let dataset = normalize_document(&text, 50).expect("document");
        prop_assert_eq!(dataset.points.len(), entries.len());
        prop_assert_eq!(dataset.rejections.len(), 1);
        prop_assert_eq!(dataset.rejections[0].key.as_str(), bad_key.as_str());
    }
}
