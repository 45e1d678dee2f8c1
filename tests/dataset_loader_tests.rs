use std::fs;

use feature_atlas::api::{
    DataSource, RejectionReason, load_points, normalize_document, try_load_dataset,
};
use feature_atlas::AtlasError;

const SAMPLE: &str = r#"{
    "12": {"embedding": [1.5, -3.0], "description": "pacemaker leads projected over the heart", "labels": [11, 999]},
    "3": {"embedding": [0.0, 2.0], "description": "hyperinflated lungs", "labels": null},
    "40": {"embedding": [-7.25, 4.0], "description": "no finding"},
    "7": {"embedding": [2.0, 2.0], "description": "", "labels": []}
}"#;

#[test]
fn records_keep_document_order_and_index_from_key() {
    let dataset = normalize_document(SAMPLE, 50).expect("document");
    assert!(dataset.rejections.is_empty());

    let indexes: Vec<u64> = dataset.points.iter().map(|p| p.index()).collect();
    assert_eq!(indexes, vec![12, 3, 40, 7]);

    let first = &dataset.points[0];
    assert_eq!(first.position(), (1.5, -3.0));
    assert_eq!(first.labels(), &[11, 999]);
    assert_eq!(
        first.description(),
        "pacemaker leads projected over the heart"
    );
}

#[test]
fn absent_null_and_empty_labels_all_normalize_to_empty() {
    let dataset = normalize_document(SAMPLE, 50).expect("document");
    for point in &dataset.points[1..] {
        assert!(point.labels().is_empty(), "index {}", point.index());
    }
}

#[test]
fn wrapped_description_uses_configured_width() {
    let dataset = normalize_document(SAMPLE, 12).expect("document");
    assert_eq!(
        dataset.points[0].wrapped_description(),
        "pacemaker<br>leads<br>projected<br>over the<br>heart"
    );
    assert_eq!(dataset.points[3].wrapped_description(), "");
}

#[test]
fn bad_keys_and_malformed_records_are_excluded_individually() {
    let text = r#"{
        "1": {"embedding": [0, 0], "description": "ok"},
        "abc": {"embedding": [0, 0], "description": "bad key"},
        "-4": {"embedding": [0, 0], "description": "negative key"},
        "2": {"embedding": [0], "description": "short embedding"},
        "3": {"embedding": [0, "x"], "description": "non numeric"},
        "4": {"description": "missing embedding"},
        "5": {"embedding": [0, 0]},
        "6": {"embedding": [0, 0], "description": "bad labels", "labels": "11"},
        "8": 17,
        "9": {"embedding": [3, 4], "description": "also ok", "labels": [12]}
    }"#;

    let dataset = normalize_document(text, 50).expect("document");
    let indexes: Vec<u64> = dataset.points.iter().map(|p| p.index()).collect();
    assert_eq!(indexes, vec![1, 9]);
    assert_eq!(dataset.rejections.len(), 8);

    let invalid_keys: Vec<&str> = dataset
        .rejections
        .iter()
        .filter(|r| r.reason == RejectionReason::InvalidKey)
        .map(|r| r.key.as_str())
        .collect();
    assert_eq!(invalid_keys, vec!["abc", "-4"]);
    assert!(
        dataset
            .rejections
            .iter()
            .filter(|r| r.reason != RejectionReason::InvalidKey)
            .all(|r| matches!(r.reason, RejectionReason::MalformedRecord(_)))
    );
}

#[test]
fn non_object_documents_fail_as_a_whole() {
    for text in ["[]", "42", "not json", r#"{"1": "#] {
        let err = normalize_document(text, 50).expect_err(text);
        assert!(matches!(err, AtlasError::Json(_)), "{text}: {err}");
    }
}

#[test]
fn empty_object_yields_empty_dataset() {
    let dataset = normalize_document("{}", 50).expect("document");
    assert!(dataset.points.is_empty());
    assert!(dataset.rejections.is_empty());
}

#[tokio::test]
async fn loads_points_from_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("features.json");
    fs::write(&path, SAMPLE).expect("write dataset");

    let points = load_points(&DataSource::File(path), 50).await;
    assert_eq!(points.len(), 4);
    assert_eq!(points[2].index(), 40);
}

#[tokio::test]
async fn missing_file_degrades_to_empty_points() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = DataSource::File(dir.path().join("absent.json"));

    let err = try_load_dataset(&source, 50).await.expect_err("missing");
    assert!(matches!(err, AtlasError::Io { .. }));
    assert!(load_points(&source, 50).await.is_empty());
}

#[tokio::test]
async fn malformed_document_degrades_to_empty_points() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("features.json");
    fs::write(&path, "[1, 2, 3]").expect("write dataset");

    assert!(load_points(&DataSource::File(path), 50).await.is_empty());
}

#[tokio::test]
async fn repeated_loads_are_independent() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("features.json");
    fs::write(&path, SAMPLE).expect("write dataset");
    let source = DataSource::File(path.clone());

    let first = load_points(&source, 50).await;
    fs::write(&path, r#"{"5": {"embedding": [1, 1], "description": "x"}}"#)
        .expect("rewrite dataset");
    let second = load_points(&source, 50).await;

    assert_eq!(first.len(), 4);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].index(), 5);
}

#[tokio::test]
async fn out_of_range_coordinate_costs_only_its_record() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("features.json");
    fs::write(
        &path,
        r#"{
            "1": {"embedding": [0, 0], "description": "kept", "labels": [11]},
            "2": {"embedding": [1e400, 0], "description": "overflowing coordinate"}
        }"#,
    )
    .expect("write dataset");
    let source = DataSource::File(path);

    let dataset = try_load_dataset(&source, 50).await.expect("dataset");
    assert_eq!(dataset.points.len(), 1);
    assert_eq!(dataset.points[0].index(), 1);
    assert_eq!(dataset.rejections.len(), 1);
    assert_eq!(dataset.rejections[0].key, "2");
    assert!(matches!(
        dataset.rejections[0].reason,
        RejectionReason::MalformedRecord(_)
    ));

    assert_eq!(load_points(&source, 50).await.len(), 1);
}
