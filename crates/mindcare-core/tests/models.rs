use mindcare_core::error::CoreError;
use mindcare_core::models::analysis::AnalysisResult;
use mindcare_core::models::scores::{Subscale, SubscaleScores, SUBSCALE_MAX};
use mindcare_core::models::severity::{SeverityBand, SeverityLabel};

#[test]
fn named_labels_map_to_their_band() {
    assert_eq!(SeverityBand::from_label("Normal"), SeverityBand::Normal);
    assert_eq!(SeverityBand::from_label("Mild"), SeverityBand::Mild);
    assert_eq!(SeverityBand::from_label("Moderate"), SeverityBand::Moderate);
}

#[test]
fn any_other_label_is_severe() {
    for label in ["Severe", "Extremely Severe", "normal", "MILD", "unknown"] {
        assert_eq!(SeverityBand::from_label(label), SeverityBand::Severe, "{label}");
    }
}

#[test]
fn empty_label_is_rejected() {
    assert!(matches!(SeverityLabel::new(""), Err(CoreError::EmptyLabel)));
}

#[test]
fn status_text_is_upper_cased() {
    let label = SeverityLabel::new("Moderate").unwrap();
    assert_eq!(label.status_text(), "MODERATE");
    assert_eq!(label.to_string(), "Moderate");
}

#[test]
fn label_serializes_as_plain_string() {
    let label = SeverityLabel::new("Mild").unwrap();
    assert_eq!(serde_json::to_string(&label).unwrap(), "\"Mild\"");
}

#[test]
fn deserialized_labels_are_validated() {
    let label: SeverityLabel = serde_json::from_str("\"Severe\"").unwrap();
    assert_eq!(label.as_str(), "Severe");

    let err = serde_json::from_str::<SeverityLabel>("\"\"").unwrap_err();
    assert!(err.to_string().contains(&CoreError::EmptyLabel.to_string()));

    let json = serde_json::json!({
        "label": "",
        "scores": { "stress": 0, "anxiety": 0, "depression": 0 },
        "recommendations": [],
        "analyzed_at": "2026-10-18T09:30:00Z",
    });
    assert!(serde_json::from_value::<AnalysisResult>(json).is_err());
}

#[test]
fn scores_iterate_in_display_order() {
    let scores = SubscaleScores {
        stress: 12,
        anxiety: 5,
        depression: 3,
    };
    let listed: Vec<_> = scores.iter().collect();
    assert_eq!(
        listed,
        vec![
            (Subscale::Stress, 12),
            (Subscale::Anxiety, 5),
            (Subscale::Depression, 3),
        ]
    );
}

#[test]
fn validate_rejects_totals_above_max() {
    let scores = SubscaleScores {
        stress: 0,
        anxiety: SUBSCALE_MAX + 1,
        depression: 0,
    };
    match scores.validate() {
        Err(CoreError::ScoreOutOfRange { subscale, value, .. }) => {
            assert_eq!(subscale, Subscale::Anxiety);
            assert_eq!(value, 16);
        }
        other => panic!("expected ScoreOutOfRange, got {other:?}"),
    }

    let max = SubscaleScores {
        stress: SUBSCALE_MAX,
        anxiety: SUBSCALE_MAX,
        depression: SUBSCALE_MAX,
    };
    assert!(max.validate().is_ok());
}

#[test]
fn analysis_result_round_trips_through_json() {
    let result = AnalysisResult {
        label: SeverityLabel::new("Normal").unwrap(),
        scores: SubscaleScores::default(),
        recommendations: vec!["Maintain a balanced daily routine.".to_string()],
        analyzed_at: "2026-01-05T10:00:00Z".parse().unwrap(),
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["label"], "Normal");
    assert_eq!(json["scores"]["stress"], 0);

    let back: AnalysisResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
    assert_eq!(back.band(), SeverityBand::Normal);
}
