use mindcare_core::models::scores::SubscaleScores;
use mindcare_core::models::severity::{SeverityBand, SeverityLabel};
use mindcare_instruments::guidance::{
    clinical_interpretation, guidance, high_score_advice, next_steps, recommendations,
    HIGH_SCORE_THRESHOLD,
};

const STRESS_ADVICE: &str = "High stress detected: prioritize rest and workload management.";
const ANXIETY_ADVICE: &str = "High anxiety detected: practice breathing and grounding exercises.";
const DEPRESSION_ADVICE: &str =
    "High depression indicators detected: professional support is strongly recommended.";

fn label(s: &str) -> SeverityLabel {
    SeverityLabel::new(s).unwrap()
}

fn scores(stress: u8, anxiety: u8, depression: u8) -> SubscaleScores {
    SubscaleScores {
        stress,
        anxiety,
        depression,
    }
}

#[test]
fn low_scores_yield_only_the_label_pair() {
    let recs = recommendations(&label("Normal"), &scores(0, 0, 0));
    assert_eq!(
        recs,
        vec![
            "Maintain a balanced daily routine.",
            "Continue engaging in hobbies and physical activities.",
        ]
    );
}

#[test]
fn unknown_labels_use_the_severe_pair() {
    let recs = recommendations(&label("Severe"), &scores(0, 0, 0));
    assert_eq!(recs[0], "Seek immediate consultation with a mental health professional.");
    assert_eq!(recs, recommendations(&label("Extremely Severe"), &scores(0, 0, 0)));
}

#[test]
fn threshold_items_follow_label_items_in_subscale_order() {
    let recs = recommendations(&label("Moderate"), &scores(15, 11, 13));
    assert_eq!(recs.len(), 5);
    assert_eq!(recs[0], "Follow structured stress-management techniques.");
    assert_eq!(recs[1], "Consider professional counseling services.");
    assert_eq!(recs[2], STRESS_ADVICE);
    assert_eq!(recs[3], ANXIETY_ADVICE);
    assert_eq!(recs[4], DEPRESSION_ADVICE);
}

#[test]
fn depression_threshold_is_inclusive_at_eleven() {
    let at = recommendations(&label("Mild"), &scores(0, 0, 11));
    assert!(at.iter().any(|r| r == DEPRESSION_ADVICE));

    let below = recommendations(&label("Mild"), &scores(0, 0, 10));
    assert!(!below.iter().any(|r| r == DEPRESSION_ADVICE));
}

#[test]
fn each_threshold_fires_independently() {
    for stress in 0..=15u8 {
        let recs = recommendations(&label("Normal"), &scores(stress, 3, 3));
        let has = recs.iter().any(|r| r == STRESS_ADVICE);
        assert_eq!(has, stress >= HIGH_SCORE_THRESHOLD, "stress={stress}");
        assert!(!recs.iter().any(|r| r == ANXIETY_ADVICE || r == DEPRESSION_ADVICE));
    }
}

#[test]
fn recommendations_are_deterministic() {
    let l = label("Mild");
    let s = scores(12, 4, 11);
    assert_eq!(recommendations(&l, &s), recommendations(&l, &s));
}

#[test]
fn every_band_has_distinct_interpretation() {
    let texts: Vec<_> = SeverityBand::ALL
        .iter()
        .map(|b| clinical_interpretation(*b))
        .collect();
    for (i, a) in texts.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &texts[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn next_steps_split_between_self_care_and_professional() {
    assert_eq!(next_steps(SeverityBand::Normal), next_steps(SeverityBand::Mild));
    assert_eq!(next_steps(SeverityBand::Moderate), next_steps(SeverityBand::Severe));
    assert_ne!(next_steps(SeverityBand::Mild), next_steps(SeverityBand::Moderate));
    assert_eq!(
        next_steps(SeverityBand::Severe)[2],
        "Seek immediate help if symptoms worsen."
    );
}

#[test]
fn guidance_table_covers_every_band() {
    for band in SeverityBand::ALL {
        let entry = guidance(band);
        assert_eq!(entry.recommendations.len(), 2);
        assert_eq!(entry.next_steps.len(), 3);
    }
    assert!(high_score_advice(mindcare_core::models::scores::Subscale::Stress).starts_with("High stress"));
}
