//! Advisory text keyed by severity band.
//!
//! Each band owns exactly one [`Guidance`] entry, so the interpretation,
//! the label-based recommendations and the next steps can never disagree
//! about which bucket a label falls into.

use mindcare_core::models::scores::{Subscale, SubscaleScores};
use mindcare_core::models::severity::{SeverityBand, SeverityLabel};

/// Subscale totals at or above this value add a targeted recommendation.
pub const HIGH_SCORE_THRESHOLD: u8 = 11;

#[derive(Debug)]
pub struct Guidance {
    pub interpretation: &'static str,
    pub recommendations: [&'static str; 2],
    pub next_steps: &'static [&'static str; 3],
}

const SELF_CARE_STEPS: [&str; 3] = [
    "Maintain a healthy daily routine and sleep schedule.",
    "Engage in regular physical and mindfulness activities.",
    "Repeat the assessment periodically for self-monitoring.",
];

const PROFESSIONAL_STEPS: [&str; 3] = [
    "Seek consultation with a qualified mental health professional.",
    "Avoid prolonged isolation and maintain social support.",
    "Seek immediate help if symptoms worsen.",
];

static NORMAL: Guidance = Guidance {
    interpretation: "The assessment indicates stable mental well-being with no significant psychological distress.",
    recommendations: [
        "Maintain a balanced daily routine.",
        "Continue engaging in hobbies and physical activities.",
    ],
    next_steps: &SELF_CARE_STEPS,
};

static MILD: Guidance = Guidance {
    interpretation: "The assessment indicates mild psychological stress that may benefit from early lifestyle interventions.",
    recommendations: [
        "Practice meditation for 10–15 minutes daily.",
        "Improve sleep hygiene and reduce screen exposure.",
    ],
    next_steps: &SELF_CARE_STEPS,
};

static MODERATE: Guidance = Guidance {
    interpretation: "The assessment indicates moderate mental health strain requiring proactive stress management.",
    recommendations: [
        "Follow structured stress-management techniques.",
        "Consider professional counseling services.",
    ],
    next_steps: &PROFESSIONAL_STEPS,
};

static SEVERE: Guidance = Guidance {
    interpretation: "The assessment indicates high psychological distress and professional consultation is strongly advised.",
    recommendations: [
        "Seek immediate consultation with a mental health professional.",
        "Ensure continuous emotional and social support.",
    ],
    next_steps: &PROFESSIONAL_STEPS,
};

pub fn guidance(band: SeverityBand) -> &'static Guidance {
    match band {
        SeverityBand::Normal => &NORMAL,
        SeverityBand::Mild => &MILD,
        SeverityBand::Moderate => &MODERATE,
        SeverityBand::Severe => &SEVERE,
    }
}

pub fn clinical_interpretation(band: SeverityBand) -> &'static str {
    guidance(band).interpretation
}

pub fn next_steps(band: SeverityBand) -> &'static [&'static str] {
    guidance(band).next_steps
}

/// The add-on recommendation for a subscale at or above the threshold.
pub fn high_score_advice(subscale: Subscale) -> &'static str {
    match subscale {
        Subscale::Stress => "High stress detected: prioritize rest and workload management.",
        Subscale::Anxiety => "High anxiety detected: practice breathing and grounding exercises.",
        Subscale::Depression => {
            "High depression indicators detected: professional support is strongly recommended."
        }
    }
}

/// Label-based pair first, then one add-on per subscale at or above
/// [`HIGH_SCORE_THRESHOLD`], in stress, anxiety, depression order.
pub fn recommendations(label: &SeverityLabel, scores: &SubscaleScores) -> Vec<String> {
    let mut recs: Vec<String> = guidance(label.band())
        .recommendations
        .iter()
        .map(|r| r.to_string())
        .collect();

    recs.extend(
        scores
            .iter()
            .filter(|(_, value)| *value >= HIGH_SCORE_THRESHOLD)
            .map(|(subscale, _)| high_score_advice(subscale).to_string()),
    );

    recs
}
