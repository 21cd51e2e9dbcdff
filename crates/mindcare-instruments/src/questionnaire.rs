use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindcare_core::models::scores::Subscale;

use crate::scoring::{AnswerOption, Item, ScoreRange, ValidationError};

pub const ITEM_COUNT: usize = 20;

/// A selectable answer as presented to the respondent.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Choice {
    pub label: String,
    pub value: u8,
}

/// The MindCare screening questionnaire.
///
/// Items 1–5 feed the stress total, 6–10 anxiety, 11–15 depression. Items
/// 16–17 reach the classifier only. Items 18–20 are positively phrased,
/// reverse-scored, and also reach the classifier only.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Questionnaire {
    pub id: String,
    pub name: String,
    pub range: ScoreRange,
    pub options: Vec<Choice>,
    pub items: Vec<Item>,
}

impl Questionnaire {
    /// Check the answer count and every answer against the item range.
    ///
    /// A count problem is reported as item `0` with the received count as
    /// its value (saturated at 255).
    pub fn validate_responses(&self, values: &[u8]) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if values.len() != self.items.len() {
            errors.push(ValidationError {
                item: 0,
                value: u8::try_from(values.len()).unwrap_or(u8::MAX),
                expected_range: self.range,
                message: format!(
                    "expected {} answers, got {}",
                    self.items.len(),
                    values.len()
                ),
            });
        }
        for (value, item) in values.iter().zip(&self.items) {
            if !self.range.contains(*value) {
                errors.push(ValidationError {
                    item: item.number,
                    value: *value,
                    expected_range: self.range,
                    message: format!(
                        "Q{}: answer {} is outside range [{}, {}]",
                        item.number, value, self.range.min, self.range.max,
                    ),
                });
            }
        }
        errors
    }

    /// Zero-based indices of the items summed into `subscale`.
    pub fn subscale_items(&self, subscale: Subscale) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.subscale == Some(subscale))
            .map(|(index, _)| index)
            .collect()
    }

    /// Zero-based indices of the reverse-scored items.
    pub fn reversed_items(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.reverse_scored)
            .map(|(index, _)| index)
            .collect()
    }
}

pub fn questionnaire() -> &'static Questionnaire {
    static QUESTIONNAIRE: LazyLock<Questionnaire> = LazyLock::new(|| {
        let prompts: [(&str, Option<Subscale>, bool); ITEM_COUNT] = [
            ("Feeling overwhelmed by daily responsibilities", Some(Subscale::Stress), false),
            ("Difficulty relaxing during free time", Some(Subscale::Stress), false),
            ("Pressure from expectations of others", Some(Subscale::Stress), false),
            ("Mental exhaustion at the end of the day", Some(Subscale::Stress), false),
            ("Increased irritability or frustration", Some(Subscale::Stress), false),
            ("Feeling nervous or anxious without clear reason", Some(Subscale::Anxiety), false),
            ("Excessive worry about future events", Some(Subscale::Anxiety), false),
            ("Difficulty concentrating due to worrying thoughts", Some(Subscale::Anxiety), false),
            ("Restlessness or inability to stay still", Some(Subscale::Anxiety), false),
            ("Sudden fear or panic in certain situations", Some(Subscale::Anxiety), false),
            ("Persistent feelings of sadness or low mood", Some(Subscale::Depression), false),
            ("Loss of interest in previously enjoyed activities", Some(Subscale::Depression), false),
            ("Constant tiredness or lack of energy", Some(Subscale::Depression), false),
            ("Feelings of worthlessness or guilt", Some(Subscale::Depression), false),
            ("Sleep disturbances", Some(Subscale::Depression), false),
            ("Feeling emotionally disconnected from others", None, false),
            ("Avoiding social interactions", None, false),
            ("Feeling supported by friends or family", None, true),
            ("Confidence in handling emotional challenges", None, true),
            ("Hopefulness about the future", None, true),
        ];

        let items = prompts
            .iter()
            .enumerate()
            .map(|(index, (prompt, subscale, reverse_scored))| Item {
                number: index as u8 + 1,
                prompt: prompt.to_string(),
                subscale: *subscale,
                reverse_scored: *reverse_scored,
            })
            .collect();

        let options = AnswerOption::ALL
            .iter()
            .map(|o| Choice {
                label: o.label().to_string(),
                value: o.value(),
            })
            .collect();

        Questionnaire {
            id: "mindcare20".to_string(),
            name: "MindCare Mental Health Questionnaire".to_string(),
            range: ScoreRange { min: 0, max: 3 },
            options,
            items,
        }
    });
    &QUESTIONNAIRE
}
