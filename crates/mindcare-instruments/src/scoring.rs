use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use mindcare_core::models::scores::{Subscale, SubscaleScores};

use crate::error::InstrumentError;
use crate::questionnaire::{questionnaire, ITEM_COUNT};

/// Defines the valid range for a single answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

impl ScoreRange {
    pub fn contains(&self, value: u8) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// The four ordinal choices offered for every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerOption {
    NotAtAll,
    SeveralDays,
    MoreThanHalfTheDays,
    NearlyEveryDay,
}

impl AnswerOption {
    pub const ALL: [AnswerOption; 4] = [
        AnswerOption::NotAtAll,
        AnswerOption::SeveralDays,
        AnswerOption::MoreThanHalfTheDays,
        AnswerOption::NearlyEveryDay,
    ];

    pub fn value(self) -> u8 {
        match self {
            AnswerOption::NotAtAll => 0,
            AnswerOption::SeveralDays => 1,
            AnswerOption::MoreThanHalfTheDays => 2,
            AnswerOption::NearlyEveryDay => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnswerOption::NotAtAll => "Not at all",
            AnswerOption::SeveralDays => "Several days",
            AnswerOption::MoreThanHalfTheDays => "More than half the days",
            AnswerOption::NearlyEveryDay => "Nearly every day",
        }
    }

    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.value() == value)
    }
}

/// A single questionnaire item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// 1-based position, as shown to the respondent ("Q1".."Q20").
    pub number: u8,
    pub prompt: String,
    /// Displayed subscale this item is summed into, if any.
    pub subscale: Option<Subscale>,
    /// Positively phrased items are inverted (`3 - v`) before use.
    pub reverse_scored: bool,
}

impl Item {
    /// Column name the classifier's feature row uses for this item.
    pub fn column(&self) -> String {
        format!("Q{}", self.number)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub item: u8,
    pub value: u8,
    pub expected_range: ScoreRange,
    pub message: String,
}

/// Twenty raw answers, each already checked to lie in 0–3.
///
/// Consumed by [`Responses::score`], so reversal can only ever be applied once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Responses([u8; ITEM_COUNT]);

impl Responses {
    pub fn from_options(options: [AnswerOption; ITEM_COUNT]) -> Self {
        Self(options.map(AnswerOption::value))
    }

    pub fn raw(&self) -> &[u8; ITEM_COUNT] {
        &self.0
    }

    /// Reverse the positively phrased items and sum the subscale totals.
    pub fn score(self) -> ScoredResponses {
        let definition = questionnaire();
        let mut values = self.0;
        let mut scores = SubscaleScores::default();

        for (value, item) in values.iter_mut().zip(&definition.items) {
            if item.reverse_scored {
                *value = definition.range.max - *value;
            }
            match item.subscale {
                Some(Subscale::Stress) => scores.stress += *value,
                Some(Subscale::Anxiety) => scores.anxiety += *value,
                Some(Subscale::Depression) => scores.depression += *value,
                None => {}
            }
        }

        ScoredResponses {
            features: FeatureRow(values),
            scores,
        }
    }
}

impl TryFrom<&[u8]> for Responses {
    type Error = InstrumentError;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; ITEM_COUNT] =
            values.try_into().map_err(|_| InstrumentError::WrongAnswerCount {
                expected: ITEM_COUNT,
                actual: values.len(),
            })?;

        if let Some(first) = questionnaire().validate_responses(&array).into_iter().next() {
            return Err(first.into());
        }
        Ok(Self(array))
    }
}

impl TryFrom<Vec<u8>> for Responses {
    type Error = InstrumentError;

    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(values.as_slice())
    }
}

/// Post-reversal answers in questionnaire order, the classifier's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRow([u8; ITEM_COUNT]);

impl FeatureRow {
    pub fn values(&self) -> &[u8] {
        &self.0
    }

    pub fn to_f64(&self) -> Vec<f64> {
        self.0.iter().map(|&v| f64::from(v)).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Q1`..`Q20`, matching the columns the model was trained on.
    pub fn column_names(&self) -> Vec<String> {
        questionnaire().items.iter().map(Item::column).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredResponses {
    pub features: FeatureRow,
    pub scores: SubscaleScores,
}
