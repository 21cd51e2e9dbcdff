use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Largest total any subscale can reach: five items, each scored 0–3.
pub const SUBSCALE_MAX: u8 = 15;

/// One of the three distress dimensions reported to the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Subscale {
    Stress,
    Anxiety,
    Depression,
}

impl Subscale {
    /// Display order, used everywhere scores are listed or checked.
    pub const ALL: [Subscale; 3] = [Subscale::Stress, Subscale::Anxiety, Subscale::Depression];

    pub fn name(self) -> &'static str {
        match self {
            Subscale::Stress => "Stress",
            Subscale::Anxiety => "Anxiety",
            Subscale::Depression => "Depression",
        }
    }
}

impl fmt::Display for Subscale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Summed subscale totals, post-reversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleScores {
    pub stress: u8,
    pub anxiety: u8,
    pub depression: u8,
}

impl SubscaleScores {
    pub fn get(&self, subscale: Subscale) -> u8 {
        match subscale {
            Subscale::Stress => self.stress,
            Subscale::Anxiety => self.anxiety,
            Subscale::Depression => self.depression,
        }
    }

    /// Scores paired with their subscale, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Subscale, u8)> + '_ {
        Subscale::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    /// Check that every total lies in `[0, SUBSCALE_MAX]`.
    ///
    /// Scores computed by the scorer always pass; this guards results that
    /// arrive from outside, e.g. deserialized from a request body.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (subscale, value) in self.iter() {
            if value > SUBSCALE_MAX {
                return Err(CoreError::ScoreOutOfRange {
                    subscale,
                    value,
                    max: SUBSCALE_MAX,
                });
            }
        }
        Ok(())
    }
}
