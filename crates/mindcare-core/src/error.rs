use thiserror::Error;

use crate::models::scores::Subscale;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("severity label must not be empty")]
    EmptyLabel,

    #[error("{subscale} score {value} is outside range [0, {max}]")]
    ScoreOutOfRange {
        subscale: Subscale,
        value: u8,
        max: u8,
    },
}
