//! Shared query parameter types for API handlers.

use acervo_core::period::{YearRange, YEAR_LIMIT};
use acervo_core::types::Year;
use serde::Deserialize;

/// Year filter for the works listing (`?ano_inicial=&ano_final=`).
///
/// Missing ends default to the symmetric `±YEAR_LIMIT` bound.
#[derive(Debug, Default, Deserialize)]
pub struct YearRangeParams {
    pub ano_inicial: Option<Year>,
    pub ano_final: Option<Year>,
}

impl YearRangeParams {
    pub fn range(&self) -> YearRange {
        YearRange::new(
            self.ano_inicial.unwrap_or(-YEAR_LIMIT),
            self.ano_final.unwrap_or(YEAR_LIMIT),
        )
    }
}
