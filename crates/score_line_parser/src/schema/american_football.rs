use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AmericanFootballError;
use crate::fragments::{split_digit_runs, strip_edges, strip_last};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmericanFootballResult {
    pub team_a_name: String,
    pub team_b_name: String,
    pub team_a_score: String,
    pub team_b_score: String,
    pub current_period: String,
}

impl FromStr for AmericanFootballResult {
    type Err = AmericanFootballError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Interleaved layout: name, score, "-", score, name, then the period
        // split across fragments 5 and 6 ("3" / "rd Quarter").
        let data = split_digit_runs(s);
        if data.len() < 7 {
            return Err(AmericanFootballError::not_enough_fragments_error(data.len()));
        }

        // "3" + "rd Quarter" reads as one token once the whitespace is gone.
        let current_period: String = format!("{}{}", data[5], data[6]).split_whitespace().collect();

        Ok(AmericanFootballResult {
            team_a_name: strip_last(data[0]).to_string(),
            team_b_name: strip_edges(data[4]).to_string(),
            team_a_score: data[1].to_string(),
            team_b_score: data[3].to_string(),
            current_period,
        })
    }
}
