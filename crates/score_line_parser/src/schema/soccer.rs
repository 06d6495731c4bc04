use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SoccerError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoccerResult {
    pub team_a_name: String,
    pub team_b_name: String,
    pub team_a_score: String,
    pub team_b_score: String,
}

impl FromStr for SoccerResult {
    type Err = SoccerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = Regex::new(r"\d+").unwrap();
        let points: Vec<&str> = digits.find_iter(s).map(|run| run.as_str()).collect();
        if points.len() < 2 {
            return Err(SoccerError::not_enough_scores_error(points.len()));
        }

        // The team names sit on either side of a " 3-2 " style separator.
        let separator = Regex::new(r"\s\d+-+\d+\s").unwrap();
        let score_block = separator
            .find(s)
            .ok_or_else(|| SoccerError::missing_score_separator_error(s))?;

        Ok(SoccerResult {
            team_a_name: s[..score_block.start()].to_string(),
            team_b_name: s[score_block.end()..].to_string(),
            team_a_score: points[0].to_string(),
            team_b_score: points[1].to_string(),
        })
    }
}
