use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TennisError;

// What the score tokens leave behind once removed: the two serve-indicator
// placeholders "()" and the whitespace that sat around the numbers.
const NAME_SEPARATOR: &str = " ()    () ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardElement {
    pub title: String,
    pub team_a_sets: String,
    pub team_b_sets: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub elements: Vec<ScoreboardElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TennisResult {
    pub team_a_name: String,
    pub team_b_name: String,
    pub team_a_score: String,
    pub team_b_score: String,
    pub team_a_games: String,
    pub team_b_games: String,
    pub team_a_serving: bool,
    pub team_b_serving: bool,
    pub scoreboard: Scoreboard,
}

impl FromStr for TennisResult {
    type Err = TennisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Score tokens, in order of appearance: a digit run joined to three
        // letters ("40-Adv"), a pure numeric pair ("30-15"), or a bare digit
        // run. Expected layout: setsA, gamesA, current-game pair, gamesB,
        // setsB.
        let tokens = Regex::new(r"\b\d+[-.]+\w{3}|\d+[-.]\d+|\d+\b").unwrap();
        let values: Vec<&str> = tokens.find_iter(s).map(|m| m.as_str()).collect();
        if values.len() < 5 {
            return Err(TennisError::not_enough_tokens_error(values.len()));
        }

        let (team_a_score, team_b_score) = values[2]
            .split_once('-')
            .ok_or_else(|| TennisError::invalid_game_score_error(values[2]))?;

        // Stripping the tokens leaves the names around the fixed placeholder
        // block.
        let remainder = tokens.replace_all(s, "");
        let mut names = remainder.split(NAME_SEPARATOR);
        let first = names.next().unwrap_or_default();
        let second = names
            .next()
            .ok_or_else(|| TennisError::missing_name_separator_error(s))?;

        let scoreboard = Scoreboard {
            elements: vec![ScoreboardElement {
                title: "Sets".to_string(),
                team_a_sets: values[0].to_string(),
                team_b_sets: values[4].to_string(),
            }],
        };

        // The '*' marks the server. When it sits in the second fragment team
        // B serves; otherwise team A serves and the name fragments cross
        // over.
        let result = if let Some((_, server)) = second.split_once('*') {
            TennisResult {
                team_a_name: first.to_string(),
                team_b_name: server.to_string(),
                team_a_serving: false,
                team_b_serving: true,
                team_a_score: team_a_score.to_string(),
                team_b_score: team_b_score.to_string(),
                team_a_games: values[1].to_string(),
                team_b_games: values[3].to_string(),
                scoreboard,
            }
        } else {
            let (_, server) = first
                .split_once('*')
                .ok_or_else(|| TennisError::missing_serve_indicator_error(s))?;
            TennisResult {
                team_a_name: second.to_string(),
                team_b_name: server.to_string(),
                team_a_serving: true,
                team_b_serving: false,
                team_a_score: team_a_score.to_string(),
                team_b_score: team_b_score.to_string(),
                team_a_games: values[1].to_string(),
                team_b_games: values[3].to_string(),
                scoreboard,
            }
        };

        Ok(result)
    }
}
