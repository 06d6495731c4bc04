pub mod error;
pub mod fragments;
pub mod schema;

use std::str::FromStr;

use crate::error::ScoreLineError;
use crate::schema::{AmericanFootballResult, ParsedMatch, SoccerResult, SportFormat, TennisResult};

/// Parses a free-text score line into the structured record of whichever
/// sport format it matches, or a typed error when the line matches none or
/// breaks the matched format's structure.
pub fn evaluate(text: &str) -> Result<ParsedMatch, ScoreLineError> {
    match SportFormat::detect(text) {
        SportFormat::Soccer => Ok(ParsedMatch::Soccer(SoccerResult::from_str(text)?)),
        SportFormat::Tennis => Ok(ParsedMatch::Tennis(TennisResult::from_str(text)?)),
        SportFormat::AmericanFootball => Ok(ParsedMatch::AmericanFootball(AmericanFootballResult::from_str(text)?)),
        SportFormat::Unrecognized => Err(ScoreLineError::unrecognized_format_error(text)),
    }
}
