use serde::Serialize;

use crate::schema::{AmericanFootballResult, SoccerResult, SportFormat, TennisResult};

/// One successfully extracted score line. Serializes untagged, as the bare
/// record the consuming layer displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedMatch {
    Soccer(SoccerResult),
    Tennis(TennisResult),
    AmericanFootball(AmericanFootballResult),
}

impl ParsedMatch {
    pub fn format(&self) -> SportFormat {
        match self {
            ParsedMatch::Soccer(_) => SportFormat::Soccer,
            ParsedMatch::Tennis(_) => SportFormat::Tennis,
            ParsedMatch::AmericanFootball(_) => SportFormat::AmericanFootball,
        }
    }
}
