use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SoccerError {
    #[error("No score separator like \" 3-2 \" found in: {input}")]
    MissingScoreSeparator { input: String }, // Struct-like variant

    #[error("Expected at least 2 scores, found {found}")]
    NotEnoughScores { found: usize },
}

#[derive(Debug, Error, PartialEq)]
pub enum TennisError {
    #[error("Expected 5 score tokens, found {found}")]
    NotEnoughTokens { found: usize },

    #[error("Player name separator not found in: {input}")]
    MissingNameSeparator { input: String },

    #[error("Invalid current-game score token: {token}")]
    InvalidGameScore { token: String },

    #[error("Serve indicator '*' not found in: {input}")]
    MissingServeIndicator { input: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum AmericanFootballError {
    #[error("Expected at least 7 fragments, found {found}")]
    NotEnoughFragments { found: usize },
}

#[derive(Debug, Error, PartialEq)]
pub enum ScoreLineError {
    #[error("Formato incorrecto")]
    UnrecognizedFormat { input: String },

    #[error("Soccer extraction failed: {0}")]
    Soccer(#[from] SoccerError),

    #[error("Tennis extraction failed: {0}")]
    Tennis(#[from] TennisError),

    #[error("American football extraction failed: {0}")]
    AmericanFootball(#[from] AmericanFootballError),
}

impl SoccerError {
    // Specific error creation helpers

    pub fn missing_score_separator_error(input: &str) -> Self {
        SoccerError::MissingScoreSeparator {
            input: input.to_string(),
        }
    }

    pub fn not_enough_scores_error(found: usize) -> Self {
        SoccerError::NotEnoughScores { found }
    }
}

impl TennisError {
    pub fn not_enough_tokens_error(found: usize) -> Self {
        TennisError::NotEnoughTokens { found }
    }

    pub fn missing_name_separator_error(input: &str) -> Self {
        TennisError::MissingNameSeparator {
            input: input.to_string(),
        }
    }

    pub fn invalid_game_score_error(token: &str) -> Self {
        TennisError::InvalidGameScore {
            token: token.to_string(),
        }
    }

    pub fn missing_serve_indicator_error(input: &str) -> Self {
        TennisError::MissingServeIndicator {
            input: input.to_string(),
        }
    }
}

impl AmericanFootballError {
    pub fn not_enough_fragments_error(found: usize) -> Self {
        AmericanFootballError::NotEnoughFragments { found }
    }
}

impl ScoreLineError {
    pub fn unrecognized_format_error(input: &str) -> Self {
        ScoreLineError::UnrecognizedFormat {
            input: input.to_string(),
        }
    }

    /// True when the input never made it past format detection.
    pub fn is_classification(&self) -> bool {
        matches!(self, ScoreLineError::UnrecognizedFormat { .. })
    }

    /// True when a detected format's structural assumptions were not met.
    pub fn is_extraction(&self) -> bool {
        !self.is_classification()
    }
}
