#[cfg(test)]
mod tests {
	use score_line_parser::error::ScoreLineError;
	use score_line_parser::evaluate;
	use score_line_parser::schema::{ParsedMatch, SportFormat};

	const SOCCER_LINE: &str = "F.C. Barcelona 3-2 Real Madrid";
	const TENNIS_LINE: &str = "Anna Karolina Schmiedlova (1) 1 40-Adv 1 (0) *Varvara Lepchenko";
	const FOOTBALL_LINE: &str = "Pittsburgh Steelers 3-7 Minnesota Vikings 3rd Quarter";

	fn evaluate_ok(line: &str) -> ParsedMatch {
		evaluate(line).unwrap_or_else(|e| panic!("expected {} to parse, got: {}", line, e))
	}

	#[test]
	fn test_soccer_round_trip() {
		assert_eq!(SportFormat::detect(SOCCER_LINE), SportFormat::Soccer);

		let ParsedMatch::Soccer(result) = evaluate_ok(SOCCER_LINE) else {
			panic!("expected a soccer result");
		};
		assert_eq!(result.team_a_name, "F.C. Barcelona");
		assert_eq!(result.team_b_name, "Real Madrid");
		assert_eq!(result.team_a_score, "3");
		assert_eq!(result.team_b_score, "2");
	}

	#[test]
	fn test_tennis_round_trip() {
		assert_eq!(SportFormat::detect(TENNIS_LINE), SportFormat::Tennis);

		let ParsedMatch::Tennis(result) = evaluate_ok(TENNIS_LINE) else {
			panic!("expected a tennis result");
		};
		assert!(result.team_b_serving);
		assert!(!result.team_a_serving);
		assert_eq!(result.team_a_name, "Anna Karolina Schmiedlova");
		assert_eq!(result.team_b_name, "Varvara Lepchenko");
		assert_eq!(result.team_a_score, "40");
		assert_eq!(result.team_b_score, "Adv");
		assert_eq!(result.scoreboard.elements[0].team_a_sets, "1");
		assert_eq!(result.scoreboard.elements[0].team_b_sets, "0");
	}

	#[test]
	fn test_american_football_round_trip() {
		assert_eq!(SportFormat::detect(FOOTBALL_LINE), SportFormat::AmericanFootball);

		let ParsedMatch::AmericanFootball(result) = evaluate_ok(FOOTBALL_LINE) else {
			panic!("expected an american football result");
		};
		assert_eq!(result.team_a_name, "Pittsburgh Steelers");
		assert_eq!(result.team_b_name, "Minnesota Vikings");
		assert_eq!(result.team_a_score, "3");
		assert_eq!(result.team_b_score, "7");
		assert_eq!(result.current_period, "3rdQuarter");
	}

	#[test]
	fn test_unrecognized_lines_fail_classification() {
		let lines = vec!["", "no digits at all", "only 1 number", "1-2"];

		for line in lines {
			let error = evaluate(line).unwrap_err();
			assert!(error.is_classification(), "Failed for input: {}", line);
			assert!(!error.is_extraction(), "Failed for input: {}", line);
			assert_eq!(error.to_string(), "Formato incorrecto", "Failed for input: {}", line);
		}
	}

	#[test]
	fn test_malformed_lines_fail_extraction_not_crash() {
		// Classified soccer (two digit runs, trailing text) but missing the
		// " N-N " separator block.
		let soccer_like = "Barcelona 3 - 2 Madrid x";
		let error = evaluate(soccer_like).unwrap_err();
		assert!(error.is_extraction());
		assert!(matches!(error, ScoreLineError::Soccer(_)));

		// Classified tennis (empty probe window) but nowhere near five score
		// tokens.
		let tennis_like = "a1b2c3d";
		let error = evaluate(tennis_like).unwrap_err();
		assert!(error.is_extraction());
		assert!(matches!(error, ScoreLineError::Tennis(_)));
	}

	#[test]
	fn test_evaluate_is_idempotent() {
		for line in [SOCCER_LINE, TENNIS_LINE, FOOTBALL_LINE] {
			assert_eq!(evaluate(line), evaluate(line), "Failed for input: {}", line);
		}
	}

	#[test]
	fn test_tennis_serving_flags_are_exclusive() {
		let lines = vec![TENNIS_LINE, "*Rafael Nadal (2) 5 15-30 4 (1) Roger Federer"];

		for line in lines {
			let ParsedMatch::Tennis(result) = evaluate_ok(line) else {
				panic!("expected a tennis result for: {}", line);
			};
			assert!(result.team_a_serving != result.team_b_serving, "Failed for input: {}", line);
		}
	}

	#[test]
	fn test_serialized_shape_matches_consumer_records() {
		let soccer = serde_json::to_value(evaluate_ok(SOCCER_LINE)).unwrap();
		assert_eq!(soccer["teamAName"], "F.C. Barcelona");
		assert_eq!(soccer["teamBScore"], "2");

		let tennis = serde_json::to_value(evaluate_ok(TENNIS_LINE)).unwrap();
		assert_eq!(tennis["teamBServing"], true);
		assert_eq!(tennis["scoreboard"]["elements"][0]["title"], "Sets");
		assert_eq!(tennis["scoreboard"]["elements"][0]["teamASets"], "1");

		let football = serde_json::to_value(evaluate_ok(FOOTBALL_LINE)).unwrap();
		assert_eq!(football["currentPeriod"], "3rdQuarter");
	}
}
