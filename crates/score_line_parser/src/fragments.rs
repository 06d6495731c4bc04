use regex::Regex;

/// Splits `text` on digit runs while keeping the runs themselves:
/// even indices hold the (possibly empty) non-digit text around the runs,
/// odd indices hold the digit runs. The classifier and the american
/// football extractor both index into this interleaving.
pub fn split_digit_runs(text: &str) -> Vec<&str> {
    let digits = Regex::new(r"\d+").unwrap();
    let mut fragments = Vec::new();
    let mut last = 0;

    for run in digits.find_iter(text) {
        fragments.push(&text[last..run.start()]);
        fragments.push(run.as_str());
        last = run.end();
    }
    fragments.push(&text[last..]);

    fragments
}

/// Drops the last character, e.g. "Pittsburgh Steelers " -> "Pittsburgh Steelers".
pub fn strip_last(fragment: &str) -> &str {
    let mut chars = fragment.chars();
    chars.next_back();
    chars.as_str()
}

/// Drops the first and last characters, e.g. " Minnesota Vikings " -> "Minnesota Vikings".
pub fn strip_edges(fragment: &str) -> &str {
    let mut chars = fragment.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
