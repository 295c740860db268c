//! Field similarity

/// Score how well `text` matches `query`, ignoring case.
///
/// Returns 100 for equal strings, 80 when `text` starts with the query, 60
/// when it contains it. Otherwise the query characters are matched greedily
/// in order and each match at text index `i`, with `k` characters already
/// matched, adds `10 / (i - k + 1)`. A query that cannot be matched in full
/// scores 0.
pub fn similarity(text: &str, query: &str) -> f64 {
    let text = text.to_lowercase();
    let query = query.to_lowercase();

    if text == query {
        return 100.0;
    }
    if text.starts_with(&query) {
        return 80.0;
    }
    if text.contains(&query) {
        return 60.0;
    }

    let query: Vec<char> = query.chars().collect();
    let mut matched = 0;
    let mut score = 0.0;

    for (i, ch) in text.chars().enumerate() {
        if matched == query.len() {
            break;
        }
        if ch == query[matched] {
            score += 10.0 / (i - matched + 1) as f64;
            matched += 1;
        }
    }

    if matched == query.len() {
        score
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_tiers() {
        assert_eq!(similarity("Launch", "launch"), 100.0);
        assert_eq!(similarity("Auth flow", "Auth"), 80.0);
        assert_eq!(similarity("System Authentication", "auth"), 60.0);
    }

    #[test]
    fn test_subsequence_match() {
        // d@0 gains 10/1, s@2 gains 10/(2-1+1), n@5 gains 10/(5-2+1)
        let score = similarity("design", "dsn");
        assert!((score - 17.5).abs() < 1e-9);
    }

    #[test]
    fn test_incomplete_subsequence_scores_zero() {
        assert_eq!(similarity("Done", "dx"), 0.0);
        assert_eq!(similarity("", "a"), 0.0);
    }

    #[test]
    fn test_unicode_characters() {
        assert_eq!(similarity("Café", "CAFÉ"), 100.0);
        assert!(similarity("Welcome to Corkboard! 🎉", "w🎉") > 0.0);
    }
}
