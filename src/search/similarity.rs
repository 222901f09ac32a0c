// src/search/similarity.rs
//! Similarity measures on the 0–100 scale, built on `strsim`'s normalized
//! Levenshtein distance. Inputs are expected to be lowercased already.
//!
//! Scores are not interchangeable with rapidfuzz's `fuzz` module, whose ratio
//! is Indel (LCS) based: `ratio("relaince", "reliance")` is 75 here and 87.5
//! there, `ratio("tata", "tatamotors")` is 40 here and about 57.1 there.

use std::collections::BTreeSet;

/// Plain normalized edit-distance similarity.
pub fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    strsim::normalized_levenshtein(a, b) * 100.0
}

/// Best alignment of the shorter string against every equally long window of
/// the longer one.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let (shorter, longer, short_len, long_len) = if a_len <= b_len {
        (a, b, a_len, b_len)
    } else {
        (b, a, b_len, a_len)
    };

    if short_len == 0 {
        return if long_len == 0 { 100.0 } else { 0.0 };
    }
    if short_len == long_len {
        return ratio(shorter, longer);
    }
    if longer.contains(shorter) {
        return 100.0;
    }

    let long_chars: Vec<char> = longer.chars().collect();
    let mut best = 0.0f64;
    for window in long_chars.windows(short_len) {
        let candidate: String = window.iter().collect();
        let score = ratio(shorter, &candidate);
        if score > best {
            best = score;
        }
    }
    best
}

/// Word-order and duplicate insensitive similarity over whitespace tokens.
///
/// Shared tokens are compared against each side's sorted remainder; a string
/// whose tokens are a subset of the other's scores 100.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersection = tokens_a.intersection(&tokens_b).copied().collect::<Vec<_>>().join(" ");
    let only_a = tokens_a.difference(&tokens_b).copied().collect::<Vec<_>>().join(" ");
    let only_b = tokens_b.difference(&tokens_a).copied().collect::<Vec<_>>().join(" ");

    if intersection.is_empty() {
        return ratio(&only_a, &only_b);
    }
    if only_a.is_empty() || only_b.is_empty() {
        return 100.0;
    }

    let combined_a = format!("{} {}", intersection, only_a);
    let combined_b = format!("{} {}", intersection, only_b);

    ratio(&intersection, &combined_a)
        .max(ratio(&intersection, &combined_b))
        .max(ratio(&combined_a, &combined_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn ratio_bounds() {
        assert!(approx(ratio("reliance", "reliance"), 100.0));
        assert!(approx(ratio("abc", "xyz"), 0.0));
        assert!(approx(ratio("", ""), 100.0));
        // one substitution in eight characters
        assert!(approx(ratio("reliance", "relianse"), 87.5));
    }

    #[test]
    fn ratio_is_plain_levenshtein() {
        assert!(approx(ratio("relaince", "reliance"), 75.0));
        assert!(approx(ratio("tata", "tatamotors"), 40.0));
    }

    #[test]
    fn partial_finds_substring() {
        assert!(approx(partial_ratio("tata", "tata motors limited"), 100.0));
        assert!(approx(partial_ratio("tata motors limited", "tata"), 100.0));
    }

    #[test]
    fn partial_aligns_typos() {
        // "infi" vs best window "info" differs by one char
        assert!(approx(partial_ratio("infi", "infosys limited"), 75.0));
    }

    #[test]
    fn partial_empty_inputs() {
        assert!(approx(partial_ratio("", "tcs"), 0.0));
        assert!(approx(partial_ratio("", ""), 100.0));
    }

    #[test]
    fn token_set_ignores_order_and_duplicates() {
        assert!(approx(token_set_ratio("bank hdfc", "hdfc bank"), 100.0));
        assert!(approx(token_set_ratio("hdfc hdfc bank", "hdfc bank"), 100.0));
    }

    #[test]
    fn token_set_subset_scores_full() {
        assert!(approx(token_set_ratio("infosys", "infosys limited"), 100.0));
    }

    #[test]
    fn token_set_disjoint_falls_back_to_remainders() {
        assert!(approx(token_set_ratio("tcs", "tcs"), 100.0));
        assert!(approx(token_set_ratio("zzz", "aaa"), 0.0));
        assert!(approx(token_set_ratio("", "aaa"), 0.0));
    }

    #[test]
    fn token_set_partial_overlap_is_between_bounds() {
        let score = token_set_ratio("state bank", "bank of baroda");
        assert!(score > 0.0 && score < 100.0);
    }
}
