// src/entropy.rs
//! Shannon entropy over a byte-oriented alphabet, used as the last-resort
//! detection layer once pattern and assignment checks have passed on a
//! candidate value.

use std::collections::HashMap;

/// Shannon entropy of `s`, in bits, base 2. `shannon_entropy("") == 0.0`.
#[must_use]
pub fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut counts: HashMap<char, u32> = HashMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    let len = s.chars().count() as f64;
    counts
        .values()
        .map(|&count| {
            let p = f64::from(count) / len;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_has_zero_entropy() {
        assert_eq!(shannon_entropy(""), 0.0);
    }

    #[test]
    fn single_repeated_char_has_zero_entropy() {
        assert_eq!(shannon_entropy("aaaaaa"), 0.0);
    }

    #[test]
    fn two_symbols_even_split_has_entropy_one() {
        let h = shannon_entropy("abababab");
        assert!((h - 1.0).abs() < 1e-9);
    }

    #[test]
    fn high_entropy_random_looking_string() {
        let h = shannon_entropy("aZ3$kQ9!mP2#");
        assert!(h > 3.0, "expected high entropy, got {h}");
    }

    #[test]
    fn low_entropy_natural_word() {
        let h = shannon_entropy("password");
        assert!(h < 3.5, "expected low-ish entropy, got {h}");
    }
}
