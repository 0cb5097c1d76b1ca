use crate::types::{Token, TokenFrequencyMap};

/// Counts the frequency of tokens in the given list.
///
/// # Arguments
/// * `tokens` - A slice of tokens to analyze.
///
/// # Returns
/// * A `TokenFrequencyMap` where the keys are the distinct tokens and the
///   values are their respective frequencies. No entry has a frequency of 0.
///
/// # Example
/// ```
/// use token_tally::count_token_frequencies;
///
/// let tokens = vec!["the".to_string(), "cat".to_string(), "the".to_string()];
/// let frequencies = count_token_frequencies(&tokens);
/// assert_eq!(frequencies.get("the"), Some(&2));
/// assert_eq!(frequencies.get("cat"), Some(&1));
/// ```
pub fn count_token_frequencies(tokens: &[Token]) -> TokenFrequencyMap {
    let mut frequencies = TokenFrequencyMap::new();

    for token in tokens {
        *frequencies.entry(token.clone()).or_insert(0) += 1;
    }

    frequencies
}
