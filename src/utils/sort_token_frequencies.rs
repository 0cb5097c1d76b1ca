use crate::types::{OrderedTokenFrequencies, TokenFrequencyMap};

/// Sorts a mapping of tokens to their frequencies.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** If two tokens have the same frequency, sorts by token in
///   ascending lexicographical order.
///
/// Keys are unique, so the result is a strict total order and never depends
/// on the iteration order of the map.
///
/// ### Example:
/// ```rust
/// use token_tally::sort_token_frequencies;
/// use token_tally::types::TokenFrequencyMap;
///
/// let mut frequencies = TokenFrequencyMap::new();
/// frequencies.insert("mat".to_string(), 1);
/// frequencies.insert("the".to_string(), 3);
/// frequencies.insert("cat".to_string(), 1);
///
/// let sorted = sort_token_frequencies(frequencies);
/// assert_eq!(sorted, vec![
///     ("the".to_string(), 3),
///     ("cat".to_string(), 1),
///     ("mat".to_string(), 1),
/// ]);
/// ```
pub fn sort_token_frequencies(frequencies: TokenFrequencyMap) -> OrderedTokenFrequencies {
    let mut sorted_frequencies: OrderedTokenFrequencies = frequencies.into_iter().collect();

    sorted_frequencies.sort_unstable_by(|a, b| {
        b.1.cmp(&a.1) // Sort by frequency (descending)
            .then_with(|| a.0.cmp(&b.0)) // Secondary sort by token (ascending)
    });

    sorted_frequencies
}
