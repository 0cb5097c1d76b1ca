use crate::types::TokenFrequencyMap;

/// Counts the distinct tokens which appear in both frequency maps.
///
/// Membership is an explicit key lookup and does not depend on the stored
/// frequency values. Iterates over the smaller map, so the cost is
/// `O(min(|a|, |b|))`.
pub fn count_common_tokens(a: &TokenFrequencyMap, b: &TokenFrequencyMap) -> usize {
    let (smaller, larger) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    smaller
        .keys()
        .filter(|token| larger.contains_key(token.as_str()))
        .count()
}
