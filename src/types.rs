use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. A token is a non-empty run of
/// lowercase ASCII letters and digits.
pub type Token = String;

/// Represents the total number of occurrences of a token within a text document.
pub type TokenFrequency = usize;

/// Represents a map of tokens to their frequency counts within a text document.
/// Every key present has a frequency of at least 1.
pub type TokenFrequencyMap = HashMap<Token, TokenFrequency>;

/// Token / frequency pairs ordered by frequency (descending), then token (ascending).
pub type OrderedTokenFrequencies = Vec<(Token, TokenFrequency)>;
