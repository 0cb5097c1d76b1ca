use crate::types::Token;

/// Replaces every character which is neither an ASCII letter, an ASCII digit
/// nor whitespace with a single space, and lowercases the ASCII letters.
///
/// Non-ASCII characters are always replaced, including letters and digits
/// from other scripts.
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else if c.is_ascii_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Tokenizer function to split the text into individual tokens.
///
/// Tokens are the whitespace-delimited fragments of the normalized text, in
/// their original left-to-right order. Every token is non-empty and consists
/// only of lowercase ASCII letters and digits.
pub fn tokenize(text: &str) -> Vec<Token> {
    normalize_text(text)
        .split_ascii_whitespace()
        .map(str::to_owned)
        .collect()
}
