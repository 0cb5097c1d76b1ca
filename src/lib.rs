//! Word frequency and common word counting over plain-text files.
//!
//! Text is reduced to tokens made of lowercase ASCII letters and digits;
//! every other character separates tokens.

mod constants;
pub mod models;
pub mod programs;
pub mod types;
pub mod utils;

pub use constants::{
    EXIT_CODE_INPUT_ERROR, EXIT_CODE_USAGE_ERROR, FILE_DECODE_ERROR_MESSAGE, FILE_OPEN_ERROR_MESSAGE,
    STDIN_PATH_MARKER,
};
pub use models::Error;
pub use types::{OrderedTokenFrequencies, Token, TokenFrequency, TokenFrequencyMap};
pub use utils::{
    count_common_tokens, count_token_frequencies, normalize_text, read_text_file,
    sort_token_frequencies, tokenize, tokenize_file, write_token_frequencies,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
