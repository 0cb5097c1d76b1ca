use crate::types::Token;
use crate::utils::{read_text_file, tokenize};
use crate::Error;
use log::info;
use std::path::Path;

/// Reads a file and tokenizes its full content.
///
/// # Errors
/// * `Error::FileOpenError` if the file does not exist or cannot be opened.
/// * `Error::FileDecodeError` if the content is not valid UTF-8.
pub fn tokenize_file<P: AsRef<Path>>(path: P) -> Result<Vec<Token>, Error> {
    let path = path.as_ref();
    let text = read_text_file(path)?;
    let tokens = tokenize(&text);

    info!("Tokenized {} into {} tokens", path.display(), tokens.len());

    Ok(tokens)
}
