//! The two command-line programs, as functions over an output writer.

use crate::constants::STDIN_PATH_MARKER;
use crate::utils::{
    count_common_tokens, count_token_frequencies, sort_token_frequencies, tokenize_file,
    write_token_frequencies,
};
use crate::Error;
use log::{error, info};
use std::io::{self, Write};
use std::path::Path;
use std::process;

/// Prints every token of the file with its frequency, most frequent first.
pub fn word_frequencies<P: AsRef<Path>, W: Write>(path: P, writer: W) -> Result<(), Error> {
    let tokens = tokenize_file(path)?;
    let frequencies = count_token_frequencies(&tokens);

    info!("Sorting {} distinct tokens...", frequencies.len());
    let sorted_frequencies = sort_token_frequencies(frequencies);

    write_token_frequencies(writer, &sorted_frequencies)
}

/// Prints the number of distinct tokens the two files have in common.
///
/// Stops at the first file which cannot be read; the second file is not
/// touched if the first one fails.
pub fn common_tokens<P: AsRef<Path>, W: Write>(
    first_path: P,
    second_path: P,
    mut writer: W,
) -> Result<(), Error> {
    let (first_path, second_path) = (first_path.as_ref(), second_path.as_ref());

    if first_path == Path::new(STDIN_PATH_MARKER) && second_path == Path::new(STDIN_PATH_MARKER)
    {
        return Err(Error::UsageError(
            "standard input can only be used for one of the two files".to_string(),
        ));
    }

    let first_frequencies = count_token_frequencies(&tokenize_file(first_path)?);
    let second_frequencies = count_token_frequencies(&tokenize_file(second_path)?);

    let common_token_count = count_common_tokens(&first_frequencies, &second_frequencies);
    info!("Found {} common tokens", common_token_count);

    writeln!(writer, "{}", common_token_count)?;
    writer.flush()?;

    Ok(())
}

/// Writes the diagnostic for a failed run and returns the exit code to use.
///
/// Unreadable inputs print their diagnostic line to `stdout`; anything else
/// goes to `stderr`. Write failures, such as a closed pipe, are ignored.
pub fn report_error<O: Write, E: Write>(e: &Error, mut stdout: O, mut stderr: E) -> i32 {
    let _ = if e.is_input_error() {
        writeln!(stdout, "{}", e.user_message())
    } else {
        writeln!(stderr, "{}", e)
    };

    e.exit_code()
}

/// Reports a failed run and terminates the process.
pub fn exit_with_error(e: Error) -> ! {
    error!("{}", e);

    let exit_code = report_error(&e, io::stdout(), io::stderr());
    process::exit(exit_code)
}
