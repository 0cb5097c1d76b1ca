use std::env;
use std::io::{self, BufWriter};
use std::process;
use token_tally::programs::{exit_with_error, word_frequencies};
use token_tally::EXIT_CODE_USAGE_ERROR;

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        let program_name = args.first().map_or("word-frequencies", String::as_str);
        eprintln!("Usage: {} <file_path>", program_name);
        process::exit(EXIT_CODE_USAGE_ERROR);
    }

    let stdout = io::stdout();
    if let Err(e) = word_frequencies(&args[1], BufWriter::new(stdout.lock())) {
        exit_with_error(e);
    }
}
