use std::env;
use std::io;
use std::process;
use token_tally::programs::{exit_with_error, common_tokens};
use token_tally::EXIT_CODE_USAGE_ERROR;

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        let program_name = args.first().map_or("common-tokens", String::as_str);
        eprintln!("Usage: {} <file_path_1> <file_path_2>", program_name);
        process::exit(EXIT_CODE_USAGE_ERROR);
    }

    if let Err(e) = common_tokens(&args[1], &args[2], io::stdout().lock()) {
        exit_with_error(e);
    }
}
