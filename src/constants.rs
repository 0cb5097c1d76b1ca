/// Diagnostic printed to stdout when an input file cannot be opened.
pub const FILE_OPEN_ERROR_MESSAGE: &str = "Cannot open the file";

/// Diagnostic printed to stdout when an input file is not valid UTF-8.
pub const FILE_DECODE_ERROR_MESSAGE: &str = "Cannot decode the file";

/// Path argument which reads the text from standard input.
pub const STDIN_PATH_MARKER: &str = "-";

/// Inputs with this extension are decompressed before decoding.
pub const GZIP_FILE_EXTENSION: &str = "gz";

/// Input could not be opened, decoded or the output could not be written.
pub const EXIT_CODE_INPUT_ERROR: i32 = 1;

pub const EXIT_CODE_USAGE_ERROR: i32 = 2;
