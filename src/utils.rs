pub mod count_common_tokens;
pub mod count_token_frequencies;
pub mod read_text_file;
pub mod sort_token_frequencies;
pub mod tokenize;
pub mod tokenize_file;
pub mod write_token_frequencies;

pub use count_common_tokens::count_common_tokens;
pub use count_token_frequencies::count_token_frequencies;
pub use read_text_file::read_text_file;
pub use sort_token_frequencies::sort_token_frequencies;
pub use tokenize::{normalize_text, tokenize};
pub use tokenize_file::tokenize_file;
pub use write_token_frequencies::write_token_frequencies;
