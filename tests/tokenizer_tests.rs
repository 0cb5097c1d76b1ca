use test_utils::{test_file_path, write_gzip_scratch_file, write_scratch_file};
use token_tally::{tokenize, tokenize_file, Error};

fn adversarial_texts() -> Vec<String> {
    let every_ascii_char: String = (0u8..=0x7f).map(char::from).collect();

    vec![
        every_ascii_char.clone(),
        every_ascii_char.chars().rev().collect(),
        "tab\x0bvertical\x1cfile\x1dgroup\x1erecord\x1funit".to_string(),
        "no\u{a0}break\u{feff}bom\u{2028}line\u{3000}ideographic".to_string(),
        "MiXeD-CaSe_with__underscores, émojis 🎉 and ∑ symbols!?".to_string(),
        "Ελληνικά and Русский with 中文 plus 123 عربى ٣٤٥ digits".to_string(),
        "It's 5 o'clock -- somewhere! Ça va?".to_string(),
        "\r\n\t  \0\x7f".to_string(),
        String::new(),
    ]
}

#[cfg(test)]
mod tokenizer_tests {
    use super::*;

    #[test]
    fn test_tokenize_example_sentence() {
        let tokens = tokenize("The cat sat on the mat. THE CAT RAN.");
        assert_eq!(
            tokens,
            vec!["the", "cat", "sat", "on", "the", "mat", "the", "cat", "ran"]
        );
    }

    #[test]
    fn test_tokenize_with_multiple_spaces() {
        let tokens = tokenize("Netflix    and      Nvidia");
        assert_eq!(tokens, vec!["netflix", "and", "nvidia"]);
    }

    #[test]
    fn test_tokenize_with_mixed_whitespace() {
        let text = "This  is\n   a test\tstring\r\n\nwith\x0cform feeds";
        let tokens = tokenize(text);
        assert_eq!(
            tokens,
            vec!["this", "is", "a", "test", "string", "with", "form", "feeds"]
        );
    }

    #[test]
    fn test_tokenize_keeps_digits() {
        let tokens = tokenize("Route 66 opened in 1926; R2D2 approves.");
        assert_eq!(
            tokens,
            vec!["route", "66", "opened", "in", "1926", "r2d2", "approves"]
        );
    }

    #[test]
    fn test_tokenize_drops_non_ascii_letters() {
        let tokens = tokenize("naïve Ölkännchen 東京 42");
        assert_eq!(tokens, vec!["na", "ve", "lk", "nnchen", "42"]);
    }

    #[test]
    fn test_tokens_are_lowercase_ascii_alphanumeric() {
        for text in adversarial_texts() {
            for token in tokenize(&text) {
                assert!(!token.is_empty());
                assert!(
                    token
                        .chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                    "unexpected token {:?} from {:?}",
                    token,
                    text
                );
            }
        }
    }

    #[test]
    fn test_tokenize_is_idempotent_on_normalized_text() {
        for text in adversarial_texts() {
            let tokens = tokenize(&text);
            let rejoined = tokens.join(" ");

            assert_eq!(tokenize(&rejoined), tokens, "not idempotent for {:?}", text);
        }
    }

    #[test]
    fn test_control_and_unicode_separators_split_tokens() {
        for separator in ['\x0b', '\x1c', '\x1d', '\x1e', '\x1f', '\u{a0}', '\u{feff}'] {
            let text = format!("Left{}RIGHT", separator);

            assert_eq!(tokenize(&text), vec!["left", "right"], "separator {:?}", separator);
        }
    }

    #[test]
    fn test_every_ascii_char_is_token_or_separator() {
        for byte in 0u8..=0x7f {
            let c = byte as char;
            let tokens = tokenize(&format!("x{}y", c));

            if c.is_ascii_alphanumeric() {
                assert_eq!(tokens, vec![format!("x{}y", c.to_ascii_lowercase())]);
            } else {
                assert_eq!(tokens, vec!["x", "y"], "char {:?}", c);
            }
        }
    }

    #[test]
    fn test_tokenize_file_with_mixed_content() {
        let tokens = tokenize_file(test_file_path("mixed_content.txt")).unwrap();
        assert_eq!(
            tokens,
            vec![
                "caf", "au", "lait", "costs", "3", "or", "4", "dollars", "na", "ve", "pricing",
                "e", "mail", "someone", "example", "com", "call", "555", "0100", "text", "n",
                "c", "d", "w", "rds", "ascii", "words", "tabs", "and", "windows", "line",
                "endings"
            ]
        );
    }

    #[test]
    fn test_tokenize_file_with_crlf_line_endings() {
        let tokens = tokenize_file(test_file_path("crlf.txt")).unwrap();
        assert_eq!(tokens, vec!["windows", "line", "endings"]);
    }

    #[test]
    fn test_tokenize_empty_file() {
        let tokens = tokenize_file(test_file_path("empty.txt")).unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_tokenize_missing_file() {
        let result = tokenize_file(test_file_path("does_not_exist.txt"));

        match result {
            Err(e @ Error::FileOpenError { .. }) => {
                assert_eq!(e.user_message(), "Cannot open the file");
            }
            other => panic!("expected FileOpenError, got {:?}", other),
        }
    }

    #[test]
    fn test_tokenize_invalid_utf8_file() {
        let result = tokenize_file(test_file_path("invalid_utf8.bin"));

        assert!(matches!(result, Err(Error::FileDecodeError { .. })));
    }

    #[test]
    fn test_tokenize_gzip_file() {
        let path = write_gzip_scratch_file(
            "tokenize_gzip_file.txt.gz",
            b"Compressed TEXT, compressed text.",
        )
        .expect("Failed to write gzip scratch file");

        let tokens = tokenize_file(&path).unwrap();
        assert_eq!(tokens, vec!["compressed", "text", "compressed", "text"]);
    }

    #[test]
    fn test_tokenize_corrupt_gzip_file() {
        let path = write_scratch_file("tokenize_corrupt_gzip_file.gz", b"not gzip at all")
            .expect("Failed to write scratch file");

        let result = tokenize_file(&path);
        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
