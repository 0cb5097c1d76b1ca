pub mod constants;

use constants::{TEST_FILES_DIRECTORY, TEST_OUTPUT_DIRECTORY};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

/// Path of a fixture under `tests/test_files`.
pub fn test_file_path(file_name: &str) -> PathBuf {
    TEST_FILES_DIRECTORY.join(file_name)
}

/// Writes `content` to a scratch file and returns its path.
///
/// File names must be unique per test since tests run in parallel.
pub fn write_scratch_file(file_name: &str, content: &[u8]) -> io::Result<PathBuf> {
    fs::create_dir_all(&*TEST_OUTPUT_DIRECTORY)?;

    let path = TEST_OUTPUT_DIRECTORY.join(file_name);
    fs::write(&path, content)?;

    Ok(path)
}

/// Gzip-compresses `content` into a scratch file and returns its path.
pub fn write_gzip_scratch_file(file_name: &str, content: &[u8]) -> io::Result<PathBuf> {
    fs::create_dir_all(&*TEST_OUTPUT_DIRECTORY)?;

    let path = TEST_OUTPUT_DIRECTORY.join(file_name);
    let mut encoder = GzEncoder::new(File::create(&path)?, Compression::default());
    encoder.write_all(content)?;
    encoder.finish()?;

    Ok(path)
}
