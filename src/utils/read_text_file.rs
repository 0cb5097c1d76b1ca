use crate::constants::{GZIP_FILE_EXTENSION, STDIN_PATH_MARKER};
use crate::Error;
use flate2::read::MultiGzDecoder;
use log::debug;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads the entire content of a text file as UTF-8.
///
/// A path of `-` reads from standard input. Paths ending in `.gz` are
/// decompressed before decoding. The file handle is released before this
/// function returns, on both the success and the error paths.
pub fn read_text_file(path: &Path) -> Result<String, Error> {
    let bytes = if path == Path::new(STDIN_PATH_MARKER) {
        debug!("Reading text from standard input");

        let mut bytes = Vec::new();
        io::stdin().lock().read_to_end(&mut bytes)?;
        bytes
    } else {
        read_file_bytes(path)?
    };

    debug!("Read {} bytes from {}", bytes.len(), path.display());

    String::from_utf8(bytes).map_err(|_| Error::FileDecodeError {
        path: path.to_path_buf(),
    })
}

fn read_file_bytes(path: &Path) -> Result<Vec<u8>, Error> {
    let open_error = |source: io::Error| Error::FileOpenError {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(open_error)?;

    if file.metadata().map_err(open_error)?.is_dir() {
        return Err(open_error(io::Error::new(
            io::ErrorKind::Other,
            "is a directory",
        )));
    }

    let mut bytes = Vec::new();

    if is_gzip_path(path) {
        debug!("Decompressing {}", path.display());
        MultiGzDecoder::new(file).read_to_end(&mut bytes)?;
    } else {
        file.read_to_end(&mut bytes)?;
    }

    Ok(bytes)
}

fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .map_or(false, |extension| extension == GZIP_FILE_EXTENSION)
}
