use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::reader::{PNG_SIGNATURE, SignatureReader};

/// Checks that `reader` starts with the PNG signature.
///
/// Consumes at most the signature-sized prefix of the stream, so a borrowed
/// reader can keep being used afterwards.
///
/// # Errors
///
/// Returns [`Error::SignatureMismatch`] when the leading bytes differ,
/// [`Error::Truncated`] when the stream ends inside the signature, and
/// [`Error::Io`] when the underlying read fails.
pub fn check_reader<R: Read>(reader: R) -> Result<()> {
    check_reader_with(reader, &PNG_SIGNATURE)
}

/// Checks that `reader` starts with `signature`.
///
/// # Errors
///
/// Same failure modes as [`check_reader`].
pub fn check_reader_with<R: Read>(reader: R, signature: &[u8]) -> Result<()> {
    let needed = signature.len();
    let mut validated = SignatureReader::new(reader, signature.to_vec());
    let mut buf = vec![0_u8; needed];
    let mut got = 0;
    while got < needed {
        match validated.read(&mut buf[got..]) {
            Ok(0) => return Err(Error::Truncated { needed, got }),
            Ok(n) => got += n,
            Err(err) => return Err(Error::from_read(err)),
        }
    }
    Ok(())
}

/// Opens `path` and checks its leading bytes against the PNG signature.
///
/// # Errors
///
/// Same failure modes as [`check_reader`], plus an [`Error::Io`] if the file
/// cannot be opened.
pub fn check_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let file = File::open(path)?;
    check_reader(file)
}
