use std::fmt::Write as _;
use std::io;

/// Result type used across the signature-validation helpers.
pub type Result<T> = std::result::Result<T, Error>;

/// High-level error type surfaced by the whole-stream checkers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O failure while reading from the underlying data source.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The leading bytes of the stream did not equal the expected signature.
    #[error("signature mismatch, got: {}, want: {}", hex(.observed), hex(.expected))]
    SignatureMismatch {
        observed: Box<[u8]>,
        expected: Box<[u8]>,
    },

    /// The stream ended before the full signature was delivered.
    #[error("stream ended inside the signature: needed {needed} bytes, got {got}")]
    Truncated { needed: usize, got: usize },
}

impl Error {
    /// Recovers a [`Error::SignatureMismatch`] that was carried through an
    /// [`io::Error`] by a `Read` implementation; any other I/O error is kept
    /// as [`Error::Io`].
    #[must_use]
    pub fn from_read(err: io::Error) -> Self {
        match err.downcast::<Self>() {
            Ok(inner) => inner,
            Err(err) => Self::Io(err),
        }
    }
}

/// Space-separated lowercase hex, e.g. `89 50 4e 47`.
fn hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{byte:02x}");
    }
    out
}
