use std::borrow::Cow;
use std::io::{self, Read};

use crate::error::Error;

/// The 8-byte magic sequence that opens every PNG stream.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Reader decorator that validates the leading bytes of the wrapped stream
/// against an expected signature while forwarding everything unmodified.
///
/// Validation is incremental: each `read` compares however much of the
/// not-yet-verified signature suffix that call delivered, so a signature
/// split across several short reads needs no buffering or look-ahead. Once
/// the whole signature has been consumed the reader is pure delegation for
/// the rest of its life.
///
/// A mismatch is surfaced as an [`io::ErrorKind::InvalidData`] error whose
/// source is [`Error::SignatureMismatch`]; the delegated bytes are already in
/// the caller's buffer at that point. The reader does not latch the failure,
/// but callers are expected to stop reading after it.
pub struct SignatureReader<R> {
    inner: R,
    signature: Cow<'static, [u8]>,
    checked: usize,
}

impl<R: Read> SignatureReader<R> {
    /// Wraps `inner`, expecting the stream to start with `signature`.
    ///
    /// An empty signature is accepted and makes the reader a pass-through
    /// from the very first call.
    pub fn new(inner: R, signature: impl Into<Cow<'static, [u8]>>) -> Self {
        Self {
            inner,
            signature: signature.into(),
            checked: 0,
        }
    }

    /// Wraps `inner`, expecting the stream to start with [`PNG_SIGNATURE`].
    pub const fn png(inner: R) -> Self {
        Self {
            inner,
            signature: Cow::Borrowed(&PNG_SIGNATURE),
            checked: 0,
        }
    }

    /// True once every signature byte has been delivered and matched.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.checked == self.signature.len()
    }

    #[must_use]
    pub const fn get_ref(&self) -> &R {
        &self.inner
    }

    pub const fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    #[must_use]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for SignatureReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;

        let remaining = &self.signature[self.checked..];
        if remaining.is_empty() {
            return Ok(n);
        }

        // Only bytes this call actually delivered are inspected; anything
        // past `n` is stale caller data.
        let l = n.min(remaining.len());
        let mismatch = if buf[..l] == remaining[..l] {
            None
        } else {
            Some(Error::SignatureMismatch {
                observed: Box::from(&buf[..l]),
                expected: Box::from(&remaining[..l]),
            })
        };

        // Advance past the compared window whatever the outcome, so later
        // calls check only the unseen suffix.
        self.checked += l;

        match mismatch {
            None => Ok(n),
            Some(err) => Err(io::Error::new(io::ErrorKind::InvalidData, err)),
        }
    }
}
