use std::fs;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use sigstream::{Error, PNG_SIGNATURE, SignatureReader, check_file};

fn write_temp(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

fn png_bytes(payload: &[u8]) -> Vec<u8> {
    let mut data = PNG_SIGNATURE.to_vec();
    data.extend_from_slice(payload);
    data
}

#[test]
fn accepts_a_png_prefixed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp(&dir, "ok.png", &png_bytes(b"IHDR and friends"));
    check_file(&path).unwrap();
}

#[test]
fn rejects_a_file_with_foreign_leading_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp(&dir, "fake.png", b"GIF89a not a png");
    let err = check_file(&path).unwrap_err();
    assert!(matches!(err, Error::SignatureMismatch { .. }));
    assert!(
        err.to_string().ends_with("want: 89 50 4e 47 0d 0a 1a 0a"),
        "unexpected message: {err}"
    );
}

#[test]
fn flags_truncated_and_empty_files() {
    let dir = tempfile::tempdir().unwrap();

    let short = write_temp(&dir, "short.png", &PNG_SIGNATURE[..5]);
    let err = check_file(&short).unwrap_err();
    assert!(matches!(err, Error::Truncated { needed: 8, got: 5 }));

    let empty = write_temp(&dir, "empty.png", b"");
    let err = check_file(&empty).unwrap_err();
    assert!(matches!(err, Error::Truncated { needed: 8, got: 0 }));
}

#[test]
fn missing_file_surfaces_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = check_file(dir.path().join("absent.png")).unwrap_err();
    assert!(matches!(err, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound));
}

#[test]
fn wrapped_file_passes_full_content_through() {
    let dir = tempfile::tempdir().unwrap();
    let content = png_bytes(&[0xAB; 4096]);
    let path = write_temp(&dir, "big.png", &content);

    let mut reader = SignatureReader::png(File::open(&path).unwrap());
    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();
    assert_eq!(out, content);
    assert!(reader.is_verified());
}

#[test]
fn small_buffer_reads_validate_across_calls() {
    let dir = tempfile::tempdir().unwrap();
    let content = png_bytes(b"chunked");
    let path = write_temp(&dir, "chunked.png", &content);

    let mut reader = SignatureReader::png(File::open(&path).unwrap());
    let mut out = Vec::new();
    let mut buf = [0_u8; 3];
    loop {
        let n = reader.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        out.extend_from_slice(&buf[..n]);
    }
    assert_eq!(out, content);
}
