pub mod check;
pub mod error;
pub mod logger;
pub mod reader;

pub use crate::check::{check_file, check_reader, check_reader_with};
pub use crate::error::{Error, Result};
pub use crate::reader::{PNG_SIGNATURE, SignatureReader};
