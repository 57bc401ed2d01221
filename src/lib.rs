pub mod decode;
pub mod error;
pub mod num;
pub mod options;
pub mod value;

use std::io::Read;

pub use crate::error::{Error, ErrorCode};
pub use crate::options::DecodeOptions;
pub use crate::value::{Key, Map, Value};

pub type Result<T> = std::result::Result<T, Error>;

/// Decodes a JSON text buffer. Empty input yields `Ok(None)`.
pub fn decode_str(input: &str) -> Result<Option<Value>> {
    decode_str_with_options(input, &DecodeOptions::default())
}

pub fn decode_str_with_options(input: &str, options: &DecodeOptions) -> Result<Option<Value>> {
    decode::decode_str(input, options)
}

/// Decodes a raw byte buffer; embedded NUL bytes in string values are
/// preserved. Empty input yields `Ok(None)`.
pub fn decode_slice(input: &[u8]) -> Result<Option<Value>> {
    decode_slice_with_options(input, &DecodeOptions::default())
}

pub fn decode_slice_with_options(input: &[u8], options: &DecodeOptions) -> Result<Option<Value>> {
    decode::decode_slice(input, options)
}

pub fn decode_reader<R: Read>(reader: R) -> Result<Option<Value>> {
    decode_reader_with_options(reader, &DecodeOptions::default())
}

pub fn decode_reader_with_options<R: Read>(
    reader: R,
    options: &DecodeOptions,
) -> Result<Option<Value>> {
    decode::decode_reader(reader, options)
}
