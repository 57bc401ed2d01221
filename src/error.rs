use memchr::memchr_iter;
use serde_json::error::Category;
use thiserror::Error;

/// Coarse failure class, each with a stable numeric value for hosts
/// that report codes instead of enums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Io,
    Syntax,
    Data,
    Eof,
}

impl ErrorCode {
    pub const fn as_u32(self) -> u32 {
        match self {
            ErrorCode::Io => 1,
            ErrorCode::Syntax => 2,
            ErrorCode::Data => 3,
            ErrorCode::Eof => 4,
        }
    }

    fn from_category(category: Category) -> Self {
        match category {
            Category::Io => ErrorCode::Io,
            Category::Syntax => ErrorCode::Syntax,
            Category::Data => ErrorCode::Data,
            Category::Eof => ErrorCode::Eof,
        }
    }
}

/// A structural decode failure surfaced from the reader.
///
/// Empty input is not an error (the entry points return `Ok(None)`),
/// and numeric-key coercion never fails; the only error sources are
/// malformed input and reader I/O.
#[derive(Debug, Clone, Error)]
#[error("decode error: {message} code: {} at position: {offset}", self.code.as_u32())]
pub struct Error {
    pub message: String,
    pub code: ErrorCode,
    pub offset: usize,
}

impl Error {
    pub(crate) fn structural(err: &serde_json::Error, input: &[u8]) -> Self {
        Self {
            message: err.to_string(),
            code: ErrorCode::from_category(err.classify()),
            offset: byte_offset(input, err.line(), err.column()),
        }
    }

    pub(crate) fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: ErrorCode::Io,
            offset: 0,
        }
    }
}

/// Maps the reader's 1-based line/column onto a byte offset into the
/// original buffer, clamped to the buffer length.
fn byte_offset(input: &[u8], line: usize, column: usize) -> usize {
    if line <= 1 {
        return column.saturating_sub(1).min(input.len());
    }
    let mut newlines = 0;
    for pos in memchr_iter(b'\n', input) {
        newlines += 1;
        if newlines == line - 1 {
            return (pos + column.max(1)).min(input.len());
        }
    }
    input.len()
}
