#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// When set, object keys whose text fully parses as a decimal
    /// `i64` become integer keys instead of text keys.
    pub coerce_numeric_keys: bool,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_coerce_numeric_keys(mut self, coerce_numeric_keys: bool) -> Self {
        self.coerce_numeric_keys = coerce_numeric_keys;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            coerce_numeric_keys: true,
        }
    }
}
