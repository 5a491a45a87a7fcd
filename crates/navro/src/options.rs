use std::borrow::Cow;

/// Tag key consulted for field names unless configured otherwise.
pub const DEFAULT_TAG_KEY: &str = "avro";

/// Knobs for a derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Which serialization tag supplies field names.
    pub tag_key: Cow<'static, str>,
    /// Indent the rendered schema.
    pub pretty: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tag_key: Cow::Borrowed(DEFAULT_TAG_KEY),
            pretty: false,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag_key(mut self, tag_key: impl Into<Cow<'static, str>>) -> Self {
        self.tag_key = tag_key.into();
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.tag_key, "avro");
        assert!(!options.pretty);
    }

    #[test]
    fn test_builders() {
        let options = Options::new().with_tag_key("json").with_pretty(true);
        assert_eq!(options.tag_key, "json");
        assert!(options.pretty);
    }
}
