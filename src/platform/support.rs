//! Codec-support query capability.
//!
//! Answers whether a container+codec MIME string can be decoded by the
//! current runtime. The static implementation wraps a fixed capability
//! table, seeded from the configuration or from a caps file.

use std::collections::HashSet;

pub trait TypeSupport {
    /// False when the runtime exposes no type-support query at all; the
    /// prober turns that into a user-visible initialization error.
    fn is_available(&self) -> bool {
        true
    }

    fn is_type_supported(&self, mime: &str) -> bool;
}

/// Runtime without any type-support query.
#[derive(Debug, Default)]
pub struct MissingTypeSupport;

impl TypeSupport for MissingTypeSupport {
    fn is_available(&self) -> bool {
        false
    }

    fn is_type_supported(&self, _mime: &str) -> bool {
        false
    }
}

/// Fixed table of supported type strings. Comparison ignores surrounding
/// whitespace but is otherwise exact, matching how capability tables are
/// usually written out.
#[derive(Debug, Clone, Default)]
pub struct StaticTypeSupport {
    supported: HashSet<String>,
}

impl StaticTypeSupport {
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            supported: types
                .into_iter()
                .map(|t| t.as_ref().trim().to_string())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.supported.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supported.is_empty()
    }
}

impl TypeSupport for StaticTypeSupport {
    fn is_type_supported(&self, mime: &str) -> bool {
        self.supported.contains(mime.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_after_trim() {
        let caps = StaticTypeSupport::new(["video/webm; codecs=\"vp9\""]);
        assert!(caps.is_type_supported("  video/webm; codecs=\"vp9\" "));
        assert!(!caps.is_type_supported("video/webm; codecs=\"vp8\""));
    }

    #[test]
    fn empty_table_supports_nothing() {
        let caps = StaticTypeSupport::default();
        assert!(caps.is_empty());
        assert!(!caps.is_type_supported("audio/mp4; codecs=\"ac-3\""));
    }
}
