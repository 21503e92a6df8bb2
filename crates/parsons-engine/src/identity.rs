//! Content-derived widget identifiers and scramble seeds.
//!
//! Both come from one SHA-256 digest of the puzzle source. The digest must be
//! identical across builds, platforms and toolchains.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

const WIDGET_PREFIX: &str = "parsons-";
const ID_HEX_LEN: usize = 10;
const SEED_HEX_LEN: usize = 8;

/// Stable DOM identifier for a rendered puzzle
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn content_digest(source: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(source.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn derive_identity(source: &str) -> WidgetId {
    let digest = content_digest(source);
    WidgetId(format!("{WIDGET_PREFIX}{}", &digest[..ID_HEX_LEN]))
}

/// An explicit seed wins; otherwise derive one from the source digest.
pub fn resolve_seed(explicit: Option<u64>, source: &str) -> u64 {
    if let Some(seed) = explicit {
        return seed;
    }
    let digest = content_digest(source);
    // 8 hex digits always fit in a u64
    u64::from_str_radix(&digest[..SEED_HEX_LEN], 16).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_identity_of_empty_source() {
        // sha256("") = e3b0c44298fc1c149afbf4c8996fb924...
        assert_eq!(derive_identity("").as_str(), "parsons-e3b0c44298");
    }

    #[test]
    fn test_seed_of_empty_source() {
        assert_eq!(resolve_seed(None, ""), 0xe3b0c442);
    }

    #[test]
    fn test_identity_is_stable() {
        let source = "print('hi')\nprint('bye')";
        assert_eq!(derive_identity(source), derive_identity(source));
        assert_eq!(derive_identity(source).as_str().len(), "parsons-".len() + 10);
    }

    #[test]
    fn test_identity_changes_with_content() {
        assert_ne!(derive_identity("a\nb"), derive_identity("b\na"));
    }

    #[test]
    fn test_explicit_seed_is_used_verbatim() {
        assert_eq!(resolve_seed(Some(42), "anything"), 42);
        assert_eq!(resolve_seed(Some(0), "anything"), 0);
    }

    #[test]
    fn test_derived_seed_is_deterministic() {
        let source = "x = 1\ny = 2";
        assert_eq!(resolve_seed(None, source), resolve_seed(None, source));
        assert!(resolve_seed(None, source) <= u32::MAX as u64);
    }
}
