//! Token to audio file mapping.

use std::collections::BTreeMap;

use serde_json::Value;

/// Keys under which the mapping may be nested in a manifest document.
const MAPPING_KEYS: [&str; 3] = ["tokens", "mapping", "map"];

/// Read-only token map built once at startup.
///
/// A manifest that could not be fetched or parsed is empty and flagged, and
/// every lookup on it misses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioManifest {
    tokens: BTreeMap<String, String>,
    error: bool,
}

impl AudioManifest {
    pub fn new(tokens: BTreeMap<String, String>) -> Self {
        Self { tokens, error: false }
    }

    /// Manifest standing in for one that failed to load.
    pub fn failed() -> Self {
        Self {
            tokens: BTreeMap::new(),
            error: true,
        }
    }

    /// Parse a manifest document.
    ///
    /// Accepts `{"tokens": {...}}`, `{"mapping": {...}}`, `{"map": {...}}` or
    /// a bare object. Entries whose value is not a string are ignored.
    pub fn from_json(content: &str) -> Self {
        let Ok(Value::Object(root)) = serde_json::from_str::<Value>(content) else {
            return Self::failed();
        };

        let mapping = MAPPING_KEYS
            .iter()
            .find_map(|key| match root.get(*key) {
                Some(Value::Object(inner)) => Some(inner),
                _ => None,
            })
            .unwrap_or(&root);

        let tokens = mapping
            .iter()
            .filter_map(|(token, file)| file.as_str().map(|f| (token.clone(), f.to_string())))
            .collect();

        Self::new(tokens)
    }

    /// Whether loading failed.
    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.tokens.get(token).map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// File path for a token, joined onto `base`.
    pub fn resolve_path(&self, token: &str, base: &str) -> Option<String> {
        let file = self.get(token)?;
        let base = base.trim_end_matches('/');
        let file = file.trim_start_matches('/');
        if base.is_empty() {
            Some(file.to_string())
        } else {
            Some(format!("{base}/{file}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_shape() {
        let m = AudioManifest::from_json(r#"{"version":1,"tokens":{"month_4":"004_a_しがつ.wav"}}"#);
        assert!(!m.has_error());
        assert_eq!(m.len(), 1);
        assert_eq!(m.get("month_4"), Some("004_a_しがつ.wav"));
    }

    #[test]
    fn test_mapping_and_map_shapes() {
        let m = AudioManifest::from_json(r#"{"mapping":{"day_1":"d1.wav"}}"#);
        assert_eq!(m.get("day_1"), Some("d1.wav"));
        let m = AudioManifest::from_json(r#"{"map":{"day_2":"d2.wav"}}"#);
        assert_eq!(m.get("day_2"), Some("d2.wav"));
    }

    #[test]
    fn test_bare_object_ignores_non_strings() {
        let m = AudioManifest::from_json(r#"{"version":1,"pause_120":"pause.wav","weekday_1":"mon.wav"}"#);
        assert_eq!(m.len(), 2);
        assert!(m.contains("pause_120"));
        assert!(!m.contains("version"));
    }

    #[test]
    fn test_parse_failure_sets_error_flag() {
        for bad in ["", "not json", "[1,2]", "\"tokens\""] {
            let m = AudioManifest::from_json(bad);
            assert!(m.has_error(), "{bad}");
            assert!(m.is_empty());
            assert_eq!(m.get("month_1"), None);
        }
    }

    #[test]
    fn test_resolve_path() {
        let m = AudioManifest::from_json(r#"{"tokens":{"month_1":"/jan.wav"}}"#);
        assert_eq!(m.resolve_path("month_1", "/audio/"), Some("/audio/jan.wav".to_string()));
        assert_eq!(m.resolve_path("month_1", ""), Some("jan.wav".to_string()));
        assert_eq!(m.resolve_path("month_2", "/audio"), None);
    }
}
