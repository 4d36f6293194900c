use serde::{Deserialize, Serialize};

/// Default prefix of compiler/obfuscator-generated type names
pub const DEFAULT_ANONYMOUS_TYPE_PREFIX: &str = "-.GClass";

/// Default prefix of generated field names
pub const DEFAULT_ANONYMOUS_FIELD_PREFIX: &str = "gClass";

/// Reserved prefixes used by the unknown-type / unknown-field-name patterns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchMarkers {
    pub anonymous_type_prefix: String,
    pub anonymous_field_prefix: String,
}

impl Default for MatchMarkers {
    fn default() -> Self {
        Self {
            anonymous_type_prefix: DEFAULT_ANONYMOUS_TYPE_PREFIX.to_string(),
            anonymous_field_prefix: DEFAULT_ANONYMOUS_FIELD_PREFIX.to_string(),
        }
    }
}

impl MatchMarkers {
    pub fn is_anonymous_type(&self, type_name: &str) -> bool {
        type_name.starts_with(&self.anonymous_type_prefix)
    }

    pub fn is_anonymous_field(&self, field_name: &str) -> bool {
        field_name.starts_with(&self.anonymous_field_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_markers() {
        let markers = MatchMarkers::default();
        assert!(markers.is_anonymous_type("-.GClass1A2B"));
        assert!(!markers.is_anonymous_type("EFT.Profile"));
        assert!(markers.is_anonymous_field("gClass0042_0"));
        assert!(!markers.is_anonymous_field("_profile"));
    }

    #[test]
    fn test_partial_markers_fall_back_to_defaults() {
        let markers: MatchMarkers =
            serde_json::from_str(r#"{"anonymous_type_prefix":"-.Obf"}"#).unwrap();
        assert_eq!(markers.anonymous_type_prefix, "-.Obf");
        assert_eq!(markers.anonymous_field_prefix, DEFAULT_ANONYMOUS_FIELD_PREFIX);
    }
}
