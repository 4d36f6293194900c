use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::types::FieldRecord;

/// Custom disambiguation over the filtered candidates
pub type SelectFn = dyn for<'a> Fn(&[&'a FieldRecord]) -> Option<&'a FieldRecord> + Send + Sync;

/// How one field is picked when several candidates survive filtering.
///
/// Candidates are presented in declared field order.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSelector {
    #[default]
    First,
    Last,
    /// Zero-based index into the candidates
    Nth(usize),
    /// Only available when building definitions in code
    #[serde(skip)]
    Custom(Arc<SelectFn>),
}

impl FieldSelector {
    pub fn custom<F>(f: F) -> Self
    where
        F: for<'a> Fn(&[&'a FieldRecord]) -> Option<&'a FieldRecord> + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    pub fn select<'a>(&self, candidates: &[&'a FieldRecord]) -> Option<&'a FieldRecord> {
        match self {
            Self::First => candidates.first().copied(),
            Self::Last => candidates.last().copied(),
            Self::Nth(n) => candidates.get(*n).copied(),
            Self::Custom(f) => f(candidates),
        }
    }
}

impl fmt::Debug for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("First"),
            Self::Last => f.write_str("Last"),
            Self::Nth(n) => f.debug_tuple("Nth").field(n).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> Vec<FieldRecord> {
        vec![
            FieldRecord::new("a", "System.Int32", 0x10),
            FieldRecord::new("b", "System.Int32", 0x18),
            FieldRecord::new("c", "System.Int32", 0x20),
        ]
    }

    #[test]
    fn test_builtin_selectors() {
        let fields = fields();
        let candidates: Vec<_> = fields.iter().collect();

        assert_eq!(FieldSelector::First.select(&candidates).unwrap().name, "a");
        assert_eq!(FieldSelector::Last.select(&candidates).unwrap().name, "c");
        assert_eq!(FieldSelector::Nth(1).select(&candidates).unwrap().name, "b");
        assert!(FieldSelector::Nth(3).select(&candidates).is_none());
    }

    #[test]
    fn test_custom_selector() {
        let fields = fields();
        let candidates: Vec<_> = fields.iter().collect();

        let highest = FieldSelector::custom(|c| c.iter().copied().max_by_key(|f| f.offset));
        assert_eq!(highest.select(&candidates).unwrap().offset, 0x20);

        let never = FieldSelector::custom(|_| None);
        assert!(never.select(&candidates).is_none());
    }

    #[test]
    fn test_deserialize_selector() {
        let first: FieldSelector = serde_json::from_str(r#""first""#).unwrap();
        assert!(matches!(first, FieldSelector::First));

        let nth: FieldSelector = serde_json::from_str(r#"{"nth":2}"#).unwrap();
        assert!(matches!(nth, FieldSelector::Nth(2)));

        assert!(serde_json::from_str::<FieldSelector>(r#""custom""#).is_err());
    }
}
